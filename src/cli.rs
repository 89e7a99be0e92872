use crate::activity::{ActivityCommand, show_activity};
use anyhow::{Result, bail};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "github-activity", version)]
#[command(
    about = "Show a GitHub user's recent public activity",
    long_about = "github-activity fetches a user's public event feed from the GitHub API and prints one line per recognized event, newest first."
)]
#[command(override_usage = "github-activity [OPTIONS] <USERNAME>")]
#[command(after_help = "Examples:
  github-activity torvalds
  github-activity --type=PushEvent --n=10 kamranahmedse")]
#[command(after_long_help = "Examples:
  github-activity torvalds
  github-activity --type=PushEvent --n=10 kamranahmedse
  GITHUB_TOKEN=... github-activity octocat
  github-activity --completion zsh > ~/.zsh/completions/_github-activity
  github-activity --man > github-activity.1

Environment:
  GITHUB_TOKEN          Bearer token sent when set (variable name configurable)
  GITHUB_ACTIVITY_LOG   Diagnostic log filter, e.g. debug")]
struct Cli {
    #[arg(
        value_name = "USERNAME",
        help = "GitHub username",
        required_unless_present_any = ["completion", "man"]
    )]
    username: Option<String>,
    #[arg(
        long = "type",
        value_name = "TAG",
        help = "Filter by event type (e.g. PushEvent, IssuesEvent); blank shows all"
    )]
    event_type: Option<String>,
    #[arg(
        long = "n",
        value_name = "N",
        allow_negative_numbers = true,
        help = "Max number of events to show, clamped to 1-100 [default: 30]"
    )]
    limit: Option<i64>,
    #[arg(
        long,
        value_name = "PATH",
        help = "Config file (default: $XDG_CONFIG_HOME/github-activity/config.toml)"
    )]
    config: Option<PathBuf>,
    #[arg(long, value_name = "URL", hide = true)]
    api_url: Option<String>,
    #[arg(
        long,
        value_enum,
        value_name = "SHELL",
        exclusive = true,
        help = "Print a shell completion script and exit"
    )]
    completion: Option<Shell>,
    #[arg(long, exclusive = true, help = "Print a roff man page and exit")]
    man: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }
    if cli.man {
        let man = clap_mangen::Man::new(Cli::command());
        man.render(&mut io::stdout())?;
        return Ok(());
    }

    let Some(username) = cli.username else {
        bail!("missing USERNAME");
    };
    let cmd = ActivityCommand {
        username,
        event_type: cli.event_type,
        limit: cli.limit,
        config: cli.config,
        api_url: cli.api_url,
    };
    show_activity(&cmd, &mut io::stdout().lock())?;
    Ok(())
}
