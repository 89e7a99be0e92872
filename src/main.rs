use std::process::ExitCode;

fn main() -> ExitCode {
    github_activity::logging::init();
    match github_activity::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
