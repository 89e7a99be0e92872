use crate::config;
use crate::feed::client::FeedClient;
use crate::render::{self, Limit, RenderSummary};
use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ActivityCommand {
    pub username: String,
    pub event_type: Option<String>,
    pub limit: Option<i64>,
    pub config: Option<PathBuf>,
    pub api_url: Option<String>,
}

// Flags win over the config file, which wins over built-in defaults.
pub fn show_activity<W: Write>(cmd: &ActivityCommand, out: &mut W) -> Result<RenderSummary> {
    let cfg = config::load_config(cmd.config.as_deref())?;
    let base_url = cmd.api_url.as_deref().unwrap_or(&cfg.base_url);
    let limit = cmd
        .limit
        .map(Limit::clamped)
        .or(cfg.limit)
        .unwrap_or_default();
    let filter = cmd.event_type.as_deref().filter(|t| !t.is_empty());
    debug!(user = %cmd.username, ?filter, limit = limit.get(), "showing activity");

    let client = FeedClient::new(base_url, Some(&cfg.token_env))?;
    let events = client.fetch_events(&cmd.username)?;
    let summary = render::render(&events, filter, limit, out)?;
    Ok(summary)
}
