use crate::feed::Event;
use crate::feed::error::FetchError;
use chrono::{DateTime, Local, TimeZone, Utc};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::header::USER_AGENT;
use std::fmt::Display;
use std::io::Read;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const CLIENT_USER_AGENT: &str = "github-activity-cli/1.0";

const ERROR_BODY_LIMIT: u64 = 512;
const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

pub struct FeedClient {
    http: Client,
    base_url: String,
    token_env: Option<String>,
}

impl FeedClient {
    /// `token_env` names the variable holding a bearer token. It is read each time a request
    /// is built; unset or blank means the request goes out unauthenticated.
    pub fn new(base_url: &str, token_env: Option<&str>) -> Result<Self, FetchError> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token_env: token_env.map(str::to_string),
        })
    }

    pub fn events_url(&self, user: &str) -> String {
        format!("{}/users/{}/events", self.base_url, user)
    }

    pub fn fetch_events(&self, user: &str) -> Result<Vec<Event>, FetchError> {
        let url = self.events_url(user);
        debug!(%url, "requesting events");

        let mut req = self.http.get(&url).header(USER_AGENT, CLIENT_USER_AGENT);
        if let Some(token) = self.bearer_token() {
            debug!("attaching bearer token");
            req = req.bearer_auth(token);
        }

        let resp = req.send()?;
        debug!(status = %resp.status(), "received response");
        let resp = classify(resp)?;

        let body = resp.text()?;
        let events: Vec<Event> = serde_json::from_str(&body)?;
        debug!(count = events.len(), "decoded events");
        Ok(events)
    }

    fn bearer_token(&self) -> Option<String> {
        let name = self.token_env.as_deref()?;
        std::env::var(name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

fn classify(resp: Response) -> Result<Response, FetchError> {
    let status = resp.status();
    if status == StatusCode::NOT_FOUND {
        return Err(FetchError::NotFound);
    }
    if status == StatusCode::FORBIDDEN && header_value(&resp, RATE_LIMIT_REMAINING) == Some("0") {
        let resets_at =
            header_value(&resp, RATE_LIMIT_RESET).and_then(|raw| format_reset(raw, &Local));
        return Err(FetchError::RateLimited { resets_at });
    }
    if !status.is_success() {
        let mut body = Vec::new();
        // Best effort: an unreadable body still yields the status.
        let _ = resp.take(ERROR_BODY_LIMIT).read_to_end(&mut body);
        return Err(FetchError::Api {
            status: status.to_string(),
            body: String::from_utf8_lossy(&body).trim().to_string(),
        });
    }
    Ok(resp)
}

fn header_value<'a>(resp: &'a Response, name: &str) -> Option<&'a str> {
    resp.headers().get(name).and_then(|v| v.to_str().ok())
}

pub(crate) fn format_reset<Tz>(raw: &str, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let secs: i64 = raw.trim().parse().ok()?;
    let at = DateTime::<Utc>::from_timestamp(secs, 0)?;
    Some(
        at.with_timezone(tz)
            .format("%a, %d %b %Y %H:%M:%S %Z")
            .to_string(),
    )
}
