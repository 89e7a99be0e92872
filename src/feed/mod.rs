pub mod client;
pub mod error;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub event_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repo: Repo,
    #[serde(default)]
    pub payload: Value,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Repo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

// A missing or null envelope field must not sink the rest of the feed.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Event {
    pub fn new(event_type: &str, repo: &str, payload: Value) -> Self {
        Self {
            event_type: event_type.to_string(),
            repo: Repo {
                name: repo.to_string(),
            },
            payload,
            created_at: None,
        }
    }

    pub fn kind(&self) -> Option<EventKind> {
        EventKind::from_tag(&self.event_type)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Push,
    Issues,
    PullRequest,
    Watch,
    Fork,
    Create,
    Delete,
    Release,
    PullRequestReviewComment,
    IssueComment,
}

impl EventKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        let kind = match tag {
            "PushEvent" => Self::Push,
            "IssuesEvent" => Self::Issues,
            "PullRequestEvent" => Self::PullRequest,
            "WatchEvent" => Self::Watch,
            "ForkEvent" => Self::Fork,
            "CreateEvent" => Self::Create,
            "DeleteEvent" => Self::Delete,
            "ReleaseEvent" => Self::Release,
            "PullRequestReviewCommentEvent" => Self::PullRequestReviewComment,
            "IssueCommentEvent" => Self::IssueComment,
            _ => return None,
        };
        Some(kind)
    }
}
