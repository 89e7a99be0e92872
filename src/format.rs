use crate::feed::{Event, EventKind, null_as_default};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

// Missing or null fields read as zero values; only a mistyped field skips the event.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PushPayload {
    #[serde(deserialize_with = "null_as_default")]
    size: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NumberedItem {
    #[serde(deserialize_with = "null_as_default")]
    number: i64,
    #[serde(deserialize_with = "null_as_default")]
    title: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IssuesPayload {
    #[serde(deserialize_with = "null_as_default")]
    action: String,
    #[serde(deserialize_with = "null_as_default")]
    issue: NumberedItem,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PullRequestPayload {
    #[serde(deserialize_with = "null_as_default")]
    action: String,
    #[serde(deserialize_with = "null_as_default")]
    pull_request: NumberedItem,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WatchPayload {
    #[serde(deserialize_with = "null_as_default")]
    action: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ForkPayload {
    forkee: Option<Forkee>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Forkee {
    full_name: Option<String>,
}

pub fn format_event(ev: &Event) -> Option<String> {
    let repo = ev.repo.name.as_str();
    let line = match ev.kind()? {
        EventKind::Push => {
            let p: PushPayload = decode_payload(ev)?;
            format!("Pushed {} commit(s) to {repo}", p.size)
        }
        EventKind::Issues => {
            let p: IssuesPayload = decode_payload(ev)?;
            format!(
                "{} an issue #{} \"{}\" in {repo}",
                title_case(&p.action),
                p.issue.number,
                p.issue.title
            )
        }
        EventKind::PullRequest => {
            let p: PullRequestPayload = decode_payload(ev)?;
            format!(
                "{} a pull request #{} \"{}\" in {repo}",
                title_case(&p.action),
                p.pull_request.number,
                p.pull_request.title
            )
        }
        EventKind::Watch => {
            let p: WatchPayload = decode_payload(ev)?;
            if p.action.eq_ignore_ascii_case("started") {
                format!("Starred {repo}")
            } else {
                format!("Watch event on {repo}")
            }
        }
        EventKind::Fork => {
            let p: ForkPayload = decode_payload(ev)?;
            let target = p
                .forkee
                .and_then(|f| f.full_name)
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| repo.to_string());
            format!("Forked {repo} → {target}")
        }
        EventKind::Create => format!("Created something in {repo}"),
        EventKind::Delete => format!("Deleted something in {repo}"),
        EventKind::Release => format!("Published or edited a release in {repo}"),
        EventKind::PullRequestReviewComment => format!("Commented on a PR review in {repo}"),
        EventKind::IssueComment => format!("Commented on an issue in {repo}"),
    };
    Some(line)
}

fn decode_payload<T: DeserializeOwned + Default>(ev: &Event) -> Option<T> {
    if ev.payload.is_null() {
        return Some(T::default());
    }
    match T::deserialize(&ev.payload) {
        Ok(p) => Some(p),
        Err(err) => {
            debug!(
                event_type = %ev.event_type,
                repo = %ev.repo.name,
                %err,
                "skipping event with malformed payload"
            );
            None
        }
    }
}

pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}
