use crate::feed::Event;
use crate::format::format_event;
use std::io::{self, Write};
use tracing::debug;

pub const DEFAULT_LIMIT: usize = 30;
const MIN_LIMIT: i64 = 1;
const MAX_LIMIT: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit(usize);

impl Limit {
    pub fn clamped(raw: i64) -> Self {
        Self(raw.clamp(MIN_LIMIT, MAX_LIMIT) as usize)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self(DEFAULT_LIMIT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderSummary {
    NoActivity,
    NoneMatched,
    Shown(usize),
}

pub fn render<W: Write>(
    events: &[Event],
    filter: Option<&str>,
    limit: Limit,
    out: &mut W,
) -> io::Result<RenderSummary> {
    if events.is_empty() {
        writeln!(out, "No recent public activity.")?;
        return Ok(RenderSummary::NoActivity);
    }

    let filter = filter.filter(|f| !f.is_empty());
    let mut shown = 0;
    for ev in events {
        if let Some(tag) = filter
            && ev.event_type != tag
        {
            continue;
        }
        let Some(line) = format_event(ev) else {
            debug!(
                event_type = %ev.event_type,
                created_at = ?ev.created_at,
                "skipped event"
            );
            continue;
        };
        debug!(
            event_type = %ev.event_type,
            created_at = ?ev.created_at,
            "rendered event"
        );
        writeln!(out, "- {line}")?;
        shown += 1;
        if shown >= limit.get() {
            break;
        }
    }

    if shown == 0 {
        match filter {
            Some(tag) => writeln!(out, "No events of type {tag:?} found.")?,
            None => writeln!(out, "No printable events found.")?,
        }
        return Ok(RenderSummary::NoneMatched);
    }
    Ok(RenderSummary::Shown(shown))
}
