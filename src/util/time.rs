// src/util/time.rs
use chrono::{DateTime, Utc};

/// Produces a human-relative rendering of a point in time ("3 days ago").
pub trait TimeAgo {
    fn time_ago(&self, at: DateTime<Utc>) -> String;
}

/// Default `TimeAgo` with coarse buckets.
///
/// The reference instant is read from the system clock on every call unless
/// pinned with [`RelativeTime::at`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RelativeTime {
    now: Option<DateTime<Utc>>,
}

impl RelativeTime {
    pub fn new() -> Self {
        Self { now: None }
    }

    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now: Some(now) }
    }

    fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }
}

impl TimeAgo for RelativeTime {
    fn time_ago(&self, at: DateTime<Utc>) -> String {
        let seconds = (self.now() - at).num_seconds();
        // clock skew can put fresh notes slightly in the future
        if seconds < 45 {
            return "just now".to_string();
        }

        let minutes = seconds / 60;
        let hours = minutes / 60;
        let days = hours / 24;

        match () {
            _ if seconds < 90 => "a minute ago".to_string(),
            _ if minutes < 45 => format!("{} minutes ago", (seconds + 30) / 60),
            _ if minutes < 90 => "an hour ago".to_string(),
            _ if hours < 22 => format!("{} hours ago", (minutes + 30) / 60),
            _ if hours < 36 => "a day ago".to_string(),
            _ if days < 26 => format!("{} days ago", (hours + 12) / 24),
            _ if days < 45 => "a month ago".to_string(),
            _ if days < 320 => format!("{} months ago", ((days + 15) / 30).max(2)),
            _ if days < 548 => "a year ago".to_string(),
            _ => format!("{} years ago", ((days + 182) / 365).max(2)),
        }
    }
}
