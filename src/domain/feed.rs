use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::text::preview;

/// Maximum display width of a notice preview on the home page
pub const NOTICE_PREVIEW_WIDTH: usize = 120;

/// An announcement from the streamer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub id: String,
    pub title: String,
    pub content: String,
    /// ISO 8601 date or date-time
    pub created_at: String,
}

impl Notice {
    pub fn preview(&self) -> String {
        preview(&self.content, NOTICE_PREVIEW_WIDTH)
    }

    /// Whether this notice was created after the last one the user has seen.
    ///
    /// Timestamps are ISO 8601: a bare date counts as midnight, and times may
    /// carry fractional seconds and a UTC offset. A notice without a parsable
    /// timestamp is never new; with no last-seen marker every notice is new.
    /// A timestamp with an offset is not comparable with one without.
    pub fn is_newer_than(&self, last_seen: Option<&str>) -> bool {
        let Some(created_at) = Timestamp::parse(&self.created_at) else {
            return false;
        };
        match last_seen.map(str::trim).filter(|s| !s.is_empty()) {
            None => true,
            Some(last_seen) => Timestamp::parse(last_seen)
                .and_then(|seen| created_at.partial_cmp(&seen))
                .is_some_and(|ordering| ordering == Ordering::Greater),
        }
    }
}

/// An ISO 8601 date or date-time, with or without a UTC offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timestamp {
    Local(NaiveDateTime),
    Offset(DateTime<FixedOffset>),
}

impl Timestamp {
    fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Self::Offset(dt));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(Self::Local(dt));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
            return Some(Self::Local(dt));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(Self::Local)
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Local(a), Self::Local(b)) => Some(a.cmp(b)),
            (Self::Offset(a), Self::Offset(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// A highlight clip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clip {
    pub id: String,
    pub title: String,
    pub views: String,
    pub duration: String,
    pub thumbnail: String,
}

/// A radio replay entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioItem {
    pub id: String,
    pub title: String,
    pub date: String,
    pub length: String,
}
