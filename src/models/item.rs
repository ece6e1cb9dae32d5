// Item data model
// Matches the Qiita /items/{id} response shape

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::error::{ContribError, Result};

/// Entry of the /users/{id}/items listing; only the id is used
#[derive(Debug, Clone, Deserialize)]
pub struct ItemSummary {
    pub id: String,
}

/// Item metadata from /items/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct ItemPayload {
    pub created_at: String,
    pub updated_at: String,
    pub likes_count: u64,
    pub comments_count: u64,
}

/// Inclusive date window used to decide which items count.
/// A missing bound leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateWindow {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl DateWindow {
    pub fn new(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Self {
        Self { start, end }
    }

    /// An item counts when it was updated on or after `start`
    /// and created on or before `end`
    pub fn contains(&self, created_at: NaiveDateTime, updated_at: NaiveDateTime) -> bool {
        if matches!(self.start, Some(start) if updated_at < start) {
            return false;
        }
        if matches!(self.end, Some(end) if created_at > end) {
            return false;
        }
        true
    }
}

/// Aggregated view of one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    #[allow(dead_code)]
    pub id: String,
    #[allow(dead_code)]
    pub created_at: NaiveDateTime,
    #[allow(dead_code)]
    pub updated_at: NaiveDateTime,
    pub is_valid: bool,
    pub likes_count: u64,
    pub comments_count: u64,
    pub stockers_count: u64,
}

impl ItemRecord {
    /// Record for an item outside the window; all metrics stay zero
    pub fn out_of_window(id: &str, created_at: NaiveDateTime, updated_at: NaiveDateTime) -> Self {
        Self {
            id: id.to_string(),
            created_at,
            updated_at,
            is_valid: false,
            likes_count: 0,
            comments_count: 0,
            stockers_count: 0,
        }
    }
}

/// Parse a Qiita timestamp such as `2024-01-01T09:00:00+09:00`.
/// Only the first 19 characters are read, so the offset is ignored.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    let truncated = value.get(..19).unwrap_or(value);

    NaiveDateTime::parse_from_str(truncated, "%Y-%m-%dT%H:%M:%S").map_err(|_| {
        ContribError::Timestamp {
            value: value.to_string(),
        }
    })
}
