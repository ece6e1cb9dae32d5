// Centralized configuration for qiita-contrib

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{ContribError, Result};

/// Qiita API v2 root
pub const QIITA_API_BASE: &str = "https://qiita.com/api/v2";

/// Page size for every paginated endpoint
pub const PER_PAGE: usize = 10;

/// Report written when no --output is given
pub const DEFAULT_OUTPUT: &str = "qiita_contributions.csv";

/// Environment variables read by the CLI (a `.env` file works too)
pub mod env_keys {
    pub const TOKEN: &str = "QIITA_TOKEN";
    pub const API_URL: &str = "QIITA_API_URL";
}

/// Parse a YYYYMMDD command line date
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y%m%d").map_err(|_| ContribError::InvalidDate {
        value: value.to_string(),
    })
}

/// First second of the given day
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(chrono::NaiveTime::MIN)
}

/// Last second of the given day (23:59:59)
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    use chrono::Duration;

    start_of_day(date) + Duration::days(1) - Duration::seconds(1)
}
