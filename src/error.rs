// Error types shared by the API client, aggregators and report builder

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContribError>;

#[derive(Error, Debug)]
pub enum ContribError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Qiita API error: {status} for {url}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid timestamp: {value}")]
    Timestamp { value: String },

    #[error("Invalid date (expected YYYYMMDD): {value}")]
    InvalidDate { value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No user was able to get the information")]
    NoData,
}
