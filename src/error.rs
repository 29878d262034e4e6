//! Error types for the college football data loader

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, CfbdError>;

#[derive(Error, Debug)]
pub enum CfbdError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse year: {0}")]
    InvalidYear(#[from] std::num::ParseIntError),

    #[error("Unexpected {kind} payload from {path}; expected an array of objects")]
    UnexpectedPayload { path: String, kind: &'static str },

    #[error("{dataset} is not keyed by year")]
    NotYearly { dataset: &'static str },

    #[error("{dataset} requires --year or --start/--end")]
    MissingYear { dataset: &'static str },
}

impl CfbdError {
    /// HTTP status code for API failures, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            CfbdError::Status { status, .. } => Some(*status),
            CfbdError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
