use std::path::PathBuf;
use thiserror::Error;

/// Failure of the single repository-listing request, one variant per phase.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to create HTTP client: {0}")]
    ClientInit(#[source] reqwest::Error),

    #[error("Request failed, cannot send request: {0}")]
    RequestFailed(#[source] reqwest::Error),

    #[error("Cannot read response body: {0}")]
    BodyReadFailed(#[source] reqwest::Error),

    #[error("GitHub API error. HTTP status code: {status}, API response: {body}")]
    ApiError { status: u16, body: String },

    #[error("Invalid response body, parse error: {0}")]
    DecodeFailed(#[source] serde_json::Error),
}

impl FetchError {
    /// HTTP status for `ApiError`, `None` for every other phase.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum GetHubRepoError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GetHubRepoError>;
