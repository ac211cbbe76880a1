use gethubrepo::error::{ConfigError, FetchError, GetHubRepoError, Result};
use std::error::Error;
use std::path::PathBuf;

fn decode_error() -> serde_json::Error {
    serde_json::from_str::<Vec<u8>>("\"not an array\"").unwrap_err()
}

#[test]
fn test_error_display() {
    let error = FetchError::ApiError {
        status: 404,
        body: r#"{"message":"Not Found"}"#.to_string(),
    };
    assert_eq!(
        format!("{}", error),
        r#"GitHub API error. HTTP status code: 404, API response: {"message":"Not Found"}"#
    );

    let error = FetchError::InvalidUrl("bad".to_string());
    assert_eq!(format!("{}", error), "Invalid request URL: bad");

    let error = ConfigError::Invalid("user_agent must not be empty".to_string());
    assert_eq!(
        format!("{}", error),
        "Invalid configuration: user_agent must not be empty"
    );

    let error = FetchError::DecodeFailed(decode_error());
    assert!(format!("{}", error).starts_with("Invalid response body, parse error: "));
}

#[test]
fn test_error_source() {
    let error = FetchError::ApiError {
        status: 500,
        body: String::new(),
    };
    assert!(error.source().is_none());

    let error = FetchError::DecodeFailed(decode_error());
    assert!(error.source().is_some());

    let error = ConfigError::Read {
        path: PathBuf::from("/missing.yaml"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(error.source().is_some());
    assert!(format!("{}", error).contains("/missing.yaml"));
}

#[test]
fn test_status_accessor() {
    let error = FetchError::ApiError {
        status: 403,
        body: String::new(),
    };
    assert_eq!(error.status(), Some(403));
    assert_eq!(FetchError::DecodeFailed(decode_error()).status(), None);
}

#[test]
fn test_error_conversion() {
    let error: GetHubRepoError = FetchError::InvalidUrl("x".to_string()).into();
    assert!(matches!(error, GetHubRepoError::Fetch(FetchError::InvalidUrl(_))));
    assert_eq!(format!("{}", error), "Invalid request URL: x");

    let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let error: GetHubRepoError = io_error.into();
    assert!(matches!(error, GetHubRepoError::IoError(_)));
}

#[test]
fn test_result_type() {
    fn returns_error() -> Result<String> {
        Err(FetchError::ApiError {
            status: 404,
            body: "Not Found".to_string(),
        })?
    }

    let result = returns_error();
    assert!(matches!(
        result,
        Err(GetHubRepoError::Fetch(FetchError::ApiError { status: 404, .. }))
    ));
}
