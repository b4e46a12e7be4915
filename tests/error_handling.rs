use github_portfolio::error::{PortfolioError, Result};
use std::error::Error;

#[test]
fn error_display_strings_are_stable() {
    let error = PortfolioError::ApiError("API failed".to_string());
    assert_eq!(format!("{}", error), "GitHub API error: API failed");

    let error = PortfolioError::NotFound("no such user".to_string());
    assert_eq!(format!("{}", error), "Resource not found: no such user");

    let error = PortfolioError::InvalidUrl("not a url".to_string());
    assert_eq!(format!("{}", error), "Invalid API base URL: not a url");

    let error = PortfolioError::InvalidAccount("empty".to_string());
    assert_eq!(format!("{}", error), "Invalid account name: empty");

    let error = PortfolioError::InvalidSelection("forks".to_string());
    assert_eq!(format!("{}", error), "Invalid selection: forks");
}

#[test]
fn string_variants_have_no_source() {
    let error = PortfolioError::ApiError("API failed".to_string());
    assert!(error.source().is_none());
}

#[test]
fn io_and_json_errors_convert_into_portfolio_error() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: PortfolioError = io_error.into();
    assert!(matches!(error, PortfolioError::IoError(_)));

    let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let error: PortfolioError = json_error.into();
    assert!(matches!(error, PortfolioError::JsonError(_)));
}

#[test]
fn result_alias_carries_portfolio_error() {
    fn returns_result() -> Result<String> {
        Ok("success".to_string())
    }

    let result = returns_result();
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "success");

    fn returns_error() -> Result<String> {
        Err(PortfolioError::NotFound("Not found".to_string()))
    }

    let result = returns_error();
    assert!(result.is_err());
}
