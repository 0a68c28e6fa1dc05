use crate::utils::error::{PollyError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Poll and option ids are positive integers; zero stands in for "missing".
pub fn validate_positive_id(field_name: &str, value: u64) -> Result<()> {
    if value == 0 {
        return Err(PollyError::InvalidParameter {
            field: field_name.to_string(),
            message: format!(
                "Parameter '{}' is required and must be a positive integer",
                field_name
            ),
        });
    }
    Ok(())
}

pub fn validate_token(token: &str) -> Result<()> {
    if token.is_empty() {
        return Err(PollyError::InvalidParameter {
            field: "token".to_string(),
            message: "Parameter 'token' (JWT) is required".to_string(),
        });
    }
    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PollyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PollyError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PollyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PollyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_id() {
        assert!(validate_positive_id("poll_id", 1).is_ok());

        let err = validate_positive_id("option_id", 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parameter 'option_id' is required and must be a positive integer"
        );
    }

    #[test]
    fn test_validate_token() {
        assert!(validate_token("eyJhbGciOiJIUzI1NiJ9.payload.sig").is_ok());
        assert!(validate_token("").is_err());
        // Only emptiness is checked; the server judges the token itself.
        assert!(validate_token("   ").is_ok());

        match validate_token("") {
            Err(PollyError::InvalidParameter { field, .. }) => assert_eq!(field, "token"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api.base_url", "https://polly.example.com").is_ok());
        assert!(validate_url("api.base_url", "http://localhost:8000").is_ok());
        assert!(validate_url("api.base_url", "").is_err());
        assert!(validate_url("api.base_url", "localhost").is_err());
        assert!(validate_url("api.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("api.timeout_seconds", 10u64, 1, 300).is_ok());
        assert!(validate_range("api.timeout_seconds", 0u64, 1, 300).is_err());
        assert!(validate_range("api.timeout_seconds", 301u64, 1, 300).is_err());
    }
}
