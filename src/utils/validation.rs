use crate::utils::error::{ApiError, Result};
use regex::Regex;
use url::Url;

/// Shallow syntactic check: something, an @, something, a dot, something.
/// No MX/DNS lookup on purpose.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_email(value: &str) -> Result<()> {
    let re = Regex::new(EMAIL_PATTERN).unwrap();
    if !re.is_match(value) {
        return Err(ApiError::InvalidEmail {
            value: value.to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ApiError::MissingField {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ApiError::MissingField {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ApiError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(ApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ApiError::InvalidConfigValueError {
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
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("a@b.c").is_ok());
        assert!(validate_email("first.last@sub.domain.org").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@dot").is_err());
        assert!(validate_email("two@@signs.com").is_err());
        assert!(validate_email("spaces in@mail.com").is_err());
        assert!(validate_email("@leading.dot").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Ada").is_ok());
        assert!(validate_non_empty_string("name", "").is_err());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("value".to_string());
        assert_eq!(validate_required_field("field", &present).unwrap(), "value");

        let absent: Option<String> = None;
        assert!(validate_required_field("field", &absent).is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("github", "https://github.com/user/repo").is_ok());
        assert!(validate_url("demo", "http://demo.example.com").is_ok());
        assert!(validate_url("github", "").is_err());
        assert!(validate_url("github", "not-a-url").is_err());
        assert!(validate_url("github", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("level", 90, 0, 100).is_ok());
        assert!(validate_range("level", 0, 0, 100).is_ok());
        assert!(validate_range("level", 100, 0, 100).is_ok());
        assert!(validate_range("level", 101, 0, 100).is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("port", 3000, 1).is_ok());
        assert!(validate_positive_number("port", 0, 1).is_err());
    }
}
