use crate::utils::error::{Result, SantaError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SantaError::config(format!(
            "{}: URL cannot be empty",
            field_name
        )));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SantaError::config(format!(
                "{}: unsupported URL scheme: {}",
                field_name, scheme
            ))),
        },
        Err(e) => Err(SantaError::config(format!(
            "{}: invalid URL format: {}",
            field_name, e
        ))),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SantaError::config(format!(
            "{}: path cannot be empty",
            field_name
        )));
    }

    if path.contains('\0') {
        return Err(SantaError::config(format!(
            "{}: path contains null bytes",
            field_name
        )));
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(SantaError::config(format!(
            "{}: value must be at least {}, got {}",
            field_name, min_value, value
        )));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SantaError::config(format!(
            "{}: value cannot be empty or whitespace-only",
            field_name
        )));
    }
    Ok(())
}

/// Loose shape check for contact addresses (email-like). The notifier
/// endpoint does the real delivery validation; this only catches rows
/// that are obviously not an address.
pub fn validate_contact_address(field_name: &str, address: &str) -> Result<()> {
    let re = regex::Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
        .map_err(|e| SantaError::config(format!("address pattern: {}", e)))?;
    if !re.is_match(address) {
        return Err(SantaError::config(format!(
            "{}: '{}' does not look like a contact address",
            field_name, address
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("notify_endpoint", "https://example.com").is_ok());
        assert!(validate_url("notify_endpoint", "http://example.com").is_ok());
        assert!(validate_url("notify_endpoint", "").is_err());
        assert!(validate_url("notify_endpoint", "invalid-url").is_err());
        assert!(validate_url("notify_endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("max_attempts", 1000, 1).is_ok());
        assert!(validate_positive_number("max_attempts", 0, 1).is_err());
    }

    #[test]
    fn test_validate_contact_address() {
        assert!(validate_contact_address("contact_address", "alice@example.com").is_ok());
        assert!(validate_contact_address("contact_address", "not-an-address").is_err());
        assert!(validate_contact_address("contact_address", "a b@example.com").is_err());
    }
}
