use crate::utils::error::{FootprintError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(FootprintError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FootprintError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(FootprintError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(FootprintError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(FootprintError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("report.url", "https://example.com/report").is_ok());
        assert!(validate_url("report.url", "http://localhost:5000/plants/1/report").is_ok());
        assert!(validate_url("report.url", "").is_err());
        assert!(validate_url("report.url", "not a url").is_err());
        assert!(validate_url("report.url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("factors.energy_kg_per_kwh", 0.62).is_ok());
        assert!(validate_finite("factors.energy_kg_per_kwh", -1.0).is_ok());
        assert!(validate_finite("factors.energy_kg_per_kwh", f64::NAN).is_err());
        assert!(validate_finite("factors.energy_kg_per_kwh", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("format", "csv", &["text", "json", "csv"]).is_ok());
        assert!(validate_one_of("format", "xml", &["text", "json", "csv"]).is_err());
    }
}
