use crate::core::{ConfigProvider, ConversionFactors};
use crate::domain::model::DEFAULT_REPORT_URL;
use crate::utils::error::{FootprintError, Result};
use crate::utils::validation::{validate_finite, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub factors: Option<FactorsConfig>,
    pub report: Option<ReportConfig>,
}

/// Overrides for the conversion factors. Missing entries keep the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FactorsConfig {
    pub energy_kg_per_kwh: Option<f64>,
    pub fuel_kg_per_liter: Option<f64>,
    pub methane_kg_per_kg: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    pub url: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Read configuration from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as is.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("environment variable pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

impl ConfigProvider for TomlConfig {
    fn factors(&self) -> ConversionFactors {
        let defaults = ConversionFactors::default();
        match &self.factors {
            Some(f) => ConversionFactors {
                energy_kg_per_kwh: f.energy_kg_per_kwh.unwrap_or(defaults.energy_kg_per_kwh),
                fuel_kg_per_liter: f.fuel_kg_per_liter.unwrap_or(defaults.fuel_kg_per_liter),
                methane_kg_per_kg: f.methane_kg_per_kg.unwrap_or(defaults.methane_kg_per_kg),
            },
            None => defaults,
        }
    }

    fn report_url(&self) -> &str {
        self.report
            .as_ref()
            .and_then(|r| r.url.as_deref())
            .unwrap_or(DEFAULT_REPORT_URL)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let factors = self.factors();
        validate_finite("factors.energy_kg_per_kwh", factors.energy_kg_per_kwh)?;
        validate_finite("factors.fuel_kg_per_liter", factors.fuel_kg_per_liter)?;
        validate_finite("factors.methane_kg_per_kg", factors.methane_kg_per_kg)?;

        let url = self.report_url();
        if url.contains("${") {
            return Err(FootprintError::ConfigError {
                message: format!("report.url references an unset environment variable: {}", url),
            });
        }
        validate_url("report.url", url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.factors(), ConversionFactors::default());
        assert_eq!(config.report_url(), "http://localhost:5000/plants/1/report");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_factor_overrides() {
        let toml_content = r#"
[factors]
energy_kg_per_kwh = 0.5
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let factors = config.factors();
        assert_eq!(factors.energy_kg_per_kwh, 0.5);
        assert_eq!(factors.fuel_kg_per_liter, 2.76);
        assert_eq!(factors.methane_kg_per_kg, 28.0);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CARBON_TEST_REPORT_URL", "https://reports.example.com/plants/7");

        let toml_content = r#"
[report]
url = "${CARBON_TEST_REPORT_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.report_url(), "https://reports.example.com/plants/7");

        std::env::remove_var("CARBON_TEST_REPORT_URL");
    }

    #[test]
    fn test_unset_env_var_fails_validation() {
        let toml_content = r#"
[report]
url = "${CARBON_TEST_SURELY_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(FootprintError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_non_finite_factor_is_rejected() {
        let toml_content = r#"
[factors]
methane_kg_per_kg = nan
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(FootprintError::InvalidConfigValue { .. })
        ));
    }

    #[test]
    fn test_invalid_toml() {
        let result = TomlConfig::from_toml_str("[factors\nenergy = ");
        assert!(matches!(result, Err(FootprintError::TomlError(_))));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[factors]
fuel_kg_per_liter = 3.0

[report]
url = "https://example.com/report"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.factors().fuel_kg_per_liter, 3.0);
        assert_eq!(config.report_url(), "https://example.com/report");
    }
}
