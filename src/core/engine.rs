use crate::core::calculator::FootprintCalculator;
use crate::core::gate::validate_fields;
use crate::core::report::{FootprintReport, OutputFormat};
use crate::core::session::chart_data;
use crate::core::{ConfigProvider, FormFields};
use crate::utils::error::Result;

/// Runs one form submission end to end: validate, compute, render.
pub struct FootprintEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> FootprintEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn calculator(&self) -> FootprintCalculator {
        FootprintCalculator::new(self.config.factors())
    }

    pub fn report(&self, fields: FormFields) -> Result<FootprintReport> {
        tracing::debug!("Submitting fields: {:?}", fields);

        let input = validate_fields(&fields)?;
        let calculator = self.calculator();
        let result = calculator.calculate(&input);
        tracing::info!("Computed footprint: {} kg CO2e", result.total_co2e_kg);

        Ok(FootprintReport::new(
            input,
            calculator.factors(),
            result,
            chart_data(&fields),
            self.config.report_url(),
        ))
    }

    pub fn run(&self, fields: FormFields, format: OutputFormat) -> Result<String> {
        let report = self.report(fields)?;
        tracing::info!("Rendering report as {:?}", format);
        report.render(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TomlConfig;
    use crate::utils::error::FootprintError;

    #[test]
    fn test_run_with_defaults() {
        let engine = FootprintEngine::new(TomlConfig::default());
        let output = engine
            .run(FormFields::new("10", "5", "1"), OutputFormat::Text)
            .unwrap();

        assert!(output.starts_with("Your carbon footprint is: 48.00 kg CO2e"));
    }

    #[test]
    fn test_run_rejects_empty_form() {
        let engine = FootprintEngine::new(TomlConfig::default());
        let err = engine
            .run(FormFields::default(), OutputFormat::Json)
            .unwrap_err();

        assert!(matches!(err, FootprintError::InvalidInput { .. }));
    }

    #[test]
    fn test_report_carries_configured_factors() {
        let config = TomlConfig::from_toml_str("[factors]\nmethane_kg_per_kg = 25.0\n").unwrap();
        let engine = FootprintEngine::new(config);
        let report = engine.report(FormFields::new("0", "0", "2")).unwrap();

        assert_eq!(report.total_co2e_kg, 50.0);
        assert_eq!(report.factors.methane_kg_per_kg, 25.0);
        assert_eq!(report.input.methane_emissions_kg, 2.0);
    }
}
