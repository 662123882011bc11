use crate::core::calculator::FootprintCalculator;
use crate::core::gate::{parse_or_zero, validate_fields};
use crate::core::report::format_result;
use crate::core::{DataPoint, FootprintResult, FormFields};
use crate::domain::model::{ENERGY_LABEL, FUEL_LABEL, METHANE_LABEL};
use crate::utils::error::Result;

/// Form state: current field text plus whatever the last submit displayed.
#[derive(Debug, Clone, Default)]
pub struct CalculatorSession {
    calculator: FootprintCalculator,
    fields: FormFields,
    result: Option<String>,
    error: Option<String>,
}

impl CalculatorSession {
    pub fn new(calculator: FootprintCalculator) -> Self {
        Self {
            calculator,
            ..Self::default()
        }
    }

    pub fn with_fields(calculator: FootprintCalculator, fields: FormFields) -> Self {
        Self {
            calculator,
            fields,
            ..Self::default()
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn set_energy_consumption(&mut self, value: impl Into<String>) {
        self.fields = self.fields.with_energy_consumption(value);
    }

    pub fn set_fuel_usage(&mut self, value: impl Into<String>) {
        self.fields = self.fields.with_fuel_usage(value);
    }

    pub fn set_methane_emissions(&mut self, value: impl Into<String>) {
        self.fields = self.fields.with_methane_emissions(value);
    }

    /// Validates the current fields and computes the footprint. A failure
    /// clears the displayed result; a success clears the displayed error.
    pub fn submit(&mut self) -> Result<FootprintResult> {
        let input = match validate_fields(&self.fields) {
            Ok(input) => input,
            Err(e) => {
                tracing::warn!("Submission rejected: {}", e);
                self.error = Some(e.to_string());
                self.result = None;
                return Err(e);
            }
        };

        let result = self.calculator.calculate(&input);
        tracing::info!("Computed footprint: {} kg CO2e", result.total_co2e_kg);

        self.result = Some(format_result(&result));
        self.error = None;
        Ok(result)
    }

    pub fn result_text(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn error_text(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Labeled input values for the table and chart, built from the current
    /// field text whether or not it has been submitted.
    pub fn data(&self) -> Vec<DataPoint> {
        chart_data(&self.fields)
    }
}

pub fn chart_data(fields: &FormFields) -> Vec<DataPoint> {
    vec![
        DataPoint::new(ENERGY_LABEL, parse_or_zero(&fields.energy_consumption)),
        DataPoint::new(FUEL_LABEL, parse_or_zero(&fields.fuel_usage)),
        DataPoint::new(METHANE_LABEL, parse_or_zero(&fields.methane_emissions)),
    ]
}
