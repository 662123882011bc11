use crate::core::{ConversionFactors, DataPoint, FootprintInput, FootprintResult};
use crate::utils::error::{FootprintError, Result};
use crate::utils::validation::validate_one_of;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::str::FromStr;

pub const OUTPUT_FORMATS: [&str; 3] = ["text", "json", "csv"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self> {
        validate_one_of("format", s, &OUTPUT_FORMATS)?;
        Ok(match s {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            _ => OutputFormat::Text,
        })
    }
}

pub fn format_result(result: &FootprintResult) -> String {
    format!(
        "Your carbon footprint is: {:.2} kg CO2e",
        result.total_co2e_kg
    )
}

/// Everything shown after a successful submit.
#[derive(Debug, Clone, Serialize)]
pub struct FootprintReport {
    pub input: FootprintInput,
    pub factors: ConversionFactors,
    pub total_co2e_kg: f64,
    pub message: String,
    pub data: Vec<DataPoint>,
    pub report_url: String,
    pub generated_at: DateTime<Utc>,
}

impl FootprintReport {
    pub fn new(
        input: FootprintInput,
        factors: ConversionFactors,
        result: FootprintResult,
        data: Vec<DataPoint>,
        report_url: impl Into<String>,
    ) -> Self {
        Self {
            input,
            factors,
            total_co2e_kg: result.total_co2e_kg,
            message: format_result(&result),
            data,
            report_url: report_url.into(),
            generated_at: Utc::now(),
        }
    }

    pub fn render_text(&self) -> String {
        let name_width = self
            .data
            .iter()
            .map(|point| point.name.len())
            .max()
            .unwrap_or(0)
            .max("Name".len());

        let mut lines = vec![
            self.message.clone(),
            String::new(),
            format!("{:<width$} | Value", "Name", width = name_width),
            format!("{}-+-{}", "-".repeat(name_width), "-".repeat(10)),
        ];
        for point in &self.data {
            lines.push(format!(
                "{:<width$} | {}",
                point.name,
                point.value,
                width = name_width
            ));
        }
        lines.push(String::new());
        lines.push(format!("Download Report: {}", self.report_url));

        lines.join("\n")
    }

    /// `name,value` rows for each input plus a final total row.
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["name", "value"])?;
        for point in &self.data {
            writer.write_record([point.name.as_str(), &point.value.to_string()])?;
        }
        writer.write_record(["Total CO2e (kg)", &format!("{:.2}", self.total_co2e_kg)])?;

        let bytes = writer
            .into_inner()
            .map_err(|e| FootprintError::IoError(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| {
            FootprintError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => self.to_json(),
            OutputFormat::Csv => self.to_csv(),
        }
    }
}
