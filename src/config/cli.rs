use crate::config::TomlConfig;
use crate::core::engine::FootprintEngine;
use crate::core::report::OutputFormat;
use crate::core::FormFields;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "carbon-footprint")]
#[command(about = "Estimate a carbon footprint from energy, fuel and methane readings")]
pub struct CliConfig {
    /// Energy consumption in kWh
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub energy: String,

    /// Fuel usage in liters
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub fuel: String,

    /// Methane emissions in kg
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub methane: String,

    /// TOML file with [factors] and [report] tables
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format: text, json or csv
    #[arg(long, default_value = "text")]
    pub format: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn fields(&self) -> FormFields {
        FormFields::new(
            self.energy.clone(),
            self.fuel.clone(),
            self.methane.clone(),
        )
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        self.format.parse()
    }

    /// Loads the optional config file, then validates, computes and renders
    /// the fields given on the command line.
    pub fn run(&self) -> Result<String> {
        self.validate()?;

        let file_config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        file_config.validate()?;

        let engine = FootprintEngine::new(file_config);
        engine.run(self.fields(), self.output_format()?)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.output_format().map(|_| ())
    }
}
