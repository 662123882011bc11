pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use crate::core::{
    calculator::{calculate_carbon_footprint, FootprintCalculator},
    engine::FootprintEngine,
    gate::validate,
    report::{format_result, FootprintReport, OutputFormat},
    session::CalculatorSession,
};
pub use crate::domain::model::{ConversionFactors, DataPoint, FootprintInput, FootprintResult, FormFields};
pub use crate::utils::error::{FootprintError, Result};
