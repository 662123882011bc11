pub mod calculator;
pub mod engine;
pub mod gate;
pub mod report;
pub mod session;

pub use crate::domain::model::{
    ConversionFactors, DataPoint, FootprintInput, FootprintResult, FormFields,
};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
