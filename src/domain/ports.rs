use crate::domain::model::ConversionFactors;

/// Source of the settings a calculation and its report depend on.
pub trait ConfigProvider {
    fn factors(&self) -> ConversionFactors;
    fn report_url(&self) -> &str;
}
