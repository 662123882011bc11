use serde::{Deserialize, Serialize};

pub const ENERGY_LABEL: &str = "Energy Consumption";
pub const FUEL_LABEL: &str = "Fuel Usage";
pub const METHANE_LABEL: &str = "Methane Emissions";

/// Kilograms of CO2e per kWh of energy.
pub const DEFAULT_ENERGY_FACTOR: f64 = 0.62;
/// Kilograms of CO2e per liter of fuel.
pub const DEFAULT_FUEL_FACTOR: f64 = 2.76;
/// Kilograms of CO2e per kilogram of methane.
pub const DEFAULT_METHANE_FACTOR: f64 = 28.0;

pub const DEFAULT_REPORT_URL: &str = "http://localhost:5000/plants/1/report";

/// Validated numeric readings, ready for the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootprintInput {
    pub energy_consumption_kwh: f64,
    pub fuel_usage_liters: f64,
    pub methane_emissions_kg: f64,
}

impl FootprintInput {
    pub fn new(energy_consumption_kwh: f64, fuel_usage_liters: f64, methane_emissions_kg: f64) -> Self {
        Self {
            energy_consumption_kwh,
            fuel_usage_liters,
            methane_emissions_kg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootprintResult {
    pub total_co2e_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionFactors {
    pub energy_kg_per_kwh: f64,
    pub fuel_kg_per_liter: f64,
    pub methane_kg_per_kg: f64,
}

impl Default for ConversionFactors {
    fn default() -> Self {
        Self {
            energy_kg_per_kwh: DEFAULT_ENERGY_FACTOR,
            fuel_kg_per_liter: DEFAULT_FUEL_FACTOR,
            methane_kg_per_kg: DEFAULT_METHANE_FACTOR,
        }
    }
}

/// Raw text of the three form fields. Never mutated in place; every edit
/// produces a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub energy_consumption: String,
    pub fuel_usage: String,
    pub methane_emissions: String,
}

impl FormFields {
    pub fn new(
        energy_consumption: impl Into<String>,
        fuel_usage: impl Into<String>,
        methane_emissions: impl Into<String>,
    ) -> Self {
        Self {
            energy_consumption: energy_consumption.into(),
            fuel_usage: fuel_usage.into(),
            methane_emissions: methane_emissions.into(),
        }
    }

    pub fn with_energy_consumption(&self, value: impl Into<String>) -> Self {
        Self {
            energy_consumption: value.into(),
            ..self.clone()
        }
    }

    pub fn with_fuel_usage(&self, value: impl Into<String>) -> Self {
        Self {
            fuel_usage: value.into(),
            ..self.clone()
        }
    }

    pub fn with_methane_emissions(&self, value: impl Into<String>) -> Self {
        Self {
            methane_emissions: value.into(),
            ..self.clone()
        }
    }
}

/// One labeled raw input value, as shown in the table and chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub name: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
