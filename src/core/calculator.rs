use crate::core::{ConversionFactors, FootprintInput, FootprintResult};

/// Weighted sum of the three readings. No rounding is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FootprintCalculator {
    factors: ConversionFactors,
}

impl FootprintCalculator {
    pub fn new(factors: ConversionFactors) -> Self {
        Self { factors }
    }

    pub fn factors(&self) -> ConversionFactors {
        self.factors
    }

    pub fn calculate(&self, input: &FootprintInput) -> FootprintResult {
        let energy_emissions = input.energy_consumption_kwh * self.factors.energy_kg_per_kwh;
        let fuel_emissions = input.fuel_usage_liters * self.factors.fuel_kg_per_liter;
        let methane_emissions = input.methane_emissions_kg * self.factors.methane_kg_per_kg;

        FootprintResult {
            total_co2e_kg: energy_emissions + fuel_emissions + methane_emissions,
        }
    }
}

/// Footprint in kg CO2e using the default conversion factors.
pub fn calculate_carbon_footprint(
    energy_consumption_kwh: f64,
    fuel_usage_liters: f64,
    methane_emissions_kg: f64,
) -> f64 {
    FootprintCalculator::default()
        .calculate(&FootprintInput::new(
            energy_consumption_kwh,
            fuel_usage_liters,
            methane_emissions_kg,
        ))
        .total_co2e_kg
}
