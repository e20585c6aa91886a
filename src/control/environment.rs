use crate::constants::{DRY_AIR_GAS_CONSTANT, STP_PRESSURE, STP_TEMPERATURE};
use crate::errors::EstimationError;

/// Ambient temperature and pressure at the launch site.
///
/// Air density is derived through the ideal gas law and refreshed whenever
/// either input changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericConditions {
    temperature: f64, // K
    pressure: f64,    // Pa
    air_density: f64, // kg/m³, meaningless when temperature is zero
}

impl AtmosphericConditions {
    pub fn new(temperature: f64, pressure: f64) -> Self {
        AtmosphericConditions {
            temperature,
            pressure,
            air_density: Self::calculate_air_density(temperature, pressure),
        }
    }

    pub fn update(&mut self, temperature: f64, pressure: f64) {
        self.temperature = temperature;
        self.pressure = pressure;
        self.air_density = Self::calculate_air_density(temperature, pressure);
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    /// Air density in kg/m³, or `DivideByZero` when the temperature is zero.
    ///
    /// Negative inputs are not rejected.
    pub fn air_density(&self) -> Result<f64, EstimationError> {
        if self.temperature == 0.0 {
            return Err(EstimationError::DivideByZero(
                "air density is undefined at a temperature of 0 K".to_string(),
            ));
        }
        Ok(self.air_density)
    }

    fn calculate_air_density(temperature: f64, pressure: f64) -> f64 {
        pressure / (DRY_AIR_GAS_CONSTANT * temperature)
    }
}

impl Default for AtmosphericConditions {
    fn default() -> Self {
        AtmosphericConditions::new(STP_TEMPERATURE, STP_PRESSURE)
    }
}
