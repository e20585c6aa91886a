//! TOML persistence for flight configurations.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DRAG_COEFFICIENT, STP_PRESSURE, STP_TEMPERATURE};
use crate::control::{environment::AtmosphericConditions, rocket::FlightModel};
use crate::errors::ConfigError;

/// Every input the flight model needs, as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightConfig {
    pub vehicle_mass_empty: f64,
    pub vehicle_mass_loaded: f64,
    pub engine_mass_empty: f64,
    pub engine_mass_loaded: f64,
    pub area: f64,
    pub impulse: f64,
    pub thrust: f64,
    #[serde(default = "default_drag_coefficient")]
    pub drag_coefficient: f64,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_pressure")]
    pub pressure: f64,
}

fn default_drag_coefficient() -> f64 {
    DEFAULT_DRAG_COEFFICIENT
}

fn default_temperature() -> f64 {
    STP_TEMPERATURE
}

fn default_pressure() -> f64 {
    STP_PRESSURE
}

impl FlightConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn conditions(&self) -> AtmosphericConditions {
        AtmosphericConditions::new(self.temperature, self.pressure)
    }

    pub fn into_model(self) -> FlightModel {
        FlightModel::new(
            self.vehicle_mass_empty,
            self.vehicle_mass_loaded,
            self.engine_mass_empty,
            self.engine_mass_loaded,
            self.area,
            self.impulse,
            self.thrust,
            self.drag_coefficient,
            self.conditions(),
        )
    }

    pub fn from_model(model: &FlightModel) -> Self {
        FlightConfig {
            vehicle_mass_empty: model.vehicle_mass().empty,
            vehicle_mass_loaded: model.vehicle_mass().loaded,
            engine_mass_empty: model.engine().mass.empty,
            engine_mass_loaded: model.engine().mass.loaded,
            area: model.area(),
            impulse: model.engine().impulse,
            thrust: model.engine().thrust,
            drag_coefficient: model.drag_coefficient(),
            temperature: model.conditions().temperature(),
            pressure: model.conditions().pressure(),
        }
    }
}
