// Physical Constants
pub const GRAVITY: f64 = 9.80665; // m/s²
pub const DRY_AIR_GAS_CONSTANT: f64 = 287.05; // J/(kg⋅K)

// Standard Temperature and Pressure
pub const STP_TEMPERATURE: f64 = 273.15; // K
pub const STP_PRESSURE: f64 = 101_325.0; // Pa

// Vehicle Defaults
pub const DEFAULT_DRAG_COEFFICIENT: f64 = 0.75;
