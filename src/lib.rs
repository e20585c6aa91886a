pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;

pub use constants::*;
pub use control::environment::AtmosphericConditions;
pub use control::propulsion::EngineProfile;
pub use control::rocket::FlightModel;
pub use control::structure::MassProfile;
pub use errors::{ConfigError, EstimationError};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::kinematics::Trajectory;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::report::Report;

pub use config::FlightConfig;
