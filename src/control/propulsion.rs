use super::structure::MassProfile;
use crate::errors::EstimationError;

/// A solid motor described by its total impulse and average thrust.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngineProfile {
    pub mass: MassProfile,
    pub impulse: f64, // N⋅s
    pub thrust: f64,  // N
}

impl EngineProfile {
    pub fn new(mass: MassProfile, impulse: f64, thrust: f64) -> Self {
        EngineProfile {
            mass,
            impulse,
            thrust,
        }
    }

    pub fn burn_time(&self) -> Result<f64, EstimationError> {
        if self.thrust == 0.0 {
            return Err(EstimationError::DivideByZero(
                "burn time is undefined for an engine with zero thrust".to_string(),
            ));
        }
        Ok(self.impulse / self.thrust)
    }
}
