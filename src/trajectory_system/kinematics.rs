//! Closed-form boost, coast and descent kinematics.
//!
//! Each step of the chain is a checked function so that a physically
//! impossible configuration surfaces as an [`EstimationError`] at the step
//! where it first appears instead of as a NaN further down.
//!
//! Reference: <http://www.rocketmime.com/rockets/rckt_eqn.html#Method>

use crate::constants::GRAVITY;
use crate::errors::EstimationError;

/// Every quantity derived from one evaluation of the flight chain.
///
/// Only the chain builds this, so a `Trajectory` is always internally
/// consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub struct Trajectory {
    pub air_density: f64,            // kg/m³
    pub burn_time: f64,              // s
    pub average_mass: f64,           // kg
    pub k: f64,                      // kg/m, drag constant
    pub q: f64,                      // m/s, terminal velocity under thrust
    pub x: f64,                      // 1/s, velocity decay rate
    pub velocity_max: f64,           // m/s, at MECO
    pub altitude_boost: f64,         // m
    pub height_coast: f64,           // m
    pub altitude_max: f64,           // m
    pub time_meco_to_apogee: f64,    // s
    pub time_apogee_to_ground: f64,  // s
    pub time_of_flight: f64,         // s
}

/// Inputs of the chain after the leaf quantities have been resolved.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChainInputs {
    pub air_density: f64,
    pub burn_time: f64,
    pub average_mass: f64,
    pub coast_mass: f64,
    pub thrust: f64,
    pub k: f64,
}

impl Trajectory {
    pub(crate) fn solve(inputs: ChainInputs) -> Result<Self, EstimationError> {
        let ChainInputs {
            air_density,
            burn_time,
            average_mass,
            coast_mass,
            thrust,
            k,
        } = inputs;

        let q = thrust_velocity(thrust, average_mass, k)?;
        tracing::trace!(q, "thrust velocity");
        let x = decay_rate(k, q, average_mass)?;
        tracing::trace!(x, "decay rate");
        let velocity_max = finite("maximum velocity", burnout_velocity(q, x, burn_time))?;
        tracing::trace!(velocity_max, "velocity at MECO");
        let altitude_boost = boost_altitude(thrust, average_mass, k, velocity_max)?;
        tracing::trace!(altitude_boost, "altitude at MECO");
        let height_coast = coast_height(coast_mass, k, velocity_max)?;
        tracing::trace!(height_coast, "height gained while coasting");
        let altitude_max = altitude_boost + height_coast;
        let time_meco_to_apogee = velocity_max / GRAVITY;
        let time_apogee_to_ground = fall_time(altitude_max)?;
        let time_of_flight = burn_time + time_meco_to_apogee + time_apogee_to_ground;

        Ok(Trajectory {
            air_density,
            burn_time,
            average_mass,
            k,
            q,
            x,
            velocity_max,
            altitude_boost,
            height_coast,
            altitude_max,
            time_meco_to_apogee,
            time_apogee_to_ground,
            time_of_flight: finite("time of flight", time_of_flight)?,
        })
    }
}

/// Velocity `q` at which drag balances net thrust: `sqrt((T - m g) / k)`.
pub fn thrust_velocity(thrust: f64, average_mass: f64, k: f64) -> Result<f64, EstimationError> {
    if k == 0.0 {
        return Err(EstimationError::DivideByZero(
            "drag constant is zero (check drag coefficient, area and air density)".to_string(),
        ));
    }
    let radicand = (thrust - average_mass * GRAVITY) / k;
    if radicand < 0.0 {
        return Err(EstimationError::DomainError(format!(
            "thrust of {thrust} N cannot lift an average mass of {average_mass} kg"
        )));
    }
    finite("thrust velocity", radicand.sqrt())
}

/// Decay rate `x = 2 k q / m` of the exponential velocity model.
pub fn decay_rate(k: f64, q: f64, average_mass: f64) -> Result<f64, EstimationError> {
    if average_mass == 0.0 {
        return Err(EstimationError::DivideByZero(
            "average vehicle mass is zero".to_string(),
        ));
    }
    finite("decay rate", 2.0 * k * q / average_mass)
}

/// Velocity reached after burning for `burn_time` seconds from rest.
pub fn burnout_velocity(q: f64, x: f64, burn_time: f64) -> f64 {
    let decay = (-x * burn_time).exp();
    q * (1.0 - decay) / (1.0 + decay)
}

/// Altitude gained under power: `-m / 2k * ln((z - y) / z)` with
/// `z = T - m g` and `y = k v²`.
pub fn boost_altitude(
    thrust: f64,
    average_mass: f64,
    k: f64,
    velocity_max: f64,
) -> Result<f64, EstimationError> {
    let z = thrust - average_mass * GRAVITY;
    if z == 0.0 {
        return Err(EstimationError::DivideByZero(
            "thrust exactly balances vehicle weight".to_string(),
        ));
    }
    let y = k * velocity_max * velocity_max;
    let ratio = (z - y) / z;
    if ratio <= 0.0 {
        return Err(EstimationError::DomainError(format!(
            "boost altitude logarithm argument {ratio} is not positive"
        )));
    }
    finite("boost altitude", (-average_mass / (2.0 * k)) * ratio.ln())
}

/// Height gained between MECO and apogee with only the empty vehicle and
/// spent motor left.
pub fn coast_height(coast_mass: f64, k: f64, velocity_max: f64) -> Result<f64, EstimationError> {
    if coast_mass == 0.0 {
        return Err(EstimationError::DivideByZero("coast mass is zero".to_string()));
    }
    if k == 0.0 {
        return Err(EstimationError::DivideByZero("drag constant is zero".to_string()));
    }
    let weight = coast_mass * GRAVITY;
    let ratio = (weight + k * velocity_max * velocity_max) / weight;
    if ratio <= 0.0 {
        return Err(EstimationError::DomainError(format!(
            "coast height logarithm argument {ratio} is not positive"
        )));
    }
    finite("coast height", (coast_mass / (2.0 * k)) * ratio.ln())
}

/// Free-fall time from apogee, ignoring drag and parachutes.
pub fn fall_time(altitude_max: f64) -> Result<f64, EstimationError> {
    if altitude_max < 0.0 {
        return Err(EstimationError::DomainError(format!(
            "maximum altitude {altitude_max} m is negative"
        )));
    }
    Ok((2.0 * altitude_max / GRAVITY).sqrt())
}

fn finite(quantity: &str, value: f64) -> Result<f64, EstimationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EstimationError::DomainError(format!(
            "{quantity} is not a finite number ({value})"
        )))
    }
}
