use tracing::{debug, warn};

use crate::constants::DEFAULT_DRAG_COEFFICIENT;
use crate::errors::EstimationError;
use crate::trajectory_system::{
    aerodynamics::Aerodynamics,
    kinematics::{ChainInputs, Trajectory},
};

use super::{environment::AtmosphericConditions, propulsion::EngineProfile, structure::MassProfile};

/// Single-stage rocket whose flight is estimated in closed form.
///
/// Flight phases:
/// - Boost: the motor is firing, from launch to MECO.
/// - Coast: the motor is spent but the rocket keeps climbing to apogee.
/// - Descent: free fall from apogee back to the ground.
///
/// Every constructor and mutator re-runs the whole calculation chain, so the
/// stored [`Trajectory`] (or the error that stopped the chain) always matches
/// the current parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightModel {
    conditions: AtmosphericConditions,
    vehicle_mass: MassProfile,
    engine: EngineProfile,
    aerodynamics: Aerodynamics,
    outcome: Result<Trajectory, EstimationError>,
}

impl FlightModel {
    /// A model with only the ambient conditions known. Everything else is
    /// zero and the drag coefficient defaults to 0.75, so the chain reports
    /// the missing thrust until [`FlightModel::update`] supplies a vehicle.
    pub fn with_conditions(conditions: AtmosphericConditions) -> Self {
        Self::new(
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            DEFAULT_DRAG_COEFFICIENT,
            conditions,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        vehicle_mass_empty: f64,
        vehicle_mass_loaded: f64,
        engine_mass_empty: f64,
        engine_mass_loaded: f64,
        area: f64,
        impulse: f64,
        thrust: f64,
        drag_coefficient: f64,
        conditions: AtmosphericConditions,
    ) -> Self {
        let mut model = FlightModel {
            conditions,
            vehicle_mass: MassProfile::new(vehicle_mass_loaded, vehicle_mass_empty),
            engine: EngineProfile::new(
                MassProfile::new(engine_mass_loaded, engine_mass_empty),
                impulse,
                thrust,
            ),
            aerodynamics: Aerodynamics::new(drag_coefficient, area),
            outcome: Err(EstimationError::DomainError("not yet calculated".to_string())),
        };
        model.recompute();
        model
    }

    /// Replaces every parameter and recalculates. There is no partial update.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        vehicle_mass_empty: f64,
        vehicle_mass_loaded: f64,
        engine_mass_empty: f64,
        engine_mass_loaded: f64,
        area: f64,
        impulse: f64,
        thrust: f64,
        drag_coefficient: f64,
        conditions: AtmosphericConditions,
    ) -> Result<&Trajectory, EstimationError> {
        *self = Self::new(
            vehicle_mass_empty,
            vehicle_mass_loaded,
            engine_mass_empty,
            engine_mass_loaded,
            area,
            impulse,
            thrust,
            drag_coefficient,
            conditions,
        );
        self.outcome.as_ref().map_err(Clone::clone)
    }

    pub fn update_conditions(
        &mut self,
        temperature: f64,
        pressure: f64,
    ) -> Result<&Trajectory, EstimationError> {
        self.conditions.update(temperature, pressure);
        self.recompute();
        self.outcome.as_ref().map_err(Clone::clone)
    }

    /// Results of the most recent calculation.
    pub fn trajectory(&self) -> Result<&Trajectory, &EstimationError> {
        self.outcome.as_ref()
    }

    pub fn conditions(&self) -> &AtmosphericConditions {
        &self.conditions
    }

    pub fn vehicle_mass(&self) -> &MassProfile {
        &self.vehicle_mass
    }

    pub fn engine(&self) -> &EngineProfile {
        &self.engine
    }

    pub fn area(&self) -> f64 {
        self.aerodynamics.area
    }

    pub fn drag_coefficient(&self) -> f64 {
        self.aerodynamics.drag_coefficient
    }

    /// Mass left once the propellant is gone: empty vehicle plus spent motor.
    pub fn coast_mass(&self) -> f64 {
        self.vehicle_mass.empty + self.engine.mass.empty
    }

    fn recompute(&mut self) {
        debug!(
            temperature = self.conditions.temperature(),
            pressure = self.conditions.pressure(),
            thrust = self.engine.thrust,
            impulse = self.engine.impulse,
            area = self.aerodynamics.area,
            drag_coefficient = self.aerodynamics.drag_coefficient,
            "recalculating flight"
        );

        self.outcome = self.calculate();

        match &self.outcome {
            Ok(trajectory) => debug!(
                altitude_max = trajectory.altitude_max,
                velocity_max = trajectory.velocity_max,
                time_of_flight = trajectory.time_of_flight,
                "flight estimated"
            ),
            Err(e) => warn!(error = %e, "flight estimate failed"),
        }
    }

    fn calculate(&self) -> Result<Trajectory, EstimationError> {
        let air_density = self.conditions.air_density()?;
        let burn_time = self.engine.burn_time()?;
        let average_mass = self.vehicle_mass.average();
        let k = self.aerodynamics.drag_constant(air_density);

        Trajectory::solve(ChainInputs {
            air_density,
            burn_time,
            average_mass,
            coast_mass: self.coast_mass(),
            thrust: self.engine.thrust,
            k,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn demo_rocket(conditions: AtmosphericConditions) -> FlightModel {
        FlightModel::new(0.6, 0.6, 0.1, 0.125, 0.002, 20.0, 40.0, 0.75, conditions)
    }

    #[test]
    fn test_new_runs_calculations() {
        let rocket = demo_rocket(AtmosphericConditions::default());
        let trajectory = rocket.trajectory().unwrap();

        assert_eq!(trajectory.burn_time, 0.5);
        assert_eq!(trajectory.average_mass, 0.6);
        assert_relative_eq!(trajectory.k, 0.000969, epsilon = 1e-6);
        assert!(trajectory.altitude_max > trajectory.altitude_boost);
    }

    #[test]
    fn test_parameters_are_stored() {
        let rocket = demo_rocket(AtmosphericConditions::default());

        assert_eq!(rocket.vehicle_mass().empty, 0.6);
        assert_eq!(rocket.vehicle_mass().loaded, 0.6);
        assert_eq!(rocket.engine().mass.empty, 0.1);
        assert_eq!(rocket.engine().mass.loaded, 0.125);
        assert_eq!(rocket.engine().impulse, 20.0);
        assert_eq!(rocket.engine().thrust, 40.0);
        assert_eq!(rocket.area(), 0.002);
        assert_eq!(rocket.drag_coefficient(), 0.75);
        assert_relative_eq!(rocket.coast_mass(), 0.7, epsilon = 1e-12);
    }

    #[test]
    fn test_with_conditions_defaults() {
        let rocket = FlightModel::with_conditions(AtmosphericConditions::default());

        assert_eq!(rocket.drag_coefficient(), 0.75);
        assert_eq!(rocket.area(), 0.0);
        assert_eq!(rocket.engine().thrust, 0.0);
        assert_eq!(rocket.vehicle_mass().average(), 0.0);
        assert!(matches!(
            rocket.trajectory(),
            Err(EstimationError::DivideByZero(_))
        ));
    }

    #[test]
    fn test_update_replaces_everything() {
        let mut rocket = FlightModel::with_conditions(AtmosphericConditions::default());

        let altitude = rocket
            .update(0.6, 0.6, 0.1, 0.125, 0.002, 20.0, 40.0, 0.75, AtmosphericConditions::default())
            .unwrap()
            .altitude_max;

        assert_eq!(rocket.engine().thrust, 40.0);
        assert_eq!(rocket.trajectory().unwrap().altitude_max, altitude);
    }

    #[test]
    fn test_update_conditions_recomputes() {
        let mut rocket = demo_rocket(AtmosphericConditions::default());
        let sea_level = *rocket.trajectory().unwrap();

        let thin_air = *rocket.update_conditions(273.15, 60_000.0).unwrap();

        assert_eq!(rocket.conditions().pressure(), 60_000.0);
        assert!(thin_air.air_density < sea_level.air_density);
        assert!(thin_air.altitude_max > sea_level.altitude_max);
        assert_eq!(rocket.trajectory().unwrap(), &thin_air);
    }

    #[test]
    fn test_update_conditions_reports_zero_temperature() {
        let mut rocket = demo_rocket(AtmosphericConditions::default());

        let result = rocket.update_conditions(0.0, 101_325.0);

        assert!(matches!(result, Err(EstimationError::DivideByZero(_))));
        assert!(rocket.trajectory().is_err());
    }

    #[test]
    fn test_insufficient_thrust_is_domain_error() {
        let rocket = FlightModel::new(
            10.0,
            10.0,
            0.1,
            0.125,
            0.002,
            20.0,
            1.0,
            0.75,
            AtmosphericConditions::default(),
        );
        assert!(matches!(
            rocket.trajectory(),
            Err(EstimationError::DomainError(_))
        ));
    }

    #[test]
    fn test_zero_area_divides_by_zero() {
        let rocket = FlightModel::new(
            0.6,
            0.6,
            0.1,
            0.125,
            0.0,
            20.0,
            40.0,
            0.75,
            AtmosphericConditions::default(),
        );
        assert!(matches!(
            rocket.trajectory(),
            Err(EstimationError::DivideByZero(_))
        ));
    }

    #[test]
    fn test_recalculation_is_idempotent() {
        let mut rocket = demo_rocket(AtmosphericConditions::default());
        let first = *rocket.trajectory().unwrap();

        let second = *rocket.update_conditions(273.15, 101_325.0).unwrap();

        assert_eq!(first, second);
    }
}
