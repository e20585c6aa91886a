use std::fmt;

use crate::control::rocket::FlightModel;

/// Text rendering of a flight model: conditions, configuration and results.
pub struct Report<'a> {
    model: &'a FlightModel,
}

impl<'a> Report<'a> {
    pub fn new(model: &'a FlightModel) -> Self {
        Report { model }
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_altitude(altitude: f64) -> String {
        if altitude >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    fn write_conditions(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let conditions = self.model.conditions();
        writeln!(f, "--- Conditions ---")?;
        writeln!(f, "Temperature: {:.2} K", conditions.temperature())?;
        writeln!(f, "Pressure: {:.2} Pa", conditions.pressure())?;
        match conditions.air_density() {
            Ok(density) => writeln!(f, "Air Density: {:.4} kg/m³", density),
            Err(e) => writeln!(f, "Air Density: {}", e),
        }
    }

    fn write_configuration(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = self.model;
        writeln!(f, "--- Configuration ---")?;
        writeln!(f, "Coefficient of Drag: {}", model.drag_coefficient())?;
        writeln!(f, "Mass Empty: {} kg", model.vehicle_mass().empty)?;
        writeln!(f, "Mass Loaded: {} kg", model.vehicle_mass().loaded)?;
        writeln!(f, "Engine Mass Empty: {} kg", model.engine().mass.empty)?;
        writeln!(f, "Engine Mass Loaded: {} kg", model.engine().mass.loaded)?;
        writeln!(f, "Cross-sectional Area: {} m²", model.area())?;
        writeln!(f, "Engine Impulse: {} N⋅s", model.engine().impulse)?;
        writeln!(f, "Engine Thrust: {} N", model.engine().thrust)
    }

    fn write_results(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Results ---")?;
        let trajectory = match self.model.trajectory() {
            Ok(trajectory) => trajectory,
            Err(e) => return writeln!(f, "Estimate failed: {}", e),
        };
        writeln!(
            f,
            "Altitude at End of Boost: {}",
            Self::format_altitude(trajectory.altitude_boost)
        )?;
        writeln!(
            f,
            "Height Gained While Coasting: {}",
            Self::format_altitude(trajectory.height_coast)
        )?;
        writeln!(
            f,
            "Max Altitude: {}",
            Self::format_altitude(trajectory.altitude_max)
        )?;
        writeln!(f, "Max Velocity: {:.2} m/s", trajectory.velocity_max)?;
        writeln!(f, "Time to MECO: {}", Self::format_time(trajectory.burn_time))?;
        writeln!(
            f,
            "Time, MECO to Apogee: {}",
            Self::format_time(trajectory.time_meco_to_apogee)
        )?;
        writeln!(
            f,
            "Time, Apogee to Ground (no parachute): {}",
            Self::format_time(trajectory.time_apogee_to_ground)
        )?;
        writeln!(
            f,
            "Total Time of Flight: {}",
            Self::format_time(trajectory.time_of_flight)
        )
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_conditions(f)?;
        writeln!(f)?;
        self.write_configuration(f)?;
        writeln!(f)?;
        self.write_results(f)
    }
}
