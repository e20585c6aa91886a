/// Aerodynamic shape of the vehicle. The drag coefficient is held constant
/// for the whole flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
    pub area: f64, // m², cross-sectional
}

impl Aerodynamics {
    pub fn new(drag_coefficient: f64, area: f64) -> Self {
        Aerodynamics {
            drag_coefficient,
            area,
        }
    }

    /// Drag constant `k` such that the drag force is `k * v²`.
    pub fn drag_constant(&self, air_density: f64) -> f64 {
        0.5 * air_density * self.drag_coefficient * self.area
    }
}
