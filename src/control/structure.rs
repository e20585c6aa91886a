/// Loaded and empty mass of a body, in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MassProfile {
    pub loaded: f64,
    pub empty: f64,
}

impl MassProfile {
    pub fn new(loaded: f64, empty: f64) -> Self {
        MassProfile { loaded, empty }
    }

    /// Representative mass over a burn, assuming propellant is consumed at a
    /// constant rate.
    pub fn average(&self) -> f64 {
        (self.loaded + self.empty) / 2.0
    }
}
