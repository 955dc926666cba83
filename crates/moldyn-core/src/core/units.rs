//! Physical constants and the reduced-unit system used by the simulator.
//!
//! Every quantity inside the crate is expressed in reduced Lennard-Jones units:
//! the energy scale ε, the length scale σ, the particle mass m and the Boltzmann
//! constant are all 1. SI inputs are converted once, at the boundary, through
//! [`ReducedUnits`].

/// Boltzmann constant in J/K.
pub const BOLTZMANN: f64 = 1.380_648_52e-23;

/// Avogadro constant in 1/mol.
pub const AVOGADRO: f64 = 6.022_140_857_74e23;

/// Boltzmann constant in reduced units.
pub const REDUCED_BOLTZMANN: f64 = 1.0;

/// Characteristic scales for converting SI quantities into reduced units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReducedUnits {
    /// Energy scale ε in joules.
    pub epsilon: f64,
    /// Length scale σ in metres.
    pub sigma: f64,
    /// Particle mass in kilograms.
    pub mass: f64,
}

impl ReducedUnits {
    pub fn new(epsilon: f64, sigma: f64, mass: f64) -> Self {
        Self {
            epsilon,
            sigma,
            mass,
        }
    }

    /// Scales for liquid argon: ε/k_B = 119.8 K, σ = 3.405 Å, M = 39.94 g/mol.
    pub fn argon() -> Self {
        Self::new(119.8 * BOLTZMANN, 3.405e-10, 3.994e-2 / AVOGADRO)
    }

    /// Converts a temperature in kelvin to `k_B·T/ε`.
    pub fn temperature(&self, kelvin: f64) -> f64 {
        kelvin * BOLTZMANN / self.epsilon
    }

    /// Converts a mass density in kg/m³ to `ρ·σ³/m`.
    pub fn density(&self, kg_per_m3: f64) -> f64 {
        kg_per_m3 * self.sigma.powi(3) / self.mass
    }

    /// Converts a time step in seconds to units of `σ·sqrt(m/ε)`.
    pub fn time(&self, seconds: f64) -> f64 {
        seconds * (self.epsilon / (self.mass * self.sigma.powi(2))).sqrt()
    }

    /// Converts a reduced energy back to joules.
    pub fn energy_to_si(&self, reduced: f64) -> f64 {
        reduced * self.epsilon
    }
}
