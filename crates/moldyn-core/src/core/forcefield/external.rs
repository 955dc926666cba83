use super::model::ModelError;
use super::potentials;
use crate::core::models::particle::{Particle, Vector};
use serde::{Deserialize, Serialize};

/// A harmonic restoring force pulling every particle toward a fixed centre.
///
/// The force on a particle at `x` is `−k·(x − c)` and its potential energy is
/// `0.5·k·|x − c|²`. The system places `c` at the centre of its container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HarmonicTrap {
    pub stiffness: f64,
}

impl HarmonicTrap {
    pub fn new(stiffness: f64) -> Result<Self, ModelError> {
        let trap = Self { stiffness };
        trap.validate()?;
        Ok(trap)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.stiffness.is_finite() && self.stiffness >= 0.0 {
            Ok(())
        } else {
            Err(ModelError::InvalidParameter {
                model: "harmonic trap",
                name: "stiffness",
                value: self.stiffness,
                reason: "must be finite and non-negative",
            })
        }
    }

    #[inline]
    pub fn force<const D: usize>(&self, particle: &Particle<D>, center: &Vector<D>) -> Vector<D> {
        (particle.position - center) * -self.stiffness
    }

    #[inline]
    pub fn potential<const D: usize>(&self, particle: &Particle<D>, center: &Vector<D>) -> f64 {
        potentials::harmonic((particle.position - center).norm_squared(), self.stiffness)
    }
}
