use super::system::System;
use crate::core::models::particle::Vector;
use crate::core::units::REDUCED_BOLTZMANN;
use itertools::Itertools;
use std::fmt;

/// Below this magnitude the initial total energy is treated as zero and the
/// drift is reported in absolute terms.
const DRIFT_REFERENCE_FLOOR: f64 = 1e-12;

impl<const D: usize> System<D> {
    /// `½·Σ m_i·|v_i|²`
    pub fn kinetic_energy(&self) -> f64 {
        self.particles.iter().map(|p| p.kinetic_energy()).sum()
    }

    /// Pair energy summed over every unordered pair exactly once, plus the
    /// trap energy when a trap is installed.
    pub fn potential_energy(&self) -> f64 {
        let pair_energy: f64 = if self.model.is_interacting() {
            self.particles
                .iter()
                .tuple_combinations()
                .map(|(a, b)| self.model.pair_potential(a, b))
                .sum()
        } else {
            0.0
        };

        let trap_energy: f64 = match &self.trap {
            Some(trap) => {
                let center = self.container.center();
                self.particles
                    .iter()
                    .map(|p| trap.potential(p, &center))
                    .sum()
            }
            None => 0.0,
        };

        pair_energy + trap_energy
    }

    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }

    pub fn initial_total_energy(&self) -> f64 {
        self.initial_kinetic_energy + self.initial_potential_energy
    }

    /// `|E − E₀| / |E₀|`, or `|E − E₀|` when `E₀` is effectively zero.
    pub fn energy_drift(&self) -> f64 {
        let e0 = self.initial_total_energy();
        let delta = (self.total_energy() - e0).abs();
        if e0.abs() < DRIFT_REFERENCE_FLOOR {
            delta
        } else {
            delta / e0.abs()
        }
    }

    pub fn total_momentum(&self) -> Vector<D> {
        self.particles
            .iter()
            .fold(Vector::zeros(), |acc, p| acc + p.momentum())
    }

    /// Instantaneous kinetic temperature `2·E_k / (D·N·k_B)`.
    pub fn temperature(&self) -> f64 {
        let dof = (D * self.particles.len()) as f64;
        2.0 * self.kinetic_energy() / (dof * REDUCED_BOLTZMANN)
    }

    /// Whether every particle state and both energies are finite.
    pub fn is_finite(&self) -> bool {
        let states_finite = self.particles.iter().all(|p| {
            p.position.iter().all(|x| x.is_finite())
                && p.velocity.iter().all(|x| x.is_finite())
                && p.acceleration.iter().all(|x| x.is_finite())
        });
        states_finite && self.total_energy().is_finite()
    }

    /// A read-only view that renders the full system state as text.
    pub fn report(&self) -> Report<'_, D> {
        Report { system: self }
    }
}

/// Textual dump of a [`System`], produced by [`System::report`].
pub struct Report<'a, const D: usize> {
    system: &'a System<D>,
}

impl<const D: usize> fmt::Display for Report<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let system = self.system;
        writeln!(f, "Dimension:      {}", D)?;
        writeln!(f, "Particles:      {}", system.particle_count())?;
        writeln!(f, "Model:          {}", system.model())?;
        writeln!(f, "Boundary:       {}", system.boundary())?;
        if let Some(trap) = system.trap() {
            writeln!(f, "Trap:           harmonic (k = {})", trap.stiffness)?;
        }
        for (k, axis) in system.container().axes().iter().enumerate() {
            writeln!(f, "Bounds[{}]:      [{}, {}]", k, axis.min, axis.max)?;
        }
        writeln!(f, "Volume:         {:.6e}", system.container().volume())?;
        writeln!(f, "Time:           {:.6e}", system.time())?;
        writeln!(f, "Kinetic:        {:.6e}", system.kinetic_energy())?;
        writeln!(f, "Potential:      {:.6e}", system.potential_energy())?;

        write!(f, "{:>6} {:>10} {:>10}", "index", "mass", "charge")?;
        for prefix in ["X", "V", "A"] {
            for k in 0..D {
                write!(f, " {:>14}", format!("{}{}", prefix, k))?;
            }
        }
        writeln!(f)?;

        for (i, p) in system.particles().iter().enumerate() {
            write!(f, "{:>6} {:>10.4} {:>10.4}", i, p.mass, p.charge)?;
            for vector in [&p.position, &p.velocity, &p.acceleration] {
                for x in vector.iter() {
                    write!(f, " {:>14.6e}", x)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
