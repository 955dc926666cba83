use super::error::SystemError;
use super::system::System;
use crate::core::models::particle::Vector;
use tracing::instrument;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl<const D: usize> System<D> {
    /// Advances the system by one velocity-Verlet step of length `dt`.
    ///
    /// 1. `x += v·dt + ½·a·dt²`, followed by the boundary policy on every axis.
    /// 2. Accelerations `a'` are re-evaluated at the new positions.
    /// 3. `v += ½·(a + a')·dt`, then `a = a'`.
    /// 4. The clock advances by `dt`.
    ///
    /// Coincident particles are not detected: the resulting non-finite values
    /// propagate through the state and show up in the energy diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::InvalidTimeStep`] without touching the state if
    /// `dt` is not finite and positive.
    #[instrument(level = "trace", skip_all, fields(dt = dt, time = self.time))]
    pub fn advance(&mut self, dt: f64) -> Result<(), SystemError> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SystemError::InvalidTimeStep(dt));
        }
        let half_dt2 = 0.5 * dt * dt;

        let container = &self.container;
        let boundary = self.boundary;
        for particle in self.particles.iter_mut() {
            for k in 0..D {
                particle.position[k] +=
                    particle.velocity[k] * dt + particle.acceleration[k] * half_dt2;
                boundary.apply(
                    &container.axes()[k],
                    &mut particle.position[k],
                    &mut particle.velocity[k],
                );
            }
        }

        self.accumulate_accelerations();

        for (particle, a_next) in self.particles.iter_mut().zip(&self.scratch) {
            for k in 0..D {
                particle.velocity[k] += 0.5 * (particle.acceleration[k] + a_next[k]) * dt;
            }
            particle.acceleration = *a_next;
        }

        self.time += dt;
        Ok(())
    }

    /// Advances the system by `steps` consecutive steps of length `dt`.
    pub fn advance_many(&mut self, dt: f64, steps: u64) -> Result<(), SystemError> {
        for _ in 0..steps {
            self.advance(dt)?;
        }
        Ok(())
    }

    /// Fills the scratch buffer with the acceleration of every particle at the
    /// current positions.
    pub(crate) fn accumulate_accelerations(&mut self) {
        self.scratch.iter_mut().for_each(|a| *a = Vector::zeros());

        if self.model.is_interacting() {
            #[cfg(not(feature = "parallel"))]
            self.accumulate_pair_accelerations();

            #[cfg(feature = "parallel")]
            self.accumulate_pair_accelerations_parallel();
        }

        if let Some(trap) = &self.trap {
            let center = self.container.center();
            for (particle, a) in self.particles.iter().zip(self.scratch.iter_mut()) {
                *a += trap.force(particle, &center) / particle.mass;
            }
        }
    }

    /// Serial pair loop: each unordered pair is evaluated once and applied to
    /// both particles with opposite signs.
    #[cfg_attr(feature = "parallel", allow(dead_code))]
    fn accumulate_pair_accelerations(&mut self) {
        let n = self.particles.len();
        let model = &self.model;
        let particles = &self.particles;
        let scratch = &mut self.scratch;

        for i in 0..n {
            let (head, tail) = scratch.split_at_mut(i + 1);
            let a_i = &mut head[i];
            let p_i = &particles[i];
            for (offset, a_j) in tail.iter_mut().enumerate() {
                let p_j = &particles[i + 1 + offset];
                let force = model.pair_force(p_i, p_j);
                *a_i += force / p_i.mass;
                *a_j -= force / p_j.mass;
            }
        }
    }

    /// Row-parallel variant: each particle sums the forces from all others in
    /// increasing index order, so the result does not depend on the number of
    /// worker threads.
    #[cfg(feature = "parallel")]
    fn accumulate_pair_accelerations_parallel(&mut self) {
        let model = &self.model;
        let particles = &self.particles;

        self.scratch.par_iter_mut().enumerate().for_each(|(i, a_i)| {
            let p_i = &particles[i];
            let mut total = Vector::<D>::zeros();
            for (j, p_j) in particles.iter().enumerate() {
                if j != i {
                    total += model.pair_force(p_i, p_j);
                }
            }
            *a_i = total / p_i.mass;
        });
    }
}
