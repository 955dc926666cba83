use nalgebra::SVector;

/// A `D`-dimensional vector of reals, the storage type for every per-particle quantity.
pub type Vector<const D: usize> = SVector<f64, D>;

/// A point particle in a `D`-dimensional container.
///
/// Particles carry no identity of their own: the owning system addresses them
/// by their index in the ensemble, and that index never changes during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle<const D: usize> {
    /// Position in reduced length units.
    pub position: Vector<D>,
    /// Velocity in reduced velocity units.
    pub velocity: Vector<D>,
    /// Acceleration from the most recent force evaluation.
    pub acceleration: Vector<D>,
    /// Mass in reduced mass units. Must be strictly positive.
    pub mass: f64,
    /// Charge used by the Coulomb model; ignored by the other models.
    pub charge: f64,
}

impl<const D: usize> Particle<D> {
    /// Creates a particle at rest at the origin.
    ///
    /// # Arguments
    ///
    /// * `mass` - The particle mass.
    pub fn new(mass: f64) -> Self {
        Self {
            position: Vector::zeros(),
            velocity: Vector::zeros(),
            acceleration: Vector::zeros(),
            mass,
            charge: 0.0,
        }
    }

    /// Sets the position, consuming and returning the particle.
    pub fn with_position(mut self, position: Vector<D>) -> Self {
        self.position = position;
        self
    }

    /// Sets the velocity, consuming and returning the particle.
    pub fn with_velocity(mut self, velocity: Vector<D>) -> Self {
        self.velocity = velocity;
        self
    }

    /// Sets the charge, consuming and returning the particle.
    pub fn with_charge(mut self, charge: f64) -> Self {
        self.charge = charge;
        self
    }

    /// Kinetic energy `0.5·m·|v|²` of this particle.
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }

    /// Linear momentum `m·v` of this particle.
    #[inline]
    pub fn momentum(&self) -> Vector<D> {
        self.velocity * self.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_particle_is_at_rest_at_origin_and_neutral() {
        let p = Particle::<3>::new(2.0);
        assert_eq!(p.position, Vector::<3>::zeros());
        assert_eq!(p.velocity, Vector::<3>::zeros());
        assert_eq!(p.acceleration, Vector::<3>::zeros());
        assert_eq!(p.mass, 2.0);
        assert_eq!(p.charge, 0.0);
    }

    #[test]
    fn builder_methods_set_state() {
        let p = Particle::<2>::new(1.0)
            .with_position(Vector::<2>::new(1.0, 2.0))
            .with_velocity(Vector::<2>::new(-1.0, 0.5))
            .with_charge(-1.0);
        assert_eq!(p.position, Vector::<2>::new(1.0, 2.0));
        assert_eq!(p.velocity, Vector::<2>::new(-1.0, 0.5));
        assert_eq!(p.charge, -1.0);
    }

    #[test]
    fn kinetic_energy_is_half_m_v_squared() {
        let p = Particle::<2>::new(2.0).with_velocity(Vector::<2>::new(3.0, 4.0));
        assert_eq!(p.kinetic_energy(), 25.0);
    }

    #[test]
    fn momentum_is_mass_times_velocity() {
        let p = Particle::<1>::new(3.0).with_velocity(Vector::<1>::new(-2.0));
        assert_eq!(p.momentum(), Vector::<1>::new(-6.0));
    }
}
