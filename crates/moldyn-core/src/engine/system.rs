use super::config::{ConfigError, SystemConfig, require_positive};
use super::error::{IndexKind, SystemError};
use super::utils::sampling;
use crate::core::boundary::Boundary;
use crate::core::forcefield::external::HarmonicTrap;
use crate::core::forcefield::model::InteractionModel;
use crate::core::models::container::{Container, Interval};
use crate::core::models::particle::{Particle, Vector};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument};

/// A fixed-size ensemble of particles in a `D`-dimensional container.
///
/// The system exclusively owns its particles; they are addressed by index and
/// the ensemble size never changes after construction. Time only advances
/// through [`System::advance`].
#[derive(Debug, Clone)]
pub struct System<const D: usize> {
    pub(crate) container: Container<D>,
    pub(crate) boundary: Boundary,
    pub(crate) model: InteractionModel,
    pub(crate) trap: Option<HarmonicTrap>,
    pub(crate) particles: Vec<Particle<D>>,
    pub(crate) time: f64,
    pub(crate) initial_kinetic_energy: f64,
    pub(crate) initial_potential_energy: f64,
    /// Acceleration accumulator, zeroed and refilled on every force evaluation.
    pub(crate) scratch: Vec<Vector<D>>,
}

pub type System1 = System<1>;
pub type System2 = System<2>;
pub type System3 = System<3>;

fn check_dimension<const D: usize>() -> Result<(), ConfigError> {
    if (1..=3).contains(&D) {
        Ok(())
    } else {
        Err(ConfigError::UnsupportedDimension(D))
    }
}

impl<const D: usize> System<D> {
    /// Creates a system with random initial conditions.
    ///
    /// Positions are uniform in a cubic container of side `(n·m/ρ)^(1/D)`.
    /// Velocity directions are uniform on the sphere and speeds are drawn from
    /// `Normal(0, sqrt(k_B·T/m))`. Initial accelerations and the reference
    /// energies used by [`System::energy_drift`] are computed before returning.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::InvalidConfiguration`] if `D` is not 1, 2 or 3,
    /// if any configuration value is out of range, or if the derived container
    /// side overflows.
    #[instrument(skip_all, name = "system_new", fields(dimension = D, particles = config.particle_count))]
    pub fn new(config: &SystemConfig) -> Result<Self, SystemError> {
        check_dimension::<D>()?;
        config.validate()?;
        let model = config.model.build().map_err(ConfigError::from)?;

        let side = config.container_side(D);
        require_positive("container side", side)?;
        let container = Container::cube(side);
        let speed = sampling::thermal_speed_distribution(config.temperature, config.mass)?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let particles = (0..config.particle_count)
            .map(|_| {
                let mut particle = Particle::new(config.mass);
                particle.position = sampling::uniform_position(&container, &mut rng);
                particle.velocity = sampling::thermal_velocity(&speed, &mut rng);
                particle.charge = sampling::sample_charge(&config.charges, &mut rng);
                particle
            })
            .collect();
        debug!(
            side,
            volume = container.volume(),
            "Generated random initial positions and velocities."
        );

        Ok(Self::assemble(
            container,
            config.boundary,
            model,
            config.trap,
            particles,
        ))
    }

    /// Creates a system from explicit particle states.
    ///
    /// Accelerations of the supplied particles are ignored and recomputed from
    /// the interaction model.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::InvalidConfiguration`] for an unsupported `D`,
    /// fewer than two particles, a degenerate container axis or a non-positive mass.
    pub fn from_particles(
        container: Container<D>,
        boundary: Boundary,
        model: InteractionModel,
        particles: Vec<Particle<D>>,
    ) -> Result<Self, SystemError> {
        check_dimension::<D>()?;
        if particles.len() < 2 {
            return Err(ConfigError::TooFewParticles(particles.len()).into());
        }
        if let Some(axis) = container.first_degenerate_axis() {
            let interval = container.axes()[axis];
            return Err(ConfigError::DegenerateInterval {
                axis,
                min: interval.min,
                max: interval.max,
            }
            .into());
        }
        if let Some((index, p)) = particles
            .iter()
            .enumerate()
            .find(|(_, p)| !(p.mass.is_finite() && p.mass > 0.0))
        {
            return Err(ConfigError::InvalidParticleMass {
                index,
                mass: p.mass,
            }
            .into());
        }
        Ok(Self::assemble(container, boundary, model, None, particles))
    }

    /// Adds a harmonic trap centred in the container.
    ///
    /// Meant to be chained right after construction: accelerations and the
    /// reference energies are recomputed and the clock is reset to zero.
    pub fn with_trap(self, trap: HarmonicTrap) -> Result<Self, SystemError> {
        trap.validate().map_err(ConfigError::from)?;
        Ok(Self::assemble(
            self.container,
            self.boundary,
            self.model,
            Some(trap),
            self.particles,
        ))
    }

    fn assemble(
        container: Container<D>,
        boundary: Boundary,
        model: InteractionModel,
        trap: Option<HarmonicTrap>,
        particles: Vec<Particle<D>>,
    ) -> Self {
        let n = particles.len();
        let mut system = Self {
            container,
            boundary,
            model,
            trap,
            particles,
            time: 0.0,
            initial_kinetic_energy: 0.0,
            initial_potential_energy: 0.0,
            scratch: vec![Vector::zeros(); n],
        };

        system.accumulate_accelerations();
        for (particle, a) in system.particles.iter_mut().zip(&system.scratch) {
            particle.acceleration = *a;
        }
        system.initial_kinetic_energy = system.kinetic_energy();
        system.initial_potential_energy = system.potential_energy();

        info!(
            "Initialized {}D system: {} particles, model {}, {} boundaries, E_k = {:.6e}, E_p = {:.6e}.",
            D,
            n,
            system.model.name(),
            system.boundary,
            system.initial_kinetic_energy,
            system.initial_potential_energy
        );
        system
    }

    pub fn dimension(&self) -> usize {
        D
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn model(&self) -> &InteractionModel {
        &self.model
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn trap(&self) -> Option<&HarmonicTrap> {
        self.trap.as_ref()
    }

    pub fn container(&self) -> &Container<D> {
        &self.container
    }

    pub fn particles(&self) -> &[Particle<D>] {
        &self.particles
    }

    pub fn initial_kinetic_energy(&self) -> f64 {
        self.initial_kinetic_energy
    }

    pub fn initial_potential_energy(&self) -> f64 {
        self.initial_potential_energy
    }

    /// Retrieves a particle by index.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError::IndexOutOfRange`] if `i >= particle_count()`.
    pub fn particle(&self, i: usize) -> Result<&Particle<D>, SystemError> {
        self.particles.get(i).ok_or(SystemError::IndexOutOfRange {
            kind: IndexKind::Particle,
            index: i,
            len: self.particles.len(),
        })
    }

    /// Container bounds along axis `k`.
    pub fn bounds(&self, k: usize) -> Result<Interval, SystemError> {
        self.container.axis(k).copied().ok_or(SystemError::IndexOutOfRange {
            kind: IndexKind::Axis,
            index: k,
            len: D,
        })
    }

    pub fn position(&self, i: usize, k: usize) -> Result<f64, SystemError> {
        self.component(i, k, |p| &p.position)
    }

    pub fn velocity(&self, i: usize, k: usize) -> Result<f64, SystemError> {
        self.component(i, k, |p| &p.velocity)
    }

    pub fn acceleration(&self, i: usize, k: usize) -> Result<f64, SystemError> {
        self.component(i, k, |p| &p.acceleration)
    }

    fn component(
        &self,
        i: usize,
        k: usize,
        field: impl Fn(&Particle<D>) -> &Vector<D>,
    ) -> Result<f64, SystemError> {
        let particle = self.particle(i)?;
        field(particle)
            .get(k)
            .copied()
            .ok_or(SystemError::IndexOutOfRange {
                kind: IndexKind::Axis,
                index: k,
                len: D,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::forcefield::model::LennardJones;
    use crate::engine::config::{ChargeDistribution, ModelSpec, SystemConfigBuilder};

    fn config(n: usize) -> SystemConfig {
        SystemConfigBuilder::new()
            .particle_count(n)
            .mass(1.0)
            .temperature(1.0)
            .density(0.5)
            .seed(11)
            .build()
            .unwrap()
    }

    fn pair(model: InteractionModel, separation: f64) -> System<1> {
        let particles = vec![
            Particle::new(1.0).with_position(Vector::<1>::new(5.0)),
            Particle::new(2.0).with_position(Vector::<1>::new(5.0 + separation)),
        ];
        System::from_particles(Container::cube(20.0), Boundary::Open, model, particles).unwrap()
    }

    #[test]
    fn new_creates_requested_number_of_particles_inside_container() {
        let system = System::<3>::new(&config(50)).unwrap();
        assert_eq!(system.particle_count(), 50);
        assert_eq!(system.dimension(), 3);
        assert_eq!(system.time(), 0.0);
        for p in system.particles() {
            assert!(system.container().contains(&p.position));
            assert_eq!(p.mass, 1.0);
        }
    }

    #[test]
    fn container_side_follows_particle_count_mass_and_density() {
        let system = System::<2>::new(&config(50)).unwrap();
        for k in 0..2 {
            let bounds = system.bounds(k).unwrap();
            assert_eq!(bounds.min, 0.0);
            assert!((bounds.max - 10.0).abs() < 1e-12);
        }
    }

    #[test]
    fn seeded_construction_is_reproducible() {
        let a = System::<2>::new(&config(20)).unwrap();
        let b = System::<2>::new(&config(20)).unwrap();
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn unsupported_dimensions_are_rejected() {
        assert_eq!(
            System::<0>::new(&config(4)).unwrap_err(),
            SystemError::InvalidConfiguration(ConfigError::UnsupportedDimension(0))
        );
        assert_eq!(
            System::<4>::new(&config(4)).unwrap_err(),
            SystemError::InvalidConfiguration(ConfigError::UnsupportedDimension(4))
        );
    }

    #[test]
    fn invalid_configuration_fails_cleanly() {
        let mut bad = config(4);
        bad.particle_count = 1;
        assert!(matches!(
            System::<2>::new(&bad),
            Err(SystemError::InvalidConfiguration(ConfigError::TooFewParticles(1)))
        ));
        let mut bad = config(4);
        bad.density = -2.0;
        assert!(matches!(
            System::<2>::new(&bad),
            Err(SystemError::InvalidConfiguration(ConfigError::NonPositive { .. }))
        ));
    }

    #[test]
    fn overflowing_container_side_is_rejected() {
        let mut tiny_density = config(4);
        tiny_density.density = 1e-310;
        assert!(tiny_density.validate().is_ok());
        assert!(matches!(
            System::<1>::new(&tiny_density),
            Err(SystemError::InvalidConfiguration(ConfigError::NonPositive {
                name: "container side",
                ..
            }))
        ));
    }

    #[test]
    fn random_sign_charges_are_assigned() {
        let mut cfg = config(200);
        cfg.charges = ChargeDistribution::RandomSign;
        cfg.model = ModelSpec::Coulomb { k: 1.0 };
        let system = System::<3>::new(&cfg).unwrap();
        assert!(system.particles().iter().any(|p| p.charge != 0.0));
        assert!(
            system
                .particles()
                .iter()
                .all(|p| [-1.0, 0.0, 1.0].contains(&p.charge))
        );
    }

    #[test]
    fn initial_energies_are_recorded() {
        let system = System::<3>::new(&config(10)).unwrap();
        assert_eq!(system.initial_kinetic_energy(), system.kinetic_energy());
        assert_eq!(system.initial_potential_energy(), 0.0);
        assert!(system.initial_kinetic_energy() > 0.0);
    }

    #[test]
    fn from_particles_computes_initial_accelerations() {
        let model = InteractionModel::LennardJones(LennardJones::reduced());
        let system = pair(model, 1.0);
        let force = model.pair_force(&system.particles()[0], &system.particles()[1]);
        assert_eq!(system.acceleration(0, 0).unwrap(), force[0] / 1.0);
        assert_eq!(system.acceleration(1, 0).unwrap(), -force[0] / 2.0);
        assert!(system.acceleration(0, 0).unwrap() < 0.0);
    }

    #[test]
    fn from_particles_rejects_invalid_input() {
        let one = vec![Particle::<1>::new(1.0)];
        assert!(matches!(
            System::from_particles(
                Container::cube(1.0),
                Boundary::Walls,
                InteractionModel::IdealGas,
                one
            ),
            Err(SystemError::InvalidConfiguration(ConfigError::TooFewParticles(1)))
        ));

        let two = vec![Particle::<2>::new(1.0), Particle::<2>::new(1.0)];
        let flat = Container::new([Interval::new(0.0, 1.0), Interval::new(2.0, 2.0)]);
        assert_eq!(
            System::from_particles(flat, Boundary::Walls, InteractionModel::IdealGas, two)
                .unwrap_err(),
            SystemError::InvalidConfiguration(ConfigError::DegenerateInterval {
                axis: 1,
                min: 2.0,
                max: 2.0
            })
        );

        let massless = vec![Particle::<1>::new(1.0), Particle::<1>::new(0.0)];
        assert!(matches!(
            System::from_particles(
                Container::cube(1.0),
                Boundary::Walls,
                InteractionModel::IdealGas,
                massless
            ),
            Err(SystemError::InvalidConfiguration(
                ConfigError::InvalidParticleMass { index: 1, .. }
            ))
        ));
    }

    #[test]
    fn queries_with_invalid_indices_return_errors() {
        let system = pair(InteractionModel::IdealGas, 1.0);
        assert_eq!(
            system.position(2, 0),
            Err(SystemError::IndexOutOfRange {
                kind: IndexKind::Particle,
                index: 2,
                len: 2
            })
        );
        assert_eq!(
            system.velocity(0, 1),
            Err(SystemError::IndexOutOfRange {
                kind: IndexKind::Axis,
                index: 1,
                len: 1
            })
        );
        assert!(system.acceleration(5, 5).is_err());
        assert!(system.bounds(1).is_err());
        assert!(system.particle(2).is_err());
    }

    #[test]
    fn valid_queries_return_particle_state() {
        let system = pair(InteractionModel::IdealGas, 1.5);
        assert_eq!(system.position(1, 0).unwrap(), 6.5);
        assert_eq!(system.velocity(1, 0).unwrap(), 0.0);
        assert_eq!(system.particle(1).unwrap().mass, 2.0);
    }

    #[test]
    fn with_trap_rejects_negative_stiffness() {
        let system = pair(InteractionModel::IdealGas, 1.0);
        let result = system.with_trap(HarmonicTrap { stiffness: -1.0 });
        assert!(matches!(
            result,
            Err(SystemError::InvalidConfiguration(ConfigError::Model(_)))
        ));
    }

    #[test]
    fn with_trap_pulls_particles_toward_center() {
        let system = pair(InteractionModel::IdealGas, 1.0)
            .with_trap(HarmonicTrap::new(2.0).unwrap())
            .unwrap();
        // Container centre is 10; particle 0 sits at 5.
        assert_eq!(system.acceleration(0, 0).unwrap(), 10.0);
        assert_eq!(system.initial_potential_energy(), 0.5 * 2.0 * (25.0 + 16.0));
    }
}
