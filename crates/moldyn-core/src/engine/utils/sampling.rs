use crate::core::models::container::Container;
use crate::core::models::particle::Vector;
use crate::core::units::REDUCED_BOLTZMANN;
use crate::engine::config::{ChargeDistribution, ConfigError};
use rand::Rng;
use rand_distr::{Distribution, Normal, StandardNormal};
use tracing::instrument;

/// A point drawn uniformly from the container.
pub fn uniform_position<const D: usize>(container: &Container<D>, rng: &mut impl Rng) -> Vector<D> {
    let axes = container.axes();
    Vector::from_fn(|k, _| rng.gen_range(axes[k].min..axes[k].max))
}

/// A unit vector uniformly distributed on the `D`-sphere.
///
/// Each component is drawn from a standard normal and the result is
/// normalised by its Euclidean length, which is rotationally invariant.
pub fn random_direction<const D: usize>(rng: &mut impl Rng) -> Vector<D> {
    loop {
        let v: Vector<D> = Vector::from_fn(|_, _| StandardNormal.sample(rng));
        let norm = v.norm();
        if norm > f64::EPSILON {
            return v / norm;
        }
    }
}

/// Speed distribution `Normal(0, sqrt(k_B·T/m))` in reduced units.
#[instrument(level = "trace", skip_all, fields(temperature, mass))]
pub fn thermal_speed_distribution(temperature: f64, mass: f64) -> Result<Normal<f64>, ConfigError> {
    let stddev = (REDUCED_BOLTZMANN * temperature / mass).sqrt();
    if !stddev.is_finite() {
        return Err(ConfigError::InvalidTemperature(temperature));
    }
    Normal::new(0.0, stddev).map_err(|_| ConfigError::InvalidTemperature(temperature))
}

/// A velocity with uniformly random direction and normally distributed speed.
pub fn thermal_velocity<const D: usize>(speed: &Normal<f64>, rng: &mut impl Rng) -> Vector<D> {
    let direction = random_direction::<D>(rng);
    direction * speed.sample(rng)
}

pub fn sample_charge(distribution: &ChargeDistribution, rng: &mut impl Rng) -> f64 {
    match *distribution {
        ChargeDistribution::Neutral => 0.0,
        ChargeDistribution::Uniform { charge } => charge,
        ChargeDistribution::RandomSign => rng.gen_range(-1i32..=1) as f64,
    }
}
