//! Deterministic set-ups with known analytic behaviour.

use crate::core::boundary::Boundary;
use crate::core::forcefield::model::{Coulomb, InteractionModel, LennardJones};
use crate::core::models::container::{Container, Interval};
use crate::core::models::particle::{Particle, Vector};
use crate::engine::config::require_positive;
use crate::engine::error::SystemError;
use crate::engine::system::{System, System2, System3};

const RUTHERFORD_HALF_WIDTH: f64 = 20.0;
const RUTHERFORD_START: f64 = -10.0;
const DIMER_BOX_SIDE: f64 = 10.0;

/// Two-body Coulomb scattering in the plane.
///
/// Unit-mass, unit-charge particles with `k = 1` and open boundaries. The
/// target rests at the origin; the projectile starts at `(-10, b)` moving
/// along `+x` with `speed`.
pub fn rutherford(impact_parameter: f64, speed: f64) -> Result<System2, SystemError> {
    require_positive("speed", speed)?;
    let target = Particle::new(1.0).with_charge(1.0);
    let projectile = Particle::new(1.0)
        .with_position(Vector::<2>::new(RUTHERFORD_START, impact_parameter))
        .with_velocity(Vector::<2>::new(speed, 0.0))
        .with_charge(1.0);

    let axis = Interval::new(-RUTHERFORD_HALF_WIDTH, RUTHERFORD_HALF_WIDTH);
    System::from_particles(
        Container::new([axis, axis]),
        Boundary::Open,
        InteractionModel::Coulomb(Coulomb::reduced()),
        vec![target, projectile],
    )
}

/// Two reduced Lennard-Jones particles at rest, `separation` apart along `x`
/// and centred in an open box.
pub fn lennard_jones_dimer(separation: f64) -> Result<System3, SystemError> {
    let center = DIMER_BOX_SIDE / 2.0;
    let offset = Vector::<3>::new(0.5 * separation, 0.0, 0.0);
    let middle = Vector::<3>::from_element(center);
    System::from_particles(
        Container::cube(DIMER_BOX_SIDE),
        Boundary::Open,
        InteractionModel::LennardJones(LennardJones::reduced()),
        vec![
            Particle::new(1.0).with_position(middle - offset),
            Particle::new(1.0).with_position(middle + offset),
        ],
    )
}
