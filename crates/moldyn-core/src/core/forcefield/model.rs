use super::potentials;
use crate::core::models::particle::{Particle, Vector};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ModelError {
    #[error("Invalid {model} parameter '{name}': {value} ({reason})")]
    InvalidParameter {
        model: &'static str,
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Lennard-Jones 12-6 interaction with σ⁶ and σ¹² precomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LennardJones {
    epsilon: f64,
    sigma: f64,
    sigma6: f64,
    sigma12: f64,
}

impl LennardJones {
    pub fn new(epsilon: f64, sigma: f64) -> Result<Self, ModelError> {
        if !(epsilon.is_finite() && epsilon > 0.0) {
            return Err(ModelError::InvalidParameter {
                model: "Lennard-Jones",
                name: "epsilon",
                value: epsilon,
                reason: "must be finite and positive",
            });
        }
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(ModelError::InvalidParameter {
                model: "Lennard-Jones",
                name: "sigma",
                value: sigma,
                reason: "must be finite and positive",
            });
        }
        let sigma6 = sigma.powi(6);
        Ok(Self {
            epsilon,
            sigma,
            sigma6,
            sigma12: sigma6 * sigma6,
        })
    }

    /// ε = σ = 1.
    pub fn reduced() -> Self {
        Self {
            epsilon: 1.0,
            sigma: 1.0,
            sigma6: 1.0,
            sigma12: 1.0,
        }
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Separation of the potential minimum, `2^(1/6)·σ`.
    pub fn equilibrium_distance(&self) -> f64 {
        2.0f64.powf(1.0 / 6.0) * self.sigma
    }

    #[inline]
    pub fn potential(&self, d2: f64) -> f64 {
        potentials::lennard_jones_12_6(d2, self.epsilon, self.sigma6, self.sigma12)
    }

    #[inline]
    pub fn force_scalar(&self, d2: f64) -> f64 {
        potentials::lennard_jones_12_6_force(d2, self.epsilon, self.sigma6, self.sigma12)
    }
}

/// Coulomb interaction `k·q_i·q_j / r`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coulomb {
    k: f64,
}

impl Coulomb {
    pub fn new(k: f64) -> Result<Self, ModelError> {
        if !k.is_finite() {
            return Err(ModelError::InvalidParameter {
                model: "Coulomb",
                name: "k",
                value: k,
                reason: "must be finite",
            });
        }
        Ok(Self { k })
    }

    /// Gaussian reduced units, `k = 1`.
    pub fn reduced() -> Self {
        Self { k: 1.0 }
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    #[inline]
    pub fn potential(&self, d2: f64, q1: f64, q2: f64) -> f64 {
        if q1 == 0.0 || q2 == 0.0 {
            return 0.0;
        }
        potentials::coulomb(d2, self.k, q1, q2)
    }

    #[inline]
    pub fn force_scalar(&self, d2: f64, q1: f64, q2: f64) -> f64 {
        if q1 == 0.0 || q2 == 0.0 {
            return 0.0;
        }
        potentials::coulomb_force(d2, self.k, q1, q2)
    }
}

/// The pairwise force law acting between every pair of particles.
///
/// Every variant is central: the force on `i` due to `j` is a scalar function
/// of the squared separation `d2` times the separation vector `x_i − x_j`,
/// which makes the pair force exactly antisymmetric.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionModel {
    /// No interaction at all; particles move on straight lines.
    #[default]
    IdealGas,
    /// Electrostatic interaction between charged particles.
    Coulomb(Coulomb),
    /// Lennard-Jones 12-6 van der Waals interaction.
    LennardJones(LennardJones),
}

impl InteractionModel {
    pub fn name(&self) -> &'static str {
        match self {
            InteractionModel::IdealGas => "Ideal gas",
            InteractionModel::Coulomb(_) => "Coulomb",
            InteractionModel::LennardJones(_) => "Lennard-Jones",
        }
    }

    /// Whether the model ever produces a non-zero force.
    pub fn is_interacting(&self) -> bool {
        !matches!(self, InteractionModel::IdealGas)
    }

    /// Potential energy of one pair at squared separation `d2`.
    #[inline]
    pub fn potential(&self, d2: f64, q1: f64, q2: f64) -> f64 {
        match self {
            InteractionModel::IdealGas => 0.0,
            InteractionModel::Coulomb(c) => c.potential(d2, q1, q2),
            InteractionModel::LennardJones(lj) => lj.potential(d2),
        }
    }

    /// Scalar `f` such that the force on i due to j is `f · (x_i − x_j)`.
    #[inline]
    pub fn force_scalar(&self, d2: f64, q1: f64, q2: f64) -> f64 {
        match self {
            InteractionModel::IdealGas => 0.0,
            InteractionModel::Coulomb(c) => c.force_scalar(d2, q1, q2),
            InteractionModel::LennardJones(lj) => lj.force_scalar(d2),
        }
    }

    /// Potential energy between two particles.
    #[inline]
    pub fn pair_potential<const D: usize>(&self, a: &Particle<D>, b: &Particle<D>) -> f64 {
        let d2 = (a.position - b.position).norm_squared();
        self.potential(d2, a.charge, b.charge)
    }

    /// Force acting on `a` due to `b`. The force on `b` due to `a` is its exact negation.
    #[inline]
    pub fn pair_force<const D: usize>(&self, a: &Particle<D>, b: &Particle<D>) -> Vector<D> {
        if !self.is_interacting() {
            return Vector::zeros();
        }
        let s = a.position - b.position;
        let d2 = s.norm_squared();
        s * self.force_scalar(d2, a.charge, b.charge)
    }
}

impl fmt::Display for InteractionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteractionModel::IdealGas => write!(f, "{}", self.name()),
            InteractionModel::Coulomb(c) => write!(f, "{} (k = {})", self.name(), c.k),
            InteractionModel::LennardJones(lj) => write!(
                f,
                "{} (epsilon = {}, sigma = {})",
                self.name(),
                lj.epsilon,
                lj.sigma
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn particle_at(x: [f64; 3], charge: f64) -> Particle<3> {
        Particle::new(1.0)
            .with_position(Vector::<3>::new(x[0], x[1], x[2]))
            .with_charge(charge)
    }

    #[test]
    fn lennard_jones_rejects_non_positive_parameters() {
        assert!(matches!(
            LennardJones::new(0.0, 1.0),
            Err(ModelError::InvalidParameter { name: "epsilon", .. })
        ));
        assert!(matches!(
            LennardJones::new(1.0, -1.0),
            Err(ModelError::InvalidParameter { name: "sigma", .. })
        ));
        assert!(LennardJones::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn lennard_jones_precomputes_sigma_powers() {
        let lj = LennardJones::new(1.0, 2.0).unwrap();
        assert_eq!(lj.sigma6, 64.0);
        assert_eq!(lj.sigma12, 4096.0);
    }

    #[test]
    fn lennard_jones_force_is_zero_at_equilibrium_distance() {
        let lj = LennardJones::reduced();
        let d = lj.equilibrium_distance();
        assert!(lj.force_scalar(d * d).abs() < 1e-12);
    }

    #[test]
    fn lennard_jones_potential_at_equilibrium_is_minus_epsilon() {
        let lj = LennardJones::new(0.5, 1.5).unwrap();
        let d = lj.equilibrium_distance();
        assert!(f64_approx_equal(lj.potential(d * d), -0.5));
    }

    #[test]
    fn coulomb_rejects_non_finite_constant() {
        assert!(Coulomb::new(f64::INFINITY).is_err());
        assert!(Coulomb::new(-2.0).is_ok());
    }

    #[test]
    fn coulomb_skips_neutral_particles_even_when_coincident() {
        let coulomb = Coulomb::reduced();
        assert_eq!(coulomb.force_scalar(0.0, 0.0, 1.0), 0.0);
        assert_eq!(coulomb.potential(0.0, 1.0, 0.0), 0.0);
    }

    #[test]
    fn ideal_gas_has_no_potential_or_force() {
        let model = InteractionModel::IdealGas;
        let a = particle_at([0.0, 0.0, 0.0], 1.0);
        let b = particle_at([1.0, 0.0, 0.0], 1.0);
        assert_eq!(model.pair_potential(&a, &b), 0.0);
        assert_eq!(model.pair_force(&a, &b), Vector::<3>::zeros());
    }

    #[test]
    fn pair_force_obeys_newtons_third_law_exactly() {
        let models = [
            InteractionModel::LennardJones(LennardJones::reduced()),
            InteractionModel::Coulomb(Coulomb::reduced()),
        ];
        let a = particle_at([0.1, 0.7, -0.3], 1.0);
        let b = particle_at([1.3, -0.2, 0.45], -1.0);
        for model in models {
            let f_ab = model.pair_force(&a, &b);
            let f_ba = model.pair_force(&b, &a);
            assert_eq!(f_ab, -f_ba, "{} violates action-reaction", model.name());
        }
    }

    #[test]
    fn coulomb_pair_force_points_away_for_like_charges() {
        let model = InteractionModel::Coulomb(Coulomb::reduced());
        let a = particle_at([0.0, 0.0, 0.0], 1.0);
        let b = particle_at([2.0, 0.0, 0.0], 1.0);
        let f = model.pair_force(&a, &b);
        assert!(f64_approx_equal(f[0], -0.25));
        assert_eq!(f[1], 0.0);
        assert!(f64_approx_equal(model.pair_potential(&a, &b), 0.5));
    }

    #[test]
    fn lennard_jones_pair_force_is_non_finite_for_coincident_particles() {
        let model = InteractionModel::LennardJones(LennardJones::reduced());
        let a = particle_at([1.0, 1.0, 1.0], 0.0);
        let f = model.pair_force(&a, &a);
        assert!(f.iter().all(|c| !c.is_finite()));
        assert!(!model.pair_potential(&a, &a).is_finite());
    }

    #[test]
    fn model_names_and_display() {
        assert_eq!(InteractionModel::IdealGas.name(), "Ideal gas");
        assert_eq!(
            InteractionModel::Coulomb(Coulomb::reduced()).to_string(),
            "Coulomb (k = 1)"
        );
        assert_eq!(
            InteractionModel::LennardJones(LennardJones::reduced()).to_string(),
            "Lennard-Jones (epsilon = 1, sigma = 1)"
        );
    }
}
