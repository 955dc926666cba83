// All pair functions take the squared separation `d2`. A zero `d2` is not
// guarded: it yields a non-finite result that propagates into the state.

#[inline]
pub fn lennard_jones_12_6(d2: f64, epsilon: f64, sigma6: f64, sigma12: f64) -> f64 {
    let inv_d6 = (1.0 / d2).powi(3);
    4.0 * epsilon * (sigma12 * inv_d6 * inv_d6 - sigma6 * inv_d6)
}

/// Scalar `f` such that the force on i due to j is `f · (x_i − x_j)`.
#[inline]
pub fn lennard_jones_12_6_force(d2: f64, epsilon: f64, sigma6: f64, sigma12: f64) -> f64 {
    let inv_d2 = 1.0 / d2;
    let inv_d6 = inv_d2.powi(3);
    48.0 * epsilon * inv_d2 * (sigma12 * inv_d6 * inv_d6 - 0.5 * sigma6 * inv_d6)
}

#[inline]
pub fn coulomb(d2: f64, k: f64, q1: f64, q2: f64) -> f64 {
    k * q1 * q2 / d2.sqrt()
}

/// Scalar `f` such that the force on i due to j is `f · (x_i − x_j)`.
#[inline]
pub fn coulomb_force(d2: f64, k: f64, q1: f64, q2: f64) -> f64 {
    k * q1 * q2 / (d2 * d2.sqrt())
}

#[inline]
pub fn harmonic(d2: f64, stiffness: f64) -> f64 {
    0.5 * stiffness * d2
}
