//! # Force Field Module
//!
//! Pairwise interaction laws and external fields acting on the particles.
//!
//! ## Overview
//!
//! Every interaction is central and depends only on the squared separation
//! `d2 = |x_i − x_j|²`, so each law is expressed as two scalar functions of
//! `d2`: the pair potential and the force factor `f` with
//! `F_ij = f(d2) · (x_i − x_j)`. Evaluating `f` once per pair and applying it
//! with opposite signs gives Newton's third law exactly.
//!
//! ## Key Components
//!
//! - [`model`] - The [`InteractionModel`](model::InteractionModel) enum: ideal gas, Coulomb, Lennard-Jones
//! - [`external`] - The optional [`HarmonicTrap`](external::HarmonicTrap) confining field
//! - `potentials` - Raw inline potential and force kernels
//!
//! ## Usage
//!
//! ```ignore
//! use moldyn::core::forcefield::model::{InteractionModel, LennardJones};
//!
//! let model = InteractionModel::LennardJones(LennardJones::new(1.0, 1.0)?);
//! let force_on_a = model.pair_force(&a, &b);
//! ```

pub mod external;
pub mod model;
pub(crate) mod potentials;
