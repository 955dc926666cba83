//! # Core Module
//!
//! Stateless building blocks of the simulator: particle and container data
//! types, the pairwise force laws, boundary policies and physical units.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Particles and the container box
//! - **Interactions** ([`forcefield`]) - Ideal gas, Coulomb and Lennard-Jones pair laws, harmonic trap
//! - **Boundaries** ([`boundary`]) - Reflecting walls, periodic wraparound and open space
//! - **Units** ([`units`]) - Physical constants and reduced-unit conversion
//!
//! Nothing in this module owns a particle ensemble or advances time; that is
//! the job of the [`engine`](crate::engine).

pub mod boundary;
pub mod forcefield;
pub mod models;
pub mod units;
