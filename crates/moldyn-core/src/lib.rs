//! # MolDyn Core Library
//!
//! A Newtonian N-body particle simulator. A fixed ensemble of point particles is
//! advanced through time with velocity-Verlet integration under an ideal-gas,
//! Coulomb or Lennard-Jones pair interaction, inside a container with
//! reflective, periodic or open boundaries.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Particle`, `Container`),
//!   the pair potentials and interaction models, boundary policies and unit conversion.
//!
//! - **[`engine`]: The Logic Core.** The stateful `System`, its velocity-Verlet
//!   integrator, energy diagnostics, validated configuration and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Complete runs with energy sampling and
//!   deterministic canned scenarios built on top of the engine.
//!
//! All quantities are in reduced Lennard-Jones units (`ε = σ = m = k_B = 1`);
//! [`core::units::ReducedUnits`] converts SI inputs.

pub mod core;
pub mod engine;
pub mod workflows;
