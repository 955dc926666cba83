//! # Workflows Module
//!
//! High-level entry points that drive a [`System`](crate::engine::system::System)
//! through a complete simulation.
//!
//! - **Run Workflow** ([`run`]) - Advances a system for a fixed number of steps,
//!   samples energies and forwards progress events to the host.
//! - **Scenarios** ([`scenarios`]) - Deterministic set-ups such as Rutherford
//!   scattering and the Lennard-Jones dimer.

pub mod run;
pub mod scenarios;
