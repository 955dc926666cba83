//! # Engine Module
//!
//! The stateful layer of MolDyn. It owns the particle ensemble and advances it
//! through time with velocity-Verlet integration.
//!
//! ## Architecture
//!
//! - **System** ([`system`]) - Construction, validation and index-checked queries
//! - **Integration** ([`integrator`]) - The velocity-Verlet step and force accumulation
//! - **Diagnostics** ([`diagnostics`]) - Energies, drift, momentum, temperature and the state report
//! - **Configuration** ([`config`]) - Builders and TOML loading for systems and runs
//! - **Progress Monitoring** ([`progress`]) - Events forwarded to an optional host callback
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! Pair forces are evaluated serially by default. Enabling the `parallel`
//! feature distributes the per-particle force rows over the rayon thread pool.

pub mod config;
pub mod diagnostics;
pub mod error;
mod integrator;
pub mod progress;
pub mod system;
pub(crate) mod utils;
