//! Utility functions for the engine module.
//!
//! Random sampling of initial particle states: uniform positions, isotropic
//! thermal velocities and charge assignment.

pub mod sampling;
