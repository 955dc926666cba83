//! # Core Models Module
//!
//! Plain data types describing what is being simulated: the particles and the
//! box that contains them.
//!
//! ## Key Components
//!
//! - [`particle`] - Point particle state (position, velocity, acceleration, mass, charge)
//! - [`container`] - Per-axis bounds of the simulation box
//!
//! ## Usage
//!
//! ```ignore
//! use moldyn::core::models::{container::Container, particle::{Particle, Vector}};
//!
//! let container = Container::<2>::cube(10.0);
//! let particle = Particle::new(1.0).with_position(Vector::<2>::new(5.0, 5.0));
//! assert!(container.contains(&particle.position));
//! ```

pub mod container;
pub mod particle;
