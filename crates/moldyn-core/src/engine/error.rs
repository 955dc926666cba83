use super::config::ConfigError;
use thiserror::Error;

/// What an out-of-range index was addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Particle,
    Axis,
}

impl std::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexKind::Particle => f.write_str("particle"),
            IndexKind::Axis => f.write_str("axis"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Clone)]
pub enum SystemError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("Index out of range: {kind} {index} (valid range 0..{len})")]
    IndexOutOfRange {
        kind: IndexKind,
        index: usize,
        len: usize,
    },

    #[error("Invalid time step {0}: must be finite and positive")]
    InvalidTimeStep(f64),
}
