use crate::core::boundary::Boundary;
use crate::core::forcefield::external::HarmonicTrap;
use crate::core::forcefield::model::{Coulomb, InteractionModel, LennardJones, ModelError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("At least 2 particles are required, got {0}")]
    TooFewParticles(usize),

    #[error("Unsupported dimension {0}: only 1, 2 and 3 are supported")]
    UnsupportedDimension(usize),

    #[error("Parameter '{name}' must be finite and positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("Temperature must be finite and non-negative, got {0}")]
    InvalidTemperature(f64),

    #[error("Container axis {axis} is degenerate: [{min}, {max}]")]
    DegenerateInterval { axis: usize, min: f64, max: f64 },

    #[error("Particle {index} has invalid mass {mass}")]
    InvalidParticleMass { index: usize, mass: f64 },

    #[error("Sample interval must be at least 1")]
    ZeroSampleInterval,

    #[error(transparent)]
    Model(#[from] ModelError),
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid configuration in '{path}': {source}")]
    Invalid { path: String, source: ConfigError },
}

/// Serializable description of an [`InteractionModel`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ModelSpec {
    #[default]
    IdealGas,
    Coulomb {
        #[serde(default = "unit")]
        k: f64,
    },
    LennardJones {
        #[serde(default = "unit")]
        epsilon: f64,
        #[serde(default = "unit")]
        sigma: f64,
    },
}

fn unit() -> f64 {
    1.0
}

impl ModelSpec {
    pub fn build(&self) -> Result<InteractionModel, ModelError> {
        Ok(match *self {
            ModelSpec::IdealGas => InteractionModel::IdealGas,
            ModelSpec::Coulomb { k } => InteractionModel::Coulomb(Coulomb::new(k)?),
            ModelSpec::LennardJones { epsilon, sigma } => {
                InteractionModel::LennardJones(LennardJones::new(epsilon, sigma)?)
            }
        })
    }
}

/// How charges are assigned to randomly generated particles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ChargeDistribution {
    /// Every particle is neutral.
    #[default]
    Neutral,
    /// Every particle carries the same charge.
    Uniform { charge: f64 },
    /// Each particle draws its charge uniformly from {−1, 0, +1}.
    RandomSign,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemConfig {
    pub particle_count: usize,
    #[serde(default = "unit")]
    pub mass: f64,
    pub temperature: f64,
    pub density: f64,
    #[serde(default)]
    pub boundary: Boundary,
    #[serde(default)]
    pub model: ModelSpec,
    #[serde(default)]
    pub charges: ChargeDistribution,
    #[serde(default)]
    pub trap: Option<HarmonicTrap>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SystemConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count < 2 {
            return Err(ConfigError::TooFewParticles(self.particle_count));
        }
        require_positive("mass", self.mass)?;
        require_positive("density", self.density)?;
        if !(self.temperature.is_finite() && self.temperature >= 0.0) {
            return Err(ConfigError::InvalidTemperature(self.temperature));
        }
        if let ChargeDistribution::Uniform { charge } = self.charges {
            if !charge.is_finite() {
                return Err(ConfigError::Model(ModelError::InvalidParameter {
                    model: "charge distribution",
                    name: "charge",
                    value: charge,
                    reason: "must be finite",
                }));
            }
        }
        if let Some(trap) = &self.trap {
            trap.validate()?;
        }
        self.model.build()?;
        Ok(())
    }

    /// Side length of the cubic container, `(n·m/ρ)^(1/dimension)`.
    pub fn container_side(&self, dimension: usize) -> f64 {
        (self.particle_count as f64 * self.mass / self.density).powf(1.0 / dimension as f64)
    }
}

pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

#[derive(Default)]
pub struct SystemConfigBuilder {
    particle_count: Option<usize>,
    mass: Option<f64>,
    temperature: Option<f64>,
    density: Option<f64>,
    boundary: Option<Boundary>,
    model: Option<ModelSpec>,
    charges: Option<ChargeDistribution>,
    trap: Option<HarmonicTrap>,
    seed: Option<u64>,
}

impl SystemConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn particle_count(mut self, n: usize) -> Self {
        self.particle_count = Some(n);
        self
    }
    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
    pub fn density(mut self, density: f64) -> Self {
        self.density = Some(density);
        self
    }
    pub fn boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = Some(boundary);
        self
    }
    pub fn model(mut self, model: ModelSpec) -> Self {
        self.model = Some(model);
        self
    }
    pub fn charges(mut self, charges: ChargeDistribution) -> Self {
        self.charges = Some(charges);
        self
    }
    pub fn trap(mut self, trap: HarmonicTrap) -> Self {
        self.trap = Some(trap);
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<SystemConfig, ConfigError> {
        let config = SystemConfig {
            particle_count: self
                .particle_count
                .ok_or(ConfigError::MissingParameter("particle_count"))?,
            mass: self.mass.ok_or(ConfigError::MissingParameter("mass"))?,
            temperature: self
                .temperature
                .ok_or(ConfigError::MissingParameter("temperature"))?,
            density: self
                .density
                .ok_or(ConfigError::MissingParameter("density"))?,
            boundary: self.boundary.unwrap_or_default(),
            model: self.model.unwrap_or_default(),
            charges: self.charges.unwrap_or_default(),
            trap: self.trap,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    pub steps: u64,
    pub dt: f64,
    /// Energies are sampled every `sample_interval` steps.
    #[serde(default = "default_sample_interval")]
    pub sample_interval: u64,
}

fn default_sample_interval() -> u64 {
    100
}

impl RunConfig {
    pub fn new(steps: u64, dt: f64) -> Self {
        Self {
            steps,
            dt,
            sample_interval: default_sample_interval(),
        }
    }

    pub fn with_sample_interval(mut self, interval: u64) -> Self {
        self.sample_interval = interval;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("dt", self.dt)?;
        if self.sample_interval == 0 {
            return Err(ConfigError::ZeroSampleInterval);
        }
        Ok(())
    }
}

/// A complete simulation description as read from a TOML file.
///
/// ```toml
/// [system]
/// particle_count = 100
/// temperature = 2.5
/// density = 0.8
/// boundary = "periodic"
/// model = { kind = "lennard-jones", epsilon = 1.0, sigma = 1.0 }
///
/// [run]
/// steps = 10000
/// dt = 0.001
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationConfig {
    pub system: SystemConfig,
    pub run: RunConfig,
}

impl SimulationConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let path_str = path.to_string_lossy().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io {
            path: path_str.clone(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigLoadError::Toml {
            path: path_str.clone(),
            source: e,
        })?;
        config
            .system
            .validate()
            .and_then(|_| config.run.validate())
            .map_err(|e| ConfigLoadError::Invalid {
                path: path_str,
                source: e,
            })?;
        Ok(config)
    }
}
