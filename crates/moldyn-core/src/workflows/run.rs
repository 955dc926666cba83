use crate::engine::config::RunConfig;
use crate::engine::error::SystemError;
use crate::engine::progress::{EnergySample, Progress, ProgressReporter};
use crate::engine::system::System;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Samples at step 0, every `sample_interval` steps and at the final step.
    pub samples: Vec<EnergySample>,
    pub steps: u64,
    pub final_time: f64,
    pub final_drift: f64,
    /// First sampled step at which the state was no longer finite.
    pub diverged_at: Option<u64>,
}

impl RunSummary {
    /// Largest sampled energy drift. NaN if any sample's drift is NaN.
    pub fn max_drift(&self) -> f64 {
        self.samples.iter().map(|s| s.drift).fold(0.0, |max, drift| {
            if max.is_nan() || drift.is_nan() {
                f64::NAN
            } else {
                max.max(drift)
            }
        })
    }
}

/// Advances `system` by `config.steps` velocity-Verlet steps.
///
/// Non-finite states are reported once through [`Progress::Diverged`] and a
/// warning, but the run continues to the requested step count.
#[instrument(skip_all, name = "run_workflow", fields(steps = config.steps, dt = config.dt))]
pub fn run<const D: usize>(
    system: &mut System<D>,
    config: &RunConfig,
    reporter: &ProgressReporter,
) -> Result<RunSummary, SystemError> {
    config.validate()?;

    reporter.report(Progress::RunStart {
        total_steps: config.steps,
    });
    info!(
        "Starting run: {} steps of dt = {} on {} particles.",
        config.steps,
        config.dt,
        system.particle_count()
    );

    let mut samples = Vec::new();
    let mut diverged_at = None;
    record_sample(system, 0, reporter, &mut samples, &mut diverged_at);

    for step in 1..=config.steps {
        system.advance(config.dt)?;
        if step % config.sample_interval == 0 || step == config.steps {
            record_sample(system, step, reporter, &mut samples, &mut diverged_at);
        }
    }

    let summary = RunSummary {
        samples,
        steps: config.steps,
        final_time: system.time(),
        final_drift: system.energy_drift(),
        diverged_at,
    };

    reporter.report(Progress::RunFinish);
    info!(
        "Run complete at t = {:.6e}. Final energy drift {:.3e}.",
        summary.final_time, summary.final_drift
    );
    Ok(summary)
}

fn record_sample<const D: usize>(
    system: &System<D>,
    step: u64,
    reporter: &ProgressReporter,
    samples: &mut Vec<EnergySample>,
    diverged_at: &mut Option<u64>,
) {
    let sample = EnergySample {
        step,
        time: system.time(),
        kinetic: system.kinetic_energy(),
        potential: system.potential_energy(),
        drift: system.energy_drift(),
    };
    debug!(
        step,
        kinetic = sample.kinetic,
        potential = sample.potential,
        drift = sample.drift,
        "Energy sample."
    );
    reporter.report(Progress::Sample(sample));
    samples.push(sample);

    if diverged_at.is_none() && !system.is_finite() {
        warn!(
            "System state became non-finite by step {} (t = {}). Continuing.",
            step,
            system.time()
        );
        reporter.report(Progress::Diverged { step });
        *diverged_at = Some(step);
    }
}
