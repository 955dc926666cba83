/// Energy bookkeeping captured at a single step of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergySample {
    pub step: u64,
    pub time: f64,
    pub kinetic: f64,
    pub potential: f64,
    pub drift: f64,
}

impl EnergySample {
    pub fn total(&self) -> f64 {
        self.kinetic + self.potential
    }
}

#[derive(Debug, Clone)]
pub enum Progress {
    RunStart { total_steps: u64 },
    Sample(EnergySample),
    Diverged { step: u64 },
    RunFinish,
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::RunFinish);
    }

    #[test]
    fn reporter_forwards_events_to_callback() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        reporter.report(Progress::RunStart { total_steps: 3 });
        reporter.report(Progress::Diverged { step: 7 });
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], Progress::RunStart { total_steps: 3 }));
        assert!(matches!(events[1], Progress::Diverged { step: 7 }));
    }

    #[test]
    fn sample_total_adds_kinetic_and_potential() {
        let sample = EnergySample {
            step: 10,
            time: 0.1,
            kinetic: 1.5,
            potential: -0.5,
            drift: 0.0,
        };
        assert_eq!(sample.total(), 1.0);
    }
}
