//! Tick scheduling
//!
//! The engine only ever sees discrete ticks. A [`TickScheduler`] decides when
//! those ticks happen; the session starts, stops and re-times it as the run
//! status and speed change.

pub mod interval;

pub use interval::IntervalScheduler;

use std::time::Duration;

/// A recurring tick source that can be started, stopped and re-timed
pub trait TickScheduler {
    /// Begin ticking every `period`, replacing any running schedule
    fn start(&mut self, period: Duration);

    /// Stop ticking. Stopping an idle scheduler is a no-op.
    fn stop(&mut self);

    /// Restart an active schedule at `period`; an idle scheduler stays idle
    fn reschedule(&mut self, period: Duration) {
        if self.is_active() {
            self.start(period);
        }
    }

    fn is_active(&self) -> bool;

    /// Current period if active
    fn period(&self) -> Option<Duration>;
}

/// Scheduler driven by hand, for headless runs and tests
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ManualScheduler {
    period: Option<Duration>,
    /// Number of times a schedule was (re)started
    pub starts: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TickScheduler for ManualScheduler {
    fn start(&mut self, period: Duration) {
        self.period = Some(period);
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.period = None;
    }

    fn is_active(&self) -> bool {
        self.period.is_some()
    }

    fn period(&self) -> Option<Duration> {
        self.period
    }
}
