use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use super::TickScheduler;

/// Tokio-backed scheduler; await [`IntervalScheduler::tick`] inside a `select!`
///
/// Must be started from within a Tokio runtime.
#[derive(Debug, Default)]
pub struct IntervalScheduler {
    timer: Option<Interval>,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves on the next tick; never resolves while stopped
    pub async fn tick(&mut self) {
        match self.timer.as_mut() {
            Some(timer) => {
                timer.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

impl TickScheduler for IntervalScheduler {
    fn start(&mut self, period: Duration) {
        // First tick lands one full period after starting, not immediately.
        let mut timer = interval_at(Instant::now() + period, period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.timer = Some(timer);
    }

    fn stop(&mut self) {
        self.timer = None;
    }

    fn is_active(&self) -> bool {
        self.timer.is_some()
    }

    fn period(&self) -> Option<Duration> {
        self.timer.as_ref().map(Interval::period)
    }
}
