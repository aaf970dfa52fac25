use metrics::histogram;
use tracing::debug;

use crate::{Stopwatch, SystemTicker, Ticker};

/// Times the scope it lives in. Inserted by `#[toolbelt::timed]`.
#[derive(Debug)]
pub struct TimedGuard<T: Ticker = SystemTicker> {
    label: &'static str,
    stopwatch: Stopwatch<T>,
}

impl TimedGuard<SystemTicker> {
    pub fn new(label: &'static str) -> Self {
        Self::with_ticker(label, SystemTicker::default())
    }
}

impl<T: Ticker> TimedGuard<T> {
    pub fn with_ticker(label: &'static str, ticker: T) -> Self {
        Self {
            label,
            stopwatch: Stopwatch::started_with(ticker),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn stopwatch(&self) -> &Stopwatch<T> {
        &self.stopwatch
    }
}

impl<T: Ticker> Drop for TimedGuard<T> {
    fn drop(&mut self) {
        histogram!("timed", "label" => self.label).record(self.stopwatch.elapsed().as_secs_f64());
        debug!(label = self.label, elapsed = %self.stopwatch, "timed");
    }
}
