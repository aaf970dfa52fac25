use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::{Duration, Instant};

/// A monotonic time source.
///
/// `read` returns nanoseconds since an arbitrary origin fixed for the lifetime of the ticker. The
/// value never decreases, and it must not follow the calendar clock.
pub trait Ticker {
    fn read(&self) -> u64;
}

fn saturating_nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

#[derive(Debug, Clone, Copy)]
pub struct SystemTicker {
    origin: Instant,
}

impl Default for SystemTicker {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Ticker for SystemTicker {
    fn read(&self) -> u64 {
        saturating_nanos(self.origin.elapsed())
    }
}

/// Reads tokio's clock, so it stands still while the runtime's time is paused.
#[derive(Debug, Clone, Copy)]
pub struct TokioTicker {
    origin: tokio::time::Instant,
}

impl Default for TokioTicker {
    fn default() -> Self {
        Self {
            origin: tokio::time::Instant::now(),
        }
    }
}

impl Ticker for TokioTicker {
    fn read(&self) -> u64 {
        saturating_nanos(self.origin.elapsed())
    }
}

/// A ticker that only moves when told to. Clones share the same reading.
#[derive(Debug, Clone, Default)]
pub struct FakeTicker {
    nanos: Arc<AtomicU64>,
}

impl FakeTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) -> &Self {
        self.advance_nanos(saturating_nanos(by))
    }

    /// Moves the reading forward, stopping at `u64::MAX`.
    pub fn advance_nanos(&self, nanos: u64) -> &Self {
        // The closure always returns Some, so this cannot fail.
        let _ = self
            .nanos
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |now| {
                Some(now.saturating_add(nanos))
            });
        self
    }
}

impl Ticker for FakeTicker {
    fn read(&self) -> u64 {
        self.nanos.load(Ordering::Relaxed)
    }
}
