use std::fmt;
use std::time::Duration;

use crate::{Error, SystemTicker, Ticker, TimeUnit};

const ALREADY_RUNNING: &str = "This stopwatch is already running.";
const ALREADY_STOPPED: &str = "This stopwatch is already stopped.";

/// Measures elapsed time across any number of start/stop intervals.
///
/// ```
/// let mut stopwatch = toolbelt::Stopwatch::create_started();
/// // ... work ...
/// stopwatch.stop()?;
/// println!("took {stopwatch}");
/// # Ok::<(), toolbelt::Error>(())
/// ```
///
/// Starting a running stopwatch or stopping a stopped one is an error. Not synchronized; wrap it
/// in a lock to share it.
#[derive(Debug, Clone)]
pub struct Stopwatch<T = SystemTicker> {
    ticker: T,
    // Some while running.
    last_start: Option<u64>,
    accumulated: u64,
}

impl Stopwatch<SystemTicker> {
    pub fn create_unstarted() -> Self {
        Self::unstarted_with(SystemTicker::default())
    }

    pub fn create_started() -> Self {
        Self::started_with(SystemTicker::default())
    }
}

impl<T: Ticker> Stopwatch<T> {
    pub fn unstarted_with(ticker: T) -> Self {
        Self {
            ticker,
            last_start: None,
            accumulated: 0,
        }
    }

    pub fn started_with(ticker: T) -> Self {
        let last_start = Some(ticker.read());
        Self {
            ticker,
            last_start,
            accumulated: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.last_start.is_some()
    }

    pub fn start(&mut self) -> Result<&mut Self, Error> {
        if self.is_running() {
            return Err(Error::IllegalState(ALREADY_RUNNING.to_string()));
        }
        self.last_start = Some(self.ticker.read());
        Ok(self)
    }

    /// Stops the stopwatch. Later reads return the time accumulated up to this call.
    pub fn stop(&mut self) -> Result<&mut Self, Error> {
        let tick = self.ticker.read();
        let Some(start) = self.last_start.take() else {
            return Err(Error::IllegalState(ALREADY_STOPPED.to_string()));
        };
        self.accumulated = self.accumulated.saturating_add(tick.saturating_sub(start));
        Ok(self)
    }

    /// Zeroes the elapsed time and leaves the stopwatch stopped, whatever its state.
    pub fn reset(&mut self) -> &mut Self {
        self.accumulated = 0;
        self.last_start = None;
        self
    }

    fn elapsed_nanos(&self) -> u64 {
        match self.last_start {
            Some(start) => self
                .accumulated
                .saturating_add(self.ticker.read().saturating_sub(start)),
            None => self.accumulated,
        }
    }

    /// Elapsed time in `unit`, rounded down.
    pub fn elapsed_in(&self, unit: TimeUnit) -> u64 {
        unit.convert(self.elapsed_nanos())
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_nanos())
    }
}

impl Default for Stopwatch<SystemTicker> {
    fn default() -> Self {
        Self::create_unstarted()
    }
}

impl<T: Ticker> fmt::Display for Stopwatch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nanos = self.elapsed_nanos();
        let unit = TimeUnit::largest_whole(nanos);
        let value = nanos as f64 / unit.nanos() as f64;
        write!(f, "{} {}", significant4(value), unit.abbreviation())
    }
}

// Four significant digits, printf `%.4g` style: the shortest decimal form of `value` is rounded
// half-up, then laid out in fixed notation while the rounded exponent is in [-4, 4) and in
// scientific notation otherwise.
fn significant4(value: f64) -> String {
    let shortest = format!("{value:e}");
    let Some((mantissa, exponent)) = shortest.split_once('e') else {
        return shortest;
    };
    let mut exponent: i32 = exponent.parse().unwrap_or(0);
    let mut digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    digits.resize(digits.len().max(5), 0);

    let round_up = digits[4] >= 5;
    digits.truncate(4);
    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                // 9999 carried into a fifth digit.
                digits = vec![1, 0, 0, 0];
                exponent += 1;
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let digits: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    if (0..4).contains(&exponent) {
        let (int, frac) = digits.split_at(exponent as usize + 1);
        if frac.is_empty() {
            int.to_string()
        } else {
            format!("{int}.{frac}")
        }
    } else if (-4..0).contains(&exponent) {
        let zeros = "0".repeat((-exponent - 1) as usize);
        format!("0.{zeros}{digits}")
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}.{}e{sign}{:02}", &digits[..1], &digits[1..], exponent.abs())
    }
}
