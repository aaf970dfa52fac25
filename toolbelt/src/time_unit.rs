use serde::{Deserialize, Serialize};

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000 * NANOS_PER_MICRO;
const NANOS_PER_SECOND: u64 = 1_000 * NANOS_PER_MILLI;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: u64 = 24 * NANOS_PER_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Largest first.
    pub const DESCENDING: [TimeUnit; 7] = [
        TimeUnit::Days,
        TimeUnit::Hours,
        TimeUnit::Minutes,
        TimeUnit::Seconds,
        TimeUnit::Milliseconds,
        TimeUnit::Microseconds,
        TimeUnit::Nanoseconds,
    ];

    pub fn nanos(&self) -> u64 {
        match self {
            TimeUnit::Nanoseconds => 1,
            TimeUnit::Microseconds => NANOS_PER_MICRO,
            TimeUnit::Milliseconds => NANOS_PER_MILLI,
            TimeUnit::Seconds => NANOS_PER_SECOND,
            TimeUnit::Minutes => NANOS_PER_MINUTE,
            TimeUnit::Hours => NANOS_PER_HOUR,
            TimeUnit::Days => NANOS_PER_DAY,
        }
    }

    /// Converts a nanosecond count into this unit, dropping any fraction.
    pub fn convert(&self, nanos: u64) -> u64 {
        nanos / self.nanos()
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Microseconds => "\u{03bc}s",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "min",
            TimeUnit::Hours => "h",
            TimeUnit::Days => "d",
        }
    }

    /// The largest unit in which `nanos` is at least one whole unit.
    pub fn largest_whole(nanos: u64) -> TimeUnit {
        Self::DESCENDING
            .into_iter()
            .find(|unit| unit.convert(nanos) > 0)
            .unwrap_or(TimeUnit::Nanoseconds)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn convert_truncates() {
        assert_eq!(TimeUnit::Microseconds.convert(1_500_000), 1500);
        assert_eq!(TimeUnit::Milliseconds.convert(1_500_000), 1);
        assert_eq!(TimeUnit::Seconds.convert(1_500_000), 0);
        assert_eq!(TimeUnit::Days.convert(NANOS_PER_DAY * 3 - 1), 2);
    }

    #[test]
    fn largest_whole() {
        assert_eq!(TimeUnit::largest_whole(0), TimeUnit::Nanoseconds);
        assert_eq!(TimeUnit::largest_whole(999), TimeUnit::Nanoseconds);
        assert_eq!(TimeUnit::largest_whole(1_000), TimeUnit::Microseconds);
        assert_eq!(TimeUnit::largest_whole(59_999_999_999), TimeUnit::Seconds);
        assert_eq!(TimeUnit::largest_whole(60_000_000_000), TimeUnit::Minutes);
        assert_eq!(TimeUnit::largest_whole(NANOS_PER_DAY), TimeUnit::Days);
    }
}
