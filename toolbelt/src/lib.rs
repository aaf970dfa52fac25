use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    IllegalState(String),

    #[error("{0}")]
    IllegalArgument(String),

    #[error("{0}")]
    Missing(String),

    #[error("{0}")]
    IndexOutOfBounds(String),

    #[error("element at index {index} is absent")]
    AbsentElement { index: usize },

    #[error("connection failed: {0}")]
    Connection(String),
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod arrays;
pub mod db;
pub mod preconditions;
mod stopwatch;
#[cfg(test)]
mod test_recorder;
mod ticker;
mod time_unit;
mod timed;

pub use stopwatch::Stopwatch;
pub use ticker::{FakeTicker, SystemTicker, Ticker, TokioTicker};
pub use time_unit::TimeUnit;
pub use timed::TimedGuard;

extern crate toolbelt_macro;
pub use toolbelt_macro::timed;
