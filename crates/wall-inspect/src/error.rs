//! Error types for wall-inspect.

use thiserror::Error;
use wall_core::Day;
use wall_sim::SimError;

/// Errors returned by queries and reports.
#[derive(Debug, Error)]
pub enum InspectError {
    /// The requested day is not in the run's table: work finished before
    /// it, or it is day 0.
    #[error("Work on wall finished before day {0}")]
    InvalidDay(Day),

    #[error("unknown query route {0:?}")]
    UnknownRoute(String),

    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, InspectError>`.
pub type InspectResult<T> = Result<T, InspectError>;
