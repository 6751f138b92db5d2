//! Configuration error type.
//!
//! Every other `wall-*` crate wraps `CoreError` as one variant of its own
//! error enum via `#[from]`.

use thiserror::Error;

use crate::{Height, ProfileNumber, SectionNumber};

/// Malformed configuration or wall layout.  Always raised before any
/// simulation starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error(
        "section {section} of profile {profile} has height {height}, \
         above the target height {target}"
    )]
    HeightAboveTarget {
        profile: ProfileNumber,
        section: SectionNumber,
        height:  Height,
        target:  Height,
    },

    #[error("layout has more than u32::MAX {what}")]
    TooLarge { what: &'static str },
}

/// Shorthand result type for configuration checks.
pub type CoreResult<T> = Result<T, CoreError>;
