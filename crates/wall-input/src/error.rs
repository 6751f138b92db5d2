use thiserror::Error;

use wall_core::{CoreError, ProfileNumber};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("layout parse error on line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("profile {0} has no sections and cannot be written")]
    EmptyProfile(ProfileNumber),

    #[error(transparent)]
    Layout(#[from] CoreError),

    #[error("invalid generator parameters: {0}")]
    Generator(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type InputResult<T> = Result<T, InputError>;
