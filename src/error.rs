//! Input error types.

use thiserror::Error;

/// A line that was read but cannot be used. The validator recovers from
/// these by prompting again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    #[error("not a valid number: {input:?}")]
    NotANumber { input: String },

    #[error("value {value} must be greater than {minimum}")]
    NotAboveMinimum { value: f64, minimum: f64 },
}

/// Conditions that end a read instead of re-prompting.
#[derive(Debug, Error)]
pub enum InputError {
    /// Standard input closed before a valid value arrived.
    #[error("end of input")]
    EndOfInput,

    #[error("no valid value after {attempts} attempts")]
    AttemptsExhausted { attempts: u32 },

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
