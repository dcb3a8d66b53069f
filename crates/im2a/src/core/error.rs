//! Core error types for option parsing
//!
//! Every variant here is fatal for a CLI invocation: the caller prints the
//! message, the usage text, and exits with [`OptionsError::exit_code`].

use thiserror::Error;

/// Exit code used for every rejected invocation
pub const USAGE_EXIT_CODE: i32 = 1;

/// Reasons an argument vector cannot be turned into a configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("invalid width: {value}")]
    InvalidWidth { value: i64 },

    #[error("invalid height: {value}")]
    InvalidHeight { value: i64 },

    #[error("charset should be at least 2 symbols long")]
    CharsetTooShort { length: usize },

    #[error("cannot use --html and --pixel at the same time")]
    IncompatibleModes,

    #[error("wrong number of arguments (given {given}, expected 1)")]
    WrongArgumentCount { given: usize },

    #[error("unrecognized option '{option}'")]
    UnrecognizedOption { option: String },

    #[error("option '{option}' is ambiguous; possibilities: {}", quote_options(.candidates))]
    AmbiguousOption {
        option: String,
        candidates: Vec<String>,
    },

    #[error("option '{option}' requires an argument")]
    MissingValue { option: String },

    #[error("source file name is empty")]
    EmptySourcePath,

    #[error("{message}")]
    InvalidUsage { message: String },
}

fn quote_options(candidates: &[String]) -> String {
    candidates
        .iter()
        .map(|candidate| format!("'{}'", candidate))
        .collect::<Vec<_>>()
        .join(" ")
}

impl OptionsError {
    /// Create an invalid width error
    pub fn invalid_width(value: i64) -> Self {
        Self::InvalidWidth { value }
    }

    /// Create an invalid height error
    pub fn invalid_height(value: i64) -> Self {
        Self::InvalidHeight { value }
    }

    /// Create an unrecognized option error
    pub fn unrecognized(option: impl Into<String>) -> Self {
        Self::UnrecognizedOption {
            option: option.into(),
        }
    }

    /// Create an ambiguous long prefix error listing the options it matches
    pub fn ambiguous(option: impl Into<String>, candidates: Vec<String>) -> Self {
        Self::AmbiguousOption {
            option: option.into(),
            candidates,
        }
    }

    /// Create a missing value error
    pub fn missing_value(option: impl Into<String>) -> Self {
        Self::MissingValue {
            option: option.into(),
        }
    }

    /// Process exit code the CLI should terminate with
    pub fn exit_code(&self) -> i32 {
        USAGE_EXIT_CODE
    }
}
