//! Validation failure types

use std::fmt;
use thiserror::Error;

/// Result of running a validator
pub type Outcome<T> = Result<T, ValidationError>;

/// Character classes counted by the password validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
    Unique,
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CharClass::Uppercase => "uppercase letters",
            CharClass::Lowercase => "lowercase letters",
            CharClass::Digit => "digits",
            CharClass::Special => "special characters",
            CharClass::Unique => "unique characters",
        })
    }
}

/// Broad class of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Required,
    Length,
    Format,
    Composition,
    Policy,
    Count,
    Range,
    Unsupported,
    TypeCoercion,
}

/// Why a value was rejected
///
/// The `Display` output is the human-readable reason.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("{0}")]
    Format(String),

    #[error("{0}")]
    Composition(String),

    #[error("{0}")]
    Policy(String),

    #[error("must contain at least {required} {class} (found {found})")]
    Count {
        class: CharClass,
        required: usize,
        found: usize,
    },

    #[error("{0}")]
    Range(String),

    #[error("{0}")]
    Unsupported(String),

    #[error("'{input}' is not a valid number")]
    TypeCoercion { input: String },

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl ValidationError {
    pub fn format(reason: impl Into<String>) -> Self {
        Self::Format(reason.into())
    }

    pub fn composition(reason: impl Into<String>) -> Self {
        Self::Composition(reason.into())
    }

    pub fn policy(reason: impl Into<String>) -> Self {
        Self::Policy(reason.into())
    }

    pub fn range(reason: impl Into<String>) -> Self {
        Self::Range(reason.into())
    }

    pub fn unsupported(reason: impl Into<String>) -> Self {
        Self::Unsupported(reason.into())
    }

    /// Failure class this error belongs to
    ///
    /// A caller-supplied pattern that does not compile is a configuration
    /// problem, so `InvalidPattern` reports as [`ErrorKind::Unsupported`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Required { .. } => ErrorKind::Required,
            Self::TooShort { .. } | Self::TooLong { .. } => ErrorKind::Length,
            Self::Format(_) => ErrorKind::Format,
            Self::Composition(_) => ErrorKind::Composition,
            Self::Policy(_) => ErrorKind::Policy,
            Self::Count { .. } => ErrorKind::Count,
            Self::Range(_) => ErrorKind::Range,
            Self::Unsupported(_) | Self::InvalidPattern(_) => ErrorKind::Unsupported,
            Self::TypeCoercion { .. } => ErrorKind::TypeCoercion,
        }
    }

    /// Human-readable reason, same as `to_string()`
    pub fn reason(&self) -> String {
        self.to_string()
    }
}
