//! Error types for field dispatch and registry loading.
//!
//! The formatting and masking engines never fail; they always return a
//! string. Errors only come from strict field dispatch
//! ([`Formatter::try_plain`](crate::Formatter::try_plain),
//! [`Formatter::try_secret`](crate::Formatter::try_secret)) and from loading
//! a field registry.

use std::fmt;

/// Errors that can occur when resolving or loading field definitions.
#[derive(Debug)]
pub enum FormatError {
    /// No field is registered under this name.
    UnknownField(String),

    /// The field exists but has no plain formatting rule.
    NoPlainRule(String),

    /// The field exists but has no secret masking rule.
    NoSecretRule(String),

    /// A field definition is unusable.
    InvalidField {
        /// Name of the offending field (may be empty).
        name: String,
        /// Why the definition was rejected.
        reason: String,
    },

    /// Failed to read a registry file.
    Io(std::io::Error),

    /// Failed to parse a registry document.
    Parse(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField(name) => write!(f, "unknown field '{}'", name),

            Self::NoPlainRule(name) => {
                write!(f, "field '{}' has no plain formatting rule", name)
            }

            Self::NoSecretRule(name) => {
                write!(f, "field '{}' has no secret masking rule", name)
            }

            Self::InvalidField { name, reason } => {
                write!(f, "invalid field '{}': {}", name, reason)
            }

            Self::Io(e) => write!(f, "IO error: {}", e),

            Self::Parse(s) => write!(f, "Parse error: {}", s),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FormatError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
