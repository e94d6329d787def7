//! Crate error type
//!
//! The simulation itself never fails; only loading a tuning file can.

use core::fmt;

#[derive(Debug)]
pub enum Error {
    /// Tuning file could not be read
    Io {
        path: String,
        source: std::io::Error,
    },
    /// Tuning JSON is malformed
    Parse(serde_json::Error),
    /// A tuning value is out of range
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read {path}: {source}"),
            Self::Parse(err) => write!(f, "invalid tuning JSON: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid tuning value `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
