//! Error types for the conversion pipeline

use std::fmt;
use std::io;

/// Errors that can abort a conversion run.
///
/// Parse-level anomalies never surface here; they degrade to absent fields
/// inside the extractor. Anything that does reach this type terminates the
/// run with no partial output.
#[derive(Debug)]
pub enum ConvertError {
    /// The input catalog could not be read.
    Read { path: String, source: io::Error },
    /// The generated module could not be written.
    Write { path: String, source: io::Error },
    /// A record reached the emitter without a required field.
    MissingField { index: usize, field: &'static str },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Read { path, source } => {
                write!(f, "failed to read {}: {}", path, source)
            }
            ConvertError::Write { path, source } => {
                write!(f, "failed to write {}: {}", path, source)
            }
            ConvertError::MissingField { index, field } => {
                write!(f, "record {} is missing required field '{}'", index, field)
            }
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Read { source, .. } | ConvertError::Write { source, .. } => Some(source),
            ConvertError::MissingField { .. } => None,
        }
    }
}
