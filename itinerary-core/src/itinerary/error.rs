//! Run-level errors
//!
//! Only problems that abort the whole run live here. A code that cannot be
//! resolved or a payload that does not parse is handled inside its stage and
//! never surfaces as an error.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Ways the airport reference table can be malformed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("Airport lookup malformed: Missing header row.")]
    MissingHeader,

    #[error("Airport lookup malformed: Missing required columns ({}).", .missing.join(", "))]
    MissingColumns { missing: Vec<&'static str> },

    #[error("Airport lookup malformed: Row {line} has {found} fields, header has {expected}.")]
    ShortRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Airport lookup malformed: Empty columns in data (row {line}).")]
    EmptyField { line: usize },
}

/// Which of the two input files a path refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Itinerary,
    AirportLookup,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Itinerary => write!(f, "Input"),
            InputKind::AirportLookup => write!(f, "Airport lookup"),
        }
    }
}

/// Errors that abort a prettify run
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    MalformedReferenceData(#[from] ReferenceError),

    #[error("{kind} file not found: {}", .path.display())]
    ReferenceOrInputNotFound { kind: InputKind, path: PathBuf },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_lists_names() {
        let err = ReferenceError::MissingColumns {
            missing: vec!["name", "coordinates"],
        };
        assert_eq!(
            err.to_string(),
            "Airport lookup malformed: Missing required columns (name, coordinates)."
        );
    }

    #[test]
    fn test_not_found_names_the_file_kind() {
        let err = Error::ReferenceOrInputNotFound {
            kind: InputKind::AirportLookup,
            path: PathBuf::from("missing.csv"),
        };
        assert_eq!(err.to_string(), "Airport lookup file not found: missing.csv");
    }

    #[test]
    fn test_reference_error_is_transparent() {
        let err: Error = ReferenceError::MissingHeader.into();
        assert_eq!(err.to_string(), "Airport lookup malformed: Missing header row.");
    }
}
