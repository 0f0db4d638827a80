//! File loading utilities
//!
//! Thin I/O wrapper around the pipeline: reads the itinerary and the airport
//! lookup, and writes the expanded result.
//!
//! # Example
//!
//! ```rust,ignore
//! let directory = Arc::new(load_directory("airport-lookup.csv")?);
//! let prettifier = Prettifier::new(directory);
//! let lines = ItineraryLoader::from_path("input.txt")?.prettify(&prettifier);
//! write_output("output.txt", &lines, true)?;
//! ```

use crate::itinerary::airports::AirportDirectory;
use crate::itinerary::error::{Error, InputKind};
use crate::itinerary::pipeline::Prettifier;
use std::fs;
use std::io;
use std::path::Path;

/// Loaded itinerary text
pub struct ItineraryLoader {
    source: String,
}

impl ItineraryLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let source = read_source(path.as_ref(), InputKind::Itinerary)?;
        Ok(ItineraryLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        ItineraryLoader {
            source: source.into(),
        }
    }

    /// Input lines, without their terminators
    pub fn lines(&self) -> Vec<&str> {
        split_lines(&self.source)
    }

    /// Expand every line with `prettifier`
    pub fn prettify(&self, prettifier: &Prettifier) -> Vec<String> {
        prettifier.expand(self.lines())
    }
}

/// Split text into lines on `\n`, `\r\n` or a lone `\r`
///
/// A terminator at the very end does not start another line, so `"a\n"` is
/// one line and `""` is none.
pub fn split_lines(source: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = source;
    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(end) => {
                lines.push(&rest[..end]);
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}

/// Fail with `ReferenceOrInputNotFound` unless `path` exists
pub fn ensure_exists(path: &Path, kind: InputKind) -> Result<(), Error> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::ReferenceOrInputNotFound {
            kind,
            path: path.to_path_buf(),
        })
    }
}

/// Read and build the airport directory from a CSV file
pub fn load_directory<P: AsRef<Path>>(path: P) -> Result<AirportDirectory, Error> {
    let source = read_source(path.as_ref(), InputKind::AirportLookup)?;
    Ok(AirportDirectory::from_csv(&source)?)
}

/// Join lines with `\n`, optionally terminating the last one
pub fn render_output<S: AsRef<str>>(lines: &[S], trailing_newline: bool) -> String {
    let mut rendered = lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n");
    if trailing_newline && !lines.is_empty() {
        rendered.push('\n');
    }
    rendered
}

/// Write the expanded lines to `path`
pub fn write_output<P, S>(path: P, lines: &[S], trailing_newline: bool) -> Result<(), Error>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    fs::write(path, render_output(lines, trailing_newline)).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_source(path: &Path, kind: InputKind) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::ReferenceOrInputNotFound {
            kind,
            path: path.to_path_buf(),
        },
        _ => Error::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}
