//! Itinerary expansion pipeline
//!
//! Runs the per-line transform over every input line in order, then applies
//! the only cross-line rule: a blank output line directly after another
//! blank output line is dropped, so runs of blank lines shrink to one. The
//! first line is always emitted, blank or not.
//!
//! # Examples
//!
//! ```rust,ignore
//! let prettifier = Prettifier::new(Arc::new(directory));
//! let output = prettifier.expand(["Fly #LAX", "", "", "Arrive *##EGLL"]);
//! assert_eq!(output, ["Fly Los Angeles Intl", "", "Arrive London, GB"]);
//! ```

use crate::itinerary::airports::AirportDirectory;
use crate::itinerary::transforms::standard::{line_transform, LineTransform};
use std::sync::Arc;
use tracing::info;

/// Knobs for a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandOptions {
    /// Collapse runs of blank output lines into one
    pub collapse_blank_lines: bool,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            collapse_blank_lines: true,
        }
    }
}

/// Expands whole itineraries against one airport directory
pub struct Prettifier {
    line: LineTransform,
    options: ExpandOptions,
}

impl Prettifier {
    /// Create a prettifier with default options
    pub fn new(directory: Arc<AirportDirectory>) -> Self {
        Self::with_options(directory, ExpandOptions::default())
    }

    pub fn with_options(directory: Arc<AirportDirectory>, options: ExpandOptions) -> Self {
        Self {
            line: line_transform(directory),
            options,
        }
    }

    /// Expand a single line (no blank-line handling)
    pub fn expand_line(&self, line: impl Into<String>) -> String {
        self.line.run(line.into())
    }

    /// Expand every line, then collapse blank runs if enabled
    pub fn expand<I, S>(&self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut output: Vec<String> = Vec::new();
        let mut input_count = 0usize;

        for line in lines {
            input_count += 1;
            let expanded = self.expand_line(line);
            if self.options.collapse_blank_lines && is_repeated_blank(&output, &expanded) {
                continue;
            }
            output.push(expanded);
        }

        info!(input = input_count, output = output.len(), "itinerary expanded");
        output
    }
}

/// Expand `lines` against `directory` with default options
pub fn expand<I, S>(lines: I, directory: Arc<AirportDirectory>) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Prettifier::new(directory).expand(lines)
}

/// A blank line directly after an emitted blank line
fn is_repeated_blank(emitted: &[String], line: &str) -> bool {
    line.trim().is_empty()
        && emitted
            .last()
            .is_some_and(|previous| previous.trim().is_empty())
}
