//! Standard transform definitions
//!
//! The stateless passes are static references built with
//! `once_cell::sync::Lazy`. The full line transform depends on an airport
//! directory and is assembled by [`line_transform`].

use crate::itinerary::airports::AirportDirectory;
use crate::itinerary::transforms::stages::{
    ExpandAirportCodes, ExpandTemporalTokens, NormalizeVerticalWhitespace,
};
use crate::itinerary::transforms::Transform;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// Type alias for a transform that rewrites one line into one line
pub type LineTransform = Transform<String, String>;

/// Escape sequences and vertical control characters → `\n`
///
/// # Example
///
/// ```rust
/// use itinerary_core::itinerary::transforms::standard::NORMALIZATION;
///
/// let line = NORMALIZATION.run(r"Gate\nB12".to_string());
/// assert_eq!(line, "Gate\nB12");
/// ```
pub static NORMALIZATION: Lazy<LineTransform> =
    Lazy::new(|| Transform::identity().then(NormalizeVerticalWhitespace::new()));

/// `D(...)`, `T12(...)` and `T24(...)` expansion, followed by trimming
pub static TEMPORAL: Lazy<LineTransform> =
    Lazy::new(|| Transform::identity().then(ExpandTemporalTokens::new()));

/// Complete per-line transform:
/// 1. Vertical whitespace normalization
/// 2. Airport codes (ICAO, then IATA)
/// 3. Dates and times, then trim
pub fn line_transform(directory: Arc<AirportDirectory>) -> LineTransform {
    Transform::identity()
        .then_transform(&*NORMALIZATION)
        .then(ExpandAirportCodes::new(directory))
        .then_transform(&*TEMPORAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> Arc<AirportDirectory> {
        Arc::new(
            AirportDirectory::build([
                "iata_code,icao_code,name,municipality,iso_country,coordinates",
                "LAX,KLAX,Los Angeles Intl,Los Angeles,US,33.94",
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_normalization_static() {
        assert_eq!(NORMALIZATION.run("a\u{000B}b".to_string()), "a\nb");
    }

    #[test]
    fn test_temporal_static() {
        assert_eq!(
            TEMPORAL.run("T24(2024-03-15T10:00:00Z) ".to_string()),
            "10:00 (00:00)"
        );
    }

    #[test]
    fn test_line_transform_runs_all_stages() {
        let line = line_transform(directory());
        assert_eq!(
            line.run(r" *#LAX\nT12(2024-03-15T18:20:00-07:00) ".to_string()),
            "Los Angeles, US\n06:20pm (-07:00)"
        );
    }

    #[test]
    fn test_normalized_newline_at_edges_is_trimmed() {
        let line = line_transform(directory());
        assert_eq!(line.run(r"\n#LAX\f".to_string()), "Los Angeles Intl");
    }

    #[test]
    fn test_line_transform_is_shareable() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}
        assert_send_sync(&line_transform(directory()));
    }
}
