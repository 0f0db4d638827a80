//! Property-based tests for the expansion pipeline
//!
//! Text without markup must pass through untouched (apart from trimming),
//! and expanding already-expanded text must change nothing.

use itinerary_core::itinerary::loader::render_output;
use itinerary_core::itinerary::{expand, AirportDirectory, ItineraryLoader, Prettifier};
use proptest::prelude::*;
use std::sync::Arc;

fn directory() -> Arc<AirportDirectory> {
    Arc::new(
        AirportDirectory::build([
            "iata_code,icao_code,name,municipality,iso_country,coordinates",
            "LAX,KLAX,Los Angeles Intl,Los Angeles,US,33.94",
            "LHR,EGLL,London Heathrow,London,GB,51.47",
        ])
        .unwrap(),
    )
}

/// Text that contains no markup: no `#`, no `(`, no backslash, no control characters
fn plain_line_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.:;!?'-]{0,60}"
}

/// A single markup token or a plain word
fn piece_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9,.]{1,12}",
        Just("#LAX".to_string()),
        Just("*#LHR".to_string()),
        Just("##EGLL".to_string()),
        Just("*##KLAX".to_string()),
        Just("#QQQ".to_string()),
        Just("*##QQQQ".to_string()),
        Just("D(2024-03-15T10:00:00+02:00)".to_string()),
        Just("T12(2024-03-15T22:40:00-04:00)".to_string()),
        Just("T24(2024-03-15T10:00:00Z)".to_string()),
        Just("D(soon)".to_string()),
    ]
}

/// Any of the three line terminators a file may use
fn terminator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("\n"), Just("\r\n"), Just("\r")]
}

/// File contents mixing plain lines, blank lines and terminators
fn source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (prop_oneof![Just(String::new()), plain_line_strategy()], terminator_strategy()),
        0..20,
    )
    .prop_map(|lines| {
        lines
            .into_iter()
            .map(|(line, terminator)| line + terminator)
            .collect()
    })
}

fn markup_line_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(piece_strategy(), 0..8).prop_map(|pieces| pieces.join(" "))
}

proptest! {
    #[test]
    fn plain_lines_pass_through(lines in prop::collection::vec(plain_line_strategy(), 1..10)) {
        let output = expand(lines.iter().cloned(), directory());
        let non_blank_in: Vec<&str> = lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect();
        let non_blank_out: Vec<&str> = output
            .iter()
            .map(String::as_str)
            .filter(|line| !line.is_empty())
            .collect();
        prop_assert_eq!(non_blank_in, non_blank_out);
    }

    #[test]
    fn expansion_is_idempotent(lines in prop::collection::vec(markup_line_strategy(), 1..10)) {
        let once = expand(lines, directory());
        let twice = expand(once.iter().cloned(), directory());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn no_two_blank_lines_in_a_row(lines in prop::collection::vec(prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        plain_line_strategy(),
    ], 0..20)) {
        let output = expand(lines, directory());
        for pair in output.windows(2) {
            prop_assert!(!(pair[0].is_empty() && pair[1].is_empty()));
        }
    }

    #[test]
    fn written_files_are_stable_for_any_terminator(source in source_strategy()) {
        let prettifier = Prettifier::new(directory());
        let once = ItineraryLoader::from_string(source).prettify(&prettifier);
        let written = render_output(&once, true);
        prop_assert!(!written.contains("\n\n\n"));

        let twice = ItineraryLoader::from_string(written.as_str()).prettify(&prettifier);
        prop_assert_eq!(render_output(&twice, true), written);
    }
}
