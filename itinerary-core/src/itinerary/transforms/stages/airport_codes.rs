//! Airport code expansion stage
//!
//! Recognizes airport codes in a line and replaces them with names from the
//! [`AirportDirectory`]:
//!
//! | Markup    | Found                 | Not found |
//! |-----------|-----------------------|-----------|
//! | `##EGLL`  | `London Heathrow`     | `##EGLL`  |
//! | `*##EGLL` | `London, GB`          | `EGLL`    |
//! | `#LHR`    | `London Heathrow`     | `#LHR`    |
//! | `*#LHR`   | `London, GB`          | `LHR`     |
//!
//! ICAO codes are expanded first, then IATA codes are expanded over the
//! result. The IATA pass sees the ICAO replacements, so a name containing
//! something like `#ABC` gets rewritten again. These are two ordered passes,
//! never a loop to a fixed point.

use crate::itinerary::airports::{AirportDirectory, CodeKind, CodeResolution};
use crate::itinerary::transforms::Runnable;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::sync::Arc;
use tracing::debug;

static ICAO_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\*)?##([A-Z]{4})").unwrap());
static IATA_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\*)?#([A-Z]{3})").unwrap());

/// Airport code expansion stage
pub struct ExpandAirportCodes {
    directory: Arc<AirportDirectory>,
}

impl ExpandAirportCodes {
    pub fn new(directory: Arc<AirportDirectory>) -> Self {
        Self { directory }
    }

    /// Run both passes, ICAO first
    pub fn expand(&self, line: &str) -> String {
        let icao_expanded = self.expand_kind(line, CodeKind::Icao);
        self.expand_kind(&icao_expanded, CodeKind::Iata)
    }

    fn expand_kind(&self, line: &str, kind: CodeKind) -> String {
        let pattern = match kind {
            CodeKind::Iata => &*IATA_TOKEN,
            CodeKind::Icao => &*ICAO_TOKEN,
        };
        pattern
            .replace_all(line, |caps: &Captures| {
                let city_only = caps.get(1).is_some();
                substitute(&self.directory, &caps[2], kind, city_only)
            })
            .into_owned()
    }
}

/// Replacement text for a single code
///
/// `city_only` selects the place (`city, country`) over the airport name.
/// Unknown codes keep their markup prefix in name position and are reduced to
/// the bare code in place position.
pub fn substitute(
    directory: &AirportDirectory,
    code: &str,
    kind: CodeKind,
    city_only: bool,
) -> String {
    match directory.lookup(code, kind) {
        CodeResolution::Found { name, city } => {
            if city_only {
                city.to_string()
            } else {
                name.to_string()
            }
        }
        CodeResolution::Missing => {
            debug!(code, ?kind, "airport code not in directory, keeping markup");
            if city_only {
                code.to_string()
            } else {
                format!("{}{}", kind.prefix(), code)
            }
        }
    }
}

impl Runnable<String, String> for ExpandAirportCodes {
    fn run(&self, input: String) -> String {
        self.expand(&input)
    }
}
