//! Date and time expansion stage
//!
//! Three token kinds carry an ISO 8601 date-time with an explicit offset:
//!
//! | Markup                           | Output             |
//! |----------------------------------|--------------------|
//! | `D(2024-03-15T10:00:00+02:00)`   | `15 Mar 2024`      |
//! | `T12(2024-03-15T22:05:00-05:00)` | `10:05pm (-05:00)` |
//! | `T24(2024-03-15T10:00:00Z)`      | `10:00 (00:00)`    |
//!
//! Values are rendered in the offset they were written with; nothing is
//! converted to another zone. A zero offset prints as `(00:00)` whichever
//! way it was spelled (`Z`, `+00:00`, `-00:00`).
//!
//! A payload that does not parse leaves the token exactly as written, so
//! broken markup stays visible in the output. The passes run in the order
//! date, 12-hour, 24-hour, each over the previous pass's output, and the line
//! is trimmed afterwards.

use crate::itinerary::transforms::Runnable;
use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

static DATE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"D\(([^)]+)\)").unwrap());
static TIME12_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"T12\(([^)]+)\)").unwrap());
static TIME24_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"T24\(([^)]+)\)").unwrap());

/// The three temporal markup forms, in the order they are expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalToken {
    /// `D(...)` → `15 Mar 2024`
    Date,
    /// `T12(...)` → `10:00am (+02:00)`
    Time12,
    /// `T24(...)` → `10:00 (+02:00)`
    Time24,
}

impl TemporalToken {
    pub const ALL: [TemporalToken; 3] = [
        TemporalToken::Date,
        TemporalToken::Time12,
        TemporalToken::Time24,
    ];

    fn pattern(&self) -> &'static Regex {
        match self {
            TemporalToken::Date => &*DATE_TOKEN,
            TemporalToken::Time12 => &*TIME12_TOKEN,
            TemporalToken::Time24 => &*TIME24_TOKEN,
        }
    }

    /// Render a parsed value the way this token kind prints it
    pub fn render(&self, value: &DateTime<FixedOffset>) -> String {
        match self {
            TemporalToken::Date => value.format("%d %b %Y").to_string(),
            TemporalToken::Time12 => {
                format!("{} {}", value.format("%I:%M%P"), offset_suffix(value.offset()))
            }
            TemporalToken::Time24 => {
                format!("{} {}", value.format("%H:%M"), offset_suffix(value.offset()))
            }
        }
    }

    /// Expand every token of this kind in `line`
    pub fn expand(&self, line: &str) -> String {
        self.pattern()
            .replace_all(line, |caps: &Captures| {
                let payload = &caps[1];
                match parse_offset_datetime(payload) {
                    Some(value) => self.render(&value),
                    None => {
                        debug!(token = ?self, payload, "unparseable date-time, keeping markup");
                        caps[0].to_string()
                    }
                }
            })
            .into_owned()
    }
}

/// Parse an ISO 8601 date-time that carries its own offset
///
/// Accepts `Z` or `±HH:MM`, optional seconds and fractional seconds, and an
/// optional trailing zone id in brackets (`...+01:00[Europe/Paris]`), which is
/// ignored in favor of the explicit offset. Values without an offset are
/// rejected, and so are the RFC 3339 relaxations ISO 8601 does not allow: a
/// space instead of `T` and a lowercase `t` or `z`.
pub fn parse_offset_datetime(payload: &str) -> Option<DateTime<FixedOffset>> {
    let value = strip_zone_id(payload);
    if value.bytes().any(|b| b == b' ' || b.is_ascii_lowercase()) {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed);
    }

    // RFC 3339 insists on seconds; ISO 8601 lets them go
    let with_numeric_offset = match value.strip_suffix('Z') {
        Some(rest) => format!("{rest}+00:00"),
        None => value.to_string(),
    };
    DateTime::parse_from_str(&with_numeric_offset, "%Y-%m-%dT%H:%M%:z").ok()
}

fn strip_zone_id(payload: &str) -> &str {
    match payload.strip_suffix(']').and_then(|rest| rest.rsplit_once('[')) {
        Some((value, _zone)) => value,
        None => payload,
    }
}

/// `(+HH:MM)`/`(-HH:MM)`, or `(00:00)` for a zero offset
pub fn offset_suffix(offset: &FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    if seconds == 0 {
        return "(00:00)".to_string();
    }
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.abs() / 60;
    format!("({}{:02}:{:02})", sign, minutes / 60, minutes % 60)
}

/// Date and time expansion stage
pub struct ExpandTemporalTokens;

impl ExpandTemporalTokens {
    pub fn new() -> Self {
        ExpandTemporalTokens
    }

    /// Run the date, 12-hour and 24-hour passes, then trim
    pub fn expand(&self, line: &str) -> String {
        let expanded = TemporalToken::ALL
            .iter()
            .fold(line.to_string(), |acc, token| token.expand(&acc));
        expanded.trim().to_string()
    }
}

impl Default for ExpandTemporalTokens {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, String> for ExpandTemporalTokens {
    fn run(&self, input: String) -> String {
        self.expand(&input)
    }
}
