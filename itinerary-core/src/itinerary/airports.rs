//! Airport directory
//!
//! Builds the two code lookup tables (IATA and ICAO) from the reference CSV.
//! The CSV format is deliberately minimal: comma-separated, no quoting, a
//! header naming the columns. Column order is free and extra columns are
//! ignored, but six columns are required:
//!
//! `iata_code, icao_code, name, municipality, iso_country, coordinates`
//!
//! Every data row must be complete: a row with fewer fields than the header,
//! or with any field that is blank after trimming, rejects the whole table.
//! This applies to every column, including the ones the directory never
//! reads (`coordinates`, extra columns).

use crate::itinerary::error::ReferenceError;
use crate::itinerary::loader::split_lines;
use std::collections::HashMap;
use tracing::info;

/// Columns the reference table must provide, by header name
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "iata_code",
    "icao_code",
    "name",
    "municipality",
    "iso_country",
    "coordinates",
];

/// The two airport code families understood by the markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeKind {
    /// 3-letter codes, written `#XXX`
    Iata,
    /// 4-letter codes, written `##XXXX`
    Icao,
}

impl CodeKind {
    /// Markup prefix preceding a code of this kind
    pub fn prefix(&self) -> &'static str {
        match self {
            CodeKind::Iata => "#",
            CodeKind::Icao => "##",
        }
    }
}

/// Outcome of resolving a code for substitution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeResolution<'a> {
    /// The code is known and its description splits into name and place
    Found { name: &'a str, city: &'a str },
    /// Unknown code (or an unsplittable description); callers fall back
    Missing,
}

/// Column positions resolved from the header row
struct ColumnIndex {
    iata: usize,
    icao: usize,
    name: usize,
    city: usize,
    country: usize,
}

impl ColumnIndex {
    fn from_header(header: &[&str]) -> Result<Self, ReferenceError> {
        let position = |column: &str| header.iter().rposition(|field| field.trim() == column);

        let missing: Vec<&'static str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| position(*column).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ReferenceError::MissingColumns { missing });
        }

        let index = |column: &str| position(column).unwrap_or_default();
        Ok(ColumnIndex {
            iata: index("iata_code"),
            icao: index("icao_code"),
            name: index("name"),
            city: index("municipality"),
            country: index("iso_country"),
        })
    }
}

/// Immutable code → description lookup built from the reference table
///
/// Descriptions have the shape `name (city, country)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AirportDirectory {
    by_iata: HashMap<String, String>,
    by_icao: HashMap<String, String>,
}

impl AirportDirectory {
    /// Build the directory from raw CSV text
    pub fn from_csv(source: &str) -> Result<Self, ReferenceError> {
        Self::build(split_lines(source))
    }

    /// Build the directory from CSV rows, the first of which is the header
    pub fn build<I, S>(rows: I) -> Result<Self, ReferenceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rows = rows.into_iter();
        let header_row = rows.next().ok_or(ReferenceError::MissingHeader)?;
        let header = split_fields(header_row.as_ref());
        let columns = ColumnIndex::from_header(&header)?;

        let mut directory = AirportDirectory::default();
        for (offset, row) in rows.enumerate() {
            // Header is line 1
            let line = offset + 2;
            let fields = split_fields(row.as_ref());

            if fields.len() < header.len() {
                return Err(ReferenceError::ShortRow {
                    line,
                    expected: header.len(),
                    found: fields.len(),
                });
            }
            if fields.iter().any(|field| field.trim().is_empty()) {
                return Err(ReferenceError::EmptyField { line });
            }

            let description = format!(
                "{} ({}, {})",
                fields[columns.name].trim(),
                fields[columns.city].trim(),
                fields[columns.country].trim()
            );
            let iata = fields[columns.iata].trim();
            let icao = fields[columns.icao].trim();

            if !iata.is_empty() {
                directory.by_iata.insert(iata.to_string(), description.clone());
            }
            if !icao.is_empty() {
                directory.by_icao.insert(icao.to_string(), description);
            }
        }

        info!(
            iata = directory.by_iata.len(),
            icao = directory.by_icao.len(),
            "airport directory built"
        );
        Ok(directory)
    }

    /// Full `name (city, country)` description for a code, if known
    pub fn resolve(&self, code: &str, kind: CodeKind) -> Option<&str> {
        let table = match kind {
            CodeKind::Iata => &self.by_iata,
            CodeKind::Icao => &self.by_icao,
        };
        table.get(code).map(String::as_str)
    }

    /// Resolve a code and split its description into name and place
    pub fn lookup(&self, code: &str, kind: CodeKind) -> CodeResolution<'_> {
        self.resolve(code, kind)
            .and_then(split_description)
            .map_or(CodeResolution::Missing, |(name, city)| {
                CodeResolution::Found { name, city }
            })
    }
}

/// Split `name (city, country)` into `name` and `city, country`
///
/// Splits once on `" ("`; a single trailing `)` is removed from the place.
pub fn split_description(description: &str) -> Option<(&str, &str)> {
    let (name, rest) = description.split_once(" (")?;
    Some((name, rest.strip_suffix(')').unwrap_or(rest)))
}

/// Comma split that drops trailing empty fields, so `a,b,,` yields `[a, b]`
fn split_fields(row: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = row.split(',').collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}
