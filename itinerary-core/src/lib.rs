//! # itinerary-core
//!
//! Expands the markup found in travel itineraries into readable text.
//!
//! File Layout
//!
//! The work is split into a reference table and a set of line stages:
//! src/itinerary
//!   ├── airports      Airport directory built from the reference CSV
//!   ├── transforms    Runnable stages and their composition
//!   ├── pipeline      Per-line expansion plus blank-line collapsing
//!   └── loader        File I/O around the pipeline
//!
//! Every stage operates on a single line. The only cross-line rule (blank-line
//! collapsing) lives in the pipeline, after the stages have run.

pub mod itinerary;
