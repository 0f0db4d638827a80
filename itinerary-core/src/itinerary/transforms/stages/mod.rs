//! Individual rewrite passes
//!
//! Each stage implements `Runnable<String, String>` and rewrites one line.

pub mod airport_codes;
pub mod normalization;
pub mod temporal;

pub use airport_codes::ExpandAirportCodes;
pub use normalization::NormalizeVerticalWhitespace;
pub use temporal::ExpandTemporalTokens;
