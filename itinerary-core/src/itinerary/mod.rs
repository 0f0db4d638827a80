//! Main module for itinerary library functionality

pub mod airports;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod transforms;

pub use airports::{AirportDirectory, CodeKind, CodeResolution};
pub use error::{Error, InputKind, ReferenceError};
pub use loader::ItineraryLoader;
pub use pipeline::{expand, ExpandOptions, Prettifier};
