//! Terminal and NDJSON rendering for the emproj binary.

pub mod error;
pub mod json;
pub mod sinks;
pub mod terminal;
