//! Conversion of raw PI_JSON records into the strict internal model.

pub mod error;
pub mod location;
pub mod series;
pub mod timestamp;
