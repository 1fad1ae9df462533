//! Transformation of signal records into tag table entries.

mod tags;

pub use tags::*;
