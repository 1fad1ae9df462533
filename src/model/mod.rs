//! Data model types for SPS-Liste to tag table conversion.

mod cell;
mod signal;
mod tag;

pub use cell::{Cell, RawRow};
pub use signal::{Direction, SignalRecord};
pub use tag::{TagDescriptor, TagFlags};
pub(crate) use tag::flag_str;
