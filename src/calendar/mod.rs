//! Calendar interchange for the roster.

pub mod ics;

pub use ics::{parse_ics, to_ics, IcsEvent};
