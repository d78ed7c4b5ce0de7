//! Bit Interleave validators.
//!
//! Each validator re-derives one family of laws at runtime and reports a
//! pass or a failure listing the [`Violation`](crate::Violation)s it found.

pub mod laws;
pub mod round_trip;
pub mod tables;
