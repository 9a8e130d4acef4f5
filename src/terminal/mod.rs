//! Shared terminal utilities.
//!
//! Box drawing and the end-of-run summary.

mod output;

pub use output::*;
