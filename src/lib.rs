//! Social-engineering password dictionary generation.
//!
//! Personal info tokens are combined with digit padding and special
//! characters into a deduplicated set of candidates of a minimum length.

pub mod cli;
pub mod dict;
pub mod error;
pub mod exits;
pub mod info;
pub mod logging;
pub mod settings;
pub mod terminal;

pub use error::Error;
