//! Dictionary generation and output.

pub mod charset;
mod generate;
mod length;
pub mod output;

pub use generate::{PassStats, generate, generate_with_stats};
pub use length::{LengthGuard, MinLength};
pub use output::Sink;
