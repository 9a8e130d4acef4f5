//! Log output: leveled, timestamped, colored when stderr is a terminal.

use std::io::stderr;

use crossterm::tty::IsTty;
use tracing_subscriber::{
    EnvFilter,
    filter::ParseError,
    fmt::{layer, time::ChronoLocal},
    layer::SubscriberExt,
    registry,
    util::{SubscriberInitExt, TryInitError},
};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    Filter(
        #[from]
        #[source]
        ParseError,
    ),
    #[error("failed to install subscriber: {0}")]
    Init(
        #[from]
        #[source]
        TryInitError,
    ),
}

/// Default filter directive for the given quiet setting.
pub fn default_filter(quiet: bool) -> &'static str {
    if quiet { "warn" } else { "info" }
}

pub fn init(filter: &str) -> Result<(), LoggingError> {
    let filter = EnvFilter::builder().parse(filter)?;
    let fmt = layer()
        .with_writer(stderr)
        .with_ansi(stderr().is_tty())
        .with_target(false)
        .with_timer(ChronoLocal::new(TIME_FORMAT.to_owned()));
    registry().with(filter).with(fmt).try_init()?;
    Ok(())
}
