mod args;
mod context;

pub use args::Args;
pub use context::{Context, Outcome};

use tracing::error;

use crate::error::Error;
use crate::logging;

/// Run the CLI. Returns the process exit code.
pub fn run(args: &Args) -> u8 {
    if let Err(e) = logging::init(args.log_filter()) {
        let err = Error::from(e);
        eprintln!("{err}");
        return err.exit_code();
    }

    let ctx = Context::new(args.settings());
    match ctx.run() {
        Ok(Outcome::Written(summary)) => {
            if ctx.shows_summary() {
                summary.print();
            }
            0
        }
        Ok(Outcome::Skipped) => 0,
        Err(e) => {
            error!("{e}");
            e.exit_code()
        }
    }
}
