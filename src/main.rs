use std::process::ExitCode;

use clap::Parser;

use socdict::{cli, exits};

fn main() -> ExitCode {
    exits::install_handlers();

    let args = cli::Args::parse();
    ExitCode::from(cli::run(&args))
}
