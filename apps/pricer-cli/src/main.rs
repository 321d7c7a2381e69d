//! # pricer
//!
//! Prints an estimated quote for one order.
//!
//! ## Usage
//! ```bash
//! pricer '$1,299.99' '3 people' food
//! # $1,591.58
//!
//! pricer '$12,456.95' '4 people' books --json
//!
//! PRICER_FLAT_MARKUP_RATE=0.085 pricer 5000 2 electronics --config rates.toml
//! ```

use std::process::ExitCode;

use clap::Parser;
use pricer_cli::{failure_message, logging, run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}
