//! Wallet Basics CLI
//!
//! Runs every wallet drill with the built-in scenario and prints the reports
//! to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use std::io;
use std::process;
use wallet_basics::ledger::SAMPLE_LEDGER;
use wallet_basics::{report, Ledger, Result, Scenario};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let scenario = Scenario::default();
    let ledger = Ledger::from_csv(SAMPLE_LEDGER.as_bytes())?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    report::write_all(&scenario, &ledger, &mut handle)?;

    Ok(())
}
