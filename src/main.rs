//! Teller CLI
//!
//! Replays a banking session script over the seeded demo accounts and
//! outputs final account statements.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- session.csv > statements.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;
use teller::{Result, Teller, TellerError};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let script_path = env::args().nth(1).ok_or(TellerError::MissingArgument)?;
    let reader = BufReader::new(File::open(script_path)?);

    let mut teller = Teller::demo();
    teller.process_csv(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    teller.write_output(handle)?;

    Ok(())
}
