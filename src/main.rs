//! Bank Client CLI
//!
//! Interactive prompt over a single account while background tasks deposit
//! and withdraw random amounts.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --profile profile.json
//! cargo run -- --profile profile.json --initial-balance 500 --depositors 4 --withdrawers 8
//! cargo run -- --profile profile.json --no-load
//! ```
//!
//! Commands: `balance`, `deposit`, `withdrawal`, `exit`. Logs go to stderr and
//! are filtered with `RUST_LOG`.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (profile not found or unreadable, runtime failure, I/O error)

use bank_client::cli;
use bank_client::observability;
use std::process;

fn main() {
    observability::init();

    let args = cli::parse_args();

    let stdin = std::io::stdin();
    let mut output = std::io::stdout();
    if let Err(e) = cli::run_session(&args, stdin.lock(), &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
