// CLI module
// Command-line arguments, interactive prompt and session wiring

mod args;
pub mod prompt;
pub mod session;

pub use args::CliArgs;
pub use prompt::{run_prompt, Command};
pub use session::{run_session, SessionSummary};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments or --help), clap displays an error
/// message or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
