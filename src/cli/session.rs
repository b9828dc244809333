//! Interactive session orchestration
//!
//! Wires the pieces together the way the binary runs them:
//!
//! ```text
//! run_session
//!     ├── load_person          (profile → Person)
//!     ├── Client               (Person + Arc<Account>)
//!     ├── tokio runtime        (hosts the LoadGenerator workers)
//!     ├── run_prompt           (blocks the calling thread on input)
//!     └── cancel + shutdown    (stop workers, collect LoadReport)
//! ```

use super::args::CliArgs;
use super::prompt::run_prompt;
use crate::core::{Account, BankClient, Client};
use crate::io::load_person;
use crate::load::{LoadGenerator, LoadReport};
use std::io::{BufRead, Write};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Outcome of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Balance after every worker stopped
    pub final_balance: i64,
    /// Work done by the background workers
    pub load: LoadReport,
}

/// Run a complete interactive session
///
/// Loads the profile named by `args`, starts background traffic, runs the
/// prompt over `input`/`output` and, once the prompt ends, cancels and joins
/// the workers before printing `Bye!`.
///
/// # Errors
///
/// Returns an error if the profile cannot be loaded, the runtime cannot be
/// built, or reading/writing the prompt fails. Rejected deposits and
/// withdrawals are not errors.
pub fn run_session<R, W>(args: &CliArgs, input: R, output: &mut W) -> Result<SessionSummary, String>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let person = load_person(&args.profile)
        .map_err(|e| format!("Failed to load profile '{}': {}", args.profile.display(), e))?;
    let account = Arc::new(Account::new(args.initial_balance));
    let client = Arc::new(Client::with_account(person, account));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(args.runtime_threads())
        .enable_time()
        .build()
        .map_err(|e| format!("Failed to create tokio runtime: {}", e))?;

    let config = args.to_load_config();
    let token = CancellationToken::new();
    let generator = if config.worker_count() == 0 {
        LoadGenerator::idle()
    } else {
        LoadGenerator::spawn(
            runtime.handle(),
            Arc::clone(&client),
            &config,
            token.clone(),
        )
    };
    tracing::info!(
        client = %client.id(),
        owner = %client.owner(),
        workers = generator.worker_count(),
        initial_balance = args.initial_balance,
        "session started"
    );

    let prompt_result = run_prompt(client.as_ref(), input, output);

    token.cancel();
    let load = runtime.block_on(generator.shutdown());
    tracing::info!(
        deposits = load.deposits,
        withdrawals = load.withdrawals,
        rejected = load.rejected,
        "load generator stopped"
    );

    prompt_result.map_err(|e| format!("Prompt I/O error: {}", e))?;
    writeln!(output, "Bye!").map_err(|e| format!("Failed to write output: {}", e))?;

    Ok(SessionSummary {
        final_balance: client.balance(),
        load,
    })
}
