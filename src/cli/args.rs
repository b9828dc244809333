use crate::load::LoadConfig;
use clap::Parser;
use std::path::PathBuf;

/// Interactive bank account with concurrent background traffic
#[derive(Parser, Debug)]
#[command(name = "bank-cli")]
#[command(about = "Interactive bank account with concurrent background traffic", long_about = None)]
pub struct CliArgs {
    /// JSON profile of the account holder
    #[arg(
        long = "profile",
        value_name = "PATH",
        default_value = "profile.json",
        help = "Path to the JSON profile (firstname, lastname, email)"
    )]
    pub profile: PathBuf,

    /// Starting balance of the account
    #[arg(
        long = "initial-balance",
        value_name = "AMOUNT",
        default_value_t = 0,
        value_parser = clap::value_parser!(i64).range(0..),
        help = "Balance the account starts with"
    )]
    pub initial_balance: i64,

    /// Number of background depositor tasks
    #[arg(long = "depositors", value_name = "COUNT")]
    pub depositors: Option<usize>,

    /// Number of background withdrawer tasks
    #[arg(long = "withdrawers", value_name = "COUNT")]
    pub withdrawers: Option<usize>,

    /// Minimum pause between background operations
    #[arg(long = "min-delay-ms", value_name = "MS")]
    pub min_delay_ms: Option<u64>,

    /// Maximum pause between background operations
    #[arg(long = "max-delay-ms", value_name = "MS")]
    pub max_delay_ms: Option<u64>,

    /// Largest amount a background depositor adds at once
    #[arg(
        long = "deposit-max",
        value_name = "AMOUNT",
        value_parser = clap::value_parser!(i64).range(1..),
        help = "Background deposits are drawn from 1..=AMOUNT (default: 10)"
    )]
    pub deposit_max: Option<i64>,

    /// Largest amount a background withdrawer removes at once
    #[arg(
        long = "withdraw-max",
        value_name = "AMOUNT",
        value_parser = clap::value_parser!(i64).range(1..),
        help = "Background withdrawals are drawn from 1..=AMOUNT (default: 5)"
    )]
    pub withdraw_max: Option<i64>,

    /// Disable background traffic entirely
    #[arg(long = "no-load", help = "Run without background depositors and withdrawers")]
    pub no_load: bool,

    /// Runtime worker threads for background tasks
    #[arg(
        long = "worker-threads",
        value_name = "COUNT",
        help = "Runtime worker threads (default: CPU cores)"
    )]
    pub worker_threads: Option<usize>,
}

impl CliArgs {
    /// Create a LoadConfig from CLI arguments
    ///
    /// Unset options fall back to the `LoadConfig` defaults. `--no-load`
    /// yields a configuration with no workers.
    pub fn to_load_config(&self) -> LoadConfig {
        let default = LoadConfig::default();
        if self.no_load {
            return LoadConfig::new(0, 0, default.min_delay_ms, default.max_delay_ms);
        }

        LoadConfig::new(
            self.depositors.unwrap_or(default.depositors),
            self.withdrawers.unwrap_or(default.withdrawers),
            self.min_delay_ms.unwrap_or(default.min_delay_ms),
            self.max_delay_ms.unwrap_or(default.max_delay_ms),
        )
        .with_amounts(
            *default.deposit_range.start()..=self.deposit_max.unwrap_or(*default.deposit_range.end()),
            *default.withdraw_range.start()
                ..=self.withdraw_max.unwrap_or(*default.withdraw_range.end()),
        )
    }

    /// Worker threads for the runtime, never zero
    pub fn runtime_threads(&self) -> usize {
        match self.worker_threads {
            Some(0) => {
                tracing::warn!("Invalid worker_threads (0), using default ({})", num_cpus::get());
                num_cpus::get()
            }
            Some(n) => n,
            None => num_cpus::get(),
        }
    }
}
