//! Randomized background load against a shared account
//!
//! This module provides the `LoadGenerator`, which spawns depositor and
//! withdrawer tasks on a tokio runtime. Each task owns its random number
//! generator and stops when the caller's `CancellationToken` fires.
//!
//! # Architecture
//!
//! ```text
//! LoadGenerator
//!     ├── depositor tasks  (sleep random delay, deposit random amount)
//!     ├── withdrawer tasks (sleep random delay, withdraw random amount)
//!     └── CancellationToken (owned by the caller, cloned into every task)
//! ```

use super::config::LoadConfig;
use crate::core::BankClient;
use futures::future::join_all;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Return a uniformly random `n` with `min <= n <= max`
///
/// Bounds given in the wrong order are swapped.
pub fn rand_in_range<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let (min, max) = if min > max { (max, min) } else { (min, max) };
    rng.gen_range(min..=max)
}

/// Pause of `min_ms..=max_ms` milliseconds, sampled over the full `u64` range
fn random_delay<R: Rng + ?Sized>(rng: &mut R, min_ms: u64, max_ms: u64) -> Duration {
    let (min_ms, max_ms) = if min_ms > max_ms { (max_ms, min_ms) } else { (min_ms, max_ms) };
    Duration::from_millis(rng.gen_range(min_ms..=max_ms))
}

/// Which operation a worker issues
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkerKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for WorkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerKind::Deposit => write!(f, "deposit"),
            WorkerKind::Withdrawal => write!(f, "withdrawal"),
        }
    }
}

/// Operations performed by the workers
///
/// `deposited` and `withdrawn` only count successful operations, so the final
/// balance equals the starting balance plus `net()` when no one else touched
/// the account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub deposits: u64,
    pub withdrawals: u64,
    pub rejected: u64,
    pub deposited: i64,
    pub withdrawn: i64,
}

impl LoadReport {
    /// Net change applied to the balance
    pub fn net(&self) -> i64 {
        self.deposited - self.withdrawn
    }

    fn merge(&mut self, other: LoadReport) {
        self.deposits += other.deposits;
        self.withdrawals += other.withdrawals;
        self.rejected += other.rejected;
        self.deposited += other.deposited;
        self.withdrawn += other.withdrawn;
    }
}

/// Handle on a set of running load workers
#[derive(Debug, Default)]
pub struct LoadGenerator {
    tasks: Vec<JoinHandle<LoadReport>>,
}

impl LoadGenerator {
    /// A generator with no workers
    pub fn idle() -> Self {
        Self::default()
    }

    /// Spawn the configured workers on `handle`
    ///
    /// Workers run until `token` is cancelled. Call [`shutdown`](Self::shutdown)
    /// after cancelling to wait for them.
    pub fn spawn<C>(
        handle: &Handle,
        client: Arc<C>,
        config: &LoadConfig,
        token: CancellationToken,
    ) -> Self
    where
        C: BankClient + ?Sized + 'static,
    {
        let workers = (0..config.depositors)
            .map(|i| (WorkerKind::Deposit, i))
            .chain((0..config.withdrawers).map(|i| (WorkerKind::Withdrawal, i)));

        let tasks = workers
            .map(|(kind, index)| {
                let worker = Worker {
                    kind,
                    index,
                    client: Arc::clone(&client),
                    config: config.clone(),
                };
                handle.spawn(worker.run(token.clone()))
            })
            .collect();

        Self { tasks }
    }

    /// Number of spawned workers
    pub fn worker_count(&self) -> usize {
        self.tasks.len()
    }

    /// Wait for every worker to stop and combine their reports
    ///
    /// Only returns once the token passed to [`spawn`](Self::spawn) has been
    /// cancelled. A worker that panicked is logged and left out of the report.
    pub async fn shutdown(self) -> LoadReport {
        let mut report = LoadReport::default();
        for result in join_all(self.tasks).await {
            match result {
                Ok(worker_report) => report.merge(worker_report),
                Err(e) => tracing::error!(error = %e, "load worker panicked"),
            }
        }
        report
    }
}

struct Worker<C: ?Sized> {
    kind: WorkerKind,
    index: usize,
    client: Arc<C>,
    config: LoadConfig,
}

impl<C: BankClient + ?Sized> Worker<C> {
    async fn run(self, token: CancellationToken) -> LoadReport {
        let mut rng = SmallRng::from_entropy();
        let mut report = LoadReport::default();

        loop {
            let delay = random_delay(&mut rng, self.config.min_delay_ms, self.config.max_delay_ms);
            tokio::select! {
                _ = token.cancelled() => break,
                _ = tokio::time::sleep(delay) => {}
            }

            match self.kind {
                WorkerKind::Deposit => {
                    let amount = rand_in_range(
                        &mut rng,
                        *self.config.deposit_range.start(),
                        *self.config.deposit_range.end(),
                    );
                    match self.client.deposit(amount) {
                        Ok(()) => {
                            report.deposits += 1;
                            report.deposited += amount;
                        }
                        Err(e) => {
                            report.rejected += 1;
                            tracing::info!(worker = self.index, error = %e, "deposit rejected");
                        }
                    }
                }
                WorkerKind::Withdrawal => {
                    let amount = rand_in_range(
                        &mut rng,
                        *self.config.withdraw_range.start(),
                        *self.config.withdraw_range.end(),
                    );
                    match self.client.withdraw(amount) {
                        Ok(()) => {
                            report.withdrawals += 1;
                            report.withdrawn += amount;
                        }
                        Err(e) => {
                            report.rejected += 1;
                            tracing::info!(worker = self.index, error = %e, "withdrawal rejected");
                        }
                    }
                }
            }
        }

        tracing::info!("[{} worker {}] finished", self.kind, self.index);
        report
    }
}
