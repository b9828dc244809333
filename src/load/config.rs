//! Load generator configuration

use std::ops::RangeInclusive;

/// Configuration for background load generation
///
/// Controls how many workers hammer the account, how long each waits between
/// operations and how large the random amounts are.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadConfig {
    /// Number of tasks issuing deposits
    pub depositors: usize,
    /// Number of tasks issuing withdrawals
    pub withdrawers: usize,
    /// Lower bound of the pause before each operation
    pub min_delay_ms: u64,
    /// Upper bound of the pause before each operation
    pub max_delay_ms: u64,
    /// Amounts drawn for deposits
    pub deposit_range: RangeInclusive<i64>,
    /// Amounts drawn for withdrawals
    pub withdraw_range: RangeInclusive<i64>,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            depositors: 10,
            withdrawers: 5,
            min_delay_ms: 500,
            max_delay_ms: 1000,
            deposit_range: 1..=10,
            withdraw_range: 1..=5,
        }
    }
}

impl LoadConfig {
    /// Create a LoadConfig with custom worker counts and delays
    ///
    /// Amount ranges keep their defaults. An inverted delay window is
    /// swapped rather than rejected.
    pub fn new(depositors: usize, withdrawers: usize, min_delay_ms: u64, max_delay_ms: u64) -> Self {
        let (min_delay_ms, max_delay_ms) = if min_delay_ms > max_delay_ms {
            tracing::warn!(
                min_delay_ms,
                max_delay_ms,
                "min delay exceeds max delay, swapping bounds"
            );
            (max_delay_ms, min_delay_ms)
        } else {
            (min_delay_ms, max_delay_ms)
        };

        Self {
            depositors,
            withdrawers,
            min_delay_ms,
            max_delay_ms,
            ..Self::default()
        }
    }

    /// Replace the amount ranges
    ///
    /// Negative lower bounds are clamped to zero so generated traffic is
    /// always well-formed.
    pub fn with_amounts(
        mut self,
        deposit_range: RangeInclusive<i64>,
        withdraw_range: RangeInclusive<i64>,
    ) -> Self {
        self.deposit_range = non_negative(deposit_range, "deposit");
        self.withdraw_range = non_negative(withdraw_range, "withdraw");
        self
    }

    /// Total number of workers
    pub fn worker_count(&self) -> usize {
        self.depositors + self.withdrawers
    }
}

fn non_negative(range: RangeInclusive<i64>, kind: &str) -> RangeInclusive<i64> {
    let (start, end) = range.into_inner();
    let (start, end) = if start > end { (end, start) } else { (start, end) };
    if start < 0 {
        tracing::warn!(kind, start, "negative amount bound, clamping to 0");
    }
    start.max(0)..=end.max(0)
}
