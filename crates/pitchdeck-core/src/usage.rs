//! Token usage accounting.
//!
//! [`UsageTracker`] accumulates the tokens reported by every upstream call.
//! It is injected through application state and shared by all requests;
//! updates are atomic so concurrent generations never lose counts.

use std::sync::atomic::{AtomicU64, Ordering};

use pitchdeck_types::deck::UsageSummary;

/// Process-wide token accumulator with a flat per-thousand-token price.
#[derive(Debug)]
pub struct UsageTracker {
    total_tokens: AtomicU64,
    cost_per_thousand: f64,
}

impl UsageTracker {
    pub fn new(cost_per_thousand: f64) -> Self {
        Self {
            total_tokens: AtomicU64::new(0),
            cost_per_thousand,
        }
    }

    /// Add `tokens` to the running total and return the new total.
    /// The total saturates at `u64::MAX`.
    pub fn record(&self, tokens: u64) -> u64 {
        let previous = self
            .total_tokens
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |t| Some(t.saturating_add(tokens)))
            .unwrap_or_else(|t| t);
        let total = previous.saturating_add(tokens);
        tracing::info!(tokens, total_tokens = total, "Total tokens used: {total}");
        total
    }

    /// Tokens accumulated so far.
    pub fn total(&self) -> u64 {
        self.total_tokens.load(Ordering::Relaxed)
    }

    /// Snapshot of the running total with its estimated cost.
    pub fn summary(&self) -> UsageSummary {
        let total_tokens = self.total();
        UsageSummary {
            total_tokens,
            estimated_cost: format_cost(estimate_cost(total_tokens, self.cost_per_thousand)),
        }
    }
}

/// Estimate the USD cost of `total_tokens` at a flat per-thousand rate.
pub fn estimate_cost(total_tokens: u64, cost_per_thousand: f64) -> f64 {
    total_tokens as f64 * cost_per_thousand / 1000.0
}

/// Format a cost as dollars with two decimal places: `$0.12`.
pub fn format_cost(cost: f64) -> String {
    format!("${cost:.2}")
}
