//! Batch driver and summary statistics.
//!
//! Every observation is independent, so a batch is a map over the inputs
//! followed by a policy decision on failures. The only shared state is the
//! borrowed, immutable calendar inside the engine.

use cipfx_core::calendars::Calendar;
use cipfx_core::{CipError, CipResult};
use serde::{Deserialize, Serialize};

use crate::engine::RateEngine;
use crate::observation::{ComputedResult, SwapObservation};
use crate::tenor::Tenor;

/// What to do when an observation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BatchPolicy {
    /// Record the failure and keep going.
    #[default]
    SkipAndContinue,
    /// Fail the whole batch on the first failure (by input order).
    AbortAll,
}

/// A skipped observation.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchFailure {
    /// Position of the observation in the input.
    pub index: usize,
    /// Why it failed, tagged with its trade date.
    pub error: CipError,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// Successful results in input order.
    pub results: Vec<ComputedResult>,
    /// Failures in input order. Always empty under `AbortAll`.
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    /// Returns true if every observation succeeded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Summary statistics over the successful results.
    pub fn summary(&self, tenor: Tenor) -> Option<BatchSummary> {
        BatchSummary::from_results(tenor, &self.results)
    }
}

/// Processes observations in order on the current thread.
///
/// # Errors
///
/// Under `BatchPolicy::AbortAll`, returns the first failure.
pub fn run_batch<C: Calendar + ?Sized>(
    engine: &RateEngine<'_, C>,
    observations: &[SwapObservation],
    policy: BatchPolicy,
) -> CipResult<BatchReport> {
    let outcomes = observations.iter().map(|obs| engine.process(obs));
    collect_outcomes(outcomes, policy)
}

/// Processes observations across the rayon thread pool.
///
/// Results keep input order, and `AbortAll` reports the failure with the
/// lowest index, so the outcome is identical to [`run_batch`].
#[cfg(feature = "parallel")]
pub fn run_batch_parallel<C: Calendar + ?Sized>(
    engine: &RateEngine<'_, C>,
    observations: &[SwapObservation],
    policy: BatchPolicy,
) -> CipResult<BatchReport> {
    use rayon::prelude::*;

    let outcomes: Vec<CipResult<ComputedResult>> = observations
        .par_iter()
        .map(|obs| engine.process(obs))
        .collect();
    collect_outcomes(outcomes, policy)
}

fn collect_outcomes(
    outcomes: impl IntoIterator<Item = CipResult<ComputedResult>>,
    policy: BatchPolicy,
) -> CipResult<BatchReport> {
    let mut report = BatchReport::default();

    for (index, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(result) => {
                tracing::debug!(
                    trade_date = %result.trade_date,
                    spot_date = %result.spot_date,
                    forward_date = %result.forward_date,
                    days = result.actual_days,
                    implied_pct = result.implied_rate_pct,
                    diff_bps = result.diff_bps,
                    "Observation processed"
                );
                report.results.push(result);
            }
            Err(error) => match policy {
                BatchPolicy::AbortAll => {
                    tracing::error!(index, error = %error, "Aborting batch");
                    return Err(error);
                }
                BatchPolicy::SkipAndContinue => {
                    tracing::warn!(index, error = %error, "Skipping observation");
                    report.failures.push(BatchFailure { index, error });
                }
            },
        }
    }

    tracing::info!(
        processed = report.results.len(),
        skipped = report.failures.len(),
        "Batch complete"
    );
    Ok(report)
}

/// Aggregate statistics over a batch of results for one tenor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Tenor of the batch.
    pub tenor: Tenor,
    /// Number of results.
    pub count: usize,
    /// Mean implied local rate (percent).
    pub mean_implied_pct: f64,
    /// Lowest implied local rate (percent).
    pub min_implied_pct: f64,
    /// Highest implied local rate (percent).
    pub max_implied_pct: f64,
    /// Mean reference rate (percent).
    pub mean_reference_pct: f64,
    /// Mean differential (bps).
    pub mean_diff_bps: f64,
    /// Shortest spot-to-forward period.
    pub min_days: i64,
    /// Longest spot-to-forward period.
    pub max_days: i64,
    /// Mean spot-to-forward period.
    pub mean_days: f64,
}

impl BatchSummary {
    /// Summarises `results`; `None` when there are none.
    pub fn from_results(tenor: Tenor, results: &[ComputedResult]) -> Option<Self> {
        let first = results.first()?;
        let n = results.len() as f64;

        let mut summary = BatchSummary {
            tenor,
            count: results.len(),
            mean_implied_pct: 0.0,
            min_implied_pct: first.implied_rate_pct,
            max_implied_pct: first.implied_rate_pct,
            mean_reference_pct: 0.0,
            mean_diff_bps: 0.0,
            min_days: first.actual_days,
            max_days: first.actual_days,
            mean_days: 0.0,
        };

        for r in results {
            summary.mean_implied_pct += r.implied_rate_pct;
            summary.mean_reference_pct += r.reference_rate_pct;
            summary.mean_diff_bps += r.diff_bps;
            summary.mean_days += r.actual_days as f64;
            summary.min_implied_pct = summary.min_implied_pct.min(r.implied_rate_pct);
            summary.max_implied_pct = summary.max_implied_pct.max(r.implied_rate_pct);
            summary.min_days = summary.min_days.min(r.actual_days);
            summary.max_days = summary.max_days.max(r.actual_days);
        }

        summary.mean_implied_pct /= n;
        summary.mean_reference_pct /= n;
        summary.mean_diff_bps /= n;
        summary.mean_days /= n;
        Some(summary)
    }
}
