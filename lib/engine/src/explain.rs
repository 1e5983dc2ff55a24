//! Explainability for ranked results
//!
//! Turns breakdowns into something an end user can read, and summarises a
//! ranking run.

use crate::rank::{FilterResult, RankedResult};
use selectx_core::criteria;
use serde::Serialize;

/// One line per criterion, e.g. `flow: 87%` or `phase: matched`
pub fn explain(result: &RankedResult<'_>) -> Vec<String> {
    result
        .breakdown
        .iter()
        .map(|(criterion, signal)| format!("{}: {}", criterion, signal))
        .collect()
}

/// Summary statistics for a ranking run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankStats {
    /// Number of catalog items considered
    pub candidates_count: usize,
    /// Number of results returned
    pub results_count: usize,
    /// Average score of results
    pub avg_score: f64,
    /// Score of best result
    pub best_score: u32,
    /// Requested criterion with the weakest match in the best result
    pub weakest_criterion: Option<String>,
}

impl RankStats {
    /// Compute stats from a sorted result
    pub fn compute(result: &FilterResult<'_>, candidates_count: usize) -> Self {
        let Some(best) = result.matches.first() else {
            return Self {
                candidates_count,
                results_count: 0,
                avg_score: 0.0,
                best_score: 0,
                weakest_criterion: None,
            };
        };

        let sum: u64 = result.matches.iter().map(|r| u64::from(r.score)).sum();
        let avg_score = sum as f64 / result.matches.len() as f64;

        // efficiency rates the item, not its fit to the query
        // first minimum wins so the pick is deterministic
        let weakest_criterion = best
            .breakdown
            .iter()
            .filter(|(name, signal)| **name != criteria::EFFICIENCY && signal.is_specified())
            .fold(None::<(&str, f64)>, |weakest, (name, signal)| match weakest {
                Some((_, lowest)) if lowest <= signal.fraction() => weakest,
                _ => Some((*name, signal.fraction())),
            })
            .filter(|(_, fraction)| *fraction < 1.0)
            .map(|(name, _)| name.to_string());

        Self {
            candidates_count,
            results_count: result.matches.len(),
            avg_score,
            best_score: best.score,
            weakest_criterion,
        }
    }
}
