//! Weighted scoring
//!
//! Sums `signal.fraction() * weight` over every criterion that carries a
//! weight in the config. Criteria absent from the weight table, and criteria
//! that do not apply to the query, are skipped and do not appear in the
//! breakdown.

use crate::criteria::{Criterion, Signal, STANDARD_CRITERIA};
use selectx_core::{CatalogItem, ResolvedQuery, ScoringConfig};
use serde::Serialize;
use std::collections::BTreeMap;

/// Criterion name to raw signal
pub type Breakdown = BTreeMap<&'static str, Signal>;

/// Score of one item against one query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scorecard {
    /// Sum of weighted contributions, rounded
    pub score: u32,
    /// Unrounded sum
    #[serde(skip)]
    pub points: f64,
    pub breakdown: Breakdown,
}

/// Score an item with the standard criteria
pub fn score(item: &CatalogItem, query: &ResolvedQuery, config: &ScoringConfig) -> Scorecard {
    score_with(&STANDARD_CRITERIA, item, query, config)
}

/// Score an item with an explicit criterion set
pub fn score_with(
    criteria: &[&dyn Criterion],
    item: &CatalogItem,
    query: &ResolvedQuery,
    config: &ScoringConfig,
) -> Scorecard {
    let mut breakdown = Breakdown::new();
    let mut points = 0.0f64;

    for criterion in criteria {
        let weight = config.weight(criterion.name());
        if weight <= 0.0 {
            continue;
        }

        let Some(signal) = criterion.evaluate(item, query, config.tolerance) else {
            continue;
        };
        points += signal.fraction() * weight;
        breakdown.insert(criterion.name(), signal);
    }

    Scorecard {
        score: round_score(points),
        points,
        breakdown,
    }
}

fn round_score(points: f64) -> u32 {
    if points.is_finite() && points > 0.0 {
        points.round() as u32
    } else {
        0
    }
}
