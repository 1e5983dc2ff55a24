//! Filter/rank engine
//!
//! Admits items through the hard filters, scores the survivors, drops those
//! under the minimum score and sorts the rest by score descending. Items
//! with equal scores keep their catalog order.

use crate::criteria::{Criterion, STANDARD_CRITERIA};
use crate::filter::check;
use crate::scoring::{score_with, Breakdown};
use crate::validate::{validate_with_limits, ValidationResult};
use selectx_core::{CatalogItem, Query, ResolvedQuery, ScoringConfig};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashMap;
use tracing::debug;

/// A catalog item with its computed score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult<'a> {
    #[serde(flatten)]
    pub item: &'a CatalogItem,
    pub score: u32,
    pub breakdown: Breakdown,
}

impl RankedResult<'_> {
    pub fn id(&self) -> &str {
        &self.item.id
    }
}

/// Ranked matches; `total` is always `matches.len()`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterResult<'a> {
    pub matches: Vec<RankedResult<'a>>,
    pub total: usize,
}

impl FilterResult<'_> {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Rank `catalog` against `query`
///
/// Never fails: an empty result is a normal outcome, and values that
/// `validate_with_limits(query, &config.limits)` rejects are treated as
/// unspecified.
pub fn rank<'a>(
    catalog: &'a [CatalogItem],
    query: &Query,
    config: &ScoringConfig,
) -> FilterResult<'a> {
    let resolved = query.resolve(&config.limits);
    rank_resolved(&STANDARD_CRITERIA, catalog, &resolved, config)
}

/// Rank against an already resolved query with an explicit criterion set
pub fn rank_resolved<'a>(
    criteria: &[&dyn Criterion],
    catalog: &'a [CatalogItem],
    query: &ResolvedQuery,
    config: &ScoringConfig,
) -> FilterResult<'a> {
    let mut rejected = 0usize;
    let mut below_cutoff = 0usize;

    let mut matches: Vec<RankedResult<'a>> = Vec::new();
    for item in catalog {
        if let Err(reason) = check(item, query, config.tolerance) {
            debug!("Rejected {}: {}", item.id, reason);
            rejected += 1;
            continue;
        }

        let card = score_with(criteria, item, query, config);
        if f64::from(card.score) < config.min_score {
            below_cutoff += 1;
            continue;
        }

        matches.push(RankedResult {
            item,
            score: card.score,
            breakdown: card.breakdown,
        });
    }

    // stable: equal scores keep catalog order
    matches.sort_by_key(|result| Reverse(result.score));

    debug!(
        "Ranked {} items: {} matched, {} rejected, {} below min score",
        catalog.len(),
        matches.len(),
        rejected,
        below_cutoff
    );

    let total = matches.len();
    FilterResult { matches, total }
}

/// Ranker that owns a scoring configuration
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    config: ScoringConfig,
}

impl Ranker {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn rank<'a>(&self, catalog: &'a [CatalogItem], query: &Query) -> FilterResult<'a> {
        rank(catalog, query, &self.config)
    }

    /// Validate against this ranker's ceilings, the same ones `rank` applies
    pub fn validate(&self, query: &Query) -> ValidationResult {
        validate_with_limits(query, &self.config.limits)
    }

    /// Create a new ranker with custom weight overrides
    ///
    /// Fields not in the overrides keep their configured weights.
    ///
    /// # Example
    /// ```
    /// use selectx_engine::Ranker;
    /// use std::collections::HashMap;
    ///
    /// let ranker = Ranker::default();
    /// let efficiency_first = ranker.with_weights(&HashMap::from([
    ///     ("efficiency".to_string(), 40.0),
    /// ]));
    /// assert_eq!(efficiency_first.config().weight("efficiency"), 40.0);
    /// ```
    pub fn with_weights(&self, weight_overrides: &HashMap<String, f64>) -> Ranker {
        Ranker::new(self.config.with_weights(weight_overrides))
    }
}
