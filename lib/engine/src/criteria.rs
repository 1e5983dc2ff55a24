//! Scoring criteria
//!
//! Each weighted criterion is a small strategy that evaluates one aspect of
//! an item against a query and reports a [`Signal`]. The scorer multiplies the
//! signal's fraction by the criterion's weight from the [`ScoringConfig`].
//!
//! [`ScoringConfig`]: selectx_core::ScoringConfig

use crate::range::range_match;
use selectx_core::{criteria, Attribute, CatalogItem, Range, ResolvedQuery};
use serde::Serialize;
use std::fmt;

/// Per-criterion explainability record.
///
/// Holds the raw match, not the weighted contribution. Serializes as a bare
/// number, a bool, or `null` for a requirement the query left open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Signal {
    /// Continuous match in [0, 100]
    Percent(f64),
    /// Boolean match
    Matched(bool),
    /// The query did not constrain this requirement; earns full credit
    Unspecified,
}

impl Signal {
    /// Share of the criterion's weight earned, in [0, 1]
    pub fn fraction(self) -> f64 {
        match self {
            Signal::Percent(p) => (p / 100.0).clamp(0.0, 1.0),
            Signal::Matched(true) | Signal::Unspecified => 1.0,
            Signal::Matched(false) => 0.0,
        }
    }

    pub fn is_specified(self) -> bool {
        !matches!(self, Signal::Unspecified)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Percent(p) => write!(f, "{:.0}%", p),
            Signal::Matched(true) => f.write_str("matched"),
            Signal::Matched(false) => f.write_str("not matched"),
            Signal::Unspecified => f.write_str("not specified"),
        }
    }
}

/// A named contribution to an item's score.
///
/// Implementations must be pure: same item, query and tolerance always give
/// the same signal.
pub trait Criterion: Send + Sync {
    /// Key into the weight table
    fn name(&self) -> &'static str;

    /// `None` when the criterion does not apply to this query at all; it then
    /// earns nothing and is left out of the breakdown.
    fn evaluate(&self, item: &CatalogItem, query: &ResolvedQuery, tolerance: f64)
        -> Option<Signal>;
}

/// Numeric target scored against one of the item's ranges
pub struct RangeCriterion {
    pub name: &'static str,
    pub range: fn(&CatalogItem) -> &Range,
    pub target: fn(&ResolvedQuery) -> Option<f64>,
}

impl Criterion for RangeCriterion {
    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(
        &self,
        item: &CatalogItem,
        query: &ResolvedQuery,
        tolerance: f64,
    ) -> Option<Signal> {
        let signal = match (self.target)(query) {
            Some(target) => {
                Signal::Percent(range_match(Some(target), (self.range)(item), tolerance))
            }
            None => Signal::Unspecified,
        };
        Some(signal)
    }
}

/// Categorical requirement: full credit when unspecified or matched
pub struct AttributeCriterion {
    pub name: &'static str,
    /// `None` when the query leaves the attribute unspecified
    pub matches: fn(&CatalogItem, &ResolvedQuery) -> Option<bool>,
}

impl Criterion for AttributeCriterion {
    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(
        &self,
        item: &CatalogItem,
        query: &ResolvedQuery,
        _tolerance: f64,
    ) -> Option<Signal> {
        let signal = match (self.matches)(item, query) {
            Some(matched) => Signal::Matched(matched),
            None => Signal::Unspecified,
        };
        Some(signal)
    }
}

/// Item efficiency, independent of the query
pub struct EfficiencyBonus;

impl Criterion for EfficiencyBonus {
    fn name(&self) -> &'static str {
        criteria::EFFICIENCY
    }

    fn evaluate(
        &self,
        item: &CatalogItem,
        _query: &ResolvedQuery,
        _tolerance: f64,
    ) -> Option<Signal> {
        Some(Signal::Percent(item.efficiency.clamp(0.0, 100.0)))
    }
}

/// Flat bonus for an exact preference match; absent when unspecified
pub struct PreferenceBonus {
    pub name: &'static str,
    pub matches: fn(&CatalogItem, &ResolvedQuery) -> Option<bool>,
}

impl Criterion for PreferenceBonus {
    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(
        &self,
        item: &CatalogItem,
        query: &ResolvedQuery,
        _tolerance: f64,
    ) -> Option<Signal> {
        (self.matches)(item, query).map(Signal::Matched)
    }
}

fn item_flow(item: &CatalogItem) -> &Range {
    &item.flow
}

fn item_head(item: &CatalogItem) -> &Range {
    &item.head
}

fn query_flow(query: &ResolvedQuery) -> Option<f64> {
    query.flow
}

fn query_head(query: &ResolvedQuery) -> Option<f64> {
    query.head
}

fn installation_matches(item: &CatalogItem, query: &ResolvedQuery) -> Option<bool> {
    query.installation.map(|wanted| item.installation.compatible_with(wanted))
}

fn phase_matches(item: &CatalogItem, query: &ResolvedQuery) -> Option<bool> {
    query.phase.map(|wanted| item.phase.compatible_with(wanted))
}

fn application_matches(item: &CatalogItem, query: &ResolvedQuery) -> Option<bool> {
    query.application.map(|wanted| item.supports(wanted))
}

fn material_matches(item: &CatalogItem, query: &ResolvedQuery) -> Option<bool> {
    query.preferred_material.map(|wanted| item.material == wanted)
}

pub static FLOW: RangeCriterion = RangeCriterion {
    name: criteria::FLOW,
    range: item_flow,
    target: query_flow,
};

pub static HEAD: RangeCriterion = RangeCriterion {
    name: criteria::HEAD,
    range: item_head,
    target: query_head,
};

pub static INSTALLATION: AttributeCriterion = AttributeCriterion {
    name: criteria::INSTALLATION,
    matches: installation_matches,
};

pub static PHASE: AttributeCriterion = AttributeCriterion {
    name: criteria::PHASE,
    matches: phase_matches,
};

pub static APPLICATION: AttributeCriterion = AttributeCriterion {
    name: criteria::APPLICATION,
    matches: application_matches,
};

pub static EFFICIENCY: EfficiencyBonus = EfficiencyBonus;

pub static MATERIAL: PreferenceBonus = PreferenceBonus {
    name: criteria::MATERIAL,
    matches: material_matches,
};

/// Every criterion the weight table can name, in breakdown order
pub static STANDARD_CRITERIA: [&dyn Criterion; 7] = [
    &FLOW,
    &HEAD,
    &INSTALLATION,
    &PHASE,
    &APPLICATION,
    &EFFICIENCY,
    &MATERIAL,
];
