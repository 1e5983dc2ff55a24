// Hard-filter admission predicate
use crate::range::is_in_range;
use selectx_core::{Attribute, CatalogItem, ResolvedQuery};
use std::fmt;

/// Why an item was excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    FlowOutOfRange,
    HeadOutOfRange,
    Installation,
    Phase,
    Application,
    SolidsUnsupported,
    PowerAboveCeiling,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::FlowOutOfRange => "flow outside tolerance",
            Rejection::HeadOutOfRange => "head outside tolerance",
            Rejection::Installation => "installation type mismatch",
            Rejection::Phase => "electrical phase mismatch",
            Rejection::Application => "application not supported",
            Rejection::SolidsUnsupported => "solids handling not supported",
            Rejection::PowerAboveCeiling => "power requirement above ceiling",
        };
        f.write_str(reason)
    }
}

/// Run every hard filter, returning the first one the item fails.
///
/// Unspecified query fields never reject.
pub fn check(item: &CatalogItem, query: &ResolvedQuery, tolerance: f64) -> Result<(), Rejection> {
    if let Some(flow) = query.flow {
        if !is_in_range(flow, &item.flow, tolerance) {
            return Err(Rejection::FlowOutOfRange);
        }
    }

    if let Some(head) = query.head {
        if !is_in_range(head, &item.head, tolerance) {
            return Err(Rejection::HeadOutOfRange);
        }
    }

    if let Some(installation) = query.installation {
        if !item.installation.compatible_with(installation) {
            return Err(Rejection::Installation);
        }
    }

    if let Some(phase) = query.phase {
        if !item.phase.compatible_with(phase) {
            return Err(Rejection::Phase);
        }
    }

    if let Some(application) = query.application {
        if !item.supports(application) {
            return Err(Rejection::Application);
        }
    }

    if query.solids_handling && !item.supports_solids() {
        return Err(Rejection::SolidsUnsupported);
    }

    if let Some(ceiling) = query.max_power {
        if item.power.min > ceiling {
            return Err(Rejection::PowerAboveCeiling);
        }
    }

    Ok(())
}

/// Whether the item passes every hard filter
#[inline]
pub fn admits(item: &CatalogItem, query: &ResolvedQuery, tolerance: f64) -> bool {
    check(item, query, tolerance).is_ok()
}
