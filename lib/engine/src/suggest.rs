//! Query-independent item listings
//!
//! These bypass the scoring engine entirely; they only look at item
//! attributes. Ties keep catalog order.

use ordered_float::OrderedFloat;
use selectx_core::{Application, CatalogItem};
use std::cmp::Reverse;

/// Points added to the top-rated composite per supported application
pub const VERSATILITY_POINTS: f64 = 5.0;

/// Items rated for `application`, most efficient first
pub fn suggest_by_category(
    catalog: &[CatalogItem],
    application: Application,
    limit: usize,
) -> Vec<&CatalogItem> {
    let mut items: Vec<&CatalogItem> = catalog
        .iter()
        .filter(|item| item.supports(application))
        .collect();
    items.sort_by_key(|item| Reverse(OrderedFloat(item.efficiency)));
    items.truncate(limit);
    items
}

/// Composite used by [`top_rated`]: efficiency plus a bonus per application
pub fn rating(item: &CatalogItem) -> f64 {
    item.efficiency + VERSATILITY_POINTS * item.versatility() as f64
}

/// Best items overall by [`rating`]
pub fn top_rated(catalog: &[CatalogItem], limit: usize) -> Vec<&CatalogItem> {
    let mut items: Vec<&CatalogItem> = catalog.iter().collect();
    items.sort_by_key(|item| Reverse(OrderedFloat(rating(item))));
    items.truncate(limit);
    items
}
