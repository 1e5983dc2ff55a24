//! Range match functions
//!
//! Scores a target value against an item's declared range. All scores are
//! percentages in [0, 100] where 100 means the value sits on the optimal
//! point (the range midpoint).
//!
//! ```text
//!  score
//!  100 |            /\
//!   70 |     ______/  \______
//!   50 |    |                |
//!    0 |____|                |____
//!        min(1-t) min    max  max(1+t)
//! ```

use selectx_core::Range;

/// Score of a value sitting exactly on a range bound
pub const BOUNDARY_SCORE: f64 = 70.0;

/// Score of a value sitting exactly on a tolerance edge
pub const TOLERANCE_EDGE_SCORE: f64 = 50.0;

const IN_RANGE_PENALTY: f64 = 100.0 - BOUNDARY_SCORE;
const TOLERANCE_PENALTY: f64 = BOUNDARY_SCORE - TOLERANCE_EDGE_SCORE;

/// Lower admission edge, `min * (1 - tolerance)`
#[inline]
pub fn lower_edge(range: &Range, tolerance: f64) -> f64 {
    range.min * (1.0 - tolerance)
}

/// Upper admission edge, `max * (1 + tolerance)`
#[inline]
pub fn upper_edge(range: &Range, tolerance: f64) -> f64 {
    range.max * (1.0 + tolerance)
}

/// Whether `value` falls inside the range widened by `tolerance`.
///
/// Non-finite values are never in range.
pub fn is_in_range(value: f64, range: &Range, tolerance: f64) -> bool {
    value >= lower_edge(range, tolerance) && value <= upper_edge(range, tolerance)
}

/// Calculate how well `value` fits `range`
///
/// # Arguments
/// * `value` - Target value, `None` when unspecified
/// * `range` - The item's declared range
/// * `tolerance` - Fractional widening of the bounds
///
/// # Returns
/// Match percentage in [0, 100]:
/// - unspecified: 100
/// - in range: 100 at the midpoint, falling linearly to 70 at either bound
/// - within tolerance: 70 at the bound, falling linearly to 50 at the edge
/// - beyond tolerance: 0
///
/// A zero-width range scores 100 on its single point and otherwise decays
/// against that point exactly like any other bound.
pub fn range_match(value: Option<f64>, range: &Range, tolerance: f64) -> f64 {
    let Some(value) = value else {
        return 100.0;
    };

    if !is_in_range(value, range, tolerance) {
        return 0.0;
    }

    if range.contains(value) {
        let half_width = range.half_width();
        if half_width <= 0.0 {
            return 100.0;
        }
        let off_center = (value - range.midpoint()).abs() / half_width;
        return 100.0 - off_center * IN_RANGE_PENALTY;
    }

    // Strictly outside [min, max] but inside the tolerance band, so the
    // band has positive width on this side.
    let overshoot = if value < range.min {
        (range.min - value) / (range.min - lower_edge(range, tolerance))
    } else {
        (value - range.max) / (upper_edge(range, tolerance) - range.max)
    };

    BOUNDARY_SCORE - overshoot * TOLERANCE_PENALTY
}
