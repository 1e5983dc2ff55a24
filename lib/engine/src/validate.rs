//! Query validation
//!
//! Checks every field and collects every failure; never stops at the first
//! one and never touches the query.

use selectx_core::{CategoricalField, NumericField, Query, QueryError, QueryLimits};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<QueryError>,
}

impl ValidationResult {
    /// Human-readable error messages
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Names of every offending field, in check order
    pub fn fields(&self) -> Vec<&'static str> {
        self.errors.iter().map(QueryError::field).collect()
    }
}

/// Validate against the default domain ceilings
///
/// When ranking with a config whose `limits` differ from the defaults, use
/// [`validate_with_limits`] or [`Ranker::validate`] instead so validation
/// and ranking agree on what is out of domain.
///
/// [`Ranker::validate`]: crate::Ranker::validate
pub fn validate(query: &Query) -> ValidationResult {
    validate_with_limits(query, &QueryLimits::default())
}

/// Validate against explicit ceilings, the ones `rank` uses from its config
pub fn validate_with_limits(query: &Query, limits: &QueryLimits) -> ValidationResult {
    let mut errors = Vec::new();

    for field in NumericField::ALL {
        if let Some(value) = field.value(query) {
            if let Err(err) = field.check(value, limits) {
                errors.push(err);
            }
        }
    }

    for field in CategoricalField::ALL {
        if let Some(value) = field.value(query) {
            if let Err(err) = field.check(value) {
                errors.push(err);
            }
        }
    }

    ValidationResult {
        valid: errors.is_empty(),
        errors,
    }
}
