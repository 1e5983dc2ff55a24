//! Query input model
//!
//! [`Query`] is what a caller hands in: every field optional, categorical
//! values still raw strings. [`Query::resolve`] turns it into a
//! [`ResolvedQuery`] with typed values, which is what the engine filters and
//! scores against.
//!
//! Resolution applies a single policy to bad input: anything validation
//! would reject is treated as unspecified. It never fails.

use crate::attributes::{Application, Installation, Material, Phase};
use serde::{Deserialize, Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// A user's partial specification of requirements
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Query {
    /// Required flow in m³/h
    pub flow: Option<f64>,
    /// Required head in metres
    pub head: Option<f64>,
    /// Maximum available power in kW
    pub max_power: Option<f64>,
    pub installation: Option<String>,
    pub phase: Option<String>,
    pub application: Option<String>,
    pub preferred_material: Option<String>,
    /// Whether the pumped medium carries solids
    pub solids_handling: Option<bool>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_flow(mut self, flow: f64) -> Self {
        self.flow = Some(flow);
        self
    }

    #[must_use]
    pub fn with_head(mut self, head: f64) -> Self {
        self.head = Some(head);
        self
    }

    #[must_use]
    pub fn with_max_power(mut self, max_power: f64) -> Self {
        self.max_power = Some(max_power);
        self
    }

    #[must_use]
    pub fn with_installation(mut self, installation: impl Into<String>) -> Self {
        self.installation = Some(installation.into());
        self
    }

    #[must_use]
    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = Some(phase.into());
        self
    }

    #[must_use]
    pub fn with_application(mut self, application: impl Into<String>) -> Self {
        self.application = Some(application.into());
        self
    }

    #[must_use]
    pub fn with_preferred_material(mut self, material: impl Into<String>) -> Self {
        self.preferred_material = Some(material.into());
        self
    }

    #[must_use]
    pub fn with_solids_handling(mut self, solids: bool) -> Self {
        self.solids_handling = Some(solids);
        self
    }

    /// Merge against defaults, dropping anything out of domain
    pub fn resolve(&self, limits: &QueryLimits) -> ResolvedQuery {
        ResolvedQuery {
            flow: resolve_numeric(NumericField::Flow, self.flow, limits),
            head: resolve_numeric(NumericField::Head, self.head, limits),
            max_power: resolve_numeric(NumericField::MaxPower, self.max_power, limits),
            installation: resolve_categorical(self.installation.as_deref()),
            phase: resolve_categorical(self.phase.as_deref()),
            application: resolve_categorical(self.application.as_deref()),
            preferred_material: resolve_categorical(self.preferred_material.as_deref()),
            solids_handling: self.solids_handling.unwrap_or(false),
        }
    }
}

fn resolve_numeric(field: NumericField, value: Option<f64>, limits: &QueryLimits) -> Option<f64> {
    let value = value?;
    match field.check(value, limits) {
        Ok(()) => Some(value),
        Err(err) => {
            warn!("Ignoring query value: {}", err);
            None
        }
    }
}

fn resolve_categorical<T: FromStr<Err = QueryError>>(value: Option<&str>) -> Option<T> {
    match value?.parse() {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            warn!("Ignoring query value: {}", err);
            None
        }
    }
}

/// Query after defaults and domain checks.
///
/// `None` always means "unspecified": never excludes, always full credit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResolvedQuery {
    pub flow: Option<f64>,
    pub head: Option<f64>,
    pub max_power: Option<f64>,
    pub installation: Option<Installation>,
    pub phase: Option<Phase>,
    pub application: Option<Application>,
    pub preferred_material: Option<Material>,
    pub solids_handling: bool,
}

/// Absolute domain ceilings per numeric field
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QueryLimits {
    pub max_flow: f64,
    pub max_head: f64,
    pub max_power: f64,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            max_flow: 1000.0,
            max_head: 500.0,
            max_power: 1000.0,
        }
    }
}

/// Numeric query fields subject to domain checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Flow,
    Head,
    MaxPower,
}

impl NumericField {
    pub const ALL: [NumericField; 3] =
        [NumericField::Flow, NumericField::Head, NumericField::MaxPower];

    pub fn name(self) -> &'static str {
        match self {
            NumericField::Flow => "flow",
            NumericField::Head => "head",
            NumericField::MaxPower => "max_power",
        }
    }

    pub fn ceiling(self, limits: &QueryLimits) -> f64 {
        match self {
            NumericField::Flow => limits.max_flow,
            NumericField::Head => limits.max_head,
            NumericField::MaxPower => limits.max_power,
        }
    }

    pub fn value(self, query: &Query) -> Option<f64> {
        match self {
            NumericField::Flow => query.flow,
            NumericField::Head => query.head,
            NumericField::MaxPower => query.max_power,
        }
    }

    /// Finite, strictly positive, at most the ceiling
    pub fn check(self, value: f64, limits: &QueryLimits) -> Result<(), QueryError> {
        let field = self.name();
        if !value.is_finite() {
            return Err(QueryError::NotFinite { field, value });
        }
        if value <= 0.0 {
            return Err(QueryError::NotPositive { field, value });
        }
        let ceiling = self.ceiling(limits);
        if value > ceiling {
            return Err(QueryError::AboveCeiling { field, value, ceiling });
        }
        Ok(())
    }
}

/// Categorical query fields checked against their enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoricalField {
    Installation,
    Phase,
    Application,
    PreferredMaterial,
}

impl CategoricalField {
    pub const ALL: [CategoricalField; 4] = [
        CategoricalField::Installation,
        CategoricalField::Phase,
        CategoricalField::Application,
        CategoricalField::PreferredMaterial,
    ];

    pub fn value(self, query: &Query) -> Option<&str> {
        match self {
            CategoricalField::Installation => query.installation.as_deref(),
            CategoricalField::Phase => query.phase.as_deref(),
            CategoricalField::Application => query.application.as_deref(),
            CategoricalField::PreferredMaterial => query.preferred_material.as_deref(),
        }
    }

    pub fn check(self, value: &str) -> Result<(), QueryError> {
        match self {
            CategoricalField::Installation => value.parse::<Installation>().map(drop),
            CategoricalField::Phase => value.parse::<Phase>().map(drop),
            CategoricalField::Application => value.parse::<Application>().map(drop),
            CategoricalField::PreferredMaterial => value.parse::<Material>().map(drop),
        }
    }
}

/// A single invalid query field.
///
/// The `Display` text is meant to be shown to the end user as is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not exceed {ceiling}, got {value}")]
    AboveCeiling {
        field: &'static str,
        value: f64,
        ceiling: f64,
    },

    #[error("unknown {field} '{value}' (expected one of: {expected})")]
    UnknownValue {
        field: &'static str,
        value: String,
        expected: String,
    },
}

impl QueryError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            QueryError::NotFinite { field, .. }
            | QueryError::NotPositive { field, .. }
            | QueryError::AboveCeiling { field, .. }
            | QueryError::UnknownValue { field, .. } => field,
        }
    }
}

impl Serialize for QueryError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_resolves_unspecified() {
        let resolved = Query::new().resolve(&QueryLimits::default());
        assert_eq!(resolved, ResolvedQuery::default());
    }

    #[test]
    fn test_resolve_typed_values() {
        let query = Query::new()
            .with_flow(6.0)
            .with_head(25.0)
            .with_installation("surface")
            .with_phase("Three")
            .with_application("irrigation")
            .with_preferred_material("bronze")
            .with_solids_handling(true);

        let resolved = query.resolve(&QueryLimits::default());
        assert_eq!(resolved.flow, Some(6.0));
        assert_eq!(resolved.head, Some(25.0));
        assert_eq!(resolved.installation, Some(Installation::Surface));
        assert_eq!(resolved.phase, Some(Phase::Three));
        assert_eq!(resolved.application, Some(Application::Irrigation));
        assert_eq!(resolved.preferred_material, Some(Material::Bronze));
        assert!(resolved.solids_handling);
    }

    #[test]
    fn test_invalid_values_become_unspecified() {
        let query = Query::new()
            .with_flow(f64::NAN)
            .with_head(-3.0)
            .with_max_power(1e9)
            .with_phase("diesel");

        let resolved = query.resolve(&QueryLimits::default());
        assert_eq!(resolved.flow, None);
        assert_eq!(resolved.head, None);
        assert_eq!(resolved.max_power, None);
        assert_eq!(resolved.phase, None);
    }

    #[test]
    fn test_numeric_check_boundaries() {
        let limits = QueryLimits::default();
        assert!(NumericField::Flow.check(limits.max_flow, &limits).is_ok());
        assert!(matches!(
            NumericField::Flow.check(limits.max_flow + 0.1, &limits),
            Err(QueryError::AboveCeiling { field: "flow", .. })
        ));
        assert!(matches!(
            NumericField::Head.check(0.0, &limits),
            Err(QueryError::NotPositive { field: "head", .. })
        ));
        assert!(matches!(
            NumericField::MaxPower.check(f64::INFINITY, &limits),
            Err(QueryError::NotFinite { field: "max_power", .. })
        ));
    }

    #[test]
    fn test_missing_fields_deserialize_as_unspecified() {
        let query: Query = serde_json::from_str(r#"{"flow": 5.5}"#).unwrap();
        assert_eq!(query.flow, Some(5.5));
        assert_eq!(query.head, None);
        assert_eq!(query.phase, None);

        let explicit: Query = serde_json::from_str(r#"{"flow": 5.5, "head": null}"#).unwrap();
        assert_eq!(query, explicit);
    }

    #[test]
    fn test_query_error_serializes_as_message() {
        let err = QueryError::NotPositive { field: "flow", value: -1.0 };
        assert_eq!(err.field(), "flow");
        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            "\"flow must be greater than zero, got -1\""
        );
    }
}
