//! Scoring configuration
//!
//! Loaded once at start-up and passed by reference into every ranking call.
//! Weights are additive points, not fractions: the default table sums to 100
//! for the base criteria, with the material preference as a bonus on top.

use crate::error::{Error, Result};
use crate::query::QueryLimits;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Criterion names understood by the weight table
pub mod criteria {
    pub const FLOW: &str = "flow";
    pub const HEAD: &str = "head";
    pub const INSTALLATION: &str = "installation";
    pub const PHASE: &str = "phase";
    pub const APPLICATION: &str = "application";
    pub const EFFICIENCY: &str = "efficiency";
    pub const MATERIAL: &str = "material";

    pub const ALL: [&str; 7] = [FLOW, HEAD, INSTALLATION, PHASE, APPLICATION, EFFICIENCY, MATERIAL];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoringConfig {
    /// Fractional widening of range bounds for admission
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Results scoring below this are dropped
    #[serde(default = "default_min_score")]
    pub min_score: f64,

    /// Points per criterion, keyed by criterion name
    #[serde(default = "default_weights")]
    pub weights: HashMap<String, f64>,

    #[serde(default)]
    pub limits: QueryLimits,
}

fn default_tolerance() -> f64 {
    0.15
}

fn default_min_score() -> f64 {
    50.0
}

fn default_weights() -> HashMap<String, f64> {
    HashMap::from([
        (criteria::FLOW.to_string(), 30.0),
        (criteria::HEAD.to_string(), 30.0),
        (criteria::INSTALLATION.to_string(), 10.0),
        (criteria::PHASE.to_string(), 10.0),
        (criteria::APPLICATION.to_string(), 5.0),
        (criteria::EFFICIENCY.to_string(), 15.0),
        (criteria::MATERIAL.to_string(), 5.0),
    ])
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            min_score: default_min_score(),
            weights: default_weights(),
            limits: QueryLimits::default(),
        }
    }
}

impl ScoringConfig {
    /// Check tolerance, cutoff, weights and limits
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || !(0.0..1.0).contains(&self.tolerance) {
            return Err(Error::InvalidConfig(format!(
                "tolerance must be in [0, 1), got {}",
                self.tolerance
            )));
        }

        if !self.min_score.is_finite() || self.min_score < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "min_score must be a non-negative number, got {}",
                self.min_score
            )));
        }

        for (name, weight) in &self.weights {
            if !criteria::ALL.contains(&name.as_str()) {
                return Err(Error::UnknownCriterion(name.clone()));
            }
            if !weight.is_finite() || *weight < 0.0 {
                return Err(Error::InvalidWeight(name.clone()));
            }
        }

        let limits = [
            ("max_flow", self.limits.max_flow),
            ("max_head", self.limits.max_head),
            ("max_power", self.limits.max_power),
        ];
        for (name, ceiling) in limits {
            if !ceiling.is_finite() || ceiling <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "limit {} must be a positive number, got {}",
                    name, ceiling
                )));
            }
        }

        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Weight of a criterion; 0 when the table does not mention it
    pub fn weight(&self, criterion: &str) -> f64 {
        self.weights.get(criterion).copied().unwrap_or(0.0)
    }

    /// Create a new config with weight overrides.
    ///
    /// Unknown criteria are ignored and negative weights clamp to zero.
    /// Weights are not re-normalized.
    #[must_use]
    pub fn with_weights(&self, overrides: &HashMap<String, f64>) -> Self {
        let mut modified = self.clone();

        for (name, weight) in overrides {
            if criteria::ALL.contains(&name.as_str()) && weight.is_finite() {
                modified.weights.insert(name.clone(), weight.max(0.0));
            }
        }

        modified
    }

    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }
}
