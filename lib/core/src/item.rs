use crate::attributes::{Application, Installation, Material, Phase};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Closed numeric interval declared by a catalog item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    #[inline]
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The optimal operating point
    #[inline]
    pub fn midpoint(&self) -> f64 {
        self.min + (self.max - self.min) / 2.0
    }

    #[inline]
    pub fn half_width(&self) -> f64 {
        (self.max - self.min) / 2.0
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Both bounds finite and positive, `min <= max`
    pub fn is_well_formed(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min > 0.0 && self.min <= self.max
    }
}

/// One selectable unit of the catalog.
///
/// Items are immutable once loaded; the engine only ever borrows them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    /// Stable unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Flow range in m³/h
    pub flow: Range,
    /// Head range in metres
    pub head: Range,
    /// Power draw in kW; `min` is the minimum supply the unit requires
    pub power: Range,
    pub installation: Installation,
    pub phase: Phase,
    pub material: Material,
    /// Applications the unit is rated for
    #[serde(default)]
    pub applications: Vec<Application>,
    /// Largest solid passage in millimetres, 0 when solids are not handled
    #[serde(default)]
    pub max_solids_mm: f64,
    /// Efficiency rating in [0, 100]
    pub efficiency: f64,
}

impl CatalogItem {
    /// Check the structural invariants of the item
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::EmptyId);
        }

        for (field, range) in [("flow", &self.flow), ("head", &self.head), ("power", &self.power)] {
            if !range.is_well_formed() {
                return Err(Error::InvalidRange {
                    id: self.id.clone(),
                    field,
                    min: range.min,
                    max: range.max,
                });
            }
        }

        if !(0.0..=100.0).contains(&self.efficiency) {
            return Err(Error::InvalidEfficiency {
                id: self.id.clone(),
                value: self.efficiency,
            });
        }

        if !self.max_solids_mm.is_finite() || self.max_solids_mm < 0.0 {
            return Err(Error::InvalidSolids {
                id: self.id.clone(),
                value: self.max_solids_mm,
            });
        }

        Ok(())
    }

    #[inline]
    pub fn supports_solids(&self) -> bool {
        self.max_solids_mm > 0.0
    }

    #[inline]
    pub fn supports(&self, application: Application) -> bool {
        self.applications.contains(&application)
    }

    /// Number of distinct applications the item is rated for
    pub fn versatility(&self) -> usize {
        let mut seen: Vec<Application> = Vec::with_capacity(self.applications.len());
        for app in &self.applications {
            if !seen.contains(app) {
                seen.push(*app);
            }
        }
        seen.len()
    }
}
