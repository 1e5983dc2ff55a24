//! # selectx Core
//!
//! Core data model for the selectx selection engine.
//!
//! This crate provides the immutable inputs every ranking call works on:
//!
//! - [`CatalogItem`] / [`Catalog`] - validated items with numeric ranges and categorical attributes
//! - [`Query`] - a user's partial specification, resolved into a [`ResolvedQuery`]
//! - [`ScoringConfig`] - tolerance, weight table and minimum score
//!
//! ## Example
//!
//! ```rust
//! use selectx_core::{Catalog, Query, ScoringConfig};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let config = ScoringConfig::default();
//!
//! let query = Query::new().with_flow(6.0).with_phase("single");
//! let resolved = query.resolve(&config.limits);
//! assert_eq!(resolved.flow, Some(6.0));
//! assert!(!catalog.is_empty());
//! ```

pub mod attributes;
pub mod catalog;
pub mod config;
pub mod error;
pub mod item;
pub mod query;

pub use attributes::{Application, Attribute, Installation, Material, Phase};
pub use catalog::Catalog;
pub use config::{criteria, ScoringConfig};
pub use error::{Error, Result};
pub use item::{CatalogItem, Range};
pub use query::{CategoricalField, NumericField, Query, QueryError, QueryLimits, ResolvedQuery};
