//! # selectx
//!
//! Multi-criteria selection of catalog items against a partial specification.
//!
//! selectx combines hard exclusionary filters with soft weighted scoring and
//! returns a deterministic, explainable ranking. The engine is a pure function
//! of (catalog, query, configuration): it owns no state, performs no I/O and
//! is safe to call from any number of threads at once.
//!
//! ## Quick Start
//!
//! ### From the command line
//!
//! ```bash
//! selectx rank --flow 6 --head 30 --phase single
//! selectx validate --flow -1 --phase four
//! selectx suggest --application irrigation --limit 3
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use selectx::prelude::*;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let config = ScoringConfig::default();
//!
//! let query = Query::new().with_flow(3.6).with_application("water_supply");
//! let result = rank(&catalog, &query, &config);
//!
//! for m in &result.matches {
//!     println!("{} {} {:?}", m.item.id, m.score, explain(m));
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `selectx-core` - Catalog model, query input, scoring configuration
//! - `selectx-engine` - Range matching, filters, scoring, ranking, validation

// Re-export core types
pub use selectx_core::{
    Application, Catalog, CatalogItem, Installation, Material, Phase,
    Query, QueryError, QueryLimits, Range, ResolvedQuery, ScoringConfig,
    Error, Result,
};

// Re-export engine
pub use selectx_engine::{
    admits, explain, range_match, rank, score, suggest_by_category, top_rated, validate,
    validate_with_limits, FilterResult, RankStats, RankedResult, Ranker, Signal, ValidationResult,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Application, Catalog, CatalogItem, Query, ScoringConfig,
        Error, Result,
        admits, explain, range_match, rank, score, suggest_by_category, top_rated, validate,
        FilterResult, RankStats, RankedResult, Ranker, ValidationResult,
    };
}
