//! # selectx Engine
//!
//! Filter and rank catalog items against a partial specification.
//!
//! ## Features
//!
//! - **Hard filters**: ranges with tolerance, categorical matches with wildcards,
//!   capability flags and a power ceiling exclude ineligible items
//! - **Soft scoring**: each weighted criterion is an independent strategy
//! - **Deterministic ranking**: score descending, catalog order on ties
//! - **Explainability**: per-criterion breakdown on every result
//!
//! ## Example
//!
//! ```rust
//! use selectx_core::{Catalog, Query, ScoringConfig};
//! use selectx_engine::{rank, validate};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let config = ScoringConfig::default();
//!
//! let query = Query::new()
//!     .with_flow(6.0)
//!     .with_head(30.0)
//!     .with_installation("surface");
//! assert!(validate(&query).valid);
//!
//! let result = rank(&catalog, &query, &config);
//! for m in &result.matches {
//!     println!("{} scored {}", m.item.name, m.score);
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Query     │────>│  Validate   │     │   Catalog   │
//! │  (partial)  │     │  (errors)   │     │  (items)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!       │                                        │
//!       │              ┌─────────────┐           │
//!       └─────────────>│   Filter    │<──────────┘
//!                      │  (admits)   │
//!                      └─────────────┘
//!                             │
//!                      ┌─────────────┐
//!                      │   Score     │
//!                      │ (criteria)  │
//!                      └─────────────┘
//!                             │
//!                      ┌─────────────┐
//!                      │    Rank     │
//!                      │ (explained) │
//!                      └─────────────┘
//! ```

pub mod criteria;
pub mod explain;
pub mod filter;
pub mod range;
pub mod rank;
pub mod scoring;
pub mod suggest;
pub mod validate;

// Re-export main types for convenience
pub use criteria::{Criterion, Signal, STANDARD_CRITERIA};
pub use explain::{explain, RankStats};
pub use filter::{admits, check, Rejection};
pub use range::{is_in_range, range_match};
pub use rank::{rank, rank_resolved, FilterResult, RankedResult, Ranker};
pub use scoring::{score, score_with, Breakdown, Scorecard};
pub use suggest::{rating, suggest_by_category, top_rated};
pub use validate::{validate, validate_with_limits, ValidationResult};
