//! # setlist-core
//!
//! Core types, defaults, and numeric primitives for the setlist project
//! similarity and recommendation engines.
//!
//! This crate provides the plain data bundles exchanged with the host
//! application (project features in, recommendations out), the shared error
//! type, and the small vector-math seam used by the scorers.
//!
//! ## Logging
//!
//! All crates log through `tracing` with the structured fields `subsystem`
//! (`"similarity"`, `"recommend"`), `component`, and `op`, plus
//! `project_id`, `candidate_count`, `result_count`, and `pool_size` where
//! they apply.
//!
//! | Level | Usage |
//! |-------|-------|
//! | WARN  | Recoverable issue, neutral fallback applied |
//! | INFO  | Lifecycle events (pool rebuilds, weight changes) |
//! | DEBUG | Decision points, intermediate values, config choices |
//! | TRACE | Per-candidate iteration, per-rule matches |

pub mod counter;
pub mod defaults;
pub mod envvar;
pub mod error;
pub mod models;
pub mod vector;

// Re-export commonly used types at crate root
pub use counter::OrderedCounter;
pub use envvar::parse_f64_env;
pub use error::{Error, Result};
pub use models::*;
pub use vector::{cosine_from_norms, cosine_similarity, StandardMath, VectorMath};
