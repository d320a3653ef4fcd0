//! Graphlot domain core.
//!
//! Pure chart-configuration logic with zero internal dependencies: value
//! primitives, per-chart-type default configurations, the override merge,
//! the column classifier, and the path/slug codec. Nothing here performs
//! I/O or holds shared mutable state, so every function is safe to call
//! concurrently from request handlers.

pub mod chart_type;
pub mod color;
pub mod columns;
pub mod config;
pub mod error;
pub mod filter;
pub mod overrides;
pub mod slug;
pub mod types;
pub mod validate;
