//! FrameDiff Core - Pure structural-model diff kernel
//!
//! This crate provides the data structures and classification logic for
//! comparing two versions of a structural model:
//! - Element and Snapshot models
//! - Identity index construction (identity → element, one per snapshot)
//! - Four-way change classification (Added / Deleted / Changed / Unchanged)
//! - Combined-output composition for downstream visualization
//! - Human-readable diff summaries
//!
//! The whole computation is a single-threaded, synchronous pass over two
//! already-materialized in-memory snapshots: no I/O, no shared mutable
//! state. Loading and persisting model files lives in `framediff-store`.

pub mod diff;
pub mod errors;
pub mod index;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use diff::{diff, Classification, ClassifiedElement, CombinedModel, DiffCounts};
pub use errors::{FdError, FdErrorKind, FrameDiffError, Result};
pub use index::IdentityIndex;
pub use model::{Element, Snapshot};
