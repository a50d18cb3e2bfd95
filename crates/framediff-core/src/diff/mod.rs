//! Snapshot diff engine.
//!
//! Compares two versions of a structural model and produces a combined
//! output in which every element carries its change classification.
//!
//! ## Entry point
//!
//! ```ignore
//! use framediff_core::diff::diff;
//!
//! let combined = diff(&original, &revised)?;
//! let summary = framediff_core::diff::render_human_summary(&combined);
//! ```
//!
//! ## Guarantees
//!
//! - **Partition**: every identity present in either snapshot appears in the
//!   combined output exactly once, in exactly one of the four categories.
//! - **Purity**: the input snapshots are read-only; the combined output is
//!   built from fresh records and carries its own classification attribute.
//! - **Determinism**: identical inputs produce identical output; the
//!   combined output is ordered by element id.
//! - **Exact equality**: endpoint coordinates compare exactly; no tolerance
//!   is applied.

pub mod compose;
pub mod engine;
pub mod human_summary;
pub mod model;

pub use compose::compose;
pub use engine::{classify, diff};
pub use human_summary::render_human_summary;
pub use model::{ChangeSet, Classification, ClassifiedElement, CombinedModel, DiffCounts};
