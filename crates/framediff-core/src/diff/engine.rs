//! Change classification engine.
//!
//! The core entry point is [`diff`], which accepts two snapshots and
//! produces a [`CombinedModel`] in which every element carries its
//! classification.

#![allow(clippy::result_large_err)]

use crate::diff::compose::compose;
use crate::diff::model::{ChangeSet, CombinedModel};
use crate::errors::{FdError, FdErrorKind, Result};
use crate::index::IdentityIndex;
use crate::model::Snapshot;

/// Classify every identity present in either index into exactly one of the
/// four change groups
///
/// An identity present only in `revised` is Added; only in `original`,
/// Deleted. An identity present in both is Unchanged iff its section
/// identity and both reference-line endpoints are identical, else Changed.
/// Endpoint coordinates compare exactly; whether rounding introduced by
/// re-serialization should still count as unchanged is deliberately left to
/// the caller, who must pre-quantize coordinates to get tolerance behavior.
///
/// Pure function: neither index nor the underlying snapshots are modified.
pub fn classify<'a>(
    original: &IdentityIndex<'a>,
    revised: &IdentityIndex<'a>,
) -> ChangeSet<'a> {
    let mut changes = ChangeSet::default();

    for (id, revised_element) in revised.iter() {
        match original.get(id) {
            None => changes.added.push(revised_element),
            Some(original_element) => {
                if revised_element.same_section_and_geometry(original_element) {
                    changes.unchanged.push(revised_element);
                } else {
                    changes.changed.push(revised_element);
                }
            }
        }
    }

    for (id, original_element) in original.iter() {
        if !revised.contains(id) {
            changes.deleted.push(original_element);
        }
    }

    changes
}

/// Compute the combined diff of two model snapshots
///
/// Builds an identity index per snapshot, classifies every identity present
/// in either one, and composes the combined output: all revised elements
/// plus the deleted elements recovered from the original snapshot, each
/// carrying its classification. O(n) in the combined element count.
///
/// # Errors
///
/// - `InvalidModel` — an endpoint coordinate is NaN or infinite; such values
///   have no JSON representation and cannot be classified meaningfully
/// - `IdentityConflict` — duplicate element identity within either snapshot
/// - `DeterminismViolation` — the computed output fails its internal
///   round-trip sanity check (should never occur in correct builds)
pub fn diff(original: &Snapshot, revised: &Snapshot) -> Result<CombinedModel> {
    for snapshot in [original, revised] {
        for element in snapshot.iter() {
            if !element.start.is_finite() || !element.end.is_finite() {
                return Err(FdError::new(FdErrorKind::InvalidModel)
                    .with_op("diff")
                    .with_element_id(element.id.to_string())
                    .with_message("element endpoint has a non-finite coordinate"));
            }
        }
    }

    let original_index = IdentityIndex::build(original)?;
    let revised_index = IdentityIndex::build(revised)?;

    let changes = classify(&original_index, &revised_index);
    tracing::debug!(
        added = changes.added.len(),
        deleted = changes.deleted.len(),
        changed = changes.changed.len(),
        unchanged = changes.unchanged.len(),
        "classified snapshot pair"
    );

    let combined = compose(&changes);

    // Determinism guard: round-trip through JSON must produce an equal struct
    let serialized = serde_json::to_string(&combined).map_err(|e| {
        FdError::new(FdErrorKind::DeterminismViolation)
            .with_op("diff")
            .with_message(format!("failed to serialize combined model: {}", e))
    })?;
    let reparsed: CombinedModel = serde_json::from_str(&serialized).map_err(|e| {
        FdError::new(FdErrorKind::DeterminismViolation)
            .with_op("diff")
            .with_message(format!("failed to re-parse combined model: {}", e))
    })?;
    if reparsed != combined {
        return Err(FdError::new(FdErrorKind::DeterminismViolation)
            .with_op("diff")
            .with_message("combined model is not deterministic: round-trip produced different struct"));
    }

    Ok(combined)
}
