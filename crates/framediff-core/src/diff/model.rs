//! Diff output types.
//!
//! All owned types implement `Debug, Clone, Serialize, Deserialize,
//! PartialEq`. The combined output is kept sorted by element id for
//! deterministic serialization.

use serde::{Deserialize, Serialize};

use framediff_core_types::ElementId;

use crate::model::Element;

/// Four-way change classification assigned to every element of the combined
/// output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Present in the revised snapshot only
    Added,
    /// Present in the original snapshot only
    Deleted,
    /// Present in both, with a different section or different endpoints
    Changed,
    /// Present in both with identical section identity and endpoints
    Unchanged,
}

impl Classification {
    /// Human-readable label, also used as the display layer name
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Added => "Added",
            Classification::Deleted => "Deleted",
            Classification::Changed => "Changed",
            Classification::Unchanged => "Unchanged",
        }
    }

    /// All four categories, in presentation order
    pub const ALL: [Classification; 4] = [
        Classification::Added,
        Classification::Deleted,
        Classification::Changed,
        Classification::Unchanged,
    ];
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The four disjoint change groups for one (original, revised) snapshot pair
///
/// Borrows from the input snapshots: `deleted` references elements of the
/// original snapshot, the other three groups reference elements of the
/// revised snapshot. Each group is ordered by element id.
#[derive(Debug, Default)]
pub struct ChangeSet<'a> {
    /// Elements present in revised only
    pub added: Vec<&'a Element>,
    /// Elements present in original only
    pub deleted: Vec<&'a Element>,
    /// Elements present in both with differing section or endpoints
    pub changed: Vec<&'a Element>,
    /// Elements present in both with identical section and endpoints
    pub unchanged: Vec<&'a Element>,
}

impl ChangeSet<'_> {
    /// Total number of classified elements across all four groups
    pub fn total(&self) -> usize {
        self.added.len() + self.deleted.len() + self.changed.len() + self.unchanged.len()
    }
}

/// An owned output record: one element plus its classification
///
/// A fresh value cloned out of the source snapshot, so attaching the
/// classification never mutates shared snapshot state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedElement {
    /// The change category this element falls into
    pub classification: Classification,
    /// The element itself (from revised, or from original when Deleted)
    pub element: Element,
}

/// The combined diff output
///
/// Contains every element of the revised snapshot plus every deleted element
/// recovered from the original snapshot: each distinct identity exactly
/// once, sorted by element id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinedModel {
    /// Classified output records, ascending by element id
    pub elements: Vec<ClassifiedElement>,
}

impl CombinedModel {
    /// Number of output records
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when the combined output is empty (both snapshots were empty)
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the classified records
    pub fn iter(&self) -> std::slice::Iter<'_, ClassifiedElement> {
        self.elements.iter()
    }

    /// Look up a record by element identity
    pub fn get(&self, id: ElementId) -> Option<&ClassifiedElement> {
        self.elements
            .binary_search_by_key(&id, |record| record.element.id)
            .ok()
            .map(|i| &self.elements[i])
    }

    /// Per-category counts
    pub fn counts(&self) -> DiffCounts {
        let mut counts = DiffCounts::default();
        for record in &self.elements {
            match record.classification {
                Classification::Added => counts.added += 1,
                Classification::Deleted => counts.deleted += 1,
                Classification::Changed => counts.changed += 1,
                Classification::Unchanged => counts.unchanged += 1,
            }
        }
        counts
    }
}

/// Per-category element counts for a combined output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffCounts {
    pub added: usize,
    pub deleted: usize,
    pub changed: usize,
    pub unchanged: usize,
}

impl DiffCounts {
    /// Total element count across all categories
    pub fn total(&self) -> usize {
        self.added + self.deleted + self.changed + self.unchanged
    }
}
