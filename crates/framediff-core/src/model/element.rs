use framediff_core_types::{ElementId, Point3, SectionId};
use serde::{Deserialize, Serialize};

/// Element - a load-bearing member of the structural model
///
/// An Element is the unit being diffed: a straight member defined by a
/// reference line between two points, carrying an assigned cross-section.
/// Its `id` is assigned once at creation and preserved across save/load
/// cycles, and is the sole key used to match elements between two versions
/// of a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Persistent, globally unique identifier for this element
    pub id: ElementId,

    /// Optional human-readable label (not part of the change-detection rule)
    pub name: Option<String>,

    /// Identity of the cross-section assigned to this element
    pub section: SectionId,

    /// Start point of the element's reference line
    pub start: Point3,

    /// End point of the element's reference line
    pub end: Point3,
}

impl Element {
    /// Create a new element with the given identity, section and endpoints
    pub fn new(id: ElementId, section: SectionId, start: Point3, end: Point3) -> Self {
        Self {
            id,
            name: None,
            section,
            start,
            end,
        }
    }

    /// Attach a human-readable label
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// True when the compared attributes of two elements are identical
    ///
    /// The comparison covers the section identity and both reference-line
    /// endpoints, nothing else. Endpoint coordinates compare exactly, with
    /// no tolerance. Labels and any other metadata are ignored.
    pub fn same_section_and_geometry(&self, other: &Element) -> bool {
        self.section == other.section && self.start == other.start && self.end == other.end
    }
}
