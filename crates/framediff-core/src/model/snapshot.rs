use serde::{Deserialize, Serialize};

use super::element::Element;

/// Snapshot - one complete version of the structural model
///
/// A flat collection of elements representing the model at one point in
/// time. Two snapshots participate in a diff: the original and the revised
/// version. The collection itself is never mutated by the diff; it is a
/// read-only input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    elements: Vec<Element>,
}

impl Snapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a snapshot from an element collection
    pub fn from_elements(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Add an element to this snapshot
    ///
    /// Identity uniqueness is not checked here; the identity index builder
    /// rejects duplicate identities when the snapshot is consumed.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Number of elements in this snapshot
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when this snapshot has no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// View of the element collection
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Iterate over the elements
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }
}

impl FromIterator<Element> for Snapshot {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}
