//! Identity index: a read-only identity → element view over one snapshot.
//!
//! Built once per snapshot before classification. The index borrows the
//! snapshot's elements; it is a view, not a copy.

use std::collections::BTreeMap;

use framediff_core_types::ElementId;

use crate::errors::FrameDiffError;
use crate::model::{Element, Snapshot};

/// A mapping from persistent element identity to element, for one snapshot
///
/// Iteration order is ascending by element id, which makes every downstream
/// pass deterministic.
#[derive(Debug)]
pub struct IdentityIndex<'a> {
    map: BTreeMap<ElementId, &'a Element>,
}

impl<'a> IdentityIndex<'a> {
    /// Build the index from a snapshot
    ///
    /// # Errors
    ///
    /// `DuplicateIdentity` — two elements in the snapshot share the same id.
    /// Duplicate identity within one snapshot signals corrupted or
    /// non-canonical input data and is rejected outright; there is no
    /// last-write-wins fallback.
    pub fn build(snapshot: &'a Snapshot) -> Result<Self, FrameDiffError> {
        let mut map: BTreeMap<ElementId, &'a Element> = BTreeMap::new();
        for element in snapshot.iter() {
            if map.insert(element.id, element).is_some() {
                return Err(FrameDiffError::DuplicateIdentity {
                    element_id: element.id.to_string(),
                });
            }
        }
        Ok(Self { map })
    }

    /// Look up an element by identity
    pub fn get(&self, id: ElementId) -> Option<&'a Element> {
        self.map.get(&id).copied()
    }

    /// True when the given identity is present in this snapshot
    pub fn contains(&self, id: ElementId) -> bool {
        self.map.contains_key(&id)
    }

    /// Number of distinct identities in the index
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when the index is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over (identity, element) pairs in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &'a Element)> + '_ {
        self.map.iter().map(|(id, element)| (*id, *element))
    }

    /// Iterate over identities in ascending order
    pub fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.map.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use framediff_core_types::{Point3, SectionId};
    use uuid::Uuid;

    fn element(id: u128) -> Element {
        Element::new(
            ElementId::from_uuid(Uuid::from_u128(id)),
            SectionId::from_uuid(Uuid::from_u128(100)),
            Point3::ORIGIN,
            Point3::new(1.0, 0.0, 0.0),
        )
    }

    #[test]
    fn test_build_from_empty_snapshot() {
        let snapshot = Snapshot::new();
        let index = IdentityIndex::build(&snapshot).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_build_and_lookup() {
        let snapshot = Snapshot::from_elements(vec![element(3), element(1), element(2)]);
        let index = IdentityIndex::build(&snapshot).unwrap();

        assert_eq!(index.len(), 3);
        assert!(index.contains(ElementId::from_uuid(Uuid::from_u128(2))));
        assert!(!index.contains(ElementId::from_uuid(Uuid::from_u128(4))));
        assert_eq!(
            index
                .get(ElementId::from_uuid(Uuid::from_u128(1)))
                .unwrap()
                .id,
            ElementId::from_uuid(Uuid::from_u128(1))
        );
    }

    #[test]
    fn test_iteration_is_ordered_by_id() {
        let snapshot = Snapshot::from_elements(vec![element(9), element(4), element(7)]);
        let index = IdentityIndex::build(&snapshot).unwrap();

        let ids: Vec<ElementId> = index.ids().collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_duplicate_identity_is_rejected() {
        let snapshot = Snapshot::from_elements(vec![element(5), element(5)]);
        let err = IdentityIndex::build(&snapshot).unwrap_err();
        assert_eq!(
            err,
            FrameDiffError::DuplicateIdentity {
                element_id: ElementId::from_uuid(Uuid::from_u128(5)).to_string(),
            }
        );
    }

    #[test]
    fn test_index_borrows_rather_than_copies() {
        let snapshot = Snapshot::from_elements(vec![element(1)]);
        let index = IdentityIndex::build(&snapshot).unwrap();
        let borrowed = index.get(ElementId::from_uuid(Uuid::from_u128(1))).unwrap();
        assert!(std::ptr::eq(borrowed, &snapshot.elements()[0]));
    }
}
