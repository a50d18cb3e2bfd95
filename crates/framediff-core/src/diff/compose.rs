//! Output composition: merge the classified groups into one combined model.

use crate::diff::model::{ChangeSet, Classification, ClassifiedElement, CombinedModel};

/// Build the combined output from a classified change set
///
/// Every element of the revised snapshot appears with its classification
/// (Added / Changed / Unchanged); every Deleted element is reintroduced from
/// the original snapshot so the full before/after picture is visible. Each
/// distinct identity appears exactly once and the result is sorted by
/// element id.
///
/// Records are fresh clones: composing never mutates elements of either
/// source snapshot, so the same snapshots can safely participate in further
/// diffs.
pub fn compose(changes: &ChangeSet<'_>) -> CombinedModel {
    let mut elements: Vec<ClassifiedElement> = Vec::with_capacity(changes.total());

    let groups = [
        (&changes.added, Classification::Added),
        (&changes.deleted, Classification::Deleted),
        (&changes.changed, Classification::Changed),
        (&changes.unchanged, Classification::Unchanged),
    ];
    for (group, classification) in groups {
        for element in group {
            elements.push(ClassifiedElement {
                classification,
                element: (*element).clone(),
            });
        }
    }

    elements.sort_by_key(|record| record.element.id);

    CombinedModel { elements }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Element;
    use framediff_core_types::{ElementId, Point3, SectionId};
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
    fn test_compose_merges_and_sorts() {
        let added = element(3);
        let deleted = element(1);
        let unchanged = element(2);
        let changes = ChangeSet {
            added: vec![&added],
            deleted: vec![&deleted],
            changed: vec![],
            unchanged: vec![&unchanged],
        };

        let combined = compose(&changes);
        assert_eq!(combined.len(), 3);

        let ids: Vec<u128> = combined
            .iter()
            .map(|r| r.element.id.as_uuid().as_u128())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);

        assert_eq!(
            combined.get(ElementId::from_uuid(Uuid::from_u128(1))).unwrap().classification,
            Classification::Deleted
        );
        assert_eq!(
            combined.get(ElementId::from_uuid(Uuid::from_u128(3))).unwrap().classification,
            Classification::Added
        );
    }

    #[test]
    fn test_compose_clones_rather_than_borrows() {
        let source = element(7);
        let changes = ChangeSet {
            added: vec![&source],
            deleted: vec![],
            changed: vec![],
            unchanged: vec![],
        };

        let combined = compose(&changes);
        assert!(!std::ptr::eq(&combined.elements[0].element, &source));
        assert_eq!(combined.elements[0].element, source);
    }

    #[test]
    fn test_compose_empty() {
        let combined = compose(&ChangeSet::default());
        assert!(combined.is_empty());
        assert_eq!(combined.counts().total(), 0);
    }
}
