//! Export → load round-trip tests for combined models.

use framediff_core::diff::diff;
use framediff_core::model::{Element, Snapshot};
use framediff_core_types::{ElementId, OwnerId, Point3, SectionId};
use framediff_store::{
    export_combined, load_combined, load_model, merge_sections, ExportOptions, SectionRecord,
};
use tempfile::TempDir;
use uuid::Uuid;

fn beam(id: u128, section: u128) -> Element {
    Element::new(
        ElementId::from_uuid(Uuid::from_u128(id)),
        SectionId::from_uuid(Uuid::from_u128(section)),
        Point3::ORIGIN,
        Point3::new(6.0, 0.0, 0.0),
    )
}

fn options() -> ExportOptions {
    ExportOptions {
        owner: OwnerId::from_uuid(Uuid::from_u128(0xABCD)),
        name: Some("round-trip".into()),
    }
}

#[test]
fn test_export_then_load_combined_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("changes.json");

    let original = Snapshot::from_elements(vec![beam(1, 10), beam(2, 10)]);
    let revised = Snapshot::from_elements(vec![beam(1, 11), beam(3, 10)]);
    let combined = diff(&original, &revised).unwrap();

    let receipt = export_combined(&combined, &[], &options(), &path).unwrap();
    assert_eq!(receipt.element_count, 3);
    assert_eq!(receipt.model_digest.len(), 64);

    let loaded = load_combined(&path).unwrap();
    assert_eq!(loaded, combined);
}

#[test]
fn test_exported_file_carries_layers_and_owner() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("changes.json");

    let original = Snapshot::from_elements(vec![beam(1, 10)]);
    let revised = Snapshot::from_elements(vec![beam(2, 10)]);
    let combined = diff(&original, &revised).unwrap();

    export_combined(&combined, &[], &options(), &path).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    // All four display layers are always present
    let layers = raw["layers"].as_array().unwrap();
    assert_eq!(layers.len(), 4);
    let names: Vec<&str> = layers.iter().map(|l| l["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Added", "Deleted", "Changed", "Unchanged"]);

    // Owner recorded from explicit configuration
    assert_eq!(
        raw["owner"].as_str().unwrap(),
        OwnerId::from_uuid(Uuid::from_u128(0xABCD)).to_string()
    );

    // Each element is assigned to the layer named after its classification
    for element in raw["elements"].as_array().unwrap() {
        assert_eq!(element["layer"], element["classification"]);
    }
}

#[test]
fn test_digest_ignores_created_at() {
    let temp_dir = TempDir::new().unwrap();
    let first_path = temp_dir.path().join("first.json");
    let second_path = temp_dir.path().join("second.json");

    let original = Snapshot::from_elements(vec![beam(1, 10)]);
    let revised = Snapshot::from_elements(vec![beam(1, 12)]);
    let combined = diff(&original, &revised).unwrap();

    let first = export_combined(&combined, &[], &options(), &first_path).unwrap();
    let second = export_combined(&combined, &[], &options(), &second_path).unwrap();

    // Two exports of the same diff carry the same digest even though the
    // envelope timestamps differ
    assert_eq!(first.model_digest, second.model_digest);
}

#[test]
fn test_combined_file_loads_back_as_plain_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("changes.json");

    let original = Snapshot::from_elements(vec![beam(1, 10)]);
    let revised = Snapshot::from_elements(vec![beam(1, 10), beam(2, 10)]);
    let combined = diff(&original, &revised).unwrap();

    let sections = merge_sections(
        &[SectionRecord {
            id: SectionId::from_uuid(Uuid::from_u128(10)),
            name: "HEA300".into(),
        }],
        &[],
    );
    export_combined(&combined, &sections, &options(), &path).unwrap();

    // A combined output is itself a valid model file; annotations drop away
    let loaded = load_model(&path).unwrap();
    assert_eq!(loaded.snapshot.len(), 2);
    assert_eq!(loaded.sections.len(), 1);
    assert_eq!(loaded.name.as_deref(), Some("round-trip"));
}
