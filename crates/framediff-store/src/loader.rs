//! Model file loading.
//!
//! The core entry points are [`load_model`], which reads a plain snapshot,
//! and [`load_combined`], which re-reads a previously exported combined
//! (classified) model. Any load failure is fatal for that snapshot: the
//! diff never runs on a partially loaded model.

#![allow(clippy::result_large_err)]

use std::fs;
use std::path::Path;

use serde_json::Value;

use framediff_core::diff::{ClassifiedElement, CombinedModel};
use framediff_core::model::Snapshot;

use crate::errors::{identity_conflict, invalid_model, io_error, missing_field, Result};
use crate::format::{ModelFile, SectionRecord, SCHEMA_VERSION};

/// A model file converted into core terms
#[derive(Debug, Clone)]
pub struct LoadedModel {
    /// Optional model name from the file envelope
    pub name: Option<String>,
    /// The element snapshot
    pub snapshot: Snapshot,
    /// Section definitions carried alongside the snapshot
    pub sections: Vec<SectionRecord>,
}

/// Parse raw model bytes into a typed [`ModelFile`]
///
/// # Errors
///
/// - `InvalidModel` — bytes are not valid UTF-8, not valid JSON, the root is
///   not an object, or `schema_version` is not the supported integer
/// - `MissingField` — the `elements` key is absent
pub fn parse_model_bytes(bytes: &[u8]) -> Result<ModelFile> {
    // 1. UTF-8 decode
    let text = std::str::from_utf8(bytes).map_err(|e| {
        invalid_model(
            "parse_model_bytes",
            format!("model is not valid UTF-8: {}", e),
        )
    })?;

    // 2. JSON parse to generic Value
    let raw: Value = serde_json::from_str(text).map_err(|e| {
        invalid_model(
            "parse_model_bytes",
            format!("model is not valid JSON: {}", e),
        )
    })?;

    let obj = raw.as_object().ok_or_else(|| {
        invalid_model("parse_model_bytes", "model JSON root must be an object")
    })?;

    // 3. schema_version must be the supported integer
    match obj.get("schema_version") {
        None => return Err(missing_field("parse_model_bytes", "schema_version")),
        Some(sv) => {
            let version = sv.as_u64().ok_or_else(|| {
                invalid_model(
                    "parse_model_bytes",
                    format!("`schema_version` must be an unsigned integer, got: {}", sv),
                )
            })?;
            if version != u64::from(SCHEMA_VERSION) {
                return Err(invalid_model(
                    "parse_model_bytes",
                    format!(
                        "unsupported schema_version {} (this build reads {})",
                        version, SCHEMA_VERSION
                    ),
                ));
            }
        }
    }

    // 4. elements must be present
    if !obj.contains_key("elements") {
        return Err(missing_field("parse_model_bytes", "elements"));
    }

    // 5. Full typed deserialisation
    let file: ModelFile = serde_json::from_value(raw).map_err(|e| {
        invalid_model(
            "parse_model_bytes",
            format!("failed to deserialize model: {}", e),
        )
    })?;

    Ok(file)
}

/// Load a model snapshot from a file
///
/// Diff annotations (`classification`, `layer`) present in the file are
/// dropped: a combined output re-read as a plain model is just a snapshot.
///
/// # Errors
///
/// - `Io` — the file cannot be read
/// - `InvalidModel` / `MissingField` — see [`parse_model_bytes`]
pub fn load_model(path: &Path) -> Result<LoadedModel> {
    let bytes = fs::read(path).map_err(|e| io_error("load_model", e))?;
    let file = parse_model_bytes(&bytes)?;

    let snapshot: Snapshot = file
        .elements
        .into_iter()
        .map(|record| record.into_element())
        .collect();

    tracing::debug!(
        path = %path.display(),
        elements = snapshot.len(),
        sections = file.sections.len(),
        "loaded model snapshot"
    );

    Ok(LoadedModel {
        name: file.name,
        snapshot,
        sections: file.sections,
    })
}

/// Load a previously exported combined (classified) model
///
/// # Errors
///
/// - `Io` / `InvalidModel` — see [`load_model`]
/// - `MissingField` — an element record has no `classification`, meaning the
///   file is a plain snapshot rather than a combined output
/// - `IdentityConflict` — the same element identity appears more than once;
///   a valid combined output carries each distinct identity exactly once
pub fn load_combined(path: &Path) -> Result<CombinedModel> {
    let bytes = fs::read(path).map_err(|e| io_error("load_combined", e))?;
    let file = parse_model_bytes(&bytes)?;

    let mut elements = Vec::with_capacity(file.elements.len());
    for record in file.elements {
        let classification = record.classification.ok_or_else(|| {
            missing_field("load_combined", "classification")
                .with_element_id(record.id.to_string())
        })?;
        elements.push(ClassifiedElement {
            classification,
            element: record.into_element(),
        });
    }
    elements.sort_by_key(|record| record.element.id);

    // Sorted, so a duplicated identity shows up as adjacent records
    for pair in elements.windows(2) {
        if pair[0].element.id == pair[1].element.id {
            return Err(identity_conflict(
                "load_combined",
                pair[0].element.id.to_string(),
            ));
        }
    }

    tracing::debug!(
        path = %path.display(),
        elements = elements.len(),
        "loaded combined model"
    );

    Ok(CombinedModel { elements })
}
