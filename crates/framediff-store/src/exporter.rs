//! Combined model export.
//!
//! Serializes a classified [`CombinedModel`] back into the model file
//! format, with one display layer per classification category so an
//! external viewer shows the full before/after picture at a glance.

#![allow(clippy::result_large_err)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::Utc;

use framediff_core::diff::{Classification, CombinedModel};
use framediff_core_types::{OwnerId, SectionId};

use crate::atomic::atomic_write;
use crate::digest::model_digest;
use crate::errors::{serialization_error, Result};
use crate::format::{ElementRecord, LayerRecord, ModelFile, SectionRecord, SCHEMA_VERSION};

/// Export configuration
///
/// The owner identity is explicit configuration: it is recorded on the
/// written file and never read from process-global state.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Identity recorded as the creator of the exported objects
    pub owner: OwnerId,
    /// Optional model name for the file envelope
    pub name: Option<String>,
}

/// Result of a successful export
#[derive(Debug, Clone)]
pub struct ExportReceipt {
    /// Path the combined model was written to
    pub path: PathBuf,
    /// Hex-encoded SHA-256 digest over the element records
    pub model_digest: String,
    /// Number of element records written
    pub element_count: usize,
}

/// Merge the section tables of the revised and original models
///
/// The combined output contains elements from both snapshots, so its file
/// must carry the union of both section tables. On an id collision the
/// revised definition wins. The result is ordered by section id.
pub fn merge_sections(
    revised: &[SectionRecord],
    original: &[SectionRecord],
) -> Vec<SectionRecord> {
    let mut merged: BTreeMap<SectionId, SectionRecord> = BTreeMap::new();
    for section in original.iter().chain(revised.iter()) {
        merged.insert(section.id, section.clone());
    }
    merged.into_values().collect()
}

/// Write a combined (classified) model to `path`
///
/// Each element record carries its classification and is assigned to the
/// display layer named after it; all four layers are always written, even
/// when empty, so viewers present a stable legend. The write is atomic
/// (temp file + rename).
///
/// # Errors
///
/// - `Serialization` — the combined model failed to serialize
/// - `Io` — the temp file or rename failed
pub fn export_combined(
    combined: &CombinedModel,
    sections: &[SectionRecord],
    options: &ExportOptions,
    path: &Path,
) -> Result<ExportReceipt> {
    let layers: Vec<LayerRecord> = Classification::ALL
        .into_iter()
        .map(LayerRecord::for_classification)
        .collect();

    let elements: Vec<ElementRecord> = combined
        .iter()
        .map(|record| {
            let mut out = ElementRecord::from_element(&record.element);
            out.classification = Some(record.classification);
            out.layer = Some(record.classification.label().to_string());
            out
        })
        .collect();

    let digest = model_digest(&elements)?;

    let file = ModelFile {
        schema_version: SCHEMA_VERSION,
        name: options.name.clone(),
        created_at: Utc::now(),
        owner: Some(options.owner),
        sections: sections.to_vec(),
        layers,
        elements,
        model_digest: Some(digest.clone()),
    };

    let json = serde_json::to_string_pretty(&file)
        .map_err(|e| serialization_error("export_combined", e))?;
    atomic_write(path, json.as_bytes())?;

    tracing::debug!(
        path = %path.display(),
        digest = %digest,
        elements = file.elements.len(),
        "exported combined model"
    );

    Ok(ExportReceipt {
        path: path.to_path_buf(),
        model_digest: digest,
        element_count: file.elements.len(),
    })
}
