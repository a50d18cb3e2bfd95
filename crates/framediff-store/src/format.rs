//! Model file format v1
//!
//! Defines the JSON structure for persisted model snapshots and exported
//! combined (classified) models. Plain snapshots and combined outputs share
//! the same envelope; `classification`, `layer` and the `layers` table are
//! only populated on combined files.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use framediff_core::diff::Classification;
use framediff_core::model::Element;
use framediff_core_types::{ElementId, OwnerId, Point3, SectionId};

/// Schema version written and accepted by this build
pub const SCHEMA_VERSION: u32 = 1;

/// Top-level model file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelFile {
    /// Schema version (must be 1 for this format)
    pub schema_version: u32,

    /// Optional model name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Timestamp of when this file was written
    pub created_at: DateTime<Utc>,

    /// Identity of the application that wrote this file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerId>,

    /// Cross-section definitions referenced by the elements
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<SectionRecord>,

    /// Display layers (combined outputs only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub layers: Vec<LayerRecord>,

    /// The structural elements of this model
    pub elements: Vec<ElementRecord>,

    /// SHA-256 digest over the canonical element JSON (combined outputs only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_digest: Option<String>,
}

/// Cross-section definition in a model file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRecord {
    /// Section identity (stable across saves)
    pub id: SectionId,

    /// Section name, e.g. "HEA300"
    pub name: String,
}

/// Element definition in a model file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    /// Element identity (stable across saves)
    pub id: ElementId,

    /// Optional human-readable label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Identity of the assigned cross-section
    pub section: SectionId,

    /// Start point of the reference line
    pub start: Point3,

    /// End point of the reference line
    pub end: Point3,

    /// Change classification (combined outputs only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,

    /// Name of the display layer this element is assigned to
    /// (combined outputs only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
}

impl ElementRecord {
    /// Build a plain record from a core element
    pub fn from_element(element: &Element) -> Self {
        Self {
            id: element.id,
            name: element.name.clone(),
            section: element.section,
            start: element.start,
            end: element.end,
            classification: None,
            layer: None,
        }
    }

    /// Convert into a core element, dropping any diff annotations
    pub fn into_element(self) -> Element {
        Element {
            id: self.id,
            name: self.name,
            section: self.section,
            start: self.start,
            end: self.end,
        }
    }
}

/// Display layer definition in a combined model file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerRecord {
    /// Layer name (one of the four classification labels)
    pub name: String,

    /// Whether the layer is initially visible in the viewer
    pub visible: bool,

    /// Display color for elements on this layer
    pub color: Color,
}

impl LayerRecord {
    /// The canonical display layer for a classification category
    ///
    /// Colors follow the established review convention: deleted red,
    /// added green, changed yellow, unchanged translucent grey.
    pub fn for_classification(classification: Classification) -> Self {
        let color = match classification {
            Classification::Deleted => Color::new(255, 255, 0, 0),
            Classification::Added => Color::new(255, 0, 255, 0),
            Classification::Changed => Color::new(255, 204, 204, 0),
            Classification::Unchanged => Color::new(100, 100, 100, 100),
        };
        Self {
            name: classification.label().to_string(),
            visible: true,
            color,
        }
    }
}

/// ARGB display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from ARGB components
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }
}
