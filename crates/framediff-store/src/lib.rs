//! FrameDiff Store - model file persistence and external process boundary
//!
//! This crate is the glue between the pure diff kernel and the outside
//! world:
//! - Versioned JSON model file format (snapshots and combined outputs)
//! - Loader with staged validation (any load failure is fatal per snapshot)
//! - Combined model exporter with per-classification display layers,
//!   content digest and atomic writes
//! - External viewer process launcher

pub mod atomic;
pub mod digest;
pub mod errors;
pub mod exporter;
pub mod format;
pub mod loader;
pub mod viewer;

// Re-export commonly used types
pub use exporter::{export_combined, merge_sections, ExportOptions, ExportReceipt};
pub use format::{Color, ElementRecord, LayerRecord, ModelFile, SectionRecord, SCHEMA_VERSION};
pub use loader::{load_combined, load_model, parse_model_bytes, LoadedModel};
pub use viewer::launch_viewer;
