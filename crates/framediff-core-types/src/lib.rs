//! Core types shared across FrameDiff crates
//!
//! This crate provides the foundational types used by the diff kernel and
//! the store layer:
//!
//! - **Identity types**: ElementId, SectionId, OwnerId
//! - **Geometry**: Point3 (exact-equality 3D coordinates)

pub mod geometry;
pub mod ids;

pub use geometry::Point3;
pub use ids::{ElementId, OwnerId, SectionId};
