//! Model content digest
//!
//! A SHA-256 digest over the canonical element JSON lets downstream tooling
//! detect whether two exported files describe the same classified model,
//! independent of the `created_at` envelope field.

#![allow(clippy::result_large_err)]

use sha2::{Digest as _, Sha256};

use crate::errors::{serialization_error, Result};
use crate::format::ElementRecord;

/// Compute the hex-encoded SHA-256 digest of an element record list
///
/// The input order is significant; combined outputs are sorted by element id
/// before export, which makes the digest deterministic for a given diff.
pub fn model_digest(elements: &[ElementRecord]) -> Result<String> {
    let canonical =
        serde_json::to_string(elements).map_err(|e| serialization_error("model_digest", e))?;
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}
