//! External viewer process launcher.
//!
//! Opens an exported combined model in an external viewing application.
//! A launch failure is surfaced as `ExternalService`, but by contract it is
//! non-fatal to the diff result already written; callers decide whether to
//! warn or abort.

#![allow(clippy::result_large_err)]

use std::path::Path;
use std::process::{Child, Command};

use framediff_core::errors::{FdError, FdErrorKind};

use crate::errors::Result;

/// Spawn the viewer executable with the model file as its argument
///
/// The child process is detached from this program's lifecycle; the returned
/// handle can be dropped without waiting.
///
/// # Errors
///
/// `ExternalService` — the viewer executable could not be started
pub fn launch_viewer(viewer: &Path, model: &Path) -> Result<Child> {
    let child = Command::new(viewer).arg(model).spawn().map_err(|e| {
        FdError::new(FdErrorKind::ExternalService)
            .with_op("launch_viewer")
            .with_message(format!(
                "failed to start viewer {}: {}",
                viewer.display(),
                e
            ))
    })?;

    tracing::info!(
        viewer = %viewer.display(),
        model = %model.display(),
        pid = child.id(),
        "launched external viewer"
    );

    Ok(child)
}
