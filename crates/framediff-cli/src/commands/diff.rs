//! Model diff command

use std::path::PathBuf;

use clap::Args;
use framediff_core::diff::render_human_summary;
use framediff_core::logging_facility::{init, Profile};
use framediff_core_types::OwnerId;
use framediff_store::{export_combined, launch_viewer, load_model, merge_sections, ExportOptions};

/// Default owner identity recorded on exported combined models
const DEFAULT_OWNER: &str = "9d324ec5-1113-4f57-be37-17ac6f37a3e2";

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Path to the original model snapshot
    #[arg(long)]
    pub original: PathBuf,

    /// Path to the revised model snapshot
    #[arg(long)]
    pub revised: PathBuf,

    /// Destination path for the combined, classified model
    #[arg(long, default_value = "changes.framediff.json")]
    pub out: PathBuf,

    /// Owner identity recorded on the exported model
    #[arg(long, default_value = DEFAULT_OWNER)]
    pub owner: String,

    /// Optional viewer executable to open on the exported model
    #[arg(long)]
    pub viewer: Option<PathBuf>,

    /// Emit JSON logs instead of human-readable output
    #[arg(long)]
    pub json_logs: bool,
}

pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    init(if args.json_logs {
        Profile::Production
    } else {
        Profile::Development
    });

    let owner = OwnerId::parse_str(&args.owner)?;

    let original = load_model(&args.original)?;
    let revised = load_model(&args.revised)?;

    let combined = framediff_core::diff(&original.snapshot, &revised.snapshot)?;
    print!("{}", render_human_summary(&combined));

    let sections = merge_sections(&revised.sections, &original.sections);
    let options = ExportOptions {
        owner,
        name: revised.name.clone(),
    };
    let receipt = export_combined(&combined, &sections, &options, &args.out)?;
    println!(
        "Wrote {} ({} elements, digest {})",
        receipt.path.display(),
        receipt.element_count,
        &receipt.model_digest[..12]
    );

    // A viewer that fails to start must not fail the diff already written
    if let Some(viewer) = &args.viewer {
        if let Err(e) = launch_viewer(viewer, &args.out) {
            eprintln!("Warning: could not launch viewer: {}", e);
        }
    }

    Ok(())
}
