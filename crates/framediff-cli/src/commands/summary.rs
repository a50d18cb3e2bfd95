//! Combined model summary command

use std::path::PathBuf;

use clap::Args;
use framediff_core::diff::render_human_summary;
use framediff_store::load_combined;

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Path to a previously exported combined model
    #[arg(long)]
    pub model: PathBuf,
}

pub fn execute(args: SummaryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let combined = load_combined(&args.model)?;
    print!("{}", render_human_summary(&combined));

    let counts = combined.counts();
    println!(
        "{} elements: {} added, {} deleted, {} changed, {} unchanged",
        counts.total(),
        counts.added,
        counts.deleted,
        counts.changed,
        counts.unchanged
    );

    Ok(())
}
