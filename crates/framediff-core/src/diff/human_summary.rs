//! Human-readable summary renderer for combined diff outputs.

use crate::diff::model::{Classification, CombinedModel};

/// Render a human-readable Markdown/text summary of a [`CombinedModel`].
///
/// The summary is intended for review workflows and terminal display. It is
/// informational only and does not affect the structured output.
pub fn render_human_summary(combined: &CombinedModel) -> String {
    let counts = combined.counts();
    let mut out = String::new();

    out.push_str("## Model Diff\n\n");
    out.push_str(&format!(
        "| Added | Deleted | Changed | Unchanged | Total |\n\
         |---|---|---|---|---|\n\
         | {} | {} | {} | {} | {} |\n\n",
        counts.added,
        counts.deleted,
        counts.changed,
        counts.unchanged,
        counts.total(),
    ));

    if counts.added == 0 && counts.deleted == 0 && counts.changed == 0 {
        out.push_str("_No structural changes detected._\n");
        return out;
    }

    for classification in [
        Classification::Added,
        Classification::Deleted,
        Classification::Changed,
    ] {
        let ids: Vec<String> = combined
            .iter()
            .filter(|record| record.classification == classification)
            .map(|record| display_name(record))
            .collect();
        if !ids.is_empty() {
            out.push_str(&format!(
                "- **{}** ({}): {}\n",
                classification.label(),
                ids.len(),
                ids.join(", ")
            ));
        }
    }

    out
}

/// Prefer the element's label; fall back to a shortened id.
fn display_name(record: &crate::diff::model::ClassifiedElement) -> String {
    match &record.element.name {
        Some(name) => name.clone(),
        None => short(&record.element.id.to_string()),
    }
}

/// Shorten an id to its first 8 characters for display.
fn short(id: &str) -> String {
    id.chars().take(8).collect()
}
