//! Output formatting utilities

use crate::application::BuildSummary;
use crate::domain::tags::TagDescriptor;

/// Format the canonical tag list for display.
pub fn format_tag_list(tags: &[TagDescriptor], show_slugs: bool) -> String {
    if tags.is_empty() {
        return "No tags found\n".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        if show_slugs {
            output.push_str(&format!("{} ({})\n", tag.title, tag.slug));
        } else {
            output.push_str(&format!("{}\n", tag.title));
        }
    }

    output
}

/// Format a build summary for display.
pub fn format_build_summary(summary: &BuildSummary) -> String {
    let mut output = format!(
        "Indexed {} items across {} tags\nWrote tags.json and tagmap.json to {}\n",
        summary.items,
        summary.tags,
        summary.output_dir.display()
    );
    if summary.assets_copied > 0 {
        output.push_str(&format!("Copied {} asset files\n", summary.assets_copied));
    }
    output
}
