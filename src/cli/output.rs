//! Output formatting utilities

use crate::domain::Tag;
use crate::error::Result;
use crate::infrastructure::OutputFormat;

/// Format a tag for display in the requested format
pub fn render_tag(tag: &Tag, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_tag(tag)),
        OutputFormat::Toml => Ok(toml::to_string(tag)?),
    }
}

/// Format a tag as a human-readable listing
pub fn format_tag(tag: &Tag) -> String {
    if tag.is_empty() {
        return "(empty tag)\n".to_string();
    }

    let mut output = String::new();

    if tag.has_keys() {
        output.push_str(&format!("keys: {}\n", tag.keys().join(", ")));
    } else {
        output.push_str("keys: (none)\n");
    }

    if tag.has_options() {
        output.push_str("options:\n");
        for (name, value) in tag.options() {
            output.push_str(&format!("  {} = {}\n", name, value));
        }
    } else {
        output.push_str("options: (none)\n");
    }

    output
}
