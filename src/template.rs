use crate::domain::Node;
use crate::errors::{Result, TemplateError};

/// Token the page template marks its data slot with.
pub const DATA_PLACEHOLDER: &str = "{{data}}";

/// Built-in mindmap page. Opaque to this crate beyond the placeholder.
pub const MINDMAP_TEMPLATE: &str = include_str!("../templates/markmap.html");

/// Serializes the tree and substitutes it into `template`. Every occurrence
/// of the placeholder is replaced.
pub fn render(root: &Node, template: &str) -> Result<String> {
    if !template.contains(DATA_PLACEHOLDER) {
        return Err(TemplateError::MissingPlaceholder(DATA_PLACEHOLDER).into());
    }
    let data = serde_json::to_string(root)?;
    Ok(template.replace(DATA_PLACEHOLDER, &data))
}
