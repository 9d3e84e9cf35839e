use crate::dom::Node;

use super::{ExtractError, Shape};

/// Display name for the list at `siblings[position]`: the first text child of the nearest
/// preceding heading, trimmed of surrounding whitespace (the raw node text is not kept).
/// Headings further back are never consulted.
pub(super) fn resolve_category(
    siblings: &[Node],
    position: usize,
    list_id: &str,
    shape: &Shape,
) -> Result<String, ExtractError> {
    let missing = || ExtractError::MissingCategory {
        list_id: list_id.to_string(),
        heading: shape.heading_tag.clone(),
    };

    let heading = siblings[..position]
        .iter()
        .rev()
        .find_map(|node| node.element_named(&shape.heading_tag))
        .ok_or_else(missing)?;

    heading
        .first_child_text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(ToOwned::to_owned)
        .ok_or_else(missing)
}
