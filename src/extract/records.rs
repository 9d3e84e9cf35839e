use crate::dom::{Element, Node};
use crate::model::Record;

use super::{ExtractError, Shape};

/// One record per list item of `list`, in document order. Non-item children are skipped.
pub(super) fn extract_records(
    list: &Element,
    list_id: &str,
    shape: &Shape,
) -> Result<Vec<Record>, ExtractError> {
    list.children
        .iter()
        .filter_map(|node| node.element_named(&shape.item_tag))
        .enumerate()
        .map(|(index, item)| extract_record(item, index + 1, list_id, shape))
        .collect()
}

/// `item` is the 1-based ordinal of the list item, used for error context.
fn extract_record(
    list_item: &Element,
    item: usize,
    list_id: &str,
    shape: &Shape,
) -> Result<Record, ExtractError> {
    let wrapper = list_item
        .first_element_child()
        .ok_or_else(|| ExtractError::MissingContainer {
            list_id: list_id.to_string(),
            item,
            expected: shape.wrapper_tag.clone(),
        })?;

    if wrapper.name != shape.wrapper_tag {
        return Err(ExtractError::UnexpectedTag {
            list_id: list_id.to_string(),
            item,
            expected: shape.wrapper_tag.clone(),
            found: wrapper.name.clone(),
        });
    }

    // Last matching payload wins.
    let payload = wrapper
        .children
        .iter()
        .filter_map(|node| node.element_named(&shape.payload_tag))
        .filter(|element| element.has_class(&shape.payload_class))
        .last()
        .ok_or_else(|| ExtractError::MissingPayload {
            list_id: list_id.to_string(),
            item,
            tag: shape.payload_tag.clone(),
            class: shape.payload_class.clone(),
        })?;

    Ok(Record::named(payload_text(payload)))
}

/// Trimmed text of the payload's first child. Anything other than a text node yields an
/// empty name; enrichment downstream tolerates it.
fn payload_text(payload: &Element) -> String {
    payload
        .children
        .first()
        .and_then(Node::as_text)
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}
