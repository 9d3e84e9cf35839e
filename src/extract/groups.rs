use crate::dom::{Element, Node};

use super::{ExtractError, Shape};

/// The element, if `node` is a list of the expected tag carrying the list class token.
pub(super) fn as_list<'a>(node: &'a Node, shape: &Shape) -> Option<&'a Element> {
    node.element_named(&shape.list_tag)
        .filter(|element| element.has_class(&shape.list_class))
}

/// Reads the identifying attribute of a matched list. `element_ordinal` is the 1-based
/// position of the list among the container's element children (text nodes not counted)
/// and only feeds the error message.
pub(super) fn list_id<'a>(
    list: &'a Element,
    element_ordinal: usize,
    shape: &Shape,
) -> Result<&'a str, ExtractError> {
    list.attr(&shape.list_id_attr)
        .ok_or_else(|| ExtractError::MissingAttribute {
            element: format!("{} (element {} of container)", list.describe(), element_ordinal),
            attribute: shape.list_id_attr.clone(),
        })
}
