use crate::dom::{Element, Node};

use super::Shape;

/// Depth-first, pre-order search for the container element.
pub(super) fn find_container<'a>(nodes: &'a [Node], shape: &Shape) -> Option<&'a Element> {
    nodes.iter().filter_map(Node::as_element).find_map(|element| {
        if element.name == shape.container_tag && element.has_attr("id", &shape.container_id) {
            Some(element)
        } else {
            find_container(&element.children, shape)
        }
    })
}
