//! Structural extraction of emoji groups from the cheat sheet markup.
//!
//! Expected nesting, with every tag and token taken from [`Shape`]:
//!
//! ```text
//! div#content
//!   h2                      group name
//!   ul.emojis[id]           one group
//!     li
//!       div                 record wrapper (first element child)
//!         span.name         record name
//! ```
//!
//! Any deviation from that shape is fatal; no partial group list is ever returned.

mod assemble;
mod category;
mod error;
mod groups;
mod locate;
mod records;
mod shape;

use tracing::debug;

use crate::dom::Document;
use crate::model::Group;

pub use error::ExtractError;
pub use shape::{Shape, load_shape};

pub fn extract(document: &Document, shape: &Shape) -> Result<Vec<Group>, ExtractError> {
    let container = locate::find_container(&document.children, shape).ok_or_else(|| {
        ExtractError::ContainerNotFound {
            tag: shape.container_tag.clone(),
            id: shape.container_id.clone(),
        }
    })?;

    let mut result = Vec::new();
    let mut element_ordinal = 0;
    for (position, child) in container.children.iter().enumerate() {
        if child.as_element().is_some() {
            element_ordinal += 1;
        }
        let Some(list) = groups::as_list(child, shape) else {
            continue;
        };

        let list_id = groups::list_id(list, element_ordinal, shape)?;
        let category = category::resolve_category(&container.children, position, list_id, shape)?;
        let records = records::extract_records(list, list_id, shape)?;

        debug!(list_id, group = %category, records = records.len(), "extracted group");
        result.push(assemble::assemble_group(category, records));
    }

    Ok(result)
}
