pub mod extract;
pub mod fetch;
pub mod generate;

use anyhow::{Context, Result};
use tracing::info;

use crate::dom::parse_html;
use crate::extract::Shape;
use crate::model::Group;
use crate::source::SourceDocument;

/// Parses the source markup and runs the structural extraction over it.
fn extract_groups(source: &SourceDocument, shape: &Shape) -> Result<Vec<Group>> {
    let document = parse_html(source.bytes.as_slice())
        .with_context(|| format!("failed to parse {}", source.origin))?;
    let groups = crate::extract::extract(&document, shape)
        .with_context(|| format!("failed to extract emoji groups from {}", source.origin))?;

    info!(
        source = %source.origin,
        groups = groups.len(),
        records = groups.iter().map(|group| group.records.len()).sum::<usize>(),
        "extracted emoji groups"
    );

    Ok(groups)
}
