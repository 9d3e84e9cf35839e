use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Tags, ids and class tokens that identify each level of the cheat sheet markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Shape {
    pub container_tag: String,
    pub container_id: String,
    pub list_tag: String,
    pub list_class: String,
    pub list_id_attr: String,
    pub heading_tag: String,
    pub item_tag: String,
    pub wrapper_tag: String,
    pub payload_tag: String,
    pub payload_class: String,
}

impl Default for Shape {
    fn default() -> Self {
        Self {
            container_tag: "div".to_string(),
            container_id: "content".to_string(),
            list_tag: "ul".to_string(),
            list_class: "emojis".to_string(),
            list_id_attr: "id".to_string(),
            heading_tag: "h2".to_string(),
            item_tag: "li".to_string(),
            wrapper_tag: "div".to_string(),
            payload_tag: "span".to_string(),
            payload_class: "name".to_string(),
        }
    }
}

/// Loads shape overrides from a JSON file; absent fields keep their defaults.
pub fn load_shape(path: Option<&Path>) -> Result<Shape> {
    let Some(path) = path else {
        return Ok(Shape::default());
    };

    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
