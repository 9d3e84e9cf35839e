use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::model::Group;

/// Lookup from shortcode names to emoji strings.
#[derive(Debug, Clone)]
pub enum CodeMap {
    /// The full GitHub shortcode set shipped with the `emojis` crate.
    Builtin,
    /// A user table keyed by `:name:`.
    Table(HashMap<String, String>),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichStats {
    pub enriched: usize,
    pub missing: usize,
}

impl CodeMap {
    /// Reads a user code map when `path` is given, otherwise the built-in set.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::Builtin);
        };

        let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let codes: HashMap<String, String> = serde_json::from_slice(&raw)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        info!(path = %path.display(), codes = codes.len(), "loaded code map");
        Ok(Self::Table(codes))
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        match self {
            Self::Builtin => emojis::get_by_shortcode(name).map(emojis::Emoji::as_str),
            Self::Table(codes) => codes.get(&format!(":{name}:")).map(String::as_str),
        }
    }
}

/// Attaches a code to every record the map knows. Misses are counted, not fatal.
pub fn enrich(groups: &mut [Group], codes: &CodeMap) -> EnrichStats {
    let mut stats = EnrichStats::default();

    for group in groups.iter_mut() {
        for record in group.records.iter_mut() {
            match codes.lookup(&record.name) {
                Some(code) => {
                    record.code = Some(code.to_string());
                    stats.enriched += 1;
                }
                None => {
                    debug!(group = %group.name, name = %record.name, "no code for emoji");
                    stats.missing += 1;
                }
            }
        }
    }

    if stats.missing > 0 {
        warn!(
            enriched = stats.enriched,
            missing = stats.missing,
            "some emojis have no code"
        );
    }

    stats
}
