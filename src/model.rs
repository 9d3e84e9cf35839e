use serde::{Deserialize, Serialize};

/// One named group of records, in the document order of its list element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub records: Vec<Record>,
}

/// A single extracted entry. `code` is only filled in by enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Record {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FetchRunManifest {
    pub manifest_version: u32,
    pub run_id: String,
    pub fetched_at: String,
    pub url: String,
    pub output_path: String,
    pub byte_count: usize,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupSummary {
    pub name: String,
    pub record_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateCounts {
    pub group_count: usize,
    pub record_count: usize,
    pub enriched_count: usize,
    pub missing_code_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateRunManifest {
    pub manifest_version: u32,
    pub run_id: String,
    pub started_at: String,
    pub completed_at: String,
    pub source: String,
    pub source_sha256: String,
    pub output_path: String,
    pub counts: GenerateCounts,
    pub groups: Vec<GroupSummary>,
}
