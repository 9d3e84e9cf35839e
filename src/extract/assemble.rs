use crate::model::{Group, Record};

/// Builds a group with its records stable-sorted by name (byte-wise, case-sensitive).
pub(super) fn assemble_group(name: String, mut records: Vec<Record>) -> Group {
    records.sort_by(|a, b| a.name.cmp(&b.name));
    Group { name, records }
}
