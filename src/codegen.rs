//! Renders extracted groups as a standalone Rust module.

use std::collections::HashSet;
use std::fmt::Write;

use anyhow::{Context, Result};
use regex::Regex;

use crate::model::Group;

const GROUPS_CONST: &str = "GROUPS";

#[derive(Debug, Clone)]
pub struct RenderOptions<'a> {
    /// Path or URL the groups were extracted from; echoed in the header comment.
    pub source: &'a str,
}

pub fn render_module(groups: &[Group], options: &RenderOptions<'_>) -> Result<String> {
    let separators =
        Regex::new(r"[^A-Za-z0-9]+").context("failed to compile identifier regex")?;
    let identifiers = const_identifiers(groups, &separators);

    let mut out = String::new();
    writeln!(
        out,
        "// Code generated by emojigen from {}. DO NOT EDIT.",
        options.source.replace(['\r', '\n'], " ")
    )?;
    out.push_str(
        r#"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emoji {
    pub name: &'static str,
    pub code: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiGroup {
    pub name: &'static str,
    pub emojis: &'static [Emoji],
}
"#,
    );

    for (group, ident) in groups.iter().zip(&identifiers) {
        writeln!(out)?;
        writeln!(out, "pub const {ident}: EmojiGroup = EmojiGroup {{")?;
        writeln!(out, "    name: {:?},", group.name)?;
        if group.records.is_empty() {
            writeln!(out, "    emojis: &[],")?;
        } else {
            writeln!(out, "    emojis: &[")?;
            for record in &group.records {
                writeln!(
                    out,
                    "        Emoji {{ name: {:?}, code: {:?} }},",
                    record.name,
                    record.code.as_deref().unwrap_or_default()
                )?;
            }
            writeln!(out, "    ],")?;
        }
        writeln!(out, "}};")?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "pub const {GROUPS_CONST}: &[EmojiGroup] = &[{}];",
        identifiers.join(", ")
    )?;

    Ok(out)
}

/// One unique SCREAMING_SNAKE constant name per group, in group order.
fn const_identifiers(groups: &[Group], separators: &Regex) -> Vec<String> {
    let mut used = HashSet::from([GROUPS_CONST.to_string()]);

    groups
        .iter()
        .map(|group| {
            let base = base_identifier(&group.name, separators);
            let mut candidate = base.clone();
            let mut suffix = 1;
            while !used.insert(candidate.clone()) {
                suffix += 1;
                candidate = format!("{base}_{suffix}");
            }
            candidate
        })
        .collect()
}

fn base_identifier(name: &str, separators: &Regex) -> String {
    let upper = name.to_ascii_uppercase();
    let ident = separators.replace_all(&upper, "_");
    let ident = ident.trim_matches('_');

    if ident.is_empty() {
        "GROUP".to_string()
    } else if ident.starts_with(|c: char| c.is_ascii_digit()) {
        format!("GROUP_{ident}")
    } else {
        ident.to_string()
    }
}
