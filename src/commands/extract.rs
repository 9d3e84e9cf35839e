use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::ExtractArgs;
use crate::enrich::{CodeMap, enrich};
use crate::extract::load_shape;
use crate::model::Group;
use crate::source::load_source;
use crate::util::write_json_pretty;

pub fn run(args: ExtractArgs) -> Result<()> {
    let shape = load_shape(args.shape_path.as_deref())?;
    let source = load_source(&args.source)?;
    let mut groups = super::extract_groups(&source, &shape)?;

    if args.enrich {
        let codes = CodeMap::load(args.code_map.as_deref())?;
        let stats = enrich(&mut groups, &codes);
        info!(
            enriched = stats.enriched,
            missing = stats.missing,
            "enriched emoji groups"
        );
    }

    match &args.output {
        Some(path) => {
            write_json_pretty(path, &groups)?;
            info!(path = %path.display(), "wrote extracted groups");
        }
        None => {
            let stdout = io::stdout();
            write_groups(&mut stdout.lock(), &groups)?;
        }
    }

    Ok(())
}

fn write_groups(out: &mut impl Write, groups: &[Group]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, groups).context("failed to serialize groups")?;
    writeln!(out).context("failed to write groups")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::cli::SourceArgs;
    use crate::commands::fixtures::write_cheat_sheet;

    fn args_for(input: std::path::PathBuf, output: std::path::PathBuf, enrich: bool) -> ExtractArgs {
        ExtractArgs {
            source: SourceArgs {
                input: Some(input),
                url: None,
                timeout_secs: 1,
            },
            shape_path: None,
            output: Some(output),
            enrich,
            code_map: None,
        }
    }

    #[test]
    fn run_writes_groups_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_cheat_sheet(dir.path());
        let output = dir.path().join("out").join("groups.json");

        run(args_for(input, output.clone(), false)).unwrap();

        let groups: Vec<Group> = serde_json::from_slice(&fs::read(&output).unwrap()).unwrap();
        let summary: Vec<(&str, Vec<&str>)> = groups
            .iter()
            .map(|group| {
                (
                    group.name.as_str(),
                    group.records.iter().map(|r| r.name.as_str()).collect(),
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                ("People", vec!["joy", "smile"]),
                ("Nature", vec!["cat", "dog", "no_such_emoji"]),
            ]
        );
        assert!(groups.iter().flat_map(|g| &g.records).all(|r| r.code.is_none()));
    }

    #[test]
    fn run_with_enrich_attaches_codes() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_cheat_sheet(dir.path());
        let output = dir.path().join("groups.json");

        run(args_for(input, output.clone(), true)).unwrap();

        let groups: Vec<Group> = serde_json::from_slice(&fs::read(&output).unwrap()).unwrap();
        assert_eq!(groups[0].records[1].code.as_deref(), Some("\u{1f604}"));
        assert_eq!(groups[1].records[2].code, None);
    }

    #[test]
    fn run_fails_on_structural_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("page.html");
        fs::write(&input, "<div id=\"content\"><ul class=\"emojis\"></ul></div>").unwrap();
        let output = dir.path().join("groups.json");

        let err = run(args_for(input, output.clone(), false)).unwrap_err();

        assert!(err.to_string().starts_with("failed to extract emoji groups from"));
        assert!(err.chain().any(|cause| cause.to_string().contains("without id attribute")));
        assert!(!output.exists());
    }

    #[test]
    fn write_groups_ends_with_newline() {
        let mut buf = Vec::new();
        write_groups(&mut buf, &[]).unwrap();
        assert_eq!(buf, b"[]\n");
    }
}
