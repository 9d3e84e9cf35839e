use anyhow::Result;
use chrono::Utc;
use tracing::info;

use crate::cli::GenerateArgs;
use crate::codegen::{RenderOptions, render_module};
use crate::enrich::{CodeMap, enrich};
use crate::extract::load_shape;
use crate::model::{GenerateCounts, GenerateRunManifest, GroupSummary};
use crate::source::load_source;
use crate::util::{now_utc_string, sha256_bytes, utc_compact_string, write_bytes, write_json_pretty};

pub fn run(args: GenerateArgs) -> Result<()> {
    let started_ts = Utc::now();
    let started_at = now_utc_string();
    let run_id = format!("generate-{}", utc_compact_string(started_ts));

    info!(run_id = %run_id, output = %args.output.display(), "starting generate");

    let shape = load_shape(args.shape_path.as_deref())?;
    let codes = CodeMap::load(args.code_map.as_deref())?;
    let source = load_source(&args.source)?;

    let mut groups = super::extract_groups(&source, &shape)?;
    let stats = enrich(&mut groups, &codes);

    let module = render_module(
        &groups,
        &RenderOptions {
            source: &source.origin,
        },
    )?;
    write_bytes(&args.output, module.as_bytes())?;
    info!(path = %args.output.display(), groups = groups.len(), "wrote generated module");

    let manifest = GenerateRunManifest {
        manifest_version: 1,
        run_id,
        started_at,
        completed_at: now_utc_string(),
        source: source.origin.clone(),
        source_sha256: sha256_bytes(&source.bytes),
        output_path: args.output.display().to_string(),
        counts: GenerateCounts {
            group_count: groups.len(),
            record_count: groups.iter().map(|group| group.records.len()).sum(),
            enriched_count: stats.enriched,
            missing_code_count: stats.missing,
        },
        groups: groups
            .iter()
            .map(|group| GroupSummary {
                name: group.name.clone(),
                record_count: group.records.len(),
            })
            .collect(),
    };

    let manifest_path = args.cache_root.join("manifests").join(format!(
        "generate_run_{}.json",
        utc_compact_string(started_ts)
    ));
    write_json_pretty(&manifest_path, &manifest)?;
    info!(path = %manifest_path.display(), "wrote generate manifest");

    Ok(())
}
