use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use tracing::info;

use crate::cli::FetchArgs;
use crate::model::FetchRunManifest;
use crate::source::fetch_url;
use crate::util::{now_utc_string, sha256_bytes, utc_compact_string, write_bytes, write_json_pretty};

pub fn run(args: FetchArgs) -> Result<()> {
    let started_ts = Utc::now();
    let run_id = format!("fetch-{}", utc_compact_string(started_ts));
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| args.cache_root.join("source.html"));

    info!(url = %args.url, run_id = %run_id, "starting fetch");

    let bytes = fetch_url(&args.url, Duration::from_secs(args.timeout_secs))?;
    write_bytes(&output_path, &bytes)?;
    info!(path = %output_path.display(), "wrote source document");

    let manifest = FetchRunManifest {
        manifest_version: 1,
        run_id,
        fetched_at: now_utc_string(),
        url: args.url.clone(),
        output_path: output_path.display().to_string(),
        byte_count: bytes.len(),
        sha256: sha256_bytes(&bytes),
    };

    let manifest_path = args.cache_root.join("manifests").join(format!(
        "fetch_run_{}.json",
        utc_compact_string(started_ts)
    ));
    write_json_pretty(&manifest_path, &manifest)?;
    info!(path = %manifest_path.display(), "wrote fetch manifest");

    Ok(())
}
