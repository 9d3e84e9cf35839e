use std::fs;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::cli::{DEFAULT_SOURCE_URL, SourceArgs};

const USER_AGENT: &str = concat!("emojigen/", env!("CARGO_PKG_VERSION"));

/// Raw markup plus a description of where it came from (path or URL).
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub origin: String,
    pub bytes: Vec<u8>,
}

pub fn load_source(args: &SourceArgs) -> Result<SourceDocument> {
    if let Some(path) = &args.input {
        let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        info!(path = %path.display(), bytes = bytes.len(), "read source document");
        return Ok(SourceDocument {
            origin: path.display().to_string(),
            bytes,
        });
    }

    let url = args.url.as_deref().unwrap_or(DEFAULT_SOURCE_URL);
    let bytes = fetch_url(url, Duration::from_secs(args.timeout_secs))?;
    Ok(SourceDocument {
        origin: url.to_string(),
        bytes,
    })
}

pub fn fetch_url(url: &str, timeout: Duration) -> Result<Vec<u8>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .context("failed to build HTTP client")?;

    info!(url, "downloading source document");
    let response = client
        .get(url)
        .send()
        .with_context(|| format!("failed to download {url:?}"))?;

    let status = response.status();
    if !status.is_success() {
        bail!("received bad HTTP status code from {url:?}: {status}");
    }

    let bytes = response
        .bytes()
        .with_context(|| format!("failed to read response body from {url:?}"))?;
    info!(url, bytes = bytes.len(), "downloaded source document");

    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn load_source_reads_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "<p>hi</p>").unwrap();

        let args = SourceArgs {
            input: Some(path.clone()),
            url: None,
            timeout_secs: 1,
        };
        let source = load_source(&args).unwrap();

        assert_eq!(source.bytes, b"<p>hi</p>");
        assert_eq!(source.origin, path.display().to_string());
    }

    #[test]
    fn load_source_reports_missing_file() {
        let args = SourceArgs {
            input: Some(PathBuf::from("/nonexistent/emojigen/page.html")),
            url: None,
            timeout_secs: 1,
        };

        let err = load_source(&args).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
