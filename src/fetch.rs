//! Component payload fetching.
//!
//! Development mode reads payloads straight from the checkout's
//! `registry/base-ui-v4/` tree; anything else falls back to the published
//! registry endpoint, where each payload is wrapped in a one-file JSON
//! document. Local reads are canonicalized and fenced to the payload root so
//! a registry entry cannot name a path outside it.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value;
use std::env;
use std::fs;
use std::path::Path;

/// Published registry endpoint used when no local payload exists.
pub const REGISTRY_URL: &str = "https://ui.bao-to.com/r";

/// Base URL for remote payloads; `BAO_REGISTRY_URL` overrides the default.
pub fn registry_base_url() -> String {
    env::var("BAO_REGISTRY_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| REGISTRY_URL.to_string())
}

/// Fetch and parse a JSON document.
pub fn fetch_json(url: &str) -> Result<Value> {
    let body = ureq::get(url)
        .call()
        .with_context(|| format!("requesting {url}"))?
        .into_string()
        .with_context(|| format!("reading response body from {url}"))?;
    serde_json::from_str(&body).with_context(|| format!("parsing JSON from {url}"))
}

#[derive(Deserialize)]
struct PayloadDocument {
    files: Vec<PayloadFile>,
}

#[derive(Deserialize)]
struct PayloadFile {
    content: String,
}

/// Resolve the content of one registry payload file.
///
/// Prefers the local checkout when a Bao root was discovered; otherwise
/// fetches `<base>/<path>.json` and takes the first file's content, matching
/// the published payload document shape.
pub fn component_content(bao_root: Option<&Path>, rel_path: &str) -> Result<String> {
    if let Some(root) = bao_root {
        if let Some(content) = local_payload(root, rel_path)? {
            return Ok(content);
        }
    }

    let url = format!("{}/{}.json", registry_base_url(), rel_path);
    let value = fetch_json(&url)?;
    let document: PayloadDocument = serde_json::from_value(value)
        .with_context(|| format!("parsing payload document from {url}"))?;
    let Some(file) = document.files.into_iter().next() else {
        bail!("payload document {url} contains no files");
    };
    Ok(file.content)
}

/// Read a payload from the checkout, enforcing the payload-root boundary.
///
/// Returns `Ok(None)` when the file simply is not there so callers can fall
/// through to the remote endpoint; a path escaping `registry/base-ui-v4/` is
/// an error, never a fallthrough.
fn local_payload(bao_root: &Path, rel_path: &str) -> Result<Option<String>> {
    let payload_root = bao_root.join(crate::REGISTRY_PAYLOAD_DIR);
    let candidate = payload_root.join(rel_path);
    if !candidate.is_file() {
        return Ok(None);
    }

    let payload_root = fs::canonicalize(&payload_root)
        .with_context(|| format!("canonicalizing {}", payload_root.display()))?;
    let canonical = fs::canonicalize(&candidate)
        .with_context(|| format!("canonicalizing {}", candidate.display()))?;
    if !canonical.starts_with(&payload_root) {
        bail!(
            "payload path {} escapes the registry payload root",
            rel_path
        );
    }

    let content = fs::read_to_string(&canonical)
        .with_context(|| format!("reading {}", canonical.display()))?;
    Ok(Some(content))
}
