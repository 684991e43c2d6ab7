//! Shared library for the `bao` component installer.
//!
//! The crate exposes the registry types (items, index, install-set resolver)
//! and the utilities the CLI binary depends on: Bao repo-root discovery,
//! registry source selection, payload fetching, and the file-copy installer.
//! Public functions here form the contract documented in README.md: a
//! registry is resolved to a transitive install set, payloads are copied into
//! the consumer project, and remaining NPM packages are reported.

use anyhow::{Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub mod fetch;
pub mod install;
pub mod registry;
pub(crate) mod schema_loader;

pub use fetch::{component_content, registry_base_url};
pub use install::{InstallOptions, InstallOutcome, InstallReport, install_components};
pub use registry::{
    BaseUiMetadata, ComponentName, InstallPlan, ItemKind, Registry, RegistryFile, RegistryIndex,
    RegistryItem, RegistrySource, builtin_registry, load_registry_from_path, resolve_install_set,
};

/// Directory holding the component payload files copied in development mode.
pub const REGISTRY_PAYLOAD_DIR: &str = "registry/base-ui-v4";

const REGISTRY_SCHEMA_FILE: &str = "schema/registry.schema.json";

/// Returns true when `candidate` looks like the Bao repository root.
///
/// Root detection is intentionally strict: both the payload directory and the
/// registry schema must be present so the installer never treats a consumer
/// project as its own source tree.
fn is_bao_root(candidate: &Path) -> bool {
    candidate.join(REGISTRY_PAYLOAD_DIR).is_dir()
        && candidate.join(REGISTRY_SCHEMA_FILE).is_file()
}

/// Verifies that an explicit `BAO_ROOT` hint points at a valid checkout.
fn bao_root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.exists() || !is_bao_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_bao_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the Bao repository root for development-mode installs.
///
/// Search order: honor `BAO_ROOT` if it points at a real checkout, fall back
/// to climbing up from the current executable, then use the build-time hint.
/// Callers may treat failure as non-fatal; without a root the installer
/// fetches payloads from the remote registry instead.
pub fn find_bao_root() -> Result<PathBuf> {
    if let Ok(env_root) = env::var("BAO_ROOT") {
        if let Some(root) = bao_root_from_hint(&env_root) {
            return Ok(root);
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if let Some(root) = search_upwards(exe_dir) {
                return Ok(root);
            }
        }
    }

    if let Some(hint) = option_env!("BAO_ROOT_HINT") {
        if let Some(root) = bao_root_from_hint(hint) {
            return Ok(root);
        }
    }

    bail!("Unable to locate the Bao UI repository root. Set BAO_ROOT to the cloned repository.");
}

/// Returns the canonical registry schema path inside a Bao checkout.
pub fn registry_schema_path(bao_root: &Path) -> PathBuf {
    bao_root.join(REGISTRY_SCHEMA_FILE)
}

/// Schema path fallback for contexts without a discovered root (unit tests,
/// installed binaries validating a `BAO_REGISTRY` file).
pub fn bundled_registry_schema_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(REGISTRY_SCHEMA_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_dir_is_a_bao_root() {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        assert!(is_bao_root(&root));
    }

    #[test]
    fn hint_rejects_missing_and_non_root_paths() {
        assert!(bao_root_from_hint("").is_none());
        assert!(bao_root_from_hint("/nonexistent/bao").is_none());

        let tmp = tempfile::tempdir().unwrap();
        assert!(bao_root_from_hint(tmp.path().to_str().unwrap()).is_none());
    }

    #[test]
    fn find_root_honors_env_override() {
        // Serialize around the env var: other tests do not touch BAO_ROOT.
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        unsafe { env::set_var("BAO_ROOT", &root) };
        let found = find_bao_root().unwrap();
        assert_eq!(found, fs::canonicalize(&root).unwrap());
        unsafe { env::remove_var("BAO_ROOT") };
    }
}
