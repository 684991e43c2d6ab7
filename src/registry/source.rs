//! Registry source selection.
//!
//! The CLI consumes the built-in registry in development mode; `BAO_REGISTRY`
//! redirects it to a JSON file on disk or a remote URL. Keeping the selection
//! explicit here means the binary never has to guess where a registry came
//! from when reporting load failures.

use crate::registry::builtin::builtin_registry;
use crate::registry::index::RegistryIndex;
use crate::registry::model::Registry;
use crate::schema_loader::{compile_schema, validate_with_schema};
use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable overriding the built-in registry.
pub const REGISTRY_ENV: &str = "BAO_REGISTRY";

#[derive(Clone, Debug, Eq, PartialEq)]
/// Where the registry comes from for this invocation.
pub enum RegistrySource {
    /// Hardcoded in-process registry (development mode).
    Builtin,
    /// Registry JSON on disk, schema-validated before indexing.
    File(PathBuf),
    /// Registry JSON fetched from a URL, schema-validated before indexing.
    Remote(String),
}

impl RegistrySource {
    /// Pick the source from `BAO_REGISTRY`: unset means built-in, an
    /// `http(s)://` value means remote, anything else is a file path.
    pub fn from_env() -> Self {
        match env::var(REGISTRY_ENV) {
            Ok(value) if !value.trim().is_empty() => {
                let value = value.trim().to_string();
                if value.starts_with("http://") || value.starts_with("https://") {
                    RegistrySource::Remote(value)
                } else {
                    RegistrySource::File(PathBuf::from(value))
                }
            }
            _ => RegistrySource::Builtin,
        }
    }

    /// Load and index the registry this source points at.
    ///
    /// `schema_path` is consulted for file and remote registries; the
    /// built-in registry is trusted as compiled.
    pub fn load(&self, schema_path: &Path) -> Result<RegistryIndex> {
        match self {
            RegistrySource::Builtin => RegistryIndex::from_registry(builtin_registry()),
            RegistrySource::File(path) => RegistryIndex::load(path, schema_path)
                .with_context(|| format!("loading registry from {}", path.display())),
            RegistrySource::Remote(url) => {
                let value = crate::fetch::fetch_json(url)
                    .with_context(|| format!("fetching registry from {url}"))?;
                let schema = compile_schema(schema_path)
                    .with_context(|| format!("loading registry schema {}", schema_path.display()))?;
                validate_with_schema(&schema, &value)
                    .with_context(|| format!("registry from {url} failed schema validation"))?;
                let registry: Registry = serde_json::from_value(value)
                    .with_context(|| format!("parsing registry from {url}"))?;
                RegistryIndex::from_registry(registry)
            }
        }
    }
}

impl fmt::Display for RegistrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrySource::Builtin => f.write_str("local registry"),
            RegistrySource::File(path) => write!(f, "registry file {}", path.display()),
            RegistrySource::Remote(url) => write!(f, "remote registry {url}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::identity::ComponentName;

    #[test]
    fn builtin_source_loads_without_schema_file() {
        let index = RegistrySource::Builtin
            .load(Path::new("/nonexistent/schema.json"))
            .unwrap();
        assert!(index.item(&ComponentName::from("button")).is_some());
    }

    #[test]
    fn env_values_map_to_sources() {
        unsafe { env::remove_var(REGISTRY_ENV) };
        assert_eq!(RegistrySource::from_env(), RegistrySource::Builtin);

        unsafe { env::set_var(REGISTRY_ENV, "https://ui.bao-to.com/r/registry.json") };
        assert_eq!(
            RegistrySource::from_env(),
            RegistrySource::Remote("https://ui.bao-to.com/r/registry.json".to_string())
        );

        unsafe { env::set_var(REGISTRY_ENV, "/tmp/registry.json") };
        assert_eq!(
            RegistrySource::from_env(),
            RegistrySource::File(PathBuf::from("/tmp/registry.json"))
        );
        unsafe { env::remove_var(REGISTRY_ENV) };
    }
}
