//! Indexed view of a loaded registry.
//!
//! The index enforces the structural rules a registry must satisfy before
//! installation makes sense and provides fast lookup by item name. It is
//! intentionally strict about duplicates and malformed file paths so the
//! installer cannot silently consume a broken registry.

use crate::registry::identity::ComponentName;
use crate::registry::model::{Registry, RegistryItem, load_registry_from_path};
use crate::schema_loader::{compile_schema, validate_with_schema};
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug)]
/// Registry plus a derived index keyed by item name.
pub struct RegistryIndex {
    registry: Registry,
    by_name: BTreeMap<ComponentName, RegistryItem>,
}

impl RegistryIndex {
    /// Index an already-loaded registry, enforcing structural rules.
    pub fn from_registry(registry: Registry) -> Result<Self> {
        let by_name = build_index(&registry)?;
        Ok(Self { registry, by_name })
    }

    /// Load a registry from disk, validating it against the published JSON
    /// Schema before indexing.
    ///
    /// Schema validation runs on the raw JSON so field-level errors name the
    /// offending path instead of surfacing as serde noise.
    pub fn load(path: &Path, schema_path: &Path) -> Result<Self> {
        validate_against_schema(path, schema_path)?;
        let registry = load_registry_from_path(path)
            .with_context(|| format!("loading {}", path.display()))?;
        Self::from_registry(registry)
    }

    /// Resolve an item by name.
    ///
    /// Returns `None` instead of erroring; callers surface errors with the
    /// CLI context that referenced the missing name.
    pub fn item(&self, name: &ComponentName) -> Option<&RegistryItem> {
        self.by_name.get(name)
    }

    /// Iterates item names in stable order.
    pub fn names(&self) -> impl Iterator<Item = &ComponentName> {
        self.by_name.keys()
    }

    /// Access the underlying registry (declaration order, registry name).
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

fn build_index(registry: &Registry) -> Result<BTreeMap<ComponentName, RegistryItem>> {
    if registry.name.trim().is_empty() {
        bail!("registry name must not be empty");
    }
    if registry.items.is_empty() {
        bail!("registry contains no items");
    }

    let mut map = BTreeMap::new();
    for item in &registry.items {
        if item.name.as_str().trim().is_empty() {
            bail!("encountered registry item with no name");
        }
        if map.contains_key(&item.name) {
            bail!("duplicate registry item name {}", item.name);
        }
        if item.files.is_empty() {
            bail!("item {} declares no files", item.name);
        }
        for file in &item.files {
            if file.path.trim().is_empty() {
                bail!("item {} declares a file with an empty path", item.name);
            }
            if Path::new(&file.path).is_absolute() {
                bail!(
                    "item {} declares an absolute file path {}",
                    item.name,
                    file.path
                );
            }
            // Targets are joined onto the consumer project root; an absolute
            // target would replace the root and write anywhere on disk.
            if let Some(target) = &file.target {
                if Path::new(target).is_absolute() {
                    bail!(
                        "item {} declares an absolute target {}",
                        item.name,
                        target
                    );
                }
            }
        }
        map.insert(item.name.clone(), item.clone());
    }
    Ok(map)
}

fn validate_against_schema(registry_path: &Path, schema_path: &Path) -> Result<()> {
    let registry_file = File::open(registry_path)
        .with_context(|| format!("opening registry {}", registry_path.display()))?;
    let registry_value: Value = serde_json::from_reader(BufReader::new(registry_file))
        .with_context(|| format!("parsing registry {}", registry_path.display()))?;

    let schema = compile_schema(schema_path)
        .with_context(|| format!("loading registry schema {}", schema_path.display()))?;
    validate_with_schema(&schema, &registry_value)
        .with_context(|| format!("registry {} failed schema validation", registry_path.display()))
}
