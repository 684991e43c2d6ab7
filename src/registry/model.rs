//! Deserializable representation of a Bao component registry.
//!
//! The types mirror the published registry format so the CLI and tests can
//! reason about item metadata without ad-hoc JSON handling. Use
//! `RegistryIndex` for validation and name lookup; use these structs when the
//! full item surface is required (files, NPM dependencies, Base UI metadata).

use crate::registry::identity::{ComponentName, ItemKind};
use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Deserialize)]
/// Full registry as published: a named, flat list of installable items.
pub struct Registry {
    pub name: String,
    pub items: Vec<RegistryItem>,
}

#[derive(Clone, Debug, Deserialize)]
/// One installable entry: a component or shared library module.
pub struct RegistryItem {
    pub name: ComponentName,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default)]
    pub description: Option<String>,
    /// NPM packages the consumer must install; the CLI only reports these.
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: Vec<String>,
    /// Names of other registry items required before this one works.
    #[serde(default, rename = "registryDependencies")]
    pub registry_dependencies: Vec<ComponentName>,
    #[serde(default)]
    pub files: Vec<RegistryFile>,
    #[serde(default, rename = "baseUI")]
    pub base_ui: Option<BaseUiMetadata>,
}

#[derive(Clone, Debug, Deserialize)]
/// A payload file copied into the consumer project.
pub struct RegistryFile {
    /// Path relative to the registry payload root (e.g. `ui/button.tsx`).
    pub path: String,
    #[serde(default, rename = "type")]
    pub kind: Option<ItemKind>,
    /// Explicit destination inside the consumer project; overrides the
    /// components/lib directory mapping when set.
    #[serde(default)]
    pub target: Option<String>,
    /// Inline content, present in remotely fetched payload documents.
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
/// Which headless Base UI primitives an item wraps, and at which version.
pub struct BaseUiMetadata {
    #[serde(default)]
    pub components: Vec<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl RegistryFile {
    /// Effective kind used for target mapping; falls back to the owning
    /// item's kind when the file carries none.
    pub fn kind_or<'a>(&'a self, item_kind: &'a ItemKind) -> &'a ItemKind {
        self.kind.as_ref().unwrap_or(item_kind)
    }
}

/// Read and parse a registry from disk without additional validation.
pub fn load_registry_from_path(path: &Path) -> Result<Registry> {
    let data = fs::read_to_string(path)?;
    let registry: Registry = serde_json::from_str(&data)?;
    Ok(registry)
}
