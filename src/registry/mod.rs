//! Component registry wiring.
//!
//! This module wraps the Bao UI registry format so the CLI can load a
//! validated snapshot and resolve install sets over consistent identifiers.
//! Types mirror the published registry fields; callers use `RegistryIndex`
//! for fast lookups and `RegistrySource` to pick where a registry comes from.

pub mod builtin;
pub mod identity;
pub mod index;
pub mod model;
pub mod resolve;
pub mod source;

pub use builtin::builtin_registry;
pub use identity::{ComponentName, ItemKind};
pub use index::RegistryIndex;
pub use model::{BaseUiMetadata, Registry, RegistryFile, RegistryItem, load_registry_from_path};
pub use resolve::{InstallPlan, resolve_install_set};
pub use source::{REGISTRY_ENV, RegistrySource};
