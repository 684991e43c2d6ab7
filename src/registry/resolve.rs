//! Transitive install-set resolution over `registryDependencies` edges.
//!
//! Given the requested item names, the resolver walks the dependency edges
//! depth-first with a visited set, accumulating a deduplicated install set in
//! discovery order. A referenced name missing from the registry is an error;
//! the CLI reports it and exits non-zero.

use crate::registry::identity::ComponentName;
use crate::registry::index::RegistryIndex;
use anyhow::{Result, bail};
use std::collections::{BTreeSet, HashSet};

#[derive(Debug)]
/// Everything `bao add` needs after resolution: which items to copy and
/// which NPM packages to tell the consumer about.
pub struct InstallPlan {
    /// Deduplicated install set in depth-first discovery order.
    pub components: Vec<ComponentName>,
    /// Sorted union of the install set's NPM `dependencies`.
    pub packages: Vec<String>,
}

/// Resolve the transitive closure of `requested` under `registryDependencies`.
///
/// Membership is deterministic for a fixed registry and request order. The
/// visited set keeps the walk terminating even on cyclic input; cycles are
/// tolerated, not reported.
pub fn resolve_install_set(
    index: &RegistryIndex,
    requested: &[ComponentName],
) -> Result<InstallPlan> {
    let mut visited: HashSet<ComponentName> = HashSet::new();
    let mut components: Vec<ComponentName> = Vec::new();

    for name in requested {
        visit(index, name, &mut visited, &mut components)?;
    }

    let mut packages: BTreeSet<String> = BTreeSet::new();
    for name in &components {
        // Present by construction; visit() only records resolved names.
        if let Some(item) = index.item(name) {
            packages.extend(item.dependencies.iter().cloned());
        }
    }

    Ok(InstallPlan {
        components,
        packages: packages.into_iter().collect(),
    })
}

fn visit(
    index: &RegistryIndex,
    name: &ComponentName,
    visited: &mut HashSet<ComponentName>,
    components: &mut Vec<ComponentName>,
) -> Result<()> {
    if !visited.insert(name.clone()) {
        return Ok(());
    }

    let Some(item) = index.item(name) else {
        bail!("Component \"{name}\" not found in registry");
    };

    components.push(name.clone());
    for dep in &item.registry_dependencies {
        visit(index, dep, visited, components)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::identity::ItemKind;
    use crate::registry::model::{Registry, RegistryFile, RegistryItem};

    fn item(name: &str, deps: &[&str], packages: &[&str]) -> RegistryItem {
        RegistryItem {
            name: ComponentName::from(name),
            kind: ItemKind::Ui,
            description: None,
            dependencies: packages.iter().map(|p| (*p).to_string()).collect(),
            dev_dependencies: Vec::new(),
            registry_dependencies: deps.iter().map(|d| ComponentName::from(*d)).collect(),
            files: vec![RegistryFile {
                path: format!("ui/{name}.tsx"),
                kind: None,
                target: None,
                content: None,
            }],
            base_ui: None,
        }
    }

    fn index(items: Vec<RegistryItem>) -> RegistryIndex {
        RegistryIndex::from_registry(Registry {
            name: "fixture".to_string(),
            items,
        })
        .unwrap()
    }

    fn names(values: &[&str]) -> Vec<ComponentName> {
        values.iter().map(|v| ComponentName::from(*v)).collect()
    }

    #[test]
    fn resolves_transitive_closure_in_discovery_order() {
        let index = index(vec![
            item("dialog", &["overlay"], &[]),
            item("overlay", &["utils"], &[]),
            item("utils", &[], &[]),
        ]);
        let plan = resolve_install_set(&index, &names(&["dialog"])).unwrap();
        assert_eq!(plan.components, names(&["dialog", "overlay", "utils"]));
    }

    #[test]
    fn shared_dependencies_appear_once() {
        let index = index(vec![
            item("badge", &["utils"], &[]),
            item("button", &["utils"], &[]),
            item("utils", &[], &[]),
        ]);
        let plan = resolve_install_set(&index, &names(&["badge", "button"])).unwrap();
        assert_eq!(plan.components, names(&["badge", "utils", "button"]));
    }

    #[test]
    fn requesting_same_item_twice_installs_once() {
        let index = index(vec![item("badge", &[], &[])]);
        let plan = resolve_install_set(&index, &names(&["badge", "badge"])).unwrap();
        assert_eq!(plan.components, names(&["badge"]));
    }

    #[test]
    fn missing_name_is_an_error_naming_the_component() {
        let index = index(vec![item("badge", &["nonexistent"], &[])]);
        let err = resolve_install_set(&index, &names(&["badge"])).unwrap_err();
        assert!(err.to_string().contains("\"nonexistent\""));

        let err = resolve_install_set(&index, &names(&["ghost"])).unwrap_err();
        assert!(err.to_string().contains("\"ghost\""));
    }

    #[test]
    fn cyclic_input_terminates() {
        // Out of contract for a published registry, but the visited set must
        // still keep the walk finite.
        let index = index(vec![item("a", &["b"], &[]), item("b", &["a"], &[])]);
        let plan = resolve_install_set(&index, &names(&["a"])).unwrap();
        assert_eq!(plan.components, names(&["a", "b"]));
    }

    #[test]
    fn packages_are_the_sorted_union_over_the_install_set() {
        let index = index(vec![
            item("badge", &["utils"], &["class-variance-authority"]),
            item("utils", &[], &["tailwind-merge", "clsx"]),
        ]);
        let plan = resolve_install_set(&index, &names(&["badge"])).unwrap();
        assert_eq!(
            plan.packages,
            vec!["class-variance-authority", "clsx", "tailwind-merge"]
        );
    }
}
