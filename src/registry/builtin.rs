//! The hand-curated registry compiled into the CLI.
//!
//! Development mode serves this list directly instead of fetching
//! `registry.json`; the entries must stay in sync with the payload files
//! under `registry/base-ui-v4/`.

use crate::registry::identity::{ComponentName, ItemKind};
use crate::registry::model::{BaseUiMetadata, Registry, RegistryFile, RegistryItem};

const BASE_UI_VERSION: &str = "1.0.0-beta.1";

/// Build the built-in registry used in development mode.
pub fn builtin_registry() -> Registry {
    Registry {
        name: "bao-ui".to_string(),
        items: vec![
            ui_item(
                "button",
                "Displays a button or a component that looks like a button.",
                &["@radix-ui/react-slot", "class-variance-authority"],
                &[],
                "ui/button.tsx",
            ),
            RegistryItem {
                name: ComponentName::from("utils"),
                kind: ItemKind::Lib,
                description: Some(
                    "Utility functions for class merging and common operations.".to_string(),
                ),
                dependencies: strings(&["clsx", "tailwind-merge"]),
                dev_dependencies: Vec::new(),
                registry_dependencies: Vec::new(),
                files: vec![file("lib/utils.ts", ItemKind::Lib)],
                base_ui: None,
            },
            ui_item(
                "badge",
                "Displays a badge or a component that looks like a badge.",
                &["class-variance-authority"],
                &[],
                "ui/badge.tsx",
            ),
            ui_item(
                "input",
                "Displays an input field.",
                &["@base-ui-components/react"],
                &["input"],
                "ui/input.tsx",
            ),
            ui_item(
                "checkbox",
                "A control that allows the user to toggle between checked and not checked.",
                &["@base-ui-components/react", "@radix-ui/react-icons"],
                &["checkbox"],
                "ui/checkbox.tsx",
            ),
            ui_item(
                "radio-group",
                "A set of checkable buttons\u{2014}known as radio buttons\u{2014}where no more \
                 than one of the buttons can be checked at a time.",
                &["@base-ui-components/react"],
                &["radio-group", "radio"],
                "ui/radio.tsx",
            ),
            ui_item(
                "select",
                "Displays a list of options for the user to pick from\u{2014}triggered by a \
                 button.",
                &["@base-ui-components/react", "@radix-ui/react-icons"],
                &["select"],
                "ui/select.tsx",
            ),
            ui_item(
                "switch",
                "A control that allows the user to toggle between checked and not checked.",
                &["@base-ui-components/react"],
                &["switch"],
                "ui/switch.tsx",
            ),
            ui_item(
                "dialog",
                "A window overlaid on either the primary window or another dialog window.",
                &["@base-ui-components/react", "@radix-ui/react-icons"],
                &["dialog"],
                "ui/dialog.tsx",
            ),
            ui_item(
                "tooltip",
                "A popup that displays information related to an element when the element \
                 receives keyboard focus or the mouse hovers over it.",
                &["@base-ui-components/react"],
                &["tooltip"],
                "ui/tooltip.tsx",
            ),
        ],
    }
}

/// A `registry:ui` entry; every UI component depends on `utils`.
fn ui_item(
    name: &str,
    description: &str,
    dependencies: &[&str],
    base_ui_components: &[&str],
    path: &str,
) -> RegistryItem {
    RegistryItem {
        name: ComponentName::from(name),
        kind: ItemKind::Ui,
        description: Some(description.to_string()),
        dependencies: strings(dependencies),
        dev_dependencies: Vec::new(),
        registry_dependencies: vec![ComponentName::from("utils")],
        files: vec![file(path, ItemKind::Ui)],
        base_ui: Some(BaseUiMetadata {
            components: strings(base_ui_components),
            version: Some(BASE_UI_VERSION.to_string()),
        }),
    }
}

fn file(path: &str, kind: ItemKind) -> RegistryFile {
    RegistryFile {
        path: path.to_string(),
        kind: Some(kind),
        target: None,
        content: None,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}
