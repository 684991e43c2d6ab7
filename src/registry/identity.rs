use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Unique name of a registry item (e.g., `button`, `utils`).
///
/// Names double as the edge labels in `registryDependencies`, so resolution
/// and error messages both speak in terms of this identifier.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentName(pub String);

impl ComponentName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() honors width/fill flags so names line up in column output.
        f.pad(&self.0)
    }
}

impl From<&str> for ComponentName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Registry item type tag (`registry:ui`, `registry:lib`, ...).
///
/// Known variants keep serialization consistent with the published registry
/// format; `Other` preserves forward compatibility with registries that
/// introduce new tags.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ItemKind {
    Ui,
    Lib,
    Block,
    Example,
    Hook,
    Theme,
    Style,
    Page,
    Component,
    Internal,
    Other(String),
}

impl ItemKind {
    pub fn as_str(&self) -> &str {
        match self {
            ItemKind::Ui => "registry:ui",
            ItemKind::Lib => "registry:lib",
            ItemKind::Block => "registry:block",
            ItemKind::Example => "registry:example",
            ItemKind::Hook => "registry:hook",
            ItemKind::Theme => "registry:theme",
            ItemKind::Style => "registry:style",
            ItemKind::Page => "registry:page",
            ItemKind::Component => "registry:component",
            ItemKind::Internal => "registry:internal",
            ItemKind::Other(value) => value.as_str(),
        }
    }

    fn from_str(value: &str) -> Self {
        match value {
            "registry:ui" => ItemKind::Ui,
            "registry:lib" => ItemKind::Lib,
            "registry:block" => ItemKind::Block,
            "registry:example" => ItemKind::Example,
            "registry:hook" => ItemKind::Hook,
            "registry:theme" => ItemKind::Theme,
            "registry:style" => ItemKind::Style,
            "registry:page" => ItemKind::Page,
            "registry:component" => ItemKind::Component,
            "registry:internal" => ItemKind::Internal,
            other => ItemKind::Other(other.to_string()),
        }
    }
}

impl Serialize for ItemKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ItemKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_str(&value))
    }
}
