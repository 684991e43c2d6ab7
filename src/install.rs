//! File-copy installer.
//!
//! Takes a resolved install plan and writes each payload file into the
//! consumer project. Target directories follow the conventions the original
//! registry assumes: lib modules land under the project's lib directory,
//! everything else under its components directory, and an explicit `target`
//! on a file wins over both. Existing files are skipped unless overwriting
//! was requested; a skip is reported, never an error.

use crate::fetch::component_content;
use crate::registry::{InstallPlan, ItemKind, RegistryFile, RegistryIndex};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Candidate components directories, probed in order.
const COMPONENT_DIRS: [&str; 4] = [
    "src/components",
    "components",
    "app/components",
    "lib/components",
];

/// Candidate lib directories, probed in order.
const LIB_DIRS: [&str; 4] = ["src/lib", "lib", "src/utils", "utils"];

#[derive(Clone, Copy, Debug, Default)]
/// Flags controlling how existing files are treated.
pub struct InstallOptions {
    pub overwrite: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
/// What happened to one payload file.
pub enum InstallOutcome {
    Written(PathBuf),
    /// Target existed and `--overwrite` was not given.
    SkippedExisting(PathBuf),
}

#[derive(Debug, Default)]
/// Per-file outcomes for a completed install, in copy order.
pub struct InstallReport {
    pub outcomes: Vec<InstallOutcome>,
}

impl InstallReport {
    pub fn written(&self) -> impl Iterator<Item = &PathBuf> {
        self.outcomes.iter().filter_map(|o| match o {
            InstallOutcome::Written(path) => Some(path),
            InstallOutcome::SkippedExisting(_) => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = &PathBuf> {
        self.outcomes.iter().filter_map(|o| match o {
            InstallOutcome::SkippedExisting(path) => Some(path),
            InstallOutcome::Written(_) => None,
        })
    }
}

/// Pick the components directory for a consumer project.
///
/// The first existing conventional directory wins; a fresh project gets the
/// default even though it does not exist yet.
pub fn components_dir(project_root: &Path) -> PathBuf {
    probe_dirs(project_root, &COMPONENT_DIRS)
}

/// Pick the lib directory for a consumer project.
pub fn lib_dir(project_root: &Path) -> PathBuf {
    probe_dirs(project_root, &LIB_DIRS)
}

fn probe_dirs(project_root: &Path, candidates: &[&str]) -> PathBuf {
    for candidate in candidates {
        let path = project_root.join(candidate);
        if path.is_dir() {
            return path;
        }
    }
    project_root.join(candidates[0])
}

/// Compute where one payload file lands inside the consumer project.
///
/// `item_kind` supplies the mapping when the file carries no kind of its own.
/// The leading `ui/` or `lib/` payload component is stripped so consumers get
/// `src/components/button.tsx`, not `src/components/ui/button.tsx`.
pub fn target_path(project_root: &Path, file: &RegistryFile, item_kind: &ItemKind) -> PathBuf {
    if let Some(target) = &file.target {
        return project_root.join(target);
    }

    if file.kind_or(item_kind) == &ItemKind::Lib {
        let rel = file.path.strip_prefix("lib/").unwrap_or(&file.path);
        lib_dir(project_root).join(rel)
    } else {
        let rel = file.path.strip_prefix("ui/").unwrap_or(&file.path);
        components_dir(project_root).join(rel)
    }
}

/// Copy every file of every item in the plan into the consumer project.
///
/// Content comes from the local checkout when `bao_root` is set, otherwise
/// from the remote registry. Files are written in plan order; an I/O or
/// fetch failure aborts the run and leaves already-written files in place.
pub fn install_components(
    index: &RegistryIndex,
    plan: &InstallPlan,
    project_root: &Path,
    bao_root: Option<&Path>,
    options: InstallOptions,
) -> Result<InstallReport> {
    let mut report = InstallReport::default();

    for name in &plan.components {
        let Some(item) = index.item(name) else {
            // Plans are built from this index, so a miss is a caller bug;
            // skip rather than abort a half-finished install.
            continue;
        };

        for file in &item.files {
            let target = target_path(project_root, file, &item.kind);

            if target.exists() && !options.overwrite {
                report.outcomes.push(InstallOutcome::SkippedExisting(target));
                continue;
            }

            let content = match &file.content {
                Some(inline) => inline.clone(),
                None => component_content(bao_root, &file.path)
                    .with_context(|| format!("fetching component {}", file.path))?,
            };

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating directory {}", parent.display()))?;
            }
            fs::write(&target, content)
                .with_context(|| format!("writing {}", target.display()))?;
            report.outcomes.push(InstallOutcome::Written(target));
        }
    }

    Ok(report)
}
