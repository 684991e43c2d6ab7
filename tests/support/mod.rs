use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// A `bao` invocation rooted in `project_dir` with a clean registry
/// environment and the checkout pinned via `BAO_ROOT`.
pub fn bao_command(project_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bao"));
    cmd.current_dir(project_dir);
    cmd.env("BAO_ROOT", repo_root());
    cmd.env_remove("BAO_REGISTRY");
    cmd.env_remove("BAO_REGISTRY_URL");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

pub fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
