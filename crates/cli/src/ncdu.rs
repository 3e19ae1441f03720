use anyhow::{Context, Result, anyhow};
use log::debug;
use ncducolors_core::{Executable, Patcher, Version};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Resolves the `--ncdu` argument, or the first executable `ncdu` on `PATH`,
/// to an absolute path.
pub fn locate(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    locate_in(explicit, std::env::var_os("PATH"), &cwd)
}

/// A bare name is looked up on `paths`, anything with a separator against `cwd`.
fn locate_in(explicit: Option<PathBuf>, paths: Option<OsString>, cwd: &Path) -> Result<PathBuf> {
    let name = explicit.unwrap_or_else(|| PathBuf::from("ncdu"));
    let found = which::which_in(&name, paths, cwd)
        .with_context(|| format!("Ncdu was not found ({}), use --ncdu", name.display()))?;
    Ok(std::path::absolute(cwd.join(found))?)
}

/// Runs `ncdu --version` and parses its banner.
pub fn query_version(path: &Path) -> Result<Version> {
    let output = Command::new(path)
        .arg("--version")
        .output()
        .with_context(|| format!("Failed to run {} --version", path.display()))?;
    if !output.status.success() {
        return Err(anyhow!(
            "{} --version exited with {}",
            path.display(),
            output.status
        ));
    }
    let banner = String::from_utf8_lossy(&output.stdout);
    debug!("Version banner: {}", banner.trim());
    Version::from_banner(&banner).with_context(|| format!("Checking {}", path.display()))
}

pub fn open(explicit: Option<PathBuf>) -> Result<Patcher> {
    let path = locate(explicit)?;
    let version = query_version(&path)?;
    let executable = Executable::open(&path, &version)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    Ok(Patcher::new(executable))
}
