use anyhow::{Result, anyhow};
use ncducolors_core::{NameParsing, PatchOutcome};
use std::path::{Path, PathBuf};

use super::read_config;

pub fn revert(ncdu: Option<PathBuf>, offset: Option<usize>, config: Option<&Path>) -> Result<()> {
    let offset = match (offset, config) {
        (Some(offset), _) => offset,
        (None, Some(path)) => read_config(path, NameParsing::Lenient)?
            .offset
            .ok_or_else(|| anyhow!("{} does not record an offset", path.display()))?,
        (None, None) => return Err(anyhow!("Either --offset or --config is required")),
    };

    let mut patcher = crate::ncdu::open(ncdu)?;
    match patcher.revert(offset)? {
        PatchOutcome::Changed => println!("Ncdu defaults reverted successfully."),
        PatchOutcome::Unchanged => println!("Ncdu has already been reverted to its defaults."),
    }
    Ok(())
}
