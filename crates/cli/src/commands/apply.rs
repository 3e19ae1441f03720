use anyhow::Result;
use log::info;
use ncducolors_core::{NameParsing, PatchOutcome};
use std::path::{Path, PathBuf};

use super::read_config;

pub fn apply_config(ncdu: Option<PathBuf>, input: &Path, lenient: bool) -> Result<()> {
    let parsing = if lenient {
        NameParsing::Lenient
    } else {
        NameParsing::Strict
    };
    info!("Parsing config file: {}", input.display());
    let config = read_config(input, parsing)?;

    let mut patcher = crate::ncdu::open(ncdu.or_else(|| config.executable.clone()))?;
    match patcher.apply(config)? {
        PatchOutcome::Changed => println!("Config applied successfully."),
        PatchOutcome::Unchanged => println!("Config is already applied."),
    }
    Ok(())
}
