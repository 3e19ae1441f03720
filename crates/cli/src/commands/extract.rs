use anyhow::Result;
use std::path::{Path, PathBuf};

use super::write_config;

pub fn extract_default_config(ncdu: Option<PathBuf>, output: Option<&Path>, compact: bool) -> Result<()> {
    let patcher = crate::ncdu::open(ncdu)?;
    let config = patcher.extract_default_config()?;

    let is_tty = write_config(&config, output, compact)?;
    if output.is_some() || is_tty {
        println!("Config extracted successfully.");
    }
    Ok(())
}
