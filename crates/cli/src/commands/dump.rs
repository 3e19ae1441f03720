use anyhow::Result;
use ncducolors_core::{Endianness, internal_default_config};
use std::path::{Path, PathBuf};

use super::write_config;

/// Dumps the built-in defaults. The executable is only consulted for the
/// variant choices not forced on the command line.
pub fn dump_internal_default_config(
    ncdu: Option<PathBuf>,
    output: Option<&Path>,
    compact: bool,
    darkbg: Option<bool>,
    endianness: Option<Endianness>,
) -> Result<()> {
    let (with_darkbg, endianness) = match (darkbg, endianness) {
        (Some(d), Some(e)) => (d, e),
        _ => {
            let patcher = crate::ncdu::open(ncdu)?;
            let exe = patcher.executable();
            (
                darkbg.unwrap_or(exe.supports_darkbg()),
                endianness.unwrap_or(exe.endianness()),
            )
        }
    };

    let config = internal_default_config(endianness, with_darkbg)?;
    let is_tty = write_config(&config, output, compact)?;
    if output.is_some() || is_tty {
        println!("Config dumped successfully.");
    }
    Ok(())
}
