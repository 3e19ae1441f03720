pub mod apply;
pub mod dump;
pub mod extract;
pub mod revert;

use anyhow::{Context, Result};
use ncducolors_core::{Config, ConfigDocument, NameParsing};
use std::fs::File;
use std::io::{BufReader, BufWriter, IsTerminal, Write};
use std::path::Path;

/// Writes `config` as JSON to `output`, or to stdout.
/// Returns true when the destination is an interactive terminal.
pub(crate) fn write_config(config: &Config, output: Option<&Path>, compact: bool) -> Result<bool> {
    let doc = config.to_document();
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            doc.write_json(&mut writer, compact)?;
            writer.flush()?;
            Ok(false)
        }
        None => {
            let stdout = std::io::stdout();
            let is_tty = stdout.is_terminal();
            let mut lock = stdout.lock();
            doc.write_json(&mut lock, compact)?;
            writeln!(lock)?;
            Ok(is_tty)
        }
    }
}

pub(crate) fn read_config(path: &Path, parsing: NameParsing) -> Result<Config> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let doc = ConfigDocument::from_reader(BufReader::new(file))
        .with_context(|| format!("Not a serialized config: {}", path.display()))?;
    Ok(Config::from_document(&doc, parsing)?)
}
