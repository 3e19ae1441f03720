use log::{debug, info, warn};
use memmap2::MmapOptions;
use std::fs::OpenOptions;

use crate::config::Config;
use crate::error::{ColorsError, Result};
use crate::executable::Executable;
use crate::signature::{factory_config, find_default_offset};

/// Result of applying a config to an executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Changed,
    Unchanged,
}

/// Reads and rewrites the theme table of one executable.
pub struct Patcher {
    executable: Executable,
}

impl Patcher {
    pub fn new(executable: Executable) -> Self {
        Self { executable }
    }

    pub fn executable(&self) -> &Executable {
        &self.executable
    }

    /// Offset of the untouched factory block.
    pub fn find_default_offset(&self) -> Result<usize> {
        find_default_offset(
            self.executable.binary(),
            self.executable.endianness(),
            self.executable.supports_darkbg(),
        )
    }

    /// Decodes the table at `offset`, or at the factory block when `None`.
    pub fn load(&self, offset: Option<usize>) -> Result<Config> {
        let offset = match offset {
            Some(offset) => offset,
            None => match self.find_default_offset() {
                Ok(offset) => {
                    info!("Found default config at offset {:#x} ({})", offset, offset);
                    offset
                }
                Err(ColorsError::PatternNotFound { .. }) => return Err(ColorsError::OffsetUndetermined),
                Err(e) => return Err(e),
            },
        };
        let mut config = Config::decode_block(
            self.executable.binary(),
            offset,
            self.executable.theme_count(),
            self.executable.endianness(),
        )?;
        config.executable = Some(self.executable.path().to_path_buf());
        Ok(config)
    }

    /// The factory config of an unpatched executable.
    pub fn extract_default_config(&self) -> Result<Config> {
        self.load(None)
    }

    /// Writes `desired` over the table unless it is already in place.
    pub fn apply(&mut self, mut desired: Config) -> Result<PatchOutcome> {
        if let Some(path) = &desired.executable {
            if path.as_path() != self.executable.path() {
                warn!(
                    "Config was made for {}, applying it to {}",
                    path.display(),
                    self.executable.path().display()
                );
            }
        }

        let current = self.load(desired.offset)?;
        let offset = current.offset.ok_or(ColorsError::OffsetUndetermined)?;

        if desired.darkbg.is_none() && current.darkbg.is_some() {
            debug!("Carrying the installed darkbg theme forward");
            desired.darkbg = current.darkbg.clone();
        }

        let endianness = self.executable.endianness();
        let current_bytes = current.encode(endianness)?;
        let desired_bytes = desired.encode(endianness)?;
        if current_bytes.len() != desired_bytes.len() {
            return Err(ColorsError::LengthMismatch {
                offset,
                expected: current_bytes.len(),
                actual: desired_bytes.len(),
            });
        }

        let normalized = Config::decode_block(&desired_bytes, 0, desired.theme_count(), endianness)?;
        if normalized.same_themes(&current) {
            info!("Config at offset {:#x} is already applied", offset);
            return Ok(PatchOutcome::Unchanged);
        }

        self.write_block(offset, &desired_bytes)?;
        info!(
            "Patched {} bytes at offset {:#x} in {}",
            desired_bytes.len(),
            offset,
            self.executable.path().display()
        );
        Ok(PatchOutcome::Changed)
    }

    /// Restores the factory themes at `offset`.
    pub fn revert(&mut self, offset: usize) -> Result<PatchOutcome> {
        let mut defaults = factory_config(self.executable.supports_darkbg());
        defaults.offset = Some(offset);
        self.apply(defaults)
    }

    /// Overwrites `offset..offset + block.len()` on disk through one mapping.
    fn write_block(&mut self, offset: usize, block: &[u8]) -> Result<()> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(self.executable.path())?;

        let on_disk = file.metadata()?.len();
        let loaded = self.executable.binary.len() as u64;
        if on_disk != loaded {
            return Err(ColorsError::ExecutableChanged {
                expected: loaded,
                actual: on_disk,
            });
        }

        // SAFETY: the mapping covers a range already validated against the file
        // length and is dropped before this function returns. Concurrent writers
        // to the executable are not supported.
        let mut region = unsafe {
            MmapOptions::new()
                .offset(offset as u64)
                .len(block.len())
                .map_mut(&file)?
        };
        region.copy_from_slice(block);
        region.flush()?;

        self.executable.binary[offset..offset + block.len()].copy_from_slice(block);
        Ok(())
    }
}
