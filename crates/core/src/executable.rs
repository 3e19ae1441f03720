use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::error::{ColorsError, Result};
use crate::format::{ELF_DATA_OFFSET, Endianness};
use crate::version::Version;

/// An ncdu executable loaded fully into memory.
///
/// `binary` is the authoritative current state for the session; the patcher
/// keeps it in sync with every write.
#[derive(Debug, Clone)]
pub struct Executable {
    path: PathBuf,
    pub(crate) binary: Vec<u8>,
    endianness: Endianness,
    supports_darkbg: bool,
}

impl Executable {
    pub fn open(path: &Path, version: &Version) -> Result<Self> {
        let path = std::path::absolute(path)?;
        let binary = std::fs::read(&path)?;
        info!(
            "Loaded {} ({} bytes, ncdu {})",
            path.display(),
            binary.len(),
            version
        );
        Self::from_bytes(path, binary, version.supports_darkbg())
    }

    pub fn from_bytes(path: PathBuf, binary: Vec<u8>, supports_darkbg: bool) -> Result<Self> {
        let endianness = detect_endianness(&binary)?;
        if endianness == Endianness::Big {
            return Err(ColorsError::UnsupportedVariant(
                "big-endian executables are not supported yet".to_string(),
            ));
        }
        debug!(
            "{}: {}, darkbg supported: {}",
            path.display(),
            endianness,
            supports_darkbg
        );
        Ok(Self {
            path,
            binary,
            endianness,
            supports_darkbg,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn binary(&self) -> &[u8] {
        &self.binary
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    pub fn supports_darkbg(&self) -> bool {
        self.supports_darkbg
    }

    pub fn theme_count(&self) -> usize {
        if self.supports_darkbg { 3 } else { 2 }
    }
}

/// Reads `EI_DATA` from the ELF identification bytes.
pub fn detect_endianness(binary: &[u8]) -> Result<Endianness> {
    let marker = *binary
        .get(ELF_DATA_OFFSET)
        .ok_or(ColorsError::TruncatedHeader(binary.len()))?;
    Endianness::from_elf_data(marker).ok_or(ColorsError::MalformedHeader(marker))
}
