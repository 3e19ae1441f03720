use std::fmt;

use crate::error::{ColorsError, Result};
use crate::format::{DARKBG_SINCE, UNSUPPORTED_SINCE};

/// An ncdu release number as printed by `ncdu --version`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub parts: Vec<u32>,
}

impl Version {
    /// Parses a banner such as `"ncdu 1.17"` or `"ncdu 1.15.1-rc1"`.
    pub fn from_banner(banner: &str) -> Result<Self> {
        let mut words = banner.split_whitespace();
        let (Some("ncdu"), Some(raw)) = (words.next(), words.next()) else {
            return Err(ColorsError::NotNcdu(banner.trim().to_string()));
        };
        let version = Self::parse(raw)?;
        if version.major_minor() >= UNSUPPORTED_SINCE {
            return Err(ColorsError::UnsupportedVersion(raw.to_string()));
        }
        Ok(version)
    }

    /// Parses `"1.18.1"`; anything after the first `-` is ignored.
    pub fn parse(raw: &str) -> Result<Self> {
        let numeric = raw.split('-').next().unwrap_or_default();
        let parts = numeric
            .split('.')
            .map(|p| p.parse::<u32>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| ColorsError::InvalidVersion(raw.to_string()))?;
        Ok(Self { parts })
    }

    pub fn major_minor(&self) -> (u32, u32) {
        (
            self.parts.first().copied().unwrap_or(0),
            self.parts.get(1).copied().unwrap_or(0),
        )
    }

    pub fn supports_darkbg(&self) -> bool {
        self.major_minor() >= DARKBG_SINCE
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.parts.iter().map(u32::to_string).collect();
        f.write_str(&parts.join("."))
    }
}
