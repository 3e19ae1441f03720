use std::fmt;

use crate::format::{KEY_COUNT, KeyName};
use crate::key::Key;

/// ncdu's theme slots, in the order their records interleave on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThemeName {
    Off,
    Dark,
    DarkBg,
}

impl ThemeName {
    pub const ALL: [ThemeName; 3] = [ThemeName::Off, ThemeName::Dark, ThemeName::DarkBg];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Off => "off",
            ThemeName::Dark => "dark",
            ThemeName::DarkBg => "darkbg",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named theme holding one style record per key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: ThemeName,
    keys: [Key; KEY_COUNT],
}

impl Theme {
    /// A theme with every key at the terminal defaults.
    pub fn new(name: ThemeName) -> Self {
        Self {
            name,
            keys: [Key::default(); KEY_COUNT],
        }
    }

    pub fn from_keys(name: ThemeName, keys: [Key; KEY_COUNT]) -> Self {
        Self { name, keys }
    }

    pub fn name(&self) -> ThemeName {
        self.name
    }

    pub fn get(&self, key: KeyName) -> &Key {
        &self.keys[key.index()]
    }

    pub fn set(&mut self, key: KeyName, value: Key) {
        self.keys[key.index()] = value;
    }

    /// Keys in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (KeyName, &Key)> {
        KeyName::ALL.into_iter().zip(self.keys.iter())
    }
}
