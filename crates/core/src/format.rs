use serde::{Deserialize, Serialize};
use std::fmt;

/// Size of one packed style record: `i16` fg, `i16` bg, `u32` attributes.
pub const KEY_RECORD_SIZE: usize = 8;

/// Number of style keys every theme carries.
pub const KEY_COUNT: usize = 15;

/// ELF `e_ident[EI_DATA]`: 1 = little endian, 2 = big endian.
pub const ELF_DATA_OFFSET: usize = 5;
pub const ELF_DATA_LSB: u8 = 1;
pub const ELF_DATA_MSB: u8 = 2;

/// First ncdu release with the `darkbg` theme.
pub const DARKBG_SINCE: (u32, u32) = (1, 17);
/// First ncdu release with a structurally different (unsupported) theme table.
pub const UNSUPPORTED_SINCE: (u32, u32) = (2, 0);

/// Byte order of the target executable; named to stay clear of `byteorder::ByteOrder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    pub fn from_elf_data(marker: u8) -> Option<Self> {
        match marker {
            ELF_DATA_LSB => Some(Endianness::Little),
            ELF_DATA_MSB => Some(Endianness::Big),
            _ => None,
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endianness::Little => "little-endian",
            Endianness::Big => "big-endian",
        })
    }
}

/// How color and attribute names from a config document are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameParsing {
    /// Unrecognised names are errors.
    #[default]
    Strict,
    /// Unrecognised color names become `Color::Unknown`, unrecognised attribute
    /// tokens contribute no attribute.
    Lenient,
}

/// The 15 style keys in the order they are laid out in the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyName {
    Default,
    BoxTitle,
    Hd,
    Sel,
    Num,
    NumHd,
    NumSel,
    Key,
    KeyHd,
    Dir,
    DirSel,
    Flag,
    FlagSel,
    Graph,
    GraphSel,
}

impl KeyName {
    pub const ALL: [KeyName; KEY_COUNT] = [
        KeyName::Default,
        KeyName::BoxTitle,
        KeyName::Hd,
        KeyName::Sel,
        KeyName::Num,
        KeyName::NumHd,
        KeyName::NumSel,
        KeyName::Key,
        KeyName::KeyHd,
        KeyName::Dir,
        KeyName::DirSel,
        KeyName::Flag,
        KeyName::FlagSel,
        KeyName::Graph,
        KeyName::GraphSel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            KeyName::Default => "default",
            KeyName::BoxTitle => "box_title",
            KeyName::Hd => "hd",
            KeyName::Sel => "sel",
            KeyName::Num => "num",
            KeyName::NumHd => "num_hd",
            KeyName::NumSel => "num_sel",
            KeyName::Key => "key",
            KeyName::KeyHd => "key_hd",
            KeyName::Dir => "dir",
            KeyName::DirSel => "dir_sel",
            KeyName::Flag => "flag",
            KeyName::FlagSel => "flag_sel",
            KeyName::Graph => "graph",
            KeyName::GraphSel => "graph_sel",
        }
    }

    /// Case-insensitive lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        KeyName::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(name))
    }

    /// Position of this key in the canonical (on-wire) order.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
