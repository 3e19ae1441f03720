use thiserror::Error;

use crate::format::Endianness;

pub type Result<T> = std::result::Result<T, ColorsError>;

#[derive(Debug, Error)]
pub enum ColorsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed ELF header: byte order marker {0:#04x} is neither little (1) nor big (2) endian")]
    MalformedHeader(u8),

    #[error("Executable is too short ({0} bytes) to carry an ELF header")]
    TruncatedHeader(usize),

    #[error("Unsupported variant: {0}")]
    UnsupportedVariant(String),

    #[error("Version {0} is not supported (only ncdu 1.x carries this theme table)")]
    UnsupportedVersion(String),

    #[error("Invalid version string: {0:?}")]
    InvalidVersion(String),

    #[error("Executable was not recognised as ncdu (version banner: {0:?})")]
    NotNcdu(String),

    #[error("Default config pattern not found ({endianness}, darkbg: {with_darkbg})")]
    PatternNotFound {
        endianness: Endianness,
        with_darkbg: bool,
    },

    #[error(
        "Cannot determine the config offset: the default pattern is missing (already patched?). \
         Supply an explicit offset or revert to the factory defaults first"
    )]
    OffsetUndetermined,

    #[error("Config block at offset {offset} needs {needed} bytes, but only {available} are available")]
    OutOfRange {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("A config holds 2 or 3 themes, got {0}")]
    InvalidThemeCount(usize),

    #[error("Key {key:?} is not a valid key for theme {theme:?}")]
    UnknownKey { theme: String, key: String },

    #[error("Theme {theme:?} is missing key {key:?}")]
    MissingKey { theme: String, key: String },

    #[error("Theme {theme:?} defines key {key:?} more than once")]
    DuplicateKey { theme: String, key: String },

    #[error("Unrecognized color name: {0:?}")]
    UnknownColor(String),

    #[error("Unrecognized attribute name: {0:?}")]
    UnknownAttribute(String),

    #[error("Attribute field {0:#010x} has a non-zero low byte (layout mismatch)")]
    AttributeLayout(u32),

    #[error(
        "Encoded config length mismatch at offset {offset}: on-disk block is {expected} bytes, \
         new block is {actual} bytes (theme count does not match the executable)"
    )]
    LengthMismatch {
        offset: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Executable changed on disk since it was loaded ({expected} bytes loaded, {actual} on disk)")]
    ExecutableChanged { expected: u64, actual: u64 },
}
