pub mod attribute;
pub mod color;
pub mod config;
pub mod error;
pub mod executable;
pub mod format;
pub mod key;
pub mod model;
pub mod patch;
pub mod signature;
pub mod theme;
pub mod version;

pub use attribute::Attribute;
pub use color::Color;
pub use config::Config;
pub use error::{ColorsError, Result};
pub use executable::Executable;
pub use format::{Endianness, KeyName, NameParsing};
pub use key::Key;
pub use model::{ConfigDocument, KeyDocument, ThemeDocument};
pub use patch::{PatchOutcome, Patcher};
pub use signature::{factory_config, find_default_offset, internal_default_config};
pub use theme::{Theme, ThemeName};
pub use version::Version;
