use bitflags::bitflags;
use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::{ColorsError, Result};
use crate::format::{Endianness, NameParsing};

/// Bits of the attribute field that this table never uses.
pub const RESERVED_MASK: u32 = 0xFF;

bitflags! {
    /// curses `attr_t` display attributes (`NCURSES_BITS(1, 8)` onward).
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Attribute: u32 {
        const STANDOUT   = 1 << 16;
        const UNDERLINE  = 1 << 17;
        const REVERSE    = 1 << 18;
        const BLINK      = 1 << 19;
        const DIM        = 1 << 20;
        const BOLD       = 1 << 21;
        const ALTCHARSET = 1 << 22;
        const INVISIBLE  = 1 << 23;
        const PROTECT    = 1 << 24;
        const HORIZONTAL = 1 << 25;
        const LEFT       = 1 << 26;
        const LOW        = 1 << 27;
        const RIGHT      = 1 << 28;
        const TOP        = 1 << 29;
        const VERTICAL   = 1 << 30;
    }
}

impl Attribute {
    pub fn encode(self, endianness: Endianness) -> Result<[u8; 4]> {
        if self.bits() & RESERVED_MASK != 0 {
            return Err(ColorsError::AttributeLayout(self.bits()));
        }
        let mut buf = [0u8; 4];
        match endianness {
            Endianness::Little => LittleEndian::write_u32(&mut buf, self.bits()),
            Endianness::Big => BigEndian::write_u32(&mut buf, self.bits()),
        }
        Ok(buf)
    }

    /// Bits outside the named flags are kept as-is; only the reserved low
    /// byte is rejected.
    pub fn decode(bytes: [u8; 4], endianness: Endianness) -> Result<Self> {
        let raw = match endianness {
            Endianness::Little => LittleEndian::read_u32(&bytes),
            Endianness::Big => BigEndian::read_u32(&bytes),
        };
        if raw & RESERVED_MASK != 0 {
            return Err(ColorsError::AttributeLayout(raw));
        }
        Ok(Attribute::from_bits_retain(raw))
    }

    /// `"Bold + Reverse"`, or `None` when no named flag is set.
    pub fn names(self) -> Option<String> {
        let names: Vec<String> = self.iter_names().map(|(name, _)| capitalize(name)).collect();
        if names.is_empty() {
            None
        } else {
            Some(names.join(" + "))
        }
    }

    /// Parses a `+`-joined, case-insensitive list of flag names.
    pub fn from_names(names: Option<&str>, parsing: NameParsing) -> Result<Self> {
        let Some(names) = names else {
            return Ok(Attribute::empty());
        };
        let mut attribute = Attribute::empty();
        for token in names.split('+').map(str::trim) {
            if token.is_empty() || token.eq_ignore_ascii_case("none") {
                continue;
            }
            match Attribute::from_name(&token.to_ascii_uppercase()) {
                Some(flag) => attribute |= flag,
                None if parsing == NameParsing::Lenient => {}
                None => return Err(ColorsError::UnknownAttribute(token.to_string())),
            }
        }
        Ok(attribute)
    }
}

fn capitalize(name: &str) -> String {
    let lower = name.to_ascii_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
