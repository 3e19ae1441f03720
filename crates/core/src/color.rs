use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::{ColorsError, Result};
use crate::format::{Endianness, NameParsing};

/// Wire value curses uses for "terminal default color".
pub const COLOR_DEFAULT: i16 = -1;

/// A curses color as stored in the theme table (`short`).
///
/// `Unknown` keeps whatever raw value was found in the binary so that an
/// untouched record re-encodes byte for byte. At the document layer it is
/// rendered like `None` (null), which is where the two become indistinguishable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    #[default]
    None,
    Unknown(i16),
}

impl Color {
    pub const NAMED: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    pub fn from_code(code: i16) -> Self {
        match code {
            0 => Color::Black,
            1 => Color::Red,
            2 => Color::Green,
            3 => Color::Yellow,
            4 => Color::Blue,
            5 => Color::Magenta,
            6 => Color::Cyan,
            7 => Color::White,
            COLOR_DEFAULT => Color::None,
            other => Color::Unknown(other),
        }
    }

    pub fn code(self) -> i16 {
        match self {
            Color::Black => 0,
            Color::Red => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Blue => 4,
            Color::Magenta => 5,
            Color::Cyan => 6,
            Color::White => 7,
            Color::None => COLOR_DEFAULT,
            Color::Unknown(raw) => raw,
        }
    }

    pub fn encode(self, endianness: Endianness) -> [u8; 2] {
        let mut buf = [0u8; 2];
        match endianness {
            Endianness::Little => LittleEndian::write_i16(&mut buf, self.code()),
            Endianness::Big => BigEndian::write_i16(&mut buf, self.code()),
        }
        buf
    }

    pub fn decode(bytes: [u8; 2], endianness: Endianness) -> Self {
        let code = match endianness {
            Endianness::Little => LittleEndian::read_i16(&bytes),
            Endianness::Big => BigEndian::read_i16(&bytes),
        };
        Color::from_code(code)
    }

    /// Capitalised name, or `None` for the default and unknown colors.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Color::Black => Some("Black"),
            Color::Red => Some("Red"),
            Color::Green => Some("Green"),
            Color::Yellow => Some("Yellow"),
            Color::Blue => Some("Blue"),
            Color::Magenta => Some("Magenta"),
            Color::Cyan => Some("Cyan"),
            Color::White => Some("White"),
            Color::None | Color::Unknown(_) => None,
        }
    }

    /// Parses a document value. `null` and `"none"` are the default color.
    pub fn from_name(name: Option<&str>, parsing: NameParsing) -> Result<Self> {
        let Some(name) = name.map(str::trim) else {
            return Ok(Color::None);
        };
        if name.eq_ignore_ascii_case("none") {
            return Ok(Color::None);
        }
        if let Some(color) = Color::NAMED
            .into_iter()
            .find(|c| c.name().is_some_and(|n| n.eq_ignore_ascii_case(name)))
        {
            return Ok(color);
        }
        match parsing {
            NameParsing::Strict => Err(ColorsError::UnknownColor(name.to_string())),
            NameParsing::Lenient => Ok(Color::Unknown(COLOR_DEFAULT)),
        }
    }
}
