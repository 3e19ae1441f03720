use crate::attribute::Attribute;
use crate::color::Color;
use crate::error::Result;
use crate::format::{Endianness, KEY_RECORD_SIZE};

/// One style record: `{ short fg, bg; int attr; }`, packed to 8 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Key {
    pub fg: Color,
    pub bg: Color,
    pub attributes: Attribute,
}

impl Key {
    pub const fn new(fg: Color, bg: Color, attributes: Attribute) -> Self {
        Self { fg, bg, attributes }
    }

    pub fn decode(bytes: &[u8; KEY_RECORD_SIZE], endianness: Endianness) -> Result<Self> {
        Ok(Self {
            fg: Color::decode([bytes[0], bytes[1]], endianness),
            bg: Color::decode([bytes[2], bytes[3]], endianness),
            attributes: Attribute::decode([bytes[4], bytes[5], bytes[6], bytes[7]], endianness)?,
        })
    }

    pub fn encode(&self, endianness: Endianness) -> Result<[u8; KEY_RECORD_SIZE]> {
        let mut record = [0u8; KEY_RECORD_SIZE];
        record[0..2].copy_from_slice(&self.fg.encode(endianness));
        record[2..4].copy_from_slice(&self.bg.encode(endianness));
        record[4..8].copy_from_slice(&self.attributes.encode(endianness)?);
        Ok(record)
    }
}


#[cfg(test)]
mod tests {
    use super::strategies;
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_record_layout() {
        let key = Key::new(Color::Yellow, Color::Cyan, Attribute::BOLD);
        assert_eq!(
            key.encode(Endianness::Little).unwrap(),
            [0x03, 0x00, 0x06, 0x00, 0x00, 0x00, 0x20, 0x00]
        );
        assert_eq!(
            key.encode(Endianness::Big).unwrap(),
            [0x00, 0x03, 0x00, 0x06, 0x00, 0x20, 0x00, 0x00]
        );
    }

    #[test]
    fn test_default_key() {
        let bytes = Key::default().encode(Endianness::Little).unwrap();
        assert_eq!(bytes, [0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0]);
        assert_eq!(
            Key::decode(&bytes, Endianness::Little).unwrap(),
            Key::new(Color::None, Color::None, Attribute::empty())
        );
    }

    proptest! {
        #[test]
        fn key_roundtrips_in_both_byte_orders(key in strategies::key(), order in strategies::endianness()) {
            let bytes = key.encode(order).expect("encode");
            let decoded = Key::decode(&bytes, order).expect("decode");
            prop_assert_eq!(decoded, key);
        }
    }
}
