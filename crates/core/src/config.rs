use log::debug;
use std::path::PathBuf;

use crate::attribute::Attribute;
use crate::color::Color;
use crate::error::{ColorsError, Result};
use crate::format::{Endianness, KEY_COUNT, KEY_RECORD_SIZE, KeyName, NameParsing};
use crate::key::Key;
use crate::model::{ConfigDocument, KeyDocument, ThemeDocument};
use crate::theme::{Theme, ThemeName};

/// The full theme table of one executable.
///
/// On the wire the table is key-major: for each key in canonical order, the
/// record of every theme follows in `off, dark[, darkbg]` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub executable: Option<PathBuf>,
    pub offset: Option<usize>,
    pub off: Theme,
    pub dark: Theme,
    pub darkbg: Option<Theme>,
}

impl Config {
    /// Size in bytes of a table holding `theme_count` themes.
    pub fn block_len(theme_count: usize) -> usize {
        KEY_COUNT * theme_count * KEY_RECORD_SIZE
    }

    pub fn theme_count(&self) -> usize {
        if self.darkbg.is_some() { 3 } else { 2 }
    }

    pub fn themes(&self) -> impl Iterator<Item = &Theme> {
        [&self.off, &self.dark].into_iter().chain(self.darkbg.as_ref())
    }

    /// True when both configs hold the same themes, ignoring path and offset.
    pub fn same_themes(&self, other: &Config) -> bool {
        self.off == other.off && self.dark == other.dark && self.darkbg == other.darkbg
    }

    pub fn encode(&self, endianness: Endianness) -> Result<Vec<u8>> {
        let mut block = Vec::with_capacity(Self::block_len(self.theme_count()));
        for key in KeyName::ALL {
            for theme in self.themes() {
                block.extend_from_slice(&theme.get(key).encode(endianness)?);
            }
        }
        Ok(block)
    }

    /// Decodes `theme_count` interleaved themes starting at `offset`.
    pub fn decode_block(
        bytes: &[u8],
        offset: usize,
        theme_count: usize,
        endianness: Endianness,
    ) -> Result<Self> {
        if !(2..=3).contains(&theme_count) {
            return Err(ColorsError::InvalidThemeCount(theme_count));
        }
        let needed = Self::block_len(theme_count);
        let block = offset
            .checked_add(needed)
            .and_then(|end| bytes.get(offset..end))
            .ok_or(ColorsError::OutOfRange {
                offset,
                needed,
                available: bytes.len().saturating_sub(offset),
            })?;
        debug!(
            "Decoding {} themes ({} bytes, {}) at offset {:#x}",
            theme_count, needed, endianness, offset
        );

        let mut themes: Vec<Theme> = ThemeName::ALL[..theme_count]
            .iter()
            .map(|&name| Theme::new(name))
            .collect();

        for (record, chunk) in block.chunks_exact(KEY_RECORD_SIZE).enumerate() {
            let key = KeyName::ALL[record / theme_count];
            let theme = &mut themes[record % theme_count];
            let mut raw = [0u8; KEY_RECORD_SIZE];
            raw.copy_from_slice(chunk);
            theme.set(key, Key::decode(&raw, endianness)?);
        }

        let mut themes = themes.into_iter();
        let (Some(off), Some(dark)) = (themes.next(), themes.next()) else {
            return Err(ColorsError::InvalidThemeCount(theme_count));
        };
        Ok(Self {
            executable: None,
            offset: Some(offset),
            off,
            dark,
            darkbg: themes.next(),
        })
    }

    pub fn from_document(doc: &ConfigDocument, parsing: NameParsing) -> Result<Self> {
        Ok(Self {
            executable: doc.ncdu.clone(),
            offset: doc.offset,
            off: theme_from_document(ThemeName::Off, &doc.off, parsing)?,
            dark: theme_from_document(ThemeName::Dark, &doc.dark, parsing)?,
            darkbg: doc
                .darkbg
                .as_ref()
                .map(|t| theme_from_document(ThemeName::DarkBg, t, parsing))
                .transpose()?,
        })
    }

    pub fn to_document(&self) -> ConfigDocument {
        ConfigDocument {
            ncdu: self.executable.clone(),
            offset: self.offset,
            off: theme_to_document(&self.off),
            dark: theme_to_document(&self.dark),
            darkbg: self.darkbg.as_ref().map(theme_to_document),
        }
    }
}

fn theme_from_document(name: ThemeName, doc: &ThemeDocument, parsing: NameParsing) -> Result<Theme> {
    let mut keys: [Option<Key>; KEY_COUNT] = [None; KEY_COUNT];
    for (raw_name, key_doc) in &doc.0 {
        let key_name = KeyName::from_name(raw_name.trim()).ok_or_else(|| ColorsError::UnknownKey {
            theme: name.to_string(),
            key: raw_name.clone(),
        })?;
        let slot = &mut keys[key_name.index()];
        if slot.is_some() {
            return Err(ColorsError::DuplicateKey {
                theme: name.to_string(),
                key: key_name.to_string(),
            });
        }
        *slot = Some(key_from_document(key_doc, parsing)?);
    }

    let mut theme = Theme::new(name);
    for key_name in KeyName::ALL {
        let key = keys[key_name.index()].ok_or_else(|| ColorsError::MissingKey {
            theme: name.to_string(),
            key: key_name.to_string(),
        })?;
        theme.set(key_name, key);
    }
    Ok(theme)
}

fn key_from_document(doc: &KeyDocument, parsing: NameParsing) -> Result<Key> {
    Ok(Key::new(
        Color::from_name(doc.fg.as_deref(), parsing)?,
        Color::from_name(doc.bg.as_deref(), parsing)?,
        Attribute::from_names(doc.a.as_deref(), parsing)?,
    ))
}

fn theme_to_document(theme: &Theme) -> ThemeDocument {
    ThemeDocument(
        theme
            .iter()
            .map(|(name, key)| {
                let doc = KeyDocument {
                    fg: key.fg.name().map(str::to_string),
                    bg: key.bg.name().map(str::to_string),
                    a: key.attributes.names(),
                };
                (name.to_string(), doc)
            })
            .collect(),
    )
}

#[cfg(test)]
pub(crate) mod strategies {
    use super::*;
    use crate::key::strategies::key;
    use proptest::collection::vec;
    use proptest::prelude::*;

    fn theme(name: ThemeName) -> impl Strategy<Value = Theme> {
        vec(key(), KEY_COUNT).prop_map(move |keys| {
            let mut theme = Theme::new(name);
            for (k, v) in KeyName::ALL.into_iter().zip(keys) {
                theme.set(k, v);
            }
            theme
        })
    }

    pub fn config() -> impl Strategy<Value = Config> {
        (
            theme(ThemeName::Off),
            theme(ThemeName::Dark),
            proptest::option::of(theme(ThemeName::DarkBg)),
        )
            .prop_map(|(off, dark, darkbg)| Config {
                executable: None,
                offset: Some(0),
                off,
                dark,
                darkbg,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::strategies::endianness;
    use proptest::prelude::*;

    fn blank(with_darkbg: bool) -> Config {
        Config {
            executable: None,
            offset: None,
            off: Theme::new(ThemeName::Off),
            dark: Theme::new(ThemeName::Dark),
            darkbg: with_darkbg.then(|| Theme::new(ThemeName::DarkBg)),
        }
    }

    #[test]
    fn test_all_default_two_theme_block() {
        let config = blank(false);
        let bytes = config.encode(Endianness::Little).unwrap();
        assert_eq!(bytes.len(), 240);
        for record in bytes.chunks_exact(KEY_RECORD_SIZE) {
            assert_eq!(record, [0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0]);
        }

        let decoded = Config::decode_block(&bytes, 0, 2, Endianness::Little).unwrap();
        assert!(decoded.darkbg.is_none());
        for theme in decoded.themes() {
            for (_, key) in theme.iter() {
                assert_eq!(key.fg, Color::None);
                assert_eq!(key.bg, Color::None);
                assert_eq!(key.attributes, Attribute::empty());
            }
        }
    }

    #[test]
    fn test_layout_is_key_major() {
        let mut config = blank(true);
        config
            .dark
            .set(KeyName::BoxTitle, Key::new(Color::Blue, Color::None, Attribute::BOLD));
        let bytes = config.encode(Endianness::Little).unwrap();
        assert_eq!(bytes.len(), Config::block_len(3));

        // Record 4 = key 1 (box_title), theme 1 (dark).
        let record = &bytes[4 * KEY_RECORD_SIZE..5 * KEY_RECORD_SIZE];
        assert_eq!(record, [0x04, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0x20, 0x00]);
    }

    #[test]
    fn test_decode_block_out_of_range() {
        let bytes = vec![0u8; 300];
        let err = Config::decode_block(&bytes, 100, 2, Endianness::Little).unwrap_err();
        assert!(matches!(
            err,
            ColorsError::OutOfRange { offset: 100, needed: 240, available: 200 }
        ));
        let err = Config::decode_block(&bytes, usize::MAX, 2, Endianness::Little).unwrap_err();
        assert!(matches!(err, ColorsError::OutOfRange { available: 0, .. }));
    }

    #[test]
    fn test_decode_block_rejects_theme_count() {
        let bytes = vec![0u8; 1024];
        for count in [0, 1, 4] {
            let err = Config::decode_block(&bytes, 0, count, Endianness::Little).unwrap_err();
            assert!(matches!(err, ColorsError::InvalidThemeCount(c) if c == count));
        }
    }

    #[test]
    fn test_document_roundtrip() {
        let mut config = blank(false);
        config.executable = Some(PathBuf::from("/usr/bin/ncdu"));
        config.offset = Some(0x1234);
        config.off.set(
            KeyName::KeyHd,
            Key::new(Color::None, Color::None, Attribute::BOLD | Attribute::REVERSE),
        );

        let doc = config.to_document();
        let (name, key_hd) = &doc.off.0[KeyName::KeyHd.index()];
        assert_eq!(name, "key_hd");
        assert_eq!(key_hd.a.as_deref(), Some("Reverse + Bold"));

        let parsed = Config::from_document(&doc, NameParsing::Strict).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_document_key_set_is_validated() {
        let mut doc = blank(false).to_document();
        doc.dark.0.pop();
        let err = Config::from_document(&doc, NameParsing::Strict).unwrap_err();
        assert!(matches!(err, ColorsError::MissingKey { ref theme, ref key } if theme == "dark" && key == "graph_sel"));

        let mut doc = blank(false).to_document();
        doc.off.0.push(("footer".into(), KeyDocument::default()));
        let err = Config::from_document(&doc, NameParsing::Strict).unwrap_err();
        assert!(matches!(err, ColorsError::UnknownKey { ref key, .. } if key == "footer"));

        let mut doc = blank(false).to_document();
        doc.off.0.push(("HD".into(), KeyDocument::default()));
        let err = Config::from_document(&doc, NameParsing::Strict).unwrap_err();
        assert!(matches!(err, ColorsError::DuplicateKey { ref key, .. } if key == "hd"));
    }

    #[test]
    fn test_document_key_names_ignore_case() {
        let mut doc = blank(false).to_document();
        for (name, _) in doc.off.0.iter_mut() {
            *name = name.to_uppercase();
        }
        assert!(Config::from_document(&doc, NameParsing::Strict).is_ok());
    }

    proptest! {
        #[test]
        fn block_roundtrips(config in strategies::config(), order in endianness()) {
            let bytes = config.encode(order).expect("encode");
            prop_assert_eq!(bytes.len(), Config::block_len(config.theme_count()));

            let decoded = Config::decode_block(&bytes, 0, config.theme_count(), order).expect("decode");
            prop_assert!(decoded.same_themes(&config));
        }
    }
}
