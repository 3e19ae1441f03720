//! Factory theme table and the byte signatures used to find it.
//!
//! The defaults mirror the `C(...)` color table of ncdu 1.x. ncdu < 1.17 carries
//! only the `off` and `dark` columns; later 1.x releases append `darkbg`.

use log::debug;
use std::sync::LazyLock;

use crate::attribute::Attribute;
use crate::color::Color;
use crate::config::Config;
use crate::error::{ColorsError, Result};
use crate::format::{Endianness, KEY_COUNT, KeyName};
use crate::key::Key;
use crate::theme::{Theme, ThemeName};

const NONE: Color = Color::None;
const NO_ATTR: Attribute = Attribute::empty();
const BOLD: Attribute = Attribute::BOLD;
const REVERSE: Attribute = Attribute::REVERSE;

const fn k(fg: Color, bg: Color, a: Attribute) -> Key {
    Key::new(fg, bg, a)
}

/// `[off, dark, darkbg]` per key, in canonical key order.
const FACTORY: [[Key; 3]; KEY_COUNT] = [
    // default
    [k(NONE, NONE, NO_ATTR), k(NONE, NONE, NO_ATTR), k(NONE, Color::Black, NO_ATTR)],
    // box_title
    [k(NONE, NONE, BOLD), k(Color::Blue, NONE, BOLD), k(Color::Blue, Color::Black, BOLD)],
    // hd
    [k(NONE, NONE, REVERSE), k(Color::Black, Color::Cyan, NO_ATTR), k(Color::Black, Color::Cyan, NO_ATTR)],
    // sel
    [k(NONE, NONE, REVERSE), k(Color::White, Color::Green, BOLD), k(Color::White, Color::Green, BOLD)],
    // num
    [k(NONE, NONE, NO_ATTR), k(Color::Yellow, NONE, BOLD), k(Color::Yellow, Color::Black, BOLD)],
    // num_hd
    [k(NONE, NONE, REVERSE), k(Color::Yellow, Color::Cyan, BOLD), k(Color::Yellow, Color::Cyan, BOLD)],
    // num_sel
    [k(NONE, NONE, REVERSE), k(Color::Yellow, Color::Green, BOLD), k(Color::Yellow, Color::Green, BOLD)],
    // key
    [k(NONE, NONE, BOLD), k(Color::Yellow, NONE, BOLD), k(Color::Yellow, Color::Black, BOLD)],
    // key_hd
    [k(NONE, NONE, BOLD.union(REVERSE)), k(Color::Yellow, Color::Cyan, BOLD), k(Color::Yellow, Color::Cyan, BOLD)],
    // dir
    [k(NONE, NONE, NO_ATTR), k(Color::Blue, NONE, BOLD), k(Color::Blue, Color::Black, BOLD)],
    // dir_sel
    [k(NONE, NONE, REVERSE), k(Color::Blue, Color::Green, BOLD), k(Color::Blue, Color::Green, BOLD)],
    // flag
    [k(NONE, NONE, NO_ATTR), k(Color::Red, NONE, NO_ATTR), k(Color::Red, Color::Black, NO_ATTR)],
    // flag_sel
    [k(NONE, NONE, REVERSE), k(Color::Red, Color::Green, NO_ATTR), k(Color::Red, Color::Green, NO_ATTR)],
    // graph
    [k(NONE, NONE, NO_ATTR), k(Color::Magenta, NONE, NO_ATTR), k(Color::Magenta, Color::Black, NO_ATTR)],
    // graph_sel
    [k(NONE, NONE, REVERSE), k(Color::Magenta, Color::Green, NO_ATTR), k(Color::Magenta, Color::Green, NO_ATTR)],
];

fn factory_theme(name: ThemeName) -> Theme {
    let column = name as usize;
    let mut theme = Theme::new(name);
    for key in KeyName::ALL {
        theme.set(key, FACTORY[key.index()][column]);
    }
    theme
}

/// ncdu's built-in themes, without path or offset.
pub fn factory_config(with_darkbg: bool) -> Config {
    Config {
        executable: None,
        offset: None,
        off: factory_theme(ThemeName::Off),
        dark: factory_theme(ThemeName::Dark),
        darkbg: with_darkbg.then(|| factory_theme(ThemeName::DarkBg)),
    }
}

/// The factory block of one build variant, exactly as it appears in the executable.
#[derive(Debug, Clone)]
pub struct Signature {
    pub endianness: Endianness,
    pub with_darkbg: bool,
    pub bytes: Vec<u8>,
}

// Big-endian builds have not been sampled yet, so they have no entries.
const CATALOGUED: [(Endianness, bool); 2] =
    [(Endianness::Little, false), (Endianness::Little, true)];

static SIGNATURES: LazyLock<Vec<Signature>> = LazyLock::new(|| {
    CATALOGUED
        .into_iter()
        .filter_map(|(endianness, with_darkbg)| {
            // Factory keys never set reserved bits, so encoding cannot fail.
            let bytes = factory_config(with_darkbg).encode(endianness).ok()?;
            Some(Signature {
                endianness,
                with_darkbg,
                bytes,
            })
        })
        .collect()
});

pub fn signatures() -> &'static [Signature] {
    &SIGNATURES
}

pub fn signature(endianness: Endianness, with_darkbg: bool) -> Result<&'static Signature> {
    signatures()
        .iter()
        .find(|s| s.endianness == endianness && s.with_darkbg == with_darkbg)
        .ok_or_else(|| {
            ColorsError::UnsupportedVariant(format!(
                "no factory signature for {} executables (darkbg: {})",
                endianness, with_darkbg
            ))
        })
}

/// Finds the first occurrence of the factory block in `binary`.
pub fn find_default_offset(binary: &[u8], endianness: Endianness, with_darkbg: bool) -> Result<usize> {
    let pattern = &signature(endianness, with_darkbg)?.bytes;
    let found = binary
        .windows(pattern.len())
        .position(|window| window == pattern.as_slice());
    match found {
        Some(offset) => {
            debug!("Factory signature matched at offset {:#x}", offset);
            Ok(offset)
        }
        None => Err(ColorsError::PatternNotFound {
            endianness,
            with_darkbg,
        }),
    }
}

/// Factory defaults for a variant, decoded from its catalogued signature.
pub fn internal_default_config(endianness: Endianness, with_darkbg: bool) -> Result<Config> {
    let sig = signature(endianness, with_darkbg)?;
    let theme_count = if with_darkbg { 3 } else { 2 };
    let mut config = Config::decode_block(&sig.bytes, 0, theme_count, endianness)?;
    config.offset = None;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    #[test]
    fn test_catalogue_sizes() {
        assert_eq!(signature(Endianness::Little, false).unwrap().bytes.len(), 240);
        assert_eq!(signature(Endianness::Little, true).unwrap().bytes.len(), 360);
    }

    #[test]
    fn test_big_endian_is_not_catalogued() {
        for with_darkbg in [false, true] {
            let err = find_default_offset(&[0u8; 512], Endianness::Big, with_darkbg).unwrap_err();
            assert!(matches!(err, ColorsError::UnsupportedVariant(_)));
        }
    }

    #[test]
    fn test_signature_alone_is_found_at_zero() {
        for sig in signatures() {
            let offset = find_default_offset(&sig.bytes, sig.endianness, sig.with_darkbg).unwrap();
            assert_eq!(offset, 0);
        }
    }

    #[test]
    fn test_missing_signature() {
        let binary = vec![0xAAu8; 4096];
        let err = find_default_offset(&binary, Endianness::Little, true).unwrap_err();
        assert!(matches!(
            err,
            ColorsError::PatternNotFound { endianness: Endianness::Little, with_darkbg: true }
        ));
    }

    #[test]
    fn test_short_binary() {
        let err = find_default_offset(&[1, 2, 3], Endianness::Little, false).unwrap_err();
        assert!(matches!(err, ColorsError::PatternNotFound { .. }));
    }

    #[test]
    fn test_two_theme_pattern_is_not_a_prefix_of_three_theme_pattern() {
        let two = &signature(Endianness::Little, false).unwrap().bytes;
        let three = &signature(Endianness::Little, true).unwrap().bytes;
        assert!(find_default_offset(three, Endianness::Little, false).is_err());
        assert!(!three.starts_with(two));
    }

    #[test]
    fn test_internal_default_matches_factory_table() {
        let config = internal_default_config(Endianness::Little, true).unwrap();
        assert!(config.same_themes(&factory_config(true)));
        assert_eq!(config.offset, None);

        let hd = config.dark.get(KeyName::Hd);
        assert_eq!(*hd, Key::new(Color::Black, Color::Cyan, Attribute::empty()));
        let key_hd = config.off.get(KeyName::KeyHd);
        assert_eq!(key_hd.attributes, Attribute::BOLD | Attribute::REVERSE);
    }

    proptest! {
        #[test]
        fn signature_is_found_where_embedded(
            prefix in vec(0u8..=0xFE, 0..512),
            suffix in vec(any::<u8>(), 0..512),
            with_darkbg in any::<bool>(),
        ) {
            // 0xFF never appears in the prefix, and every signature starts with 0xFF,
            // so no earlier (partial) match is possible.
            let sig = signature(Endianness::Little, with_darkbg).unwrap();
            let mut binary = prefix.clone();
            binary.extend_from_slice(&sig.bytes);
            binary.extend_from_slice(&suffix);

            let offset = find_default_offset(&binary, Endianness::Little, with_darkbg).unwrap();
            prop_assert_eq!(offset, prefix.len());
        }
    }
}
