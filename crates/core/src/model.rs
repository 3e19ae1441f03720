use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::io::{Read, Write};
use std::path::PathBuf;

use crate::Result;

/// The human-editable JSON form of a [`crate::Config`].
///
/// Every field except `darkbg` must be present; `null` is spelled out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigDocument {
    #[serde(deserialize_with = "Option::deserialize")]
    pub ncdu: Option<PathBuf>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub offset: Option<usize>,
    pub off: ThemeDocument,
    pub dark: ThemeDocument,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub darkbg: Option<ThemeDocument>,
}

/// Key name to style entries, kept in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeDocument(pub Vec<(String, KeyDocument)>);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyDocument {
    #[serde(deserialize_with = "Option::deserialize")]
    pub fg: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub bg: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub a: Option<String>,
}

impl ConfigDocument {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Writes the document as JSON, indented by 4 spaces unless `compact`.
    pub fn write_json<W: Write>(&self, writer: W, compact: bool) -> Result<()> {
        if compact {
            serde_json::to_writer(writer, self)?;
        } else {
            let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
            let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
            self.serialize(&mut serializer)?;
        }
        Ok(())
    }

    pub fn to_json(&self, compact: bool) -> Result<String> {
        let mut buf = Vec::new();
        self.write_json(&mut buf, compact)?;
        // serde_json only ever emits UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Serialize for ThemeDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, key) in &self.0 {
            map.serialize_entry(name, key)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ThemeDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = ThemeDocument;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of key names to {fg, bg, a} objects")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, KeyDocument>()? {
                    entries.push(entry);
                }
                Ok(ThemeDocument(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "ncdu": "/usr/bin/ncdu",
        "offset": 1024,
        "off": { "sel": { "fg": null, "bg": null, "a": "Reverse" },
                 "default": { "fg": null, "bg": null, "a": null } },
        "dark": { "hd": { "fg": "Black", "bg": "Cyan", "a": null } }
    }"#;

    #[test]
    fn test_parse_keeps_entry_order() {
        let doc = ConfigDocument::from_json(SAMPLE).unwrap();
        assert_eq!(doc.ncdu, Some(PathBuf::from("/usr/bin/ncdu")));
        assert_eq!(doc.offset, Some(1024));
        assert!(doc.darkbg.is_none());

        let names: Vec<&str> = doc.off.0.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["sel", "default"]);
        assert_eq!(doc.off.0[0].1.a.as_deref(), Some("Reverse"));
        assert_eq!(doc.dark.0[0].1.bg.as_deref(), Some("Cyan"));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let extra_top = r#"{"ncdu": null, "offset": null, "off": {}, "dark": {}, "light": {}}"#;
        assert!(ConfigDocument::from_json(extra_top).is_err());

        let extra_key_field =
            r#"{"ncdu": null, "offset": null, "off": {"hd": {"fg": null, "bg": null, "a": null, "x": 1}}, "dark": {}}"#;
        assert!(ConfigDocument::from_json(extra_key_field).is_err());
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let missing_a = r#"{"ncdu": null, "offset": null, "off": {"hd": {"fg": "Red", "bg": null}}, "dark": {}}"#;
        let err = ConfigDocument::from_json(missing_a).unwrap_err();
        assert!(err.to_string().contains("missing field `a`"));

        let missing_bg = r#"{"ncdu": null, "offset": null, "off": {"hd": {"fg": "Red", "a": null}}, "dark": {}}"#;
        assert!(ConfigDocument::from_json(missing_bg).is_err());

        let missing_offset = r#"{"ncdu": null, "off": {}, "dark": {}}"#;
        let err = ConfigDocument::from_json(missing_offset).unwrap_err();
        assert!(err.to_string().contains("missing field `offset`"));

        let missing_ncdu = r#"{"offset": 12, "off": {}, "dark": {}}"#;
        assert!(ConfigDocument::from_json(missing_ncdu).is_err());

        // Explicit nulls are still accepted, and darkbg stays optional.
        let nulls = r#"{"ncdu": null, "offset": null, "off": {"hd": {"fg": null, "bg": null, "a": null}}, "dark": {}}"#;
        let doc = ConfigDocument::from_json(nulls).unwrap();
        assert_eq!(doc.off.0[0].1, KeyDocument::default());
        assert!(doc.darkbg.is_none());
    }

    #[test]
    fn test_compact_and_pretty_output() {
        let doc = ConfigDocument::from_json(SAMPLE).unwrap();

        let compact = doc.to_json(true).unwrap();
        assert!(!compact.contains('\n'));
        assert!(!compact.contains("darkbg"));
        assert!(compact.starts_with(r#"{"ncdu":"/usr/bin/ncdu","offset":1024,"off":{"sel":"#));

        let pretty = doc.to_json(false).unwrap();
        assert!(pretty.contains("\n    \"offset\": 1024"));
        assert_eq!(ConfigDocument::from_json(&pretty).unwrap(), doc);
    }
}
