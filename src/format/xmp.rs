//! XMP metadata packet carrying the embedded vocabulary snapshot.
//!
//! The snapshot is the compact JSON form of the [`Collection`], XML-escaped
//! and placed as the text of a single custom element:
//!
//! ```xml
//! <custom:vocabularyData>{&quot;Animals&quot;:...}</custom:vocabularyData>
//! ```
//!
//! Decoding scans raw document bytes for that element, so the packet must be
//! stored uncompressed.
//!
//! Decoding reverses the entities in a fixed order starting with `&amp;`.
//! That order would turn a literal `&lt;` inside a word back into `<`, so the
//! snapshot JSON writes `&` inside strings as `\u0026`. The escaped text then
//! holds `&` only at entity starts and the unescape is exact.

use std::io;

use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use serde::Serialize;

use crate::format::error::FormatError;
use crate::model::Collection;

/// Namespace of the custom snapshot element.
pub const VOCABULARY_NAMESPACE: &str = "http://vocabulary-manager.local/";

/// Qualified name of the custom snapshot element.
pub const VOCABULARY_TAG: &str = "custom:vocabularyData";

const START_DELIMITER: &[u8] = b"<custom:vocabularyData>";
const END_DELIMITER: &[u8] = b"</custom:vocabularyData>";

/// Entities reversed on decode. `&amp;` comes first.
const ENTITIES: [(&str, &str); 5] = [
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&apos;", "'"),
];

/// Compact JSON with `&` in strings written as a unicode escape.
struct SnapshotFormatter;

impl serde_json::ser::Formatter for SnapshotFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut parts = fragment.split('&');
        if let Some(first) = parts.next() {
            writer.write_all(first.as_bytes())?;
        }
        for part in parts {
            writer.write_all(b"\\u0026")?;
            writer.write_all(part.as_bytes())?;
        }
        Ok(())
    }
}

/// Canonical string form of a collection.
pub fn snapshot_json(collection: &Collection) -> Result<String, FormatError> {
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, SnapshotFormatter);
    collection.serialize(&mut serializer)?;
    String::from_utf8(out).map_err(|_| FormatError::invalid_format("Invalid UTF-8 in snapshot"))
}

/// Build the XMP packet embedding `collection`.
pub fn build_packet(collection: &Collection) -> Result<Vec<u8>, FormatError> {
    let json = snapshot_json(collection)?;
    let escaped = escape(json.as_str());

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write(
        &mut writer,
        Event::Start(BytesStart::new("x:xmpmeta").with_attributes([("xmlns:x", "adobe:ns:meta/")])),
    )?;
    write(
        &mut writer,
        Event::Start(BytesStart::new("rdf:RDF").with_attributes([(
            "xmlns:rdf",
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        )])),
    )?;
    write(
        &mut writer,
        Event::Start(
            BytesStart::new("rdf:Description")
                .with_attributes([("rdf:about", ""), ("xmlns:custom", VOCABULARY_NAMESPACE)]),
        ),
    )?;
    write(&mut writer, Event::Start(BytesStart::new(VOCABULARY_TAG)))?;
    write(&mut writer, Event::Text(BytesText::from_escaped(escaped)))?;
    write(&mut writer, Event::End(BytesEnd::new(VOCABULARY_TAG)))?;
    write(&mut writer, Event::End(BytesEnd::new("rdf:Description")))?;
    write(&mut writer, Event::End(BytesEnd::new("rdf:RDF")))?;
    write(&mut writer, Event::End(BytesEnd::new("x:xmpmeta")))?;

    Ok(writer.into_inner())
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), FormatError> {
    writer
        .write_event(event)
        .map_err(|e| FormatError::Xml(e.into()))
}

/// Locate the escaped snapshot text inside arbitrary document bytes.
pub fn find_snapshot(bytes: &[u8]) -> Option<&[u8]> {
    let start = find(bytes, START_DELIMITER, 0)? + START_DELIMITER.len();
    let end = find(bytes, END_DELIMITER, start)?;
    Some(&bytes[start..end])
}

fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + from)
}

/// Reverse the five XML entities, ampersand first.
pub fn unescape_entities(text: &str) -> String {
    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, ch)| acc.replace(entity, ch))
}

/// Recover the collection embedded in document bytes.
pub fn extract_collection(bytes: &[u8]) -> Result<Collection, FormatError> {
    let raw = find_snapshot(bytes).ok_or(FormatError::UnsupportedDocument)?;
    let text = std::str::from_utf8(raw)
        .map_err(|e| FormatError::malformed(format!("snapshot is not valid UTF-8: {}", e)))?;
    let json = unescape_entities(text);
    serde_json::from_str(&json).map_err(|e| FormatError::malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Word};

    fn sample() -> Collection {
        let mut collection = Collection::new();
        collection.insert(
            "Tom & Jerry's <pets>",
            Category::new("#123456", 1).with_words(vec![
                Word::new("\"quoted\"", "entre comillas").with_examples(["a < b && c > d"]),
            ]),
        );
        collection.insert("Empty", Category::new("#000000", 0));
        collection
    }

    #[test]
    fn test_packet_roundtrip() {
        let collection = sample();
        let packet = build_packet(&collection).unwrap();
        assert_eq!(extract_collection(&packet).unwrap(), collection);
    }

    #[test]
    fn test_packet_contains_no_raw_markup_in_snapshot() {
        let packet = build_packet(&sample()).unwrap();
        let snapshot = std::str::from_utf8(find_snapshot(&packet).unwrap()).unwrap();
        assert!(!snapshot.contains('<'));
        assert!(!snapshot.contains('>'));
        assert!(!snapshot.contains('"'));
        assert!(!snapshot.contains('\''));
        assert!(!snapshot.contains("&amp;"));
        assert!(snapshot.contains("\\u0026"));
    }

    #[test]
    fn test_entity_lookalikes_survive() {
        let mut collection = Collection::new();
        collection.insert(
            "&lt;tag&gt; &amp; &quot;",
            Category::default().with_words(vec![Word::new("&apos;", "&amp;lt;")]),
        );
        let packet = build_packet(&collection).unwrap();
        assert_eq!(extract_collection(&packet).unwrap(), collection);
    }

    #[test]
    fn test_snapshot_json_parses_as_plain_json() {
        let collection = sample();
        let json = snapshot_json(&collection).unwrap();
        let parsed: Collection = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, collection);
    }

    #[test]
    fn test_unescape_ampersand_first() {
        // Fixed order: a doubly escaped "&amp;lt;" collapses all the way to "<".
        assert_eq!(unescape_entities("&amp;lt;"), "<");
        assert_eq!(unescape_entities("&lt;b&gt; &quot;x&quot; &apos;y&apos;"), "<b> \"x\" 'y'");
    }

    #[test]
    fn test_missing_delimiters() {
        let err = extract_collection(b"%PDF-1.7 nothing here").unwrap_err();
        assert!(err.is_unsupported_document());

        let err = extract_collection(b"<custom:vocabularyData>{}").unwrap_err();
        assert!(err.is_unsupported_document());
    }

    #[test]
    fn test_unparseable_snapshot_is_malformed() {
        let err =
            extract_collection(b"<custom:vocabularyData>not json</custom:vocabularyData>").unwrap_err();
        assert!(err.is_malformed());
    }
}
