//! Field descriptors: where raw tag strings come from
//!
//! The parser only needs "given a tag name, give me the annotation string".
//! [`TagSource`] captures that, so any metadata mechanism can feed it: a
//! plain map, or a [`FieldTags`] string in the conventional
//! `json:"name,omitempty" db:"col=id"` layout.

use regex::Regex;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

/// Something that can look up a field's annotation by tag name
pub trait TagSource {
    /// The raw annotation under `name`, or `None` if the field has none
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl TagSource for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|s| Cow::Borrowed(s.as_str()))
    }
}

impl TagSource for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|s| Cow::Borrowed(s.as_str()))
    }
}

/// One `name:"value"` pair at the start of the input, after optional spaces.
/// Names exclude spaces, control characters, quotes and colons.
fn pair_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r#"(?s)^ *([^\x00-\x20\x7f:"]+):"((?:[^"\\]|\\.)*)""#).unwrap()
    })
}

/// The full annotation string of a field, e.g. `json:"id" db:"user_id,pk"`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTags {
    raw: String,
}

impl FieldTags {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Value under `name`, or an empty string when absent or malformed
    pub fn get(&self, name: &str) -> String {
        self.lookup(name).map(Cow::into_owned).unwrap_or_default()
    }
}

impl TagSource for FieldTags {
    /// Scans pairs left to right and returns the first match. Scanning stops
    /// at the first malformed pair, so anything after it is unreachable.
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        let mut rest = self.raw.as_str();

        while let Some(caps) = pair_regex().captures(rest) {
            let whole = caps.get(0)?;
            if &caps[1] == name {
                return unquote(caps.get(2)?.as_str()).map(Cow::Owned);
            }
            rest = &rest[whole.end()..];
        }

        None
    }
}

/// A field descriptor: a named field and its annotations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub tags: FieldTags,
}

impl Field {
    pub fn new(name: impl Into<String>, tags: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: FieldTags::new(tags),
        }
    }
}

impl TagSource for Field {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.tags.lookup(name)
    }
}

/// Undo double-quote escaping of a quoted value's body.
///
/// Returns `None` for invalid escapes, raw newlines, or byte escapes that
/// don't form valid UTF-8.
fn unquote(body: &str) -> Option<String> {
    if !body.contains('\\') {
        return if body.contains('\n') {
            None
        } else {
            Some(body.to_string())
        };
    }

    let mut out: Vec<u8> = Vec::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        match c {
            '\n' => return None,
            '\\' => {
                let esc = chars.next()?;
                match esc {
                    'a' => out.push(0x07),
                    'b' => out.push(0x08),
                    'f' => out.push(0x0c),
                    'n' => out.push(b'\n'),
                    'r' => out.push(b'\r'),
                    't' => out.push(b'\t'),
                    'v' => out.push(0x0b),
                    '\\' => out.push(b'\\'),
                    '"' => out.push(b'"'),
                    'x' => out.push(hex_value(&mut chars, 2)? as u8),
                    'u' => push_char(&mut out, hex_value(&mut chars, 4)?)?,
                    'U' => push_char(&mut out, hex_value(&mut chars, 8)?)?,
                    '0'..='7' => {
                        let mut value = esc.to_digit(8)?;
                        for _ in 0..2 {
                            value = value * 8 + chars.next()?.to_digit(8)?;
                        }
                        if value > 0xff {
                            return None;
                        }
                        out.push(value as u8);
                    }
                    _ => return None,
                }
            }
            _ => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }
    }

    String::from_utf8(out).ok()
}

fn hex_value(chars: &mut std::str::Chars<'_>, digits: usize) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..digits {
        value = value * 16 + chars.next()?.to_digit(16)?;
    }
    Some(value)
}

fn push_char(out: &mut Vec<u8>, code: u32) -> Option<()> {
    let c = char::from_u32(code)?;
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_single_pair() {
        let tags = FieldTags::new(r#"testtag:"key1,key2""#);
        assert_eq!(tags.get("testtag"), "key1,key2");
    }

    #[test]
    fn test_get_among_several_pairs() {
        let tags = FieldTags::new(r#"json:"id,omitempty"  db:"user_id" xml:"ID""#);
        assert_eq!(tags.get("json"), "id,omitempty");
        assert_eq!(tags.get("db"), "user_id");
        assert_eq!(tags.get("xml"), "ID");
    }

    #[test]
    fn test_missing_name() {
        let tags = FieldTags::new(r#"nottesttag:"key1,key2""#);
        assert_eq!(tags.lookup("testtag"), None);
        assert_eq!(tags.get("testtag"), "");
        assert_eq!(FieldTags::default().lookup("testtag"), None);
    }

    #[test]
    fn test_empty_value_is_present() {
        let tags = FieldTags::new(r#"testtag:"""#);
        assert_eq!(tags.lookup("testtag").as_deref(), Some(""));
    }

    #[test]
    fn test_first_duplicate_wins() {
        let tags = FieldTags::new(r#"a:"first" a:"second""#);
        assert_eq!(tags.get("a"), "first");
    }

    #[test]
    fn test_name_is_not_prefix_matched() {
        let tags = FieldTags::new(r#"jsonx:"a" json:"b""#);
        assert_eq!(tags.get("json"), "b");
    }

    #[test]
    fn test_scanning_stops_at_malformed_pair() {
        let tags = FieldTags::new(r#"a:"1" broken b:"2""#);
        assert_eq!(tags.get("a"), "1");
        assert_eq!(tags.lookup("b"), None);

        let tags = FieldTags::new(r#"a:"unterminated"#);
        assert_eq!(tags.lookup("a"), None);

        let tags = FieldTags::new(r#"a: "space before quote""#);
        assert_eq!(tags.lookup("a"), None);
    }

    #[test]
    fn test_escaped_quotes_and_backslashes() {
        let tags = FieldTags::new(r#"a:"say \"hi\"" b:"back\\slash""#);
        assert_eq!(tags.get("a"), "say \"hi\"");
        assert_eq!(tags.get("b"), "back\\slash");
    }

    #[test]
    fn test_numeric_escapes() {
        let tags = FieldTags::new(r#"a:"\x41\u00e9\U0001F600\101""#);
        assert_eq!(tags.get("a"), "Aé😀A");
    }

    #[test]
    fn test_invalid_escape_is_absent() {
        assert_eq!(FieldTags::new(r#"a:"\q""#).lookup("a"), None);
        assert_eq!(FieldTags::new(r#"a:"\'""#).lookup("a"), None);
        assert_eq!(FieldTags::new(r#"a:"\xZZ""#).lookup("a"), None);
        assert_eq!(FieldTags::new(r#"a:"\777""#).lookup("a"), None);
        assert_eq!(FieldTags::new(r#"a:"\xff""#).lookup("a"), None);
    }

    #[test]
    fn test_raw_newline_is_absent() {
        assert_eq!(FieldTags::new("a:\"x\ny\"").lookup("a"), None);
    }

    #[test]
    fn test_field_delegates_to_tags() {
        let field = Field::new("Email", r#"validate:"required,Max=64""#);
        assert_eq!(field.name, "Email");
        assert_eq!(field.tags.as_str(), r#"validate:"required,Max=64""#);
        assert_eq!(field.lookup("validate").as_deref(), Some("required,Max=64"));
        assert_eq!(field.lookup("json"), None);
    }

    #[test]
    fn test_map_sources() {
        let mut hash = HashMap::new();
        hash.insert("t".to_string(), "k".to_string());
        assert_eq!(hash.lookup("t").as_deref(), Some("k"));
        assert_eq!(hash.lookup("u"), None);

        let mut tree = BTreeMap::new();
        tree.insert("t".to_string(), "k".to_string());
        assert_eq!(tree.lookup("t").as_deref(), Some("k"));
    }
}
