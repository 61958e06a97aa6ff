//! Tag string parsing
//!
//! A tag is a comma-separated list of tokens. Tokens holding an `=` are
//! options (`name=value`, split at the first `=`, both sides lower-cased);
//! other non-empty tokens are keys, kept verbatim. Empty tokens are dropped.
//! There is no escaping, so keys and values can't contain a literal comma.
//!
//! # Examples
//!
//! ```
//! use fieldtag::domain::TagParser;
//!
//! let tag = TagParser::parse_str("required,Max=10");
//! assert!(tag.has_key("required"));
//! assert_eq!(tag.option("max"), Some("10"));
//! ```

use super::source::TagSource;
use super::tag::Tag;

pub struct TagParser;

impl TagParser {
    /// Parse the annotation registered under `tag_name` on a field.
    ///
    /// A field without that annotation yields the empty tag.
    pub fn parse<S>(source: &S, tag_name: &str) -> Tag
    where
        S: TagSource + ?Sized,
    {
        match source.lookup(tag_name) {
            Some(raw) => Self::parse_str(&raw),
            None => Tag::default(),
        }
    }

    /// Parse a raw tag string. Accepts any input.
    pub fn parse_str(raw: &str) -> Tag {
        let mut tag = Tag::default();

        for token in raw.split(',') {
            if let Some((name, value)) = token.split_once('=') {
                tag.insert_option(name.to_lowercase(), value.to_lowercase());
            } else if !token.is_empty() {
                tag.push_key(token);
            }
        }

        tag
    }
}
