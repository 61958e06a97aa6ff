//! Parse tag use case

use crate::domain::{FieldTags, Tag, TagParser};
use crate::error::{FieldTagError, Result};
use crate::infrastructure::Config;

/// Service behind the CLI commands: parses tags with config-aware defaults
pub struct ParseTagService {
    config: Config,
}

impl ParseTagService {
    /// Create a new parse tag service
    pub fn new(config: Config) -> Self {
        ParseTagService { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse a raw tag string
    pub fn parse_raw(&self, raw: &str) -> Tag {
        let tag = TagParser::parse_str(raw);
        tracing::debug!(
            keys = tag.keys().len(),
            options = tag.options().len(),
            "parsed raw tag"
        );
        tag
    }

    /// Read one tag out of a field's annotation string and parse it.
    /// Falls back to the configured tag name when `tag_name` is `None`.
    pub fn parse_field(&self, field_tags: &str, tag_name: Option<&str>) -> Tag {
        let name = tag_name.unwrap_or(self.config.tag_name.as_str());
        let source = FieldTags::new(field_tags);

        let tag = TagParser::parse(&source, name);
        if tag.is_empty() {
            tracing::debug!(tag_name = name, "field has no usable tag, result is empty");
        } else {
            tracing::debug!(
                tag_name = name,
                keys = tag.keys().len(),
                options = tag.options().len(),
                "parsed field tag"
            );
        }
        tag
    }

    pub fn has_key(&self, raw: &str, key: &str) -> bool {
        self.parse_raw(raw).has_key(key)
    }

    /// Value of a single option; the name is lower-cased to match parsing
    pub fn option(&self, raw: &str, name: &str) -> Result<String> {
        let name = name.to_lowercase();
        self.parse_raw(raw)
            .option(&name)
            .map(str::to_string)
            .ok_or(FieldTagError::OptionNotFound(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_with_tag_name(name: &str) -> ParseTagService {
        ParseTagService::new(Config {
            tag_name: name.to_string(),
            ..Config::default()
        })
    }

    #[test]
    fn test_parse_raw() {
        let service = ParseTagService::new(Config::default());
        let tag = service.parse_raw("required,Min=1");
        assert_eq!(tag.keys(), ["required"]);
        assert_eq!(tag.option("min"), Some("1"));
    }

    #[test]
    fn test_parse_field_uses_configured_tag_name() {
        let service = service_with_tag_name("json");
        let tag = service.parse_field(r#"json:"id,omitempty" db:"pk""#, None);
        assert_eq!(tag.keys(), ["id", "omitempty"]);
    }

    #[test]
    fn test_parse_field_explicit_name_overrides_config() {
        let service = service_with_tag_name("json");
        let tag = service.parse_field(r#"json:"id,omitempty" db:"pk""#, Some("db"));
        assert_eq!(tag.keys(), ["pk"]);
    }

    #[test]
    fn test_parse_field_missing_tag_is_empty() {
        let service = service_with_tag_name("json");
        assert!(service.parse_field(r#"db:"pk""#, None).is_empty());
        assert!(service.parse_field("", None).is_empty());
    }

    #[test]
    fn test_has_key() {
        let service = ParseTagService::new(Config::default());
        assert!(service.has_key("key1,key2", "key2"));
        assert!(!service.has_key("key1,key2", "Key2"));
    }

    #[test]
    fn test_option_lookup_is_case_insensitive_on_name() {
        let service = ParseTagService::new(Config::default());
        assert_eq!(service.option("Max=TEN", "MAX").unwrap(), "ten");
    }

    #[test]
    fn test_option_not_found() {
        let service = ParseTagService::new(Config::default());
        match service.option("key1", "max").unwrap_err() {
            FieldTagError::OptionNotFound(name) => assert_eq!(name, "max"),
            other => panic!("Expected OptionNotFound, got {:?}", other),
        }
    }
}
