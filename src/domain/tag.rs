//! Parsed tag value

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::parser::TagParser;

/// A parsed field annotation: bare keys plus `name=value` options.
///
/// Both containers are always present, even when empty. Keys keep their
/// original spelling and order; option names and values are lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    keys: Vec<String>,

    #[serde(default)]
    options: BTreeMap<String, String>,
}

impl Tag {
    pub fn new(keys: Vec<String>, options: BTreeMap<String, String>) -> Self {
        Self { keys, options }
    }

    /// Bare keys in the order they appeared
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    /// Value of an option, matched exactly against the stored (lower-cased) name
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    /// True when the tag carries neither keys nor options
    pub fn is_empty(&self) -> bool {
        !self.has_keys() && !self.has_options()
    }

    pub fn has_keys(&self) -> bool {
        !self.keys.is_empty()
    }

    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    /// Case-sensitive membership test over the keys
    pub fn has_key(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    pub(crate) fn push_key(&mut self, key: &str) {
        self.keys.push(key.to_string());
    }

    pub(crate) fn insert_option(&mut self, name: String, value: String) {
        self.options.insert(name, value);
    }
}

impl fmt::Display for Tag {
    /// Canonical form: keys first, then options in name order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens = self
            .keys
            .iter()
            .cloned()
            .chain(self.options.iter().map(|(k, v)| format!("{}={}", k, v)));

        for (i, token) in tokens.enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(&token)?;
        }
        Ok(())
    }
}

impl FromStr for Tag {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TagParser::parse_str(s))
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        TagParser::parse_str(s)
    }
}
