//! fieldtag - Field annotation tag parser
//!
//! Parses comma-separated annotation strings such as `required,max=10` into
//! an ordered list of keys and a map of lower-cased options. Parsing never
//! fails: absent annotations and malformed tokens yield a best-effort tag.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{Field, FieldTags, Tag, TagParser, TagSource};
pub use error::FieldTagError;
