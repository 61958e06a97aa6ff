//! Domain layer - Tag model and parsing

pub mod parser;
pub mod source;
pub mod tag;

pub use parser::TagParser;
pub use source::{Field, FieldTags, TagSource};
pub use tag::Tag;
