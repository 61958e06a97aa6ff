//! Application layer - Use cases and orchestration

pub mod parse_tag;

pub use parse_tag::ParseTagService;
