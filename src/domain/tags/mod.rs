//! Tag system

pub mod grouper;
pub mod slug;

// Re-export main types
pub use grouper::{TagDescriptor, TagGrouper, TagIndex};
pub use slug::{is_reserved, slugify_tag, RESERVED_TAGS};
