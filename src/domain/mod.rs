//! Domain layer - Business logic and domain models

pub mod content;
pub mod filters;
pub mod frontmatter;
pub mod media;
pub mod tags;

pub use content::{Collection, ContentItem};
pub use media::CdnUrlBuilder;
