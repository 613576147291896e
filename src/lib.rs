//! tagdex - Tag classification and collection builder for static sites
//!
//! Walks a directory of markdown content items, reads their free-text tag
//! annotations from front matter, and derives the collections a templating
//! system needs for tag pages: a canonical tag descriptor list and a
//! slug-keyed tag index.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TagdexError;
