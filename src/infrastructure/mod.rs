//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod minify;
pub mod repository;

pub use config::{CdnConfig, MinifyOptions, SiteConfig, CONFIG_FILE};
pub use repository::{FileSystemRepository, SiteRepository};
