//! Site initialization use case

use crate::error::{Result, TagdexError};
use crate::infrastructure::{FileSystemRepository, SiteConfig, SiteRepository};
use std::fs;
use std::path::Path;

/// Service for initializing a new site
pub struct InitService;

impl InitService {
    /// Create tagdex.toml with defaults plus the content and assets
    /// directories in the given path.
    pub fn execute(path: &Path) -> Result<()> {
        fs::create_dir_all(path)?;

        let repo = FileSystemRepository::new(path.to_path_buf());
        if repo.is_initialized() {
            return Err(TagdexError::Config(format!(
                "Directory already initialized: {}",
                path.display()
            )));
        }

        let config = SiteConfig::default();
        repo.save_config(&config)?;

        fs::create_dir_all(path.join(&config.site.content))?;
        fs::create_dir_all(path.join(&config.site.assets))?;

        Ok(())
    }
}
