//! File system repository

use crate::domain::content::{Collection, ContentItem};
use crate::error::{Result, TagdexError};
use crate::infrastructure::config::{SiteConfig, CONFIG_FILE};
use crate::infrastructure::minify;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Abstract repository for site operations
pub trait SiteRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from tagdex.toml
    fn load_config(&self) -> Result<SiteConfig>;

    /// Save configuration to tagdex.toml
    fn save_config(&self, config: &SiteConfig) -> Result<()>;

    /// Check if tagdex.toml exists
    fn is_initialized(&self) -> bool;
}

/// File system implementation of SiteRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the site root by walking up from the current directory.
    /// First checks TAGDEX_ROOT environment variable, then falls back to discovery.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("TAGDEX_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_config(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(TagdexError::Config(format!(
                    "TAGDEX_ROOT is set to '{}' but no {} found. \
                    Run 'tagdex init' in that directory or unset TAGDEX_ROOT.",
                    path.display(),
                    CONFIG_FILE
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the site root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(TagdexError::NotSiteDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a tagdex.toml
    fn has_config(path: &Path) -> bool {
        path.join(CONFIG_FILE).is_file()
    }
}

impl SiteRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<SiteConfig> {
        SiteConfig::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &SiteConfig) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_config(&self.root)
    }
}

// Content and output operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Load every markdown file under the content directory into a collection.
    ///
    /// Paths are stored relative to the site root with forward slashes so the
    /// emitted collections are stable across platforms. A missing content
    /// directory yields an empty collection.
    pub fn load_collection(&self, config: &SiteConfig) -> Result<Collection> {
        let content_dir = self.root.join(&config.site.content);
        let mut items = Vec::new();

        if content_dir.is_dir() {
            for entry in WalkDir::new(&content_dir).sort_by_file_name() {
                let entry = entry.map_err(std::io::Error::from)?;
                if !entry.file_type().is_file() {
                    continue;
                }
                if entry.path().extension().and_then(|e| e.to_str()) != Some("md") {
                    continue;
                }

                let rel = entry
                    .path()
                    .strip_prefix(&self.root)
                    .unwrap_or_else(|_| entry.path());
                let rel = rel.to_string_lossy().replace('\\', "/");

                let text = fs::read_to_string(entry.path())?;
                items.push(ContentItem::from_markdown(&rel, &text)?);
            }
        }

        Ok(Collection::new(items))
    }

    /// Write a derived file into the output directory, creating it as needed.
    ///
    /// Returns the absolute path written.
    pub fn write_output(
        &self,
        config: &SiteConfig,
        filename: &str,
        contents: &[u8],
    ) -> Result<PathBuf> {
        let output_dir = self.root.join(&config.site.output);
        fs::create_dir_all(&output_dir)?;

        let path = output_dir.join(filename);
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Copy the assets directory into the output directory, minifying HTML
    /// files when the transform is enabled. Returns the number of files
    /// copied. A missing assets directory is not an error.
    pub fn copy_assets(&self, config: &SiteConfig) -> Result<usize> {
        let assets_dir = self.root.join(&config.site.assets);
        if !assets_dir.is_dir() {
            return Ok(0);
        }

        let dest_root = self
            .root
            .join(&config.site.output)
            .join(&config.site.assets);
        let mut copied = 0;

        for entry in WalkDir::new(&assets_dir).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }

            let rel = entry
                .path()
                .strip_prefix(&assets_dir)
                .unwrap_or_else(|_| entry.path());
            let dest = dest_root.join(rel);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }

            if config.minify.enabled && minify::is_minifiable(entry.path()) {
                let input = fs::read(entry.path())?;
                fs::write(&dest, minify::minify_html(&input, &config.minify))?;
            } else {
                fs::copy(entry.path(), &dest)?;
            }
            copied += 1;
        }

        Ok(copied)
    }
}
