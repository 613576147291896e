//! Site configuration management
//!
//! All ambient state lives in `tagdex.toml` at the site root, loaded and
//! validated once per invocation. Environment variables only override single
//! values (`TAGDEX_CDN_NAME`); they never replace the config file.

use crate::error::{Result, TagdexError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the config file that marks a site root.
pub const CONFIG_FILE: &str = "tagdex.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,

    #[serde(default)]
    pub minify: MinifyOptions,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cdn: Option<CdnConfig>,
}

/// `[site]` section: directory layout, relative to the site root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Directory of markdown content items.
    pub content: String,

    /// Directory of passthrough assets.
    pub assets: String,

    /// Build output directory.
    pub output: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        SiteSection {
            content: "content".to_string(),
            assets: "assets".to_string(),
            output: "_site".to_string(),
        }
    }
}

/// `[minify]` section: the HTML output transform's option set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MinifyOptions {
    pub enabled: bool,
    pub minify_css: bool,
    pub keep_comments: bool,
}

impl Default for MinifyOptions {
    fn default() -> Self {
        MinifyOptions {
            enabled: true,
            minify_css: true,
            keep_comments: false,
        }
    }
}

/// `[cdn]` section: image CDN account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CdnConfig {
    pub cloud_name: String,
}

impl SiteConfig {
    /// Load config from tagdex.toml in the given directory.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TagdexError::NotSiteDirectory(path.to_path_buf())
            } else {
                TagdexError::Io(e)
            }
        })?;

        let config: SiteConfig = toml::from_str(&contents)
            .map_err(|e| TagdexError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))?;
        config.validate()?;

        Ok(config)
    }

    /// Save config to tagdex.toml in the given directory.
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| TagdexError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path.join(CONFIG_FILE), contents)?;
        Ok(())
    }

    /// Validate the loaded config, with descriptive errors.
    pub fn validate(&self) -> Result<()> {
        if self.site.content.trim().is_empty() {
            return Err(TagdexError::Config(
                "site.content must not be empty".to_string(),
            ));
        }
        if self.site.output.trim().is_empty() {
            return Err(TagdexError::Config(
                "site.output must not be empty".to_string(),
            ));
        }
        if let Some(cdn) = &self.cdn {
            if cdn.cloud_name.trim().is_empty() {
                return Err(TagdexError::Config(
                    "cdn.cloud_name is empty in tagdex.toml".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// The CDN account name, checking the environment variable first.
    pub fn cdn_cloud_name(&self) -> Option<String> {
        match std::env::var("TAGDEX_CDN_NAME") {
            Ok(name) if !name.trim().is_empty() => Some(name),
            _ => self.cdn.as_ref().map(|c| c.cloud_name.clone()),
        }
    }
}
