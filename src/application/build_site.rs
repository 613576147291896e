//! Site build use case
//!
//! Orchestrates one full build pass: load the content collection, compute
//! the tag collections once, stage them as JSON for the templating system,
//! and pass the assets directory through the output transform.

use crate::domain::tags::TagGrouper;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, SiteRepository};
use std::path::PathBuf;

/// Options for a build
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Output directory override (None = config's site.output)
    pub output: Option<PathBuf>,

    /// Pretty-print the emitted JSON
    pub pretty: bool,
}

/// What a build produced
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub items: usize,
    pub tags: usize,
    pub assets_copied: usize,
    pub output_dir: PathBuf,
}

/// Service for building the derived site collections
pub struct BuildSiteService {
    repository: FileSystemRepository,
}

impl BuildSiteService {
    /// Create a new build service
    pub fn new(repository: FileSystemRepository) -> Self {
        BuildSiteService { repository }
    }

    /// Execute one build pass.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid, a content file has
    /// malformed front matter, or output I/O fails. The build is one-shot;
    /// nothing is retried.
    pub fn execute(&self, options: BuildOptions) -> Result<BuildSummary> {
        // 1. Load and validate config, applying the output override
        let mut config = self.repository.load_config()?;
        if let Some(output) = &options.output {
            config.site.output = output.to_string_lossy().into_owned();
        }

        // 2. Load the content collection
        let collection = self.repository.load_collection(&config)?;

        // 3. Compute both tag collections once, from the same canonical list
        let descriptors = TagGrouper::build_tag_descriptors(&collection);
        let index = TagGrouper::build_tag_index(&collection);

        // 4. Stage them as JSON for the templating system
        let (tags_json, tagmap_json) = if options.pretty {
            (
                serde_json::to_vec_pretty(&descriptors)?,
                serde_json::to_vec_pretty(&index)?,
            )
        } else {
            (serde_json::to_vec(&descriptors)?, serde_json::to_vec(&index)?)
        };
        self.repository.write_output(&config, "tags.json", &tags_json)?;
        self.repository
            .write_output(&config, "tagmap.json", &tagmap_json)?;

        // 5. Passthrough copy of assets, with the HTML transform
        let assets_copied = self.repository.copy_assets(&config)?;

        Ok(BuildSummary {
            items: collection.len(),
            tags: descriptors.len(),
            assets_copied,
            output_dir: self.repository.root().join(&config.site.output),
        })
    }
}
