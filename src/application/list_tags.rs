//! List tags use case

use crate::domain::tags::{TagDescriptor, TagGrouper};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, SiteRepository};

/// Service for listing the canonical tags of a site.
pub struct ListTagsService {
    repository: FileSystemRepository,
}

impl ListTagsService {
    /// Create a new list tags service.
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Compute the descriptor list from the current content collection.
    pub fn execute(&self) -> Result<Vec<TagDescriptor>> {
        let config = self.repository.load_config()?;
        let collection = self.repository.load_collection(&config)?;
        Ok(TagGrouper::build_tag_descriptors(&collection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::SiteConfig;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_execute_lists_descriptors() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.save_config(&SiteConfig::default()).unwrap();

        let content = temp.path().join("content");
        fs::create_dir_all(&content).unwrap();
        fs::write(content.join("a.md"), "---\ntags: [Travel, post]\n---\n").unwrap();
        fs::write(content.join("b.md"), "---\ntags: [travel]\n---\n").unwrap();

        let descriptors = ListTagsService::new(repo).execute().unwrap();
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].title, "Travel");
        assert_eq!(descriptors[0].slug, "travel");
    }
}
