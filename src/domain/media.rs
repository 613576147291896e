//! CDN image URL building
//!
//! Builds delivery URLs for an image CDN from a configured account name, a
//! transformation string, and a source path. The account name is validated
//! up front; a missing value is a configuration error, never a silently
//! malformed URL.

use crate::domain::filters;
use crate::error::{Result, TagdexError};

/// Builds image delivery URLs for a CDN account.
#[derive(Debug, Clone)]
pub struct CdnUrlBuilder {
    cloud_name: String,
}

impl CdnUrlBuilder {
    /// Create a builder for the given account name.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the name is empty or blank.
    pub fn new(cloud_name: impl Into<String>) -> Result<Self> {
        let cloud_name = cloud_name.into();
        if cloud_name.trim().is_empty() {
            return Err(TagdexError::Config(
                "cdn.cloud_name is not configured".to_string(),
            ));
        }
        Ok(CdnUrlBuilder { cloud_name })
    }

    /// Build a delivery URL for an image path with the given transforms.
    ///
    /// The source path is reduced to a filename-safe token so remote URLs can
    /// be used as fetch keys.
    pub fn image_url(&self, path: &str, transforms: &str) -> String {
        format!(
            "https://res.cloudinary.com/{}/image/upload/{}/{}.png",
            self.cloud_name,
            transforms,
            filenamify(path)
        )
    }
}

/// Reduce a URL or path to a filename-safe token: scheme and trailing slash
/// stripped, then every character outside `[A-Za-z0-9._-]` dropped.
fn filenamify(path: &str) -> String {
    filters::clean_url(path)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect()
}
