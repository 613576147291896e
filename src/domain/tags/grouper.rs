//! Tag normalization and grouping
//!
//! The classification core: derives a canonical tag list, a descriptor list
//! for the tag index page, and a slug-keyed index of content items for the
//! per-tag listing pages. All three are pure functions of the collection and
//! are recomputed from scratch on every build.

use crate::domain::content::{Collection, ContentItem};
use crate::domain::tags::slug::{is_reserved, slugify_tag};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// A canonical tag: the display title paired with its normalized slug.
///
/// The title is the first raw tag, in sort order, that produced the slug.
/// That keeps tag page URLs usable for non-Latin titles while the original
/// spelling survives for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagDescriptor {
    pub title: String,
    pub slug: String,
}

/// Map from normalized slug to the content items carrying any raw tag that
/// normalizes to it.
///
/// Buckets accumulate items per contributing raw tag in ascending raw-tag
/// order; within one tag, collection natural order. An item whose raw tags
/// share a slug appears once per matching raw tag.
pub type TagIndex = BTreeMap<String, Vec<ContentItem>>;

/// Normalizes and groups the tags of a content collection.
pub struct TagGrouper;

impl TagGrouper {
    /// Every distinct raw tag in use, sorted ascending by code point.
    ///
    /// Empty values and the reserved words (`all`, `nav`, `post`, `posts`)
    /// are dropped. Deduplication is by exact string equality, so every
    /// spelling, case, and script variant survives this stage.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagdex::domain::tags::TagGrouper;
    /// use tagdex::domain::{Collection, ContentItem};
    ///
    /// let items = vec![
    ///     ContentItem::from_markdown("a.md", "---\ntags: [Coffee, coffee]\n---\n").unwrap(),
    ///     ContentItem::from_markdown("b.md", "---\ntags: [Tea, post]\n---\n").unwrap(),
    /// ];
    /// let collection = Collection::new(items);
    ///
    /// let tags = TagGrouper::canonical_tag_list(&collection);
    /// assert_eq!(tags, vec!["Coffee", "Tea", "coffee"]);
    /// ```
    pub fn canonical_tag_list(collection: &Collection) -> Vec<String> {
        let mut tags: BTreeSet<&str> = BTreeSet::new();
        for item in collection.items() {
            for tag in &item.tags {
                if tag.is_empty() || is_reserved(tag) {
                    continue;
                }
                tags.insert(tag);
            }
        }
        tags.into_iter().map(String::from).collect()
    }

    /// Group content items under the normalized slug of their tags.
    ///
    /// Walks the canonical tag list in sorted order and appends every item
    /// carrying that exact raw tag to the slug's bucket, so a bucket collects
    /// the items of all raw-tag variants that normalize to it.
    pub fn build_tag_index(collection: &Collection) -> TagIndex {
        let mut index = TagIndex::new();
        for tag in Self::canonical_tag_list(collection) {
            let bucket = index.entry(slugify_tag(&tag)).or_default();
            bucket.extend(collection.filtered_by_tag(&tag).into_iter().cloned());
        }
        index
    }

    /// One descriptor per distinct slug, first-occurrence-by-sort-order wins
    /// the display title.
    ///
    /// Output order follows the first contributing raw tag's sort position,
    /// not the slug.
    pub fn build_tag_descriptors(collection: &Collection) -> Vec<TagDescriptor> {
        let mut descriptors: Vec<TagDescriptor> = Vec::new();
        for tag in Self::canonical_tag_list(collection) {
            let slug = slugify_tag(&tag);
            if descriptors.iter().any(|d| d.slug == slug) {
                continue;
            }
            descriptors.push(TagDescriptor { title: tag, slug });
        }
        descriptors
    }
}
