//! Content items and collections

use crate::domain::filters;
use crate::domain::frontmatter;
use crate::error::{Result, TagdexError};
use chrono::NaiveDate;
use pulldown_cmark::{Event, Parser as MdParser, Tag, TagEnd};
use serde::Serialize;

/// One page/document of the site.
///
/// Only `tags` matters to the classification core; the remaining fields are
/// metadata carried through to the emitted collections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentItem {
    /// Path relative to the site root, with forward slashes.
    pub path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// `url` with scheme prefix and trailing slash stripped, for display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    pub rss: bool,

    pub tags: Vec<String>,
}

impl ContentItem {
    /// Build an item from a markdown document.
    ///
    /// The title falls back to the first heading in the body when the front
    /// matter does not provide one. A missing or empty `tags` field yields an
    /// empty tag list, never an error.
    pub fn from_markdown(path: &str, text: &str) -> Result<Self> {
        let (fm, body) = frontmatter::parse(text)
            .map_err(|e| TagdexError::FrontMatter(format!("{}: {}", path, e)))?;

        let title = fm.title.or_else(|| first_heading(body));
        let display_url = fm.url.as_deref().map(filters::clean_url);
        let tags = fm.tags.map(|t| t.into_tags()).unwrap_or_default();

        Ok(ContentItem {
            path: path.to_string(),
            title,
            url: fm.url,
            display_url,
            date: fm.date,
            rss: fm.rss.unwrap_or(false),
            tags,
        })
    }
}

/// Extract the text of the first markdown heading, if any.
fn first_heading(markdown: &str) -> Option<String> {
    let mut in_heading = false;
    let mut text = String::new();

    for event in MdParser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { .. }) => in_heading = true,
            Event::Text(t) | Event::Code(t) if in_heading => text.push_str(&t),
            Event::End(TagEnd::Heading(_)) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return None;
                }
                return Some(trimmed.to_string());
            }
            _ => {}
        }
    }

    None
}

/// The full set of content items, in natural order.
///
/// Natural order is date ascending with undated items last, ties broken by
/// path. This is the order tag buckets inherit.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    items: Vec<ContentItem>,
}

impl Collection {
    /// Create a collection, sorting items into natural order.
    pub fn new(mut items: Vec<ContentItem>) -> Self {
        items.sort_by(|a, b| match (a.date, b.date) {
            (Some(da), Some(db)) => da.cmp(&db).then_with(|| a.path.cmp(&b.path)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.path.cmp(&b.path),
        });
        Collection { items }
    }

    /// All items in natural order.
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Items carrying this exact raw tag, in natural order.
    pub fn filtered_by_tag(&self, tag: &str) -> Vec<&ContentItem> {
        self.items
            .iter()
            .filter(|item| item.tags.iter().any(|t| t == tag))
            .collect()
    }

    /// Items that publish a feed (`rss: true`), in natural order.
    pub fn with_feeds(&self) -> Vec<&ContentItem> {
        self.items.iter().filter(|item| item.rss).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
