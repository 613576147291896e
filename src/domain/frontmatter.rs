//! YAML front matter parsing
//!
//! Content items carry their metadata in a YAML block delimited by `---`
//! lines at the top of the file, the way most static site frameworks do.

use chrono::NaiveDate;
use serde::Deserialize;

/// Parsed front matter fields. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub url: Option<String>,
    pub rss: Option<bool>,
    pub tags: Option<TagField>,
}

/// The `tags` field accepts either a single string or a list of strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TagField {
    One(String),
    Many(Vec<String>),
}

impl TagField {
    /// Flatten into a list of raw tag strings.
    pub fn into_tags(self) -> Vec<String> {
        match self {
            TagField::One(tag) => vec![tag],
            TagField::Many(tags) => tags,
        }
    }
}

/// Split a document into its front matter block and body.
///
/// Returns `None` when the document has no front matter, in which case the
/// whole text is the body.
pub fn split(text: &str) -> Option<(&str, &str)> {
    let after_open = text.strip_prefix("---")?;
    let after_open = after_open
        .strip_prefix("\r\n")
        .or_else(|| after_open.strip_prefix('\n'))?;

    let start = text.len() - after_open.len();
    let mut offset = start;
    for line in text[start..].split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &text[start..offset];
            let body = &text[offset + line.len()..];
            return Some((yaml, body));
        }
        offset += line.len();
    }
    None
}

/// Parse a document into front matter and body.
///
/// A document without a front matter block yields default (empty) front
/// matter. A malformed block is an error carrying the serde message.
pub fn parse(text: &str) -> Result<(FrontMatter, &str), String> {
    match split(text) {
        Some((yaml, body)) => {
            let front_matter: FrontMatter =
                serde_yaml::from_str(yaml).map_err(|e| e.to_string())?;
            Ok((front_matter, body))
        }
        None => Ok((FrontMatter::default(), text)),
    }
}
