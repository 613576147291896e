//! Tag slugification and reserved words

/// Structural tag values excluded from topical classification.
pub const RESERVED_TAGS: &[&str] = &["all", "nav", "post", "posts"];

/// Whether a tag is a structural marker rather than a topical tag.
///
/// Matching is exact and case-sensitive: `Post` is a topical tag, `post`
/// is not.
pub fn is_reserved(tag: &str) -> bool {
    RESERVED_TAGS.contains(&tag)
}

/// Normalize a raw tag into a URL-safe, lowercase, ASCII slug.
///
/// Non-Latin scripts are transliterated, so distinct spellings of the same
/// tag collide on one slug. That collision is the grouping mechanism, not
/// an error.
pub fn slugify_tag(tag: &str) -> String {
    slug::slugify(tag)
}
