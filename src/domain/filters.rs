//! Template-style string filters

use regex::Regex;
use std::sync::OnceLock;

fn url_cruft_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)https?://|/$").unwrap())
}

/// Strip the scheme prefix and a trailing slash from a URL for display.
pub fn clean_url(url: &str) -> String {
    url_cruft_regex().replace_all(url, "").into_owned()
}
