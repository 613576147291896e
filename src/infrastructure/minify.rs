//! HTML minification transform
//!
//! Thin adapter over the `minify-html` crate, applied to `.html` files as
//! they pass through the build output.

use crate::infrastructure::config::MinifyOptions;
use std::path::Path;

/// Whether the transform applies to this file.
pub fn is_minifiable(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("html"))
}

/// Minify an HTML document according to the configured option set.
pub fn minify_html(input: &[u8], options: &MinifyOptions) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.minify_css = options.minify_css;
    cfg.keep_comments = options.keep_comments;
    minify_html::minify(input, &cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_minifiable() {
        assert!(is_minifiable(Path::new("index.html")));
        assert!(is_minifiable(Path::new("a/b/INDEX.HTML")));
        assert!(!is_minifiable(Path::new("style.css")));
        assert!(!is_minifiable(Path::new("html")));
    }

    #[test]
    fn test_minify_collapses_whitespace() {
        let input = b"<p>\n    hello\n    world\n</p>";
        let output = minify_html(input, &MinifyOptions::default());
        assert!(output.len() < input.len());
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("hello"));
        assert!(!text.contains("\n    hello"));
    }

    #[test]
    fn test_minify_strips_comments_by_default() {
        let input = b"<p>hi</p><!-- gone -->";
        let text = String::from_utf8(minify_html(input, &MinifyOptions::default())).unwrap();
        assert!(!text.contains("gone"));
    }

    #[test]
    fn test_minify_can_keep_comments() {
        let options = MinifyOptions {
            keep_comments: true,
            ..MinifyOptions::default()
        };
        let input = b"<p>hi</p><!-- kept -->";
        let text = String::from_utf8(minify_html(input, &options)).unwrap();
        assert!(text.contains("kept"));
    }
}
