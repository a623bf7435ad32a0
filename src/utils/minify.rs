//! HTML minification.
//!
//! Wraps `minify_html` with automatic enable/disable based on `SiteConfig`.
//! Inline `<style>` and `<script>` content is minified too.

use crate::config::SiteConfig;
use std::borrow::Cow;

/// Minify HTML according to `[build] minify`.
///
/// Returns `Cow::Borrowed` if minify disabled, `Cow::Owned` if minified.
pub fn minify<'a>(html: &'a [u8], config: &SiteConfig) -> Cow<'a, [u8]> {
    if config.build.minify {
        Cow::Owned(minify_html_inner(html))
    } else {
        Cow::Borrowed(html)
    }
}

/// Minify HTML content using `minify_html` crate.
fn minify_html_inner(html: &[u8]) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    cfg.minify_js = true;
    cfg.remove_bangs = true;
    cfg.remove_processing_instructions = true;
    minify_html::minify(html, &cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_minify(enabled: bool) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.minify = enabled;
        config
    }

    #[test]
    fn test_minify_html_basic() {
        let html = b"<html>\n  <head>\n  </head>\n  <body>\n    <p>Hello</p>\n  </body>\n</html>";
        let result = minify(html, &config_with_minify(true));
        let result_str = String::from_utf8_lossy(&result);

        assert!(!result_str.contains("\n  "));
        assert!(result_str.contains("<p>Hello</p>"));
    }

    #[test]
    fn test_minify_keeps_data_attributes() {
        let html = br##"<div class="reveal" data-reveal="3">  <a href="#about" data-nav="about">About</a>  </div>"##;
        let result = minify(html, &config_with_minify(true));
        let result_str = String::from_utf8_lossy(&result);

        assert!(
            result_str.contains("data-reveal=3") || result_str.contains(r#"data-reveal="3""#)
        );
        assert!(
            result_str.contains("data-nav=about") || result_str.contains(r#"data-nav="about""#)
        );
        assert!(result_str.contains(">About</a>"));
    }

    #[test]
    fn test_minify_inline_style() {
        let html = b"<style>\n  .reveal {\n    opacity: 0;\n  }\n</style>";
        let result = minify(html, &config_with_minify(true));
        let result_str = String::from_utf8_lossy(&result);

        assert!(result_str.contains(".reveal{opacity:0}"));
    }

    #[test]
    fn test_minify_html_disabled() {
        let html = b"<html>\n  <body>\n  </body>\n</html>";
        let result = minify(html, &config_with_minify(false));

        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(&*result, html);
    }
}
