//! Static page composition.
//!
//! Renders the whole portfolio as one `index.html`:
//!
//! ```text
//! <html>
//!   <head>  meta, title, folio.css
//!   <body data-reveal-threshold data-scroll>
//!     nav · hero · about · stack · projects · contact · footer
//!     <script type="module">   (only with a runtime bundle)
//! ```
//!
//! The markup works without the runtime: nav entries are real anchors and
//! `.reveal` blocks are only hidden once the runtime marks `<html>` ready.

mod icons;
mod sections;
mod writer;

pub use writer::HtmlWriter;

use crate::config::SiteConfig;
use crate::runtime::ElementId;
use anyhow::Result;

/// Stylesheet served next to `index.html`.
pub const STYLESHEET: &str = include_str!("../embed/folio.css");
pub const STYLESHEET_NAME: &str = "folio.css";

/// Output subdirectory of the runtime bundle.
pub const RUNTIME_DIR: &str = "runtime";
/// Module entry emitted by `wasm-pack build --target web`.
pub const RUNTIME_ENTRY: &str = "folio.js";

/// Result of rendering the page.
#[derive(Debug)]
pub struct RenderedPage {
    pub html: Vec<u8>,
    /// Revealable elements, in document order.
    pub reveal_ids: Vec<ElementId>,
}

/// Render the portfolio page.
///
/// `with_runtime` adds the loader script for the browser runtime; without
/// it the page is fully static and everything stays visible.
pub fn render_page(config: &SiteConfig, with_runtime: bool) -> Result<RenderedPage> {
    let mut w = HtmlWriter::new();

    w.doctype()?;
    w.elem("html", &[("lang", config.base.language.as_str())], |w| {
        head(w, config)?;
        body(w, config, with_runtime)
    })?;

    let (html, reveal_ids) = w.finish();
    Ok(RenderedPage { html, reveal_ids })
}

fn head(w: &mut HtmlWriter, config: &SiteConfig) -> Result<()> {
    let base = &config.base;

    w.elem("head", &[], |w| {
        w.void("meta", &[("charset", "utf-8")])?;
        w.void(
            "meta",
            &[("name", "viewport"), ("content", "width=device-width, initial-scale=1")],
        )?;
        w.text_elem("title", &[], &base.title)?;
        if !base.description.is_empty() {
            w.void("meta", &[("name", "description"), ("content", base.description.as_str())])?;
        }
        if !base.author.is_empty() {
            w.void("meta", &[("name", "author"), ("content", base.author.as_str())])?;
        }
        w.void("link", &[("rel", "stylesheet"), ("href", STYLESHEET_NAME)])
    })
}

fn body(w: &mut HtmlWriter, config: &SiteConfig, with_runtime: bool) -> Result<()> {
    let settings = config.reveal.settings();
    let threshold = settings.threshold.to_string();

    w.elem(
        "body",
        &[
            ("data-reveal-threshold", threshold.as_str()),
            ("data-scroll", settings.scroll.as_str()),
        ],
        |w| {
            w.elem("div", &[("class", "grid-bg"), ("aria-hidden", "true")], |_| Ok(()))?;
            sections::nav(w, config)?;
            w.elem("main", &[], |w| {
                sections::hero(w, config)?;
                sections::about(w, config)?;
                sections::stack(w, config)?;
                sections::projects(w, config)?;
                sections::contact(w, config)
            })?;
            sections::footer(w, config)?;

            if with_runtime {
                w.elem("script", &[("type", "module")], |w| {
                    w.raw(&loader_script())
                })?;
            }
            Ok(())
        },
    )
}

/// Inline module that boots the wasm runtime (`start` runs on init).
fn loader_script() -> String {
    format!(r#"import init from "./{RUNTIME_DIR}/{RUNTIME_ENTRY}";init();"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(config: &SiteConfig, with_runtime: bool) -> (String, Vec<ElementId>) {
        let page = render_page(config, with_runtime).unwrap();
        (String::from_utf8(page.html).unwrap(), page.reveal_ids)
    }

    #[test]
    fn test_render_default_page() {
        let config = SiteConfig::default();
        let (html, ids) = render(&config, true);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("<title>Johnmark.Dev</title>"));
        assert!(html.contains(r#"href="folio.css""#));
        for section in crate::runtime::Section::ALL {
            assert!(html.contains(&format!(r#"<section id="{}""#, section.id())));
        }

        // hero, about, stack head + items, projects head + items, contact
        let expected = 1 + 1 + 1 + config.stack.items.len() + 1 + config.projects.items.len() + 1;
        assert_eq!(ids.len(), expected);
    }

    #[test]
    fn test_reveal_ids_match_markup() {
        let (html, ids) = render(&SiteConfig::default(), false);

        for (i, id) in ids.iter().enumerate() {
            assert_eq!(id.0 as usize, i);
            assert!(html.contains(&format!(r#"data-reveal="{id}""#)));
        }
        assert!(!html.contains(&format!(r#"data-reveal="{}""#, ids.len())));
    }

    #[test]
    fn test_body_carries_reveal_settings() {
        let config: SiteConfig = toml::from_str(
            r#"
            [reveal]
            threshold = 0.25
            scroll = "instant"
        "#,
        )
        .unwrap();
        let (html, _) = render(&config, false);

        assert!(html.contains(r#"<body data-reveal-threshold="0.25" data-scroll="instant">"#));
    }

    #[test]
    fn test_runtime_script_optional() {
        let config = SiteConfig::default();

        let (with, _) = render(&config, true);
        assert!(with.contains(r#"<script type="module">import init from "./runtime/folio.js";init();</script>"#));

        let (without, _) = render(&config, false);
        assert!(!without.contains("<script"));
    }

    #[test]
    fn test_text_escaped() {
        let mut config = SiteConfig::default();
        config.base.title = "<Dev> & Co".into();
        let (html, _) = render(&config, false);

        assert!(html.contains("<title>&lt;Dev&gt; &amp; Co</title>"));
    }

    #[test]
    fn test_stylesheet_hides_only_when_ready() {
        assert!(STYLESHEET.contains("html.reveal-ready .reveal"));
        assert!(STYLESHEET.contains(".reveal.active"));
    }
}
