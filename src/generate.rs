//! HTML page generation.
//!
//! Assembles the components into one landing page and writes it to the
//! output directory. The page is self-contained: the stylesheet (colors
//! injected from config) and the carousel script are embedded, so the
//! output is a single `index.html` that can be dropped on any file server.
//!
//! ## Page Structure
//!
//! ```text
//! <main>
//!   carousel   — slide strip, prev/next controls, indicators
//!   intro      — heading + markdown body
//!   stats      — card grid
//! </main>
//! <footer>     — copyright + links
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::carousel::Carousel;
use crate::config::{self, SiteConfig};
use crate::{footer, intro, stats};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/carousel.js");

/// Render the full landing page for a config. Pure — no I/O.
pub fn render_page(config: &SiteConfig) -> Markup {
    // Colors from config are prepended so the static rules can use them.
    let color_css = config::generate_color_css(&config.colors);
    let css = format!("{}\n\n{}", color_css, CSS_STATIC);

    let carousel = Carousel::new(config.carousel.slides.clone());

    let content = html! {
        main.landing {
            (carousel.render())
            (intro::render(&config.intro))
            (stats::render(&config.stats.items))
        }
        (footer::render(&config.footer))
        // The script only matters when there are slides to move through.
        @if !carousel.is_empty() {
            script { (PreEscaped(JS)) }
        }
    };

    base_document(&config.site.title, &css, content)
}

/// Write the rendered page to `output_dir/index.html`.
pub fn generate(config: &SiteConfig, output_dir: &Path) -> Result<(), GenerateError> {
    fs::create_dir_all(output_dir)?;
    let page = render_page(config);
    fs::write(output_dir.join("index.html"), page.into_string())?;
    Ok(())
}

/// Renders the base HTML document structure.
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (css) }
            }
            body {
                (content)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::Slide;

    #[test]
    fn base_document_includes_doctype() {
        let content = html! { p { "test" } };
        let doc = base_document("Test", "body {}", content).into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Test</title>"));
    }

    #[test]
    fn render_page_contains_every_component() {
        let config = SiteConfig::default();
        let html = render_page(&config).into_string();

        // Match markup, not the embedded stylesheet's class names.
        assert!(html.contains(r#"class="carousel""#));
        assert!(html.contains("Discover Our Latest Collection"));
        assert!(html.contains(r#"class="stats-grid""#));
        assert!(html.contains(r#"class="site-footer""#));
    }

    #[test]
    fn render_page_injects_config_colors() {
        let mut config = SiteConfig::default();
        config.colors.light.background = "#123456".to_string();
        let html = render_page(&config).into_string();
        assert!(html.contains("--color-bg: #123456"));
    }

    #[test]
    fn render_page_embeds_carousel_script() {
        let config = SiteConfig::default();
        let html = render_page(&config).into_string();
        assert!(html.contains("<script>"));
        assert!(html.contains("data-action"));
    }

    #[test]
    fn empty_carousel_omits_markup_and_script() {
        let mut config = SiteConfig::default();
        config.carousel.slides.clear();
        let html = render_page(&config).into_string();

        assert!(!html.contains(r#"class="carousel""#));
        assert!(!html.contains("<script>"));
        // The rest of the page is unaffected.
        assert!(html.contains(r#"class="stats-grid""#));
        assert!(html.contains(r#"class="site-footer""#));
    }

    #[test]
    fn slides_without_src_degrade_silently() {
        let mut config = SiteConfig::default();
        config.carousel.slides = vec![Slide::default(), Slide::default()];
        let html = render_page(&config).into_string();
        assert!(!html.contains(r#"class="carousel""#));
    }

    #[test]
    fn page_title_from_config() {
        let mut config = SiteConfig::default();
        config.site.title = "Acme Landing".to_string();
        let html = render_page(&config).into_string();
        assert!(html.contains("<title>Acme Landing</title>"));
    }
}
