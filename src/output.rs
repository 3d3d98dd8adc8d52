//! CLI output formatting.
//!
//! Output is information-centric, not file-centric: the page leads, each
//! component follows as an indented line with its semantic content (slide
//! count, card count, link count) rather than implementation details.
//!
//! ```text
//! Home → index.html
//!     Carousel (4 slides)
//!     Intro: Discover Our Latest Collection
//!     Stats (4 cards, stock set)
//!     Footer (3 links, © 2026 PHY-TECH)
//! ```
//!
//! Each formatter is a pure function returning `Vec<String>` for
//! testability, with a `print_*` wrapper that writes to stdout.

use crate::carousel::Carousel;
use crate::config::SiteConfig;
use crate::stats;

/// Format the component summary for a config.
///
/// The counts reflect what actually renders: slides are counted after
/// dropping malformed entries, and an empty stats list reports the stock
/// set it falls back to.
pub fn format_page_summary(config: &SiteConfig) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Home \u{2192} index.html".to_string());

    let carousel = Carousel::new(config.carousel.slides.clone());
    if carousel.is_empty() {
        lines.push("    Carousel (no slides, omitted)".to_string());
    } else {
        lines.push(format!("    Carousel ({} slides)", carousel.len()));
    }

    if !config.intro.heading.is_empty() {
        lines.push(format!("    Intro: {}", config.intro.heading));
    }

    if config.stats.items.is_empty() {
        lines.push(format!(
            "    Stats ({} cards, stock set)",
            stats::default_items().len()
        ));
    } else {
        lines.push(format!("    Stats ({} cards)", config.stats.items.len()));
    }

    lines.push(format!(
        "    Footer ({} links, \u{00a9} {} {})",
        config.footer.links.len(),
        config.footer.year,
        config.footer.company
    ));

    lines
}

/// Print the page summary to stdout.
pub fn print_page_summary(config: &SiteConfig) {
    for line in format_page_summary(config) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatItem;

    #[test]
    fn summary_lists_every_component() {
        let config = SiteConfig::default();
        let lines = format_page_summary(&config);

        assert_eq!(lines[0], "Home \u{2192} index.html");
        assert_eq!(lines[1], "    Carousel (4 slides)");
        assert_eq!(lines[2], "    Intro: Discover Our Latest Collection");
        assert_eq!(lines[3], "    Stats (4 cards, stock set)");
        assert!(lines[4].starts_with("    Footer (3 links,"));
        assert!(lines[4].contains("PHY-TECH"));
    }

    #[test]
    fn summary_marks_omitted_carousel() {
        let mut config = SiteConfig::default();
        config.carousel.slides.clear();
        let lines = format_page_summary(&config);
        assert_eq!(lines[1], "    Carousel (no slides, omitted)");
    }

    #[test]
    fn summary_counts_configured_stats() {
        let mut config = SiteConfig::default();
        config.stats.items = vec![StatItem {
            id: "one".to_string(),
            title: "One".to_string(),
            value: "1".to_string(),
            ..StatItem::default()
        }];
        let lines = format_page_summary(&config);
        assert!(lines.iter().any(|l| l.contains("Stats (1 cards)")));
    }

    #[test]
    fn summary_skips_empty_intro() {
        let mut config = SiteConfig::default();
        config.intro.heading.clear();
        let lines = format_page_summary(&config);
        assert!(!lines.iter().any(|l| l.contains("Intro:")));
    }
}
