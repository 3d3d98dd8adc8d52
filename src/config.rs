//! Site configuration.
//!
//! Handles loading and validating the site's TOML config. One file drives
//! the whole page; every key is optional and falls back to a stock default,
//! so a missing or empty config still produces the complete default site.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "PHY-TECH"
//!
//! [[carousel.slides]]
//! src = "https://example.com/photo.jpg"
//! alt = "Product photo"       # optional
//! caption = "New arrivals"    # optional
//!
//! [footer]
//! company = "PHY-TECH"
//! year = 2026                 # defaults to the current year
//! links = [
//!     { href = "/about", label = "About" },
//!     { href = "https://example.com", label = "Example", external = true },
//! ]
//!
//! [[stats.items]]
//! id = "sales"
//! title = "Sales"
//! value = "12.4k"
//! delta = "4.2%"              # optional
//! delta_type = "up"           # "up" | "down"
//! color = "#10b981"           # optional accent, #rrggbb
//! note = "vs last week"       # optional
//!
//! [intro]
//! heading = "Discover Our Latest Collection"
//! body = "Markdown **body** text."
//!
//! [colors.light]
//! background = "#ffffff"
//! # ... (see stock config for the full set)
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want. Unknown
//! keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::carousel::{self, Slide};
use crate::footer::FooterProps;
use crate::intro::IntroProps;
use crate::stats::StatItem;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from a TOML file.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Page-level settings (document title).
    pub site: SiteSection,
    /// Carousel slide list.
    pub carousel: CarouselSection,
    /// Footer props (company, year, links).
    pub footer: FooterProps,
    /// Stats-card items. Empty list falls back to the stock set at render.
    pub stats: StatsSection,
    /// Intro heading and markdown body.
    pub intro: IntroProps,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for link in &self.footer.links {
            if link.href.is_empty() || link.label.is_empty() {
                return Err(ConfigError::Validation(
                    "footer links need a non-empty href and label".into(),
                ));
            }
        }
        for item in &self.stats.items {
            if item.title.is_empty() || item.value.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "stats item '{}' needs a non-empty title and value",
                    item.id
                )));
            }
            if let Some(color) = &item.color {
                if !is_hex_color(color) {
                    return Err(ConfigError::Validation(format!(
                        "stats item '{}': color '{}' is not #rrggbb",
                        item.id, color
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Page-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Document title (`<title>`).
    pub title: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "PHY-TECH".to_string(),
        }
    }
}

/// Carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselSection {
    /// Ordered slide list. Defaults to the stock slides; set to an empty
    /// list to drop the carousel from the page entirely.
    pub slides: Vec<Slide>,
}

impl Default for CarouselSection {
    fn default() -> Self {
        Self {
            slides: carousel::default_slides(),
        }
    }
}

/// Stats settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatsSection {
    /// Ordered stat cards. An empty list renders the stock set.
    pub items: Vec<StatItem>,
}

/// `#rrggbb` check used by config validation.
fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

// =============================================================================
// Color config
// =============================================================================

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background color.
    pub background: String,
    /// Primary text color.
    pub text: String,
    /// Muted/secondary text color (stat titles, notes, copyright line).
    pub text_muted: String,
    /// Card and footer border color.
    pub border: String,
    /// Link color.
    pub link: String,
    /// Link hover color.
    pub link_hover: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#111827".to_string(),
            text_muted: "#6b7280".to_string(),
            border: "#e5e7eb".to_string(),
            link: "#333333".to_string(),
            link_hover: "#000000".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            text: "#eeeeee".to_string(),
            text_muted: "#999999".to_string(),
            border: "#333333".to_string(),
            link: "#cccccc".to_string(),
            link_hover: "#ffffff".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Load config from a TOML file.
///
/// A missing file yields the stock defaults. A present file is parsed on
/// top of the defaults (sparse overrides), unknown keys are rejected, and
/// the result is validated.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let config = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock config with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Showcase Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

[site]
# Document title.
title = "PHY-TECH"

# ---------------------------------------------------------------------------
# Carousel
# ---------------------------------------------------------------------------
# Ordered slide list. Set `slides = []` under [carousel] to drop the
# carousel from the page. Each slide needs a `src`; `alt` and `caption`
# are optional.
[[carousel.slides]]
src = "https://images.unsplash.com/photo-1503602642458-232111445657?w=800"

[[carousel.slides]]
src = "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=800"

[[carousel.slides]]
src = "https://images.unsplash.com/photo-1503602642458-232111445657?w=800"

[[carousel.slides]]
src = "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=800"

# ---------------------------------------------------------------------------
# Intro
# ---------------------------------------------------------------------------
[intro]
heading = "Discover Our Latest Collection"
# Markdown. Bold, links, lists etc. all work.
body = "Explore a curated selection of fashion-forward pieces that blend style and comfort. From casual wear to elegant outfits, find everything you need to refresh your wardrobe."

# ---------------------------------------------------------------------------
# Stats
# ---------------------------------------------------------------------------
# Leave the list out (or empty) to show the stock demo cards.
# [[stats.items]]
# id = "sales"
# title = "Sales"
# value = "12.4k"
# delta = "4.2%"            # optional delta pill
# delta_type = "up"         # "up" | "down"
# color = "#10b981"         # optional accent, #rrggbb
# note = "vs last week"     # optional note next to the pill

# ---------------------------------------------------------------------------
# Footer
# ---------------------------------------------------------------------------
[footer]
company = "PHY-TECH"
# year defaults to the current year; pin it only if you need to.
# year = 2026
links = [
    { href = "/about", label = "About" },
    { href = "/privacy", label = "Privacy" },
    { href = "/terms", label = "Terms" },
]

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#111827"
text_muted = "#6b7280"    # Stat titles, notes, copyright line
border = "#e5e7eb"
link = "#333333"
link_hover = "#000000"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0a0a0a"
text = "#eeeeee"
text_muted = "#999999"
border = "#333333"
link = "#cccccc"
link_hover = "#ffffff"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-link: {light_link};
    --color-link-hover: {light_link_hover};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-link: {dark_link};
        --color-link-hover: {dark_link_hover};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_link = colors.light.link,
        light_link_hover = colors.light.link_hover,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_link = colors.dark.link,
        dark_link_hover = colors.dark.link_hover,
    )
}
