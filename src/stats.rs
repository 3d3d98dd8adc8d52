//! The stats-card grid — a pure, stateless render of its items.
//!
//! Each card shows a title, a value, an icon badge, and optionally a delta
//! pill (up/down arrow plus text) and a note. Cards are independent and
//! render in input order. An empty item list falls back to a built-in
//! default set so the section never renders blank.
//!
//! Accent colors are configured as `#rrggbb` hex; the badge background is
//! the same hue at low alpha via [`hex_to_rgba`]. Missing or malformed
//! colors fall back to the stock indigo.

use maud::{Markup, PreEscaped, html};
use serde::{Deserialize, Serialize};

use crate::icons;

/// Stock indigo accent used when an item has no (valid) color.
const DEFAULT_ACCENT: &str = "#4f46e5";

/// Direction of a stat's delta badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaType {
    #[default]
    Up,
    Down,
}

/// One stat card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatItem {
    pub id: String,
    pub title: String,
    pub value: String,
    /// Delta text, e.g. `"4.2%"`. No pill is rendered when absent.
    pub delta: Option<String>,
    pub delta_type: DeltaType,
    /// Optional inline SVG for the badge. Injected unescaped — config is
    /// trusted input, same as the embedded stylesheet.
    pub icon: Option<String>,
    /// Accent color as `#rrggbb`.
    pub color: Option<String>,
    /// Optional note shown next to the delta pill.
    pub note: Option<String>,
}

/// The stock item set used when the configured list is empty.
pub fn default_items() -> Vec<StatItem> {
    let item = |id: &str, title: &str, value: &str, delta: &str, dt: DeltaType, color: &str| StatItem {
        id: id.to_string(),
        title: title.to_string(),
        value: value.to_string(),
        delta: Some(delta.to_string()),
        delta_type: dt,
        icon: None,
        color: Some(color.to_string()),
        note: None,
    };
    vec![
        item("visits", "Visits", "8.4k", "2.4%", DeltaType::Up, "#0ea5a4"),
        item("signups", "Signups", "1.2k", "0.6%", DeltaType::Up, "#06b6d4"),
        item("conversion", "Conversion", "3.8%", "−0.4%", DeltaType::Down, "#f97316"),
        item("revenue", "Revenue", "$12.4k", "5.8%", DeltaType::Up, "#10b981"),
    ]
}

/// Convert `#rrggbb` to a CSS `rgba(...)` string.
///
/// Anything that is not a 6-digit hex color yields the indigo fallback at
/// the same alpha, matching the badge's default accent.
pub fn hex_to_rgba(hex: &str, alpha: f32) -> String {
    let cleaned = hex.trim_start_matches('#');
    if cleaned.len() == 6 {
        if let Ok(rgb) = u32::from_str_radix(cleaned, 16) {
            let r = (rgb >> 16) & 0xff;
            let g = (rgb >> 8) & 0xff;
            let b = rgb & 0xff;
            return format!("rgba({r}, {g}, {b}, {alpha})");
        }
    }
    format!("rgba(79, 70, 229, {alpha})")
}

/// Render the stats grid.
///
/// An empty slice renders the default item set; the section is never blank.
pub fn render(items: &[StatItem]) -> Markup {
    let fallback;
    let list: &[StatItem] = if items.is_empty() {
        fallback = default_items();
        &fallback
    } else {
        items
    };

    html! {
        div.stats-grid {
            @for item in list {
                (render_card(item))
            }
        }
    }
}

fn render_card(item: &StatItem) -> Markup {
    let accent = item.color.as_deref().unwrap_or(DEFAULT_ACCENT);
    let badge_style = format!(
        "background: {}; color: {};",
        hex_to_rgba(accent, 0.12),
        accent
    );
    let is_up = item.delta_type != DeltaType::Down;

    html! {
        div.stat-card role="group" aria-label=(item.title) {
            div.stat-top {
                div {
                    p.stat-title { (item.title) }
                    p.stat-value { (item.value) }
                }
                div.stat-badge style=(badge_style) {
                    @if let Some(icon) = &item.icon {
                        (PreEscaped(icon.as_str()))
                    } @else {
                        (icons::stat_badge_default(accent))
                    }
                }
            }
            @if item.delta.is_some() || item.note.is_some() {
                div.stat-bottom {
                    @if let Some(delta) = &item.delta {
                        span.stat-delta.up[is_up].down[!is_up] {
                            (icons::delta_arrow(is_up))
                            (delta)
                        }
                    }
                    @if let Some(note) = &item.note {
                        span.stat-note { (note) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // hex_to_rgba
    // =========================================================================

    #[test]
    fn hex_to_rgba_six_digit() {
        assert_eq!(hex_to_rgba("#10b981", 0.12), "rgba(16, 185, 129, 0.12)");
    }

    #[test]
    fn hex_to_rgba_without_hash() {
        assert_eq!(hex_to_rgba("ffffff", 1.0), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn hex_to_rgba_malformed_falls_back_to_indigo() {
        assert_eq!(hex_to_rgba("#fff", 0.5), "rgba(79, 70, 229, 0.5)");
        assert_eq!(hex_to_rgba("not-a-color", 0.5), "rgba(79, 70, 229, 0.5)");
        assert_eq!(hex_to_rgba("", 0.5), "rgba(79, 70, 229, 0.5)");
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    #[test]
    fn empty_items_render_defaults() {
        let html = render(&[]).into_string();
        assert!(html.contains("Visits"));
        assert!(html.contains("Revenue"));
        assert_eq!(html.matches("stat-card").count(), 4);
    }

    #[test]
    fn configured_items_replace_defaults() {
        let items = vec![StatItem {
            id: "sales".to_string(),
            title: "Sales".to_string(),
            value: "12.4k".to_string(),
            delta: Some("4.2%".to_string()),
            ..StatItem::default()
        }];
        let html = render(&items).into_string();
        assert!(html.contains("Sales"));
        assert!(!html.contains("Visits"));
        assert_eq!(html.matches("stat-card").count(), 1);
    }

    #[test]
    fn items_render_in_order() {
        let html = render(&[]).into_string();
        let visits = html.find("Visits").unwrap();
        let revenue = html.find("Revenue").unwrap();
        assert!(visits < revenue);
    }

    #[test]
    fn delta_pill_direction_classes() {
        let html = render(&default_items()).into_string();
        assert!(html.contains("stat-delta up"));
        assert!(html.contains("stat-delta down"));
    }

    #[test]
    fn no_delta_no_pill() {
        let items = vec![StatItem {
            id: "plain".to_string(),
            title: "Plain".to_string(),
            value: "1".to_string(),
            ..StatItem::default()
        }];
        let html = render(&items).into_string();
        assert!(!html.contains("stat-delta"));
    }

    #[test]
    fn badge_uses_accent_color() {
        let items = vec![StatItem {
            id: "a".to_string(),
            title: "A".to_string(),
            value: "1".to_string(),
            color: Some("#10b981".to_string()),
            ..StatItem::default()
        }];
        let html = render(&items).into_string();
        assert!(html.contains("rgba(16, 185, 129, 0.12)"));
    }

    #[test]
    fn configured_icon_is_injected_raw() {
        let items = vec![StatItem {
            id: "a".to_string(),
            title: "A".to_string(),
            value: "1".to_string(),
            icon: Some(r#"<svg class="custom"></svg>"#.to_string()),
            ..StatItem::default()
        }];
        let html = render(&items).into_string();
        assert!(html.contains(r#"<svg class="custom"></svg>"#));
    }

    #[test]
    fn note_renders_next_to_delta() {
        let items = vec![StatItem {
            id: "a".to_string(),
            title: "A".to_string(),
            value: "1".to_string(),
            note: Some("vs last week".to_string()),
            ..StatItem::default()
        }];
        let html = render(&items).into_string();
        assert!(html.contains("vs last week"));
        assert!(html.contains("stat-note"));
    }

    #[test]
    fn title_is_escaped() {
        let items = vec![StatItem {
            id: "x".to_string(),
            title: "<img onerror=x>".to_string(),
            value: "1".to_string(),
            ..StatItem::default()
        }];
        let html = render(&items).into_string();
        assert!(!html.contains("<img onerror"));
    }

    #[test]
    fn delta_type_parses_lowercase() {
        let item: StatItem =
            toml::from_str(r#"delta_type = "down""#).unwrap();
        assert_eq!(item.delta_type, DeltaType::Down);
    }
}
