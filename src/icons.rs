//! Shared inline SVG fragments.
//!
//! All icons are rendered through maud rather than pasted as raw strings,
//! so they participate in the same markup tree as everything else. Sizing
//! and color come from CSS (`currentColor` / explicit stroke) so the same
//! icon works in any context.

use maud::{Markup, html};

/// Circled left chevron used by the carousel's previous control.
pub fn chevron_left() -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" class="icon" aria-hidden="true" {
            path fill-rule="evenodd" clip-rule="evenodd"
                d="M12 2.25c-5.385 0-9.75 4.365-9.75 9.75s4.365 9.75 9.75 9.75 9.75-4.365 9.75-9.75S17.385 2.25 12 2.25Zm-4.28 9.22a.75.75 0 0 0 0 1.06l3 3a.75.75 0 1 0 1.06-1.06l-1.72-1.72h5.69a.75.75 0 0 0 0-1.5h-5.69l1.72-1.72a.75.75 0 0 0-1.06-1.06l-3 3Z" {}
        }
    }
}

/// Circled right chevron used by the carousel's next control.
pub fn chevron_right() -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" class="icon" aria-hidden="true" {
            path fill-rule="evenodd" clip-rule="evenodd"
                d="M12 2.25c-5.385 0-9.75 4.365-9.75 9.75s4.365 9.75 9.75 9.75 9.75-4.365 9.75-9.75S17.385 2.25 12 2.25Zm4.28 10.28a.75.75 0 0 0 0-1.06l-3-3a.75.75 0 1 0-1.06 1.06l1.72 1.72H8.25a.75.75 0 0 0 0 1.5h5.69l-1.72 1.72a.75.75 0 1 0 1.06 1.06l3-3Z" {}
        }
    }
}

/// Up or down arrow for stat delta badges.
pub fn delta_arrow(up: bool) -> Markup {
    let d = if up {
        "M12 19V6M12 6l-5 5M12 6l5 5"
    } else {
        "M12 5v13M12 19l5-5M12 19l-5-5"
    };
    html! {
        svg width="12" height="12" viewBox="0 0 24 24" fill="none" aria-hidden="true" xmlns="http://www.w3.org/2000/svg" {
            path d=(d) stroke="currentColor" stroke-width="1.6" stroke-linecap="round" stroke-linejoin="round" {}
        }
    }
}

/// Fallback badge icon for stat cards without a configured icon.
///
/// A plain three-line glyph, stroked in the card's accent color.
pub fn stat_badge_default(stroke: &str) -> Markup {
    html! {
        svg width="18" height="18" viewBox="0 0 24 24" fill="none" aria-hidden="true" {
            path d="M3 12h18M3 6h18M3 18h18" stroke=(stroke) stroke-width="1.6" stroke-linecap="round" stroke-linejoin="round" {}
        }
    }
}
