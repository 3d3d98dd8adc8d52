//! The site footer — a pure, stateless render of its props.
//!
//! Shows a copyright line (`© {year} {company}`) and an ordered link list.
//! Every field has a stock default, so an unconfigured site still gets a
//! complete footer: the default company name, the current year, and the
//! usual About/Privacy/Terms links. External links open in a new tab with
//! `rel="noopener noreferrer"`.

use chrono::{Datelike, Utc};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

/// One footer navigation link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterLink {
    pub href: String,
    pub label: String,
    /// External links get `target="_blank"` and a noopener rel.
    #[serde(default)]
    pub external: bool,
}

/// Footer props. Defaults: company `PHY-TECH`, the current year, and the
/// About/Privacy/Terms link trio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterProps {
    pub company: String,
    pub year: i32,
    pub links: Vec<FooterLink>,
}

impl Default for FooterProps {
    fn default() -> Self {
        Self {
            company: "PHY-TECH".to_string(),
            year: current_year(),
            links: default_links(),
        }
    }
}

/// The current year in UTC, used when the config does not pin one.
pub fn current_year() -> i32 {
    Utc::now().year()
}

fn default_links() -> Vec<FooterLink> {
    [("/about", "About"), ("/privacy", "Privacy"), ("/terms", "Terms")]
        .into_iter()
        .map(|(href, label)| FooterLink {
            href: href.to_string(),
            label: label.to_string(),
            external: false,
        })
        .collect()
}

/// Render the footer. Total — any well-typed props produce markup.
pub fn render(props: &FooterProps) -> Markup {
    html! {
        footer.site-footer role="contentinfo" {
            div.footer-inner {
                div.footer-copyright {
                    "© " (props.year) " " (props.company)
                }
                nav aria-label="Footer" {
                    ul.footer-links {
                        @for link in &props.links {
                            li {
                                @if link.external {
                                    a href=(link.href) target="_blank" rel="noopener noreferrer" {
                                        (link.label)
                                    }
                                } @else {
                                    a href=(link.href) { (link.label) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_footer_has_three_links_and_current_year() {
        let props = FooterProps::default();
        let html = render(&props).into_string();
        assert!(html.contains("About"));
        assert!(html.contains("Privacy"));
        assert!(html.contains("Terms"));
        assert!(html.contains(&current_year().to_string()));
        assert!(html.contains("PHY-TECH"));
    }

    #[test]
    fn links_render_in_order() {
        let props = FooterProps::default();
        let html = render(&props).into_string();
        let about = html.find("About").unwrap();
        let privacy = html.find("Privacy").unwrap();
        let terms = html.find("Terms").unwrap();
        assert!(about < privacy && privacy < terms);
    }

    #[test]
    fn external_link_opens_new_tab() {
        let props = FooterProps {
            links: vec![FooterLink {
                href: "https://example.com".to_string(),
                label: "Example".to_string(),
                external: true,
            }],
            ..FooterProps::default()
        };
        let html = render(&props).into_string();
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn internal_link_has_no_target() {
        let props = FooterProps::default();
        let html = render(&props).into_string();
        assert!(!html.contains("target="));
    }

    #[test]
    fn pinned_year_overrides_default() {
        let props = FooterProps {
            year: 1999,
            ..FooterProps::default()
        };
        let html = render(&props).into_string();
        assert!(html.contains("© 1999 PHY-TECH"));
    }

    #[test]
    fn company_name_is_escaped() {
        let props = FooterProps {
            company: "<script>alert(1)</script>".to_string(),
            ..FooterProps::default()
        };
        let html = render(&props).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_links_still_renders_copyright() {
        let props = FooterProps {
            links: vec![],
            ..FooterProps::default()
        };
        let html = render(&props).into_string();
        assert!(html.contains("PHY-TECH"));
        assert!(!html.contains("<li>"));
    }
}
