//! The intro text block under the carousel: a heading plus a markdown body.

use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use serde::{Deserialize, Serialize};

/// Intro props. Defaults to the stock collection blurb.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntroProps {
    pub heading: String,
    /// Markdown body, converted to HTML at render time.
    pub body: String,
}

impl Default for IntroProps {
    fn default() -> Self {
        Self {
            heading: "Discover Our Latest Collection".to_string(),
            body: "Explore a curated selection of fashion-forward pieces that blend \
                   style and comfort. From casual wear to elegant outfits, find \
                   everything you need to refresh your wardrobe."
                .to_string(),
        }
    }
}

/// Render the intro block. An empty heading and body render to nothing.
pub fn render(props: &IntroProps) -> Markup {
    if props.heading.is_empty() && props.body.is_empty() {
        return html! {};
    }

    let parser = Parser::new(&props.body);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);

    html! {
        section.intro {
            @if !props.heading.is_empty() {
                h1 { (props.heading) }
            }
            div.intro-body {
                (PreEscaped(body_html))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_intro_renders_heading_and_body() {
        let html = render(&IntroProps::default()).into_string();
        assert!(html.contains("<h1>Discover Our Latest Collection</h1>"));
        assert!(html.contains("curated selection"));
    }

    #[test]
    fn body_markdown_is_converted() {
        let props = IntroProps {
            heading: "Hi".to_string(),
            body: "This is **bold** and *italic*.".to_string(),
        };
        let html = render(&props).into_string();
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }

    #[test]
    fn empty_props_render_nothing() {
        let props = IntroProps {
            heading: String::new(),
            body: String::new(),
        };
        assert_eq!(render(&props).into_string(), "");
    }

    #[test]
    fn heading_is_escaped() {
        let props = IntroProps {
            heading: "<script>x</script>".to_string(),
            body: String::new(),
        };
        let html = render(&props).into_string();
        assert!(!html.contains("<script>"));
    }
}
