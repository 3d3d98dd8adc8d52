//! The image carousel — the only stateful component on the page.
//!
//! A [`Carousel`] owns an index into a fixed, ordered list of slides and
//! moves through it cyclically: advancing past the last slide wraps to the
//! first, retreating from the first wraps to the last, and each indicator
//! dot jumps directly to its slide. The slide list is fixed at construction;
//! only the index moves.
//!
//! ## State machine
//!
//! ```text
//! states:      { 0, 1, …, len-1 }       (initial: 0)
//! advance:     i → (i + 1) mod len
//! retreat:     i → (i + len - 1) mod len
//! jump_to(j):  i → j                    (valid j only; invalid j rejected)
//! ```
//!
//! The transitions are total — `advance` and `retreat` cannot fail, and an
//! out-of-range `jump_to` leaves the state untouched and reports
//! [`CarouselError::InvalidIndex`]. Indicator controls are generated from
//! the same slide list, so under normal operation they cannot produce an
//! out-of-range index; the error exists for defensive callers.
//!
//! ## Rendering
//!
//! [`Carousel::render`] is a pure function of the current index and the
//! slide list. It produces the slide strip (offset so the current slide is
//! visible), previous/next controls, and one indicator per slide with the
//! current one marked. The controls carry `data-action` / `data-slide`
//! attributes consumed by the embedded page script, which mirrors the same
//! transitions client-side. An empty slide list renders to nothing — no
//! crash, no partial UI.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::icons;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CarouselError {
    #[error("slide index {index} out of range ({len} slides)")]
    InvalidIndex { index: usize, len: usize },
}

/// One unit of carousel content: an image locator plus optional text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Slide {
    /// Image URL (absolute or site-relative).
    pub src: String,
    /// Alt text. Falls back to a positional "Slide N" when empty.
    pub alt: Option<String>,
    /// Optional caption shown over the image.
    pub caption: Option<String>,
}

/// The stock slide list used when the config provides none.
pub fn default_slides() -> Vec<Slide> {
    [
        "https://images.unsplash.com/photo-1503602642458-232111445657?w=800",
        "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=800",
        "https://images.unsplash.com/photo-1503602642458-232111445657?w=800",
        "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=800",
    ]
    .into_iter()
    .map(|src| Slide {
        src: src.to_string(),
        alt: None,
        caption: None,
    })
    .collect()
}

/// Cyclic image carousel over a fixed slide list.
///
/// Invariant: `current < slides.len()` whenever the list is non-empty.
/// `current` starts at 0 and is mutated only by [`advance`](Self::advance),
/// [`retreat`](Self::retreat), and [`jump_to`](Self::jump_to).
#[derive(Debug, Clone)]
pub struct Carousel {
    slides: Vec<Slide>,
    current: usize,
}

impl Carousel {
    /// Build a carousel from a slide list.
    ///
    /// Slides with an empty `src` are dropped — a malformed entry degrades
    /// the list, never the component.
    pub fn new(slides: Vec<Slide>) -> Self {
        let slides: Vec<Slide> = slides.into_iter().filter(|s| !s.src.is_empty()).collect();
        Self { slides, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// The currently visible slide index.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Move to the next slide, wrapping from the last back to the first.
    pub fn advance(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        self.current = if self.current == self.slides.len() - 1 {
            0
        } else {
            self.current + 1
        };
    }

    /// Move to the previous slide, wrapping from the first to the last.
    pub fn retreat(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        self.current = if self.current == 0 {
            self.slides.len() - 1
        } else {
            self.current - 1
        };
    }

    /// Jump directly to `index`.
    ///
    /// Out-of-range indices leave the state unchanged and return
    /// [`CarouselError::InvalidIndex`].
    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.slides.len() {
            return Err(CarouselError::InvalidIndex {
                index,
                len: self.slides.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Render the carousel at its current position.
    ///
    /// Pure — no state changes. An empty carousel renders to empty markup.
    pub fn render(&self) -> Markup {
        if self.slides.is_empty() {
            return html! {};
        }

        // The strip holds every slide side by side; the offset brings the
        // current one into the frame.
        let offset = format!("transform: translateX(-{}%);", self.current * 100);

        html! {
            section.carousel data-current=(self.current) {
                button.carousel-control.prev data-action="prev" aria-label="Previous slide" {
                    (icons::chevron_left())
                }
                div.carousel-strip style=(offset) {
                    @for (i, slide) in self.slides.iter().enumerate() {
                        figure.carousel-slide {
                            img src=(slide.src) alt=(slide_alt(slide, i)) loading="lazy";
                            @if let Some(caption) = &slide.caption {
                                figcaption { (caption) }
                            }
                        }
                    }
                }
                button.carousel-control.next data-action="next" aria-label="Next slide" {
                    (icons::chevron_right())
                }
                div.carousel-indicators {
                    @for i in 0..self.slides.len() {
                        button.indicator.active[i == self.current]
                            data-slide=(i)
                            aria-label={ "Go to slide " (i + 1) } {}
                    }
                }
            }
        }
    }
}

fn slide_alt(slide: &Slide, index: usize) -> String {
    match &slide.alt {
        Some(alt) if !alt.is_empty() => alt.clone(),
        _ => format!("Slide {}", index + 1),
    }
}
