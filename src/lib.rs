//! # Showcase
//!
//! A minimal static landing-page generator. One TOML config drives one
//! self-contained HTML page built from four presentational components: an
//! image carousel, an intro text block, a stats-card grid, and a footer.
//!
//! # Architecture: Components In, One Page Out
//!
//! ```text
//! showcase.toml  →  render components  →  dist/index.html
//! ```
//!
//! Every component is a pure function from props to markup. The one piece
//! of state in the system is the carousel's current slide index, owned by
//! [`carousel::Carousel`] and mutated only by its three transitions
//! (advance, retreat, jump-to). Everything else — footer, stats, intro —
//! maps its input records straight to markup, entry by entry, in order.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`carousel`] | Cyclic slide index + transitions, slide strip rendering |
//! | [`footer`] | Copyright line and link list from [`footer::FooterProps`] |
//! | [`stats`] | Stat-card grid: values, delta pills, accent badges |
//! | [`intro`] | Heading + markdown body (via pulldown-cmark) |
//! | [`icons`] | Shared inline SVG fragments (chevrons, arrows, badges) |
//! | [`config`] | `showcase.toml` loading, defaults, validation, color CSS |
//! | [`generate`] | Page assembly and `index.html` output |
//! | [`output`] | CLI output formatting — component summary lines |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, template variables
//! are Rust expressions, and all interpolation is auto-escaped.
//!
//! ## Defaults All The Way Down
//!
//! Every config field has a stock default: a missing config file, an empty
//! config file, and `showcase gen-config`'s output all describe the same
//! site. Components keep their own fallbacks too — an empty stats list
//! renders the stock card set, a footer with no links still shows the
//! copyright line — so a sparse config degrades to something complete
//! rather than something broken.
//!
//! ## Graceful Degradation Over Errors
//!
//! Rendering never fails. An empty slide list renders no carousel (and no
//! controls) instead of erroring; slides with no image source are dropped
//! at construction; malformed accent colors fall back to the stock indigo.
//! The only hard errors live at the edges: config files that don't parse
//! or validate, and I/O failures writing the output.
//!
//! ## Self-Contained Output
//!
//! The stylesheet (with colors injected from config) and the ~30-line
//! carousel script are embedded in the page. `dist/index.html` is the
//! entire site — no asset directory to ship or get out of sync.

pub mod carousel;
pub mod config;
pub mod footer;
pub mod generate;
pub mod icons;
pub mod intro;
pub mod output;
pub mod stats;
