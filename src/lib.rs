//! postfig - Static SVG diagrams for blog posts
//!
//! A small declarative markup builder plus the drawing scripts that use it:
//! geometry illustrations, git branch diagrams, and coroutine lifecycle
//! diagrams, each rendered to an indented SVG string.
//!
//! # Example
//!
//! ```rust
//! use postfig::{attrs, svg_with};
//!
//! let doc = svg_with(attrs! { width: 120, height: 80 }, |root| {
//!     root.child("rect", attrs! { x: 10, y: 10, width: 100, height: 60, stroke_width: 2 });
//! });
//! assert!(doc.render(0).contains(r#"stroke-width="2""#));
//! ```
//!
//! The binary renders every registered diagram into an output directory and
//! can re-run external drawing scripts when a watched directory changes.

pub mod diagrams;
pub mod markup;
pub mod output;
pub mod theme;
pub mod watch;

pub use markup::{svg, svg_with, Attrs, Element, SVG_NS};
pub use theme::Palette;
