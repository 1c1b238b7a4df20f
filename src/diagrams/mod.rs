//! The drawing scripts.
//!
//! Each diagram is a plain function from a [`Palette`] to a rendered SVG
//! string: build one markup tree, serialize it, hand the string back. The
//! registry in [`all`] is what the CLI and the integration tests enumerate.
//!
//! Coordinate math stays inside the individual scripts; the shared helpers
//! here are limited to number formatting, label sizing, and the boilerplate
//! every diagram repeats (style block, arrow marker defs).

mod coroutines;
mod geometry;
mod gitgraph;

pub use coroutines::{coroutine_lifecycle, coroutine_timeline};
pub use geometry::{ellipse_axes, inscribed_angle};
pub use gitgraph::{feature_branch, rebase};

use crate::markup::Element;
use crate::theme::Palette;
use crate::attrs;

/// A registered diagram: the output file stem and the function that draws it.
pub struct Diagram {
    pub name: &'static str,
    pub draw: fn(&Palette) -> String,
}

/// Every diagram this crate knows how to draw.
pub fn all() -> Vec<Diagram> {
    vec![
        Diagram { name: "ellipse-axes", draw: ellipse_axes },
        Diagram { name: "inscribed-angle", draw: inscribed_angle },
        Diagram { name: "feature-branch", draw: feature_branch },
        Diagram { name: "rebase", draw: rebase },
        Diagram { name: "coroutine-lifecycle", draw: coroutine_lifecycle },
        Diagram { name: "coroutine-timeline", draw: coroutine_timeline },
    ]
}

/// Generates document-unique ids for defs (markers, clip paths). One
/// generator per script invocation; ids are never shared across diagrams.
#[derive(Debug, Default)]
pub struct IdGen {
    counter: u32,
}

impl IdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, prefix: &str) -> String {
        let id = format!("{}-{}", prefix, self.counter);
        self.counter += 1;
        id
    }
}

/// Format a coordinate at the scripts' working precision (one decimal),
/// dropping the decimal for whole values.
pub(crate) fn fmt_num(value: f64) -> String {
    let rounded = format!("{:.1}", value);
    match rounded.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => rounded,
    }
}

/// Average character width at the given font size, calibrated for Inter.
pub(crate) fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    text.len() as f64 * font_size * 0.55
}

/// Shared `<style>` block: font stack plus the two label classes every
/// script uses.
pub(crate) fn add_style(root: &mut Element, palette: &Palette) {
    let css = format!(
        "text {{ font-family: 'Inter', system-ui, sans-serif; }}\n.label {{ fill: {}; font-size: 13px; }}\n.muted {{ fill: {}; font-size: 11px; }}\n",
        palette.fg,
        palette.muted()
    );
    root.child_with("style", attrs! {}, |style| {
        style.text(css);
    });
}

/// Append a `<defs>` with one arrowhead marker and return the `url(#...)`
/// reference for `marker-end`.
pub(crate) fn arrow_defs(root: &mut Element, ids: &mut IdGen, color: &str) -> String {
    let id = ids.next("arrow");
    let marker_ref = format!("url(#{})", id);
    root.child_with("defs", attrs! {}, |defs| {
        defs.child_with(
            "marker",
            attrs! {
                id: id,
                markerWidth: 8,
                markerHeight: 6,
                refX: 8,
                refY: 3,
                orient: "auto"
            },
            |marker| {
                marker.child("polygon", attrs! { points: "0 0, 8 3, 0 6", fill: color });
            },
        );
    });
    marker_ref
}

/// Background rect filling the whole canvas.
pub(crate) fn add_background(root: &mut Element, palette: &Palette) {
    root.child("rect", attrs! { width: "100%", height: "100%", fill: palette.bg });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_num_drops_whole_decimals() {
        assert_eq!(fmt_num(40.0), "40");
        assert_eq!(fmt_num(40.26), "40.3");
        assert_eq!(fmt_num(-7.5), "-7.5");
    }

    #[test]
    fn id_gen_is_per_instance() {
        let mut a = IdGen::new();
        let mut b = IdGen::new();
        assert_eq!(a.next("arrow"), "arrow-0");
        assert_eq!(a.next("arrow"), "arrow-1");
        assert_eq!(b.next("arrow"), "arrow-0");
    }

    #[test]
    fn registry_names_are_unique() {
        let mut names: Vec<_> = all().iter().map(|d| d.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), all().len());
    }
}
