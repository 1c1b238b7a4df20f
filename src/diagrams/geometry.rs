//! Geometry illustrations: conic sections and circle theorems.

use super::{add_background, add_style, fmt_num};
use crate::attrs;
use crate::markup::{svg_with, Element};
use crate::theme::Palette;

/// Point on a circle at the given angle in degrees, measured
/// counter-clockwise from the positive x axis (screen y grows downward).
fn on_circle(cx: f64, cy: f64, r: f64, degrees: f64) -> (f64, f64) {
    let rad = degrees.to_radians();
    (cx + r * rad.cos(), cy - r * rad.sin())
}

/// Minor arc between the directions `p -> a` and `p -> b`, drawn at
/// `radius` around `p`. Used for angle markers.
fn angle_marker(p: (f64, f64), a: (f64, f64), b: (f64, f64), radius: f64) -> String {
    let d1 = (a.1 - p.1).atan2(a.0 - p.0);
    let d2 = (b.1 - p.1).atan2(b.0 - p.0);
    let mut delta = d2 - d1;
    while delta > std::f64::consts::PI {
        delta -= 2.0 * std::f64::consts::PI;
    }
    while delta < -std::f64::consts::PI {
        delta += 2.0 * std::f64::consts::PI;
    }
    let sweep = if delta > 0.0 { 1 } else { 0 };
    let e1 = (p.0 + radius * d1.cos(), p.1 + radius * d1.sin());
    let e2 = (p.0 + radius * d2.cos(), p.1 + radius * d2.sin());
    format!(
        "M {} {} A {} {} 0 0 {} {} {}",
        fmt_num(e1.0),
        fmt_num(e1.1),
        fmt_num(radius),
        fmt_num(radius),
        sweep,
        fmt_num(e2.0),
        fmt_num(e2.1)
    )
}

fn dot(parent: &mut Element, x: f64, y: f64, r: f64, fill: &str) {
    parent.child("circle", attrs! { cx: fmt_num(x), cy: fmt_num(y), r: fmt_num(r), fill: fill });
}

fn label(parent: &mut Element, x: f64, y: f64, class: &str, content: &str) {
    parent
        .child("text", attrs! { x: fmt_num(x), y: fmt_num(y), class: class })
        .text(content);
}

/// An ellipse with its semi-axes and foci marked.
pub fn ellipse_axes(palette: &Palette) -> String {
    let (width, height) = (460.0, 300.0);
    let (cx, cy) = (230.0, 150.0);
    let (rx, ry): (f64, f64) = (170.0, 90.0);
    // Focal distance: c^2 = a^2 - b^2.
    let c = (rx * rx - ry * ry).sqrt();

    let root = svg_with(
        attrs! {
            width: fmt_num(width),
            height: fmt_num(height),
            viewBox: format!("0 0 {} {}", fmt_num(width), fmt_num(height))
        },
        |root| {
            add_background(root, palette);
            add_style(root, palette);

            root.child(
                "ellipse",
                attrs! {
                    cx: fmt_num(cx),
                    cy: fmt_num(cy),
                    rx: fmt_num(rx),
                    ry: fmt_num(ry),
                    fill: palette.surface(),
                    stroke: palette.fg,
                    stroke_width: 1.5
                },
            );

            // Major and minor axes.
            root.child(
                "line",
                attrs! {
                    x1: fmt_num(cx - rx),
                    y1: fmt_num(cy),
                    x2: fmt_num(cx + rx),
                    y2: fmt_num(cy),
                    stroke: palette.line(),
                    stroke_width: 1,
                    stroke_dasharray: "5 3"
                },
            );
            root.child(
                "line",
                attrs! {
                    x1: fmt_num(cx),
                    y1: fmt_num(cy - ry),
                    x2: fmt_num(cx),
                    y2: fmt_num(cy + ry),
                    stroke: palette.line(),
                    stroke_width: 1,
                    stroke_dasharray: "5 3"
                },
            );

            // Semi-axis braces drawn as accent segments from the center.
            root.child(
                "line",
                attrs! {
                    x1: fmt_num(cx),
                    y1: fmt_num(cy),
                    x2: fmt_num(cx + rx),
                    y2: fmt_num(cy),
                    stroke: palette.accent(),
                    stroke_width: 2
                },
            );
            root.child(
                "line",
                attrs! {
                    x1: fmt_num(cx),
                    y1: fmt_num(cy),
                    x2: fmt_num(cx),
                    y2: fmt_num(cy - ry),
                    stroke: palette.accent(),
                    stroke_width: 2
                },
            );
            label(root, cx + rx / 2.0, cy - 8.0, "label", "a");
            label(root, cx + 8.0, cy - ry / 2.0, "label", "b");

            dot(root, cx, cy, 2.5, &palette.fg);
            label(root, cx - 16.0, cy + 16.0, "muted", "O");

            dot(root, cx - c, cy, 3.5, palette.accent());
            dot(root, cx + c, cy, 3.5, palette.accent());
            label(root, cx - c - 8.0, cy + 20.0, "muted", "F1");
            label(root, cx + c - 8.0, cy + 20.0, "muted", "F2");
        },
    );
    root.render(0)
}

/// The inscribed angle theorem: the angle at the center is twice the angle
/// at the circumference subtending the same arc.
pub fn inscribed_angle(palette: &Palette) -> String {
    let (width, height) = (340.0, 330.0);
    let (cx, cy) = (170.0, 170.0);
    let r = 120.0;

    let p = on_circle(cx, cy, r, 100.0);
    let a = on_circle(cx, cy, r, 210.0);
    let b = on_circle(cx, cy, r, 330.0);
    let o = (cx, cy);

    let root = svg_with(
        attrs! {
            width: fmt_num(width),
            height: fmt_num(height),
            viewBox: format!("0 0 {} {}", fmt_num(width), fmt_num(height))
        },
        |root| {
            add_background(root, palette);
            add_style(root, palette);

            root.child(
                "circle",
                attrs! {
                    cx: fmt_num(cx),
                    cy: fmt_num(cy),
                    r: fmt_num(r),
                    fill: "none",
                    stroke: palette.fg,
                    stroke_width: 1.5
                },
            );

            // Chords from the circumference point.
            for end in [a, b] {
                root.child(
                    "line",
                    attrs! {
                        x1: fmt_num(p.0),
                        y1: fmt_num(p.1),
                        x2: fmt_num(end.0),
                        y2: fmt_num(end.1),
                        stroke: palette.line(),
                        stroke_width: 1.5
                    },
                );
            }
            // Radii to the same arc endpoints.
            for end in [a, b] {
                root.child(
                    "line",
                    attrs! {
                        x1: fmt_num(o.0),
                        y1: fmt_num(o.1),
                        x2: fmt_num(end.0),
                        y2: fmt_num(end.1),
                        stroke: palette.muted(),
                        stroke_width: 1,
                        stroke_dasharray: "4 3"
                    },
                );
            }

            root.child(
                "path",
                attrs! {
                    d: angle_marker(p, a, b, 24.0),
                    fill: "none",
                    stroke: palette.accent(),
                    stroke_width: 1.5
                },
            );
            root.child(
                "path",
                attrs! {
                    d: angle_marker(o, a, b, 26.0),
                    fill: "none",
                    stroke: palette.accent(),
                    stroke_width: 1.5
                },
            );

            for (point, radius) in [(p, 3.0), (a, 3.0), (b, 3.0), (o, 2.5)] {
                dot(root, point.0, point.1, radius, &palette.fg);
            }
            label(root, p.0 - 6.0, p.1 - 12.0, "label", "P");
            label(root, a.0 - 18.0, a.1 + 6.0, "label", "A");
            label(root, b.0 + 8.0, b.1 + 6.0, "label", "B");
            label(root, o.0 + 8.0, o.1 - 6.0, "muted", "O");
            label(root, p.0 - 8.0, p.1 + 44.0, "muted", "θ");
            label(root, o.0 - 10.0, o.1 + 44.0, "muted", "2θ");
        },
    );
    root.render(0)
}
