//! Git branch diagrams: lanes of commits with branch/merge connectors.

use super::{add_background, add_style, estimate_text_width, fmt_num};
use crate::attrs;
use crate::markup::{svg_with, Element};
use crate::theme::Palette;

const COMMIT_RADIUS: f64 = 9.0;
const ARC_RADIUS: f64 = 20.0;

/// Lane colors, main branch first.
const LANE_COLORS: &[&str] = &["#0B6BCB", "#2E7D32", "#C2185B", "#E65100"];

fn lane_line(parent: &mut Element, y: f64, x1: f64, x2: f64, color: &str) {
    parent.child(
        "line",
        attrs! {
            x1: fmt_num(x1),
            y1: fmt_num(y),
            x2: fmt_num(x2),
            y2: fmt_num(y),
            stroke: color,
            stroke_width: 2
        },
    );
}

fn lane_label(parent: &mut Element, y: f64, x: f64, name: &str, color: &str) {
    parent
        .child(
            "text",
            attrs! {
                x: fmt_num(x),
                y: fmt_num(y + 4.0),
                text_anchor: "end",
                class: "label",
                fill: color
            },
        )
        .text(name);
}

fn commit_dot(parent: &mut Element, x: f64, y: f64, color: &str) {
    parent.child(
        "circle",
        attrs! { cx: fmt_num(x), cy: fmt_num(y), r: fmt_num(COMMIT_RADIUS), fill: color },
    );
}

/// Merge commits get a diamond, like the upstream git graphs.
fn merge_dot(parent: &mut Element, x: f64, y: f64, color: &str) {
    let r = COMMIT_RADIUS;
    let points = format!(
        "{},{} {},{} {},{} {},{}",
        fmt_num(x),
        fmt_num(y - r),
        fmt_num(x + r),
        fmt_num(y),
        fmt_num(x),
        fmt_num(y + r),
        fmt_num(x - r),
        fmt_num(y)
    );
    parent.child("polygon", attrs! { points: points, fill: color });
}

fn commit_label(parent: &mut Element, x: f64, y: f64, id: &str) {
    parent
        .child(
            "text",
            attrs! {
                x: fmt_num(x),
                y: fmt_num(y + COMMIT_RADIUS + 18.0),
                text_anchor: "middle",
                class: "muted"
            },
        )
        .text(id);
}

/// Branch connector: exit the source lane vertically, arc, then run
/// horizontally into the first commit of the new lane.
fn branch_path(from: (f64, f64), to: (f64, f64)) -> String {
    format!(
        "M {} {} L {} {} A {} {} 0 0 0 {} {} L {} {}",
        fmt_num(from.0),
        fmt_num(from.1),
        fmt_num(from.0),
        fmt_num(to.1 - ARC_RADIUS),
        fmt_num(ARC_RADIUS),
        fmt_num(ARC_RADIUS),
        fmt_num(from.0 + ARC_RADIUS),
        fmt_num(to.1),
        fmt_num(to.0),
        fmt_num(to.1)
    )
}

/// Merge connector: run horizontally from the last commit of the lane,
/// arc, then enter the merge commit vertically.
fn merge_path(from: (f64, f64), to: (f64, f64)) -> String {
    format!(
        "M {} {} L {} {} A {} {} 0 0 0 {} {} L {} {}",
        fmt_num(from.0),
        fmt_num(from.1),
        fmt_num(to.0 - ARC_RADIUS),
        fmt_num(from.1),
        fmt_num(ARC_RADIUS),
        fmt_num(ARC_RADIUS),
        fmt_num(to.0),
        fmt_num(from.1 - ARC_RADIUS),
        fmt_num(to.0),
        fmt_num(to.1)
    )
}

fn connector(parent: &mut Element, d: String, color: &str) {
    parent.child(
        "path",
        attrs! { d: d, fill: "none", stroke: color, stroke_width: 2 },
    );
}

/// Tag badge centered above a commit.
fn tag_badge(parent: &mut Element, x: f64, y: f64, tag: &str, palette: &Palette) {
    let w = estimate_text_width(tag, 10.0) + 12.0;
    let h = 16.0;
    parent.child(
        "rect",
        attrs! {
            x: fmt_num(x - w / 2.0),
            y: fmt_num(y - h / 2.0),
            width: fmt_num(w),
            height: fmt_num(h),
            rx: 2,
            fill: palette.surface(),
            stroke: palette.fg,
            stroke_width: 1
        },
    );
    parent
        .child(
            "text",
            attrs! {
                x: fmt_num(x),
                y: fmt_num(y + 4.0),
                text_anchor: "middle",
                class: "muted"
            },
        )
        .text(tag);
}

/// A feature branch forked from main and merged back, with a release tag
/// on the merge commit.
pub fn feature_branch(palette: &Palette) -> String {
    let (width, height) = (560.0, 220.0);
    let (main_y, feature_y) = (70.0, 140.0);
    let label_x = 95.0;
    let (lane_start, lane_end) = (110.0, 530.0);

    let m1 = (150.0, main_y);
    let m2 = (220.0, main_y);
    let f1 = (290.0, feature_y);
    let f2 = (360.0, feature_y);
    let merge = (430.0, main_y);

    let root = svg_with(
        attrs! {
            width: fmt_num(width),
            height: fmt_num(height),
            viewBox: format!("0 0 {} {}", fmt_num(width), fmt_num(height))
        },
        |root| {
            add_background(root, palette);
            add_style(root, palette);

            lane_line(root, main_y, lane_start, lane_end, LANE_COLORS[0]);
            lane_line(root, feature_y, f1.0 - ARC_RADIUS, f2.0, LANE_COLORS[1]);

            // Fork from m2, merge back from f2.
            connector(root, branch_path(m2, f1), LANE_COLORS[1]);
            connector(root, merge_path(f2, merge), LANE_COLORS[1]);

            for (commit, id) in [(m1, "a1f9c2"), (m2, "b7d04e")] {
                commit_dot(root, commit.0, commit.1, LANE_COLORS[0]);
                commit_label(root, commit.0, commit.1, id);
            }
            for (commit, id) in [(f1, "9c81aa"), (f2, "e503bd")] {
                commit_dot(root, commit.0, commit.1, LANE_COLORS[1]);
                commit_label(root, commit.0, commit.1, id);
            }
            merge_dot(root, merge.0, merge.1, LANE_COLORS[0]);
            commit_label(root, merge.0, merge.1, "f21c07");
            tag_badge(root, merge.0, merge.1 - COMMIT_RADIUS - 18.0, "v1.2", palette);

            lane_label(root, main_y, label_x, "main", LANE_COLORS[0]);
            lane_label(root, feature_y, label_x, "feature", LANE_COLORS[1]);
        },
    );
    root.render(0)
}

/// One before/after panel of the rebase diagram. `replayed` moves the fork
/// point to the tip of main and primes the commit ids.
fn rebase_panel(root: &mut Element, offset_y: f64, caption: &str, replayed: bool) {
    root.child_with(
        "g",
        attrs! { transform: format!("translate(0, {})", fmt_num(offset_y)) },
        |g| {
            let (main_y, feature_y) = (60.0, 120.0);
            let label_x = 95.0;
            let fork = if replayed { (290.0, main_y) } else { (220.0, main_y) };
            let d1 = (fork.0 + 70.0, feature_y);
            let d2 = (fork.0 + 140.0, feature_y);

            g.child("text", attrs! { x: 110, y: 24, class: "label" })
                .text(caption);

            lane_line(g, main_y, 110.0, 460.0, LANE_COLORS[0]);
            lane_line(g, feature_y, d1.0 - ARC_RADIUS, d2.0, LANE_COLORS[1]);
            connector(g, branch_path(fork, d1), LANE_COLORS[1]);

            for (x, id) in [(150.0, "c11"), (220.0, "c12"), (290.0, "c13")] {
                commit_dot(g, x, main_y, LANE_COLORS[0]);
                commit_label(g, x, main_y, id);
            }
            let feature_ids = if replayed { ["d21'", "d22'"] } else { ["d21", "d22"] };
            for (commit, id) in [(d1, feature_ids[0]), (d2, feature_ids[1])] {
                commit_dot(g, commit.0, commit.1, LANE_COLORS[1]);
                commit_label(g, commit.0, commit.1, id);
            }

            lane_label(g, main_y, label_x, "main", LANE_COLORS[0]);
            lane_label(g, feature_y, label_x, "feature", LANE_COLORS[1]);
        },
    );
}

/// Rebase, before and after: the feature commits are replayed on top of
/// main instead of merging.
pub fn rebase(palette: &Palette) -> String {
    let (width, height) = (560.0, 360.0);
    let root = svg_with(
        attrs! {
            width: fmt_num(width),
            height: fmt_num(height),
            viewBox: format!("0 0 {} {}", fmt_num(width), fmt_num(height))
        },
        |root| {
            add_background(root, palette);
            add_style(root, palette);
            rebase_panel(root, 0.0, "before rebase", false);
            rebase_panel(root, 180.0, "after rebase", true);
        },
    );
    root.render(0)
}
