//! Coroutine diagrams: lifecycle states and a suspend/resume timeline.

use super::{add_background, add_style, arrow_defs, fmt_num, IdGen};
use crate::attrs;
use crate::markup::{svg_with, Element};
use crate::theme::Palette;

const STATE_W: f64 = 110.0;
const STATE_H: f64 = 44.0;

/// Rounded state box with a centered label. `x`/`y` are the box center.
fn state_box(parent: &mut Element, x: f64, y: f64, name: &str, palette: &Palette) {
    parent.child(
        "rect",
        attrs! {
            x: fmt_num(x - STATE_W / 2.0),
            y: fmt_num(y - STATE_H / 2.0),
            width: fmt_num(STATE_W),
            height: fmt_num(STATE_H),
            rx: 8,
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
                y: fmt_num(y),
                text_anchor: "middle",
                dy: "0.35em",
                class: "label"
            },
        )
        .text(name);
}

fn arrow(parent: &mut Element, from: (f64, f64), to: (f64, f64), marker: &str, color: &str) {
    parent.child(
        "line",
        attrs! {
            x1: fmt_num(from.0),
            y1: fmt_num(from.1),
            x2: fmt_num(to.0),
            y2: fmt_num(to.1),
            stroke: color,
            stroke_width: 1.5,
            marker_end: marker
        },
    );
}

fn note(parent: &mut Element, x: f64, y: f64, anchor: &str, content: &str) {
    parent
        .child(
            "text",
            attrs! { x: fmt_num(x), y: fmt_num(y), text_anchor: anchor, class: "muted" },
        )
        .text(content);
}

/// The lifecycle state machine: created, running, suspended, and the two
/// terminal states.
pub fn coroutine_lifecycle(palette: &Palette) -> String {
    let (width, height) = (640.0, 280.0);
    let mut ids = IdGen::new();

    let created = (135.0, 140.0);
    let running = (305.0, 140.0);
    let suspended = (305.0, 44.0);
    let done = (475.0, 140.0);
    let cancelled = (475.0, 236.0);

    let root = svg_with(
        attrs! {
            width: fmt_num(width),
            height: fmt_num(height),
            viewBox: format!("0 0 {} {}", fmt_num(width), fmt_num(height))
        },
        |root| {
            add_background(root, palette);
            add_style(root, palette);
            let marker = arrow_defs(root, &mut ids, palette.line());

            // Start pseudostate feeding the first real state.
            root.child(
                "circle",
                attrs! { cx: 48, cy: fmt_num(created.1), r: 7, fill: palette.fg },
            );
            arrow(
                root,
                (55.0, created.1),
                (created.0 - STATE_W / 2.0, created.1),
                &marker,
                palette.line(),
            );

            for (center, name) in [
                (created, "Created"),
                (running, "Running"),
                (suspended, "Suspended"),
                (done, "Done"),
                (cancelled, "Cancelled"),
            ] {
                state_box(root, center.0, center.1, name, palette);
            }

            // created -> running -> done along the spine
            arrow(
                root,
                (created.0 + STATE_W / 2.0, created.1),
                (running.0 - STATE_W / 2.0, running.1),
                &marker,
                palette.line(),
            );
            note(root, (created.0 + running.0) / 2.0, created.1 - 8.0, "middle", "start()");
            arrow(
                root,
                (running.0 + STATE_W / 2.0, running.1),
                (done.0 - STATE_W / 2.0, done.1),
                &marker,
                palette.line(),
            );
            note(root, (running.0 + done.0) / 2.0, running.1 - 8.0, "middle", "complete");

            // running <-> suspended
            arrow(
                root,
                (running.0 - 25.0, running.1 - STATE_H / 2.0),
                (suspended.0 - 25.0, suspended.1 + STATE_H / 2.0),
                &marker,
                palette.line(),
            );
            note(root, running.0 - 33.0, (running.1 + suspended.1) / 2.0, "end", "suspend");
            arrow(
                root,
                (suspended.0 + 25.0, suspended.1 + STATE_H / 2.0),
                (running.0 + 25.0, running.1 - STATE_H / 2.0),
                &marker,
                palette.line(),
            );
            note(root, running.0 + 33.0, (running.1 + suspended.1) / 2.0, "start", "resume");

            // running -> cancelled
            arrow(
                root,
                (running.0 + STATE_W / 2.0, running.1 + 12.0),
                (cancelled.0 - STATE_W / 2.0, cancelled.1 - 12.0),
                &marker,
                palette.line(),
            );
            note(
                root,
                (running.0 + cancelled.0) / 2.0 + 6.0,
                (running.1 + cancelled.1) / 2.0 + 16.0,
                "middle",
                "cancel()",
            );

            // End pseudostate: bullseye after Done.
            let end = (585.0, done.1);
            arrow(root, (done.0 + STATE_W / 2.0, done.1), (end.0 - 12.0, end.1), &marker, palette.line());
            root.child(
                "circle",
                attrs! {
                    cx: fmt_num(end.0),
                    cy: fmt_num(end.1),
                    r: 10,
                    fill: "none",
                    stroke: palette.fg,
                    stroke_width: 1.5
                },
            );
            root.child(
                "circle",
                attrs! { cx: fmt_num(end.0), cy: fmt_num(end.1), r: 5, fill: palette.fg },
            );
        },
    );
    root.render(0)
}

/// Caller and coroutine lanes through one suspension cycle: resume runs the
/// coroutine, yield hands control back.
pub fn coroutine_timeline(palette: &Palette) -> String {
    let (width, height) = (640.0, 240.0);
    let mut ids = IdGen::new();

    let caller_y = 70.0;
    let coroutine_y = 160.0;
    let (lane_start, lane_end) = (120.0, 600.0);
    // x positions of the control hand-offs
    let (resume1, yield1, resume2, yield2) = (170.0, 280.0, 390.0, 500.0);

    let root = svg_with(
        attrs! {
            width: fmt_num(width),
            height: fmt_num(height),
            viewBox: format!("0 0 {} {}", fmt_num(width), fmt_num(height))
        },
        |root| {
            add_background(root, palette);
            add_style(root, palette);
            let marker = arrow_defs(root, &mut ids, palette.line());

            for (y, name) in [(caller_y, "caller"), (coroutine_y, "coroutine")] {
                root.child(
                    "line",
                    attrs! {
                        x1: fmt_num(lane_start),
                        y1: fmt_num(y),
                        x2: fmt_num(lane_end),
                        y2: fmt_num(y),
                        stroke: palette.muted(),
                        stroke_width: 1
                    },
                );
                root.child(
                    "text",
                    attrs! {
                        x: fmt_num(lane_start - 15.0),
                        y: fmt_num(y + 4.0),
                        text_anchor: "end",
                        class: "label"
                    },
                )
                .text(name);
            }

            // Active spans on the coroutine lane; the gap between them is
            // the suspended stretch.
            for (from, to) in [(resume1, yield1), (resume2, yield2)] {
                root.child(
                    "line",
                    attrs! {
                        x1: fmt_num(from),
                        y1: fmt_num(coroutine_y),
                        x2: fmt_num(to),
                        y2: fmt_num(coroutine_y),
                        stroke: palette.accent(),
                        stroke_width: 6,
                        stroke_linecap: "round"
                    },
                );
            }
            root.child(
                "line",
                attrs! {
                    x1: fmt_num(yield1),
                    y1: fmt_num(coroutine_y),
                    x2: fmt_num(resume2),
                    y2: fmt_num(coroutine_y),
                    stroke: palette.muted(),
                    stroke_width: 2,
                    stroke_dasharray: "4 4"
                },
            );
            note(
                root,
                (yield1 + resume2) / 2.0,
                coroutine_y + 22.0,
                "middle",
                "suspended",
            );

            // Hand-offs: resume goes down into the coroutine, yield back up.
            for x in [resume1, resume2] {
                arrow(
                    root,
                    (x, caller_y + 6.0),
                    (x, coroutine_y - 8.0),
                    &marker,
                    palette.line(),
                );
                note(root, x + 6.0, (caller_y + coroutine_y) / 2.0, "start", "resume");
            }
            for x in [yield1, yield2] {
                arrow(
                    root,
                    (x, coroutine_y - 6.0),
                    (x, caller_y + 8.0),
                    &marker,
                    palette.line(),
                );
                note(root, x + 6.0, (caller_y + coroutine_y) / 2.0, "start", "yield");
            }
        },
    );
    root.render(0)
}
