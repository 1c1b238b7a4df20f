//! Integration tests: every registered diagram must render to well-formed
//! SVG with both built-in palettes, and rendering must be deterministic.

use postfig::diagrams;
use postfig::theme::Palette;

fn render_by_name(name: &str, palette: &Palette) -> String {
    let diagram = diagrams::all()
        .into_iter()
        .find(|d| d.name == name)
        .unwrap_or_else(|| panic!("no diagram registered as '{}'", name));
    (diagram.draw)(palette)
}

fn assert_well_formed(name: &str, rendered: &str) {
    let doc = roxmltree::Document::parse(rendered)
        .unwrap_or_else(|e| panic!("{} is not well-formed XML: {}", name, e));
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "svg", "{} root element", name);
    assert_eq!(
        root.tag_name().namespace(),
        Some("http://www.w3.org/2000/svg"),
        "{} namespace",
        name
    );
    assert!(root.has_attribute("viewBox"), "{} viewBox", name);
}

/// Generate a test per diagram: renders with the default palette, checks
/// well-formedness and the shared style block.
macro_rules! diagram_test {
    ($name:ident) => {
        paste::paste! {
            #[test]
            fn [<renders_ $name>]() {
                let name = stringify!($name).replace('_', "-");
                let rendered = render_by_name(&name, &Palette::default());
                assert_well_formed(&name, &rendered);
                assert!(rendered.contains("<style>"), "{} style block", name);
            }
        }
    };
}

diagram_test!(ellipse_axes);
diagram_test!(inscribed_angle);
diagram_test!(feature_branch);
diagram_test!(rebase);
diagram_test!(coroutine_lifecycle);
diagram_test!(coroutine_timeline);

#[test]
fn all_diagrams_render_with_dark_palette() {
    let palette = Palette::dark();
    for diagram in diagrams::all() {
        let rendered = (diagram.draw)(&palette);
        assert_well_formed(diagram.name, &rendered);
        assert!(
            rendered.contains(&palette.bg),
            "{} uses the palette background",
            diagram.name
        );
    }
}

#[test]
fn rendering_is_deterministic() {
    let palette = Palette::default();
    for diagram in diagrams::all() {
        let first = (diagram.draw)(&palette);
        let second = (diagram.draw)(&palette);
        assert_eq!(first, second, "{} must render identically", diagram.name);
    }
}

#[test]
fn marker_ids_stay_local_to_one_diagram() {
    // Two diagrams that both define arrow markers must each start their id
    // sequence fresh; nothing leaks across invocations.
    let palette = Palette::default();
    let lifecycle = render_by_name("coroutine-lifecycle", &palette);
    let timeline = render_by_name("coroutine-timeline", &palette);
    assert!(lifecycle.contains(r##"id="arrow-0""##));
    assert!(timeline.contains(r##"id="arrow-0""##));
}
