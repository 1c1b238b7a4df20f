//! Declarative markup tree builder.
//!
//! The drawing scripts assemble SVG documents as an in-memory tree of
//! elements and serialize the tree to indented markup in one pass. The
//! builder treats tags, attribute values, and text as opaque strings: no
//! escaping, no validation, no I/O. Producing well-formed markup is the
//! caller's job.
//!
//! Underscores in tags and attribute keys become hyphens on output, so call
//! sites can write `stroke_width: 4` and get `stroke-width="4"`.

/// Default namespace put on every root created by [`svg`].
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Ordered attribute pairs. Insertion order is serialization order.
pub type Attrs = Vec<(String, String)>;

/// Build an attribute list: `attrs! { x: 0, stroke_width: 4, "viewBox": vb }`.
///
/// Keys are identifiers or string literals; values stringify through
/// `Display` with whatever precision the caller chose.
#[macro_export]
macro_rules! attrs {
    () => { $crate::markup::Attrs::new() };
    ($($key:tt: $value:expr),+ $(,)?) => {
        vec![$(($crate::attr_key!($key), $value.to_string())),+]
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! attr_key {
    ($key:ident) => {
        stringify!($key).to_string()
    };
    ($key:literal) => {
        ($key).to_string()
    };
}

/// One node of the markup tree: a tag, its attributes, child elements, and
/// raw text segments. Children and text are append-only while the tree is
/// under construction; rendering never mutates the tree.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attributes: Attrs,
    children: Vec<Element>,
    text_segments: Vec<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>, attributes: Attrs) -> Self {
        Element {
            tag: tag.into(),
            attributes,
            children: Vec::new(),
            text_segments: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Set an attribute, replacing the value in place if the key is already
    /// present (the key keeps its original position in the output).
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        if let Some(pair) = self.attributes.iter_mut().find(|(k, _)| *k == key) {
            pair.1 = value;
        } else {
            self.attributes.push((key, value));
        }
    }

    /// Append a child element and return it for further population.
    pub fn child(&mut self, tag: impl Into<String>, attributes: Attrs) -> &mut Element {
        let index = self.children.len();
        self.children.push(Element::new(tag, attributes));
        &mut self.children[index]
    }

    /// Append a child element and populate it through `build` before
    /// returning control. Nesting these calls expresses arbitrarily deep
    /// trees without the caller tracking parents.
    pub fn child_with(
        &mut self,
        tag: impl Into<String>,
        attributes: Attrs,
        build: impl FnOnce(&mut Element),
    ) -> &mut Element {
        let index = self.children.len();
        self.children.push(Element::new(tag, attributes));
        build(&mut self.children[index]);
        &mut self.children[index]
    }

    /// Append a raw text segment. Segments are joined with newlines when the
    /// element is rendered.
    pub fn text(&mut self, segment: impl Into<String>) {
        self.text_segments.push(segment.into());
    }

    /// Serialize this element and its subtree, indented two spaces per
    /// level. An element with no children and no text renders self-closing.
    /// The closing tag sits on its own indented line only when the content
    /// spans multiple lines: when there are children, or the text content
    /// itself ends in a newline. No trailing newline is appended.
    pub fn render(&self, indent_level: usize) -> String {
        let indent = "  ".repeat(indent_level);
        let mut out = String::new();
        out.push_str(&indent);
        out.push('<');
        out.push_str(&markup_name(&self.tag));
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(&markup_name(key));
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }

        let mut contents = String::new();
        if let Some(first) = self.text_segments.first() {
            // Leading newline only when the first segment itself ends in one.
            if first.ends_with('\n') {
                contents.push('\n');
            }
            contents.push_str(&self.text_segments.join("\n"));
        }
        if !self.children.is_empty() {
            contents.push('\n');
            let rendered: Vec<String> = self
                .children
                .iter()
                .map(|child| child.render(indent_level + 1))
                .collect();
            contents.push_str(&rendered.join("\n"));
            contents.push('\n');
        }

        if contents.is_empty() {
            out.push_str("/>");
        } else {
            out.push('>');
            let multi_line = contents.ends_with('\n');
            out.push_str(&contents);
            if multi_line {
                out.push_str(&indent);
            }
            out.push_str("</");
            out.push_str(&markup_name(&self.tag));
            out.push('>');
        }
        out
    }
}

/// Create an `svg` root carrying the default namespace. Caller-supplied
/// attributes merge on top; a caller `xmlns` overrides the default.
pub fn svg(attributes: Attrs) -> Element {
    let mut root = Element::new("svg", vec![("xmlns".to_string(), SVG_NS.to_string())]);
    for (key, value) in attributes {
        root.set_attr(key, value);
    }
    root
}

/// [`svg`] plus a builder closure applied to the new root.
pub fn svg_with(attributes: Attrs, build: impl FnOnce(&mut Element)) -> Element {
    let mut root = svg(attributes);
    build(&mut root);
    root
}

fn markup_name(name: &str) -> String {
    name.replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_renders_self_closing() {
        let node = Element::new("circle", attrs! { cx: 5, cy: 5, r: 2 });
        assert_eq!(node.render(0), r#"<circle cx="5" cy="5" r="2"/>"#);
    }

    #[test]
    fn leaf_without_attributes() {
        let node = Element::new("defs", attrs! {});
        assert_eq!(node.render(0), "<defs/>");
    }

    #[test]
    fn underscores_become_hyphens() {
        let node = Element::new("path", attrs! { stroke_width: 4, marker_end: "url(#a)" });
        assert_eq!(
            node.render(0),
            r#"<path stroke-width="4" marker-end="url(#a)"/>"#
        );
    }

    #[test]
    fn attribute_order_is_insertion_order() {
        let mut node = Element::new("rect", attrs! { width: 10 });
        node.set_attr("height", 20);
        node.set_attr("x", 1);
        assert_eq!(node.render(0), r#"<rect width="10" height="20" x="1"/>"#);
    }

    #[test]
    fn set_attr_replaces_in_place() {
        let mut node = Element::new("rect", attrs! { x: 1, y: 2 });
        node.set_attr("x", 99);
        assert_eq!(node.render(0), r#"<rect x="99" y="2"/>"#);
    }

    #[test]
    fn root_carries_default_namespace() {
        let mut root = svg(attrs! {});
        root.child("rect", attrs! { x: 0, y: 0, width: 10, height: 10 });
        let expected = "<svg xmlns=\"http://www.w3.org/2000/svg\">\n  <rect x=\"0\" y=\"0\" width=\"10\" height=\"10\"/>\n</svg>";
        assert_eq!(root.render(0), expected);
    }

    #[test]
    fn caller_xmlns_overrides_default() {
        let root = svg(attrs! { xmlns: "urn:example", width: 10 });
        assert_eq!(root.render(0), r#"<svg xmlns="urn:example" width="10"/>"#);
    }

    #[test]
    fn single_line_text_hugs_tags() {
        let mut node = Element::new("text", attrs! { x: 5 });
        node.text("hello");
        assert_eq!(node.render(0), r#"<text x="5">hello</text>"#);
    }

    #[test]
    fn multi_line_text_gets_indented_closing_tag() {
        let mut node = Element::new("style", attrs! {});
        node.text("text { fill: #333; }\n");
        assert_eq!(node.render(1), "  <style>\ntext { fill: #333; }\n  </style>");
    }

    #[test]
    fn text_segments_join_with_newlines() {
        let mut node = Element::new("text", attrs! {});
        node.text("one");
        node.text("two");
        assert_eq!(node.render(0), "<text>one\ntwo</text>");
    }

    #[test]
    fn children_indent_one_level_per_depth() {
        let root = svg_with(attrs! {}, |root| {
            root.child_with("g", attrs! { id: "outer" }, |g| {
                g.child("circle", attrs! { r: 1 });
            });
        });
        let expected = concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\">\n",
            "  <g id=\"outer\">\n",
            "    <circle r=\"1\"/>\n",
            "  </g>\n",
            "</svg>"
        );
        assert_eq!(root.render(0), expected);
    }

    #[test]
    fn children_keep_insertion_order() {
        let mut root = svg(attrs! {});
        root.child("first", attrs! {});
        root.child("second", attrs! {});
        let rendered = root.render(0);
        let first = rendered.find("<first").unwrap();
        let second = rendered.find("<second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn nesting_order_is_preserved() {
        let root = svg_with(attrs! {}, |root| {
            root.child_with("g", attrs! {}, |g| {
                g.child("circle", attrs! { r: 3 });
            });
        });
        let rendered = root.render(0);
        let open_g = rendered.find("<g>").unwrap();
        let circle = rendered.find("<circle").unwrap();
        let close_g = rendered.find("</g>").unwrap();
        assert!(open_g < circle);
        assert!(circle < close_g);
    }

    #[test]
    fn render_is_idempotent() {
        let root = svg_with(attrs! { width: 10 }, |root| {
            root.child_with("g", attrs! {}, |g| {
                g.text("label");
                g.child("rect", attrs! { x: 1 });
            });
        });
        assert_eq!(root.render(0), root.render(0));
    }

    #[test]
    fn float_values_keep_caller_formatting() {
        let node = Element::new("circle", attrs! { cx: 1.5, cy: format!("{:.2}", 2.0), r: 3.0 });
        assert_eq!(node.render(0), r#"<circle cx="1.5" cy="2.00" r="3"/>"#);
    }
}
