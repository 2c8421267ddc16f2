//! XML serialization of the assembled navigation tree.
//!
//! The serializer is a pure function of node and depth: the depth is threaded
//! through the recursion explicitly, so there is no shared indentation state.

use crate::tree::TopicNode;

/// XML declaration emitted as the first line of the output.
const DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Indent unit, one per nesting depth.
const INDENT: &str = "\t";

/// Render the navigation tree as an indented XML document.
///
/// Every node becomes a `<topic>` element with a `label` attribute and, when
/// the node carries a reference, an `href` attribute. The opening tag and the
/// matching closing tag each occupy one line at the node's indent depth.
#[must_use]
pub fn render(root: &TopicNode) -> String {
    let mut out = String::new();
    out.push_str(DECLARATION);
    out.push('\n');
    write_topic(root, 0, &mut out);
    out
}

/// Write one node and its children at the given depth.
fn write_topic(node: &TopicNode, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str("<topic label=\"");
    out.push_str(&escape_xml(&node.label));
    out.push('"');
    if let Some(ref href) = node.href {
        out.push_str(" href=\"");
        out.push_str(&escape_xml(href));
        out.push('"');
    }
    out.push_str(">\n");

    for child in &node.children {
        write_topic(child, depth + 1, out);
    }

    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str("</topic>\n");
}

/// Escape XML special characters for attribute values.
#[must_use]
pub fn escape_xml(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
