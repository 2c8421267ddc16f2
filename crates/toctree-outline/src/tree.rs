//! Topic-tree node type.

/// One node of the navigation tree.
///
/// A node without a reference is a pure grouping container (part nodes).
/// Child order always matches the order headings appeared in source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicNode {
    /// Display label (heading name, part label, or document-set title).
    pub label: String,
    /// Target reference (`page.html` or `page.html#anchor`), if any.
    pub href: Option<String>,
    /// Ordered child nodes.
    pub children: Vec<TopicNode>,
}

impl TopicNode {
    /// Create a grouping node without a reference.
    #[must_use]
    pub fn group(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
            children: Vec::new(),
        }
    }

    /// Create a node linking to a reference.
    #[must_use]
    pub fn linked(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            children: Vec::new(),
        }
    }
}
