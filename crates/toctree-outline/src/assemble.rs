//! Cross-document assembly into one navigation tree.
//!
//! Documents arrive in sorted order; consecutive documents sharing the same
//! part label are attached under one grouping node. Grouping is adjacent-only
//! by design: if sort order places another part's documents between two
//! documents with the same label, two separate part nodes are produced. This
//! preserves insertion semantics rather than performing a global group-by.

use crate::tree::TopicNode;

/// Assembles per-document topic forests into the full navigation tree.
///
/// The root node carries the document-set title and the landing reference;
/// its children are part nodes, each holding the forests of the documents
/// assigned to that part.
pub struct Assembler {
    root: TopicNode,
    /// Part label of the most recently pushed document. `None` until the
    /// first document opens the first part node.
    last_label: Option<String>,
}

impl Assembler {
    /// Create an assembler with the document-set title and landing reference.
    #[must_use]
    pub fn new(title: impl Into<String>, landing_href: impl Into<String>) -> Self {
        Self {
            root: TopicNode::linked(title, landing_href),
            last_label: None,
        }
    }

    /// Attach one document's topic forest under the current part node.
    ///
    /// Opens a new part node when `part_label` differs from the previous
    /// document's label. The empty label is a valid, distinct part value:
    /// consecutive unlabeled documents share one part node.
    pub fn push_document(&mut self, part_label: &str, forest: Vec<TopicNode>) {
        if self.last_label.as_deref() != Some(part_label) {
            tracing::debug!(part = part_label, "Opening part node");
            self.root.children.push(TopicNode::group(part_label));
            self.last_label = Some(part_label.to_owned());
        }

        // A part node always exists here; the first document opened one.
        if let Some(part) = self.root.children.last_mut() {
            part.children.extend(forest);
        }
    }

    /// Finish assembly and return the root node.
    #[must_use]
    pub fn finish(self) -> TopicNode {
        self.root
    }
}
