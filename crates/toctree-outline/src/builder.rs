//! Per-document topic-tree construction.
//!
//! Converts the flat heading sequence of one document into a nested forest of
//! [`TopicNode`]s. The builder is an explicit stack machine: the stack holds
//! the currently open ancestor headings as `(nominal level, node)` pairs, and
//! push/pop are the only state transitions. Closing an entry attaches its
//! node to the new stack top (or to the document forest when the stack
//! empties), so an emitted node is always exactly one level below its nearest
//! emitted ancestor even when the source skips heading levels.

use crate::heading::{HeadingParser, heading_lines};
use crate::tree::TopicNode;

/// Default maximum section level.
pub const DEFAULT_MAX_LEVEL: usize = 3;

/// Builds per-document topic forests.
pub struct OutlineBuilder {
    parser: HeadingParser,
    /// Headings deeper than this level are ignored entirely.
    max_level: usize,
}

impl Default for OutlineBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LEVEL)
    }
}

impl OutlineBuilder {
    /// Create a builder that ignores headings deeper than `max_level`.
    #[must_use]
    pub fn new(max_level: usize) -> Self {
        Self {
            parser: HeadingParser::new(),
            max_level,
        }
    }

    /// Build the topic forest for one document.
    ///
    /// # Arguments
    ///
    /// * `text` - Full document text
    /// * `doc_href` - Base reference for the document (e.g. "guide.html")
    ///
    /// The first eligible heading becomes the document's landing node: its
    /// reference is `doc_href` with no anchor suffix (even if the heading
    /// carries an anchor token) and it is treated as level 1 regardless of
    /// its marker count. Subsequent headings link to `doc_href#anchor`.
    /// Marker-only headings and headings deeper than the configured maximum
    /// contribute nothing, not even to level bookkeeping.
    #[must_use]
    pub fn document_outline(&self, text: &str, doc_href: &str) -> Vec<TopicNode> {
        let mut stack: Vec<(usize, TopicNode)> = Vec::new();
        let mut forest: Vec<TopicNode> = Vec::new();

        for line in heading_lines(text) {
            let heading = self.parser.parse(line);
            if heading.name.is_empty() {
                tracing::debug!(line, "Skipping heading without display name");
                continue;
            }
            if heading.level > self.max_level {
                continue;
            }

            if stack.is_empty() && forest.is_empty() {
                // Landing heading: no anchor, establishes local level 1.
                stack.push((1, TopicNode::linked(heading.name, doc_href)));
                continue;
            }

            while stack.last().is_some_and(|(level, _)| *level >= heading.level) {
                close_top(&mut stack, &mut forest);
            }

            let href = format!("{doc_href}#{}", heading.anchor);
            stack.push((heading.level, TopicNode::linked(heading.name, href)));
        }

        while !stack.is_empty() {
            close_top(&mut stack, &mut forest);
        }

        forest
    }
}

/// Close the top stack entry, attaching its node to the new top (or to the
/// forest when the stack empties).
fn close_top(stack: &mut Vec<(usize, TopicNode)>, forest: &mut Vec<TopicNode>) {
    let Some((_, node)) = stack.pop() else {
        return;
    };
    match stack.last_mut() {
        Some((_, parent)) => parent.children.push(node),
        None => forest.push(node),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn outline(text: &str) -> Vec<TopicNode> {
        OutlineBuilder::default().document_outline(text, "doc.html")
    }

    #[test]
    fn test_empty_document_yields_empty_forest() {
        assert_eq!(outline(""), Vec::new());
        assert_eq!(outline("prose only\n\nno headings"), Vec::new());
    }

    #[test]
    fn test_single_heading_is_landing_node() {
        let forest = outline("# Title\n\nBody text.\n");
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].label, "Title");
        assert_eq!(forest[0].href.as_deref(), Some("doc.html"));
        assert!(forest[0].children.is_empty());
    }

    #[test]
    fn test_landing_node_ignores_anchor_token() {
        let forest = outline("# Title {#custom}\n");
        assert_eq!(forest[0].href.as_deref(), Some("doc.html"));
    }

    #[test]
    fn test_increasing_levels_nest_as_chain() {
        let forest = outline("# A\n## B\n### C\n");
        assert_eq!(forest.len(), 1);
        let a = &forest[0];
        assert_eq!(a.children.len(), 1);
        let b = &a.children[0];
        assert_eq!(b.label, "B");
        assert_eq!(b.href.as_deref(), Some("doc.html#b"));
        assert_eq!(b.children.len(), 1);
        assert_eq!(b.children[0].label, "C");
    }

    #[test]
    fn test_siblings_keep_source_order() {
        let forest = outline("# A\n## First\n## Second\n## Third\n");
        let labels: Vec<&str> = forest[0]
            .children
            .iter()
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(labels, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_skipped_levels_collapse() {
        // Level 3 directly under level 1 sits exactly one level below it.
        let forest = outline("# A\n### Deep\n");
        assert_eq!(forest[0].children.len(), 1);
        assert_eq!(forest[0].children[0].label, "Deep");
        assert!(forest[0].children[0].children.is_empty());
    }

    #[test]
    fn test_skip_then_return_stays_flat() {
        // Sequence 1, 3, 2: the level-2 heading closes the level-3 node and
        // becomes its sibling under level 1. No depth gap exceeds 1.
        let forest = outline("# A\n### Deep\n## Back\n");
        let a = &forest[0];
        assert_eq!(a.children.len(), 2);
        assert_eq!(a.children[0].label, "Deep");
        assert_eq!(a.children[1].label, "Back");
    }

    #[test]
    fn test_headings_beyond_max_level_are_invisible() {
        // The level-4 heading contributes no node and does not perturb the
        // placement of the level-2 heading that follows it.
        let forest = outline("# A\n## B\n#### Hidden\n## C\n");
        let labels: Vec<&str> = forest[0]
            .children
            .iter()
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(labels, vec!["B", "C"]);
    }

    #[test]
    fn test_custom_max_level() {
        let builder = OutlineBuilder::new(1);
        let forest = builder.document_outline("# A\n## Hidden\n", "doc.html");
        assert_eq!(forest.len(), 1);
        assert!(forest[0].children.is_empty());
    }

    #[test]
    fn test_marker_only_heading_is_skipped() {
        let forest = outline("# A\n##\n## B\n");
        let labels: Vec<&str> = forest[0]
            .children
            .iter()
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(labels, vec!["B"]);
    }

    #[test]
    fn test_marker_only_first_heading_defers_landing() {
        // The first *eligible* heading becomes the landing node.
        let forest = outline("#\n## Actual\n");
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].label, "Actual");
        assert_eq!(forest[0].href.as_deref(), Some("doc.html"));
    }

    #[test]
    fn test_second_top_level_heading_joins_forest() {
        // A later heading at the landing level closes the landing node and
        // becomes its sibling in the document forest.
        let forest = outline("# A\n## Sub\n# B\n");
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].label, "A");
        assert_eq!(forest[0].children[0].label, "Sub");
        assert_eq!(forest[1].label, "B");
        assert_eq!(forest[1].href.as_deref(), Some("doc.html#b"));
    }

    #[test]
    fn test_landing_level_is_one_regardless_of_markers() {
        // A document starting at level 2 treats that heading as local level
        // 1, so a later level-2 heading nests under it rather than closing it.
        let forest = outline("## Start\n## Next\n");
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].label, "Start");
        assert_eq!(forest[0].children.len(), 1);
        assert_eq!(forest[0].children[0].label, "Next");
    }

    #[test]
    fn test_anchor_from_explicit_token() {
        let forest = outline("# Title\n## Sub {anchor-x}\n");
        assert_eq!(
            forest[0].children[0].href.as_deref(),
            Some("doc.html#anchor-x")
        );
    }
}
