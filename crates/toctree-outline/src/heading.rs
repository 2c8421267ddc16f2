//! Heading scanning and decomposition.
//!
//! This module separates the scanning phase (finding heading lines) from the
//! decomposition phase (splitting one line into level, display name and
//! anchor). The scanner only identifies candidate lines; [`HeadingParser`]
//! turns them into [`Heading`] values.

use regex::Regex;

/// Heading marker character.
const MARKER: char = '#';

/// One decomposed heading line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    /// Heading level (count of leading marker characters).
    pub level: usize,
    /// Display name, trimmed. Empty for marker-only lines.
    pub name: String,
    /// Anchor: explicit token content, or a slug derived from the name.
    pub anchor: String,
}

/// Iterate over the heading lines of a document.
///
/// Lazy, single-pass filter over the document's lines: only lines whose first
/// character is the heading marker are yielded. All other lines are discarded.
pub fn heading_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|line| line.starts_with(MARKER))
}

/// Decomposes heading lines into [`Heading`] values.
///
/// Holds the compiled anchor-token regex so it is built once per run rather
/// than once per heading.
pub struct HeadingParser {
    /// Matches an inline `{anchor}` or `{#anchor}` token.
    anchor_re: Regex,
}

impl Default for HeadingParser {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadingParser {
    /// Create a new heading parser.
    ///
    /// # Panics
    ///
    /// Panics if the internal anchor-token regex fails to compile. This
    /// should never happen as the regex is a compile-time constant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            anchor_re: Regex::new(r"\{#?([^}]*)\}").unwrap(),
        }
    }

    /// Decompose one heading line.
    ///
    /// The line must be non-empty and marker-prefixed (i.e. produced by
    /// [`heading_lines`]). A line consisting only of markers yields an empty
    /// display name; callers are expected to skip such headings.
    #[must_use]
    pub fn parse(&self, line: &str) -> Heading {
        let level = line.chars().take_while(|&c| c == MARKER).count();
        let rest = &line[level..];

        let (name, explicit) = match self.anchor_re.captures(rest) {
            Some(caps) => {
                let token = caps.get(0).map_or(rest.len(), |m| m.start());
                (rest[..token].trim(), Some(caps[1].to_owned()))
            }
            None => (rest.trim(), None),
        };

        let anchor = explicit.unwrap_or_else(|| slugify(name));

        Heading {
            level,
            name: name.to_owned(),
            anchor,
        }
    }
}

/// Derive a URL-safe anchor slug from a display name.
///
/// Lowercases the text, keeps letters, digits and `-`, maps each space to
/// `-`, and drops every other character. No collision detection is performed:
/// duplicate anchors across distinct headings are an accepted limitation.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c == ' ' {
            slug.push('-');
        } else if c == '-' || c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_heading_lines_filters_prose() {
        let text = "# Title\n\nSome prose.\n## Section\nmore text\n### Deep\n";
        let lines: Vec<&str> = heading_lines(text).collect();
        assert_eq!(lines, vec!["# Title", "## Section", "### Deep"]);
    }

    #[test]
    fn test_heading_lines_empty_document() {
        assert_eq!(heading_lines("").count(), 0);
        assert_eq!(heading_lines("just prose\n\nno headings").count(), 0);
    }

    #[test]
    fn test_heading_lines_marker_must_be_first_char() {
        let text = "  # indented\ntext # inline\n# real";
        let lines: Vec<&str> = heading_lines(text).collect();
        assert_eq!(lines, vec!["# real"]);
    }

    #[test]
    fn test_parse_level_counts_markers() {
        let parser = HeadingParser::new();
        assert_eq!(parser.parse("# One").level, 1);
        assert_eq!(parser.parse("## Two").level, 2);
        assert_eq!(parser.parse("#### Four").level, 4);
    }

    #[test]
    fn test_parse_name_is_trimmed() {
        let parser = HeadingParser::new();
        assert_eq!(parser.parse("##   Spaced out   ").name, "Spaced out");
    }

    #[test]
    fn test_parse_derived_anchor() {
        let parser = HeadingParser::new();
        let heading = parser.parse("## Getting Started");
        assert_eq!(heading.name, "Getting Started");
        assert_eq!(heading.anchor, "getting-started");
    }

    #[test]
    fn test_parse_explicit_anchor() {
        let parser = HeadingParser::new();
        let heading = parser.parse("## Getting Started {custom-id}");
        assert_eq!(heading.name, "Getting Started");
        assert_eq!(heading.anchor, "custom-id");
    }

    #[test]
    fn test_parse_explicit_anchor_hash_stripped() {
        let parser = HeadingParser::new();
        assert_eq!(parser.parse("## Sub {#anchor-x}").anchor, "anchor-x");
        assert_eq!(parser.parse("## Sub {anchor-x}").anchor, "anchor-x");
    }

    #[test]
    fn test_parse_marker_only_line() {
        let parser = HeadingParser::new();
        let heading = parser.parse("##");
        assert_eq!(heading.level, 2);
        assert_eq!(heading.name, "");
        assert_eq!(heading.anchor, "");
    }

    #[test]
    fn test_parse_anchor_token_excluded_from_name() {
        let parser = HeadingParser::new();
        let heading = parser.parse("# Install guide {#install}");
        assert_eq!(heading.name, "Install guide");
        assert_eq!(heading.anchor, "install");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("What's New?"), "whats-new");
        assert_eq!(slugify("kebab-case"), "kebab-case");
        assert_eq!(slugify("Version 2.0"), "version-20");
    }

    #[test]
    fn test_slugify_idempotent() {
        let once = slugify("Getting Started!");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn test_slugify_preserves_each_space() {
        // Each space maps to one dash; runs are not collapsed.
        assert_eq!(slugify("a  b"), "a--b");
    }

    #[test]
    fn test_slugify_non_ascii_letters_kept() {
        assert_eq!(slugify("Настройка"), "настройка");
    }
}
