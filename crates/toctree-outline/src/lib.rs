//! Topic-tree construction and serialization for the toctree generator.
//!
//! This crate is the pure core of the pipeline: it knows nothing about the
//! filesystem. Given document text and a base reference, it produces nested
//! [`TopicNode`] trees and serializes the assembled result as XML.
//!
//! # Architecture
//!
//! - [`heading`]: lazy heading-line scanner and heading decomposition
//!   (level, display name, explicit or slug-derived anchor)
//! - [`OutlineBuilder`]: the stack state machine turning one document's flat
//!   heading sequence into a correctly nested forest
//! - [`Assembler`]: orders part grouping across documents (adjacent-only
//!   merge) under a single titled root
//! - [`xml`]: depth-first serializer emitting one indented element per node
//!
//! # Example
//!
//! ```
//! use toctree_outline::{Assembler, OutlineBuilder, xml};
//!
//! let builder = OutlineBuilder::default();
//! let forest = builder.document_outline("# Title\n## Sub {anchor-x}\n", "a.html");
//!
//! let mut assembler = Assembler::new("Guide", "index.html");
//! assembler.push_document("Guide", forest);
//! let output = xml::render(&assembler.finish());
//! assert!(output.contains("href=\"a.html#anchor-x\""));
//! ```

mod assemble;
mod builder;
pub mod heading;
mod tree;
pub mod xml;

pub use assemble::Assembler;
pub use builder::{DEFAULT_MAX_LEVEL, OutlineBuilder};
pub use heading::{Heading, HeadingParser, heading_lines, slugify};
pub use tree::TopicNode;
