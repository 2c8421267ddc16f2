//! Document discovery for the toctree generator.
//!
//! This crate handles the filesystem side of the pipeline:
//!
//! - Recursive directory scanning for documents with the configured extension
//! - Deterministic ordering (sorted by base name, never by traversal order)
//! - Index-document handling (reserved base name at the source root)
//! - Front-matter `part:` label extraction
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use toctree_scan::Scanner;
//!
//! let scanner = Scanner::new(Path::new("docs"));
//! let discovery = scanner.scan()?;
//! for doc in &discovery.documents {
//!     println!("{}: {}", doc.href, doc.part_label()?);
//! }
//! ```

pub mod front_matter;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default document extension (without the dot).
pub const DEFAULT_EXTENSION: &str = "md";

/// Reserved base name of the index document at the source root.
pub const INDEX_FILENAME: &str = "index.md";

/// Error raised during document discovery.
///
/// All variants are fatal configuration or I/O conditions; malformed document
/// *content* never surfaces here (it degrades silently downstream).
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Source root does not exist or is not a directory.
    #[error("source root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// No eligible documents were found under the source root.
    #[error("no .{extension} documents found under {}", source_dir.display())]
    NoDocuments {
        /// Source root that was scanned.
        source_dir: PathBuf,
        /// Extension that was searched for.
        extension: String,
    },

    /// The index document is missing from the source root.
    #[error("index document {} not found in {}", INDEX_FILENAME, .0.display())]
    MissingIndex(PathBuf),

    /// I/O failure while walking the source tree.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// One eligible input document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// Full path to the source file.
    pub path: PathBuf,
    /// Path relative to the source root.
    pub rel_path: PathBuf,
    /// Derived output reference: relative path with the extension replaced
    /// by `.html`, `/`-separated.
    pub href: String,
}

impl Document {
    /// Read the document's part label from its front matter.
    ///
    /// Missing or malformed front matter yields an empty label; only I/O
    /// failures are errors.
    pub fn part_label(&self) -> io::Result<String> {
        front_matter::read_part_label(&self.path)
    }

    /// Read the whole document text.
    pub fn read_text(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}

/// Discovery result: the index document plus the sorted content documents.
#[derive(Debug)]
pub struct Discovery {
    /// Path to the index document at the source root.
    pub index_path: PathBuf,
    /// Content documents, sorted by base name (relative path as tiebreak).
    pub documents: Vec<Document>,
}

impl Discovery {
    /// Read the document-set title from the index document's front matter.
    pub fn title(&self) -> io::Result<String> {
        front_matter::read_part_label(&self.index_path)
    }
}

/// Discovers documents by walking the filesystem.
///
/// The scanner only enumerates and orders files; document content is read
/// later, one scoped file handle at a time.
pub struct Scanner {
    source_dir: PathBuf,
    extension: String,
}

impl Scanner {
    /// Create a scanner for the default `.md` extension.
    #[must_use]
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self::with_extension(source_dir, DEFAULT_EXTENSION)
    }

    /// Create a scanner for a custom document extension (without the dot).
    #[must_use]
    pub fn with_extension(source_dir: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            source_dir: source_dir.into(),
            extension: extension.to_owned(),
        }
    }

    /// Scan the source root and return the ordered document set.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::NotADirectory`] if the source root is not a
    /// directory, [`ScanError::MissingIndex`] if the index document is absent,
    /// and [`ScanError::NoDocuments`] if no eligible documents exist. All of
    /// these are fatal caller-contract violations.
    pub fn scan(&self) -> Result<Discovery, ScanError> {
        if !self.source_dir.is_dir() {
            return Err(ScanError::NotADirectory(self.source_dir.clone()));
        }

        let index_path = self.source_dir.join(INDEX_FILENAME);
        if !index_path.is_file() {
            return Err(ScanError::MissingIndex(self.source_dir.clone()));
        }

        let mut documents = Vec::new();
        self.scan_directory(&self.source_dir, &mut documents)?;

        if documents.is_empty() {
            return Err(ScanError::NoDocuments {
                source_dir: self.source_dir.clone(),
                extension: self.extension.clone(),
            });
        }

        // Traversal order is an accident of the filesystem; sort by base name
        // for reproducible output, full relative path as tiebreak.
        documents.sort_by(|a, b| {
            a.path
                .file_name()
                .cmp(&b.path.file_name())
                .then_with(|| a.rel_path.cmp(&b.rel_path))
        });

        tracing::debug!(count = documents.len(), "Discovered documents");

        Ok(Discovery {
            index_path,
            documents,
        })
    }

    /// Scan one directory, collecting eligible documents and recursing into
    /// subdirectories. Hidden entries are skipped.
    fn scan_directory(&self, dir_path: &Path, documents: &mut Vec<Document>) -> Result<(), ScanError> {
        let entries = fs::read_dir(dir_path).map_err(|source| ScanError::Io {
            path: dir_path.to_path_buf(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| ScanError::Io {
                path: dir_path.to_path_buf(),
                source,
            })?;
            let name = entry.file_name();
            if name.to_string_lossy().starts_with('.') {
                continue;
            }

            let path = entry.path();
            if path.is_dir() {
                self.scan_directory(&path, documents)?;
            } else if path.extension().is_some_and(|e| e == self.extension.as_str()) {
                // The index document is reserved at the source root only.
                if name == INDEX_FILENAME && dir_path == self.source_dir {
                    continue;
                }
                documents.push(self.build_document(path));
            }
        }

        Ok(())
    }

    /// Build a [`Document`] from a discovered file path.
    fn build_document(&self, path: PathBuf) -> Document {
        let rel_path = path
            .strip_prefix(&self.source_dir)
            .unwrap_or(&path)
            .to_path_buf();
        let href = href_from_rel_path(&rel_path);
        Document {
            path,
            rel_path,
            href,
        }
    }
}

/// Derive the output reference for a relative source path.
///
/// The extension is replaced by `.html` and components are joined with `/`
/// regardless of platform separator.
fn href_from_rel_path(rel_path: &Path) -> String {
    let mut href = String::new();
    for component in rel_path.with_extension("html").components() {
        if !href.is_empty() {
            href.push('/');
        }
        href.push_str(&component.as_os_str().to_string_lossy());
    }
    href
}
