//! Tree generation: scan, assemble, serialize, write.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use toctree_config::{CliSettings, Config};
use toctree_outline::{Assembler, OutlineBuilder, xml};
use toctree_scan::Scanner;

use crate::error::CliError;
use crate::output::Output;

/// Landing reference carried by the root node, derived from the index
/// document.
const LANDING_HREF: &str = "index.html";

/// Arguments for tree generation.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Source root containing the documents.
    pub(crate) source_root: Option<PathBuf>,

    /// Destination directory for the generated tree.
    #[arg(short, long)]
    pub(crate) output_dir: Option<PathBuf>,

    /// Maximum section level included in the tree.
    #[arg(short, long)]
    pub(crate) max_level: Option<usize>,

    /// Path to the configuration file.
    #[arg(short, long, env = "TOCTREE_CONFIG")]
    pub(crate) config: Option<PathBuf>,
}

impl BuildArgs {
    /// Run the full pipeline and write the tree file.
    ///
    /// The tree is rendered to a string before the output directory is
    /// created or the file written, so a fatal error never leaves partial
    /// output behind.
    pub(crate) fn execute(&self, output: &Output) -> Result<(), CliError> {
        let settings = CliSettings {
            source_dir: self.source_root.clone(),
            output_dir: self.output_dir.clone(),
            max_level: self.max_level,
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;

        let scanner =
            Scanner::with_extension(&config.docs.source_dir, &config.outline.extension);
        let discovery = scanner.scan()?;
        let title = discovery.title()?;

        let builder = OutlineBuilder::new(config.outline.max_level);
        let mut assembler = Assembler::new(title, LANDING_HREF);

        for doc in &discovery.documents {
            let label = doc.part_label()?;
            let text = doc.read_text()?;
            tracing::info!(href = %doc.href, part = %label, "Processing document");
            assembler.push_document(&label, builder.document_outline(&text, &doc.href));
        }

        let rendered = xml::render(&assembler.finish());

        let output_path = config.docs.output_path();
        fs::create_dir_all(&config.docs.output_dir)?;
        fs::write(&output_path, rendered)?;

        output.success(&format!(
            "Wrote {} ({} documents)",
            output_path.display(),
            discovery.documents.len()
        ));
        Ok(())
    }
}
