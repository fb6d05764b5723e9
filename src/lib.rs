use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{info, instrument};

pub mod domain;
pub mod errors;
pub mod fs;
pub mod outline;
pub mod template;

pub use errors::{MindmapError, ParseError, Result, TemplateError};
pub use template::MINDMAP_TEMPLATE;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Raise log verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a markdown outline into a mindmap HTML page
    Create {
        /// Markdown file to convert, or `-` to read stdin
        input: PathBuf,

        /// Name of the generated page
        #[arg(short, long, default_value = "mindmap.html")]
        filename: String,

        /// Directory the page is written into
        #[arg(short, long, default_value = "output/markmap", env = "MD2MAP_OUTPUT_DIR")]
        output_dir: PathBuf,

        /// Use a custom page template instead of the built-in one
        #[arg(short, long)]
        template: Option<PathBuf>,
    },
    /// Print a generated page back out as text
    Read {
        /// Path of the page to read
        path: PathBuf,
    },
}

/// Parses `markdown`, embeds the tree into `page_template` and writes the
/// result under `output_dir`. Returns the written path.
///
/// Nothing touches the filesystem until the page has been fully rendered, so
/// a parse or template failure leaves the output directory exactly as it was.
#[instrument(skip(markdown, page_template))]
pub fn create_mindmap(
    markdown: &str,
    filename: &str,
    output_dir: &Path,
    page_template: &str,
) -> Result<PathBuf> {
    let root = outline::parse(markdown)?;
    let page = template::render(&root, page_template)?;

    fs::ensure_output_dir(output_dir)?;
    let output_path = output_dir.join(normalize_filename(filename));
    fs::write(&output_path, &page)?;
    info!("wrote mindmap: {}", output_path.display());

    Ok(output_path)
}

/// Returns the content of a previously generated page.
pub fn read_content(path: &Path) -> Result<String> {
    fs::read(path)
}

fn normalize_filename(filename: &str) -> String {
    if filename.ends_with(".html") {
        filename.to_string()
    } else {
        format!("{filename}.html")
    }
}
