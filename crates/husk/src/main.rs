use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use husk_unpack::{ArchiveFormat, ExtractionRequest, Toolchain, strip_archive_suffix};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, Parser)]
#[command(name = "husk", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
struct App {
    /// Path to the archive to unpack
    archive: PathBuf,

    /// Directory to unpack into, created if missing. Defaults to the
    /// archive name with its suffix stripped, under the current directory
    #[arg(short, long)]
    destination: Option<PathBuf>,

    /// Remove everything in the destination before unpacking
    #[arg(long)]
    purge: bool,

    /// Archive format: zip, tar, tar_gzip, tar_bzip2 or tar_xz.
    /// Guessed from the filename when omitted
    #[arg(short, long)]
    format: Option<ArchiveFormat>,

    /// Directory searched for the xz binary, highest priority first
    #[arg(long = "tool-dir", value_name = "DIR")]
    tool_dirs: Vec<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app = App::parse();

    let destination = app
        .destination
        .clone()
        .unwrap_or_else(|| default_destination(&app.archive));

    let mut tools = Toolchain::new();
    for dir in &app.tool_dirs {
        tools = tools.search_dir(dir);
    }
    tracing::debug!(dirs = ?app.tool_dirs, "xz search path");

    let mut request =
        ExtractionRequest::new(&app.archive, &destination).purge_destination(app.purge);
    if let Some(format) = app.format {
        request = request.format_override(format);
    }

    let outcome = husk_unpack::extract_with(request, &tools)
        .with_context(|| format!("can't unpack {}", app.archive.display()))?;

    println!(
        "Unarchived {} to {}",
        outcome.archive.display(),
        outcome.destination.display()
    );
    Ok(())
}

/// Fallback destination: the archive filename with its suffix stripped,
/// resolved under the current directory.
fn default_destination(archive: &Path) -> PathBuf {
    let name = archive
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = strip_archive_suffix(&name);
    if stem.is_empty() {
        PathBuf::from("unpacked")
    } else {
        PathBuf::from(stem)
    }
}
