use std::path::Path;

use tracing::{debug, info};

use crate::dest::prepare_destination;
use crate::error::{Error, Result};
use crate::format::ArchiveFormat;
use crate::request::{ExtractionOutcome, ExtractionRequest};
use crate::tool::Toolchain;

mod plan;
mod run;

pub use plan::{ExtractionPlan, ToolInvocation, plan};

/// Unpack one archive with the default toolchain.
pub fn extract(request: ExtractionRequest) -> Result<ExtractionOutcome> {
    extract_with(request, &Toolchain::default())
}

/// Unpack one archive, taking programs and the xz search path from `tools`.
///
/// Runs the whole job to completion before returning: resolve the format,
/// prepare the destination, then hand the archive to the external tool.
/// The first failure ends the job; a failed extraction leaves the
/// destination in whatever state the tool left it.
pub fn extract_with(request: ExtractionRequest, tools: &Toolchain) -> Result<ExtractionOutcome> {
    let ExtractionRequest {
        archive_path,
        destination_path,
        purge_destination,
        format_override,
    } = request;

    if !archive_path.is_file() {
        return Err(Error::MissingInput(archive_path));
    }

    let format = match format_override {
        Some(format) => format,
        None => {
            let name = file_name(&archive_path);
            let format = ArchiveFormat::from_file_name(&name)?;
            debug!(%format, file = %name, "guessed archive format from filename");
            format
        }
    };

    prepare_destination(&destination_path, purge_destination)?;

    let plan = plan::plan(format, &archive_path, &destination_path, tools)?;
    run::run(&plan)?;

    info!(
        archive = %archive_path.display(),
        destination = %destination_path.display(),
        "unarchived"
    );

    Ok(ExtractionOutcome {
        format,
        archive: archive_path,
        destination: destination_path,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
