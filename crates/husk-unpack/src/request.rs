use std::path::PathBuf;

use crate::format::ArchiveFormat;

/// One unpacking job: where the archive is, where its contents go, and how
/// the destination is treated. Consumed once by [`crate::extract`].
#[derive(Clone, Debug)]
pub struct ExtractionRequest {
    pub archive_path: PathBuf,
    pub destination_path: PathBuf,
    pub purge_destination: bool,
    pub format_override: Option<ArchiveFormat>,
}

impl ExtractionRequest {
    pub fn new(archive: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            archive_path: archive.into(),
            destination_path: destination.into(),
            purge_destination: false,
            format_override: None,
        }
    }

    /// Empty the destination directory before unpacking.
    pub fn purge_destination(mut self, purge: bool) -> Self {
        self.purge_destination = purge;
        self
    }

    /// Skip filename detection and treat the archive as `format`.
    pub fn format_override(mut self, format: ArchiveFormat) -> Self {
        self.format_override = Some(format);
        self
    }
}

/// What a finished extraction produced.
#[derive(Clone, Debug)]
pub struct ExtractionOutcome {
    pub format: ArchiveFormat,
    pub archive: PathBuf,
    pub destination: PathBuf,
}
