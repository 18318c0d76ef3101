use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    Tar(Compression),
}

/// Compression filter applied to a tar container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
    Bzip2,
    Xz,
}

/// Recognized filename suffixes, longest first so that `.tar.gz` wins
/// over `.tar`. Suffixes only match as real extensions (leading dot).
const SUFFIXES: &[(&str, ArchiveFormat)] = &[
    (".tar.gz", ArchiveFormat::Tar(Compression::Gzip)),
    (".tar.bz2", ArchiveFormat::Tar(Compression::Bzip2)),
    (".tar.xz", ArchiveFormat::Tar(Compression::Xz)),
    (".tgz", ArchiveFormat::Tar(Compression::Gzip)),
    (".tbz", ArchiveFormat::Tar(Compression::Bzip2)),
    (".txz", ArchiveFormat::Tar(Compression::Xz)),
    (".tar", ArchiveFormat::Tar(Compression::None)),
    (".zip", ArchiveFormat::Zip),
];

impl ArchiveFormat {
    /// Guess the format from a filename suffix.
    pub fn from_file_name(name: &str) -> Result<Self> {
        SUFFIXES
            .iter()
            .find(|(suffix, _)| name.ends_with(suffix))
            .map(|&(_, format)| format)
            .ok_or_else(|| Error::UnknownFormat(name.to_string()))
    }
}

/// Strip a recognized archive suffix from a filename, if one is present.
pub fn strip_archive_suffix(name: &str) -> &str {
    SUFFIXES
        .iter()
        .find_map(|(suffix, _)| name.strip_suffix(suffix))
        .unwrap_or(name)
}

impl FromStr for ArchiveFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "zip" => Ok(Self::Zip),
            "tar" => Ok(Self::Tar(Compression::None)),
            "tar_gzip" => Ok(Self::Tar(Compression::Gzip)),
            "tar_bzip2" => Ok(Self::Tar(Compression::Bzip2)),
            "tar_xz" => Ok(Self::Tar(Compression::Xz)),
            other => Err(Error::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Zip => "zip",
            Self::Tar(Compression::None) => "tar",
            Self::Tar(Compression::Gzip) => "tar_gzip",
            Self::Tar(Compression::Bzip2) => "tar_bzip2",
            Self::Tar(Compression::Xz) => "tar_xz",
        };
        f.write_str(name)
    }
}
