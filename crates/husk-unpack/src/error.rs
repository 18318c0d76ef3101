use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("expected an archive at '{0}', but no file is there")]
    MissingInput(PathBuf),

    #[error("'{0}' is not a recognized archive format")]
    InvalidFormat(String),

    #[error("can't guess archive format for filename '{0}'")]
    UnknownFormat(String),

    #[error("can't create destination '{path}': {source}")]
    DestinationCreate { path: PathBuf, source: io::Error },

    #[error("can't remove '{path}' from destination: {source}")]
    DestinationPurge { path: PathBuf, source: io::Error },

    #[error("can't find '{name}' in any of the search directories: {searched:?}")]
    ToolNotFound { name: String, searched: Vec<PathBuf> },

    #[error("'{program}' could not be located or executed: {source}")]
    ProcessNotFound { program: PathBuf, source: io::Error },

    #[error("{tool} exited with code {code}: {stderr}")]
    ExtractionFailed {
        tool: String,
        code: i32,
        stderr: String,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
