use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// External programs an extraction is allowed to invoke.
///
/// `zip_tool` and `tar_tool` are bare program names resolved through `PATH`,
/// or explicit paths taken as-is. The xz decompressor is never taken from
/// `PATH`: it is looked up in `search_dirs`, in order.
#[derive(Clone, Debug)]
pub struct Toolchain {
    zip_tool: PathBuf,
    tar_tool: PathBuf,
    search_dirs: Vec<PathBuf>,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            zip_tool: PathBuf::from("ditto"),
            tar_tool: PathBuf::from("tar"),
            search_dirs: Vec::new(),
        }
    }
}

impl Toolchain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zip_tool(mut self, program: impl Into<PathBuf>) -> Self {
        self.zip_tool = program.into();
        self
    }

    pub fn tar_tool(mut self, program: impl Into<PathBuf>) -> Self {
        self.tar_tool = program.into();
        self
    }

    /// Append a directory to the xz search path.
    pub fn search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dirs.push(dir.into());
        self
    }

    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    pub(crate) fn resolve_zip(&self) -> Result<PathBuf> {
        resolve(&self.zip_tool)
    }

    pub(crate) fn resolve_tar(&self) -> Result<PathBuf> {
        resolve(&self.tar_tool)
    }

    /// Locate `name` in the search directories, first hit wins.
    pub(crate) fn locate(&self, name: &str) -> Result<PathBuf> {
        for dir in &self.search_dirs {
            let candidate = dir.join(name);
            if candidate.exists() {
                return Ok(candidate);
            }
        }
        Err(Error::ToolNotFound {
            name: name.to_string(),
            searched: self.search_dirs.clone(),
        })
    }
}

fn resolve(program: &Path) -> Result<PathBuf> {
    // A program given with a directory component is trusted as-is; the
    // spawn reports failures for paths that turn out not to exist.
    if program.components().count() > 1 {
        return Ok(program.to_path_buf());
    }
    which::which(program).map_err(|e| Error::ProcessNotFound {
        program: program.to_path_buf(),
        source: io::Error::new(io::ErrorKind::NotFound, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_checks_directories_in_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        std::fs::write(second.path().join("xz"), b"").unwrap();

        let tools = Toolchain::new()
            .search_dir(first.path())
            .search_dir(second.path());
        let found = tools.locate("xz").unwrap();
        assert_eq!(found, second.path().join("xz"));
    }

    #[test]
    fn locate_prefers_earlier_directory() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        std::fs::write(first.path().join("xz"), b"").unwrap();
        std::fs::write(second.path().join("xz"), b"").unwrap();

        let tools = Toolchain::new()
            .search_dir(first.path())
            .search_dir(second.path());
        assert_eq!(tools.locate("xz").unwrap(), first.path().join("xz"));
    }

    #[test]
    fn locate_reports_searched_directories() {
        let dir = tempfile::tempdir().unwrap();
        let tools = Toolchain::new().search_dir(dir.path());
        let err = tools.locate("xz").unwrap_err();
        match err {
            Error::ToolNotFound { name, searched } => {
                assert_eq!(name, "xz");
                assert_eq!(searched, vec![dir.path().to_path_buf()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn explicit_paths_skip_path_lookup() {
        let tools = Toolchain::new().tar_tool("/opt/custom/tar");
        assert_eq!(tools.resolve_tar().unwrap(), PathBuf::from("/opt/custom/tar"));
    }

    #[test]
    fn unknown_program_name_is_process_not_found() {
        let tools = Toolchain::new().tar_tool("husk-no-such-program");
        let err = tools.resolve_tar().unwrap_err();
        assert!(matches!(err, Error::ProcessNotFound { .. }));
    }
}
