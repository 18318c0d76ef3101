use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::format::{ArchiveFormat, Compression};
use crate::tool::Toolchain;

/// One external program plus its argument vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl ToolInvocation {
    /// Short program name used in error reports.
    pub fn tool_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.program.display().to_string())
    }
}

/// How a format gets unpacked: one subprocess, or a decompressor piped
/// into a tar reader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtractionPlan {
    Single(ToolInvocation),
    Piped {
        producer: ToolInvocation,
        consumer: ToolInvocation,
    },
}

/// Map a resolved format onto the external invocation that unpacks it.
///
/// Binary resolution happens here, before anything is spawned: `PATH`
/// lookup for the zip and tar programs, search-directory lookup for xz.
pub fn plan(
    format: ArchiveFormat,
    archive: &Path,
    destination: &Path,
    tools: &Toolchain,
) -> Result<ExtractionPlan> {
    let plan = match format {
        ArchiveFormat::Zip => ExtractionPlan::Single(ToolInvocation {
            program: tools.resolve_zip()?,
            // --noqtn drops quarantine attributes, -k keeps resource forks
            // intact on hosts that carry them
            args: vec![
                "--noqtn".into(),
                "-x".into(),
                "-k".into(),
                archive.into(),
                destination.into(),
            ],
        }),
        ArchiveFormat::Tar(Compression::None) => single_tar(tools, archive, destination, None)?,
        ArchiveFormat::Tar(Compression::Gzip) => {
            single_tar(tools, archive, destination, Some("-z"))?
        }
        ArchiveFormat::Tar(Compression::Bzip2) => {
            single_tar(tools, archive, destination, Some("-j"))?
        }
        ArchiveFormat::Tar(Compression::Xz) => {
            let producer = ToolInvocation {
                program: tools.locate("xz")?,
                args: vec!["--stdout".into(), "--decompress".into(), archive.into()],
            };
            // tar reads the decompressed stream from stdin, so no -f here
            let consumer = ToolInvocation {
                program: tools.resolve_tar()?,
                args: vec!["-x".into(), "-C".into(), destination.into()],
            };
            ExtractionPlan::Piped { producer, consumer }
        }
    };
    Ok(plan)
}

fn single_tar(
    tools: &Toolchain,
    archive: &Path,
    destination: &Path,
    filter_flag: Option<&str>,
) -> Result<ExtractionPlan> {
    let mut args: Vec<OsString> = vec![
        "-x".into(),
        "-f".into(),
        archive.into(),
        "-C".into(),
        destination.into(),
    ];
    if let Some(flag) = filter_flag {
        args.push(flag.into());
    }
    Ok(ExtractionPlan::Single(ToolInvocation {
        program: tools.resolve_tar()?,
        args,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn tools() -> Toolchain {
        Toolchain::new()
            .zip_tool("/usr/bin/ditto")
            .tar_tool("/usr/bin/tar")
    }

    fn args_of(plan: ExtractionPlan) -> Vec<OsString> {
        match plan {
            ExtractionPlan::Single(invocation) => invocation.args,
            ExtractionPlan::Piped { .. } => panic!("expected a single invocation"),
        }
    }

    #[test]
    fn zip_invocation() {
        let plan = plan(
            ArchiveFormat::Zip,
            Path::new("/tmp/a.zip"),
            Path::new("/tmp/out"),
            &tools(),
        )
        .unwrap();
        assert_eq!(
            args_of(plan),
            vec![
                OsString::from("--noqtn"),
                "-x".into(),
                "-k".into(),
                "/tmp/a.zip".into(),
                "/tmp/out".into(),
            ]
        );
    }

    #[test]
    fn plain_tar_has_no_filter_flag() {
        let plan = plan(
            ArchiveFormat::Tar(Compression::None),
            Path::new("/tmp/a.tar"),
            Path::new("/tmp/out"),
            &tools(),
        )
        .unwrap();
        assert_eq!(
            args_of(plan),
            vec![
                OsString::from("-x"),
                "-f".into(),
                "/tmp/a.tar".into(),
                "-C".into(),
                "/tmp/out".into(),
            ]
        );
    }

    #[test]
    fn gzip_and_bzip2_append_their_flag() {
        let gz = plan(
            ArchiveFormat::Tar(Compression::Gzip),
            Path::new("/tmp/a.tar.gz"),
            Path::new("/tmp/out"),
            &tools(),
        )
        .unwrap();
        assert_eq!(args_of(gz).last().unwrap(), &OsString::from("-z"));

        let bz = plan(
            ArchiveFormat::Tar(Compression::Bzip2),
            Path::new("/tmp/a.tar.bz2"),
            Path::new("/tmp/out"),
            &tools(),
        )
        .unwrap();
        assert_eq!(args_of(bz).last().unwrap(), &OsString::from("-j"));
    }

    #[test]
    fn xz_pipes_decompressor_into_stdin_tar() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("xz"), b"").unwrap();
        let tools = tools().search_dir(dir.path());

        let plan = plan(
            ArchiveFormat::Tar(Compression::Xz),
            Path::new("/tmp/a.tar.xz"),
            Path::new("/tmp/out"),
            &tools,
        )
        .unwrap();

        let ExtractionPlan::Piped { producer, consumer } = plan else {
            panic!("expected a piped plan");
        };
        assert_eq!(producer.program, dir.path().join("xz"));
        assert_eq!(
            producer.args,
            vec![
                OsString::from("--stdout"),
                "--decompress".into(),
                "/tmp/a.tar.xz".into(),
            ]
        );
        // stdin-fed tar takes no -f
        assert_eq!(
            consumer.args,
            vec![OsString::from("-x"), "-C".into(), "/tmp/out".into()]
        );
    }

    #[test]
    fn xz_missing_from_search_path() {
        let err = plan(
            ArchiveFormat::Tar(Compression::Xz),
            Path::new("/tmp/a.tar.xz"),
            Path::new("/tmp/out"),
            &tools(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { name, .. } if name == "xz"));
    }

    #[test]
    fn tool_name_is_the_file_name() {
        let invocation = ToolInvocation {
            program: PathBuf::from("/usr/bin/tar"),
            args: Vec::new(),
        };
        assert_eq!(invocation.tool_name(), "tar");
    }
}
