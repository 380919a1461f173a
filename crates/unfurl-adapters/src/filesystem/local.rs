//! Disk-backed [`Filesystem`] used by the binary.

use std::fmt;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

use tracing::trace;
use unfurl_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{UnfurlError, UnfurlResult},
};

/// Writes extracted projects to the real filesystem.
///
/// Stateless: every call goes straight to `std::fs`, and `write_file` has
/// closed its handle by the time it returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> UnfurlResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        fs::create_dir_all(path).map_err(|e| disk_error(path, DiskOp::CreateDir, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> UnfurlResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        fs::write(path, content).map_err(|e| disk_error(path, DiskOp::Write, e))
    }

    fn exists(&self, path: &Path) -> bool {
        // An unreadable entry still occupies the name, so never provision over it.
        path.try_exists().unwrap_or(true)
    }
}

#[derive(Debug, Clone, Copy)]
enum DiskOp {
    CreateDir,
    Write,
}

impl fmt::Display for DiskOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CreateDir => "create directory",
            Self::Write => "write file",
        })
    }
}

fn disk_error(path: &Path, op: DiskOp, e: io::Error) -> UnfurlError {
    let cause = match e.kind() {
        ErrorKind::PermissionDenied => "permission denied".to_string(),
        ErrorKind::AlreadyExists | ErrorKind::NotADirectory => {
            "a file is in the way of a directory".to_string()
        }
        ErrorKind::StorageFull => "no space left on device".to_string(),
        _ => e.to_string(),
    };

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {op}: {cause}"),
    }
    .into()
}
