//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use stackgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{StackgenError, StackgenResult},
};
use tracing::trace;
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StackgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StackgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn set_executable(&self, path: &Path) -> StackgenResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata =
                std::fs::metadata(path).map_err(|e| map_io_error(path, e, "get metadata"))?;
            let mut perms = metadata.permissions();
            perms.set_mode(perms.mode() | 0o111);
            std::fs::set_permissions(path, perms)
                .map_err(|e| map_io_error(path, e, "set permissions"))?;
        }
        #[cfg(not(unix))]
        {
            let _ = path;
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so a dangling link still counts as "in the way"
        path.symlink_metadata().is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn remove_all(&self, path: &Path) -> StackgenResult<()> {
        let result = if path.is_dir() {
            std::fs::remove_dir_all(path)
        } else {
            std::fs::remove_file(path)
        };
        match result {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(map_io_error(path, e, "remove")),
        }
    }

    fn copy_dir_all(&self, from: &Path, to: &Path) -> StackgenResult<()> {
        for entry in WalkDir::new(from).follow_links(false) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(from).to_path_buf();
                map_io_error(&path, e.into(), "walk directory")
            })?;

            let rel = entry
                .path()
                .strip_prefix(from)
                .map_err(|e| StackgenError::Internal {
                    message: format!("walked outside of {}: {e}", from.display()),
                })?;
            let dest = to.join(rel);
            let file_type = entry.file_type();

            if file_type.is_dir() {
                std::fs::create_dir_all(&dest)
                    .map_err(|e| map_io_error(&dest, e, "create directory"))?;
            } else if file_type.is_symlink() {
                copy_symlink(entry.path(), &dest)?;
            } else {
                // fs::copy keeps permission bits, so hooks stay executable
                std::fs::copy(entry.path(), &dest)
                    .map_err(|e| map_io_error(&dest, e, "copy file"))?;
            }
            trace!(from = %entry.path().display(), to = %dest.display(), "copied");
        }
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> StackgenResult<()> {
        std::fs::rename(from, to).map_err(|e| map_io_error(from, e, "rename"))
    }
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dest: &Path) -> StackgenResult<()> {
    let target = std::fs::read_link(src).map_err(|e| map_io_error(src, e, "read link"))?;
    std::os::unix::fs::symlink(target, dest).map_err(|e| map_io_error(dest, e, "create link"))
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dest: &Path) -> StackgenResult<()> {
    std::fs::copy(src, dest)
        .map(|_| ())
        .map_err(|e| map_io_error(dest, e, "copy file"))
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> StackgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
