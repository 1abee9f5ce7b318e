//! Backup Service - snapshots a directory before it is mutated.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{BackupError, ports::Filesystem},
    error::StackgenResult,
};

pub const BACKUP_SUFFIX: &str = ".bak";

/// Sibling snapshot location: `/work/demo-app` -> `/work/demo-app.bak`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut raw = OsString::from(path.as_os_str());
    raw.push(BACKUP_SUFFIX);
    PathBuf::from(raw)
}

/// Creates and discards `<path>.bak` snapshots.
pub struct BackupManager {
    filesystem: Arc<dyn Filesystem>,
}

impl BackupManager {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Snapshot `path` into `<path>.bak`.
    ///
    /// Returns `Ok(None)` when there is nothing to back up. An existing
    /// snapshot is never overwritten or merged into.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn create_backup(&self, path: &Path) -> Result<Option<PathBuf>, BackupError> {
        let backup = backup_path(path);

        if self.filesystem.exists(&backup) {
            return Err(BackupError::Collision { backup });
        }

        if !self.filesystem.exists(path) {
            debug!("nothing to back up");
            return Ok(None);
        }

        if !self.filesystem.is_dir(path) {
            return Err(BackupError::CopyFailed {
                path: path.to_path_buf(),
                reason: "not a directory".into(),
            });
        }

        if let Err(e) = self.filesystem.copy_dir_all(path, &backup) {
            if self.filesystem.exists(&backup) {
                if let Err(cleanup) = self.filesystem.remove_all(&backup) {
                    warn!(error = %cleanup, backup = %backup.display(), "could not remove partial backup");
                }
            }
            return Err(BackupError::CopyFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
        }

        info!(backup = %backup.display(), "backup created");
        Ok(Some(backup))
    }

    /// Delete `<path>.bak` if present. Calling it twice is fine.
    pub fn discard_backup(&self, path: &Path) -> StackgenResult<()> {
        let backup = backup_path(path);
        if self.filesystem.exists(&backup) {
            self.filesystem.remove_all(&backup)?;
            debug!(backup = %backup.display(), "backup discarded");
        }
        Ok(())
    }

    pub fn has_backup(&self, path: &Path) -> bool {
        self.filesystem.exists(&backup_path(path))
    }
}
