//! Rollback Service - puts a target directory back the way it was.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::application::{ports::Filesystem, services::backup_service::backup_path};

/// What a rollback did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollbackOutcome {
    /// The snapshot was moved back into place.
    Restored,
    /// No snapshot existed; the partial target was deleted.
    Removed,
    NothingToDo,
}

impl fmt::Display for RollbackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Restored => "restored from backup",
            Self::Removed => "partial output removed",
            Self::NothingToDo => "nothing to roll back",
        })
    }
}

pub struct RollbackManager {
    filesystem: Arc<dyn Filesystem>,
}

impl RollbackManager {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Best-effort rollback of `path`. Never fails; problems are logged.
    ///
    /// Running it again after it finished reports `NothingToDo`.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn rollback(&self, path: &Path) -> RollbackOutcome {
        let backup = backup_path(path);

        if self.filesystem.exists(&backup) {
            self.remove(path);
            return match self.filesystem.rename(&backup, path) {
                Ok(()) => {
                    info!("restored from backup");
                    RollbackOutcome::Restored
                }
                Err(e) => {
                    warn!(error = %e, backup = %backup.display(), "could not restore backup, it was left in place");
                    RollbackOutcome::Removed
                }
            };
        }

        if self.filesystem.exists(path) {
            self.remove(path);
            info!("partial output removed");
            RollbackOutcome::Removed
        } else {
            RollbackOutcome::NothingToDo
        }
    }

    fn remove(&self, path: &Path) {
        if !self.filesystem.exists(path) {
            return;
        }
        if let Err(e) = self.filesystem.remove_all(path) {
            warn!(error = %e, path = %path.display(), "rollback could not remove path");
        }
    }
}
