use std::collections::HashSet;

use crate::domain::{
    entities::common::{Permissions, RelativePath},
    error::DomainError,
};

/// Files and directories written by the scaffolding step.
///
/// Paths are relative to the project root; the orchestrator decides where
/// the root lives. This type contains no business logic, only data.
#[derive(Debug, Clone, Default)]
pub struct ProjectStructure {
    pub(crate) entries: Vec<FsEntry>,
}

impl ProjectStructure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(
        &mut self,
        path: &str,
        content: String,
        perms: Permissions,
    ) -> Result<(), DomainError> {
        self.entries.push(FsEntry::File(FileToWrite {
            path: RelativePath::try_new(path)?,
            content,
            permissions: perms,
        }));
        Ok(())
    }

    pub fn add_directory(&mut self, path: &str) -> Result<(), DomainError> {
        self.entries.push(FsEntry::Directory(DirectoryToCreate {
            path: RelativePath::try_new(path)?,
        }));
        Ok(())
    }

    pub fn with_file(
        mut self,
        path: &str,
        content: impl Into<String>,
        perms: Permissions,
    ) -> Result<Self, DomainError> {
        self.add_file(path, content.into(), perms)?;
        Ok(self)
    }

    pub fn with_directory(mut self, path: &str) -> Result<Self, DomainError> {
        self.add_directory(path)?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path().to_string();
            if !seen.insert(path.clone()) {
                return Err(DomainError::DuplicatePath { path });
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: RelativePath,
    pub content: String,
    pub permissions: Permissions,
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: RelativePath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_files_and_directories() {
        let structure = ProjectStructure::new()
            .with_directory("docs")
            .unwrap()
            .with_file("README.md", "# demo", Permissions::read_write())
            .unwrap();

        assert_eq!(structure.entry_count(), 2);
        assert_eq!(structure.files().count(), 1);
        assert_eq!(structure.directories().count(), 1);
        assert!(structure.validate().is_ok());
    }

    #[test]
    fn rejects_duplicates() {
        let structure = ProjectStructure::new()
            .with_file("README.md", "", Permissions::read_write())
            .unwrap()
            .with_file("README.md", "", Permissions::read_write())
            .unwrap();

        assert!(matches!(
            structure.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn rejects_absolute_paths() {
        let result = ProjectStructure::new().with_directory("/etc");
        assert!(matches!(
            result,
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }
}
