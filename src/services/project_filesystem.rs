use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ProjectStore;

/// Filesystem-based project store implementation.
#[derive(Debug, Clone)]
pub struct FilesystemProjectStore {
    root: PathBuf,
}

impl FilesystemProjectStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store rooted at the current working directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    fn resolve(&self, rel: &Path) -> PathBuf {
        self.root.join(rel)
    }
}

impl ProjectStore for FilesystemProjectStore {
    fn exists(&self, rel: &Path) -> bool {
        self.resolve(rel).exists()
    }

    fn create_dir_all(&self, rel: &Path) -> Result<(), AppError> {
        fs::create_dir_all(self.resolve(rel))
            .map_err(|source| AppError::CreateDir { path: rel.display().to_string(), source })
    }

    fn write_file(&self, rel: &Path, content: &str) -> Result<(), AppError> {
        fs::write(self.resolve(rel), content)
            .map_err(|source| AppError::CreateFile { path: rel.display().to_string(), source })
    }
}
