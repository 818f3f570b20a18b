use std::path::Path;

use crate::domain::AppError;

/// Port for filesystem access rooted at the scaffold target.
///
/// All paths are relative to the target root. Writes are create-only: the
/// builder never overwrites or deletes, so no such operations exist here.
pub trait ProjectStore {
    /// Whether anything (file or directory) exists at the relative path.
    fn exists(&self, rel: &Path) -> bool;

    /// Create a directory, including any missing parent segments.
    fn create_dir_all(&self, rel: &Path) -> Result<(), AppError>;

    /// Create a file with the given content.
    fn write_file(&self, rel: &Path, content: &str) -> Result<(), AppError>;
}
