//! Build command implementation: one pass over the scaffold table.

use crate::app::AppContext;
use crate::domain::{AppError, ScaffoldTable};
use crate::ports::{BuildReporter, ProjectStore, StubStore};

/// Result of a build run.
///
/// Paths are the relative display paths the progress notices show, in
/// emission order.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Directories that were created.
    pub created_dirs: Vec<String>,
    /// Files that were created.
    pub created_files: Vec<String>,
    /// Files that already existed and were left untouched.
    pub skipped_files: Vec<String>,
}

/// Execute the build command.
///
/// Walks the table in order. Each missing directory is created (parents
/// included) with a notice; existing directories pass silently. Each missing
/// file is created with its stub content and a notice; existing files are
/// skipped with a notice and never rewritten. The first filesystem error
/// aborts the remaining operations with no rollback and no cleanup.
pub fn execute<P, S, R>(
    ctx: &AppContext<P, S, R>,
    table: &ScaffoldTable,
) -> Result<BuildReport, AppError>
where
    P: ProjectStore,
    S: StubStore,
    R: BuildReporter,
{
    let mut report = BuildReport::default();

    for entry in table.entries() {
        let dir = entry.dir_path();
        if !ctx.project().exists(dir) {
            ctx.project().create_dir_all(dir)?;
            let shown = dir.display().to_string();
            ctx.reporter().directory_created(&shown);
            report.created_dirs.push(shown);
        }

        for filename in &entry.files {
            let path = entry.file_path(filename);
            let shown = path.display().to_string();
            if !ctx.project().exists(&path) {
                let content = ctx.stubs().initial_content(filename);
                ctx.project().write_file(&path, &content)?;
                ctx.reporter().file_created(&shown);
                report.created_files.push(shown);
            } else {
                ctx.reporter().file_skipped(&shown);
                report.skipped_files.push(shown);
            }
        }
    }

    Ok(report)
}
