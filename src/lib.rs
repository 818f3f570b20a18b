//! batkit: scaffold the battery_analyzer Flutter project skeleton.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use app::{AppContext, commands::build};
use domain::ScaffoldTable;
use services::{ConsoleReporter, EmbeddedStubStore, FilesystemProjectStore};

pub use app::commands::build::BuildReport;
pub use domain::AppError;

/// Scaffold the battery_analyzer project in the current working directory.
///
/// Walks the built-in table in order, creating every missing directory and
/// file (with extension-keyed stub content) and skipping whatever already
/// exists. Progress streams to stdout; the first filesystem error aborts the
/// run and leaves the partially built tree in place.
pub fn build() -> Result<BuildReport, AppError> {
    let project = FilesystemProjectStore::current()?;
    let ctx = AppContext::new(project, EmbeddedStubStore::new(), ConsoleReporter::new());
    let table = ScaffoldTable::battery_analyzer();

    println!("🛠️  Constructing 'battery_analyzer' architecture...");
    let report = build::execute(&ctx, &table)?;
    println!();
    println!("✅ Setup complete. Your project is ready for development!");
    Ok(report)
}
