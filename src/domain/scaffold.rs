//! The scaffold table: the ordered directory → filenames mapping that
//! defines the battery_analyzer project tree.

use std::path::{Path, PathBuf};

/// The built-in battery_analyzer tree shape.
///
/// Entry order is significant: directories are processed top to bottom, and
/// each directory is created before the files it contains.
const BATTERY_ANALYZER: &[(&str, &[&str])] = &[
    (".", &["pubspec.yaml", "README.md"]),
    ("android", &[]),
    ("ios", &[]),
    ("lib", &["main.dart"]),
    ("lib/screens", &["home_screen.dart"]),
    (
        "lib/widgets",
        &[
            "battery_card.dart",
            "stat_card.dart",
            "status_indicator.dart",
            "history_panel.dart",
            "log_panel.dart",
        ],
    ),
    ("lib/utils", &["real_battery_service.dart", "battery_formatter.dart"]),
    ("assets/images", &[]),
];

/// One table row: a relative directory and the files placed inside it.
#[derive(Debug, Clone)]
pub struct ScaffoldEntry {
    /// Directory path relative to the project root (`.` for the root itself).
    pub directory: String,
    /// Filenames created inside the directory, in creation order.
    pub files: Vec<String>,
}

impl ScaffoldEntry {
    /// Relative path of the directory.
    pub fn dir_path(&self) -> &Path {
        Path::new(&self.directory)
    }

    /// Joined relative path for a file inside this directory.
    ///
    /// Files under `.` keep the `./` prefix (`./pubspec.yaml`), matching the
    /// paths the progress notices show.
    pub fn file_path(&self, filename: &str) -> PathBuf {
        self.dir_path().join(filename)
    }
}

/// Ordered mapping of directories to filenames; read-only after construction.
#[derive(Debug, Clone)]
pub struct ScaffoldTable {
    entries: Vec<ScaffoldEntry>,
}

impl ScaffoldTable {
    /// Build a table from explicit entries, preserving their order.
    pub fn new(entries: Vec<ScaffoldEntry>) -> Self {
        Self { entries }
    }

    /// The built-in battery_analyzer project table.
    pub fn battery_analyzer() -> Self {
        let entries = BATTERY_ANALYZER
            .iter()
            .map(|(directory, files)| ScaffoldEntry {
                directory: (*directory).to_string(),
                files: files.iter().map(|file| (*file).to_string()).collect(),
            })
            .collect();
        Self { entries }
    }

    /// Entries in table order.
    pub fn entries(&self) -> &[ScaffoldEntry] {
        &self.entries
    }

    /// Total number of files across all entries.
    pub fn file_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.files.len()).sum()
    }
}
