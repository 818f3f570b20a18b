//! Shared testing utilities for batkit CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Testing harness providing an isolated scaffold target for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    work_dir: TempDir,
    original_cwd: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let work_dir = TempDir::new().expect("Failed to create temp directory for tests");
        let original_cwd = env::current_dir().expect("Failed to get current directory");
        Self { work_dir, original_cwd }
    }

    /// Path to the scaffold target directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.work_dir.path()
    }

    /// Fixture handle for an entry inside the target directory.
    pub fn child(&self, rel: &str) -> ChildPath {
        self.work_dir.child(rel)
    }

    /// Build a command for invoking the compiled `batkit` binary within the target directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("batkit").expect("Failed to locate batkit binary");
        cmd.current_dir(self.work_dir());
        cmd
    }

    /// Run an action with the process working directory switched to the target.
    ///
    /// Library API calls scaffold whatever the current directory is, so tests
    /// going through here must hold the `#[serial]` lock.
    pub fn with_work_dir<F, R>(&self, action: F) -> R
    where
        F: FnOnce() -> R,
    {
        let original = env::current_dir().expect("Failed to capture current dir");
        env::set_current_dir(self.work_dir()).expect("Failed to switch current dir");
        let result = action();
        env::set_current_dir(original).expect("Failed to restore current dir");
        result
    }

    /// Snapshot of every file under the target, relative path → content.
    pub fn tree_snapshot(&self) -> BTreeMap<String, String> {
        fn walk(root: &Path, dir: &Path, out: &mut BTreeMap<String, String>) {
            for entry in fs::read_dir(dir).expect("Failed to read directory") {
                let path = entry.expect("Failed to read directory entry").path();
                if path.is_dir() {
                    walk(root, &path, out);
                } else {
                    let rel = path
                        .strip_prefix(root)
                        .expect("entry should live under the root")
                        .display()
                        .to_string();
                    let content = fs::read_to_string(&path).expect("Failed to read file");
                    out.insert(rel, content);
                }
            }
        }

        let mut out = BTreeMap::new();
        walk(self.work_dir(), self.work_dir(), &mut out);
        out
    }

    /// Assert that every directory of the battery_analyzer table exists.
    pub fn assert_directories_exist(&self) {
        for dir in
            ["android", "ios", "lib", "lib/screens", "lib/widgets", "lib/utils", "assets/images"]
        {
            assert!(self.child(dir).path().is_dir(), "directory {dir} should exist");
        }
    }

    /// Assert that every file of the battery_analyzer table exists.
    pub fn assert_files_exist(&self) {
        for file in [
            "pubspec.yaml",
            "README.md",
            "lib/main.dart",
            "lib/screens/home_screen.dart",
            "lib/widgets/battery_card.dart",
            "lib/widgets/stat_card.dart",
            "lib/widgets/status_indicator.dart",
            "lib/widgets/history_panel.dart",
            "lib/widgets/log_panel.dart",
            "lib/utils/real_battery_service.dart",
            "lib/utils/battery_formatter.dart",
        ] {
            assert!(self.child(file).path().is_file(), "file {file} should exist");
        }
    }

    /// Assert that the complete battery_analyzer tree exists.
    pub fn assert_full_tree_exists(&self) {
        self.assert_directories_exist();
        self.assert_files_exist();
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        // Restore original CWD (in case a with_work_dir action panicked mid-way)
        let _ = env::set_current_dir(&self.original_cwd);
    }
}
