use crate::ports::BuildReporter;

/// Reporter that streams progress notices to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl BuildReporter for ConsoleReporter {
    fn directory_created(&self, path: &str) {
        println!("📁 Created Directory: {}", path);
    }

    fn file_created(&self, path: &str) {
        println!("📄 Created File: {}", path);
    }

    fn file_skipped(&self, path: &str) {
        println!("⚠️  Skipping: {} (File already exists)", path);
    }
}
