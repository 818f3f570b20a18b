/// Port for emitting human-readable progress notices during a build.
///
/// Implementations are called in operation order, as each filesystem action
/// happens, so partial progress stays visible when a later operation aborts.
pub trait BuildReporter {
    /// A missing directory was created.
    fn directory_created(&self, path: &str);

    /// A missing file was created.
    fn file_created(&self, path: &str);

    /// A file already existed and was left untouched.
    fn file_skipped(&self, path: &str);
}

/// Reporter that swallows all notices.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl BuildReporter for SilentReporter {
    fn directory_created(&self, _path: &str) {}

    fn file_created(&self, _path: &str) {}

    fn file_skipped(&self, _path: &str) {}
}
