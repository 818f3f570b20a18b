/// Port for resolving the initial content of a newly created file.
pub trait StubStore {
    /// Stub content for the given filename.
    ///
    /// Returns an empty string for files that are created without content
    /// (the package manifest and anything else outside the known kinds).
    fn initial_content(&self, filename: &str) -> String;
}
