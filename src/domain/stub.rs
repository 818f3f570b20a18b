//! Stub classification: which boilerplate a new file receives.

/// Flutter source extension that receives the Dart header stub.
pub const DART_EXTENSION: &str = ".dart";

/// The project readme filename that receives the description stub.
pub const README_FILE: &str = "README.md";

/// The kind of stub content written into a newly created file.
///
/// Determined solely by the filename; path segments play no part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubKind {
    /// Dart source: comment naming the file plus the Flutter core import.
    DartSource,
    /// The project readme: fixed description paragraph.
    Readme,
    /// Everything else (e.g. the package manifest): created empty.
    Empty,
}

impl StubKind {
    /// Classify a filename.
    ///
    /// Matching is case-sensitive: `Readme` requires the exact readme name,
    /// and only a lowercase `.dart` suffix counts as Dart source.
    pub fn for_filename(filename: &str) -> StubKind {
        if filename.ends_with(DART_EXTENSION) {
            StubKind::DartSource
        } else if filename == README_FILE {
            StubKind::Readme
        } else {
            StubKind::Empty
        }
    }
}
