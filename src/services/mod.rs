mod console_reporter;
mod embedded_stubs;
mod project_filesystem;

pub use console_reporter::ConsoleReporter;
pub use embedded_stubs::EmbeddedStubStore;
pub use project_filesystem::FilesystemProjectStore;
