mod project_store;
mod reporter;
mod stub_store;

pub use project_store::ProjectStore;
pub use reporter::{BuildReporter, SilentReporter};
pub use stub_store::StubStore;
