pub mod error;
pub mod scaffold;
pub mod stub;

pub use error::AppError;
pub use scaffold::{ScaffoldEntry, ScaffoldTable};
pub use stub::{DART_EXTENSION, README_FILE, StubKind};
