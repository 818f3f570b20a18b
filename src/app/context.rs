use crate::ports::{BuildReporter, ProjectStore, StubStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<P: ProjectStore, S: StubStore, R: BuildReporter> {
    project: P,
    stubs: S,
    reporter: R,
}

impl<P: ProjectStore, S: StubStore, R: BuildReporter> AppContext<P, S, R> {
    /// Create a new application context.
    pub fn new(project: P, stubs: S, reporter: R) -> Self {
        Self { project, stubs, reporter }
    }

    /// Get a reference to the project store.
    pub fn project(&self) -> &P {
        &self.project
    }

    /// Get a reference to the stub store.
    pub fn stubs(&self) -> &S {
        &self.stubs
    }

    /// Get a reference to the progress reporter.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}
