use crate::domain::StubKind;
use crate::ports::StubStore;

/// Fixed project description written into a fresh `README.md`.
static README_STUB: &str = include_str!("../assets/stubs/README.md");

/// Import line written into new Dart sources.
const FLUTTER_CORE_IMPORT: &str = "import 'package:flutter/material.dart';";

/// Embedded stub store implementation.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedStubStore;

impl EmbeddedStubStore {
    pub fn new() -> Self {
        Self
    }
}

impl StubStore for EmbeddedStubStore {
    fn initial_content(&self, filename: &str) -> String {
        match StubKind::for_filename(filename) {
            StubKind::DartSource => {
                format!("// {} implementation\n{}\n", filename, FLUTTER_CORE_IMPORT)
            }
            StubKind::Readme => README_STUB.to_string(),
            StubKind::Empty => String::new(),
        }
    }
}
