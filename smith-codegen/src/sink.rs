//! Output sinks for rendered artifacts.

use std::{
    io,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use modelsmith_core::{File, WriteResult};
use modelsmith_ir::BackendKind;

/// Receives rendered artifacts.
///
/// Writing the same artifact twice replaces the first write.
pub trait OutputSink {
    fn write(&mut self, backend: BackendKind, artifact: &str, text: &str) -> io::Result<WriteResult>;
}

/// Writes artifacts to `<base>/<backend>/<artifact>`.
#[derive(Debug, Clone)]
pub struct FsSink {
    base: PathBuf,
}

impl FsSink {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Path an artifact is written to.
    pub fn artifact_path(&self, backend: BackendKind, artifact: &str) -> PathBuf {
        self.base.join(backend.as_str()).join(artifact)
    }
}

impl OutputSink for FsSink {
    fn write(&mut self, backend: BackendKind, artifact: &str, text: &str) -> io::Result<WriteResult> {
        File::new(self.artifact_path(backend, artifact), text).write()
    }
}

/// Keeps artifacts in memory, for previews and tests.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    files: IndexMap<(BackendKind, String), String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of a written artifact.
    pub fn get(&self, backend: BackendKind, artifact: &str) -> Option<&str> {
        self.files
            .get(&(backend, artifact.to_string()))
            .map(String::as_str)
    }

    /// Artifacts in write order.
    pub fn iter(&self) -> impl Iterator<Item = (BackendKind, &str, &str)> {
        self.files
            .iter()
            .map(|((backend, name), text)| (*backend, name.as_str(), text.as_str()))
    }

    /// Artifact names written for one backend, in write order.
    pub fn artifacts(&self, backend: BackendKind) -> Vec<&str> {
        self.iter()
            .filter(|(b, _, _)| *b == backend)
            .map(|(_, name, _)| name)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, backend: BackendKind, artifact: &str, text: &str) -> io::Result<WriteResult> {
        let key = (backend, artifact.to_string());
        if self.files.get(&key).is_some_and(|existing| existing == text) {
            return Ok(WriteResult::Unchanged);
        }
        self.files.insert(key, text.to_string());
        Ok(WriteResult::Written)
    }
}
