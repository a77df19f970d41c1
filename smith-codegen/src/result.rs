//! Outcomes of a generation run.

use modelsmith_core::WriteResult;
use modelsmith_ir::BackendKind;

use crate::{Diagnostic, Error};

/// What happened to one artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactOutcome {
    /// Rendered and written.
    Written,
    /// Rendered; the sink already held identical text.
    Unchanged,
    /// Rendering or writing failed.
    Failed,
    /// Not attempted because an earlier artifact of the backend failed.
    Skipped,
}

impl From<WriteResult> for ArtifactOutcome {
    fn from(result: WriteResult) -> Self {
        match result {
            WriteResult::Written => ArtifactOutcome::Written,
            WriteResult::Unchanged => ArtifactOutcome::Unchanged,
        }
    }
}

/// Result for one artifact of one backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactResult {
    pub name: String,
    /// Rendered text; `None` if rendering failed or was skipped.
    pub text: Option<String>,
    pub outcome: ArtifactOutcome,
}

impl ArtifactResult {
    pub fn new(name: impl Into<String>, text: Option<String>, outcome: ArtifactOutcome) -> Self {
        Self {
            name: name.into(),
            text,
            outcome,
        }
    }

    pub fn skipped(name: impl Into<String>) -> Self {
        Self::new(name, None, ArtifactOutcome::Skipped)
    }

    /// Returns true if the artifact's text reached the sink.
    pub fn is_emitted(&self) -> bool {
        matches!(
            self.outcome,
            ArtifactOutcome::Written | ArtifactOutcome::Unchanged
        )
    }
}

/// What happened to one backend.
#[derive(Debug)]
pub enum BackendOutcome {
    /// Every artifact was emitted.
    Completed,
    /// No model targets this backend; nothing was attempted.
    NoModels,
    /// The backend is not compiled into this build.
    Unavailable,
    /// Assembly, rendering or writing failed.
    Failed(Error),
}

impl BackendOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BackendOutcome::Completed | BackendOutcome::NoModels)
    }
}

/// Result for one backend.
#[derive(Debug)]
pub struct BackendReport {
    pub backend: BackendKind,
    /// Number of schema models targeting the backend.
    pub model_count: usize,
    pub outcome: BackendOutcome,
    /// Artifacts in emission order.
    pub artifacts: Vec<ArtifactResult>,
}

impl BackendReport {
    pub fn new(backend: BackendKind, model_count: usize, outcome: BackendOutcome) -> Self {
        Self {
            backend,
            model_count,
            outcome,
            artifacts: Vec::new(),
        }
    }

    /// Look up an artifact result by name.
    pub fn artifact(&self, name: &str) -> Option<&ArtifactResult> {
        self.artifacts.iter().find(|a| a.name == name)
    }
}

/// Aggregated results of one dispatch.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// One entry per backend, in dispatch order.
    pub backends: Vec<BackendReport>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationReport {
    pub fn backend(&self, kind: BackendKind) -> Option<&BackendReport> {
        self.backends.iter().find(|b| b.backend == kind)
    }

    /// Returns true if no backend failed or was unavailable.
    pub fn is_success(&self) -> bool {
        self.backends.iter().all(|b| b.outcome.is_success())
    }

    /// Backends that failed or were unavailable.
    pub fn failures(&self) -> impl Iterator<Item = &BackendReport> {
        self.backends.iter().filter(|b| !b.outcome.is_success())
    }

    /// Number of artifacts that reached the sink.
    pub fn emitted_count(&self) -> usize {
        self.backends
            .iter()
            .flat_map(|b| &b.artifacts)
            .filter(|a| a.is_emitted())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_success() {
        let mut report = GenerationReport::default();
        report
            .backends
            .push(BackendReport::new(BackendKind::Django, 2, BackendOutcome::Completed));
        report
            .backends
            .push(BackendReport::new(BackendKind::Peewee, 0, BackendOutcome::NoModels));

        assert!(report.is_success());
        assert_eq!(report.failures().count(), 0);

        report
            .backends
            .push(BackendReport::new(BackendKind::SqlAlchemy, 1, BackendOutcome::Unavailable));

        assert!(!report.is_success());
        assert_eq!(
            report.failures().map(|b| b.backend).collect::<Vec<_>>(),
            vec![BackendKind::SqlAlchemy]
        );
    }

    #[test]
    fn test_emitted_count() {
        let mut backend = BackendReport::new(BackendKind::Django, 1, BackendOutcome::Completed);
        backend.artifacts = vec![
            ArtifactResult::new("models.py", Some("x".into()), ArtifactOutcome::Written),
            ArtifactResult::new("serializers.py", Some("y".into()), ArtifactOutcome::Unchanged),
            ArtifactResult::skipped("views_class.py"),
        ];
        let report = GenerationReport {
            backends: vec![backend],
            diagnostics: vec![],
        };

        assert_eq!(report.emitted_count(), 2);
        assert!(
            report
                .backend(BackendKind::Django)
                .and_then(|b| b.artifact("views_class.py"))
                .is_some_and(|a| a.text.is_none())
        );
    }
}
