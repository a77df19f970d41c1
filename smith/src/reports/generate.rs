//! Generate command report data structures.

use std::path::PathBuf;

use modelsmith_codegen::{ArtifactOutcome, BackendOutcome, BackendReport, GenerationReport, Severity};

use super::output::{Output, Report};
use crate::backends::feature_name;

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Per-backend outcomes from the dispatcher.
    pub generation: GenerationReport,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the output directory.
    pub path: String,
    /// File content.
    pub content: String,
}

impl GenerateReport {
    /// Whether every backend completed or had nothing to do.
    pub fn is_success(&self) -> bool {
        self.generation.is_success()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for backend in &self.generation.backends {
            self.render_backend(out, backend);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => render_preview(out, preview),
        }

        let failed = self.generation.failures().count();
        if failed > 0 {
            out.error(&format!(
                "{} backend{} did not generate",
                failed,
                if failed == 1 { "" } else { "s" }
            ));
        }
    }
}

impl GenerateReport {
    fn render_backend(&self, out: &mut dyn Output, backend: &BackendReport) {
        let kind = backend.backend;

        for diag in self
            .generation
            .diagnostics
            .iter()
            .filter(|d| d.backend == Some(kind))
        {
            let message = match &diag.location {
                Some(loc) => format!("{}: {}", loc, diag.message),
                None => diag.message.clone(),
            };
            match diag.severity {
                Severity::Error => out.error(&message),
                Severity::Warning => out.warning(&message),
                Severity::Info => out.info(&message),
            }
        }

        match &backend.outcome {
            BackendOutcome::NoModels => return,
            BackendOutcome::Unavailable => {
                out.list_item(&format!(
                    "rebuild with `--features {}` to generate {} models",
                    feature_name(kind),
                    kind.display_name()
                ));
                return;
            }
            BackendOutcome::Completed | BackendOutcome::Failed(_) => {}
        }

        out.info(&format!(
            "Found {} {} model{}.",
            backend.model_count,
            kind.display_name(),
            if backend.model_count == 1 { "" } else { "s" }
        ));

        for artifact in &backend.artifacts {
            match artifact.outcome {
                ArtifactOutcome::Written => {
                    out.info(&format!("{} {} finished rendering.", kind, artifact.name))
                }
                ArtifactOutcome::Unchanged => {
                    out.info(&format!("{} {} is up to date.", kind, artifact.name))
                }
                ArtifactOutcome::Skipped => out.list_item(&format!("skipped {}", artifact.name)),
                ArtifactOutcome::Failed => {}
            }
        }

        if let BackendOutcome::Failed(err) = &backend.outcome {
            out.error(&format!("{} generation failed: {}", kind.display_name(), err));
        }
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        let count = self.generation.emitted_count();
        if count == 0 {
            return;
        }
        out.newline();
        out.key_value(
            "Generated",
            &format!(
                "{} artifact{} in {}",
                count,
                if count == 1 { "" } else { "s" },
                written.output_dir.display()
            ),
        );
    }
}

fn render_preview(out: &mut dyn Output, preview: &PreviewResult) {
    for file in &preview.files {
        out.divider(&file.path);
        out.preformatted(&file.content);
    }

    out.divider("Summary");
    out.preformatted(&format!("{} files would be generated", preview.files.len()));
}

#[cfg(test)]
mod tests {
    use modelsmith_codegen::{ArtifactResult, Diagnostic, Error};
    use modelsmith_ir::{BackendKind, FieldType};

    use super::*;
    use crate::reports::output::BufferOutput;

    fn render(report: &GenerateReport) -> String {
        let mut out = BufferOutput::default();
        report.render(&mut out);
        out.text()
    }

    fn written(generation: GenerationReport) -> GenerateReport {
        GenerateReport {
            generation,
            result: GenerationResult::Written(WrittenResult {
                output_dir: PathBuf::from("generated"),
            }),
        }
    }

    #[test]
    fn test_completed_and_empty_backends() {
        let mut django = BackendReport::new(BackendKind::Django, 2, BackendOutcome::Completed);
        django.artifacts = vec![
            ArtifactResult::new("models.py", Some(String::new()), ArtifactOutcome::Written),
            ArtifactResult::new("serializers.py", Some(String::new()), ArtifactOutcome::Unchanged),
        ];
        let generation = GenerationReport {
            backends: vec![
                django,
                BackendReport::new(BackendKind::Peewee, 0, BackendOutcome::NoModels),
            ],
            diagnostics: vec![
                Diagnostic::warning("model declares no fields")
                    .for_backend(BackendKind::Django)
                    .at("Payload"),
                Diagnostic::info("No peewee models found.").for_backend(BackendKind::Peewee),
            ],
        };

        let report = written(generation);

        assert!(report.is_success());
        assert_eq!(
            render(&report),
            "[stderr] warning: Payload: model declares no fields\n\
             Found 2 Django models.\n\
             django models.py finished rendering.\n\
             django serializers.py is up to date.\n\
             No peewee models found.\n\
             \n\
             Generated: 2 artifacts in generated"
        );
    }

    #[test]
    fn test_failed_backend() {
        let generation = GenerationReport {
            backends: vec![BackendReport::new(
                BackendKind::Peewee,
                1,
                BackendOutcome::Failed(Error::UnmappedType {
                    backend: BackendKind::Peewee,
                    model: "Burn".into(),
                    field: "duration".into(),
                    field_type: FieldType::Duration,
                }),
            )],
            diagnostics: vec![],
        };

        let report = written(generation);
        let text = render(&report);

        assert!(!report.is_success());
        assert!(text.contains(
            "[stderr] error: Peewee generation failed: peewee has no column type for field 'Burn.duration' of type duration"
        ));
        assert!(text.ends_with("[stderr] error: 1 backend did not generate"));
    }

    #[test]
    fn test_unavailable_backend_hint() {
        let generation = GenerationReport {
            backends: vec![BackendReport::new(
                BackendKind::SqlAlchemy,
                3,
                BackendOutcome::Unavailable,
            )],
            diagnostics: vec![
                Diagnostic::error("SQLAlchemy backend is not available.")
                    .for_backend(BackendKind::SqlAlchemy),
            ],
        };

        let text = render(&written(generation));

        assert!(text.starts_with(
            "[stderr] error: SQLAlchemy backend is not available.\n  - rebuild with `--features sqlalchemy`"
        ));
        assert!(!text.contains("Generated"));
    }

    #[test]
    fn test_preview_lists_files() {
        let report = GenerateReport {
            generation: GenerationReport::default(),
            result: GenerationResult::Preview(PreviewResult {
                files: vec![PreviewFile {
                    path: "peewee/models.py".into(),
                    content: "from peewee import Model".into(),
                }],
            }),
        };

        assert_eq!(
            render(&report),
            "── peewee/models.py ──\nfrom peewee import Model\n── Summary ──\n1 files would be generated"
        );
    }
}
