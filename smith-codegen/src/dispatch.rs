//! Backend dispatcher.
//!
//! Groups schema models by backend, runs each backend's pipeline in a fixed
//! order and records an independent outcome per backend.

use modelsmith_ir::{BackendKind, BackendModel, SchemaModel};

use crate::{
    Diagnostic, Error,
    backend::{Backend, BackendRegistry, GenerateOptions},
    render::{ArtifactKind, RenderContext},
    result::{ArtifactOutcome, ArtifactResult, BackendOutcome, BackendReport, GenerationReport},
    sink::OutputSink,
};

/// Routes schema models to the registered backends.
#[derive(Debug)]
pub struct Dispatcher {
    registry: BackendRegistry,
}

impl Dispatcher {
    pub fn new(registry: BackendRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &BackendRegistry {
        &self.registry
    }

    /// Generate every backend in [`BackendKind::ALL`] order.
    ///
    /// A failing backend never stops the others.
    pub fn dispatch(
        &self,
        models: &[SchemaModel],
        options: &GenerateOptions,
        sink: &mut dyn OutputSink,
    ) -> GenerationReport {
        let mut report = GenerationReport::default();

        for kind in BackendKind::ALL {
            let group: Vec<&SchemaModel> = models.iter().filter(|m| m.targets(kind)).collect();

            if group.is_empty() {
                log::info!("no {} models, skipping", kind);
                report.diagnostics.push(
                    Diagnostic::info(format!("No {} models found.", kind)).for_backend(kind),
                );
                report
                    .backends
                    .push(BackendReport::new(kind, 0, BackendOutcome::NoModels));
                continue;
            }

            let Some(backend) = self.registry.get(kind) else {
                log::warn!("{} is not available in this build", kind);
                report.diagnostics.push(
                    Diagnostic::error(format!("{} backend is not available.", kind.display_name()))
                        .for_backend(kind),
                );
                report.backends.push(BackendReport::new(
                    kind,
                    group.len(),
                    BackendOutcome::Unavailable,
                ));
                continue;
            };

            for empty in group.iter().filter(|m| m.fields.is_empty()) {
                report.diagnostics.push(
                    Diagnostic::warning("model declares no fields")
                        .for_backend(kind)
                        .at(&empty.name),
                );
            }

            log::info!("generating {} {} models", group.len(), kind);
            report
                .backends
                .push(run_backend(backend, &group, options, sink));
        }

        report
    }

    /// Assemble the models of every registered backend without rendering.
    ///
    /// Backends with no targeting models are left out.
    pub fn assemble(
        &self,
        models: &[SchemaModel],
    ) -> Vec<(BackendKind, Result<Vec<BackendModel>, Error>)> {
        BackendKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let backend = self.registry.get(kind)?;
                let group: Vec<&SchemaModel> =
                    models.iter().filter(|m| m.targets(kind)).collect();
                (!group.is_empty()).then(|| (kind, backend.assemble(&group)))
            })
            .collect()
    }
}

fn run_backend(
    backend: &dyn Backend,
    group: &[&SchemaModel],
    options: &GenerateOptions,
    sink: &mut dyn OutputSink,
) -> BackendReport {
    let kind = backend.kind();
    let mut report = BackendReport::new(kind, group.len(), BackendOutcome::Completed);

    let models = match backend.assemble(group) {
        Ok(models) => models,
        Err(err) => {
            log::debug!("{} assembly failed: {}", kind, err);
            report.outcome = BackendOutcome::Failed(err);
            return report;
        }
    };

    let mut failure = None;
    for artifact in backend.artifacts(options) {
        if failure.is_some() {
            report
                .artifacts
                .push(ArtifactResult::skipped(artifact.file_name()));
            continue;
        }

        let (result, err) = emit(backend, artifact, &models, sink);
        report.artifacts.push(result);
        failure = err;
    }

    if let Some(err) = failure {
        report.outcome = BackendOutcome::Failed(err);
    }
    report
}

/// Render one artifact and hand it to the sink.
fn emit(
    backend: &dyn Backend,
    artifact: ArtifactKind,
    models: &[BackendModel],
    sink: &mut dyn OutputSink,
) -> (ArtifactResult, Option<Error>) {
    let kind = backend.kind();
    let name = artifact.file_name();
    let ctx = RenderContext::new(kind, artifact, models);

    let text = match backend.templates().render(&ctx) {
        Ok(text) => text,
        Err(err) => {
            log::debug!("{} {} failed to render: {}", kind, name, err);
            return (
                ArtifactResult::new(name, None, ArtifactOutcome::Failed),
                Some(Error::from_render(kind, artifact, err)),
            );
        }
    };

    match sink.write(kind, name, &text) {
        Ok(written) => {
            log::debug!("{} {} {:?}", kind, name, written);
            (ArtifactResult::new(name, Some(text), written.into()), None)
        }
        Err(source) => (
            ArtifactResult::new(name, Some(text), ArtifactOutcome::Failed),
            Some(Error::Write {
                backend: kind,
                artifact: name.to_string(),
                source,
            }),
        ),
    }
}
