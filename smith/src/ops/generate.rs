//! Generate operation - backend code from a manifest.

use std::path::Path;

use modelsmith_codegen::{FsSink, GenerateOptions, MemorySink};
use modelsmith_manifest::Manifest;

use crate::{
    backends,
    reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult},
};

/// Options for the generate operation.
pub struct GenerateOpts<'a> {
    /// Base directory; each backend writes into its own subdirectory.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Class/function-based scaffolding switches.
    pub variants: GenerateOptions,
}

/// Execute the generate operation.
///
/// Dispatches every schema model to the compiled-in backends. Failures are
/// recorded per backend in the report rather than returned.
pub fn generate(manifest: &Manifest, opts: GenerateOpts) -> GenerateReport {
    let models = manifest.schema_models();
    let dispatcher = backends::dispatcher();

    if opts.dry_run {
        let mut sink = MemorySink::new();
        let generation = dispatcher.dispatch(&models, &opts.variants, &mut sink);
        let files = sink
            .iter()
            .map(|(backend, name, text)| PreviewFile {
                path: format!("{}/{}", backend.as_str(), name),
                content: text.to_string(),
            })
            .collect();

        return GenerateReport {
            generation,
            result: GenerationResult::Preview(PreviewResult { files }),
        };
    }

    let mut sink = FsSink::new(opts.output_dir);
    let generation = dispatcher.dispatch(&models, &opts.variants, &mut sink);

    GenerateReport {
        generation,
        result: GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
        }),
    }
}
