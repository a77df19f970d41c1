//! Check operation - manifest validation.

use std::path::Path;

use eyre::{Context, Result};
use modelsmith_ir::{BackendKind, BackendModel};
use modelsmith_manifest::Manifest;
use serde::Serialize;

use crate::{
    backends,
    reports::{AssembledStats, BackendCheck, CheckReport},
};

#[derive(Serialize)]
struct IrDump<'a> {
    backend: BackendKind,
    models: &'a [BackendModel],
}

/// Execute the check operation.
///
/// Assembles every targeted backend without rendering, optionally dumping
/// the assembled models as JSON.
pub fn check(manifest: &Manifest, config_path: &Path, dump_ir: bool) -> Result<CheckReport> {
    let dispatcher = backends::dispatcher();
    let assembled = dispatcher.assemble(&manifest.schema_models());

    let unavailable = BackendKind::ALL
        .into_iter()
        .filter(|kind| manifest.model_count(*kind) > 0 && !dispatcher.registry().contains(*kind))
        .collect();

    let ir = if dump_ir {
        let dumps: Vec<IrDump<'_>> = assembled
            .iter()
            .filter_map(|(backend, result)| {
                let models = result.as_ref().ok()?;
                Some(IrDump {
                    backend: *backend,
                    models,
                })
            })
            .collect();
        Some(serde_json::to_string_pretty(&dumps).wrap_err("Failed to serialize models")?)
    } else {
        None
    };

    let backends = assembled
        .into_iter()
        .map(|(backend, result)| BackendCheck {
            backend,
            result: result
                .map(|models| AssembledStats {
                    models: models.len(),
                    columns: models.iter().map(|m| m.columns.len()).sum(),
                })
                .map_err(|err| err.to_string()),
        })
        .collect();

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        backends,
        unavailable,
        ir,
    })
}
