//! Check command report data structures.

use std::path::PathBuf;

use modelsmith_ir::BackendKind;

use super::output::{Output, Report};
use crate::backends::feature_name;

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Assembly outcome per compiled-in backend with models.
    pub backends: Vec<BackendCheck>,
    /// Targeted backends missing from this build.
    pub unavailable: Vec<BackendKind>,
    /// Assembled models as JSON, when requested.
    pub ir: Option<String>,
}

/// Assembly outcome for one backend.
#[derive(Debug)]
pub struct BackendCheck {
    pub backend: BackendKind,
    pub result: Result<AssembledStats, String>,
}

/// Counts from a successful assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssembledStats {
    pub models: usize,
    pub columns: usize,
}

impl CheckReport {
    /// Whether every targeted backend assembled.
    pub fn is_valid(&self) -> bool {
        self.unavailable.is_empty() && self.backends.iter().all(|b| b.result.is_ok())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for check in &self.backends {
            if let Err(err) = &check.result {
                out.error(err);
            }
        }

        for kind in &self.unavailable {
            out.error(&format!(
                "{} backend is not available (rebuild with `--features {}`)",
                kind.display_name(),
                feature_name(*kind)
            ));
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));

        if !self.backends.is_empty() {
            out.newline();
            out.section("Backends");
        }
        for check in &self.backends {
            if let Ok(stats) = &check.result {
                out.key_value(
                    check.backend.display_name(),
                    &format!(
                        "{} model{}, {} column{}",
                        stats.models,
                        if stats.models == 1 { "" } else { "s" },
                        stats.columns,
                        if stats.columns == 1 { "" } else { "s" }
                    ),
                );
            }
        }

        if let Some(ir) = &self.ir {
            out.divider("IR");
            out.preformatted(ir);
        }
    }
}
