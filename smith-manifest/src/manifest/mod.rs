//! Manifest types and parsing for modelsmith.toml files.

mod file;
mod parse;
mod validate;

use std::path::PathBuf;

pub use file::ManifestFile;
use modelsmith_ir::{BackendKind, SchemaModel};
use serde::Deserialize;
pub use validate::ParseContext;

use crate::ModelDecl;

/// Root manifest for modelsmith.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Declared models, in declaration order
    #[serde(default)]
    pub models: Vec<ModelDecl>,
}

/// The `[output]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct OutputConfig {
    /// Base directory; each backend writes into a subdirectory named after it.
    pub dir: PathBuf,
    /// Emit class-based views and routes where a backend has them.
    pub class_based: bool,
    /// Emit function-based views and routes where a backend has them.
    pub function_based: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("generated"),
            class_based: true,
            function_based: true,
        }
    }
}

impl Manifest {
    /// Look up a model declaration by name.
    pub fn model(&self, name: &str) -> Option<&ModelDecl> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Number of models that declare the given backend.
    pub fn model_count(&self, backend: BackendKind) -> usize {
        self.models.iter().filter(|m| m.targets(backend)).count()
    }

    /// Lower the manifest into the schema model registry.
    pub fn schema_models(&self) -> Vec<SchemaModel> {
        self.models.iter().map(ModelDecl::to_schema).collect()
    }
}
