//! Backend plug-in point and registry.

use modelsmith_ir::{BackendKind, BackendModel, SchemaModel};

use crate::{
    Result,
    render::{ArtifactKind, TemplateRegistry, Variant},
};

/// Switches for optional scaffolding variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    pub class_based: bool,
    pub function_based: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            class_based: true,
            function_based: true,
        }
    }
}

impl GenerateOptions {
    /// Returns true if the artifact should be produced under these options.
    pub fn includes(&self, artifact: ArtifactKind) -> bool {
        match artifact.variant() {
            Some(Variant::ClassBased) => self.class_based,
            Some(Variant::FunctionBased) => self.function_based,
            None => true,
        }
    }
}

/// A target ORM the dispatcher can generate for.
pub trait Backend {
    fn kind(&self) -> BackendKind;

    /// Translate the backend's model group into IR.
    fn assemble(&self, models: &[&SchemaModel]) -> Result<Vec<BackendModel>>;

    /// Templates for every artifact this backend emits.
    fn templates(&self) -> &TemplateRegistry;

    /// Artifact kinds to emit, in emission order.
    ///
    /// Defaults to the registered templates filtered by `options`.
    fn artifacts(&self, options: &GenerateOptions) -> Vec<ArtifactKind> {
        self.templates()
            .kinds()
            .filter(|kind| options.includes(*kind))
            .collect()
    }
}

/// The backends compiled into this build.
#[derive(Default)]
pub struct BackendRegistry {
    backends: Vec<Box<dyn Backend>>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a backend, replacing any previous one of the same kind.
    pub fn register(&mut self, backend: impl Backend + 'static) {
        let kind = backend.kind();
        self.backends.retain(|b| b.kind() != kind);
        self.backends.push(Box::new(backend));
    }

    /// Builder-style [`BackendRegistry::register`].
    pub fn with(mut self, backend: impl Backend + 'static) -> Self {
        self.register(backend);
        self
    }

    pub fn get(&self, kind: BackendKind) -> Option<&dyn Backend> {
        self.backends
            .iter()
            .find(|b| b.kind() == kind)
            .map(|b| b.as_ref())
    }

    pub fn contains(&self, kind: BackendKind) -> bool {
        self.get(kind).is_some()
    }

    /// Registered kinds in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = BackendKind> + '_ {
        self.backends.iter().map(|b| b.kind())
    }
}

impl std::fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.kinds()).finish()
    }
}
