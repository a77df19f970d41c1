use modelsmith_codegen::{
    ArtifactKind, Backend, RenderContext, RenderError, Result, TemplateRegistry, assemble_all,
};
use modelsmith_ir::{BackendKind, BackendModel, SchemaModel};

use crate::{PeeweeTypeMapper, files::ModelsPy};

/// Peewee generator producing a single models.py.
pub struct PeeweeBackend {
    mapper: PeeweeTypeMapper,
    templates: TemplateRegistry,
}

impl Default for PeeweeBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PeeweeBackend {
    pub fn new() -> Self {
        Self {
            mapper: PeeweeTypeMapper,
            templates: TemplateRegistry::new().with(ArtifactKind::Models, models_py),
        }
    }
}

impl Backend for PeeweeBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Peewee
    }

    fn assemble(&self, models: &[&SchemaModel]) -> Result<Vec<BackendModel>> {
        assemble_all(&self.mapper, models)
    }

    fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }
}

fn models_py(ctx: &RenderContext<'_>) -> std::result::Result<String, RenderError> {
    Ok(ModelsPy::new(ctx.models, &ctx.column_types).render())
}
