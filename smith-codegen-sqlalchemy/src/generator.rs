use modelsmith_codegen::{
    ArtifactKind, Backend, RenderContext, RenderError, Result, TemplateRegistry, assemble_all,
};
use modelsmith_ir::{BackendKind, BackendModel, SchemaModel};

use crate::{
    SqlAlchemyTypeMapper,
    files::{ClassicalModelsPy, DeclarativeModelsPy},
};

/// SQLAlchemy generator producing declarative and classical mappings.
pub struct SqlAlchemyBackend {
    mapper: SqlAlchemyTypeMapper,
    templates: TemplateRegistry,
}

impl Default for SqlAlchemyBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlAlchemyBackend {
    pub fn new() -> Self {
        let templates = TemplateRegistry::new()
            .with(ArtifactKind::DeclarativeModels, declarative_models_py)
            .with(ArtifactKind::ClassicalModels, classical_models_py);

        Self {
            mapper: SqlAlchemyTypeMapper,
            templates,
        }
    }
}

impl Backend for SqlAlchemyBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::SqlAlchemy
    }

    fn assemble(&self, models: &[&SchemaModel]) -> Result<Vec<BackendModel>> {
        assemble_all(&self.mapper, models)
    }

    fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }
}

fn declarative_models_py(ctx: &RenderContext<'_>) -> std::result::Result<String, RenderError> {
    DeclarativeModelsPy::new(ctx.models, &ctx.names).render()
}

fn classical_models_py(ctx: &RenderContext<'_>) -> std::result::Result<String, RenderError> {
    ClassicalModelsPy::new(ctx.models, &ctx.names).render()
}
