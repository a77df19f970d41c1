use modelsmith_codegen::{
    ArtifactKind, Backend, RenderContext, RenderError, Result, TemplateRegistry, assemble_all,
};
use modelsmith_ir::{BackendKind, BackendModel, SchemaModel};

use crate::{
    DjangoTypeMapper,
    files::{ModelsPy, SerializersPy, UrlsClassPy, UrlsFuncPy, ViewsClassPy, ViewsFuncPy},
};

/// Django generator producing models, serializers, views and URL patterns.
pub struct DjangoBackend {
    mapper: DjangoTypeMapper,
    templates: TemplateRegistry,
}

impl Default for DjangoBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DjangoBackend {
    pub fn new() -> Self {
        let templates = TemplateRegistry::new()
            .with(ArtifactKind::Models, models_py)
            .with(ArtifactKind::Serializers, serializers_py)
            .with(ArtifactKind::ViewsClass, views_class_py)
            .with(ArtifactKind::UrlsClass, urls_class_py)
            .with(ArtifactKind::ViewsFunc, views_func_py)
            .with(ArtifactKind::UrlsFunc, urls_func_py);

        Self {
            mapper: DjangoTypeMapper,
            templates,
        }
    }
}

impl Backend for DjangoBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Django
    }

    fn assemble(&self, models: &[&SchemaModel]) -> Result<Vec<BackendModel>> {
        assemble_all(&self.mapper, models)
    }

    fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }
}

fn models_py(ctx: &RenderContext<'_>) -> std::result::Result<String, RenderError> {
    Ok(ModelsPy::new(ctx.models).render())
}

fn serializers_py(ctx: &RenderContext<'_>) -> std::result::Result<String, RenderError> {
    Ok(SerializersPy::new(ctx.models).render())
}

fn views_class_py(ctx: &RenderContext<'_>) -> std::result::Result<String, RenderError> {
    Ok(ViewsClassPy::new(&ctx.names).render())
}

fn urls_class_py(ctx: &RenderContext<'_>) -> std::result::Result<String, RenderError> {
    Ok(UrlsClassPy::new(&ctx.names).render())
}

fn views_func_py(ctx: &RenderContext<'_>) -> std::result::Result<String, RenderError> {
    Ok(ViewsFuncPy::new(&ctx.names).render())
}

fn urls_func_py(ctx: &RenderContext<'_>) -> std::result::Result<String, RenderError> {
    Ok(UrlsFuncPy::new(&ctx.names).render())
}
