//! Render boundary between backend IR and text artifacts.
//!
//! Each backend owns a [`TemplateRegistry`] with one [`Template`] per
//! [`ArtifactKind`] it emits. The dispatcher looks templates up by kind and
//! hands them a [`RenderContext`].

use std::{collections::BTreeSet, fmt};

use indexmap::IndexMap;
use modelsmith_core::to_snake_case;
use modelsmith_ir::{BackendKind, BackendModel};
use thiserror::Error;

/// Which scaffolding style an artifact belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    ClassBased,
    FunctionBased,
}

/// A named unit of generated source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArtifactKind {
    Models,
    Serializers,
    ViewsClass,
    UrlsClass,
    ViewsFunc,
    UrlsFunc,
    DeclarativeModels,
    ClassicalModels,
}

impl ArtifactKind {
    /// File name the artifact is written under.
    pub fn file_name(&self) -> &'static str {
        match self {
            ArtifactKind::Models => "models.py",
            ArtifactKind::Serializers => "serializers.py",
            ArtifactKind::ViewsClass => "views_class.py",
            ArtifactKind::UrlsClass => "urls_class.py",
            ArtifactKind::ViewsFunc => "views_func.py",
            ArtifactKind::UrlsFunc => "urls_func.py",
            ArtifactKind::DeclarativeModels => "declarative_models.py",
            ArtifactKind::ClassicalModels => "classical_models.py",
        }
    }

    /// The scaffolding variant, for artifacts that have one.
    pub fn variant(&self) -> Option<Variant> {
        match self {
            ArtifactKind::ViewsClass | ArtifactKind::UrlsClass => Some(Variant::ClassBased),
            ArtifactKind::ViewsFunc | ArtifactKind::UrlsFunc => Some(Variant::FunctionBased),
            _ => None,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Failure reported by a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// No template is registered for the artifact. A packaging defect.
    #[error("no template registered for {0}")]
    TemplateNotFound(ArtifactKind),
    /// The template could not produce text.
    #[error("{0}")]
    Failed(String),
}

/// A model name together with its snake_case form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelName {
    pub name: String,
    pub snake: String,
}

/// Everything a template receives.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub backend: BackendKind,
    pub artifact: ArtifactKind,
    pub models: &'a [BackendModel],
    /// Model names paired with their snake_case forms, in model order.
    pub names: Vec<ModelName>,
    /// Every column type tag used by any model, sorted.
    pub column_types: BTreeSet<&'static str>,
}

impl<'a> RenderContext<'a> {
    pub fn new(backend: BackendKind, artifact: ArtifactKind, models: &'a [BackendModel]) -> Self {
        let names = models
            .iter()
            .map(|m| ModelName {
                name: m.name.clone(),
                snake: to_snake_case(&m.name),
            })
            .collect();
        let column_types = models
            .iter()
            .flat_map(|m| m.columns.iter().map(|c| c.column_type))
            .collect();

        Self {
            backend,
            artifact,
            models,
            names,
            column_types,
        }
    }

    /// Returns true if any model uses the given column type.
    pub fn uses(&self, column_type: &str) -> bool {
        self.column_types.contains(column_type)
    }
}

/// Produces the text of one artifact.
pub trait Template {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError>;
}

impl<F> Template for F
where
    F: Fn(&RenderContext<'_>) -> Result<String, RenderError>,
{
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        self(ctx)
    }
}

/// Templates of one backend, keyed by artifact kind.
#[derive(Default)]
pub struct TemplateRegistry {
    templates: IndexMap<ArtifactKind, Box<dyn Template>>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template, replacing any previous one for the same kind.
    pub fn register(&mut self, kind: ArtifactKind, template: impl Template + 'static) {
        self.templates.insert(kind, Box::new(template));
    }

    /// Builder-style [`TemplateRegistry::register`].
    pub fn with(mut self, kind: ArtifactKind, template: impl Template + 'static) -> Self {
        self.register(kind, template);
        self
    }

    pub fn contains(&self, kind: ArtifactKind) -> bool {
        self.templates.contains_key(&kind)
    }

    /// Registered kinds in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = ArtifactKind> + '_ {
        self.templates.keys().copied()
    }

    /// Render the template registered for the context's artifact.
    pub fn render(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        let template = self
            .templates
            .get(&ctx.artifact)
            .ok_or(RenderError::TemplateNotFound(ctx.artifact))?;
        template.render(ctx)
    }
}

impl fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.templates.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use modelsmith_ir::{ColumnDescriptor, OptionValue};

    use super::*;

    fn models() -> Vec<BackendModel> {
        vec![
            BackendModel::new(
                "RocketEngine",
                vec![ColumnDescriptor {
                    name: "name".into(),
                    column_type: "CharField",
                    options: vec![("max_length".into(), OptionValue::Int(64))],
                }],
            ),
            BackendModel::new(
                "LaunchVehicle",
                vec![ColumnDescriptor {
                    name: "stages".into(),
                    column_type: "IntegerField",
                    options: vec![],
                }],
            ),
        ]
    }

    #[test]
    fn test_context_aux_data() {
        let models = models();
        let ctx = RenderContext::new(BackendKind::Django, ArtifactKind::Models, &models);

        assert_eq!(ctx.names[1].name, "LaunchVehicle");
        assert_eq!(ctx.names[1].snake, "launch_vehicle");
        assert_eq!(
            ctx.column_types.iter().copied().collect::<Vec<_>>(),
            vec!["CharField", "IntegerField"]
        );
        assert!(ctx.uses("CharField"));
        assert!(!ctx.uses("UUIDField"));
    }

    #[test]
    fn test_registry_renders_by_kind() {
        let registry = TemplateRegistry::new().with(ArtifactKind::Models, |ctx: &RenderContext<'_>| {
            Ok(format!("{} models", ctx.models.len()))
        });
        let models = models();

        let ctx = RenderContext::new(BackendKind::Django, ArtifactKind::Models, &models);
        assert_eq!(registry.render(&ctx).unwrap(), "2 models");

        let ctx = RenderContext::new(BackendKind::Django, ArtifactKind::Serializers, &models);
        assert_eq!(
            registry.render(&ctx),
            Err(RenderError::TemplateNotFound(ArtifactKind::Serializers))
        );
    }

    #[test]
    fn test_artifact_variants() {
        assert_eq!(ArtifactKind::Models.variant(), None);
        assert_eq!(ArtifactKind::UrlsClass.variant(), Some(Variant::ClassBased));
        assert_eq!(ArtifactKind::ViewsFunc.variant(), Some(Variant::FunctionBased));
        assert_eq!(ArtifactKind::ClassicalModels.to_string(), "classical_models.py");
    }
}
