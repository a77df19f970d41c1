//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{io, path::Path};

use eyre::Result;
use modelsmith_core::WriteResult;
use modelsmith_ir::{BackendKind, BackendModel, FieldType, OptionName, RelationKind, SchemaModel};

use crate::{
    Error,
    backend::{Backend, GenerateOptions},
    mapper::{Cascade, ColumnType, Conventions, Relation, TypeMapper},
    render::{ArtifactKind, RenderContext, RenderError, TemplateRegistry},
    sink::OutputSink,
};

/// Column types of [`MiniOrm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiniColumn {
    Text,
    Integer,
    Date,
    ForeignKey,
    ManyToMany,
}

impl ColumnType for MiniColumn {
    fn as_str(&self) -> &'static str {
        match self {
            MiniColumn::Text => "Text",
            MiniColumn::Integer => "Integer",
            MiniColumn::Date => "Date",
            MiniColumn::ForeignKey => "ForeignKey",
            MiniColumn::ManyToMany => "ManyToMany",
        }
    }
}

/// A small Django-flavoured ORM for exercising the normalizer.
///
/// Knows foreign keys (cascading) and many-to-many relations (no null
/// option); one-to-one markers are not allowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct MiniOrm;

impl MiniOrm {
    pub const DEFAULT_LENGTH: u32 = 100;
}

impl TypeMapper for MiniOrm {
    type Column = MiniColumn;

    fn backend(&self) -> BackendKind {
        BackendKind::Django
    }

    fn map_field_type(&self, field_type: FieldType) -> Option<MiniColumn> {
        match field_type {
            FieldType::Text | FieldType::Path => Some(MiniColumn::Text),
            FieldType::Integer => Some(MiniColumn::Integer),
            FieldType::Date | FieldType::DateTime => Some(MiniColumn::Date),
            _ => None,
        }
    }
}

impl Conventions for MiniOrm {
    fn allowed_options(&self) -> &'static [OptionName] {
        &[
            OptionName::ForeignKey,
            OptionName::ManyKey,
            OptionName::Null,
            OptionName::Default,
            OptionName::Unique,
            OptionName::HelpText,
            OptionName::OnDelete,
        ]
    }

    fn relation(&self, kind: RelationKind) -> Option<Relation<MiniColumn>> {
        match kind {
            RelationKind::ForeignKey => Some(Relation {
                column: MiniColumn::ForeignKey,
                cascade: Some(Cascade::new(OptionName::OnDelete, "CASCADE")),
                accepts_null: true,
            }),
            RelationKind::ManyToMany => Some(Relation {
                column: MiniColumn::ManyToMany,
                cascade: None,
                accepts_null: false,
            }),
            RelationKind::OneToOne => None,
        }
    }

    fn null_option(&self) -> &'static str {
        "null"
    }

    fn title_option(&self) -> &'static str {
        "title"
    }

    fn string_column(&self) -> MiniColumn {
        MiniColumn::Text
    }

    fn default_max_length(&self) -> u32 {
        Self::DEFAULT_LENGTH
    }
}

/// A backend whose templates list model names, with switchable failures.
pub struct StubBackend {
    kind: BackendKind,
    templates: TemplateRegistry,
    extra: Vec<ArtifactKind>,
    fail_assembly: bool,
}

impl StubBackend {
    /// A backend emitting only `models.py`.
    pub fn new(kind: BackendKind) -> Self {
        Self {
            kind,
            templates: TemplateRegistry::new().with(ArtifactKind::Models, list_models),
            extra: Vec::new(),
            fail_assembly: false,
        }
    }

    /// Replace the templates with one listing template per kind.
    pub fn with_artifacts(mut self, kinds: &[ArtifactKind]) -> Self {
        self.templates = TemplateRegistry::new();
        for kind in kinds {
            self.templates.register(*kind, list_models);
        }
        self
    }

    /// Announce artifacts that have no template.
    pub fn with_extra_artifacts(mut self, kinds: &[ArtifactKind]) -> Self {
        self.extra.extend_from_slice(kinds);
        self
    }

    /// Make assembly fail with an unmapped type.
    pub fn failing_assembly(mut self) -> Self {
        self.fail_assembly = true;
        self
    }

    /// Make one artifact's template fail.
    pub fn failing_render(mut self, kind: ArtifactKind) -> Self {
        self.templates
            .register(kind, |_: &RenderContext<'_>| -> Result<String, RenderError> {
                Err(RenderError::Failed("stub template failure".to_string()))
            });
        self
    }
}

fn list_models(ctx: &RenderContext<'_>) -> Result<String, RenderError> {
    let mut text = format!("# {} {}\n", ctx.backend, ctx.artifact);
    for name in &ctx.names {
        text.push_str(&name.name);
        text.push('\n');
    }
    Ok(text)
}

impl Backend for StubBackend {
    fn kind(&self) -> BackendKind {
        self.kind
    }

    fn assemble(&self, models: &[&SchemaModel]) -> crate::Result<Vec<BackendModel>> {
        if self.fail_assembly {
            let model = models.first().map(|m| m.name.clone()).unwrap_or_default();
            return Err(Error::UnmappedType {
                backend: self.kind,
                model,
                field: "stub".to_string(),
                field_type: FieldType::Enum,
            });
        }
        Ok(models
            .iter()
            .map(|m| BackendModel::new(&m.name, Vec::new()))
            .collect())
    }

    fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    fn artifacts(&self, options: &GenerateOptions) -> Vec<ArtifactKind> {
        self.templates
            .kinds()
            .chain(self.extra.iter().copied())
            .filter(|kind| options.includes(*kind))
            .collect()
    }
}

/// A sink whose every write fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingSink;

impl OutputSink for FailingSink {
    fn write(&mut self, _backend: BackendKind, _artifact: &str, _text: &str) -> io::Result<WriteResult> {
        Err(io::Error::other("disk full"))
    }
}

/// Assert that two strings are equal, with a nice diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        // Simple line-by-line diff
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Generate into a temporary directory and return it.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_content_eq_passes() {
        assert_content_eq("a\nb\n", "a\nb\n");
    }

    #[test]
    #[should_panic(expected = "Line 2")]
    fn test_assert_content_eq_reports_line() {
        assert_content_eq("a\nb\n", "a\nc\n");
    }

    #[test]
    fn test_generate_to_temp() {
        let dir = generate_to_temp(|path| {
            std::fs::write(path.join("models.py"), "x")?;
            Ok(())
        })
        .unwrap();

        assert!(dir.path().join("models.py").exists());
    }
}
