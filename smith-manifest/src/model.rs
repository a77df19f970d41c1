//! Model and field declarations as written in the manifest.

use indexmap::IndexMap;
use modelsmith_ir::{
    BackendKind, FieldOptions, FieldType, OptionName, OptionValue, RelationKind, SchemaField,
    SchemaModel,
};
use serde::Deserialize;

use crate::{Result, manifest::ParseContext};

/// A `[[models]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelDecl {
    /// Class name of the model.
    pub name: String,

    /// Backends this model is generated for.
    #[serde(default)]
    pub backends: Vec<BackendKind>,

    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

/// A `[[models.fields]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDecl {
    pub name: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Required fields never get a null option.
    #[serde(default = "default_true")]
    pub required: bool,

    #[serde(default)]
    pub default: Option<toml::Value>,

    #[serde(default)]
    pub max_length: Option<u32>,

    /// Display title, emitted as the backend's title option.
    #[serde(default)]
    pub title: Option<String>,

    /// Free-form options such as `foreign_key` or `help_text`.
    #[serde(default)]
    pub options: IndexMap<String, toml::Value>,
}

fn default_true() -> bool {
    true
}

impl ModelDecl {
    /// Returns true if this model declares the given backend.
    pub fn targets(&self, backend: BackendKind) -> bool {
        self.backends.contains(&backend)
    }

    pub(crate) fn validate(&self, ctx: &ParseContext<'_>) -> Result<()> {
        ctx.validate_name(&self.name, "model")?;

        let field_ctx = ctx.push(&self.name);
        for (index, field) in self.fields.iter().enumerate() {
            field_ctx.validate_name(&field.name, "field")?;

            if self.fields[..index].iter().any(|f| f.name == field.name) {
                let spans = field_ctx.find_spans(&field.name);
                return Err(field_ctx.source_context().duplicate_error(
                    &field.name,
                    field_ctx.context_for("field"),
                    spans.first().copied(),
                    spans.get(1).copied(),
                ));
            }

            field.validate(&field_ctx)?;
        }

        Ok(())
    }

    /// Lower this declaration into a schema model.
    pub fn to_schema(&self) -> SchemaModel {
        let mut model = SchemaModel::new(&self.name);
        for backend in &self.backends {
            model = model.with_backend(*backend);
        }
        for field in &self.fields {
            model = model.with_field(field.to_schema());
        }
        model
    }
}

impl FieldDecl {
    fn validate(&self, ctx: &ParseContext<'_>) -> Result<()> {
        if self.max_length == Some(0) {
            return Err(ctx.source_context().validation_error(
                format!("max_length of field '{}' must be greater than zero", self.name),
                ctx.find_key_span("max_length"),
            ));
        }

        if let Some(default) = &self.default
            && option_value(default).is_none()
        {
            return Err(ctx.source_context().invalid_option_error(
                "default",
                &self.name,
                ctx.find_key_span("default"),
            ));
        }

        for (option, value) in &self.options {
            if option_value(value).is_none() {
                return Err(ctx.source_context().invalid_option_error(
                    option,
                    &self.name,
                    ctx.find_key_span(option),
                ));
            }

            let is_marker = option
                .parse::<OptionName>()
                .is_ok_and(|name| RelationKind::from_marker(name).is_some());
            if is_marker && !value.as_str().is_some_and(|target| !target.is_empty()) {
                return Err(ctx.source_context().relation_target_error(
                    option,
                    &self.name,
                    ctx.find_key_span(option),
                ));
            }
        }

        Ok(())
    }

    /// Lower this declaration into a schema field.
    pub fn to_schema(&self) -> SchemaField {
        let mut options = FieldOptions::new();
        for (name, value) in &self.options {
            if let Some(value) = option_value(value) {
                options.insert(name, value);
            }
        }

        SchemaField {
            name: self.name.clone(),
            field_type: self.field_type,
            default: self.default.as_ref().and_then(option_value),
            required: self.required,
            max_length: self.max_length,
            title: self.title.clone(),
            options,
        }
    }
}

/// Convert a TOML value into an option value. Tables have no option form.
pub(crate) fn option_value(value: &toml::Value) -> Option<OptionValue> {
    match value {
        toml::Value::String(s) => Some(OptionValue::Str(s.clone())),
        toml::Value::Integer(i) => Some(OptionValue::Int(*i)),
        toml::Value::Float(f) => Some(OptionValue::Float(*f)),
        toml::Value::Boolean(b) => Some(OptionValue::Bool(*b)),
        toml::Value::Datetime(dt) => Some(OptionValue::Str(dt.to_string())),
        toml::Value::Array(items) => items
            .iter()
            .map(option_value)
            .collect::<Option<Vec<_>>>()
            .map(OptionValue::List),
        toml::Value::Table(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_value_conversion() {
        assert_eq!(
            option_value(&toml::Value::String("x".into())),
            Some(OptionValue::from("x"))
        );
        assert_eq!(option_value(&toml::Value::Integer(3)), Some(OptionValue::Int(3)));
        assert_eq!(
            option_value(&toml::Value::Array(vec![
                toml::Value::Boolean(true),
                toml::Value::Float(1.5),
            ])),
            Some(OptionValue::List(vec![
                OptionValue::Bool(true),
                OptionValue::Float(1.5)
            ]))
        );
        assert_eq!(option_value(&toml::Value::Table(Default::default())), None);
    }

    #[test]
    fn test_field_to_schema() {
        let decl: FieldDecl = toml::from_str(
            r#"
name = "engine"
type = "text"
required = false
title = "Engine"
options = { foreign_key = "RocketEngine", related_name = "vehicles" }
"#,
        )
        .unwrap();

        let field = decl.to_schema();
        assert_eq!(field.name, "engine");
        assert_eq!(field.field_type, FieldType::Text);
        assert!(!field.required);
        assert_eq!(field.title.as_deref(), Some("Engine"));
        assert_eq!(
            field.options.get(OptionName::ForeignKey),
            Some(&OptionValue::from("RocketEngine"))
        );
        let names: Vec<_> = field.options.recognized().map(|(n, _)| n).collect();
        assert_eq!(names, vec![OptionName::ForeignKey, OptionName::RelatedName]);
    }

    #[test]
    fn test_field_defaults_to_required() {
        let decl: FieldDecl = toml::from_str("name = \"x\"\ntype = \"int\"").unwrap();

        assert!(decl.required);
        assert!(decl.options.is_empty());
        assert_eq!(decl.field_type, FieldType::Integer);
    }

    #[test]
    fn test_model_to_schema() {
        let decl: ModelDecl = toml::from_str(
            r#"
name = "RocketEngine"
backends = ["django", "sqla"]

[[fields]]
name = "name"
type = "str"
max_length = 100
"#,
        )
        .unwrap();

        let model = decl.to_schema();
        assert!(model.targets(BackendKind::Django));
        assert!(model.targets(BackendKind::SqlAlchemy));
        assert!(!model.targets(BackendKind::Peewee));
        assert_eq!(model.fields[0].max_length, Some(100));
    }
}
