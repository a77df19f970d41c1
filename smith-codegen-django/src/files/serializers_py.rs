use modelsmith_codegen::{builder::CodeBuilder, python};
use modelsmith_ir::{BackendModel, OptionValue};

use super::{GENERATED_HEADER, serializer_name};

/// The serializers.py file with a `ModelSerializer` per model.
pub struct SerializersPy<'a> {
    pub models: &'a [BackendModel],
}

impl<'a> SerializersPy<'a> {
    pub fn new(models: &'a [BackendModel]) -> Self {
        Self { models }
    }

    pub fn render(&self) -> String {
        let names: Vec<&str> = self.models.iter().map(|m| m.name.as_str()).collect();

        let mut builder = CodeBuilder::python();
        builder
            .push_line(GENERATED_HEADER)
            .push_line("from rest_framework import serializers")
            .push_blank()
            .push_line(&format!("from .models import {}", names.join(", ")));

        for model in self.models {
            builder.push_blank().push_blank();
            builder
                .push_line(&format!(
                    "class {}(serializers.ModelSerializer):",
                    serializer_name(&model.name)
                ))
                .push_indent()
                .push_line("class Meta:")
                .push_indent()
                .push_line(&format!("model = {}", model.name))
                .push_line(&format!("fields = {}", fields_list(model)))
                .push_dedent()
                .push_dedent();
        }

        builder.build()
    }
}

/// Serialized field names; Django adds an `id` key unless a column is the
/// primary key.
fn fields_list(model: &BackendModel) -> String {
    let has_primary_key = model
        .columns
        .iter()
        .any(|c| matches!(c.option("primary_key"), Some(OptionValue::Bool(true))));

    let implicit_id = (!has_primary_key).then_some("id");
    let fields: Vec<String> = implicit_id
        .into_iter()
        .chain(model.column_names())
        .map(python::string_literal)
        .collect();

    format!("[{}]", fields.join(", "))
}

#[cfg(test)]
mod tests {
    use modelsmith_ir::ColumnDescriptor;

    use super::*;

    fn model(primary_key: bool) -> BackendModel {
        let options = if primary_key {
            vec![("primary_key".to_string(), OptionValue::Bool(true))]
        } else {
            vec![]
        };
        BackendModel::new(
            "Mission",
            vec![
                ColumnDescriptor {
                    name: "code".into(),
                    column_type: "CharField",
                    options,
                },
                ColumnDescriptor {
                    name: "crew".into(),
                    column_type: "IntegerField",
                    options: vec![],
                },
            ],
        )
    }

    #[test]
    fn test_implicit_id_listed_first() {
        assert_eq!(fields_list(&model(false)), "['id', 'code', 'crew']");
    }

    #[test]
    fn test_explicit_primary_key_replaces_id() {
        assert_eq!(fields_list(&model(true)), "['code', 'crew']");
    }

    #[test]
    fn test_meta_block() {
        let models = vec![model(false)];
        let text = SerializersPy::new(&models).render();

        assert!(text.contains(
            "class MissionSerializer(serializers.ModelSerializer):\n    class Meta:\n        model = Mission\n"
        ));
    }
}
