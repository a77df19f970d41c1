use modelsmith_codegen::{builder::CodeBuilder, python};
use modelsmith_ir::{BackendModel, ColumnDescriptor};

use super::GENERATED_HEADER;

/// The models.py file with one `models.Model` subclass per model.
pub struct ModelsPy<'a> {
    pub models: &'a [BackendModel],
}

impl<'a> ModelsPy<'a> {
    pub fn new(models: &'a [BackendModel]) -> Self {
        Self { models }
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::python();
        builder
            .push_line(GENERATED_HEADER)
            .push_line("from django.db import models");

        for model in self.models {
            builder.push_blank().push_blank();
            builder
                .push_line(&format!("class {}(models.Model):", model.name))
                .push_indent();
            if model.columns.is_empty() {
                builder.push_line("pass");
            }
            for column in &model.columns {
                builder.push_line(&field_line(column));
            }
            builder.push_dedent();
        }

        builder.build()
    }
}

/// `name = models.CharField(max_length=64)`
fn field_line(column: &ColumnDescriptor) -> String {
    let positional: Vec<String> = column
        .relation()
        .map(python::string_literal)
        .into_iter()
        .collect();
    let keywords = python::kwargs(column.keyword_options());

    format!(
        "{} = models.{}({})",
        column.name,
        column.column_type,
        python::arguments(&positional, &keywords)
    )
}
