use std::collections::BTreeSet;

use modelsmith_codegen::{builder::CodeBuilder, python};
use modelsmith_ir::{BackendModel, ColumnDescriptor};

use super::GENERATED_HEADER;

/// The models.py file, importing exactly the field classes it uses.
pub struct ModelsPy<'a> {
    pub models: &'a [BackendModel],
    pub column_types: &'a BTreeSet<&'static str>,
}

impl<'a> ModelsPy<'a> {
    pub fn new(models: &'a [BackendModel], column_types: &'a BTreeSet<&'static str>) -> Self {
        Self {
            models,
            column_types,
        }
    }

    /// `from peewee import CharField, IntegerField, Model`
    fn import_line(&self) -> String {
        let mut names: BTreeSet<&str> = self.column_types.iter().copied().collect();
        names.insert("Model");
        format!(
            "from peewee import {}",
            names.into_iter().collect::<Vec<_>>().join(", ")
        )
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::python();
        builder
            .push_line(GENERATED_HEADER)
            .push_line(&self.import_line());

        for model in self.models {
            builder.push_blank().push_blank();
            builder
                .push_line(&format!("class {}(Model):", model.name))
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

/// Foreign keys name the target model class directly.
fn field_line(column: &ColumnDescriptor) -> String {
    let positional: Vec<String> = column.relation().map(str::to_string).into_iter().collect();
    let keywords = python::kwargs(column.keyword_options());

    format!(
        "{} = {}({})",
        column.name,
        column.column_type,
        python::arguments(&positional, &keywords)
    )
}
