use modelsmith_codegen::{ModelName, RenderError, builder::CodeBuilder};
use modelsmith_ir::BackendModel;

use super::{
    GENERATED_HEADER,
    column::{ColumnArgs, Imports, needs_implicit_id},
};

/// The classical_models.py file: a `Table` per model, mapped imperatively
/// onto a plain class.
pub struct ClassicalModelsPy<'a> {
    pub models: &'a [BackendModel],
    pub names: &'a [ModelName],
}

impl<'a> ClassicalModelsPy<'a> {
    pub fn new(models: &'a [BackendModel], names: &'a [ModelName]) -> Self {
        Self { models, names }
    }

    pub fn render(&self) -> Result<String, RenderError> {
        let imports = Imports::collect(self.models, &["Column", "Table"]);

        let mut builder = CodeBuilder::python();
        builder.push_line(GENERATED_HEADER);
        for line in imports.lines() {
            builder.push_line(&line);
        }
        builder
            .push_line("from sqlalchemy.orm import registry")
            .push_blank()
            .push_line("mapper_registry = registry()");

        for (model, name) in self.models.iter().zip(self.names) {
            let table = format!("{}_table", name.snake);

            builder.push_blank().push_blank();
            builder
                .push_line(&format!("{table} = Table("))
                .push_indent()
                .push_line(&format!("'{}',", name.snake))
                .push_line("mapper_registry.metadata,");
            if needs_implicit_id(model) {
                builder.push_line(&format!(
                    "Column({}),",
                    ColumnArgs::implicit_id().render(Some("id"))
                ));
            }
            for column in &model.columns {
                let args = ColumnArgs::from_column(&model.name, column)?;
                builder.push_line(&format!("Column({}),", args.render(Some(column.name.as_str()))));
            }
            builder.push_dedent().push_line(")");

            builder.push_blank().push_blank();
            builder
                .push_line(&format!("class {}:", model.name))
                .push_indent()
                .push_line("pass")
                .push_dedent()
                .push_blank()
                .push_blank()
                .push_line(&format!(
                    "mapper_registry.map_imperatively({}, {table})",
                    model.name
                ));
        }

        Ok(builder.build())
    }
}
