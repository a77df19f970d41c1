use modelsmith_codegen::{ModelName, RenderError, builder::CodeBuilder};
use modelsmith_ir::BackendModel;

use super::{
    GENERATED_HEADER,
    column::{ColumnArgs, Imports, needs_implicit_id},
};

/// The declarative_models.py file with one `Base` subclass per model.
pub struct DeclarativeModelsPy<'a> {
    pub models: &'a [BackendModel],
    pub names: &'a [ModelName],
}

impl<'a> DeclarativeModelsPy<'a> {
    pub fn new(models: &'a [BackendModel], names: &'a [ModelName]) -> Self {
        Self { models, names }
    }

    pub fn render(&self) -> Result<String, RenderError> {
        let imports = Imports::collect(self.models, &["Column"]);

        let mut builder = CodeBuilder::python();
        builder.push_line(GENERATED_HEADER);
        for line in imports.lines() {
            builder.push_line(&line);
        }
        builder
            .push_line("from sqlalchemy.orm import declarative_base")
            .push_blank()
            .push_line("Base = declarative_base()");

        for (model, name) in self.models.iter().zip(self.names) {
            builder.push_blank().push_blank();
            builder
                .push_line(&format!("class {}(Base):", model.name))
                .push_indent()
                .push_line(&format!("__tablename__ = '{}'", name.snake))
                .push_blank();

            if needs_implicit_id(model) {
                builder.push_line(&format!("id = Column({})", ColumnArgs::implicit_id().render(None)));
            }
            for column in &model.columns {
                let args = ColumnArgs::from_column(&model.name, column)?;
                builder.push_line(&format!("{} = Column({})", column.name, args.render(None)));
            }
            builder.push_dedent();
        }

        Ok(builder.build())
    }
}
