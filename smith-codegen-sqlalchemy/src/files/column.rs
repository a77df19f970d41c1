use std::collections::BTreeSet;

use modelsmith_codegen::{RenderError, python};
use modelsmith_core::to_snake_case;
use modelsmith_ir::{BackendModel, ColumnDescriptor, OptionValue};

/// Options folded into the column type or foreign key instead of `Column`
/// keywords.
const CONSUMED: &[&str] = &["max_length", "choices", "ondelete"];

/// The argument list of one `Column(...)` call, minus the column name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnArgs {
    /// `String(64)`, `Integer`, `UUID(as_uuid=True)`
    pub type_expr: String,
    /// `ForeignKey('rocket_engine.id', ondelete='CASCADE')`
    pub foreign_key: Option<String>,
    /// Remaining keyword options, rendered.
    pub keywords: String,
}

impl ColumnArgs {
    /// Arguments of the surrogate `id` primary key.
    pub fn implicit_id() -> Self {
        Self {
            type_expr: "Integer".to_string(),
            foreign_key: None,
            keywords: "primary_key=True".to_string(),
        }
    }

    /// Fails for enum columns without `choices`.
    pub fn from_column(model: &str, column: &ColumnDescriptor) -> Result<Self, RenderError> {
        let type_expr = match column.column_type {
            "String" => match column.option("max_length") {
                Some(length) => format!("String({})", python::literal(length)),
                None => "String".to_string(),
            },
            "Enum" => enum_expr(model, column)?,
            "UUID" => "UUID(as_uuid=True)".to_string(),
            "ForeignKey" => "Integer".to_string(),
            other => other.to_string(),
        };

        let foreign_key = column.relation().map(|target| {
            let mut args = vec![python::string_literal(&foreign_column(target))];
            if let Some(ondelete) = column.option("ondelete") {
                args.push(format!("ondelete={}", python::literal(ondelete)));
            }
            format!("ForeignKey({})", args.join(", "))
        });

        let keywords = python::kwargs(
            column
                .keyword_options()
                .filter(|(key, _)| !CONSUMED.contains(&key.as_str())),
        );

        Ok(Self {
            type_expr,
            foreign_key,
            keywords,
        })
    }

    /// Join into an argument list, optionally led by the quoted column name.
    pub fn render(&self, name: Option<&str>) -> String {
        let mut positional: Vec<String> = name.map(python::string_literal).into_iter().collect();
        positional.push(self.type_expr.clone());
        positional.extend(self.foreign_key.clone());
        python::arguments(&positional, &self.keywords)
    }
}

fn enum_expr(model: &str, column: &ColumnDescriptor) -> Result<String, RenderError> {
    let values = match column.option("choices") {
        Some(OptionValue::List(items)) if !items.is_empty() => {
            items.iter().map(python::literal).collect::<Vec<_>>()
        }
        Some(value @ OptionValue::Str(_)) => vec![python::literal(value)],
        _ => {
            return Err(RenderError::Failed(format!(
                "enum column '{}.{}' declares no choices",
                model, column.name
            )));
        }
    };
    Ok(format!("Enum({})", values.join(", ")))
}

/// `RocketEngine` becomes `rocket_engine.id`; dotted targets pass through.
fn foreign_column(target: &str) -> String {
    if target.contains('.') {
        target.to_string()
    } else {
        format!("{}.id", to_snake_case(target))
    }
}

/// Returns true if no column of the model is declared a primary key.
pub(crate) fn needs_implicit_id(model: &BackendModel) -> bool {
    !model
        .columns
        .iter()
        .any(|c| matches!(c.option("primary_key"), Some(OptionValue::Bool(true))))
}

/// Names a module imports from `sqlalchemy` and its PostgreSQL dialect.
#[derive(Debug, Default)]
pub struct Imports {
    pub sqlalchemy: BTreeSet<&'static str>,
    pub postgresql: BTreeSet<&'static str>,
}

impl Imports {
    /// Collect the imports the given models need, on top of `base`.
    pub fn collect(models: &[BackendModel], base: &[&'static str]) -> Self {
        let mut imports = Self::default();
        imports.sqlalchemy.extend(base);

        for model in models {
            if needs_implicit_id(model) {
                imports.sqlalchemy.insert("Integer");
            }
            for column in &model.columns {
                match column.column_type {
                    "UUID" => {
                        imports.postgresql.insert("UUID");
                    }
                    "ForeignKey" => {
                        imports.sqlalchemy.extend(["ForeignKey", "Integer"]);
                    }
                    other => {
                        imports.sqlalchemy.insert(other);
                    }
                }
            }
        }

        imports
    }

    /// `from` lines, sqlalchemy first.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("from sqlalchemy import {}", join(&self.sqlalchemy))];
        if !self.postgresql.is_empty() {
            lines.push(format!(
                "from sqlalchemy.dialects.postgresql import {}",
                join(&self.postgresql)
            ));
        }
        lines
    }
}

fn join(names: &BTreeSet<&'static str>) -> String {
    names.iter().copied().collect::<Vec<_>>().join(", ")
}
