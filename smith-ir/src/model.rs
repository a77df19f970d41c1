//! Backend IR produced by model assembly and consumed by templates.

use serde::Serialize;

use crate::OptionValue;

/// Option name carrying the relation target; templates emit it positionally.
const RELATION: &str = "relation";

/// One column of a backend model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDescriptor {
    /// Field name.
    pub name: String,
    /// Backend column-type tag (e.g. `CharField`, `String`).
    pub column_type: &'static str,
    /// Keyword options in emission order.
    pub options: Vec<(String, OptionValue)>,
}

impl ColumnDescriptor {
    /// Name of the option that carries a relation target.
    pub const RELATION: &'static str = RELATION;

    /// Look up an option by name.
    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// The relation target, if this column is a relation.
    pub fn relation(&self) -> Option<&str> {
        self.option(RELATION).and_then(OptionValue::as_str)
    }

    /// Returns true if the named option is present.
    pub fn has_option(&self, name: &str) -> bool {
        self.option(name).is_some()
    }

    /// Options other than the relation target, in order.
    pub fn keyword_options(&self) -> impl Iterator<Item = &(String, OptionValue)> {
        self.options.iter().filter(|(key, _)| key != RELATION)
    }
}

/// A schema model translated for one backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackendModel {
    /// Model (class) name.
    pub name: String,
    /// Columns in field declaration order.
    pub columns: Vec<ColumnDescriptor>,
}

impl BackendModel {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    /// Column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}
