//! Framework-neutral schema declarations.

use std::collections::BTreeSet;

use crate::{BackendKind, FieldOptions, FieldType, OptionValue};

/// A named entity with ordered fields and the backends it targets.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaModel {
    /// Class/table name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<SchemaField>,
    /// Capability markers: the backends this model is generated for.
    pub backends: BTreeSet<BackendKind>,
}

impl SchemaModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            backends: BTreeSet::new(),
        }
    }

    /// Add a target backend.
    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backends.insert(backend);
        self
    }

    /// Append a field.
    pub fn with_field(mut self, field: SchemaField) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns true if this model declares the given backend capability.
    pub fn targets(&self, backend: BackendKind) -> bool {
        self.backends.contains(&backend)
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A typed, annotated attribute of a schema model.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField {
    /// Field name, unique within its model.
    pub name: String,
    /// Semantic value type.
    pub field_type: FieldType,
    /// Default value; `None` means no default was declared.
    pub default: Option<OptionValue>,
    /// Whether a value must always be present.
    pub required: bool,
    /// Declared maximum length.
    pub max_length: Option<u32>,
    /// Display title.
    pub title: Option<String>,
    /// Free-form declared options.
    pub options: FieldOptions,
}

impl SchemaField {
    /// Create a required field with no default and no options.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            default: None,
            required: true,
            max_length: None,
            title: None,
            options: FieldOptions::new(),
        }
    }

    /// Mark the field as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_default(mut self, value: impl Into<OptionValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Declare a free-form option.
    pub fn with_option(mut self, name: &str, value: impl Into<OptionValue>) -> Self {
        self.options.insert(name, value);
        self
    }
}
