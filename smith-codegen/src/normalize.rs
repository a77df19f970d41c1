//! Option filtering and normalization.
//!
//! [`normalize`] turns a field's declared options into the ordered keyword
//! list a backend column is emitted with. Steps run in a fixed order:
//!
//! 1. start with the field's `default`
//! 2. keep allow-listed options, in declaration order; a declared `default`
//!    replaces the field's value in place
//! 3. infer the relation column; target first, cascade option second
//! 4. append the null option for optional fields
//! 5. append a declared `max_length`
//! 6. append the title option
//! 7. append the default `max_length` for plain string columns
//!
//! Synthesized options never repeat a name already in the list.

use modelsmith_ir::{ColumnDescriptor, OptionValue, RelationKind, SchemaField};

use crate::{
    InvalidRelation,
    mapper::{ColumnType, Conventions},
    python,
};

/// A column type and its ordered keyword options.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized<C> {
    pub column: C,
    pub options: Vec<(String, OptionValue)>,
}

/// Normalize a field's options for the column it was mapped to.
///
/// Fails if the field declares more than one relation marker, or a marker
/// whose target is not a model name, whether or not the backend recognizes
/// the marker.
pub fn normalize<B>(
    conventions: &B,
    mut column: B::Column,
    field: &SchemaField,
) -> Result<Normalized<B::Column>, InvalidRelation>
where
    B: Conventions + ?Sized,
{
    let markers = field.options.relation_markers();
    if markers.len() > 1 {
        return Err(InvalidRelation::Conflicting { markers });
    }
    if let Some(&marker) = markers.first()
        && let Some(value) = field.options.get(marker.marker())
        && !is_model_name(value)
    {
        return Err(InvalidRelation::Target {
            marker,
            value: python::literal(value),
        });
    }

    let mut options = OptionList::default();
    if let Some(default) = &field.default {
        options.push("default", default.clone());
    }

    let mut relation: Option<(RelationKind, &OptionValue)> = None;
    for (name, value) in field.options.recognized() {
        if !conventions.allows(name) {
            continue;
        }
        match RelationKind::from_marker(name) {
            Some(kind) => relation = Some((kind, value)),
            None => options.set(name.as_str(), value.clone()),
        }
    }

    let mut accepts_null = true;
    if let Some((kind, target)) = relation
        && let Some(conv) = conventions.relation(kind)
    {
        column = conv.column;
        accepts_null = conv.accepts_null;

        let mut head = vec![(ColumnDescriptor::RELATION.to_string(), target.clone())];
        if let Some(cascade) = conv.cascade {
            let name = cascade.option.as_str();
            let value = options.remove(name).unwrap_or(cascade.value);
            head.push((name.to_string(), value));
        }
        options.prepend(head);
    }

    if !field.required && accepts_null {
        options.push_unique(conventions.null_option(), OptionValue::Bool(true));
    }

    if let Some(max_length) = field.max_length {
        options.push_unique("max_length", max_length);
    }

    if let Some(title) = &field.title {
        options.push_unique(conventions.title_option(), title.as_str());
    }

    if column == conventions.string_column() && field.max_length.is_none() {
        options.push_unique("max_length", conventions.default_max_length());
    }

    log::trace!(
        "normalized '{}' to {} with {} options",
        field.name,
        column.as_str(),
        options.0.len()
    );

    Ok(Normalized {
        column,
        options: options.0,
    })
}

fn is_model_name(value: &OptionValue) -> bool {
    matches!(value, OptionValue::Str(target) if !target.is_empty())
}

/// Ordered keyword options under construction.
#[derive(Debug, Default)]
struct OptionList(Vec<(String, OptionValue)>);

impl OptionList {
    fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|(key, _)| key == name)
    }

    fn push(&mut self, name: &str, value: OptionValue) {
        self.0.push((name.to_string(), value));
    }

    fn push_unique(&mut self, name: &str, value: impl Into<OptionValue>) {
        if !self.contains(name) {
            self.push(name, value.into());
        }
    }

    fn set(&mut self, name: &str, value: OptionValue) {
        match self.0.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => *slot = value,
            None => self.push(name, value),
        }
    }

    fn remove(&mut self, name: &str) -> Option<OptionValue> {
        let index = self.0.iter().position(|(key, _)| key == name)?;
        Some(self.0.remove(index).1)
    }

    fn prepend(&mut self, head: Vec<(String, OptionValue)>) {
        self.0.splice(0..0, head);
    }
}
