//! Per-backend mapping traits.
//!
//! A backend describes itself in two layers: [`TypeMapper`] resolves
//! semantic field types to column tags, and [`Conventions`] supplies the
//! option vocabulary and synthesized defaults the normalizer needs.

use std::fmt::Debug;

use modelsmith_ir::{BackendKind, FieldType, OptionName, OptionValue, RelationKind};

/// A backend's column-type enumeration.
pub trait ColumnType: Copy + Eq + Debug {
    /// The tag spelled the way the ORM spells it (e.g. `CharField`).
    fn as_str(&self) -> &'static str;
}

/// Trait for mapping semantic field types to backend column types.
///
/// Implementations are pure: `map_field_type` must return the same answer
/// for the same input and touch nothing else.
pub trait TypeMapper {
    /// The backend's column-type enumeration.
    type Column: ColumnType;

    /// The backend this mapper belongs to.
    fn backend(&self) -> BackendKind;

    /// Map a field type to a column type, or `None` if the backend has no
    /// equivalent.
    fn map_field_type(&self, field_type: FieldType) -> Option<Self::Column>;
}

/// Cascade-delete option a relation column receives.
#[derive(Debug, Clone, PartialEq)]
pub struct Cascade {
    pub option: OptionName,
    pub value: OptionValue,
}

impl Cascade {
    pub fn new(option: OptionName, value: impl Into<OptionValue>) -> Self {
        Self {
            option,
            value: value.into(),
        }
    }
}

/// How a backend spells one kind of relation.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation<C> {
    /// Column type the field becomes.
    pub column: C,
    /// Cascade option inserted right after the relation target.
    pub cascade: Option<Cascade>,
    /// Whether the column takes the backend's null option.
    pub accepts_null: bool,
}

/// Option rules the normalizer applies for a backend.
pub trait Conventions: TypeMapper {
    /// Declared options this backend keeps, relation markers included.
    fn allowed_options(&self) -> &'static [OptionName];

    /// Relation column for a marker, or `None` if the backend has no such
    /// relation.
    fn relation(&self, kind: RelationKind) -> Option<Relation<Self::Column>>;

    /// Option name for optional fields (`null`, `nullable`).
    fn null_option(&self) -> &'static str;

    /// Option name carrying a field's display title.
    fn title_option(&self) -> &'static str;

    /// The plain string column that receives a default length.
    fn string_column(&self) -> Self::Column;

    /// Length given to string columns without a declared `max_length`.
    fn default_max_length(&self) -> u32;

    /// Returns true if the backend keeps the named declared option.
    fn allows(&self, name: OptionName) -> bool {
        self.allowed_options().contains(&name)
    }
}
