//! Peewee type mapper and option conventions.

use modelsmith_codegen::{Cascade, ColumnType, Conventions, Relation, TypeMapper};
use modelsmith_ir::{BackendKind, FieldType, OptionName, RelationKind};

/// Peewee field classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeeweeColumn {
    CharField,
    IntegerField,
    FloatField,
    BooleanField,
    DateField,
    DateTimeField,
    TimeField,
    BlobField,
    DecimalField,
    IPField,
    UUIDField,
    ForeignKeyField,
}

impl ColumnType for PeeweeColumn {
    fn as_str(&self) -> &'static str {
        match self {
            PeeweeColumn::CharField => "CharField",
            PeeweeColumn::IntegerField => "IntegerField",
            PeeweeColumn::FloatField => "FloatField",
            PeeweeColumn::BooleanField => "BooleanField",
            PeeweeColumn::DateField => "DateField",
            PeeweeColumn::DateTimeField => "DateTimeField",
            PeeweeColumn::TimeField => "TimeField",
            PeeweeColumn::BlobField => "BlobField",
            PeeweeColumn::DecimalField => "DecimalField",
            PeeweeColumn::IPField => "IPField",
            PeeweeColumn::UUIDField => "UUIDField",
            PeeweeColumn::ForeignKeyField => "ForeignKeyField",
        }
    }
}

/// Peewee type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeeweeTypeMapper;

impl PeeweeTypeMapper {
    /// `max_length` given to `CharField`s that declare none.
    pub const DEFAULT_MAX_LENGTH: u32 = 255;

    const ALLOWED_OPTIONS: &'static [OptionName] = &[
        OptionName::Null,
        OptionName::Index,
        OptionName::Unique,
        OptionName::ColumnName,
        OptionName::Default,
        OptionName::PrimaryKey,
        OptionName::Constraints,
        OptionName::Sequence,
        OptionName::Collation,
        OptionName::Unindexed,
        OptionName::Choices,
        OptionName::HelpText,
        OptionName::VerboseName,
        OptionName::IndexType,
        OptionName::ForeignKey,
        OptionName::Formats,
        OptionName::Resolution,
        OptionName::Utc,
        OptionName::MaxDigits,
        OptionName::DecimalPlaces,
        OptionName::AutoRound,
        OptionName::Rounding,
        OptionName::Model,
        OptionName::Field,
        OptionName::Backref,
        OptionName::OnDelete,
        OptionName::OnUpdate,
        OptionName::Deferrable,
        OptionName::LazyLoad,
        OptionName::Adapt,
    ];
}

impl TypeMapper for PeeweeTypeMapper {
    type Column = PeeweeColumn;

    fn backend(&self) -> BackendKind {
        BackendKind::Peewee
    }

    fn map_field_type(&self, field_type: FieldType) -> Option<PeeweeColumn> {
        let column = match field_type {
            FieldType::Text | FieldType::Path => PeeweeColumn::CharField,
            FieldType::Integer => PeeweeColumn::IntegerField,
            FieldType::Float => PeeweeColumn::FloatField,
            FieldType::Boolean => PeeweeColumn::BooleanField,
            FieldType::Date => PeeweeColumn::DateField,
            FieldType::DateTime => PeeweeColumn::DateTimeField,
            FieldType::Time => PeeweeColumn::TimeField,
            FieldType::Binary => PeeweeColumn::BlobField,
            FieldType::Decimal => PeeweeColumn::DecimalField,
            FieldType::Ipv4Address | FieldType::Ipv4Network => PeeweeColumn::IPField,
            FieldType::Uuid => PeeweeColumn::UUIDField,
            // IPField stores IPv4 only
            FieldType::Duration
            | FieldType::Ipv6Address
            | FieldType::Ipv6Network
            | FieldType::Enum => return None,
        };
        Some(column)
    }
}

impl Conventions for PeeweeTypeMapper {
    fn allowed_options(&self) -> &'static [OptionName] {
        Self::ALLOWED_OPTIONS
    }

    fn relation(&self, kind: RelationKind) -> Option<Relation<PeeweeColumn>> {
        match kind {
            RelationKind::ForeignKey => Some(Relation {
                column: PeeweeColumn::ForeignKeyField,
                cascade: Some(Cascade::new(OptionName::OnDelete, "CASCADE")),
                accepts_null: true,
            }),
            RelationKind::ManyToMany | RelationKind::OneToOne => None,
        }
    }

    fn null_option(&self) -> &'static str {
        "null"
    }

    fn title_option(&self) -> &'static str {
        "verbose_name"
    }

    fn string_column(&self) -> PeeweeColumn {
        PeeweeColumn::CharField
    }

    fn default_max_length(&self) -> u32 {
        Self::DEFAULT_MAX_LENGTH
    }
}
