//! SQLAlchemy type mapper and option conventions.

use modelsmith_codegen::{Cascade, ColumnType, Conventions, Relation, TypeMapper};
use modelsmith_ir::{BackendKind, FieldType, OptionName, RelationKind};

/// SQLAlchemy column types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlAlchemyColumn {
    String,
    Integer,
    Float,
    Boolean,
    Date,
    DateTime,
    Time,
    Interval,
    LargeBinary,
    Numeric,
    /// `sqlalchemy.dialects.postgresql.UUID`
    Uuid,
    Enum,
    ForeignKey,
}

impl ColumnType for SqlAlchemyColumn {
    fn as_str(&self) -> &'static str {
        match self {
            SqlAlchemyColumn::String => "String",
            SqlAlchemyColumn::Integer => "Integer",
            SqlAlchemyColumn::Float => "Float",
            SqlAlchemyColumn::Boolean => "Boolean",
            SqlAlchemyColumn::Date => "Date",
            SqlAlchemyColumn::DateTime => "DateTime",
            SqlAlchemyColumn::Time => "Time",
            SqlAlchemyColumn::Interval => "Interval",
            SqlAlchemyColumn::LargeBinary => "LargeBinary",
            SqlAlchemyColumn::Numeric => "Numeric",
            SqlAlchemyColumn::Uuid => "UUID",
            SqlAlchemyColumn::Enum => "Enum",
            SqlAlchemyColumn::ForeignKey => "ForeignKey",
        }
    }
}

/// SQLAlchemy type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlAlchemyTypeMapper;

impl SqlAlchemyTypeMapper {
    /// Length given to `String` columns that declare none.
    pub const DEFAULT_MAX_LENGTH: u32 = 255;

    const ALLOWED_OPTIONS: &'static [OptionName] = &[
        OptionName::Nullable,
        OptionName::Default,
        OptionName::PrimaryKey,
        OptionName::Unique,
        OptionName::Index,
        OptionName::ServerDefault,
        OptionName::ServerOnupdate,
        OptionName::Onupdate,
        OptionName::Comment,
        OptionName::Autoincrement,
        OptionName::Doc,
        OptionName::Key,
        OptionName::Info,
        OptionName::Quote,
        OptionName::System,
        OptionName::ForeignKey,
        OptionName::Ondelete,
        // consumed by Enum columns
        OptionName::Choices,
    ];
}

impl TypeMapper for SqlAlchemyTypeMapper {
    type Column = SqlAlchemyColumn;

    fn backend(&self) -> BackendKind {
        BackendKind::SqlAlchemy
    }

    fn map_field_type(&self, field_type: FieldType) -> Option<SqlAlchemyColumn> {
        let column = match field_type {
            FieldType::Text
            | FieldType::Path
            | FieldType::Ipv4Address
            | FieldType::Ipv4Network
            | FieldType::Ipv6Address
            | FieldType::Ipv6Network => SqlAlchemyColumn::String,
            FieldType::Integer => SqlAlchemyColumn::Integer,
            FieldType::Float => SqlAlchemyColumn::Float,
            FieldType::Boolean => SqlAlchemyColumn::Boolean,
            FieldType::Date => SqlAlchemyColumn::Date,
            FieldType::DateTime => SqlAlchemyColumn::DateTime,
            FieldType::Time => SqlAlchemyColumn::Time,
            FieldType::Duration => SqlAlchemyColumn::Interval,
            FieldType::Binary => SqlAlchemyColumn::LargeBinary,
            FieldType::Decimal => SqlAlchemyColumn::Numeric,
            FieldType::Uuid => SqlAlchemyColumn::Uuid,
            FieldType::Enum => SqlAlchemyColumn::Enum,
        };
        Some(column)
    }
}

impl Conventions for SqlAlchemyTypeMapper {
    fn allowed_options(&self) -> &'static [OptionName] {
        Self::ALLOWED_OPTIONS
    }

    fn relation(&self, kind: RelationKind) -> Option<Relation<SqlAlchemyColumn>> {
        match kind {
            RelationKind::ForeignKey => Some(Relation {
                column: SqlAlchemyColumn::ForeignKey,
                cascade: Some(Cascade::new(OptionName::Ondelete, "CASCADE")),
                accepts_null: true,
            }),
            RelationKind::ManyToMany | RelationKind::OneToOne => None,
        }
    }

    fn null_option(&self) -> &'static str {
        "nullable"
    }

    fn title_option(&self) -> &'static str {
        "comment"
    }

    fn string_column(&self) -> SqlAlchemyColumn {
        SqlAlchemyColumn::String
    }

    fn default_max_length(&self) -> u32 {
        Self::DEFAULT_MAX_LENGTH
    }
}
