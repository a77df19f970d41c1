//! Django type mapper and option conventions.

use modelsmith_codegen::{Cascade, ColumnType, Conventions, Relation, TypeMapper};
use modelsmith_ir::{BackendKind, FieldType, OptionName, OptionValue, RelationKind};

/// Django model field classes (`django.db.models`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DjangoColumn {
    CharField,
    IntegerField,
    FloatField,
    BooleanField,
    DateField,
    DateTimeField,
    TimeField,
    DurationField,
    BinaryField,
    DecimalField,
    GenericIPAddressField,
    UUIDField,
    ForeignKey,
    ManyToManyField,
    OneToOneField,
}

impl ColumnType for DjangoColumn {
    fn as_str(&self) -> &'static str {
        match self {
            DjangoColumn::CharField => "CharField",
            DjangoColumn::IntegerField => "IntegerField",
            DjangoColumn::FloatField => "FloatField",
            DjangoColumn::BooleanField => "BooleanField",
            DjangoColumn::DateField => "DateField",
            DjangoColumn::DateTimeField => "DateTimeField",
            DjangoColumn::TimeField => "TimeField",
            DjangoColumn::DurationField => "DurationField",
            DjangoColumn::BinaryField => "BinaryField",
            DjangoColumn::DecimalField => "DecimalField",
            DjangoColumn::GenericIPAddressField => "GenericIPAddressField",
            DjangoColumn::UUIDField => "UUIDField",
            DjangoColumn::ForeignKey => "ForeignKey",
            DjangoColumn::ManyToManyField => "ManyToManyField",
            DjangoColumn::OneToOneField => "OneToOneField",
        }
    }
}

/// Django type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DjangoTypeMapper;

impl DjangoTypeMapper {
    /// `max_length` given to `CharField`s that declare none.
    pub const DEFAULT_MAX_LENGTH: u32 = 64;

    const ALLOWED_OPTIONS: &'static [OptionName] = &[
        // general
        OptionName::Null,
        OptionName::Blank,
        OptionName::Choices,
        OptionName::DbColumn,
        OptionName::DbIndex,
        OptionName::DbTablespace,
        OptionName::Default,
        OptionName::Editable,
        OptionName::ErrorMessages,
        OptionName::HelpText,
        OptionName::PrimaryKey,
        OptionName::Unique,
        OptionName::UniqueForDate,
        OptionName::UniqueForMonth,
        OptionName::UniqueForYear,
        OptionName::VerboseName,
        OptionName::Validators,
        // foreign key
        OptionName::ForeignKey,
        OptionName::LimitChoicesTo,
        OptionName::RelatedName,
        OptionName::RelatedQueryName,
        OptionName::ToField,
        OptionName::DbConstraint,
        OptionName::Swappable,
        // many-to-many
        OptionName::ManyKey,
        OptionName::Symmetrical,
        OptionName::Through,
        OptionName::ThroughFields,
        OptionName::DbTable,
        // one-to-one
        OptionName::OneKey,
        OptionName::ParentLink,
        // field specific
        OptionName::DbCollation,
        OptionName::AutoNow,
        OptionName::AutoNowAdd,
        OptionName::MaxDigits,
        OptionName::DecimalPlaces,
        OptionName::Protocol,
        OptionName::UnpackIpv4,
    ];

    fn cascade() -> Cascade {
        Cascade::new(OptionName::OnDelete, OptionValue::expr("models.CASCADE"))
    }
}

impl TypeMapper for DjangoTypeMapper {
    type Column = DjangoColumn;

    fn backend(&self) -> BackendKind {
        BackendKind::Django
    }

    fn map_field_type(&self, field_type: FieldType) -> Option<DjangoColumn> {
        let column = match field_type {
            FieldType::Text | FieldType::Path => DjangoColumn::CharField,
            FieldType::Integer => DjangoColumn::IntegerField,
            FieldType::Float => DjangoColumn::FloatField,
            FieldType::Boolean => DjangoColumn::BooleanField,
            FieldType::Date => DjangoColumn::DateField,
            FieldType::DateTime => DjangoColumn::DateTimeField,
            FieldType::Time => DjangoColumn::TimeField,
            FieldType::Duration => DjangoColumn::DurationField,
            FieldType::Binary => DjangoColumn::BinaryField,
            FieldType::Decimal => DjangoColumn::DecimalField,
            FieldType::Ipv4Address
            | FieldType::Ipv4Network
            | FieldType::Ipv6Address
            | FieldType::Ipv6Network => DjangoColumn::GenericIPAddressField,
            FieldType::Uuid => DjangoColumn::UUIDField,
            FieldType::Enum => return None,
        };
        Some(column)
    }
}

impl Conventions for DjangoTypeMapper {
    fn allowed_options(&self) -> &'static [OptionName] {
        Self::ALLOWED_OPTIONS
    }

    fn relation(&self, kind: RelationKind) -> Option<Relation<DjangoColumn>> {
        let relation = match kind {
            RelationKind::ForeignKey => Relation {
                column: DjangoColumn::ForeignKey,
                cascade: Some(Self::cascade()),
                accepts_null: true,
            },
            // many-to-many fields ignore null
            RelationKind::ManyToMany => Relation {
                column: DjangoColumn::ManyToManyField,
                cascade: None,
                accepts_null: false,
            },
            RelationKind::OneToOne => Relation {
                column: DjangoColumn::OneToOneField,
                cascade: Some(Self::cascade()),
                accepts_null: true,
            },
        };
        Some(relation)
    }

    fn null_option(&self) -> &'static str {
        "null"
    }

    fn title_option(&self) -> &'static str {
        "verbose_name"
    }

    fn string_column(&self) -> DjangoColumn {
        DjangoColumn::CharField
    }

    fn default_max_length(&self) -> u32 {
        Self::DEFAULT_MAX_LENGTH
    }
}
