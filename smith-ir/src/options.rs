//! Typed field options.
//!
//! Declarations share one option vocabulary across every backend. Names that
//! at least one backend understands are parsed into [`OptionName`]; anything
//! else lands in an explicit "unrecognized" bucket that is carried along but
//! never emitted.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::Serialize;

/// A declared option value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<OptionValue>),
    /// An expression emitted verbatim (e.g. `models.CASCADE`).
    Expr(String),
}

impl OptionValue {
    /// Create a verbatim expression value.
    pub fn expr(s: impl Into<String>) -> Self {
        Self::Expr(s.into())
    }

    /// Get the string payload of a `Str` or `Expr` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Str(s) | OptionValue::Expr(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for OptionValue {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl<T: Into<OptionValue>> From<Vec<T>> for OptionValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Error returned when parsing an option name no backend recognizes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown option '{0}'")]
pub struct UnknownOption(pub String);

macro_rules! option_names {
    ($($variant:ident => $name:literal,)*) => {
        /// Every option name understood by at least one backend.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum OptionName {
            $($variant,)*
        }

        impl OptionName {
            /// All known option names.
            pub const ALL: &'static [OptionName] = &[$(OptionName::$variant,)*];

            /// The keyword spelling of this option.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(OptionName::$variant => $name,)*
                }
            }
        }

        impl FromStr for OptionName {
            type Err = UnknownOption;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(OptionName::$variant),)*
                    _ => Err(UnknownOption(s.to_string())),
                }
            }
        }
    };
}

option_names! {
    // relation markers
    ForeignKey => "foreign_key",
    ManyKey => "many_key",
    OneKey => "one_key",
    // shared
    Null => "null",
    Default => "default",
    PrimaryKey => "primary_key",
    Unique => "unique",
    Choices => "choices",
    HelpText => "help_text",
    VerboseName => "verbose_name",
    MaxDigits => "max_digits",
    DecimalPlaces => "decimal_places",
    // django
    Blank => "blank",
    DbColumn => "db_column",
    DbIndex => "db_index",
    DbTablespace => "db_tablespace",
    Editable => "editable",
    ErrorMessages => "error_messages",
    UniqueForDate => "unique_for_date",
    UniqueForMonth => "unique_for_month",
    UniqueForYear => "unique_for_year",
    Validators => "validators",
    LimitChoicesTo => "limit_choices_to",
    RelatedName => "related_name",
    RelatedQueryName => "related_query_name",
    ToField => "to_field",
    DbConstraint => "db_constraint",
    Swappable => "swappable",
    Symmetrical => "symmetrical",
    Through => "through",
    ThroughFields => "through_fields",
    DbTable => "db_table",
    ParentLink => "parent_link",
    DbCollation => "db_collation",
    AutoNow => "auto_now",
    AutoNowAdd => "auto_now_add",
    Protocol => "protocol",
    UnpackIpv4 => "unpack_ipv4",
    // peewee
    Index => "index",
    ColumnName => "column_name",
    Constraints => "constraints",
    Sequence => "sequence",
    Collation => "collation",
    Unindexed => "unindexed",
    IndexType => "index_type",
    Formats => "formats",
    Resolution => "resolution",
    Utc => "utc",
    AutoRound => "auto_round",
    Rounding => "rounding",
    Model => "model",
    Field => "field",
    Backref => "backref",
    OnDelete => "on_delete",
    OnUpdate => "on_update",
    Deferrable => "deferrable",
    LazyLoad => "lazy_load",
    Adapt => "adapt",
    // sqlalchemy
    Nullable => "nullable",
    ServerDefault => "server_default",
    ServerOnupdate => "server_onupdate",
    Onupdate => "onupdate",
    Ondelete => "ondelete",
    Comment => "comment",
    Autoincrement => "autoincrement",
    Doc => "doc",
    Key => "key",
    Info => "info",
    Quote => "quote",
    System => "system",
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of relationship a relation marker declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    ForeignKey,
    ManyToMany,
    OneToOne,
}

impl RelationKind {
    /// All relation kinds, in marker precedence order.
    pub const ALL: [RelationKind; 3] = [
        RelationKind::ForeignKey,
        RelationKind::ManyToMany,
        RelationKind::OneToOne,
    ];

    /// The option name that marks this relation on a field.
    pub fn marker(&self) -> OptionName {
        match self {
            RelationKind::ForeignKey => OptionName::ForeignKey,
            RelationKind::ManyToMany => OptionName::ManyKey,
            RelationKind::OneToOne => OptionName::OneKey,
        }
    }

    /// The relation kind marked by an option name, if any.
    pub fn from_marker(name: OptionName) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.marker() == name)
    }
}

/// Declared options of a schema field, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldOptions {
    recognized: IndexMap<OptionName, OptionValue>,
    unrecognized: IndexMap<String, OptionValue>,
}

impl FieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an option, routing unknown names to the unrecognized bucket.
    pub fn insert(&mut self, name: &str, value: impl Into<OptionValue>) {
        match name.parse::<OptionName>() {
            Ok(known) => {
                self.recognized.insert(known, value.into());
            }
            Err(UnknownOption(unknown)) => {
                self.unrecognized.insert(unknown, value.into());
            }
        }
    }

    /// Builder-style [`FieldOptions::insert`].
    pub fn with(mut self, name: &str, value: impl Into<OptionValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a recognized option.
    pub fn get(&self, name: OptionName) -> Option<&OptionValue> {
        self.recognized.get(&name)
    }

    pub fn contains(&self, name: OptionName) -> bool {
        self.recognized.contains_key(&name)
    }

    /// Recognized options in declaration order.
    pub fn recognized(&self) -> impl Iterator<Item = (OptionName, &OptionValue)> {
        self.recognized.iter().map(|(k, v)| (*k, v))
    }

    /// Options no backend understands, in declaration order.
    pub fn unrecognized(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.unrecognized.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Relation markers present on the field, in declaration order.
    pub fn relation_markers(&self) -> Vec<RelationKind> {
        self.recognized
            .keys()
            .filter_map(|name| RelationKind::from_marker(*name))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.recognized.len() + self.unrecognized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recognized.is_empty() && self.unrecognized.is_empty()
    }
}
