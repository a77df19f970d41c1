//! Core type definitions.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A target ORM framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Django,
    Peewee,
    #[serde(alias = "sqla")]
    SqlAlchemy,
}

impl BackendKind {
    /// Every backend, in dispatch order.
    pub const ALL: [BackendKind; 3] = [
        BackendKind::Django,
        BackendKind::Peewee,
        BackendKind::SqlAlchemy,
    ];

    /// Lowercase identifier, also used as the output subdirectory name.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Django => "django",
            BackendKind::Peewee => "peewee",
            BackendKind::SqlAlchemy => "sqlalchemy",
        }
    }

    /// Human-readable framework name.
    pub fn display_name(&self) -> &'static str {
        match self {
            BackendKind::Django => "Django",
            BackendKind::Peewee => "Peewee",
            BackendKind::SqlAlchemy => "SQLAlchemy",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "django" => Ok(BackendKind::Django),
            "peewee" => Ok(BackendKind::Peewee),
            "sqlalchemy" | "sqla" => Ok(BackendKind::SqlAlchemy),
            _ => Err(format!(
                "unknown backend '{}', expected 'django', 'peewee' or 'sqlalchemy'",
                s
            )),
        }
    }
}

/// Semantic value type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    #[serde(alias = "str", alias = "string")]
    Text,
    #[serde(alias = "int")]
    Integer,
    Float,
    #[serde(alias = "bool")]
    Boolean,
    Date,
    #[serde(rename = "datetime")]
    DateTime,
    Time,
    #[serde(alias = "timedelta")]
    Duration,
    #[serde(alias = "bytes")]
    Binary,
    Decimal,
    #[serde(rename = "ipv4_address")]
    Ipv4Address,
    #[serde(rename = "ipv4_network")]
    Ipv4Network,
    #[serde(rename = "ipv6_address")]
    Ipv6Address,
    #[serde(rename = "ipv6_network")]
    Ipv6Network,
    Uuid,
    Path,
    Enum,
}

impl FieldType {
    /// Every semantic type.
    pub const ALL: [FieldType; 17] = [
        FieldType::Text,
        FieldType::Integer,
        FieldType::Float,
        FieldType::Boolean,
        FieldType::Date,
        FieldType::DateTime,
        FieldType::Time,
        FieldType::Duration,
        FieldType::Binary,
        FieldType::Decimal,
        FieldType::Ipv4Address,
        FieldType::Ipv4Network,
        FieldType::Ipv6Address,
        FieldType::Ipv6Network,
        FieldType::Uuid,
        FieldType::Path,
        FieldType::Enum,
    ];

    /// Get the manifest type name
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::DateTime => "datetime",
            FieldType::Time => "time",
            FieldType::Duration => "duration",
            FieldType::Binary => "binary",
            FieldType::Decimal => "decimal",
            FieldType::Ipv4Address => "ipv4_address",
            FieldType::Ipv4Network => "ipv4_network",
            FieldType::Ipv6Address => "ipv6_address",
            FieldType::Ipv6Network => "ipv6_network",
            FieldType::Uuid => "uuid",
            FieldType::Path => "path",
            FieldType::Enum => "enum",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
