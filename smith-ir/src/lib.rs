//! Intermediate representation types for modelsmith.
//!
//! This crate provides the type definitions shared across the generation
//! pipeline: the framework-neutral schema handed to the core, and the
//! backend IR the core hands to rendering.
//!
//! # Architecture
//!
//! ```text
//! modelsmith.toml → modelsmith-manifest (parsing) → SchemaModel → codegen → BackendModel → templates
//! ```
//!
//! The schema types are:
//! - Backend-agnostic (no Django/Peewee/SQLAlchemy spelling)
//! - Immutable once built; the core only borrows them
//! - Self-contained (no dependencies beyond serde, indexmap and thiserror)

mod model;
mod options;
mod schema;
mod types;

pub use model::{BackendModel, ColumnDescriptor};
pub use options::{FieldOptions, OptionName, OptionValue, RelationKind, UnknownOption};
pub use schema::{SchemaField, SchemaModel};
pub use types::{BackendKind, FieldType};
