//! Peewee backend for modelsmith.

mod generator;
mod type_mapper;

pub mod files;

pub use generator::PeeweeBackend;
pub use type_mapper::{PeeweeColumn, PeeweeTypeMapper};
