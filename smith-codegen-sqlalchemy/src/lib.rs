//! SQLAlchemy backend for modelsmith.
//!
//! Every model is emitted twice: as a declarative class in
//! `declarative_models.py` and as an imperatively mapped `Table` in
//! `classical_models.py`.

mod generator;
mod type_mapper;

pub mod files;

pub use generator::SqlAlchemyBackend;
pub use type_mapper::{SqlAlchemyColumn, SqlAlchemyTypeMapper};
