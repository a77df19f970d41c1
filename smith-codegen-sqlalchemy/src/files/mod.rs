//! Declarative and classical SQLAlchemy artifacts.
//!
//! Both files share the column rendering in [`column`]; they differ only in
//! how a model is mapped.

pub use modelsmith_core::GENERATED_HEADER;

mod classical_models_py;
mod column;
mod declarative_models_py;

pub use classical_models_py::ClassicalModelsPy;
pub use column::{ColumnArgs, Imports};
pub use declarative_models_py::DeclarativeModelsPy;
