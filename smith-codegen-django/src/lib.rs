//! Django backend for modelsmith.
//!
//! Emits `models.py` and `serializers.py`, plus class-based and
//! function-based Django REST Framework views with their URL patterns.

mod generator;
mod type_mapper;

pub mod files;

pub use generator::DjangoBackend;
pub use type_mapper::{DjangoColumn, DjangoTypeMapper};
