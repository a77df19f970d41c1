//! Parsing and validation of `modelsmith.toml` schema manifests.
//!
//! A manifest declares the models to generate, the backends each model
//! targets, and where output goes. [`Manifest::schema_models`] lowers it into
//! the [`modelsmith_ir::SchemaModel`] registry the generators consume.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod model;

pub use error::{Error, Result};
pub use manifest::{Manifest, ManifestFile, OutputConfig, ParseContext};
pub use model::{FieldDecl, ModelDecl};
