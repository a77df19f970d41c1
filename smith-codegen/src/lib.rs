//! Schema-to-backend translation engine for modelsmith.
//!
//! This crate holds everything the ORM generators share: the mapping traits
//! each backend implements, the option normalizer, model assembly, the render
//! boundary, output sinks and the dispatcher that ties them together.
//!
//! # Module Organization
//!
//! - [`mapper`] - `TypeMapper` and `Conventions`, implemented per backend
//! - [`normalize`] - option filtering and synthesized defaults
//! - [`assemble`] - schema models to backend IR
//! - [`render`] - artifact kinds, templates and the render context
//! - [`sink`] - filesystem and in-memory output sinks
//! - [`dispatch`] - per-backend routing with failure isolation
//! - [`builder`] - `CodeBuilder` for writing templates
//! - [`python`] - Python literal rendering
//! - [`testing`] - Test utilities (feature-gated)

pub mod assemble;
pub mod backend;
pub mod builder;
mod diagnostic;
pub mod dispatch;
mod error;
pub mod mapper;
pub mod normalize;
pub mod python;
pub mod render;
pub mod result;
pub mod sink;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use assemble::{assemble, assemble_all};
pub use backend::{Backend, BackendRegistry, GenerateOptions};
pub use diagnostic::{Diagnostic, Severity};
pub use dispatch::Dispatcher;
pub use error::{Error, InvalidRelation, Result};
pub use mapper::{Cascade, ColumnType, Conventions, Relation, TypeMapper};
pub use normalize::{Normalized, normalize};
pub use render::{ArtifactKind, ModelName, RenderContext, RenderError, Template, TemplateRegistry};
pub use result::{ArtifactOutcome, ArtifactResult, BackendOutcome, BackendReport, GenerationReport};
pub use sink::{FsSink, MemorySink, OutputSink};
