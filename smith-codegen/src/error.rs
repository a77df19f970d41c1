use std::io;

use modelsmith_ir::{BackendKind, FieldType, RelationKind};
use thiserror::Error;

use crate::render::{ArtifactKind, RenderError};

pub type Result<T> = std::result::Result<T, Error>;

/// A failure that ends generation for one backend.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{backend} has no column type for field '{model}.{field}' of type {field_type}")]
    UnmappedType {
        backend: BackendKind,
        model: String,
        field: String,
        field_type: FieldType,
    },

    #[error("field '{model}.{field}' declares more than one relation ({markers}) for {backend}")]
    InvalidRelation {
        backend: BackendKind,
        model: String,
        field: String,
        markers: String,
    },

    #[error("field '{model}.{field}' has {marker} = {value}; the target must name a model")]
    InvalidRelationTarget {
        backend: BackendKind,
        model: String,
        field: String,
        marker: String,
        value: String,
    },

    #[error("{backend} has no template for {artifact}")]
    TemplateNotFound {
        backend: BackendKind,
        artifact: String,
    },

    #[error("render failed for artifact {artifact} ({backend}): {reason}")]
    RenderFailed {
        backend: BackendKind,
        artifact: String,
        reason: String,
    },

    #[error("failed to write {backend} artifact {artifact}")]
    Write {
        backend: BackendKind,
        artifact: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// The backend this error belongs to.
    pub fn backend(&self) -> BackendKind {
        match self {
            Error::UnmappedType { backend, .. }
            | Error::InvalidRelation { backend, .. }
            | Error::InvalidRelationTarget { backend, .. }
            | Error::TemplateNotFound { backend, .. }
            | Error::RenderFailed { backend, .. }
            | Error::Write { backend, .. } => *backend,
        }
    }

    /// Wrap a render error with its backend and artifact.
    pub(crate) fn from_render(backend: BackendKind, artifact: ArtifactKind, err: RenderError) -> Self {
        match err {
            RenderError::TemplateNotFound(_) => Error::TemplateNotFound {
                backend,
                artifact: artifact.file_name().to_string(),
            },
            RenderError::Failed(reason) => Error::RenderFailed {
                backend,
                artifact: artifact.file_name().to_string(),
                reason,
            },
        }
    }
}

/// A field's relation markers cannot be turned into a relation column.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRelation {
    /// More than one relation marker on the same field.
    #[error("conflicting relation markers: {}", format_markers(.markers))]
    Conflicting { markers: Vec<RelationKind> },

    /// The marker's value is not a model name.
    #[error("{} target {value} is not a model name", .marker.marker())]
    Target { marker: RelationKind, value: String },
}

impl InvalidRelation {
    /// Attach the model and field the problem was found on.
    pub fn into_error(self, backend: BackendKind, model: &str, field: &str) -> Error {
        match self {
            InvalidRelation::Conflicting { markers } => Error::InvalidRelation {
                backend,
                model: model.to_string(),
                field: field.to_string(),
                markers: format_markers(&markers),
            },
            InvalidRelation::Target { marker, value } => Error::InvalidRelationTarget {
                backend,
                model: model.to_string(),
                field: field.to_string(),
                marker: marker.marker().as_str().to_string(),
                value,
            },
        }
    }
}

fn format_markers(markers: &[RelationKind]) -> String {
    markers
        .iter()
        .map(|kind| kind.marker().as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
