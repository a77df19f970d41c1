//! Model assembly: schema models in, backend IR out.

use modelsmith_ir::{BackendModel, ColumnDescriptor, SchemaModel};

use crate::{
    Error, Result,
    mapper::{ColumnType, Conventions},
    normalize::normalize,
};

/// Translate one schema model for a backend.
///
/// Columns come out in field declaration order. The first field that cannot
/// be mapped or normalized aborts the model.
pub fn assemble<B>(backend: &B, model: &SchemaModel) -> Result<BackendModel>
where
    B: Conventions + ?Sized,
{
    let kind = backend.backend();
    let mut columns = Vec::with_capacity(model.fields.len());

    for field in &model.fields {
        let column =
            backend
                .map_field_type(field.field_type)
                .ok_or_else(|| Error::UnmappedType {
                    backend: kind,
                    model: model.name.clone(),
                    field: field.name.clone(),
                    field_type: field.field_type,
                })?;

        let normalized = normalize(backend, column, field)
            .map_err(|err| err.into_error(kind, &model.name, &field.name))?;

        columns.push(ColumnDescriptor {
            name: field.name.clone(),
            column_type: normalized.column.as_str(),
            options: normalized.options,
        });
    }

    log::debug!("assembled {} model {} ({} columns)", kind, model.name, columns.len());
    Ok(BackendModel::new(&model.name, columns))
}

/// Translate every model of a backend group, stopping at the first failure.
pub fn assemble_all<B>(backend: &B, models: &[&SchemaModel]) -> Result<Vec<BackendModel>>
where
    B: Conventions + ?Sized,
{
    models.iter().map(|model| assemble(backend, model)).collect()
}
