//! One struct per emitted Django artifact.
//!
//! Each file renders from the backend IR alone; registration with the
//! dispatcher lives in the generator.

pub use modelsmith_core::GENERATED_HEADER;
use modelsmith_codegen::ModelName;

mod models_py;
mod serializers_py;
mod urls_class_py;
mod urls_func_py;
mod views_class_py;
mod views_func_py;

pub use models_py::ModelsPy;
pub use serializers_py::SerializersPy;
pub use urls_class_py::UrlsClassPy;
pub use urls_func_py::UrlsFuncPy;
pub use views_class_py::ViewsClassPy;
pub use views_func_py::ViewsFuncPy;

/// `from .models import A, B`
fn import_models(names: &[ModelName]) -> String {
    format!("from .models import {}", joined(names, |n| n.name.clone()))
}

/// `from .serializers import ASerializer, BSerializer`
fn import_serializers(names: &[ModelName]) -> String {
    format!(
        "from .serializers import {}",
        joined(names, |n| serializer_name(&n.name))
    )
}

fn serializer_name(model: &str) -> String {
    format!("{model}Serializer")
}

fn joined(names: &[ModelName], f: impl Fn(&ModelName) -> String) -> String {
    names.iter().map(f).collect::<Vec<_>>().join(", ")
}
