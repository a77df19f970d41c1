pub use modelsmith_core::GENERATED_HEADER;

mod models_py;

pub use models_py::ModelsPy;
