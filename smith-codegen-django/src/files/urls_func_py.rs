use modelsmith_codegen::{ModelName, builder::CodeBuilder};

use super::GENERATED_HEADER;

/// The urls_func.py file routing to the function-based views.
pub struct UrlsFuncPy<'a> {
    pub names: &'a [ModelName],
}

impl<'a> UrlsFuncPy<'a> {
    pub fn new(names: &'a [ModelName]) -> Self {
        Self { names }
    }

    pub fn render(&self) -> String {
        CodeBuilder::python()
            .line(GENERATED_HEADER)
            .line("from django.urls import path")
            .blank()
            .line("from . import views_func")
            .blank()
            .block("urlpatterns = [", |b| {
                b.each(self.names, |b, name| {
                    b.line(&format!("path('{0}/', views_func.{0}_list),", name.snake))
                        .line(&format!(
                            "path('{0}/<int:pk>/', views_func.{0}_detail),",
                            name.snake
                        ))
                })
            })
            .line("]")
            .build()
    }
}
