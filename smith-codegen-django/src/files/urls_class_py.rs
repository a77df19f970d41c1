use modelsmith_codegen::{ModelName, builder::CodeBuilder};

use super::GENERATED_HEADER;

/// The urls_class.py file routing to the class-based views.
pub struct UrlsClassPy<'a> {
    pub names: &'a [ModelName],
}

impl<'a> UrlsClassPy<'a> {
    pub fn new(names: &'a [ModelName]) -> Self {
        Self { names }
    }

    pub fn render(&self) -> String {
        CodeBuilder::python()
            .line(GENERATED_HEADER)
            .line("from django.urls import path")
            .blank()
            .line("from . import views_class")
            .blank()
            .block("urlpatterns = [", |b| {
                b.each(self.names, |b, name| {
                    b.line(&format!(
                        "path('{}/', views_class.{}List.as_view()),",
                        name.snake, name.name
                    ))
                    .line(&format!(
                        "path('{}/<int:pk>/', views_class.{}Detail.as_view()),",
                        name.snake, name.name
                    ))
                })
            })
            .line("]")
            .build()
    }
}
