use modelsmith_codegen::{ModelName, builder::CodeBuilder};

use super::{GENERATED_HEADER, import_models, import_serializers, serializer_name};

/// The views_class.py file with generic list and detail API views.
pub struct ViewsClassPy<'a> {
    pub names: &'a [ModelName],
}

impl<'a> ViewsClassPy<'a> {
    pub fn new(names: &'a [ModelName]) -> Self {
        Self { names }
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::python();
        builder
            .push_line(GENERATED_HEADER)
            .push_line("from rest_framework import generics")
            .push_blank()
            .push_line(&import_models(self.names))
            .push_line(&import_serializers(self.names));

        for name in self.names {
            for (suffix, base) in [
                ("List", "ListCreateAPIView"),
                ("Detail", "RetrieveUpdateDestroyAPIView"),
            ] {
                builder.push_blank().push_blank();
                builder
                    .push_line(&format!("class {}{}(generics.{}):", name.name, suffix, base))
                    .push_indent()
                    .push_line(&format!("queryset = {}.objects.all()", name.name))
                    .push_line(&format!("serializer_class = {}", serializer_name(&name.name)))
                    .push_dedent();
            }
        }

        builder.build()
    }
}
