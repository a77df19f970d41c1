use modelsmith_codegen::{ModelName, builder::CodeBuilder};

use super::{GENERATED_HEADER, import_models, import_serializers, serializer_name};

/// The views_func.py file with `@api_view` list and detail functions.
pub struct ViewsFuncPy<'a> {
    pub names: &'a [ModelName],
}

impl<'a> ViewsFuncPy<'a> {
    pub fn new(names: &'a [ModelName]) -> Self {
        Self { names }
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::python();
        builder
            .push_line(GENERATED_HEADER)
            .push_line("from rest_framework import status")
            .push_line("from rest_framework.decorators import api_view")
            .push_line("from rest_framework.response import Response")
            .push_blank()
            .push_line(&import_models(self.names))
            .push_line(&import_serializers(self.names));

        for name in self.names {
            push_list_view(&mut builder, name);
            push_detail_view(&mut builder, name);
        }

        builder.build()
    }
}

fn push_list_view(builder: &mut CodeBuilder, name: &ModelName) {
    let serializer = serializer_name(&name.name);

    builder.push_blank().push_blank();
    builder
        .push_line("@api_view(['GET', 'POST'])")
        .push_line(&format!("def {}_list(request):", name.snake))
        .push_indent()
        .push_line("if request.method == 'GET':")
        .push_indent()
        .push_line(&format!("items = {}.objects.all()", name.name))
        .push_line(&format!("serializer = {serializer}(items, many=True)"))
        .push_line("return Response(serializer.data)")
        .push_dedent()
        .push_blank()
        .push_line(&format!("serializer = {serializer}(data=request.data)"));
    push_save(builder, "status=status.HTTP_201_CREATED");
    builder.push_dedent();
}

fn push_detail_view(builder: &mut CodeBuilder, name: &ModelName) {
    let serializer = serializer_name(&name.name);

    builder.push_blank().push_blank();
    builder
        .push_line("@api_view(['GET', 'PUT', 'DELETE'])")
        .push_line(&format!("def {}_detail(request, pk):", name.snake))
        .push_indent()
        .push_line("try:")
        .push_indent()
        .push_line(&format!("item = {}.objects.get(pk=pk)", name.name))
        .push_dedent()
        .push_line(&format!("except {}.DoesNotExist:", name.name))
        .push_indent()
        .push_line("return Response(status=status.HTTP_404_NOT_FOUND)")
        .push_dedent()
        .push_blank()
        .push_line("if request.method == 'GET':")
        .push_indent()
        .push_line(&format!("serializer = {serializer}(item)"))
        .push_line("return Response(serializer.data)")
        .push_dedent()
        .push_blank()
        .push_line("if request.method == 'PUT':")
        .push_indent()
        .push_line(&format!("serializer = {serializer}(item, data=request.data)"));
    push_save(builder, "");
    builder
        .push_dedent()
        .push_blank()
        .push_line("item.delete()")
        .push_line("return Response(status=status.HTTP_204_NO_CONTENT)")
        .push_dedent();
}

/// Validate-and-save tail shared by POST and PUT.
fn push_save(builder: &mut CodeBuilder, success_status: &str) {
    let response = if success_status.is_empty() {
        "return Response(serializer.data)".to_string()
    } else {
        format!("return Response(serializer.data, {success_status})")
    };

    builder
        .push_line("if serializer.is_valid():")
        .push_indent()
        .push_line("serializer.save()")
        .push_line(&response)
        .push_dedent()
        .push_line("return Response(serializer.errors, status=status.HTTP_400_BAD_REQUEST)");
}
