//! Line-oriented writer for generated Python.

use super::INDENT;

/// Accumulates indented Python source.
///
/// Header fragments chain through the consuming methods, while templates
/// that loop over models drive the `push_` methods on a `&mut` builder.
///
/// ```
/// use modelsmith_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::python().line("from django.db import models").blank();
/// for name in ["RocketEngine", "LaunchVehicle"] {
///     builder.push_line(&format!("class {name}(models.Model):")).push_indent();
///     builder.push_line("pass").push_dedent().push_blank();
/// }
/// let code = builder.build();
/// assert!(code.contains("class RocketEngine(models.Model):\n    pass\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    depth: usize,
    buffer: String,
}

impl CodeBuilder {
    /// An empty builder at module level.
    pub fn python() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.depth {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Blank lines carry no indentation.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Add a header line followed by an indented body.
    ///
    /// ```
    /// use modelsmith_codegen::builder::CodeBuilder;
    ///
    /// let code = CodeBuilder::python()
    ///     .block("class Meta:", |b| b.line("model = RocketEngine"))
    ///     .build();
    ///
    /// assert_eq!(code, "class Meta:\n    model = RocketEngine\n");
    /// ```
    pub fn block<F>(mut self, header: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        self.push_line(header).push_indent();
        let mut builder = f(self);
        builder.push_dedent();
        builder
    }

    /// Add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::python().line("import uuid").build();
        assert_eq!(code, "import uuid\n");
    }

    #[test]
    fn test_nested_block() {
        let code = CodeBuilder::python()
            .block("class Satellite(Model):", |b| {
                b.block("class Meta:", |b| b.line("table_name = 'satellite'"))
            })
            .line("x = 1")
            .build();

        assert_eq!(
            code,
            "class Satellite(Model):\n    class Meta:\n        table_name = 'satellite'\nx = 1\n"
        );
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::python();
        builder
            .push_indent()
            .push_line("a = 1")
            .push_blank()
            .push_line("b = 2");

        assert_eq!(builder.build(), "    a = 1\n\n    b = 2\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::python()
            .each(["a", "b"], |b, name| b.line(&format!("{name} = None")))
            .build();

        assert_eq!(code, "a = None\nb = None\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::python();
        builder.push_dedent().push_dedent().push_line("x = 1");
        assert_eq!(builder.build(), "x = 1\n");
    }
}
