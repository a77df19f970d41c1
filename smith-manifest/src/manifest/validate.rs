//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest, so nested declarations can report where they live.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "modelsmith.toml");
/// ctx.validate_name("RocketEngine", "model")?;
///
/// let fields = ctx.push("RocketEngine");
/// fields.validate_name("power_cycle", "field")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["RocketEngine"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push<'b>(&self, segment: &'b str) -> ParseContext<'b>
    where
        'a: 'b,
    {
        let mut path: Vec<&'b str> = self.path.clone();
        path.push(segment);
        ParseContext {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "field in 'RocketEngine'" or just "model" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of the first `name = "..."` declaration of a name.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_spans(self.source.src(), name).into_iter().next()
    }

    /// Find the spans of every `name = "..."` declaration of a name.
    pub fn find_spans(&self, name: &str) -> Vec<SourceSpan> {
        find_name_spans(self.source.src(), name)
    }

    /// Find the span of a key inside an inline table or on its own line.
    pub fn find_key_span(&self, key: &str) -> Option<SourceSpan> {
        find_key_span(self.source.src(), key)
    }

    /// Validate that a name is a usable Python identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_python_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }
}

/// Python keywords that cannot be used as class or attribute names
pub(crate) const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// Check if a name is a Python reserved keyword
pub(crate) fn is_python_keyword(name: &str) -> bool {
    PYTHON_KEYWORDS.contains(&name)
}

/// Find every `name = "value"` occurrence for the given value.
pub(crate) fn find_name_spans(src: &str, name: &str) -> Vec<SourceSpan> {
    let mut spans = Vec::new();

    for quote in ['"', '\''] {
        for prefix in ["name = ", "name="] {
            let pattern = format!("{prefix}{quote}{name}{quote}");
            let skip = prefix.len() + 1;
            spans.extend(
                src.match_indices(&pattern)
                    .filter(|(pos, _)| at_line_start(src, *pos))
                    .map(|(pos, _)| SourceSpan::from((pos + skip, name.len()))),
            );
        }
    }

    spans.sort_by_key(|span| span.offset());
    spans
}

/// Find a key either at the start of a line or inside an inline table.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let inline_patterns = [
        (format!("{{ {} ", key), 2usize), // { key  (brace + space)
        (format!("{{ {}=", key), 2usize), // { key= (brace + space)
        (format!("{{{}=", key), 1usize),  // {key=  (just brace)
        (format!(", {} ", key), 2usize),  // , key  (comma + space)
        (format!(", {}=", key), 2usize),  // , key= (comma + space)
        (format!(",{}=", key), 1usize),   // ,key=  (just comma)
    ];

    for (pattern, skip) in &inline_patterns {
        if let Some(pos) = src.find(pattern) {
            return Some(SourceSpan::from((pos + skip, key.len())));
        }
    }

    for pattern in [format!("{key} ="), format!("{key}=")] {
        if let Some((pos, _)) = src
            .match_indices(&pattern)
            .find(|(pos, _)| at_line_start(src, *pos))
        {
            return Some(SourceSpan::from((pos, key.len())));
        }
    }

    // No fallback - better to have no span than point to wrong location
    None
}

/// Returns true if only whitespace precedes `pos` on its line.
fn at_line_start(src: &str, pos: usize) -> bool {
    src[..pos]
        .rsplit('\n')
        .next()
        .is_none_or(|line| line.trim().is_empty())
}

/// Validate that a name is a valid Python identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    if is_python_keyword(name) {
        return Some("name is a Python reserved keyword");
    }

    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    if name.starts_with("__") && name.ends_with("__") {
        return Some("dunder names are reserved by Python");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("engine").is_none());
        assert!(validate_identifier("power_cycle").is_none());
        assert!(validate_identifier("RocketEngine").is_none());
        assert!(validate_identifier("_private").is_none());
        assert!(validate_identifier("stage2").is_none());
    }

    #[test]
    fn test_reserved_keywords() {
        assert!(validate_identifier("class").is_some());
        assert!(validate_identifier("def").is_some());
        assert!(validate_identifier("None").is_some());
        assert!(validate_identifier("lambda").is_some());
        assert!(validate_identifier("from").is_some());
        // Rust keywords are fine in Python
        assert!(validate_identifier("fn").is_none());
        assert!(validate_identifier("struct").is_none());
    }

    #[test]
    fn test_invalid_start_character() {
        assert!(validate_identifier("2stage").is_some());
        assert!(validate_identifier("-name").is_some());
    }

    #[test]
    fn test_invalid_characters() {
        assert!(validate_identifier("power-cycle").is_some());
        assert!(validate_identifier("power cycle").is_some());
        assert!(validate_identifier("mass.kg").is_some());
    }

    #[test]
    fn test_dunder_rejected() {
        assert!(validate_identifier("__init__").is_some());
        assert!(validate_identifier("__private").is_none());
    }

    #[test]
    fn test_empty_name() {
        assert!(validate_identifier("").is_some());
    }

    #[test]
    fn test_find_name_spans() {
        let src = "[[models]]\nname = \"Satellite\"\n\n[[models]]\nname = \"Satellite\"\n";
        let spans = find_name_spans(src, "Satellite");

        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].offset(), 19);
        assert_eq!(spans[0].len(), 5);
        assert_eq!(spans[1].offset(), 46);
    }

    #[test]
    fn test_find_name_spans_ignores_other_keys() {
        let src = "title = \"x\"\nsurname = \"Satellite\"\n";
        assert!(find_name_spans(src, "Satellite").is_empty());
    }

    #[test]
    fn test_find_name_spans_single_quotes() {
        let src = "name = 'mass'";
        let spans = find_name_spans(src, "mass");
        assert_eq!(spans[0].offset(), 8);
    }

    #[test]
    fn test_find_key_span_inline_table() {
        let src = r#"options = { help_text = "x", validators = { min = 0 } }"#;
        let span = find_key_span(src, "validators").unwrap();
        assert_eq!(span.offset(), 29);
        assert_eq!(span.len(), 10);
    }

    #[test]
    fn test_find_key_span_line() {
        let src = "name = \"code\"\nmax_length = 0\n";
        let span = find_key_span(src, "max_length").unwrap();
        assert_eq!(span.offset(), 14);
    }

    #[test]
    fn test_context_for() {
        let ctx = ParseContext::new("", "modelsmith.toml");
        assert_eq!(ctx.context_for("model"), "model");
        assert_eq!(ctx.push("Satellite").context_for("field"), "field in 'Satellite'");
    }
}
