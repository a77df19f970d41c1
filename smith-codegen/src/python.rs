//! Python source helpers shared by the backend templates.

use modelsmith_ir::OptionValue;

/// Render an option value as a Python expression.
///
/// Strings become single-quoted literals, `Expr` values are emitted verbatim.
pub fn literal(value: &OptionValue) -> String {
    match value {
        OptionValue::Str(s) => string_literal(s),
        OptionValue::Int(i) => i.to_string(),
        OptionValue::Float(f) => float_literal(*f),
        OptionValue::Bool(true) => "True".to_string(),
        OptionValue::Bool(false) => "False".to_string(),
        OptionValue::List(items) => {
            let items: Vec<String> = items.iter().map(literal).collect();
            format!("[{}]", items.join(", "))
        }
        OptionValue::Expr(expr) => expr.clone(),
    }
}

/// Quote a string as a single-quoted Python literal.
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn float_literal(f: f64) -> String {
    if f.is_nan() {
        "float('nan')".to_string()
    } else if f.is_infinite() {
        if f > 0.0 {
            "float('inf')".to_string()
        } else {
            "float('-inf')".to_string()
        }
    } else if f.fract() == 0.0 {
        format!("{f:.1}")
    } else {
        f.to_string()
    }
}

/// Render `name=value` pairs joined by commas.
pub fn kwargs<'a>(options: impl IntoIterator<Item = &'a (String, OptionValue)>) -> String {
    options
        .into_iter()
        .map(|(name, value)| format!("{}={}", name, literal(value)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Join positional and keyword arguments into one argument list.
pub fn arguments(positional: &[String], keywords: &str) -> String {
    let mut parts: Vec<&str> = positional.iter().map(String::as_str).collect();
    if !keywords.is_empty() {
        parts.push(keywords);
    }
    parts.join(", ")
}
