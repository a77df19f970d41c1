//! Code generation building blocks.

mod code_builder;

pub use code_builder::CodeBuilder;

/// One indentation level of generated Python (PEP 8).
const INDENT: &str = "    ";
