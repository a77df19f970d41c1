//! Core utilities and types for modelsmith.
//!
//! This crate provides the file-writing primitive and the naming helpers
//! shared by the code generators.

mod file;
mod utils;

// File operations
pub use file::{File, WriteResult};
/// First line of every generated artifact.
pub const GENERATED_HEADER: &str = "# Generated by modelsmith. Do not edit by hand.";

// String utilities
pub use utils::to_snake_case;
