//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "modelsmith.toml")
    }
}

impl Manifest {
    /// Parse a modelsmith.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a manifest from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    for (index, model) in manifest.models.iter().enumerate() {
        if manifest.models[..index].iter().any(|m| m.name == model.name) {
            let spans = ctx.find_spans(&model.name);
            return Err(ctx.source_context().duplicate_error(
                &model.name,
                "model",
                spans.first().copied(),
                spans.get(1).copied(),
            ));
        }

        model.validate(&ctx)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use modelsmith_ir::{BackendKind, FieldType, OptionValue};

    use super::*;

    const ROCKETS: &str = r#"
[output]
dir = "out"
function_based = false

[[models]]
name = "RocketEngine"
backends = ["django", "peewee", "sqlalchemy"]

[[models.fields]]
name = "name"
type = "text"
title = "Engine name"

[[models.fields]]
name = "power_cycle"
type = "text"
required = false
default = "gas-generator"
options = { help_text = "engine cycle" }

[[models]]
name = "LaunchVehicle"
backends = ["django"]

[[models.fields]]
name = "engine"
type = "text"
options = { foreign_key = "RocketEngine" }
"#;

    #[test]
    fn test_parse_manifest() {
        let manifest: Manifest = ROCKETS.parse().unwrap();

        assert_eq!(manifest.output.dir, Path::new("out"));
        assert!(manifest.output.class_based);
        assert!(!manifest.output.function_based);
        assert_eq!(manifest.models.len(), 2);
        assert_eq!(manifest.model_count(BackendKind::Django), 2);
        assert_eq!(manifest.model_count(BackendKind::Peewee), 1);
        assert!(manifest.model("LaunchVehicle").is_some());
    }

    #[test]
    fn test_schema_models() {
        let manifest: Manifest = ROCKETS.parse().unwrap();
        let models = manifest.schema_models();

        assert_eq!(models[0].name, "RocketEngine");
        let cycle = models[0].field("power_cycle").unwrap();
        assert_eq!(cycle.field_type, FieldType::Text);
        assert!(!cycle.required);
        assert_eq!(cycle.default, Some(OptionValue::from("gas-generator")));
    }

    #[test]
    fn test_empty_manifest_uses_defaults() {
        let manifest: Manifest = "".parse().unwrap();

        assert_eq!(manifest.output.dir, Path::new("generated"));
        assert!(manifest.output.class_based);
        assert!(manifest.models.is_empty());
    }

    #[test]
    fn test_unknown_field_type() {
        let src = r#"
[[models]]
name = "Satellite"

[[models.fields]]
name = "payload"
type = "hologram"
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_backend() {
        let src = r#"
[[models]]
name = "Satellite"
backends = ["rails"]
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_duplicate_model() {
        let src = r#"
[[models]]
name = "Satellite"

[[models]]
name = "Satellite"
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        match *err {
            Error::DuplicateName {
                first_span,
                second_span,
                ..
            } => {
                assert!(first_span.is_some());
                assert!(second_span.is_some());
                assert!(first_span.unwrap().offset() < second_span.unwrap().offset());
            }
            other => panic!("expected DuplicateName, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_field() {
        let src = r#"
[[models]]
name = "Satellite"

[[models.fields]]
name = "mass"
type = "float"

[[models.fields]]
name = "mass"
type = "int"
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::DuplicateName { ref context, .. } if context.contains("Satellite")));
    }

    #[test]
    fn test_keyword_field_name() {
        let src = r#"
[[models]]
name = "Satellite"

[[models.fields]]
name = "class"
type = "text"
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }

    #[test]
    fn test_table_option_rejected() {
        let src = r#"
[[models]]
name = "Satellite"

[[models.fields]]
name = "mass"
type = "float"
options = { validators = { min = 0 } }
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::InvalidOptionValue { ref option, .. } if option == "validators"));
    }

    #[test]
    fn test_non_string_relation_target_rejected() {
        let src = r#"
[[models]]
name = "LaunchVehicle"

[[models.fields]]
name = "engine"
type = "int"
options = { foreign_key = 3 }
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        match *err {
            Error::InvalidRelationTarget {
                ref marker,
                ref field,
                span,
                ..
            } => {
                assert_eq!(marker, "foreign_key");
                assert_eq!(field, "engine");
                assert!(span.is_some());
            }
            other => panic!("expected InvalidRelationTarget, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_relation_target_rejected() {
        let src = r#"
[[models]]
name = "Mission"

[[models.fields]]
name = "crew"
type = "text"
options = { many_key = "" }
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::InvalidRelationTarget { ref marker, .. } if marker == "many_key"));
    }

    #[test]
    fn test_zero_max_length_rejected() {
        let src = r#"
[[models]]
name = "Satellite"

[[models.fields]]
name = "code"
type = "text"
max_length = 0
"#;
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = Manifest::from_file(dir.path().join("modelsmith.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
