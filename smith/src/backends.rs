//! Backends compiled into this build.
//!
//! Each backend sits behind a cargo feature of the same name; a manifest
//! that targets a missing one is reported as unavailable.

use modelsmith_codegen::{BackendRegistry, Dispatcher};
use modelsmith_ir::BackendKind;

/// Build a registry of every enabled backend.
pub fn registry() -> BackendRegistry {
    #[allow(unused_mut)]
    let mut registry = BackendRegistry::new();

    #[cfg(feature = "django")]
    registry.register(modelsmith_codegen_django::DjangoBackend::new());
    #[cfg(feature = "peewee")]
    registry.register(modelsmith_codegen_peewee::PeeweeBackend::new());
    #[cfg(feature = "sqlalchemy")]
    registry.register(modelsmith_codegen_sqlalchemy::SqlAlchemyBackend::new());

    registry
}

/// A dispatcher over [`registry`].
pub fn dispatcher() -> Dispatcher {
    Dispatcher::new(registry())
}

/// Cargo feature that enables a backend.
pub fn feature_name(kind: BackendKind) -> &'static str {
    kind.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(all(feature = "django", feature = "peewee", feature = "sqlalchemy"))]
    fn test_default_build_has_every_backend() {
        let registry = registry();

        for kind in BackendKind::ALL {
            assert!(registry.contains(kind), "{kind} missing");
        }
    }

    #[test]
    fn test_feature_names() {
        assert_eq!(feature_name(BackendKind::SqlAlchemy), "sqlalchemy");
    }
}
