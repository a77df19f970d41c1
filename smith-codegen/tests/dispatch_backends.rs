//! End-to-end dispatch through the real backends.

use modelsmith_codegen::{
    ArtifactOutcome, BackendOutcome, BackendRegistry, Dispatcher, Error, FsSink, GenerateOptions,
    MemorySink,
};
use modelsmith_codegen_django::DjangoBackend;
use modelsmith_codegen_peewee::PeeweeBackend;
use modelsmith_codegen_sqlalchemy::SqlAlchemyBackend;
use modelsmith_ir::{BackendKind, FieldType, SchemaField, SchemaModel};

fn all_backends() -> Dispatcher {
    Dispatcher::new(
        BackendRegistry::new()
            .with(DjangoBackend::new())
            .with(PeeweeBackend::new())
            .with(SqlAlchemyBackend::new()),
    )
}

fn rocket_engine(backends: &[BackendKind]) -> SchemaModel {
    backends.iter().fold(
        SchemaModel::new("RocketEngine")
            .with_field(SchemaField::new("name", FieldType::Text).with_max_length(32))
            .with_field(SchemaField::new("thrust", FieldType::Float).optional()),
        |model, kind| model.with_backend(*kind),
    )
}

fn launch_vehicle(backends: &[BackendKind]) -> SchemaModel {
    backends.iter().fold(
        SchemaModel::new("LaunchVehicle").with_field(
            SchemaField::new("engine", FieldType::Integer).with_option("foreign_key", "RocketEngine"),
        ),
        |model, kind| model.with_backend(*kind),
    )
}

#[test]
fn test_every_backend_writes_its_artifacts() {
    let models = vec![
        rocket_engine(&BackendKind::ALL),
        launch_vehicle(&[BackendKind::Django, BackendKind::SqlAlchemy]),
    ];
    let mut sink = MemorySink::new();

    let report = all_backends().dispatch(&models, &GenerateOptions::default(), &mut sink);

    assert!(report.is_success());
    assert_eq!(
        sink.artifacts(BackendKind::Django),
        vec![
            "models.py",
            "serializers.py",
            "views_class.py",
            "urls_class.py",
            "views_func.py",
            "urls_func.py",
        ]
    );
    assert_eq!(sink.artifacts(BackendKind::Peewee), vec!["models.py"]);
    assert_eq!(
        sink.artifacts(BackendKind::SqlAlchemy),
        vec!["declarative_models.py", "classical_models.py"]
    );
    assert_eq!(report.emitted_count(), 9);
}

#[test]
fn test_no_cross_contamination() {
    let models = vec![
        rocket_engine(&[BackendKind::Peewee]),
        launch_vehicle(&[BackendKind::Django]),
    ];
    let mut sink = MemorySink::new();

    all_backends().dispatch(&models, &GenerateOptions::default(), &mut sink);

    let django = sink.get(BackendKind::Django, "models.py").unwrap();
    let peewee = sink.get(BackendKind::Peewee, "models.py").unwrap();
    assert!(django.contains("class LaunchVehicle(models.Model):"));
    assert!(!django.contains("RocketEngine(models.Model)"));
    assert!(peewee.contains("class RocketEngine(Model):"));
    assert!(!peewee.contains("LaunchVehicle"));
    assert!(sink.artifacts(BackendKind::SqlAlchemy).is_empty());
}

#[test]
fn test_failing_backend_leaves_others_intact() {
    let models = vec![
        rocket_engine(&BackendKind::ALL),
        SchemaModel::new("Burn")
            .with_backend(BackendKind::Peewee)
            .with_field(SchemaField::new("duration", FieldType::Duration)),
    ];
    let mut sink = MemorySink::new();

    let report = all_backends().dispatch(&models, &GenerateOptions::default(), &mut sink);

    let peewee = report.backend(BackendKind::Peewee).unwrap();
    assert!(matches!(
        peewee.outcome,
        BackendOutcome::Failed(Error::UnmappedType { ref model, .. }) if model == "Burn"
    ));
    assert!(peewee.artifacts.is_empty());
    assert!(sink.artifacts(BackendKind::Peewee).is_empty());

    assert!(report.backend(BackendKind::Django).unwrap().outcome.is_success());
    assert!(report.backend(BackendKind::SqlAlchemy).unwrap().outcome.is_success());
    assert_eq!(sink.artifacts(BackendKind::SqlAlchemy).len(), 2);
}

#[test]
fn test_unavailable_backend() {
    let dispatcher = Dispatcher::new(BackendRegistry::new().with(DjangoBackend::new()));
    let models = vec![rocket_engine(&[BackendKind::Django, BackendKind::SqlAlchemy])];
    let mut sink = MemorySink::new();

    let report = dispatcher.dispatch(&models, &GenerateOptions::default(), &mut sink);

    assert!(!report.is_success());
    assert!(matches!(
        report.backend(BackendKind::SqlAlchemy).unwrap().outcome,
        BackendOutcome::Unavailable
    ));
    assert!(report.backend(BackendKind::Django).unwrap().outcome.is_success());
    assert_eq!(sink.artifacts(BackendKind::Django).len(), 6);
}

#[test]
fn test_variant_toggles() {
    let models = vec![rocket_engine(&[BackendKind::Django])];
    let options = GenerateOptions {
        class_based: false,
        function_based: true,
    };
    let mut sink = MemorySink::new();

    all_backends().dispatch(&models, &options, &mut sink);

    assert_eq!(
        sink.artifacts(BackendKind::Django),
        vec!["models.py", "serializers.py", "views_func.py", "urls_func.py"]
    );
}

#[test]
fn test_filesystem_layout_and_rerun() {
    let models = vec![
        rocket_engine(&[BackendKind::Django, BackendKind::Peewee]),
        launch_vehicle(&[BackendKind::SqlAlchemy]),
    ];
    let dispatcher = all_backends();

    let dir = tempfile::TempDir::new().unwrap();
    let base = dir.path();

    let mut sink = FsSink::new(base);
    let report = dispatcher.dispatch(&models, &GenerateOptions::default(), &mut sink);
    assert!(report.is_success());

    assert!(base.join("django").join("models.py").is_file());
    assert!(base.join("django").join("urls_func.py").is_file());
    assert!(base.join("peewee").join("models.py").is_file());
    assert!(base.join("sqlalchemy").join("classical_models.py").is_file());
    assert!(!base.join("peewee").join("serializers.py").exists());

    let peewee = std::fs::read_to_string(base.join("peewee").join("models.py")).unwrap();
    assert!(peewee.contains("name = CharField(max_length=32)"));

    let rerun = dispatcher.dispatch(&models, &GenerateOptions::default(), &mut sink);
    let django = rerun.backend(BackendKind::Django).unwrap();
    assert!(
        django
            .artifacts
            .iter()
            .all(|a| a.outcome == ArtifactOutcome::Unchanged)
    );
}
