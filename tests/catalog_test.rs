use garud::catalog::dossier::{is_official, official_dossier};
use garud::catalog::seed::{seed_edges, seed_nodes};
use garud::{
    Catalog, CatalogError, DossierConfig, DossierGenerator, EntityKind, RelationKind, RngChoice,
    ScriptedChoice,
};
use chrono::NaiveDate;

fn dossiers() -> DossierGenerator {
    DossierGenerator::with_today(
        DossierConfig::default(),
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
    )
}

fn fixture_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/small_catalog.json")
}

#[test]
fn test_builtin_catalog_has_no_dangling_edges() {
    let catalog = Catalog::builtin(&dossiers(), &mut RngChoice::from_seed(1));
    assert_eq!(catalog.node_count(), seed_nodes().len());
    assert_eq!(catalog.edge_count(), seed_edges().len());
    assert!(catalog.snapshot().check_invariants().is_ok());

    for edge in catalog.all_edges() {
        assert!(catalog.node(edge.source.as_str()).is_some(), "{} has no source", edge.id);
        assert!(catalog.node(edge.target.as_str()).is_some(), "{} has no target", edge.id);
    }
}

#[test]
fn test_every_builtin_node_has_a_dossier() {
    let catalog = Catalog::builtin(&dossiers(), &mut RngChoice::from_seed(2));
    let config = DossierConfig::default();
    for node in catalog.all_nodes() {
        let count = node.document_count() as u32;
        if is_official(&node.label) {
            assert_eq!(count, 6, "{}", node.id);
        } else {
            assert!(
                (config.min_documents..=config.max_documents).contains(&count),
                "{} has {} documents",
                node.id,
                count
            );
        }
    }
}

#[test]
fn test_official_dossier_is_fixed() {
    let catalog = Catalog::builtin(&dossiers(), &mut RngChoice::from_seed(3));
    let mofa = catalog.node("ORG-MOFA-001").unwrap();
    assert_eq!(mofa.dossier, official_dossier());

    let ids: Vec<&str> = mofa.dossier.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["MOFA-DOC-001", "MOFA-DOC-002", "MOFA-DOC-003", "MOFA-DOC-004", "MOFA-DOC-005", "MOFA-DOC-006"]
    );
    assert!(mofa.dossier.iter().all(|d| d.file_name.is_some()));
}

#[test]
fn test_generated_documents_are_not_in_the_future() {
    let generator = dossiers();
    let catalog = Catalog::builtin(&generator, &mut RngChoice::from_seed(4));
    let earliest = DossierConfig::default().earliest_date;
    for node in catalog.all_nodes().filter(|n| !is_official(&n.label)) {
        for doc in &node.dossier {
            assert!(doc.date >= earliest && doc.date <= generator.today(), "{} {}", doc.id, doc.date);
            assert!(doc.id.starts_with("DOC-"));
            assert!(doc.file_name.is_none());
        }
    }
}

#[test]
fn test_scripted_catalog_is_deterministic() {
    let a = Catalog::builtin(&dossiers(), &mut ScriptedChoice::new([3, 1, 4, 1, 5]));
    let b = Catalog::builtin(&dossiers(), &mut ScriptedChoice::new([3, 1, 4, 1, 5]));
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_load_catalog_from_json_file() {
    let catalog = Catalog::from_path(fixture_path(), &dossiers(), &mut RngChoice::from_seed(5)).unwrap();

    assert_eq!(catalog.node_count(), 3);
    assert_eq!(catalog.edge_count(), 2);

    let courier = catalog.node("B").unwrap();
    assert_eq!(courier.kind, EntityKind::Person);
    assert_eq!(courier.threat, Some(40));
    assert!(courier.document_count() >= 6);

    let account = catalog.node("C").unwrap();
    assert_eq!(account.detail("Bank"), Some("Offshore"));

    let ac = catalog.snapshot().edge("ac").unwrap();
    assert_eq!(ac.relation(), RelationKind::Financial);
    assert_eq!(catalog.snapshot().edge("ab").unwrap().relation(), RelationKind::Standard);

    // Topic phrases are normalized on load
    assert!(catalog.topics().group("alpha").is_some());
}

#[test]
fn test_dangling_edge_in_json_is_rejected() {
    let json = r#"{
        "nodes": [{"id": "A", "label": "Alpha", "type": "PERSON"}],
        "edges": [{"id": "x", "source": "A", "target": "Z", "label": "KNOWS"}]
    }"#;
    let err = Catalog::from_json_str(json, &dossiers(), &mut RngChoice::from_seed(6)).unwrap_err();
    assert!(matches!(err, CatalogError::Invalid(_)));
}

#[test]
fn test_missing_catalog_file() {
    let err = Catalog::from_path("/definitely/not/here.json", &dossiers(), &mut RngChoice::from_seed(7))
        .unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn test_exported_catalog_reloads_unchanged() {
    let catalog = Catalog::from_path(fixture_path(), &dossiers(), &mut RngChoice::from_seed(8)).unwrap();

    // Nodes now carry dossiers, so reloading must not generate new ones
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.json");
    let (nodes, edges) = catalog.snapshot().clone().into_parts();
    let export = serde_json::json!({
        "nodes": nodes,
        "edges": edges,
        "topics": catalog.topics(),
    });
    std::fs::write(&path, serde_json::to_string_pretty(&export).unwrap()).unwrap();

    let reloaded = Catalog::from_path(&path, &dossiers(), &mut RngChoice::from_seed(99)).unwrap();
    assert_eq!(reloaded.snapshot(), catalog.snapshot());
    assert_eq!(reloaded.topics(), catalog.topics());
}
