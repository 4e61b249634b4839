//! Tests for loading and validating case catalogs.
mod common;
use common::*;
use sleuth::prelude::*;

const TWO_CASE_JSON: &str = r#"{
    "level": { "completionRatio": 0.5, "completionDelayMs": 10 },
    "cases": [
        {
            "id": "a",
            "title": "First",
            "evidence": [
                { "id": "e1", "type": "witness", "description": "saw it", "importance": "low" },
                { "id": "e2", "type": "physical", "description": "a clue", "importance": "high" }
            ],
            "targetFlowchart": [
                { "id": "s", "type": "start", "content": "Go", "x": 1, "y": 2, "connections": ["e"] },
                { "id": "e", "type": "end", "content": "Done", "connections": [] }
            ],
            "estimatedDuration": 5
        },
        { "id": "b", "predecessor": "a", "title": "Second" }
    ]
}"#;

#[test]
fn test_rookie_catalog_loads_in_order() {
    let catalog = rookie_catalog();
    let ids: Vec<_> = catalog.ids().collect();
    assert_eq!(ids, [FIRST_CASE, SECOND_CASE, THIRD_CASE, FOURTH_CASE]);
    assert_eq!(catalog.level().completion_ratio, 0.75);
    assert_eq!(catalog.level().completion_delay_ms, 2000);

    let first = catalog.get(FIRST_CASE).unwrap();
    assert_eq!(first.title, "Missing Lunch Mystery");
    assert_eq!(first.evidence.len(), 4);
    assert_eq!(first.hints.len(), 4);
    assert_eq!(first.estimated_minutes, 15);
    assert!(first.target_pseudocode.starts_with("BEGIN investigation"));
    assert!(validate_flowchart(&first.target_flowchart));
}

#[test]
fn test_predecessor_and_successor_lookup() {
    let catalog = rookie_catalog();
    assert!(catalog.predecessor_of(FIRST_CASE).is_none());
    assert_eq!(catalog.predecessor_of(THIRD_CASE).unwrap().id, SECOND_CASE);
    assert_eq!(catalog.successor_of(THIRD_CASE).unwrap().id, FOURTH_CASE);
    assert!(catalog.successor_of(FOURTH_CASE).is_none());
    assert!(catalog.predecessor_of("missing").is_none());
}

#[test]
fn test_document_fields_are_mapped() {
    let catalog = Catalog::from_json(TWO_CASE_JSON).expect("valid document");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.level().completion_ratio, 0.5);

    let first = catalog.get("a").unwrap();
    assert_eq!(first.estimated_minutes, 5);
    assert_eq!(first.target_flowchart[0].role, NodeRole::Start);
    assert_eq!(first.target_flowchart[0].label, "Go");
    assert_eq!(first.target_flowchart[0].position, Position { x: 1.0, y: 2.0 });
    assert_eq!(first.target_flowchart[0].connections, ["e"]);
    assert_eq!(first.evidence[1].kind, EvidenceKind::Physical);

    let second = catalog.get("b").unwrap();
    assert!(second.evidence.is_empty());
    assert!(second.hints.is_empty());
}

#[test]
fn test_level_section_is_optional() {
    let json = r#"{ "cases": [ { "id": "only", "title": "Only" } ] }"#;
    let catalog = Catalog::from_json(json).unwrap();
    assert_eq!(*catalog.level(), LevelConfig::default());
}

#[test]
fn test_evidence_sorted_by_importance() {
    let catalog = rookie_catalog();
    let lost_pet = catalog.get(SECOND_CASE).unwrap();
    let ordered: Vec<_> = lost_pet
        .evidence_by_importance()
        .iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(
        ordered,
        [
            "witness-pet-1",
            "physical-pet-1",
            "witness-pet-2",
            "physical-pet-2",
            "witness-pet-3"
        ]
    );

    let catalog = Catalog::from_json(TWO_CASE_JSON).unwrap();
    let first = catalog.get("a").unwrap();
    assert_eq!(first.evidence_by_importance()[0].id, "e2");
}

#[test]
fn test_malformed_json_is_rejected() {
    let err = Catalog::from_json("{ not json").unwrap_err();
    assert!(matches!(err, CatalogError::JsonParseError(_)));
}

#[test]
fn test_unknown_node_role_is_rejected() {
    let json = r#"{ "cases": [ { "id": "a", "title": "A",
        "targetFlowchart": [ { "id": "n", "type": "loop", "content": "?" } ] } ] }"#;
    assert!(matches!(
        Catalog::from_json(json),
        Err(CatalogError::JsonParseError(_))
    ));
}

#[test]
fn test_empty_catalog_is_rejected() {
    assert_eq!(
        Catalog::from_json(r#"{ "cases": [] }"#).unwrap_err(),
        CatalogError::EmptyCatalog
    );
}

#[test]
fn test_duplicate_case_id_is_rejected() {
    let err = Catalog::new(LevelConfig::default(), vec![bare_case("a"), bare_case("a")])
        .unwrap_err();
    assert_eq!(err, CatalogError::DuplicateCaseId("a".to_string()));
}

#[test]
fn test_blank_case_id_is_rejected() {
    let err = Catalog::new(LevelConfig::default(), vec![bare_case("a"), bare_case("  ")])
        .unwrap_err();
    assert_eq!(err, CatalogError::EmptyCaseId { position: 1 });
}

#[test]
fn test_unknown_predecessor_is_rejected() {
    let json = r#"{ "cases": [
        { "id": "a", "title": "A" },
        { "id": "b", "title": "B", "predecessor": "ghost" }
    ] }"#;
    match Catalog::from_json(json).unwrap_err() {
        CatalogError::UnknownPredecessor {
            case_id,
            predecessor,
        } => {
            assert_eq!(case_id, "b");
            assert_eq!(predecessor, "ghost");
        }
        other => panic!("Expected UnknownPredecessor, got {:?}", other),
    }
}

#[test]
fn test_out_of_order_predecessor_is_rejected() {
    let json = r#"{ "cases": [
        { "id": "a", "title": "A" },
        { "id": "b", "title": "B", "predecessor": "a" },
        { "id": "c", "title": "C", "predecessor": "a" }
    ] }"#;
    assert_eq!(
        Catalog::from_json(json).unwrap_err(),
        CatalogError::PredecessorOutOfOrder {
            case_id: "c".to_string(),
            expected: "b".to_string(),
            found: "a".to_string(),
        }
    );
}

#[test]
fn test_first_case_cannot_have_predecessor() {
    let json = r#"{ "cases": [
        { "id": "a", "title": "A", "predecessor": "b" },
        { "id": "b", "title": "B" }
    ] }"#;
    assert!(matches!(
        Catalog::from_json(json),
        Err(CatalogError::PredecessorOutOfOrder { .. })
    ));
}

#[test]
fn test_duplicate_evidence_is_rejected() {
    let mut case = bare_case("a");
    let clue = Evidence {
        id: "e".to_string(),
        kind: EvidenceKind::Witness,
        description: "twice".to_string(),
        importance: Importance::Low,
    };
    case.evidence = vec![clue.clone(), clue];
    assert!(matches!(
        Catalog::new(LevelConfig::default(), vec![case]),
        Err(CatalogError::DuplicateEvidenceId { .. })
    ));
}

#[test]
fn test_dangling_target_connection_is_rejected() {
    let mut case = bare_case("a");
    case.target_flowchart = vec![FlowchartNode::new("s", NodeRole::Start, "Go").connect_to("nowhere")];
    match Catalog::new(LevelConfig::default(), vec![case]).unwrap_err() {
        CatalogError::DanglingConnection {
            node_id, target, ..
        } => {
            assert_eq!(node_id, "s");
            assert_eq!(target, "nowhere");
        }
        other => panic!("Expected DanglingConnection, got {:?}", other),
    }
}

#[test]
fn test_invalid_completion_ratio_is_rejected() {
    for ratio in [0.0, -0.5, 1.5, f64::NAN] {
        let level = LevelConfig::default().with_completion_ratio(ratio);
        assert!(matches!(
            Catalog::new(level, vec![bare_case("a")]),
            Err(CatalogError::InvalidCompletionRatio(_))
        ));
    }
    let full = LevelConfig::default().with_completion_ratio(1.0);
    assert!(rookie_catalog().with_level(full).is_ok());
}

#[test]
fn test_missing_file_reports_path() {
    let err = Catalog::from_file("does/not/exist.json").unwrap_err();
    match err {
        CatalogError::Io { path, .. } => assert!(path.contains("exist.json")),
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn test_custom_format_through_into_catalog() {
    struct Titles(Vec<&'static str>);

    impl IntoCatalog for Titles {
        fn into_catalog(self) -> std::result::Result<Catalog, CatalogError> {
            let cases = self
                .0
                .into_iter()
                .enumerate()
                .map(|(i, title)| {
                    let mut case = bare_case(&format!("t{}", i));
                    case.title = title.to_string();
                    case
                })
                .collect();
            Catalog::new(LevelConfig::default(), cases)
        }
    }

    let catalog = Titles(vec!["One", "Two"]).into_catalog().unwrap();
    assert_eq!(catalog.cases()[1].title, "Two");
}
