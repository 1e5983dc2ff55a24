// Integration tests for selectx
use selectx::prelude::*;
use selectx::{Installation, Phase, Range, Signal};
use std::collections::HashMap;
use std::io::Write;

fn pump(id: &str, flow: (f64, f64), efficiency: f64) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: format!("Pump {}", id),
        brand: None,
        flow: Range::new(flow.0, flow.1),
        head: Range::new(10.0, 40.0),
        power: Range::new(0.75, 1.5),
        installation: Installation::Surface,
        phase: Phase::Single,
        material: selectx::Material::CastIron,
        applications: vec![Application::WaterSupply],
        max_solids_mm: 0.0,
        efficiency,
    }
}

#[test]
fn test_validate_then_rank_builtin_catalog() {
    let catalog = Catalog::builtin().unwrap();
    let config = ScoringConfig::default();

    let query = Query::new()
        .with_flow(6.0)
        .with_head(30.0)
        .with_installation("surface")
        .with_phase("single");
    assert!(validate(&query).valid);

    let result = rank(&catalog, &query, &config);
    assert_eq!(result.total, result.matches.len());
    assert_eq!(result.matches[0].item.id, "cp-40-160");

    for m in &result.matches {
        assert_eq!(m.item.installation, Installation::Surface);
        assert!(matches!(m.item.phase, Phase::Single | Phase::Both));
        assert!(f64::from(m.score) >= config.min_score);
    }
}

#[test]
fn test_capability_and_category_filters() {
    let catalog = Catalog::builtin().unwrap();
    let query = Query::new()
        .with_application("sewage")
        .with_solids_handling(true)
        .with_phase("single");

    let result = rank(&catalog, &query, &ScoringConfig::default());
    let ids: Vec<&str> = result.matches.iter().map(|m| m.item.id.as_str()).collect();
    assert_eq!(ids, vec!["dw-vortex-50"]);
}

#[test]
fn test_unspecified_query_gives_full_credit() {
    let catalog = vec![pump("a", (1.0, 5.0), 100.0), pump("b", (20.0, 80.0), 100.0)];
    let result = rank(&catalog, &Query::new(), &ScoringConfig::default());

    assert_eq!(result.total, 2);
    // every base weight; the material preference only pays when asked for
    assert!(result.matches.iter().all(|m| m.score == 100));
}

#[test]
fn test_tolerance_scenario() {
    let catalog = vec![pump("only", (4.0, 9.0), 70.0)];
    let config = ScoringConfig::default();

    let near = rank(&catalog, &Query::new().with_flow(3.6), &config);
    assert_eq!(near.total, 1);
    let flow = near.matches[0].breakdown["flow"];
    match flow {
        Signal::Percent(p) => assert!(p > 50.0 && p < 70.0, "flow match {}", p),
        other => panic!("unexpected signal {:?}", other),
    }
    assert_eq!(range_match(Some(3.0), &catalog[0].flow, config.tolerance), 0.0);

    let far = rank(&catalog, &Query::new().with_flow(3.0), &config);
    assert_eq!(far.total, 0);
}

#[test]
fn test_identical_scores_keep_catalog_order() {
    let catalog = vec![pump("z", (4.0, 9.0), 75.0), pump("a", (4.0, 9.0), 75.0)];
    let result = rank(&catalog, &Query::new().with_flow(7.0), &ScoringConfig::default());

    assert_eq!(result.matches[0].score, result.matches[1].score);
    assert_eq!(result.matches[0].item.id, "z");
    assert_eq!(result.matches[1].item.id, "a");
}

#[test]
fn test_rank_twice_identical() {
    let catalog = Catalog::builtin().unwrap();
    let query = Query::new().with_flow(8.0).with_head(20.0);
    let config = ScoringConfig::default();

    assert_eq!(rank(&catalog, &query, &config), rank(&catalog, &query, &config));
}

#[test]
fn test_validation_lists_every_field() {
    let query = Query::new()
        .with_flow(0.0)
        .with_head(-5.0)
        .with_phase("four");
    let report = validate(&query);

    assert!(!report.valid);
    assert_eq!(report.errors.len(), 3);
    let messages = report.messages();
    assert!(messages[0].starts_with("flow"));
    assert!(messages[1].starts_with("head"));
    assert!(messages[2].contains("phase"));
}

#[test]
fn test_listings_on_empty_catalog() {
    let empty: Vec<CatalogItem> = Vec::new();
    assert!(top_rated(&empty, 10).is_empty());
    assert!(suggest_by_category(&empty, Application::Heating, 10).is_empty());
    assert_eq!(rank(&empty, &Query::new(), &ScoringConfig::default()).total, 0);
}

#[test]
fn test_suggest_and_top_rated_on_builtin() {
    let catalog = Catalog::builtin().unwrap();

    let heating = suggest_by_category(&catalog, Application::Heating, 10);
    assert!(!heating.is_empty());
    assert!(heating.windows(2).all(|w| w[0].efficiency >= w[1].efficiency));

    let top = top_rated(&catalog, 3);
    assert_eq!(top.len(), 3);
    // 77 + 4 applications * 5
    assert_eq!(top[0].id, "bs-3x-inox");
}

#[test]
fn test_weight_overrides() {
    let catalog = vec![pump("centered", (2.0, 10.0), 10.0), pump("efficient", (6.0, 12.0), 100.0)];
    let query = Query::new().with_flow(6.0);

    let ranker = Ranker::new(ScoringConfig::default());
    assert_eq!(ranker.rank(&catalog, &query).matches[0].item.id, "efficient");

    let flow_heavy = ranker.with_weights(&HashMap::from([
        ("flow".to_string(), 90.0),
        ("efficiency".to_string(), 0.0),
    ]));
    assert_eq!(flow_heavy.rank(&catalog, &query).matches[0].item.id, "centered");
    // the original ranker is untouched
    assert_eq!(ranker.config().weight("flow"), 30.0);
}

#[test]
fn test_explanation_and_stats() {
    let catalog = Catalog::builtin().unwrap();
    let query = Query::new().with_flow(5.0).with_preferred_material("stainless_steel");
    let result = rank(&catalog, &query, &ScoringConfig::default());
    assert!(!result.is_empty());

    let lines = explain(&result.matches[0]);
    assert!(lines.iter().any(|l| l.starts_with("flow: ")));
    assert!(lines.iter().any(|l| l.starts_with("material: ")));

    let stats = RankStats::compute(&result, catalog.len());
    assert_eq!(stats.candidates_count, catalog.len());
    assert_eq!(stats.results_count, result.total);
    assert_eq!(stats.best_score, result.matches[0].score);
}

#[test]
fn test_explanation_only_judges_requested_criteria() {
    let catalog = Catalog::builtin().unwrap();
    let query = Query::new().with_flow(6.0).with_head(30.0);
    let result = rank(&catalog, &query, &ScoringConfig::default());
    assert!(!result.is_empty());

    for m in &result.matches {
        assert!(!m.breakdown.contains_key("material"));
        assert_eq!(m.breakdown["application"], Signal::Unspecified);
        assert!(matches!(m.breakdown["flow"], Signal::Percent(_)));
    }

    let lines = explain(&result.matches[0]);
    assert!(lines.contains(&"application: not specified".to_string()));
    assert!(!lines.iter().any(|l| l.starts_with("material")));

    let stats = RankStats::compute(&result, catalog.len());
    assert!(
        matches!(stats.weakest_criterion.as_deref(), None | Some("flow") | Some("head")),
        "weakest {:?}",
        stats.weakest_criterion
    );
}

#[test]
fn test_ranker_validation_matches_rank_limits() {
    let catalog = Catalog::builtin().unwrap();
    let mut config = ScoringConfig::default();
    config.limits.max_flow = 20.0;
    let ranker = Ranker::new(config);
    let query = Query::new().with_flow(25.0);

    assert!(!ranker.validate(&query).valid);
    // the rejected flow is ignored, so every item is admitted
    assert_eq!(ranker.rank(&catalog, &query).total, ranker.rank(&catalog, &Query::new()).total);
}

#[test]
fn test_concurrent_ranking() {
    let catalog = Catalog::builtin().unwrap();
    let config = ScoringConfig::default();
    let expected = rank(&catalog, &Query::new().with_head(30.0), &config);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| rank(&catalog, &Query::new().with_head(30.0), &config)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_load_catalog_and_config_from_files() {
    let temp_dir = tempfile::tempdir().unwrap();

    let catalog_path = temp_dir.path().join("catalog.json");
    let items = vec![pump("p1", (4.0, 9.0), 70.0), pump("p2", (10.0, 20.0), 80.0)];
    std::fs::write(&catalog_path, serde_json::to_string(&items).unwrap()).unwrap();

    let config_path = temp_dir.path().join("scoring.json");
    let mut file = std::fs::File::create(&config_path).unwrap();
    file.write_all(br#"{"tolerance": 0.05, "min_score": 0, "weights": {"flow": 100}}"#).unwrap();

    let catalog = Catalog::from_path(&catalog_path).unwrap();
    let config = ScoringConfig::from_path(&config_path).unwrap();
    assert_eq!(config.weight("head"), 0.0);

    // 3.9 is inside 5% of min=4 only for p1
    let result = rank(&catalog, &Query::new().with_flow(3.9), &config);
    assert_eq!(result.total, 1);
    assert_eq!(result.matches[0].item.id, "p1");
    assert_eq!(result.matches[0].breakdown.len(), 1);
}

#[test]
fn test_invalid_catalog_file_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("bad.json");

    let mut bad = pump("p1", (4.0, 9.0), 70.0);
    bad.flow = Range::new(9.0, 4.0);
    std::fs::write(&path, serde_json::to_string(&vec![bad]).unwrap()).unwrap();

    assert!(matches!(Catalog::from_path(&path), Err(Error::InvalidRange { .. })));
    assert!(matches!(
        Catalog::from_path(temp_dir.path().join("missing.json")),
        Err(Error::Io(_))
    ));
}
