//! Tests for match configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        name = "Square dance"

        [points]
        type = "explicit"
        points = [
            { x = 0.0, y = 0.0, label = "A" },
            { x = 1.0, y = 0.0 },
            { x = 1.0, y = 1.0 },
            { x = 0.0, y = 1.0 },
        ]

        [[participants]]
        solver = "brute_force"

        [[participants]]
        name = "Greedy"
        solver = "nearest_neighbor"
        start = 2
    "#;

    let config = MatchConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.name.as_deref(), Some("Square dance"));
    assert_eq!(config.participants.len(), 2);
    assert_eq!(config.participants[0].solver, SolverKind::BruteForce);
    assert_eq!(config.participants[1].params().start_index(), 2);
    assert_eq!(config.participants[1].display_name(1), "Greedy");

    let points = config.resolve_points().unwrap();
    assert_eq!(points.len(), 4);
    assert_eq!(points[0].label(), Some("A"));
    assert_eq!(points[1].label(), None);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        points:
          type: preset
          name: world
        participants:
          - mst_two_approx
          - solver: held_karp
            name: Exact
    "#;

    let config = MatchConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.participants[0].solver, SolverKind::MstTwoApprox);
    assert_eq!(config.participants[0].display_name(0), "Player 1");
    assert_eq!(config.participants[1].display_name(1), "Exact");
    assert_eq!(config.resolve_points().unwrap().len(), 10);
}

#[test]
fn test_short_aliases_deserialize() {
    let toml = r#"
        participants = ["bruteforce", "nearest", "twoopt", "mst2approx", "heldkarp"]
    "#;

    let config = MatchConfig::from_toml_str(toml).unwrap();
    let kinds: Vec<_> = config.participants.iter().map(|p| p.solver).collect();
    assert_eq!(kinds, SolverKind::ALL.to_vec());
}

#[test]
fn test_unknown_solver_is_rejected() {
    let toml = r#"participants = ["genetic"]"#;
    assert!(matches!(
        MatchConfig::from_toml_str(toml),
        Err(ConfigError::Domain(SalesmanError::UnknownSolver(name))) if name == "genetic"
    ));

    let yaml = r#"
        participants:
          - name: Ana
            solver: simulated_annealing
    "#;
    assert!(matches!(
        MatchConfig::from_yaml_str(yaml),
        Err(ConfigError::Domain(SalesmanError::UnknownSolver(name))) if name == "simulated_annealing"
    ));

    let err = "genetic".parse::<SolverKind>().unwrap_err();
    assert_eq!(err, SalesmanError::UnknownSolver("genetic".to_string()));
    assert!(err.is_configuration_error());
}

#[test]
fn test_solver_names_ignore_case_in_files() {
    let toml = r#"
        [[participants]]
        solver = "Held_Karp"

        [[participants]]
        solver = "TwoOpt"
    "#;
    let config = MatchConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.participants[0].solver, SolverKind::HeldKarp);
    assert_eq!(config.participants[1].solver, SolverKind::NearestNeighborThenTwoOpt);

    let kind: SolverKind = serde_yaml::from_str("NEAREST").unwrap();
    assert_eq!(kind, "nearest".parse().unwrap());
}

#[test]
fn test_solver_kind_round_trips_through_names() {
    for kind in SolverKind::ALL {
        assert_eq!(kind.name().parse::<SolverKind>().unwrap(), kind);
        assert_eq!(kind.to_string(), kind.name());
    }
    assert!(SolverKind::HeldKarp.is_exact());
    assert!(!SolverKind::MstTwoApprox.is_exact());
    assert!(SolverKind::NearestNeighborThenTwoOpt.uses_start());
}

#[test]
fn test_random_points_are_seeded() {
    let a = RandomPointsConfig::new(12, 7).generate().unwrap();
    let b = RandomPointsConfig::new(12, 7).generate().unwrap();
    let c = RandomPointsConfig::new(12, 8).generate().unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.len(), 12);
    assert_eq!(a[11].label(), Some("P12"));

    let bounds = Bounds::default();
    assert!(a.iter().all(|p| {
        p.x >= bounds.min_x && p.x < bounds.max_x && p.y >= bounds.min_y && p.y < bounds.max_y
    }));
}

#[test]
fn test_random_points_reject_bad_bounds() {
    let bounds = Bounds {
        min_x: 10.0,
        max_x: 10.0,
        min_y: 0.0,
        max_y: 1.0,
    };
    let random = RandomPointsConfig::new(3, 0).with_bounds(bounds);
    assert!(matches!(random.generate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_empty_point_sources_fail() {
    let empty = PointSource::Explicit { points: vec![] };
    assert!(matches!(
        empty.resolve(),
        Err(ConfigError::Domain(SalesmanError::InvalidConfiguration(_)))
    ));

    let none = PointSource::Random(RandomPointsConfig::new(0, 1));
    assert!(none.resolve().is_err());
}

#[test]
fn test_builder() {
    let config = MatchConfig::new()
        .with_name("Built")
        .with_points(PointSource::Preset {
            name: Preset::Ecuador,
            count: Some(4),
        })
        .with_participant(SolverKind::NearestNeighbor)
        .with_participant(ParticipantConfig::new(SolverKind::HeldKarp).with_name("HK"));

    assert_eq!(config.participants.len(), 2);
    assert_eq!(config.resolve_points().unwrap().len(), 4);
}

#[test]
fn test_default_config() {
    let config = MatchConfig::default();
    assert!(config.participants.is_empty());
    assert_eq!(config.resolve_points().unwrap().len(), 8);
}

#[test]
fn test_load_missing_file() {
    let result = MatchConfig::load("/nonexistent/match.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}
