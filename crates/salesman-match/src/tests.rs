//! Tests for match orchestration and reports.

use salesman_config::{ParticipantConfig, SolverKind};
use salesman_core::{PointSet, ResultNote, SalesmanError};
use salesman_test::{collinear, random_points, unit_square};

use super::*;

fn five_points() -> PointSet {
    random_points(5, 17)
}

#[test]
fn test_ranks_three_participants() {
    let ranking = MatchOrchestrator::new()
        .with_participant(SolverKind::NearestNeighbor)
        .with_participant(SolverKind::MstTwoApprox)
        .with_participant(SolverKind::HeldKarp)
        .run(&five_points())
        .unwrap();

    assert_eq!(ranking.len(), 3);
    let costs: Vec<f64> = ranking.iter().map(MatchEntry::cost).collect();
    assert!(costs.windows(2).all(|pair| pair[0] <= pair[1]));

    let exact = ranking
        .iter()
        .find(|entry| entry.kind == SolverKind::HeldKarp)
        .unwrap();
    assert!(ranking.iter().all(|entry| exact.cost() <= entry.cost()));
}

#[test]
fn test_rejects_two_points() {
    let two = PointSet::from_coords(&[(0.0, 0.0), (1.0, 1.0)]).unwrap();
    let mut listener = RecordingListener::new();

    let err = MatchOrchestrator::new()
        .with_participant(SolverKind::NearestNeighbor)
        .run_with_listener(&two, &mut listener)
        .unwrap_err();

    assert!(matches!(err, SalesmanError::InvalidConfiguration(_)));
    assert_eq!(listener.started(), None);
    assert!(listener.entries().is_empty());
}

#[test]
fn test_rejects_empty_participant_list() {
    let err = MatchOrchestrator::new().run(&unit_square()).unwrap_err();
    assert!(matches!(err, SalesmanError::InvalidConfiguration(_)));
}

#[test]
fn test_rejects_out_of_range_start_before_solving() {
    let mut listener = RecordingListener::new();
    let err = MatchOrchestrator::new()
        .with_participant(SolverKind::HeldKarp)
        .with_participant(ParticipantConfig::new(SolverKind::NearestNeighbor).with_start(4))
        .run_with_listener(&unit_square(), &mut listener)
        .unwrap_err();

    assert!(matches!(err, SalesmanError::InvalidConfiguration(_)));
    assert!(listener.participants_started().is_empty());
}

#[test]
fn test_infeasible_entries_sort_last() {
    let line = collinear(10);
    let ranking = MatchOrchestrator::new()
        .with_participant(SolverKind::BruteForce)
        .with_participant(SolverKind::NearestNeighbor)
        .run(&line)
        .unwrap();

    assert_eq!(ranking.entries()[0].kind, SolverKind::NearestNeighbor);
    let last = &ranking.entries()[1];
    assert_eq!(last.kind, SolverKind::BruteForce);
    assert!(!last.is_feasible());
    assert!(matches!(
        last.result.note(),
        Some(ResultNote::CapacityExceeded { size: 10, limit: 9, .. })
    ));
    assert_eq!(ranking.position_of(0), Some(2));
}

#[test]
fn test_ties_keep_configured_order() {
    let square = unit_square();
    let ranking = MatchOrchestrator::new()
        .with_participant(ParticipantConfig::new(SolverKind::HeldKarp).with_name("first"))
        .with_participant(ParticipantConfig::new(SolverKind::BruteForce).with_name("second"))
        .run(&square)
        .unwrap();

    let names: Vec<&str> = ranking.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn test_default_participant_names() {
    let ranking = MatchOrchestrator::new()
        .with_participants([SolverKind::NearestNeighbor, SolverKind::MstTwoApprox])
        .run(&unit_square())
        .unwrap();

    let by_participant = ranking.by_participant();
    assert_eq!(by_participant[0].name, "Player 1");
    assert_eq!(by_participant[1].name, "Player 2");
}

#[test]
fn test_listener_sees_every_event_in_order() {
    let mut listener = RecordingListener::new();
    let ranking = MatchOrchestrator::new()
        .with_participant(SolverKind::MstTwoApprox)
        .with_participant(SolverKind::NearestNeighborThenTwoOpt)
        .run_with_listener(&five_points(), &mut listener)
        .unwrap();

    assert_eq!(listener.started(), Some((5, 2)));
    let started: Vec<usize> = listener
        .participants_started()
        .iter()
        .map(|(index, _, _)| *index)
        .collect();
    assert_eq!(started, vec![0, 1]);
    assert_eq!(listener.entries()[0].kind, SolverKind::MstTwoApprox);
    assert_eq!(listener.entries()[1].kind, SolverKind::NearestNeighborThenTwoOpt);
    assert!(listener.is_finished());
    assert_eq!(ranking.len(), listener.entries().len());
}

#[test]
fn test_closure_listener() {
    let mut costs = Vec::new();
    run_match(
        &five_points(),
        &[
            ParticipantConfig::from(SolverKind::HeldKarp),
            ParticipantConfig::from(SolverKind::NearestNeighbor),
        ],
        &mut |_: usize, entry: &MatchEntry| costs.push(entry.cost()),
    )
    .unwrap();

    assert_eq!(costs.len(), 2);
    assert!(costs[0] <= costs[1]);
}

#[test]
fn test_listener_does_not_change_results() {
    let points = random_points(8, 4);
    let participants = [
        ParticipantConfig::new(SolverKind::NearestNeighbor).with_start(2),
        ParticipantConfig::new(SolverKind::HeldKarp),
    ];

    let quiet = run_match(&points, &participants, &mut NoopListener).unwrap();
    let observed = run_match(&points, &participants, &mut RecordingListener::new()).unwrap();

    for (a, b) in quiet.iter().zip(observed.iter()) {
        assert_eq!(a.index, b.index);
        assert_eq!(a.result.tour(), b.result.tour());
        assert_eq!(a.cost(), b.cost());
    }
}

#[test]
fn test_winner_requires_a_tour() {
    let ranking = MatchOrchestrator::new()
        .with_participant(SolverKind::BruteForce)
        .run(&collinear(12))
        .unwrap();
    assert!(ranking.winner().is_none());
    assert_eq!(ranking.position_of(0), Some(1));
    assert_eq!(ranking.position_of(1), None);
}

#[test]
fn test_markdown_report() {
    let ranking = MatchOrchestrator::new()
        .with_participant(ParticipantConfig::new(SolverKind::HeldKarp).with_name("Ana"))
        .with_participant(SolverKind::BruteForce)
        .run(&collinear(10))
        .unwrap();

    let md = MarkdownReport::to_string("line", &ranking);
    assert!(md.contains("# Match: line"));
    assert!(md.contains("- **Points**: 10"));
    assert!(md.contains("- **Winner**: Ana (Held-Karp, 18.00)"));
    assert!(md.contains("| 1 | Ana | Held-Karp | 18.00 | optimal |"));
    assert!(md.contains(
        "| 2 | Player 2 | Brute force | N/A | too large for exhaustive search: 10 points exceeds the limit of 9 |"
    ));
}

#[test]
fn test_csv_export() {
    let ranking = MatchOrchestrator::new()
        .with_participant(ParticipantConfig::new(SolverKind::NearestNeighbor).with_name("Doe, J."))
        .with_participant(SolverKind::BruteForce)
        .run(&collinear(10))
        .unwrap();

    let csv = CsvExporter::to_string(&ranking);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "position,participant,solver,cost,note,evaluations,elapsed_us"
    );
    assert!(lines[1].starts_with("1,\"Doe, J.\",nearest_neighbor,18,,"));
    assert!(lines[2].starts_with(
        "2,Player 2,brute_force,inf,too large for exhaustive search: 10 points exceeds the limit of 9,0,"
    ));
}

#[test]
fn test_csv_write_to_buffer() {
    let ranking = MatchOrchestrator::new()
        .with_participant(SolverKind::HeldKarp)
        .run(&unit_square())
        .unwrap();

    let mut buffer = Vec::new();
    CsvExporter::write(&ranking, &mut buffer).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), CsvExporter::to_string(&ranking));
}
