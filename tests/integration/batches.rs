//! Batch policies and error reporting across a whole load.

use matchday::engine::League;
use matchday::foundation::{ErrorKind, GoalFault, ValidationError};
use matchday::runtime::{BatchPolicy, IngestConfig, Ingestor, demo_roster, load_text};

use crate::data;

#[test]
fn rejected_batch_leaves_league_untouched() {
    let roster = demo_roster().unwrap();
    let ingestor = Ingestor::new(&roster, IngestConfig::default());
    let mut league = League::new();
    ingestor.load_file(&mut league, data("round1.txt")).unwrap();
    let before = league.standings();

    let err = ingestor
        .load_file(&mut league, data("rejected.txt"))
        .unwrap_err();
    assert_eq!(
        err.as_validation(),
        Some(&ValidationError::InvalidGoal {
            team: "BAR".parse().unwrap(),
            minute: 30,
            fault: GoalFault::UnknownScorer(8),
        })
    );
    assert_eq!(league.len(), 2);
    assert_eq!(league.standings(), before);

    let report = err.report();
    assert!(report.contains("rejected.txt"), "{report}");
    assert!(report.contains("in match 2 (2024-03-16 BAR vs MCI)"), "{report}");
}

#[test]
fn keep_accepted_registers_the_valid_prefix() {
    let roster = demo_roster().unwrap();
    let config = IngestConfig::new().with_batch_policy(BatchPolicy::KeepAccepted);
    let ingestor = Ingestor::new(&roster, config);
    let mut league = League::new();

    assert!(ingestor.load_file(&mut league, data("rejected.txt")).is_err());
    assert_eq!(league.len(), 1);
    assert_eq!(league.results()[0].home_goals, 1);
}

#[test]
fn unknown_team_blocks_aggregation() {
    let roster = demo_roster().unwrap();
    let mut league = League::new();
    let text = std::fs::read_to_string(data("round1.txt"))
        .unwrap()
        .replace("Equipo Visitante: MCI", "Equipo Visitante: JUV");

    let err = load_text(&text, &roster, &mut league).unwrap_err();
    assert!(matches!(
        err.as_validation(),
        Some(ValidationError::UnknownTeam { .. })
    ));
    assert!(league.standings().is_empty());
}

#[test]
fn syntax_error_reports_line_and_source() {
    let roster = demo_roster().unwrap();
    let ingestor = Ingestor::new(&roster, IngestConfig::new().with_source_name("round1.txt"));
    let mut league = League::new();
    let text = std::fs::read_to_string(data("round1.txt"))
        .unwrap()
        .replace("Gol: LIV, 67', 10", "Gol: LIV 67', 10");

    let err = ingestor.load_text(&mut league, &text).unwrap_err();
    match &err.kind {
        ErrorKind::Syntax { line, context, .. } => {
            assert_eq!(*line, 25);
            assert_eq!(context, "Gol: LIV 67', 10");
        }
        other => panic!("expected syntax error, got {other:?}"),
    }
    assert!(err.report().contains("at round1.txt"));
    assert!(league.is_empty());
}
