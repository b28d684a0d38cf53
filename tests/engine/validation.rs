//! Integration tests for match validation
//!
//! Tests the roster checks applied before a match is aggregated.

use matchday_engine::validate;
use matchday_foundation::{GoalFault, Side, TeamCode, ValidationError};

use crate::{fixture, roster};

#[test]
fn clean_match_passes() {
    let m = fixture(
        "2024-03-01",
        "BAR",
        "RMA",
        "Gol: BAR, 10', 9, 10\nTarjeta: RMA, 20', 4, Roja\nCambio: RMA, 60', 7, 14\n",
    );
    assert_eq!(validate(&m, &roster()), Ok(()));
}

#[test]
fn goal_without_assist_passes() {
    let m = fixture("2024-03-01", "BAR", "RMA", "Gol: BAR, 10', 9\n");
    assert_eq!(m.goals[0].assist, None);
    assert_eq!(validate(&m, &roster()), Ok(()));
}

#[test]
fn unregistered_team_is_rejected() {
    let m = fixture("2024-03-01", "BAR", "XYZ", "");
    assert_eq!(
        validate(&m, &roster()),
        Err(ValidationError::UnknownTeam {
            side: Side::Away,
            code: TeamCode::new("XYZ").unwrap(),
        })
    );
}

#[test]
fn lineup_sizes() {
    let mut m = fixture("2024-03-01", "BAR", "RMA", "");
    m.home_starters.truncate(10);
    assert!(matches!(
        validate(&m, &roster()),
        Err(ValidationError::WrongLineupSize { count: 10, .. })
    ));

    let mut m = fixture("2024-03-01", "BAR", "RMA", "");
    m.home_starters.push(12);
    assert!(matches!(
        validate(&m, &roster()),
        Err(ValidationError::WrongLineupSize { count: 12, .. })
    ));
}

#[test]
fn unknown_starter() {
    let mut m = fixture("2024-03-01", "BAR", "RMA", "");
    m.home_starters[10] = 40;
    assert!(matches!(
        validate(&m, &roster()),
        Err(ValidationError::UnknownPlayer {
            side: Side::Home,
            number: 40,
            ..
        })
    ));
}

#[test]
fn goal_checks() {
    let unknown_team = fixture("2024-03-01", "BAR", "RMA", "Gol: MCI, 10', 9\n");
    let unknown_scorer = fixture("2024-03-01", "BAR", "RMA", "Gol: BAR, 10', 19\n");
    let unknown_assist = fixture("2024-03-01", "BAR", "RMA", "Gol: BAR, 10', 9, 19\n");

    for (m, expected) in [
        (unknown_team, GoalFault::UnknownTeam),
        (unknown_scorer, GoalFault::UnknownScorer(19)),
        (unknown_assist, GoalFault::UnknownAssist(19)),
    ] {
        match validate(&m, &roster()) {
            Err(ValidationError::InvalidGoal { fault, minute, .. }) => {
                assert_eq!(fault, expected);
                assert_eq!(minute, 10);
            }
            other => panic!("expected invalid goal, got {other:?}"),
        }
    }
}

#[test]
fn card_and_substitution_checks() {
    let m = fixture("2024-03-01", "BAR", "RMA", "Tarjeta: RMA, 20', 30, Amarilla\n");
    assert!(matches!(
        validate(&m, &roster()),
        Err(ValidationError::InvalidCard { player: 30, .. })
    ));

    let m = fixture("2024-03-01", "BAR", "RMA", "Cambio: RMA, 60', 30, 14\n");
    assert!(matches!(
        validate(&m, &roster()),
        Err(ValidationError::InvalidSubstitution { player_out: 30, .. })
    ));
}

#[test]
fn bench_numbers_are_not_checked() {
    let mut m = fixture("2024-03-01", "BAR", "RMA", "");
    m.away_bench = vec![55, 66];
    assert_eq!(validate(&m, &roster()), Ok(()));
}
