//! Integration tests for the roster
//!
//! Tests team registration, squads, and code canonicalization.

use matchday_foundation::{Roster, RosterError, TeamCode};

// =============================================================================
// Team Codes
// =============================================================================

#[test]
fn codes_canonicalize_to_uppercase() {
    let code = TeamCode::new("rMa").unwrap();
    assert_eq!(code.as_str(), "RMA");
    assert_eq!(code, TeamCode::new("RMA").unwrap());
    assert_eq!(format!("{code:<5}|"), "RMA  |");
}

#[test]
fn codes_reject_wrong_shapes() {
    for bad in ["", "BA", "BARC", "B4R", "BÁR", "BA R"] {
        assert!(
            matches!(TeamCode::new(bad), Err(RosterError::InvalidCode(_))),
            "{bad:?} accepted"
        );
    }
}

#[test]
fn codes_parse_from_str() {
    let code: TeamCode = "liv".parse().unwrap();
    assert_eq!(code, "LIV");
}

// =============================================================================
// Teams and Players
// =============================================================================

#[test]
fn add_team_and_players() {
    let mut roster = Roster::new();
    roster
        .add_team("Barcelona", "BAR")
        .unwrap()
        .add_player(9, "Lewandowski")
        .unwrap()
        .add_player(10, "Lamine Yamal")
        .unwrap();

    let bar = roster.find("bar").unwrap();
    assert_eq!(bar.name(), "Barcelona");
    assert_eq!(bar.len(), 2);
    assert_eq!(bar.player(10).unwrap().name(), "Lamine Yamal");
    assert!(roster.has_player(TeamCode::new("BAR").unwrap(), 9));
    assert!(!roster.has_player(TeamCode::new("BAR").unwrap(), 11));
}

#[test]
fn duplicate_team_rejected_case_insensitively() {
    let mut roster = Roster::new();
    roster.add_team("Barcelona", "BAR").unwrap();
    let err = roster.add_team("Other", "bar").unwrap_err();
    assert!(matches!(err, RosterError::DuplicateTeam(_)));
    assert_eq!(roster.len(), 1);
}

#[test]
fn jersey_range_enforced() {
    let mut roster = Roster::new();
    let team = roster.add_team("Liverpool", "LIV").unwrap();
    assert!(team.add_player(1, "Alisson").is_ok());
    assert!(team.add_player(99, "Late").is_ok());
    assert!(matches!(
        team.add_player(0, "Zero"),
        Err(RosterError::JerseyOutOfRange { number: 0, .. })
    ));
    assert!(matches!(
        team.add_player(100, "Hundred"),
        Err(RosterError::JerseyOutOfRange { number: 100, .. })
    ));
}

#[test]
fn duplicate_jersey_never_overwrites() {
    let mut roster = Roster::new();
    let team = roster.add_team("Liverpool", "LIV").unwrap();
    team.add_player(10, "Salah").unwrap();
    assert!(matches!(
        team.add_player(10, "Impostor"),
        Err(RosterError::DuplicateJersey { number: 10, .. })
    ));
    assert_eq!(team.player(10).unwrap().name(), "Salah");
}

#[test]
fn teams_iterate_in_registration_order() {
    let mut roster = Roster::new();
    for (name, code) in [("Manchester City", "MCI"), ("Barcelona", "BAR"), ("Liverpool", "LIV")] {
        roster.add_team(name, code).unwrap();
    }
    let codes: Vec<_> = roster.teams().map(|t| t.code().to_string()).collect();
    assert_eq!(codes, ["MCI", "BAR", "LIV"]);
}
