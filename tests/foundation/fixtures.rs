//! Integration tests for the match model
//!
//! Tests natural keys, scores, and winners.

use matchday_foundation::{CardColor, Goal, Match, Side, TeamCode};

fn code(s: &str) -> TeamCode {
    TeamCode::new(s).unwrap()
}

fn goal(team: &str, scorer: u32) -> Goal {
    Goal {
        team: code(team),
        minute: 1,
        scorer,
        assist: None,
    }
}

#[test]
fn key_is_date_home_away() {
    let m = Match::new("2024-03-01", code("BAR"), code("RMA"));
    let key = m.key();
    assert_eq!(key.date, "2024-03-01");
    assert_eq!(key.to_string(), "2024-03-01 BAR vs RMA");

    let reversed = Match::new("2024-03-01", code("RMA"), code("BAR"));
    assert_ne!(key, reversed.key());
}

#[test]
fn score_counts_goals_by_team() {
    let mut m = Match::new("2024-03-01", code("BAR"), code("RMA"));
    m.goals = vec![goal("BAR", 9), goal("RMA", 7), goal("BAR", 10)];
    assert_eq!(m.score(), (2, 1));
    assert_eq!(m.winner(), Some(code("BAR")));
}

#[test]
fn draw_has_no_winner() {
    let mut m = Match::new("2024-03-01", code("LIV"), code("MCI"));
    assert_eq!(m.winner(), None);
    m.goals = vec![goal("MCI", 9), goal("LIV", 10)];
    assert_eq!(m.score(), (1, 1));
    assert_eq!(m.winner(), None);
}

#[test]
fn side_accessors() {
    let mut m = Match::new("2024-03-01", code("LIV"), code("MCI"));
    m.home_bench = vec![12, 13];
    assert_eq!(m.team(Side::Away), code("MCI"));
    assert_eq!(m.bench(Side::Home), &[12, 13]);
    assert!(m.bench(Side::Away).is_empty());
    assert!(m.starters(Side::Home).is_empty());
}

#[test]
fn card_color_literals() {
    assert_eq!(CardColor::from_literal("Amarilla"), Some(CardColor::Yellow));
    assert_eq!(CardColor::from_literal("Roja"), Some(CardColor::Red));
    assert_eq!(CardColor::from_literal("roja"), None);
    assert_eq!(CardColor::Red.literal(), "Roja");
}
