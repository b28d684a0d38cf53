//! Loading a short season against the demo roster.

use matchday::engine::League;
use matchday::foundation::TeamCode;
use matchday::runtime::{IngestConfig, Ingestor, demo_roster, render_results, render_scorers};

use crate::data;

fn code(s: &str) -> TeamCode {
    TeamCode::new(s).unwrap()
}

fn load_season() -> League {
    let roster = demo_roster().unwrap();
    let ingestor = Ingestor::new(&roster, IngestConfig::default());
    let mut league = League::new();
    assert_eq!(ingestor.load_file(&mut league, data("round1.txt")).unwrap().len(), 2);
    assert_eq!(ingestor.load_file(&mut league, data("round2.txt")).unwrap().len(), 2);
    league
}

#[test]
fn standings_after_two_rounds() {
    let table = load_season().standings();
    let rows: Vec<_> = table
        .iter()
        .map(|r| (r.team, r.points, r.goals_for, r.goals_against, r.goal_difference))
        .collect();
    assert_eq!(
        rows,
        vec![
            (code("MCI"), 4, 3, 1, 2),
            (code("RMA"), 3, 4, 2, 2),
            (code("BAR"), 3, 2, 6, -4),
            (code("LIV"), 1, 1, 1, 0),
        ]
    );
}

#[test]
fn scorers_after_two_rounds() {
    let scorers = load_season().top_scorers();
    let rows: Vec<_> = scorers.iter().map(|r| (r.team, r.number, r.goals)).collect();
    assert_eq!(
        rows,
        vec![
            (code("RMA"), 7, 3),
            (code("MCI"), 9, 3),
            (code("BAR"), 9, 1),
            (code("BAR"), 10, 1),
            (code("LIV"), 10, 1),
            (code("RMA"), 5, 1),
        ]
    );
}

#[test]
fn rendered_tables_use_roster_names() {
    let roster = demo_roster().unwrap();
    let league = load_season();

    let scorers = render_scorers(&league.top_scorers(), &roster);
    assert!(scorers.contains("Vinícius"));
    assert!(scorers.contains("Haaland"));

    let results = render_results(&league.results());
    let lines: Vec<_> = results.lines().skip(2).collect();
    assert_eq!(
        lines,
        [
            "2024-03-01: BAR 2-1 RMA",
            "2024-03-02: LIV 1-1 MCI",
            "2024-03-08: RMA 3-0 BAR",
            "9/3/2024: MCI 2-0 BAR",
        ]
    );
}

#[test]
fn reloading_a_file_is_idempotent() {
    let roster = demo_roster().unwrap();
    let ingestor = Ingestor::new(&roster, IngestConfig::default());
    let mut league = load_season();
    let before = league.standings();

    let again = ingestor.load_file(&mut league, data("round1.txt")).unwrap();
    assert_eq!(again.len(), 2);
    assert_eq!(league.len(), 4);
    assert_eq!(league.standings(), before);
}

#[test]
fn parsed_matches_are_returned_in_document_order() {
    let roster = demo_roster().unwrap();
    let ingestor = Ingestor::new(&roster, IngestConfig::default());
    let mut league = League::new();
    let matches = ingestor.load_file(&mut league, data("round2.txt")).unwrap();
    assert_eq!(matches[0].key().to_string(), "2024-03-08 RMA vs BAR");
    assert_eq!(matches[1].date, "9/3/2024");
    assert_eq!(matches[1].substitutions[0].player_in, 18);
}
