//! Integration tests for the transformer
//!
//! Tests conversion of parsed reports into typed matches.

use std::fmt::Write;

use matchday_foundation::{CardColor, Goal, Match, TeamCode};
use matchday_language::parse_matches;

use crate::{FULL_BLOCK, MINIMAL_BLOCK};

fn code(s: &str) -> TeamCode {
    TeamCode::new(s).unwrap()
}

fn list(numbers: &[u32]) -> String {
    numbers
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Writes a match back out as report text.
fn render(m: &Match) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Fecha: {}", m.date);
    let _ = writeln!(out, "Equipo Local: {}", m.home);
    let _ = writeln!(out, "Equipo Visitante: {}", m.away);
    let _ = writeln!(out, "Formación Local: {}", m.home_formation);
    let _ = writeln!(out, "Formación Visitante: {}", m.away_formation);
    let _ = writeln!(out, "Titulares Local: {}", list(&m.home_starters));
    let _ = writeln!(out, "Titulares Visitante: {}", list(&m.away_starters));
    if !m.home_bench.is_empty() {
        let _ = writeln!(out, "Banco Local: {}", list(&m.home_bench));
    }
    if !m.away_bench.is_empty() {
        let _ = writeln!(out, "Banco Visitante: {}", list(&m.away_bench));
    }
    for g in &m.goals {
        let _ = match g.assist {
            Some(a) => writeln!(out, "Gol: {}, {}', {}, {}", g.team, g.minute, g.scorer, a),
            None => writeln!(out, "Gol: {}, {}', {}", g.team, g.minute, g.scorer),
        };
    }
    for c in &m.cards {
        let _ = writeln!(
            out,
            "Tarjeta: {}, {}', {}, {}",
            c.team,
            c.minute,
            c.player,
            c.color.literal()
        );
    }
    for s in &m.substitutions {
        let _ = writeln!(
            out,
            "Cambio: {}, {}', {}, {}",
            s.team, s.minute, s.player_out, s.player_in
        );
    }
    out
}

#[test]
fn full_block_to_match() {
    let matches = parse_matches(FULL_BLOCK).unwrap();
    assert_eq!(matches.len(), 1);
    let m = &matches[0];

    assert_eq!(m.date, "2024-05-12");
    assert_eq!((m.home, m.away), (code("BAR"), code("RMA")));
    assert_eq!(m.home_formation, "4-3-3");
    assert_eq!(m.home_starters.len(), 11);
    assert_eq!(m.home_bench, vec![13, 14, 16, 18]);
    assert_eq!(m.away_bench, vec![12, 13, 14, 15]);

    assert_eq!(
        m.goals,
        vec![
            Goal {
                team: code("BAR"),
                minute: 12,
                scorer: 9,
                assist: Some(10),
            },
            Goal {
                team: code("RMA"),
                minute: 41,
                scorer: 7,
                assist: None,
            },
        ]
    );
    assert_eq!(m.cards[0].color, CardColor::Yellow);
    assert_eq!(m.cards[0].player, 4);
    assert_eq!(
        (m.substitutions[0].player_out, m.substitutions[0].player_in),
        (7, 16)
    );
    assert_eq!(m.score(), (1, 1));
}

#[test]
fn missing_benches_are_empty() {
    let m = &parse_matches(MINIMAL_BLOCK).unwrap()[0];
    assert!(m.home_bench.is_empty());
    assert!(m.away_bench.is_empty());
    assert!(m.goals.is_empty());
    assert_eq!(m.away_formation, "3-4-2-1");
}

#[test]
fn codes_are_canonicalized() {
    let text = MINIMAL_BLOCK.replace("LIV", "liv");
    let text = format!("{text}Gol: Liv, 3, 9\n");
    let m = &parse_matches(&text).unwrap()[0];
    assert_eq!(m.home, code("LIV"));
    assert_eq!(m.goals[0].team, code("LIV"));
}

#[test]
fn matches_keep_document_order() {
    let text = format!("{FULL_BLOCK}{MINIMAL_BLOCK}");
    let matches = parse_matches(&text).unwrap();
    let dates: Vec<_> = matches.iter().map(|m| m.date.as_str()).collect();
    assert_eq!(dates, ["2024-05-12", "1/3/2024"]);
}

#[test]
fn oversized_numbers_are_syntax_errors() {
    let text = format!("{MINIMAL_BLOCK}Gol: LIV, 10', 4294967296\n");
    let err = parse_matches(&text).unwrap_err();
    assert!(err.is_syntax());

    let text = format!("{MINIMAL_BLOCK}Gol: LIV, 99999999999', 9\n");
    assert!(parse_matches(&text).unwrap_err().is_syntax());
}

#[test]
fn rendered_match_parses_back_unchanged() {
    for source in [FULL_BLOCK, MINIMAL_BLOCK] {
        let original = parse_matches(source).unwrap().remove(0);
        let reparsed = parse_matches(&render(&original)).unwrap().remove(0);
        assert_eq!(original, reparsed);
    }
}
