//! Plain-text rendering of league views.
//!
//! Names are looked up in the roster; anything the roster does not know
//! renders as `?`.

use std::fmt::Write;

use matchday_engine::{ResultRow, ScorerRow, StandingRow};
use matchday_foundation::Roster;

const UNKNOWN: &str = "?";

/// Renders the standings with team names.
#[must_use]
pub fn render_standings(rows: &[StandingRow], roster: &Roster) -> String {
    let mut out = String::from("Standings\n=========\n");
    let _ = writeln!(
        out,
        "{:<6}  {:>3}  {:>3}  {:>3}  {:>3}  Name",
        "Team", "Pts", "GF", "GA", "Diff"
    );
    for row in rows {
        let name = roster.get(row.team).map_or(UNKNOWN, |team| team.name());
        let _ = writeln!(
            out,
            "{:<6}  {:>3}  {:>3}  {:>3}  {:>3}  {}",
            row.team.as_str(),
            row.points,
            row.goals_for,
            row.goals_against,
            row.goal_difference,
            name
        );
    }
    out
}

/// Renders the scorer table with player names.
#[must_use]
pub fn render_scorers(rows: &[ScorerRow], roster: &Roster) -> String {
    let mut out = String::from("Top scorers\n===========\n");
    let _ = writeln!(out, "{:<6}  {:>3}  {:>5}  Name", "Team", "#", "Goals");
    for row in rows {
        let name = roster
            .get(row.team)
            .and_then(|team| team.player(row.number))
            .map_or(UNKNOWN, |player| player.name());
        let _ = writeln!(
            out,
            "{:<6}  {:>3}  {:>5}  {}",
            row.team.as_str(),
            row.number,
            row.goals,
            name
        );
    }
    out
}

/// Renders one line per result: `date: HOME h-a AWAY`.
#[must_use]
pub fn render_results(rows: &[ResultRow]) -> String {
    let mut out = String::from("Results\n=======\n");
    for row in rows {
        let _ = writeln!(
            out,
            "{}: {} {}-{} {}",
            row.date, row.home, row.home_goals, row.away_goals, row.away
        );
    }
    out
}
