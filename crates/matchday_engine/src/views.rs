//! Read-only views over a [`League`].
//!
//! Views are computed on demand and never change the league. Rows that tie
//! on every sort key keep the order in which they first entered the league.

use matchday_foundation::{Jersey, TeamCode};

use crate::league::League;

/// One row of the standings table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StandingRow {
    /// Team code.
    pub team: TeamCode,
    /// Points earned.
    pub points: u32,
    /// Goals scored.
    pub goals_for: u32,
    /// Goals conceded.
    pub goals_against: u32,
    /// `goals_for - goals_against`.
    pub goal_difference: i64,
}

/// One row of the scorer table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScorerRow {
    /// Team the goals were credited to.
    pub team: TeamCode,
    /// Scorer's jersey number.
    pub number: Jersey,
    /// Goals scored.
    pub goals: u32,
}

/// One accepted match with its final score.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRow {
    /// Date as written in the report.
    pub date: String,
    /// Home team.
    pub home: TeamCode,
    /// Away team.
    pub away: TeamCode,
    /// Goals by the home team.
    pub home_goals: u32,
    /// Goals by the away team.
    pub away_goals: u32,
}

/// Standings sorted by points, then goal difference, then goals scored,
/// all descending.
#[must_use]
pub fn standings(league: &League) -> Vec<StandingRow> {
    let mut rows: Vec<_> = league
        .records
        .iter()
        .map(|(&team, record)| {
            let row = StandingRow {
                team,
                points: record.points,
                goals_for: record.goals_for,
                goals_against: record.goals_against,
                goal_difference: record.goal_difference(),
            };
            (record.arrival, row)
        })
        .collect();

    rows.sort_by(|(a_arrival, a), (b_arrival, b)| {
        (b.points, b.goal_difference, b.goals_for)
            .cmp(&(a.points, a.goal_difference, a.goals_for))
            .then(a_arrival.cmp(b_arrival))
    });
    rows.into_iter().map(|(_, row)| row).collect()
}

/// Scorers sorted by goals, descending.
#[must_use]
pub fn top_scorers(league: &League) -> Vec<ScorerRow> {
    let mut rows: Vec<_> = league
        .scorers
        .iter()
        .map(|(&(team, number), tally)| {
            let row = ScorerRow {
                team,
                number,
                goals: tally.goals,
            };
            (tally.arrival, row)
        })
        .collect();

    rows.sort_by(|(a_arrival, a), (b_arrival, b)| {
        b.goals.cmp(&a.goals).then(a_arrival.cmp(b_arrival))
    });
    rows.into_iter().map(|(_, row)| row).collect()
}

/// Accepted matches in registration order.
#[must_use]
pub fn results(league: &League) -> Vec<ResultRow> {
    league
        .matches()
        .map(|m| {
            let (home_goals, away_goals) = m.score();
            ResultRow {
                date: m.date.clone(),
                home: m.home,
                away: m.away,
                home_goals,
                away_goals,
            }
        })
        .collect()
}

impl League {
    /// See [`standings`].
    #[must_use]
    pub fn standings(&self) -> Vec<StandingRow> {
        standings(self)
    }

    /// See [`top_scorers`].
    #[must_use]
    pub fn top_scorers(&self) -> Vec<ScorerRow> {
        top_scorers(self)
    }

    /// See [`results`].
    #[must_use]
    pub fn results(&self) -> Vec<ResultRow> {
        results(self)
    }
}
