//! Match reports and their events.
//!
//! A [`Match`] is the typed form of one report block. It carries no roster
//! knowledge; checking its numbers against registered players happens later.

use std::fmt;

use crate::code::TeamCode;

/// A jersey number.
pub type Jersey = u32;

/// A match minute, apostrophe already stripped.
pub type Minute = u32;

/// Which side of a match a team played on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The home team.
    Home,
    /// The away team.
    Away,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("home"),
            Self::Away => f.write_str("away"),
        }
    }
}

/// Card color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardColor {
    /// `Amarilla`
    Yellow,
    /// `Roja`
    Red,
}

impl CardColor {
    /// Parses the report literal (`Amarilla` or `Roja`, exact case).
    #[must_use]
    pub fn from_literal(text: &str) -> Option<Self> {
        match text {
            "Amarilla" => Some(Self::Yellow),
            "Roja" => Some(Self::Red),
            _ => None,
        }
    }

    /// Returns the report literal for this color.
    #[must_use]
    pub const fn literal(self) -> &'static str {
        match self {
            Self::Yellow => "Amarilla",
            Self::Red => "Roja",
        }
    }
}

/// A goal event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Goal {
    /// Team credited with the goal.
    pub team: TeamCode,
    /// Minute scored.
    pub minute: Minute,
    /// Scorer's jersey number.
    pub scorer: Jersey,
    /// Assistant's jersey number, if the report gave one.
    pub assist: Option<Jersey>,
}

/// A card event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    /// Team of the booked player.
    pub team: TeamCode,
    /// Minute shown.
    pub minute: Minute,
    /// Booked player's jersey number.
    pub player: Jersey,
    /// Card color.
    pub color: CardColor,
}

/// A substitution event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Substitution {
    /// Team making the change.
    pub team: TeamCode,
    /// Minute of the change.
    pub minute: Minute,
    /// Jersey number leaving the pitch.
    pub player_out: Jersey,
    /// Jersey number entering the pitch.
    pub player_in: Jersey,
}

/// Natural key of a match: `(date, home, away)`.
///
/// Two reports with the same key describe the same match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchKey {
    /// Date exactly as written in the report.
    pub date: String,
    /// Home team.
    pub home: TeamCode,
    /// Away team.
    pub away: TeamCode,
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} vs {}", self.date, self.home, self.away)
    }
}

/// One parsed match report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    /// Date exactly as written; only its shape is checked.
    pub date: String,
    /// Home team.
    pub home: TeamCode,
    /// Away team.
    pub away: TeamCode,
    /// Home formation, e.g. `4-3-3`.
    pub home_formation: String,
    /// Away formation.
    pub away_formation: String,
    /// Home starting eleven in listed order.
    pub home_starters: Vec<Jersey>,
    /// Away starting eleven in listed order.
    pub away_starters: Vec<Jersey>,
    /// Home bench; empty when the report has no bench line.
    pub home_bench: Vec<Jersey>,
    /// Away bench; empty when the report has no bench line.
    pub away_bench: Vec<Jersey>,
    /// Goals in report order.
    pub goals: Vec<Goal>,
    /// Cards in report order.
    pub cards: Vec<Card>,
    /// Substitutions in report order.
    pub substitutions: Vec<Substitution>,
}

impl Match {
    /// Creates a match with no lineups or events.
    #[must_use]
    pub fn new(date: impl Into<String>, home: TeamCode, away: TeamCode) -> Self {
        Self {
            date: date.into(),
            home,
            away,
            home_formation: String::new(),
            away_formation: String::new(),
            home_starters: Vec::new(),
            away_starters: Vec::new(),
            home_bench: Vec::new(),
            away_bench: Vec::new(),
            goals: Vec::new(),
            cards: Vec::new(),
            substitutions: Vec::new(),
        }
    }

    /// Returns the natural key of this match.
    #[must_use]
    pub fn key(&self) -> MatchKey {
        MatchKey {
            date: self.date.clone(),
            home: self.home,
            away: self.away,
        }
    }

    /// Returns the team playing on `side`.
    #[must_use]
    pub const fn team(&self, side: Side) -> TeamCode {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }

    /// Returns the starting lineup for `side`.
    #[must_use]
    pub fn starters(&self, side: Side) -> &[Jersey] {
        match side {
            Side::Home => &self.home_starters,
            Side::Away => &self.away_starters,
        }
    }

    /// Returns the bench for `side`.
    #[must_use]
    pub fn bench(&self, side: Side) -> &[Jersey] {
        match side {
            Side::Home => &self.home_bench,
            Side::Away => &self.away_bench,
        }
    }

    /// Returns `(home_goals, away_goals)`, counted from the goal list.
    ///
    /// Each side is counted on its own, so a team drawn against itself gets
    /// every goal on both sides. A goal whose team is neither side counts for
    /// nobody.
    #[must_use]
    pub fn score(&self) -> (u32, u32) {
        (self.goals_for(self.home), self.goals_for(self.away))
    }

    fn goals_for(&self, team: TeamCode) -> u32 {
        self.goals
            .iter()
            .filter(|goal| goal.team == team)
            .fold(0, |count, _| count + 1)
    }

    /// Returns the winning team, or `None` on a draw.
    #[must_use]
    pub fn winner(&self) -> Option<TeamCode> {
        let (home, away) = self.score();
        match home.cmp(&away) {
            std::cmp::Ordering::Greater => Some(self.home),
            std::cmp::Ordering::Less => Some(self.away),
            std::cmp::Ordering::Equal => None,
        }
    }
}
