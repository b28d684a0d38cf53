//! Cumulative league state.
//!
//! A [`League`] folds accepted matches into a points table and a scorer
//! tally. All state lives in persistent `im` collections, so cloning a
//! league is O(1) and a clone taken before a batch is a complete snapshot
//! that can be restored if the batch is abandoned.

use std::cmp::Ordering;

use im::{HashMap, HashSet, Vector};
use matchday_foundation::{Jersey, Match, MatchKey, TeamCode};

/// Points for a win.
pub const POINTS_FOR_WIN: u32 = 3;

/// Points for each side of a draw.
pub const POINTS_FOR_DRAW: u32 = 1;

// =============================================================================
// Records
// =============================================================================

/// One team's row in the points table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamRecord {
    /// Points earned.
    pub points: u32,
    /// Goals scored.
    pub goals_for: u32,
    /// Goals conceded.
    pub goals_against: u32,
    /// Position in which this team first entered the table.
    pub(crate) arrival: u64,
}

impl TeamRecord {
    const fn new(arrival: u64) -> Self {
        Self {
            points: 0,
            goals_for: 0,
            goals_against: 0,
            arrival,
        }
    }

    /// Goals scored minus goals conceded.
    #[must_use]
    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Tally {
    pub(crate) goals: u32,
    pub(crate) arrival: u64,
}

/// Outcome of [`League::register`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Registration {
    /// The match was new and now counts toward every table.
    Accepted(MatchKey),
    /// A match with the same key was already registered; nothing changed.
    Duplicate(MatchKey),
}

impl Registration {
    /// Returns true if the match was newly registered.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The natural key of the registered match.
    #[must_use]
    pub const fn key(&self) -> &MatchKey {
        match self {
            Self::Accepted(key) | Self::Duplicate(key) => key,
        }
    }
}

// =============================================================================
// League
// =============================================================================

/// Accepted matches plus the tables derived from them.
#[derive(Clone, Debug, Default)]
pub struct League {
    pub(crate) matches: Vector<Match>,
    keys: HashSet<MatchKey>,
    pub(crate) records: HashMap<TeamCode, TeamRecord>,
    pub(crate) scorers: HashMap<(TeamCode, Jersey), Tally>,
    arrivals: u64,
}

impl League {
    /// Creates an empty league.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a match into the league.
    ///
    /// The match is assumed to have passed validation. A match whose key is
    /// already registered is ignored. Otherwise both teams get a table row if
    /// they lack one, every goal is credited to its scorer (assists are not
    /// tallied), goals and points are added to both rows and the match is
    /// appended to the result list.
    pub fn register(&mut self, fixture: Match) -> Registration {
        let key = fixture.key();
        if self.keys.contains(&key) {
            return Registration::Duplicate(key);
        }

        for code in [fixture.home, fixture.away] {
            self.record_mut(code);
        }

        for goal in &fixture.goals {
            let arrival = self.next_arrival();
            self.scorers
                .entry((goal.team, goal.scorer))
                .or_insert_with(|| Tally { goals: 0, arrival })
                .goals += 1;
        }

        let (home_goals, away_goals) = fixture.score();
        let (home_points, away_points) = match home_goals.cmp(&away_goals) {
            Ordering::Greater => (POINTS_FOR_WIN, 0),
            Ordering::Less => (0, POINTS_FOR_WIN),
            Ordering::Equal => (POINTS_FOR_DRAW, POINTS_FOR_DRAW),
        };
        self.credit(fixture.home, home_goals, away_goals, home_points);
        self.credit(fixture.away, away_goals, home_goals, away_points);

        self.keys.insert(key.clone());
        self.matches.push_back(fixture);
        Registration::Accepted(key)
    }

    /// Returns true if a match with this key has been registered.
    #[must_use]
    pub fn contains(&self, key: &MatchKey) -> bool {
        self.keys.contains(key)
    }

    /// Accepted matches in registration order.
    pub fn matches(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter()
    }

    /// A team's table row, if it has played.
    #[must_use]
    pub fn record(&self, code: TeamCode) -> Option<&TeamRecord> {
        self.records.get(&code)
    }

    /// Goals credited to one player across all accepted matches.
    #[must_use]
    pub fn goals_by(&self, team: TeamCode, number: Jersey) -> u32 {
        self.scorers.get(&(team, number)).map_or(0, |t| t.goals)
    }

    /// Number of accepted matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Returns true if no match has been accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    fn next_arrival(&mut self) -> u64 {
        let arrival = self.arrivals;
        self.arrivals += 1;
        arrival
    }

    fn record_mut(&mut self, code: TeamCode) -> &mut TeamRecord {
        let arrival = self.next_arrival();
        self.records
            .entry(code)
            .or_insert_with(|| TeamRecord::new(arrival))
    }

    fn credit(&mut self, code: TeamCode, scored: u32, conceded: u32, points: u32) {
        let record = self.record_mut(code);
        record.goals_for += scored;
        record.goals_against += conceded;
        record.points += points;
    }
}
