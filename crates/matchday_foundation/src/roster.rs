//! Team registry.
//!
//! The roster is filled before any match is loaded and is read-only while
//! reports are ingested.

use std::collections::{BTreeMap, HashMap};

use crate::code::TeamCode;
use crate::error::RosterError;
use crate::fixture::Jersey;

/// Highest jersey number a player may wear.
pub const MAX_JERSEY: Jersey = 99;

/// A registered player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    number: Jersey,
    name: String,
}

impl Player {
    /// Jersey number.
    #[must_use]
    pub const fn number(&self) -> Jersey {
        self.number
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A registered team and its squad.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Team {
    name: String,
    code: TeamCode,
    players: BTreeMap<Jersey, Player>,
}

impl Team {
    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical code.
    #[must_use]
    pub const fn code(&self) -> TeamCode {
        self.code
    }

    /// Adds a player to the squad.
    ///
    /// # Errors
    /// Fails if `number` is outside `1..=99` or already taken on this team.
    pub fn add_player(
        &mut self,
        number: Jersey,
        name: impl Into<String>,
    ) -> Result<&mut Self, RosterError> {
        if number == 0 || number > MAX_JERSEY {
            return Err(RosterError::JerseyOutOfRange {
                team: self.code,
                number,
            });
        }
        if self.players.contains_key(&number) {
            return Err(RosterError::DuplicateJersey {
                team: self.code,
                number,
            });
        }
        self.players.insert(
            number,
            Player {
                number,
                name: name.into(),
            },
        );
        Ok(self)
    }

    /// Looks up a player by jersey number.
    #[must_use]
    pub fn player(&self, number: Jersey) -> Option<&Player> {
        self.players.get(&number)
    }

    /// Returns true if a player wears `number`.
    #[must_use]
    pub fn has_player(&self, number: Jersey) -> bool {
        self.players.contains_key(&number)
    }

    /// Iterates the squad by ascending jersey number.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// Number of registered players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns true if the squad is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// The set of registered teams, keyed by code.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    teams: Vec<Team>,
    index: HashMap<TeamCode, usize>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a team and returns it for adding players.
    ///
    /// # Errors
    /// Fails if `code` is not three letters or is already registered.
    pub fn add_team(
        &mut self,
        name: impl Into<String>,
        code: &str,
    ) -> Result<&mut Team, RosterError> {
        let code = TeamCode::new(code)?;
        if self.index.contains_key(&code) {
            return Err(RosterError::DuplicateTeam(code));
        }
        let slot = self.teams.len();
        self.teams.push(Team {
            name: name.into(),
            code,
            players: BTreeMap::new(),
        });
        self.index.insert(code, slot);
        Ok(&mut self.teams[slot])
    }

    /// Looks up a team by canonical code.
    #[must_use]
    pub fn get(&self, code: TeamCode) -> Option<&Team> {
        self.index.get(&code).map(|&slot| &self.teams[slot])
    }

    /// Looks up a team by code in any case.
    #[must_use]
    pub fn find(&self, code: &str) -> Option<&Team> {
        TeamCode::new(code).ok().and_then(|code| self.get(code))
    }

    /// Returns true if `code` is registered.
    #[must_use]
    pub fn contains(&self, code: TeamCode) -> bool {
        self.index.contains_key(&code)
    }

    /// Returns true if `number` is registered on team `code`.
    #[must_use]
    pub fn has_player(&self, code: TeamCode, number: Jersey) -> bool {
        self.get(code).is_some_and(|team| team.has_player(number))
    }

    /// Iterates teams in registration order.
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }

    /// Number of registered teams.
    #[must_use]
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// Returns true if no team is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
