//! Semantic validation of parsed matches.
//!
//! A match that parsed cleanly can still name teams or players the roster
//! has never heard of. [`validate`] checks a match against the roster in a
//! fixed order and reports the first violation:
//! - both team codes are registered (home first)
//! - each side lists exactly [`STARTERS`] starters
//! - every starter belongs to its side's squad (home first)
//! - every goal names a known team, scorer and, if given, assistant
//! - every card names a known player
//! - every substitution names two known players
//!
//! Bench numbers are never checked.

use matchday_foundation::{GoalFault, Match, Roster, Side, ValidationError};

/// Number of starters each side must field.
pub const STARTERS: usize = 11;

/// Checks a match against the roster.
///
/// Event team codes are looked up in the whole roster, not only among the
/// two sides playing.
///
/// # Errors
/// Returns the first [`ValidationError`] in check order.
pub fn validate(fixture: &Match, roster: &Roster) -> Result<(), ValidationError> {
    check_teams(fixture, roster)?;
    check_lineups(fixture, roster)?;
    check_events(fixture, roster)
}

// =============================================================================
// Header checks
// =============================================================================

fn check_teams(fixture: &Match, roster: &Roster) -> Result<(), ValidationError> {
    for side in [Side::Home, Side::Away] {
        let code = fixture.team(side);
        if !roster.contains(code) {
            return Err(ValidationError::UnknownTeam { side, code });
        }
    }
    Ok(())
}

fn check_lineups(fixture: &Match, roster: &Roster) -> Result<(), ValidationError> {
    // Sizes for both sides come before membership for either.
    for side in [Side::Home, Side::Away] {
        let count = fixture.starters(side).len();
        if count != STARTERS {
            return Err(ValidationError::WrongLineupSize {
                side,
                team: fixture.team(side),
                count,
            });
        }
    }

    for side in [Side::Home, Side::Away] {
        let team = fixture.team(side);
        if let Some(&number) = fixture
            .starters(side)
            .iter()
            .find(|&&n| !roster.has_player(team, n))
        {
            return Err(ValidationError::UnknownPlayer { side, team, number });
        }
    }
    Ok(())
}

// =============================================================================
// Event checks
// =============================================================================

fn check_events(fixture: &Match, roster: &Roster) -> Result<(), ValidationError> {
    for goal in &fixture.goals {
        let fault = match roster.get(goal.team) {
            None => Some(GoalFault::UnknownTeam),
            Some(team) if !team.has_player(goal.scorer) => {
                Some(GoalFault::UnknownScorer(goal.scorer))
            }
            Some(team) => goal
                .assist
                .filter(|&assist| !team.has_player(assist))
                .map(GoalFault::UnknownAssist),
        };
        if let Some(fault) = fault {
            return Err(ValidationError::InvalidGoal {
                team: goal.team,
                minute: goal.minute,
                fault,
            });
        }
    }

    for card in &fixture.cards {
        if !roster.has_player(card.team, card.player) {
            return Err(ValidationError::InvalidCard {
                team: card.team,
                minute: card.minute,
                player: card.player,
            });
        }
    }

    for sub in &fixture.substitutions {
        if !(roster.has_player(sub.team, sub.player_out)
            && roster.has_player(sub.team, sub.player_in))
        {
            return Err(ValidationError::InvalidSubstitution {
                team: sub.team,
                minute: sub.minute,
                player_out: sub.player_out,
                player_in: sub.player_in,
            });
        }
    }
    Ok(())
}
