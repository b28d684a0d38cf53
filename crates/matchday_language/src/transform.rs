//! Syntax tree to match model.
//!
//! Each match block folds into one [`Match`]. Every line goes through a
//! single visitor, [`visit_line`], which dispatches on [`LineKind`] and
//! writes the coerced values into a [`MatchDraft`]. No roster checks happen
//! here: a scorer number is only known to be a number, not a player.

use matchday_foundation::{
    Card, CardColor, Error, Goal, Jersey, Match, Minute, Result, Side, Substitution, TeamCode,
};

use crate::parser::parse;
use crate::syntax::{Lexeme, Line, LineKind, LineupRole, MatchBlock, Report};

/// A match being assembled from its lines.
#[derive(Debug, Default)]
pub struct MatchDraft {
    date: Option<String>,
    home: Option<TeamCode>,
    away: Option<TeamCode>,
    home_formation: String,
    away_formation: String,
    home_starters: Vec<Jersey>,
    away_starters: Vec<Jersey>,
    home_bench: Vec<Jersey>,
    away_bench: Vec<Jersey>,
    goals: Vec<Goal>,
    cards: Vec<Card>,
    substitutions: Vec<Substitution>,
}

impl MatchDraft {
    /// Finishes the draft, requiring date and both teams.
    fn finish(self, block: &MatchBlock) -> Result<Match> {
        let (Some(date), Some(home), Some(away)) = (self.date, self.home, self.away) else {
            let span = block.span;
            return Err(Error::syntax(
                "match block is missing its date or teams",
                span.line,
                span.column,
                String::new(),
            ));
        };
        Ok(Match {
            date,
            home,
            away,
            home_formation: self.home_formation,
            away_formation: self.away_formation,
            home_starters: self.home_starters,
            away_starters: self.away_starters,
            home_bench: self.home_bench,
            away_bench: self.away_bench,
            goals: self.goals,
            cards: self.cards,
            substitutions: self.substitutions,
        })
    }
}

/// Applies one line to a draft.
///
/// # Errors
/// Fails if a number does not fit in 32 bits or a code or color is malformed.
pub fn visit_line(draft: &mut MatchDraft, line: &Line) -> Result<()> {
    match &line.kind {
        LineKind::Date(date) => draft.date = Some(date.text.clone()),
        LineKind::Team { side, code } => {
            let code = to_code(code)?;
            match side {
                Side::Home => draft.home = Some(code),
                Side::Away => draft.away = Some(code),
            }
        }
        LineKind::Formation { side, shape } => match side {
            Side::Home => draft.home_formation.clone_from(&shape.text),
            Side::Away => draft.away_formation.clone_from(&shape.text),
        },
        LineKind::Lineup {
            side,
            role,
            numbers,
        } => {
            let numbers = numbers
                .items
                .iter()
                .map(to_number)
                .collect::<Result<Vec<_>>>()?;
            match (side, role) {
                (Side::Home, LineupRole::Starters) => draft.home_starters = numbers,
                (Side::Away, LineupRole::Starters) => draft.away_starters = numbers,
                (Side::Home, LineupRole::Bench) => draft.home_bench = numbers,
                (Side::Away, LineupRole::Bench) => draft.away_bench = numbers,
            }
        }
        LineKind::Goal {
            team,
            minute,
            scorer,
            assist,
        } => draft.goals.push(Goal {
            team: to_code(team)?,
            minute: to_minute(minute)?,
            scorer: to_number(scorer)?,
            assist: assist.as_ref().map(to_number).transpose()?,
        }),
        LineKind::Card {
            team,
            minute,
            player,
            color,
        } => draft.cards.push(Card {
            team: to_code(team)?,
            minute: to_minute(minute)?,
            player: to_number(player)?,
            color: to_color(color)?,
        }),
        LineKind::Substitution {
            team,
            minute,
            player_out,
            player_in,
        } => draft.substitutions.push(Substitution {
            team: to_code(team)?,
            minute: to_minute(minute)?,
            player_out: to_number(player_out)?,
            player_in: to_number(player_in)?,
        }),
        LineKind::Separator => {}
    }
    Ok(())
}

/// Transforms one match block.
///
/// # Errors
/// See [`visit_line`].
pub fn transform_block(block: &MatchBlock) -> Result<Match> {
    let mut draft = MatchDraft::default();
    for line in &block.lines {
        visit_line(&mut draft, line)?;
    }
    draft.finish(block)
}

/// Transforms a parsed report into matches, in document order.
///
/// # Errors
/// See [`visit_line`].
pub fn transform(report: &Report) -> Result<Vec<Match>> {
    report.blocks.iter().map(transform_block).collect()
}

/// Parses and transforms report text in one step.
///
/// # Errors
/// Returns the first syntax error found.
pub fn parse_matches(source: &str) -> Result<Vec<Match>> {
    transform(&parse(source)?)
}

fn lexeme_error(lexeme: &Lexeme, message: &str) -> Error {
    Error::syntax(
        message,
        lexeme.span.line,
        lexeme.span.column,
        lexeme.text.clone(),
    )
}

fn to_code(lexeme: &Lexeme) -> Result<TeamCode> {
    TeamCode::new(&lexeme.text).map_err(|err| lexeme_error(lexeme, &err.to_string()))
}

fn to_number(lexeme: &Lexeme) -> Result<Jersey> {
    lexeme
        .text
        .parse()
        .map_err(|_| lexeme_error(lexeme, "number out of range"))
}

fn to_minute(lexeme: &Lexeme) -> Result<Minute> {
    let digits = lexeme.text.strip_suffix('\'').unwrap_or(&lexeme.text);
    digits
        .parse()
        .map_err(|_| lexeme_error(lexeme, "minute out of range"))
}

fn to_color(lexeme: &Lexeme) -> Result<CardColor> {
    CardColor::from_literal(&lexeme.text)
        .ok_or_else(|| lexeme_error(lexeme, "card color must be 'Amarilla' or 'Roja'"))
}
