//! Concrete syntax tree for league reports.
//!
//! The tree keeps every value as the raw text the lexer saw, together with
//! its span. Converting text to numbers and codes to canonical form is the
//! transformer's job, not the parser's.

use matchday_foundation::Side;

use crate::span::Span;

/// A raw token value and where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexeme {
    /// Text exactly as written.
    pub text: String,
    /// Source location.
    pub span: Span,
}

impl Lexeme {
    /// Creates a new lexeme.
    #[must_use]
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

/// A comma-separated run of numbers, e.g. a lineup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberList {
    /// The numbers in listed order.
    pub items: Vec<Lexeme>,
    /// Span from the first number to the last.
    pub span: Span,
}

/// Whether a lineup line lists starters or substitutes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineupRole {
    /// `Titulares ...:`
    Starters,
    /// `Banco ...:`
    Bench,
}

/// The kinds of line a match block is made of.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// `Fecha: 2024-05-12`
    Date(Lexeme),
    /// `Equipo Local: BAR`
    Team {
        /// Side this line describes.
        side: Side,
        /// Team code as written.
        code: Lexeme,
    },
    /// `Formación Local: 4-3-3`
    Formation {
        /// Side this line describes.
        side: Side,
        /// Formation as written.
        shape: Lexeme,
    },
    /// `Titulares Local: 1,2,...` or `Banco Local: 12,13`
    Lineup {
        /// Side this line describes.
        side: Side,
        /// Starters or bench.
        role: LineupRole,
        /// Jersey numbers.
        numbers: NumberList,
    },
    /// `Gol: BAR, 34', 9, 10`
    Goal {
        /// Team code.
        team: Lexeme,
        /// Minute, apostrophe included if written.
        minute: Lexeme,
        /// Scorer number.
        scorer: Lexeme,
        /// Assistant number, present only if the line has a fourth field.
        assist: Option<Lexeme>,
    },
    /// `Tarjeta: RMA, 40, 4, Amarilla`
    Card {
        /// Team code.
        team: Lexeme,
        /// Minute, apostrophe included if written.
        minute: Lexeme,
        /// Booked player's number.
        player: Lexeme,
        /// `Amarilla` or `Roja`.
        color: Lexeme,
    },
    /// `Cambio: BAR, 60, 7, 16`
    Substitution {
        /// Team code.
        team: Lexeme,
        /// Minute, apostrophe included if written.
        minute: Lexeme,
        /// Number leaving.
        player_out: Lexeme,
        /// Number entering.
        player_in: Lexeme,
    },
    /// `---` or `##`
    Separator,
}

impl LineKind {
    /// Returns true for goal, card, substitution and separator lines.
    #[must_use]
    pub const fn is_event(&self) -> bool {
        matches!(
            self,
            Self::Goal { .. } | Self::Card { .. } | Self::Substitution { .. } | Self::Separator
        )
    }
}

/// One line of a match block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    /// What the line says.
    pub kind: LineKind,
    /// Span from the label to the last value on the line.
    pub span: Span,
}

/// One match block: header lines in fixed order, then events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchBlock {
    /// Lines in source order.
    pub lines: Vec<Line>,
    /// Span from the `Fecha:` label to the end of the last line.
    pub span: Span,
}

impl MatchBlock {
    /// Returns the date lexeme.
    #[must_use]
    pub fn date(&self) -> Option<&Lexeme> {
        self.lines.iter().find_map(|line| match &line.kind {
            LineKind::Date(date) => Some(date),
            _ => None,
        })
    }

    /// Iterates over event lines, separators included.
    pub fn events(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|line| line.kind.is_event())
    }
}

/// A whole parsed report: one or more match blocks.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Report {
    /// Blocks in document order.
    pub blocks: Vec<MatchBlock>,
}

impl Report {
    /// Number of match blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if the report has no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
