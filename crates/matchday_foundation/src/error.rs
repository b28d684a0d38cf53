//! Error types for matchday.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::code::TeamCode;
use crate::fixture::{Jersey, Minute, Side};

/// Convenience alias for results carrying a matchday [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for matchday operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error, replacing any existing context.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Pushes a frame onto this error's context, creating it if absent.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(frame));
        self
    }

    /// Sets the source name on this error's context, creating it if absent.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_source(source));
        self
    }

    /// Creates a syntax error.
    #[must_use]
    pub fn syntax(message: impl Into<String>, line: u32, column: u32, context: String) -> Self {
        Self::new(ErrorKind::Syntax {
            message: message.into(),
            line,
            column,
            context,
        })
    }

    /// Returns true if this is a syntax error.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self.kind, ErrorKind::Syntax { .. })
    }

    /// Returns the validation error, if this is one.
    #[must_use]
    pub const fn as_validation(&self) -> Option<&ValidationError> {
        match &self.kind {
            ErrorKind::Validation(err) => Some(err),
            _ => None,
        }
    }

    /// Renders the error message followed by its context, if any.
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = self.kind.to_string();
        if let ErrorKind::Syntax { context, .. } = &self.kind {
            if !context.is_empty() {
                out.push_str("\n  | ");
                out.push_str(context);
            }
        }
        if let Some(ctx) = &self.context {
            let rendered = ctx.to_string();
            if !rendered.is_empty() {
                out.push('\n');
                out.push_str(rendered.trim_end());
            }
        }
        out
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::new(ErrorKind::Validation(err))
    }
}

impl From<RosterError> for Error {
    fn from(err: RosterError) -> Self {
        Self::new(ErrorKind::Roster(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The report text does not match the grammar.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        /// Description of the syntax error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// The source line where the error occurred.
        context: String,
    },

    /// A parsed match does not agree with the roster.
    #[error("invalid match: {0}")]
    Validation(ValidationError),

    /// The roster itself could not be built.
    #[error("invalid roster: {0}")]
    Roster(RosterError),

    /// Reading a report failed.
    #[error("i/o error: {0}")]
    Io(std::io::Error),
}

/// Semantic faults found when checking a match against the roster.
///
/// Checks run in a fixed order and the first violation wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A home or away team code is not registered.
    #[error("unknown {side} team {code}; register teams before loading matches")]
    UnknownTeam {
        /// Which side referenced the team.
        side: Side,
        /// The unregistered code.
        code: TeamCode,
    },

    /// A starting lineup does not have exactly eleven entries.
    #[error("{team}: expected 11 starters, got {count}")]
    WrongLineupSize {
        /// The offending side.
        side: Side,
        /// That side's team.
        team: TeamCode,
        /// Number of starters listed.
        count: usize,
    },

    /// A starter is not on that side's roster.
    #[error("{team}: no player #{number} in the {side} squad")]
    UnknownPlayer {
        /// The offending side.
        side: Side,
        /// That side's team.
        team: TeamCode,
        /// The unknown jersey number.
        number: Jersey,
    },

    /// A goal names an unknown team, scorer or assistant.
    #[error("invalid goal at {minute}': {team} {fault}")]
    InvalidGoal {
        /// Team credited with the goal.
        team: TeamCode,
        /// Minute of the goal.
        minute: Minute,
        /// What was wrong with it.
        fault: GoalFault,
    },

    /// A card names a player that does not exist.
    #[error("invalid card at {minute}': {team} player #{player} does not exist")]
    InvalidCard {
        /// Team of the booked player.
        team: TeamCode,
        /// Minute of the card.
        minute: Minute,
        /// The booked jersey number.
        player: Jersey,
    },

    /// A substitution names a player that does not exist.
    #[error("invalid substitution at {minute}': {team} off #{player_out}, on #{player_in}")]
    InvalidSubstitution {
        /// Team making the change.
        team: TeamCode,
        /// Minute of the change.
        minute: Minute,
        /// Jersey number leaving the pitch.
        player_out: Jersey,
        /// Jersey number entering the pitch.
        player_in: Jersey,
    },
}

/// The specific reason a goal failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalFault {
    /// The credited team is not registered.
    UnknownTeam,
    /// The scorer is not on the team.
    UnknownScorer(Jersey),
    /// The assistant is not on the team.
    UnknownAssist(Jersey),
}

impl fmt::Display for GoalFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTeam => write!(f, "is not a registered team"),
            Self::UnknownScorer(n) => write!(f, "scorer #{n} does not exist"),
            Self::UnknownAssist(n) => write!(f, "assistant #{n} does not exist"),
        }
    }
}

/// Errors raised while building a roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// A team code is not three letters.
    #[error("team code must be 3 letters, got {0:?}")]
    InvalidCode(String),

    /// A team code is already registered.
    #[error("duplicate team: {0}")]
    DuplicateTeam(TeamCode),

    /// A jersey number is outside 1..=99.
    #[error("{team}: jersey number must be 1..99, got {number}")]
    JerseyOutOfRange {
        /// Team receiving the player.
        team: TeamCode,
        /// The rejected number.
        number: Jersey,
    },

    /// A jersey number is already taken on the team.
    #[error("{team}: jersey #{number} is already taken")]
    DuplicateJersey {
        /// Team receiving the player.
        team: TeamCode,
        /// The rejected number.
        number: Jersey,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Report file or other input name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Column number in source.
    pub column: Option<usize>,
    /// Enclosing units of work, innermost last.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
