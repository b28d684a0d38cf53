//! Token types for league reports.
//!
//! Tokens are the output of the lexer and input to the parser.

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }

    /// Returns true if this token ends a line.
    #[must_use]
    pub const fn is_line_end(&self) -> bool {
        matches!(self.kind, TokenKind::Newline | TokenKind::Eof)
    }
}

/// The literal label that opens a report line, colon included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    /// `Fecha:`
    Date,
    /// `Equipo Local:`
    HomeTeam,
    /// `Equipo Visitante:`
    AwayTeam,
    /// `Formación Local:`
    HomeFormation,
    /// `Formación Visitante:`
    AwayFormation,
    /// `Titulares Local:`
    HomeStarters,
    /// `Titulares Visitante:`
    AwayStarters,
    /// `Banco Local:`
    HomeBench,
    /// `Banco Visitante:`
    AwayBench,
    /// `Gol:`
    Goal,
    /// `Tarjeta:`
    Card,
    /// `Cambio:`
    Substitution,
}

impl Label {
    /// Every label, longest literal first so prefix matching never picks a
    /// shorter label over a longer one.
    pub const ALL: [Self; 12] = [
        Self::AwayFormation,
        Self::AwayStarters,
        Self::AwayTeam,
        Self::HomeFormation,
        Self::HomeStarters,
        Self::AwayBench,
        Self::HomeTeam,
        Self::HomeBench,
        Self::Card,
        Self::Substitution,
        Self::Date,
        Self::Goal,
    ];

    /// Returns the exact literal as it must appear in a report.
    #[must_use]
    pub const fn literal(self) -> &'static str {
        match self {
            Self::Date => "Fecha:",
            Self::HomeTeam => "Equipo Local:",
            Self::AwayTeam => "Equipo Visitante:",
            Self::HomeFormation => "Formación Local:",
            Self::AwayFormation => "Formación Visitante:",
            Self::HomeStarters => "Titulares Local:",
            Self::AwayStarters => "Titulares Visitante:",
            Self::HomeBench => "Banco Local:",
            Self::AwayBench => "Banco Visitante:",
            Self::Goal => "Gol:",
            Self::Card => "Tarjeta:",
            Self::Substitution => "Cambio:",
        }
    }

    /// Matches a label at the start of `text`, case-sensitively.
    #[must_use]
    pub fn match_prefix(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|label| text.starts_with(label.literal()))
    }
}

/// Token types for league reports.
///
/// The lexer does not know which line it is on, so digit groups joined by
/// `-` or `/` come out as raw shapes and the parser decides whether they
/// are a date or a formation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A line label such as `Gol:`
    Label(Label),
    /// Three letters, any case, e.g. `bar`
    Code(String),
    /// `Amarilla` or `Roja`
    Color(String),
    /// Digits, e.g. `10`
    Int(String),
    /// Digits followed by an apostrophe, e.g. `90'`
    Minute(String),
    /// Digit groups joined by `-`, e.g. `4-4-2` or `2024-05-12`
    Dashed(String),
    /// Digit groups joined by `/`, e.g. `5/1/2024`
    Slashed(String),
    /// `,`
    Comma,
    /// A `---` or `##` separator
    Separator,
    /// One or more line breaks, with any blank or comment-only lines between
    Newline,
    /// Comment text (including `#`)
    Comment(String),
    /// End of input
    Eof,
    /// Lexer error
    Error(String),
}

impl TokenKind {
    /// Returns true if this token kind should be ignored during parsing.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(self, Self::Comment(_))
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Label(label) => format!("'{}'", label.literal()),
            Self::Code(text) => format!("team code '{text}'"),
            Self::Color(text) => format!("card color '{text}'"),
            Self::Int(text) => format!("number '{text}'"),
            Self::Minute(text) => format!("minute '{text}'"),
            Self::Dashed(text) | Self::Slashed(text) => format!("'{text}'"),
            Self::Comma => "','".to_string(),
            Self::Separator => "separator".to_string(),
            Self::Newline => "end of line".to_string(),
            Self::Comment(_) => "comment".to_string(),
            Self::Eof => "end of input".to_string(),
            Self::Error(msg) => msg.clone(),
        }
    }
}
