//! Parser for league reports.
//!
//! A recursive-descent parser with one token of lookahead. The grammar it
//! accepts:
//!
//! ```text
//! report     := NEWLINE? block+
//! block      := date home away home_form away_form home_xi away_xi
//!               home_bench? away_bench? event*
//! date       := "Fecha:" DATE EOL
//! home       := "Equipo Local:" COD3 EOL
//! away       := "Equipo Visitante:" COD3 EOL
//! home_form  := "Formación Local:" FORM EOL
//! away_form  := "Formación Visitante:" FORM EOL
//! home_xi    := "Titulares Local:" LIST EOL
//! away_xi    := "Titulares Visitante:" LIST EOL
//! home_bench := "Banco Local:" LIST EOL
//! away_bench := "Banco Visitante:" LIST EOL
//! event      := goal | card | change | SEP EOL
//! goal       := "Gol:" COD3 "," MINUTE "," NUM ("," NUM)? EOL
//! card       := "Tarjeta:" COD3 "," MINUTE "," NUM "," COLOR EOL
//! change     := "Cambio:" COD3 "," MINUTE "," NUM "," NUM EOL
//! LIST       := NUM ("," NUM)*
//! EOL        := NEWLINE | end of input
//! ```
//!
//! A block ends at the next `Fecha:` or at end of input, so separators and
//! blank lines between blocks need no special handling. Any mismatch aborts
//! the whole parse.

use matchday_foundation::{Error, Result, Side};

use crate::lexer::Lexer;
use crate::span::Span;
use crate::syntax::{Lexeme, Line, LineKind, LineupRole, MatchBlock, NumberList, Report};
use crate::token::{Label, Token, TokenKind};

/// Parser for league report text.
pub struct Parser<'src> {
    /// The lexer providing tokens.
    lexer: Lexer<'src>,
    /// Current token (lookahead).
    current: Token,
    /// Source text (for error messages).
    source: &'src str,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            source,
        }
    }

    /// Parses the whole source into a report.
    ///
    /// # Errors
    /// Returns a syntax error at the first token that does not fit the
    /// grammar. Nothing is returned for the blocks parsed before it.
    pub fn parse_report(&mut self) -> Result<Report> {
        self.skip_trivia();
        if self.current.kind == TokenKind::Newline {
            self.advance();
        }

        let mut blocks = Vec::new();
        loop {
            blocks.push(self.parse_block()?);
            if self.current.kind == TokenKind::Eof {
                break;
            }
        }

        Ok(Report { blocks })
    }

    /// Parses one match block.
    fn parse_block(&mut self) -> Result<MatchBlock> {
        let start = self.current.span;
        let mut lines = Vec::new();

        lines.push(self.parse_date_line()?);
        lines.push(self.parse_team_line(Label::HomeTeam, Side::Home)?);
        lines.push(self.parse_team_line(Label::AwayTeam, Side::Away)?);
        lines.push(self.parse_formation_line(Label::HomeFormation, Side::Home)?);
        lines.push(self.parse_formation_line(Label::AwayFormation, Side::Away)?);
        lines.push(self.parse_lineup_line(Label::HomeStarters, Side::Home, LineupRole::Starters)?);
        lines.push(self.parse_lineup_line(Label::AwayStarters, Side::Away, LineupRole::Starters)?);

        if self.at_label(Label::HomeBench) {
            lines.push(self.parse_lineup_line(Label::HomeBench, Side::Home, LineupRole::Bench)?);
        }
        if self.at_label(Label::AwayBench) {
            lines.push(self.parse_lineup_line(Label::AwayBench, Side::Away, LineupRole::Bench)?);
        }

        loop {
            let line = match &self.current.kind {
                TokenKind::Label(Label::Goal) => self.parse_goal_line()?,
                TokenKind::Label(Label::Card) => self.parse_card_line()?,
                TokenKind::Label(Label::Substitution) => self.parse_substitution_line()?,
                TokenKind::Separator => {
                    let span = self.current.span;
                    self.advance();
                    self.end_line()?;
                    Line {
                        kind: LineKind::Separator,
                        span,
                    }
                }
                TokenKind::Label(Label::Date) | TokenKind::Eof => break,
                other => {
                    return Err(self.error(&format!(
                        "expected 'Gol:', 'Tarjeta:', 'Cambio:', a separator or 'Fecha:', found {}",
                        other.name()
                    )));
                }
            };
            lines.push(line);
        }

        let end = lines.last().map_or(start, |line| line.span);
        Ok(MatchBlock {
            lines,
            span: start.to(end),
        })
    }

    /// Parses `Fecha: DATE`.
    fn parse_date_line(&mut self) -> Result<Line> {
        let start = self.expect_label(Label::Date)?;
        let date = self.expect_date()?;
        let span = start.to(date.span);
        self.end_line()?;
        Ok(Line {
            kind: LineKind::Date(date),
            span,
        })
    }

    /// Parses `Equipo Local: COD3` or `Equipo Visitante: COD3`.
    fn parse_team_line(&mut self, label: Label, side: Side) -> Result<Line> {
        let start = self.expect_label(label)?;
        let code = self.expect_code()?;
        let span = start.to(code.span);
        self.end_line()?;
        Ok(Line {
            kind: LineKind::Team { side, code },
            span,
        })
    }

    /// Parses a formation line.
    fn parse_formation_line(&mut self, label: Label, side: Side) -> Result<Line> {
        let start = self.expect_label(label)?;
        let shape = self.expect_formation()?;
        let span = start.to(shape.span);
        self.end_line()?;
        Ok(Line {
            kind: LineKind::Formation { side, shape },
            span,
        })
    }

    /// Parses a starters or bench line.
    fn parse_lineup_line(&mut self, label: Label, side: Side, role: LineupRole) -> Result<Line> {
        let start = self.expect_label(label)?;
        let numbers = self.expect_number_list()?;
        let span = start.to(numbers.span);
        self.end_line()?;
        Ok(Line {
            kind: LineKind::Lineup {
                side,
                role,
                numbers,
            },
            span,
        })
    }

    /// Parses `Gol: COD3, MINUTE, NUM[, NUM]`.
    fn parse_goal_line(&mut self) -> Result<Line> {
        let start = self.expect_label(Label::Goal)?;
        let team = self.expect_code()?;
        self.expect_comma()?;
        let minute = self.expect_minute()?;
        self.expect_comma()?;
        let scorer = self.expect_number()?;

        let assist = if self.current.kind == TokenKind::Comma {
            self.advance();
            Some(self.expect_number()?)
        } else {
            None
        };

        let end = assist.as_ref().map_or(scorer.span, |a| a.span);
        self.end_line()?;
        Ok(Line {
            kind: LineKind::Goal {
                team,
                minute,
                scorer,
                assist,
            },
            span: start.to(end),
        })
    }

    /// Parses `Tarjeta: COD3, MINUTE, NUM, COLOR`.
    fn parse_card_line(&mut self) -> Result<Line> {
        let start = self.expect_label(Label::Card)?;
        let team = self.expect_code()?;
        self.expect_comma()?;
        let minute = self.expect_minute()?;
        self.expect_comma()?;
        let player = self.expect_number()?;
        self.expect_comma()?;
        let color = self.expect_color()?;
        let span = start.to(color.span);
        self.end_line()?;
        Ok(Line {
            kind: LineKind::Card {
                team,
                minute,
                player,
                color,
            },
            span,
        })
    }

    /// Parses `Cambio: COD3, MINUTE, NUM, NUM`.
    fn parse_substitution_line(&mut self) -> Result<Line> {
        let start = self.expect_label(Label::Substitution)?;
        let team = self.expect_code()?;
        self.expect_comma()?;
        let minute = self.expect_minute()?;
        self.expect_comma()?;
        let player_out = self.expect_number()?;
        self.expect_comma()?;
        let player_in = self.expect_number()?;
        let span = start.to(player_in.span);
        self.end_line()?;
        Ok(Line {
            kind: LineKind::Substitution {
                team,
                minute,
                player_out,
                player_in,
            },
            span,
        })
    }

    // =========================================================================
    // Terminals
    // =========================================================================

    /// Expects a specific label, returning its span.
    fn expect_label(&mut self, label: Label) -> Result<Span> {
        if self.at_label(label) {
            let span = self.current.span;
            self.advance();
            Ok(span)
        } else {
            Err(self.unexpected(&format!("'{}'", label.literal())))
        }
    }

    /// Expects a date: `YYYY-MM-DD` or `D/M/YYYY`.
    fn expect_date(&mut self) -> Result<Lexeme> {
        let ok = match &self.current.kind {
            TokenKind::Dashed(text) => is_iso_date(text),
            TokenKind::Slashed(text) => is_day_month_year(text),
            _ => false,
        };
        if ok {
            Ok(self.take_lexeme())
        } else {
            Err(self.unexpected("a date (YYYY-MM-DD or D/M/YYYY)"))
        }
    }

    /// Expects a formation: two or more digit groups joined by `-`.
    fn expect_formation(&mut self) -> Result<Lexeme> {
        if matches!(self.current.kind, TokenKind::Dashed(_)) {
            Ok(self.take_lexeme())
        } else {
            Err(self.unexpected("a formation such as 4-4-2"))
        }
    }

    /// Expects a three-letter team code.
    fn expect_code(&mut self) -> Result<Lexeme> {
        if matches!(self.current.kind, TokenKind::Code(_)) {
            Ok(self.take_lexeme())
        } else {
            Err(self.unexpected("a three-letter team code"))
        }
    }

    /// Expects a plain number.
    fn expect_number(&mut self) -> Result<Lexeme> {
        if matches!(self.current.kind, TokenKind::Int(_)) {
            Ok(self.take_lexeme())
        } else {
            Err(self.unexpected("a number"))
        }
    }

    /// Expects a minute, with or without a trailing apostrophe.
    fn expect_minute(&mut self) -> Result<Lexeme> {
        if matches!(self.current.kind, TokenKind::Int(_) | TokenKind::Minute(_)) {
            Ok(self.take_lexeme())
        } else {
            Err(self.unexpected("a minute"))
        }
    }

    /// Expects `Amarilla` or `Roja`.
    fn expect_color(&mut self) -> Result<Lexeme> {
        if matches!(self.current.kind, TokenKind::Color(_)) {
            Ok(self.take_lexeme())
        } else {
            Err(self.unexpected("'Amarilla' or 'Roja'"))
        }
    }

    /// Expects a comma.
    fn expect_comma(&mut self) -> Result<()> {
        if self.current.kind == TokenKind::Comma {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected("','"))
        }
    }

    /// Expects one or more comma-separated numbers.
    fn expect_number_list(&mut self) -> Result<NumberList> {
        let first = self.expect_number()?;
        let start = first.span;
        let mut items = vec![first];
        while self.current.kind == TokenKind::Comma {
            self.advance();
            items.push(self.expect_number()?);
        }
        let end = items.last().map_or(start, |n| n.span);
        Ok(NumberList {
            items,
            span: start.to(end),
        })
    }

    /// Expects the end of a line: a newline or end of input.
    fn end_line(&mut self) -> Result<()> {
        match self.current.kind {
            TokenKind::Newline => {
                self.advance();
                Ok(())
            }
            TokenKind::Eof => Ok(()),
            _ => Err(self.unexpected("end of line")),
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Returns true if the current token is `label`.
    fn at_label(&self, label: Label) -> bool {
        self.current.kind == TokenKind::Label(label)
    }

    /// Takes the current token's text as a lexeme and advances.
    fn take_lexeme(&mut self) -> Lexeme {
        let lexeme = Lexeme::new(self.current.text(self.source), self.current.span);
        self.advance();
        lexeme
    }

    /// Skips comment tokens.
    fn skip_trivia(&mut self) {
        while self.current.kind.is_trivia() {
            self.current = self.lexer.next_token();
        }
    }

    /// Advances to the next significant token.
    fn advance(&mut self) {
        self.current = self.lexer.next_token();
        self.skip_trivia();
    }

    /// Creates an "expected X, found Y" error at the current token.
    fn unexpected(&self, expected: &str) -> Error {
        self.error(&format!(
            "expected {expected}, found {}",
            self.current.kind.name()
        ))
    }

    /// Creates a syntax error at the current position.
    fn error(&self, message: &str) -> Error {
        self.error_at(self.current.span, message)
    }

    /// Creates a syntax error at a specific span.
    fn error_at(&self, span: Span, message: &str) -> Error {
        Error::syntax(
            message,
            span.line,
            span.column,
            span.line_text(self.source).to_string(),
        )
    }
}

/// Returns true for `YYYY-MM-DD`.
fn is_iso_date(text: &str) -> bool {
    let groups: Vec<&str> = text.split('-').collect();
    matches!(groups.as_slice(), [y, m, d] if y.len() == 4 && m.len() == 2 && d.len() == 2)
}

/// Returns true for `D/M/YYYY` with one- or two-digit day and month.
fn is_day_month_year(text: &str) -> bool {
    let groups: Vec<&str> = text.split('/').collect();
    matches!(
        groups.as_slice(),
        [d, m, y] if (1..=2).contains(&d.len()) && (1..=2).contains(&m.len()) && y.len() == 4
    )
}

/// Parses report text into a syntax tree.
///
/// # Errors
/// Returns a syntax error if the text does not match the report grammar.
pub fn parse(source: &str) -> Result<Report> {
    Parser::new(source).parse_report()
}
