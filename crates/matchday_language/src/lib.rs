//! Lexer, parser, and transformer for matchday league reports.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of report text
//! - [`Parser`] - Parsing tokens into a [`Report`] syntax tree
//! - [`transform`] - Turning the syntax tree into typed [`Match`](matchday_foundation::Match) values
//!
//! ```text
//! report text ──▶ Lexer ──▶ Parser ──▶ Report ──▶ transform ──▶ Vec<Match>
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexer;
pub mod parser;
pub mod span;
pub mod syntax;
pub mod token;
pub mod transform;


pub use lexer::Lexer;
pub use parser::{Parser, parse};
pub use span::Span;
pub use syntax::{Lexeme, Line, LineKind, LineupRole, MatchBlock, NumberList, Report};
pub use token::{Label, Token, TokenKind};
pub use transform::{parse_matches, transform};
