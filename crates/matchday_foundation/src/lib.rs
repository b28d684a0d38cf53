//! Core types for matchday.
//!
//! This crate provides:
//! - [`TeamCode`] - Canonical three-letter team codes
//! - [`Roster`], [`Team`], [`Player`] - The registry of teams and jersey numbers
//! - [`Match`] - A single parsed match report with its events
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod code;
pub mod error;
pub mod fixture;
pub mod roster;

pub use code::TeamCode;
pub use error::{Error, ErrorContext, ErrorKind, GoalFault, Result, RosterError, ValidationError};
pub use fixture::{Card, CardColor, Goal, Jersey, Match, MatchKey, Minute, Side, Substitution};
pub use roster::{Player, Roster, Team};
