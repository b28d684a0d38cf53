//! Validation, aggregation, and query views for matchday.
//!
//! This crate provides:
//! - [`validate`] - Checks a parsed match against the roster
//! - [`League`] - Cumulative league state built from accepted matches
//! - [`standings`], [`top_scorers`], [`results`] - Sorted read-only views

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod league;
pub mod validate;
pub mod views;

pub use league::{League, POINTS_FOR_DRAW, POINTS_FOR_WIN, Registration, TeamRecord};
pub use validate::{STARTERS, validate};
pub use views::{ResultRow, ScorerRow, StandingRow, results, standings, top_scorers};
