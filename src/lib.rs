//! Matchday - League report loader
//!
//! This crate re-exports all layers of the matchday system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: matchday_runtime    - Ingestion, configuration, tables, CLI
//! Layer 2: matchday_engine     - Validation, league aggregation, views
//! Layer 1: matchday_language   - Lexer, parser, syntax tree, transformer
//! Layer 0: matchday_foundation - Roster, match model, errors
//! ```

pub use matchday_engine as engine;
pub use matchday_foundation as foundation;
pub use matchday_language as language;
pub use matchday_runtime as runtime;
