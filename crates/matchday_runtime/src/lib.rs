//! Report ingestion, configuration, and CLI for matchday.
//!
//! This crate provides:
//! - [`Ingestor`] - Parses, validates and registers report text in one call
//! - [`IngestConfig`] - Batch policy and source naming for ingestion
//! - [`demo_roster`] - The built-in four-team roster used by the CLI
//! - Plain-text rendering of the standings, scorer and result tables

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod demo;
pub mod ingest;
pub mod tables;

pub use config::{BatchPolicy, IngestConfig};
pub use demo::demo_roster;
pub use ingest::{Ingestor, load_text};
pub use tables::{render_results, render_scorers, render_standings};
