//! Report ingestion: text in, registered matches out.
//!
//! Loading runs in two phases. The whole text is parsed and transformed
//! first, so a syntax error anywhere leaves the league untouched. Then each
//! match is validated against the roster and registered, in document order.
//! What a validation failure does to matches already registered by the same
//! call is governed by [`BatchPolicy`].

use std::fs;
use std::path::Path;

use matchday_engine::{League, Registration, validate};
use matchday_foundation::{Error, Match, Result, Roster};
use matchday_language::parse_matches;

use crate::config::{BatchPolicy, IngestConfig};

/// Loads reports into a league against a fixed roster.
#[derive(Clone, Debug)]
pub struct Ingestor<'r> {
    roster: &'r Roster,
    config: IngestConfig,
}

impl<'r> Ingestor<'r> {
    /// Creates an ingestor for `roster`.
    #[must_use]
    pub const fn new(roster: &'r Roster, config: IngestConfig) -> Self {
        Self { roster, config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Parses `text` and registers every match it contains.
    ///
    /// Returns all parsed matches in document order, including any that were
    /// skipped as duplicates.
    ///
    /// # Errors
    /// Returns a syntax error before anything is registered, or the first
    /// validation error with a frame naming the offending match.
    pub fn load_text(&self, league: &mut League, text: &str) -> Result<Vec<Match>> {
        self.ingest(league, text, self.config.source_name.as_deref())
    }

    /// Reads a UTF-8 report file and loads it.
    ///
    /// The file path becomes the source name unless one is configured.
    ///
    /// # Errors
    /// Fails if the file cannot be read, or as [`load_text`](Self::load_text).
    pub fn load_file(&self, league: &mut League, path: impl AsRef<Path>) -> Result<Vec<Match>> {
        let path = path.as_ref();
        let source = self
            .config
            .source_name
            .clone()
            .unwrap_or_else(|| path.display().to_string());

        let text = fs::read_to_string(path).map_err(|e| Error::from(e).with_source(&source))?;
        self.ingest(league, &text, Some(&source))
    }

    fn ingest(&self, league: &mut League, text: &str, source: Option<&str>) -> Result<Vec<Match>> {
        let attach = |err: Error| match source {
            Some(name) => err.with_source(name),
            None => err,
        };

        let matches = parse_matches(text).map_err(attach)?;
        tracing::debug!(blocks = matches.len(), "parsed report");

        let mut snapshot = match self.config.batch_policy {
            BatchPolicy::AllOrNothing => Some(league.clone()),
            BatchPolicy::KeepAccepted => None,
        };
        let (mut accepted, mut duplicates) = (0usize, 0usize);

        for (index, fixture) in matches.iter().enumerate() {
            if let Err(err) = validate(fixture, self.roster) {
                tracing::warn!(
                    index = index + 1,
                    key = %fixture.key(),
                    error = %err,
                    "rejected match"
                );
                if let Some(saved) = snapshot.take() {
                    *league = saved;
                    if accepted > 0 {
                        tracing::warn!(discarded = accepted, "rolled back batch");
                    }
                }
                let err = Error::from(err).with_frame(format!(
                    "match {} ({})",
                    index + 1,
                    fixture.key()
                ));
                return Err(attach(err));
            }

            match league.register(fixture.clone()) {
                Registration::Accepted(key) => {
                    tracing::info!(key = %key, "accepted match");
                    accepted += 1;
                }
                Registration::Duplicate(key) => {
                    tracing::debug!(key = %key, "skipped duplicate match");
                    duplicates += 1;
                }
            }
        }

        tracing::info!(
            matches = matches.len(),
            accepted,
            duplicates,
            "loaded report"
        );
        Ok(matches)
    }
}

/// Loads `text` into `league` with the default configuration.
///
/// # Errors
/// See [`Ingestor::load_text`].
pub fn load_text(text: &str, roster: &Roster, league: &mut League) -> Result<Vec<Match>> {
    Ingestor::new(roster, IngestConfig::default()).load_text(league, text)
}
