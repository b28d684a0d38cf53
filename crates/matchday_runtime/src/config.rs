//! Configuration for report ingestion.

/// What happens to a batch when one of its matches fails validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BatchPolicy {
    /// Discard every registration made by the failing call.
    #[default]
    AllOrNothing,
    /// Keep the matches registered before the failing one.
    KeepAccepted,
}

/// Configuration for an [`Ingestor`](crate::Ingestor).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IngestConfig {
    /// Policy applied when a match is rejected.
    pub batch_policy: BatchPolicy,

    /// Name of the report being loaded, attached to error context.
    pub source_name: Option<String>,
}

impl IngestConfig {
    /// Creates a configuration with the default all-or-nothing policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that keeps matches accepted before a failure.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            batch_policy: BatchPolicy::KeepAccepted,
            ..Self::default()
        }
    }

    /// Builder method to set the batch policy.
    #[must_use]
    pub fn with_batch_policy(mut self, policy: BatchPolicy) -> Self {
        self.batch_policy = policy;
        self
    }

    /// Builder method to set the source name.
    #[must_use]
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }
}
