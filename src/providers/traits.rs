// 3rd party crates
use async_trait::async_trait;

/// The write a pass attempted when reporting a failed outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    Create,
    Update,
}

/// Result of one reconciliation pass against a provider.
///
/// `Created`, `Updated` and `Skipped` are mutually exclusive by
/// construction: a record that exists cannot also trigger a create.
/// `FailedWrite` reports a rejected create or update; the divergence
/// persists, so the next pass retries implicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    Created { record_id: String },
    Updated { record_id: String },
    Skipped { record_id: String },
    FailedWrite {
        action: WriteAction,
        record_id: Option<String>,
    },
}

impl ReconcileOutcome {
    /// The provider-side record id this outcome refers to, if one exists.
    pub fn record_id(&self) -> Option<&str> {
        match self {
            Self::Created { record_id }
            | Self::Updated { record_id }
            | Self::Skipped { record_id } => Some(record_id),
            Self::FailedWrite { record_id, .. } => record_id.as_deref(),
        }
    }
}

/// Core trait for DNS providers that can converge a single record onto the
/// caller's current public IPv4 address.
///
/// Implementors decide how to talk to their API, but every pass must be
/// idempotent: given an unchanged address and an already-matching record,
/// repeated calls yield `Skipped` and issue no writes.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Provider-specific settings, such as credentials and the target zone.
    type Config: Clone + Send + Sync;

    /// Provider-specific error type.
    type Error: std::error::Error + Send + Sync;

    /// Creates a new instance of the provider with the given configuration.
    fn new(config: Self::Config) -> Result<Self, Self::Error>
    where
        Self: Sized;

    /// Runs one reconciliation pass: observe current provider state, then
    /// perform the minimal create/update/skip action to converge on
    /// `ipv4_addr`.
    async fn reconcile(&self, ipv4_addr: &str) -> Result<ReconcileOutcome, Self::Error>;

    /// Gets the provider's name, lowercase and unique across providers.
    fn get_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_is_surfaced_for_every_outcome() {
        let created = ReconcileOutcome::Created {
            record_id: "abc".to_string(),
        };
        assert_eq!(created.record_id(), Some("abc"));

        let skipped = ReconcileOutcome::Skipped {
            record_id: "def".to_string(),
        };
        assert_eq!(skipped.record_id(), Some("def"));

        let failed_create = ReconcileOutcome::FailedWrite {
            action: WriteAction::Create,
            record_id: None,
        };
        assert_eq!(failed_create.record_id(), None);

        let failed_update = ReconcileOutcome::FailedWrite {
            action: WriteAction::Update,
            record_id: Some("ghi".to_string()),
        };
        assert_eq!(failed_update.record_id(), Some("ghi"));
    }
}
