//! Structured event reporting.
//!
//! The reporter is a thin consumer of the event taxonomy: one
//! structured record per event, keyed by a badge-qualified kind name.
//! The sink is an injected capability, not a process-global logger, so
//! multiple solver instances can report concurrently and tests can
//! capture output in isolation. Reporting never fails outward: the
//! marketplace's critical path outranks completeness of its audit
//! trail, and the sink contract has no error channel.

use std::fmt;
use std::sync::Arc;

use gridmatch_types::SolverConfig;

use crate::SolverEvent;

/// Destination for reported event records.
///
/// Implementations must be safe for concurrent writes; the reporter
/// adds no synchronization of its own.
pub trait EventSink: Send + Sync {
    /// Write one structured record. `key` is the badge-qualified event
    /// label; `payload` is the debug-rendered event payload.
    fn emit(&self, key: &str, payload: &str);
}

/// Default sink: one `tracing::info!` line per event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, key: &str, payload: &str) {
        tracing::info!(target: "gridmatch::events", event = %key, payload = %payload);
    }
}

/// Reports solver events to an injected sink, tagged with the
/// originating service's badge.
#[derive(Clone)]
pub struct EventReporter {
    badge: String,
    sink: Arc<dyn EventSink>,
}

impl EventReporter {
    #[must_use]
    pub fn new(badge: impl Into<String>, sink: Arc<dyn EventSink>) -> Self {
        Self {
            badge: badge.into(),
            sink,
        }
    }

    /// Reporter writing to the process's `tracing` subscriber.
    #[must_use]
    pub fn with_tracing(badge: impl Into<String>) -> Self {
        Self::new(badge, Arc::new(TracingSink))
    }

    /// Reporter configured from a [`SolverConfig`], writing to
    /// `tracing`.
    #[must_use]
    pub fn from_config(config: &SolverConfig) -> Self {
        Self::with_tracing(config.badge.clone())
    }

    #[must_use]
    pub fn badge(&self) -> &str {
        &self.badge
    }

    /// Emit one structured record for `event`.
    pub fn report(&self, event: &SolverEvent) {
        let key = format!("{} -> {}", self.badge, event.label());
        self.sink.emit(&key, &event.payload());
    }
}

impl fmt::Debug for EventReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventReporter")
            .field("badge", &self.badge)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use gridmatch_types::{
        AgreementState, DealId, JobOffer, JobOfferContainer, OfferId, PartyId, ResourceOffer,
        ResourceOfferContainer,
    };

    use super::*;

    /// Sink that records every emitted (key, payload) pair.
    #[derive(Default)]
    struct CollectingSink {
        records: Mutex<Vec<(String, String)>>,
    }

    impl EventSink for CollectingSink {
        fn emit(&self, key: &str, payload: &str) {
            self.records
                .lock()
                .unwrap()
                .push((key.to_string(), payload.to_string()));
        }
    }

    fn job_container() -> JobOfferContainer {
        let offer = JobOffer::dummy("0xjc", "S", &["M1"]);
        JobOfferContainer {
            id: OfferId::from_digest([1u8; 32]),
            deal_id: DealId::none(),
            job_creator: offer.job_creator.clone(),
            state: AgreementState::default(),
            job_offer: offer,
        }
    }

    fn resource_container() -> ResourceOfferContainer {
        let offer = ResourceOffer::dummy("0xrp", "S", &["M1"]);
        ResourceOfferContainer {
            id: OfferId::from_digest([2u8; 32]),
            deal_id: DealId::none(),
            resource_provider: offer.resource_provider.clone(),
            state: AgreementState::default(),
            resource_offer: offer,
        }
    }

    #[test]
    fn record_is_badge_qualified() {
        let sink = Arc::new(CollectingSink::default());
        let reporter = EventReporter::new("solver-eu-1", sink.clone());

        reporter.report(&SolverEvent::JobOfferAdded(job_container()));

        let records = sink.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, "solver-eu-1 -> JobOfferAdded");
        assert!(records[0].1.contains("0xjc"));
    }

    #[test]
    fn every_kind_emits_exactly_one_record() {
        use crate::SolverEvent::{
            JobOfferAdded, JobOfferStateUpdated, ResourceOfferAdded, ResourceOfferStateUpdated,
        };

        let sink = Arc::new(CollectingSink::default());
        let reporter = EventReporter::new("solver", sink.clone());

        reporter.report(&JobOfferAdded(job_container()));
        reporter.report(&ResourceOfferAdded(resource_container()));
        reporter.report(&JobOfferStateUpdated(job_container()));
        reporter.report(&ResourceOfferStateUpdated(resource_container()));

        let records = sink.records.lock().unwrap();
        let keys: Vec<&str> = records.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "solver -> JobOfferAdded",
                "solver -> ResourceOfferAdded",
                "solver -> JobOfferStateUpdated",
                "solver -> ResourceOfferStateUpdated",
            ]
        );
    }

    #[test]
    fn from_config_uses_configured_badge() {
        let config = SolverConfig {
            address: PartyId::new("0xsolver"),
            badge: "solver-us-2".into(),
        };
        let reporter = EventReporter::from_config(&config);
        assert_eq!(reporter.badge(), "solver-us-2");
    }

    #[test]
    fn tracing_sink_smoke() {
        use tracing_subscriber::util::SubscriberInitExt;
        let _guard = tracing_subscriber::fmt()
            .with_test_writer()
            .set_default();

        let reporter = EventReporter::with_tracing("solver");
        reporter.report(&SolverEvent::JobOfferAdded(job_container()));
    }
}
