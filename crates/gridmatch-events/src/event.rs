//! The closed taxonomy of marketplace occurrences.
//!
//! The orchestrating solver constructs one [`SolverEvent`] per
//! state-changing step; the reporter is the only consumer. Because the
//! taxonomy is a sum type and every consumer matches exhaustively,
//! adding a kind is a compile-time-checked change; there is no
//! runtime fallthrough that could drop an event silently.

use std::fmt;

use gridmatch_types::{DealContainer, JobOfferContainer, ResourceOfferContainer};
use serde::{Deserialize, Serialize};

/// A marketplace occurrence, tagged with its payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SolverEvent {
    /// A validated job offer entered the marketplace.
    JobOfferAdded(JobOfferContainer),
    /// A validated resource offer entered the marketplace.
    ResourceOfferAdded(ResourceOfferContainer),
    /// A deal was formed and containerized.
    DealAdded(DealContainer),
    /// The agreement state machine advanced a job offer container.
    JobOfferStateUpdated(JobOfferContainer),
    /// The agreement state machine advanced a resource offer container.
    ResourceOfferStateUpdated(ResourceOfferContainer),
    /// The agreement state machine advanced a deal container.
    DealStateUpdated(DealContainer),
    /// Settlement stamped a resource-provider transaction on a deal.
    ResourceProviderTransactionsUpdated(DealContainer),
    /// Settlement stamped a job-creator transaction on a deal.
    JobCreatorTransactionsUpdated(DealContainer),
}

impl SolverEvent {
    /// The stable kind name used in log lines.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::JobOfferAdded(_) => "JobOfferAdded",
            Self::ResourceOfferAdded(_) => "ResourceOfferAdded",
            Self::DealAdded(_) => "DealAdded",
            Self::JobOfferStateUpdated(_) => "JobOfferStateUpdated",
            Self::ResourceOfferStateUpdated(_) => "ResourceOfferStateUpdated",
            Self::DealStateUpdated(_) => "DealStateUpdated",
            Self::ResourceProviderTransactionsUpdated(_) => "ResourceProviderTransactionsUpdated",
            Self::JobCreatorTransactionsUpdated(_) => "JobCreatorTransactionsUpdated",
        }
    }

    /// Debug-rendered payload for the structured log line. Operational
    /// output only; no format guarantee beyond "human-greppable".
    #[must_use]
    pub fn payload(&self) -> String {
        let payload: &dyn fmt::Debug = match self {
            Self::JobOfferAdded(container) | Self::JobOfferStateUpdated(container) => container,
            Self::ResourceOfferAdded(container) | Self::ResourceOfferStateUpdated(container) => {
                container
            }
            Self::DealAdded(container)
            | Self::DealStateUpdated(container)
            | Self::ResourceProviderTransactionsUpdated(container)
            | Self::JobCreatorTransactionsUpdated(container) => container,
        };
        format!("{payload:?}")
    }
}
