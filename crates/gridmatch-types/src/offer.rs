//! The two immutable advertisements that enter the match plane.
//!
//! A [`JobOffer`] is the consumer's published compute request; a
//! [`ResourceOffer`] is the provider's published capacity
//! advertisement. Both are immutable once created and owned by the
//! submitting party. Lifecycle tracking happens on their containers,
//! never on the offers themselves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{OfferId, PartyId, Pricing, PricingMode, ServiceRoster, Timeouts};

/// A consumer's published compute request with trust constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOffer {
    /// Content-derived identity, stamped before submission.
    pub id: OfferId,
    /// The party that owns this offer.
    pub job_creator: PartyId,
    /// When the offer was created.
    pub created_at: DateTime<Utc>,
    /// The solver and mediators this party accepts.
    pub services: ServiceRoster,
}

/// A provider's published capacity advertisement with trust
/// constraints and pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceOffer {
    /// Content-derived identity, stamped before submission.
    pub id: OfferId,
    /// The party that owns this offer.
    pub resource_provider: PartyId,
    /// When the offer was created.
    pub created_at: DateTime<Utc>,
    /// How this offer prices its capacity. The deal-formation pathway
    /// requires [`PricingMode::FixedPrice`].
    pub mode: PricingMode,
    /// Terms a deal inherits when this offer is matched.
    pub default_pricing: Pricing,
    /// Deadlines a deal inherits when this offer is matched.
    pub default_timeouts: Timeouts,
    /// The solver and mediators this party accepts.
    pub services: ServiceRoster,
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl JobOffer {
    pub fn dummy(job_creator: &str, solver: &str, mediators: &[&str]) -> Self {
        Self {
            id: OfferId::none(),
            job_creator: PartyId::new(job_creator),
            created_at: Utc::now(),
            services: ServiceRoster::new(
                PartyId::new(solver),
                mediators.iter().map(|m| PartyId::new(*m)).collect(),
            ),
        }
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl ResourceOffer {
    pub fn dummy(resource_provider: &str, solver: &str, mediators: &[&str]) -> Self {
        Self {
            id: OfferId::none(),
            resource_provider: PartyId::new(resource_provider),
            created_at: Utc::now(),
            mode: PricingMode::FixedPrice,
            default_pricing: Pricing::default(),
            default_timeouts: Timeouts::default(),
            services: ServiceRoster::new(
                PartyId::new(solver),
                mediators.iter().map(|m| PartyId::new(*m)).collect(),
            ),
        }
    }
}
