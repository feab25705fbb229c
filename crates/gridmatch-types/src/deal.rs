//! The deal: the matched, identity-bearing agreement binding one job
//! offer to one resource offer.
//!
//! A [`Deal`] is created once by the assembler and never mutated;
//! lifecycle changes happen on its container. Its `id` is a
//! content-derived digest over the fully-assembled record, so two
//! assemblies of the same logical deal always carry the same identity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DealId, JobOffer, PartyId, Pricing, ResourceOffer, Timeouts};

/// The parties bound by a deal.
///
/// Mediator order carries no meaning beyond determinism: it follows the
/// resource offer's declared list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealMembers {
    /// The matching authority both offers named.
    pub solver: PartyId,
    pub job_creator: PartyId,
    pub resource_provider: PartyId,
    /// Mediators trusted by both sides (at least one).
    pub mediators: Vec<PartyId>,
}

/// The binding agreement between one job offer and one resource offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    /// Canonical content-derived identity. Blank only transiently,
    /// while the assembler computes the digest.
    pub id: DealId,
    pub members: DealMembers,
    /// Copied verbatim from the resource offer's defaults.
    pub pricing: Pricing,
    /// Copied verbatim from the resource offer's defaults.
    pub timeouts: Timeouts,
    /// The originating job offer, embedded whole.
    pub job_offer: JobOffer,
    /// The originating resource offer, embedded whole.
    pub resource_offer: ResourceOffer,
}

impl Deal {
    /// Whether `party` is bound by this deal in any role.
    #[must_use]
    pub fn involves(&self, party: &PartyId) -> bool {
        self.members.solver == *party
            || self.members.job_creator == *party
            || self.members.resource_provider == *party
            || self.members.mediators.contains(party)
    }
}

impl fmt::Display for Deal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deal[{}] {} -> {} via {} ({} mediators)",
            self.id,
            self.members.job_creator.short(),
            self.members.resource_provider.short(),
            self.members.solver.short(),
            self.members.mediators.len(),
        )
    }
}
