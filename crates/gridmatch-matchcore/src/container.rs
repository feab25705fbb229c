//! The container factory: pure constructors wrapping offers and deals
//! in their tracking containers.
//!
//! Every container starts in the default agreement state; offer
//! containers start with an empty deal linkage. No validation happens
//! here; the orchestration layer runs [`crate::validate`] before
//! containerizing.

use gridmatch_types::{
    AgreementState, Deal, DealContainer, DealId, DealTransactions, JobOffer, JobOfferContainer,
    ResourceOffer, ResourceOfferContainer,
};

/// Wrap a job offer in its tracking container.
#[must_use]
pub fn containerize_job_offer(job_offer: JobOffer) -> JobOfferContainer {
    JobOfferContainer {
        id: job_offer.id.clone(),
        deal_id: DealId::none(),
        job_creator: job_offer.job_creator.clone(),
        state: AgreementState::default(),
        job_offer,
    }
}

/// Wrap a resource offer in its tracking container.
#[must_use]
pub fn containerize_resource_offer(resource_offer: ResourceOffer) -> ResourceOfferContainer {
    ResourceOfferContainer {
        id: resource_offer.id.clone(),
        deal_id: DealId::none(),
        resource_provider: resource_offer.resource_provider.clone(),
        state: AgreementState::default(),
        resource_offer,
    }
}

/// Wrap a deal in its tracking container, deriving the party
/// identities and offer sub-identities from the deal's embedded
/// offers.
#[must_use]
pub fn containerize_deal(deal: Deal) -> DealContainer {
    DealContainer {
        id: deal.id.clone(),
        job_creator: deal.job_offer.job_creator.clone(),
        resource_provider: deal.resource_offer.resource_provider.clone(),
        job_offer: deal.job_offer.id.clone(),
        resource_offer: deal.resource_offer.id.clone(),
        state: AgreementState::default(),
        transactions: DealTransactions::default(),
        deal,
    }
}
