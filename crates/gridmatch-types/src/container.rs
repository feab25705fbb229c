//! Mutable tracking containers around the immutable offer and deal
//! records.
//!
//! Containers are the only mutable entities in this core. Each carries
//! the wrapped record, the owning party, the current
//! [`AgreementState`], and (for offer containers) the deal linkage.
//! The linkage invariant: `deal_id` is set exactly once, from empty to
//! a concrete value, when the offer is matched. [`assign_deal`]
//! enforces it; a second assignment returns
//! [`GridmatchError::DealAlreadyLinked`].
//!
//! [`assign_deal`]: JobOfferContainer::assign_deal

use serde::{Deserialize, Serialize};

use crate::{
    AgreementState, Deal, DealId, DealTransactions, GridmatchError, JobOffer, OfferId, PartyId,
    ResourceOffer, Result,
};

/// Tracking wrapper around a [`JobOffer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOfferContainer {
    /// Mirrors the wrapped offer's identity.
    pub id: OfferId,
    /// Empty until the offer is matched into a deal.
    pub deal_id: DealId,
    pub job_creator: PartyId,
    pub state: AgreementState,
    pub job_offer: JobOffer,
}

impl JobOfferContainer {
    /// Link this offer to the deal it was matched into. Succeeds
    /// exactly once.
    pub fn assign_deal(&mut self, deal_id: DealId) -> Result<()> {
        link_deal(&mut self.deal_id, &self.id, deal_id)
    }
}

/// Tracking wrapper around a [`ResourceOffer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceOfferContainer {
    /// Mirrors the wrapped offer's identity.
    pub id: OfferId,
    /// Empty until the offer is matched into a deal.
    pub deal_id: DealId,
    pub resource_provider: PartyId,
    pub state: AgreementState,
    pub resource_offer: ResourceOffer,
}

impl ResourceOfferContainer {
    /// Link this offer to the deal it was matched into. Succeeds
    /// exactly once.
    pub fn assign_deal(&mut self, deal_id: DealId) -> Result<()> {
        link_deal(&mut self.deal_id, &self.id, deal_id)
    }
}

/// Tracking wrapper around a [`Deal`].
///
/// Party identities and offer sub-identities are derived from the
/// deal's embedded offers at containerization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealContainer {
    /// Mirrors the wrapped deal's identity.
    pub id: DealId,
    pub job_creator: PartyId,
    pub resource_provider: PartyId,
    /// Identity of the originating job offer.
    pub job_offer: OfferId,
    /// Identity of the originating resource offer.
    pub resource_offer: OfferId,
    pub state: AgreementState,
    pub deal: Deal,
    /// Stamped by external settlement; empty at containerization.
    pub transactions: DealTransactions,
}

fn link_deal(slot: &mut DealId, offer: &OfferId, deal_id: DealId) -> Result<()> {
    if deal_id.is_none() {
        return Err(GridmatchError::BlankDealLink {
            offer: offer.clone(),
        });
    }
    if !slot.is_none() {
        return Err(GridmatchError::DealAlreadyLinked {
            offer: offer.clone(),
            existing: slot.clone(),
        });
    }
    *slot = deal_id;
    Ok(())
}
