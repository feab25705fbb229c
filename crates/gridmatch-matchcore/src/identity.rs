//! Content-derived identities for offers and deals.
//!
//! Every identity is a SHA-256 digest over the record's canonical JSON
//! encoding (serde struct-declaration field order, stable and
//! order-sensitive), with the record's own id field blanked and a
//! per-kind domain-separation prefix mixed in. The same logical record
//! always yields the same digest in any process. This
//! is the identity every other component (settlement, dispute lookup,
//! event auditing) keys on.

use gridmatch_types::{Deal, DealId, GridmatchError, JobOffer, OfferId, ResourceOffer, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};

const DEAL_ID_DOMAIN: &[u8] = b"gridmatch:deal_id:v1:";
const JOB_OFFER_ID_DOMAIN: &[u8] = b"gridmatch:job_offer_id:v1:";
const RESOURCE_OFFER_ID_DOMAIN: &[u8] = b"gridmatch:resource_offer_id:v1:";

fn content_digest<T: Serialize>(domain: &[u8], record: &T) -> Result<[u8; 32]> {
    let encoded = serde_json::to_vec(record)
        .map_err(|err| GridmatchError::IdentityComputation(err.to_string()))?;

    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(&encoded);
    let digest = hasher.finalize();

    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    Ok(out)
}

/// Compute the canonical identity of a fully-assembled deal.
///
/// The digest covers every field of the deal except the id itself, so
/// two assemblies of the same logical deal always agree.
pub fn compute_deal_id(deal: &Deal) -> Result<DealId> {
    let mut unstamped = deal.clone();
    unstamped.id = DealId::none();
    Ok(DealId::from_digest(content_digest(
        DEAL_ID_DOMAIN,
        &unstamped,
    )?))
}

/// Compute the content identity a job offer carries when submitted.
pub fn compute_job_offer_id(offer: &JobOffer) -> Result<OfferId> {
    let mut unstamped = offer.clone();
    unstamped.id = OfferId::none();
    Ok(OfferId::from_digest(content_digest(
        JOB_OFFER_ID_DOMAIN,
        &unstamped,
    )?))
}

/// Compute the content identity a resource offer carries when
/// submitted.
pub fn compute_resource_offer_id(offer: &ResourceOffer) -> Result<OfferId> {
    let mut unstamped = offer.clone();
    unstamped.id = OfferId::none();
    Ok(OfferId::from_digest(content_digest(
        RESOURCE_OFFER_ID_DOMAIN,
        &unstamped,
    )?))
}
