//! Offer well-formedness checks.
//!
//! Pure predicates over the input value: rules run in order and the
//! first failure wins. Validation must pass before an offer is
//! eligible for matching; the container factory performs no checks of
//! its own.

use gridmatch_types::{GridmatchError, JobOffer, PricingMode, ResourceOffer, Result};

/// Check a resource offer for well-formedness.
///
/// Rules, in order:
/// 1. Pricing mode must not be [`PricingMode::MarketPrice`]; this
///    pathway requires a provider-fixed price.
/// 2. The offer must name its solver.
/// 3. The offer must trust at least one mediator.
pub fn validate_resource_offer(offer: &ResourceOffer) -> Result<()> {
    if offer.mode == PricingMode::MarketPrice {
        return Err(GridmatchError::InvalidOffer {
            reason: "resource offer pricing mode cannot be market price".into(),
        });
    }

    if offer.services.solver.is_empty() {
        return Err(GridmatchError::InvalidOffer {
            reason: "resource offer must name its solver".into(),
        });
    }

    if offer.services.mediator.is_empty() {
        return Err(GridmatchError::InvalidOffer {
            reason: "resource offer must trust at least one mediator".into(),
        });
    }

    Ok(())
}

/// Check a job offer for well-formedness.
///
/// Rules, in order:
/// 1. The offer must name its solver.
/// 2. The offer must trust at least one mediator.
pub fn validate_job_offer(offer: &JobOffer) -> Result<()> {
    if offer.services.solver.is_empty() {
        return Err(GridmatchError::InvalidOffer {
            reason: "job offer must name its solver".into(),
        });
    }

    if offer.services.mediator.is_empty() {
        return Err(GridmatchError::InvalidOffer {
            reason: "job offer must trust at least one mediator".into(),
        });
    }

    Ok(())
}
