//! Deal assembly: binding a validated offer pair into an
//! identity-bearing deal.

use gridmatch_types::{Deal, DealId, DealMembers, GridmatchError, JobOffer, ResourceOffer, Result};

use crate::{identity::compute_deal_id, mutual::mutual_services};

/// Bind a job offer and a resource offer into a deal.
///
/// ## Algorithm
///
/// 1. Resolve the mutually-trusted mediators (the resource offer's
///    list drives ordering); none → [`GridmatchError::NoMutualMediators`]
/// 2. Require exact agreement on the solver identity; otherwise
///    [`GridmatchError::NoMutualSolver`]
/// 3. Assemble the members, copy pricing and timeouts verbatim from
///    the resource offer, and embed both originating offers
/// 4. Stamp the content-derived identity; encoding failure →
///    [`GridmatchError::IdentityComputation`]
///
/// No partial results: either a complete, id-bearing [`Deal`] or a
/// typed error. The 2xx outcomes are expected "no deal" results; the
/// caller keeps matching against other offers.
///
/// Both offers are assumed validated (see [`crate::validate`]); this
/// function re-checks nothing.
pub fn form_deal(job_offer: &JobOffer, resource_offer: &ResourceOffer) -> Result<Deal> {
    let mediators = mutual_services(
        &resource_offer.services.mediator,
        &job_offer.services.mediator,
    );
    if mediators.is_empty() {
        return Err(GridmatchError::NoMutualMediators);
    }

    if job_offer.services.solver != resource_offer.services.solver {
        return Err(GridmatchError::NoMutualSolver {
            job_solver: job_offer.services.solver.clone(),
            resource_solver: resource_offer.services.solver.clone(),
        });
    }

    let mut deal = Deal {
        id: DealId::none(),
        members: DealMembers {
            solver: job_offer.services.solver.clone(),
            job_creator: job_offer.job_creator.clone(),
            resource_provider: resource_offer.resource_provider.clone(),
            mediators,
        },
        // Terms come from the provider's declared defaults until a
        // negotiation layer exists.
        pricing: resource_offer.default_pricing.clone(),
        timeouts: resource_offer.default_timeouts.clone(),
        job_offer: job_offer.clone(),
        resource_offer: resource_offer.clone(),
    };

    deal.id = compute_deal_id(&deal)?;

    tracing::debug!(
        deal_id = %deal.id,
        job_creator = %deal.members.job_creator,
        resource_provider = %deal.members.resource_provider,
        mediators = deal.members.mediators.len(),
        "deal formed"
    );

    Ok(deal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmatch_types::PartyId;

    #[test]
    fn matching_pair_forms_deal() {
        let job = JobOffer::dummy("0xjc", "S", &["M1", "M2"]);
        let resource = ResourceOffer::dummy("0xrp", "S", &["M2", "M3"]);

        let deal = form_deal(&job, &resource).unwrap();
        assert_eq!(deal.members.mediators, vec![PartyId::new("M2")]);
        assert_eq!(deal.members.solver, PartyId::new("S"));
        assert_eq!(deal.members.job_creator, PartyId::new("0xjc"));
        assert_eq!(deal.members.resource_provider, PartyId::new("0xrp"));
        assert!(!deal.id.is_none());
    }

    #[test]
    fn disjoint_mediators_is_no_deal() {
        let job = JobOffer::dummy("0xjc", "S", &["M1", "M2"]);
        let resource = ResourceOffer::dummy("0xrp", "S", &["M3", "M4"]);

        let err = form_deal(&job, &resource).unwrap_err();
        assert!(matches!(err, GridmatchError::NoMutualMediators));
    }

    #[test]
    fn differing_solver_is_no_deal_even_with_shared_mediators() {
        let job = JobOffer::dummy("0xjc", "S1", &["M1"]);
        let resource = ResourceOffer::dummy("0xrp", "S2", &["M1"]);

        let err = form_deal(&job, &resource).unwrap_err();
        assert!(matches!(err, GridmatchError::NoMutualSolver { .. }));
    }

    #[test]
    fn mediator_order_follows_resource_offer() {
        let job = JobOffer::dummy("0xjc", "S", &["M1", "M2", "M3"]);
        let resource = ResourceOffer::dummy("0xrp", "S", &["M3", "M1"]);

        let deal = form_deal(&job, &resource).unwrap();
        assert_eq!(
            deal.members.mediators,
            vec![PartyId::new("M3"), PartyId::new("M1")]
        );
    }

    #[test]
    fn terms_copied_from_resource_offer() {
        let job = JobOffer::dummy("0xjc", "S", &["M1"]);
        let mut resource = ResourceOffer::dummy("0xrp", "S", &["M1"]);
        resource.default_pricing.instruction_price = rust_decimal::Decimal::new(99, 0);
        resource.default_timeouts.agree.timeout_secs = 42;

        let deal = form_deal(&job, &resource).unwrap();
        assert_eq!(deal.pricing, resource.default_pricing);
        assert_eq!(deal.timeouts, resource.default_timeouts);
    }

    #[test]
    fn offers_embedded_whole() {
        let job = JobOffer::dummy("0xjc", "S", &["M1"]);
        let resource = ResourceOffer::dummy("0xrp", "S", &["M1"]);

        let deal = form_deal(&job, &resource).unwrap();
        assert_eq!(deal.job_offer, job);
        assert_eq!(deal.resource_offer, resource);
    }
}
