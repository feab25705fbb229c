//! The named service roles a party declares on its offer.

use serde::{Deserialize, Serialize};

use crate::PartyId;

/// Service roles an offer declares: the single solver the party accepts
/// as matching authority, and the mediators it trusts for dispute
/// resolution (in preference order).
///
/// A deal can only form between two offers that agree exactly on the
/// solver and share at least one trusted mediator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRoster {
    pub solver: PartyId,
    pub mediator: Vec<PartyId>,
}

impl ServiceRoster {
    #[must_use]
    pub fn new(solver: PartyId, mediator: Vec<PartyId>) -> Self {
        Self { solver, mediator }
    }

    #[must_use]
    pub fn trusts_mediator(&self, party: &PartyId) -> bool {
        self.mediator.contains(party)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trusts_listed_mediator() {
        let roster = ServiceRoster::new(
            PartyId::new("solver-1"),
            vec![PartyId::new("m1"), PartyId::new("m2")],
        );
        assert!(roster.trusts_mediator(&PartyId::new("m1")));
        assert!(!roster.trusts_mediator(&PartyId::new("m3")));
    }
}
