//! Configuration for a solver service instance.
//!
//! The deal-formation core is pure, so its configuration surface is
//! deliberately small: the solver's own identity and the badge it tags
//! reported events with. Transport, persistence, and ledger settings
//! belong to the external collaborators that own those concerns.

use serde::{Deserialize, Serialize};

use crate::{PartyId, constants};

/// Settings for one solver instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// This solver's own party identity. Offers that name a different
    /// solver are not this instance's to match.
    pub address: PartyId,
    /// Human-readable badge used to tag reported events.
    pub badge: String,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            address: PartyId::default(),
            badge: constants::DEFAULT_BADGE.to_string(),
        }
    }
}
