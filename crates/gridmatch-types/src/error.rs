//! Error types for the GridMatch deal-formation engine.
//!
//! All errors use the `GM_ERR_` prefix convention for easy grepping in
//! logs. Error codes are grouped by subsystem:
//! - 1xx: Offer validation errors
//! - 2xx: Trust / matching outcomes
//! - 3xx: Identity computation errors
//! - 4xx: Container linkage errors
//!
//! The 2xx entries are expected, recoverable outcomes ("no deal"), not
//! a system fault. Callers treat them as a signal to keep matching
//! against other offers. 3xx indicates a data/serialization defect and
//! must be surfaced, never silently retried.

use thiserror::Error;

use crate::{DealId, OfferId, PartyId};

/// Central error enum for all GridMatch operations.
#[derive(Debug, Error)]
pub enum GridmatchError {
    // =================================================================
    // Offer validation (1xx)
    // =================================================================
    /// The offer failed well-formedness checks; the caller must not
    /// proceed to matching.
    #[error("GM_ERR_100: Invalid offer: {reason}")]
    InvalidOffer { reason: String },

    // =================================================================
    // Trust / matching (2xx)
    // =================================================================
    /// The two offers share no trusted mediator.
    #[error("GM_ERR_200: No mutual mediators between job offer and resource offer")]
    NoMutualMediators,

    /// The two offers name different matching authorities.
    #[error(
        "GM_ERR_201: No mutual solver: job offer names {job_solver}, \
         resource offer names {resource_solver}"
    )]
    NoMutualSolver {
        job_solver: PartyId,
        resource_solver: PartyId,
    },

    // =================================================================
    // Identity computation (3xx)
    // =================================================================
    /// Canonical encoding of a record failed while deriving its
    /// content identity.
    #[error("GM_ERR_300: Identity computation failed: {0}")]
    IdentityComputation(String),

    // =================================================================
    // Container linkage (4xx)
    // =================================================================
    /// The offer container is already linked to a deal.
    #[error("GM_ERR_400: Offer {offer} is already linked to deal {existing}")]
    DealAlreadyLinked { offer: OfferId, existing: DealId },

    /// An empty deal id cannot be linked to an offer container.
    #[error("GM_ERR_401: Cannot link offer {offer} to an empty deal id")]
    BlankDealLink { offer: OfferId },
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, GridmatchError>;
