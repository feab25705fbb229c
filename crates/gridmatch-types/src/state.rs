//! Agreement lifecycle states.
//!
//! The state machine itself lives outside this core: an external
//! collaborator advances container states as the two parties agree,
//! submit, judge, and (if needed) mediate results. This module only
//! defines the marker and the invariant that every container starts in
//! [`AgreementState::Negotiating`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle marker shared by all three container kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgreementState {
    /// Initial state for every container, before both parties agree.
    #[default]
    Negotiating,
    /// Both parties agreed on-chain.
    Agreed,
    /// The resource provider posted results.
    ResultsSubmitted,
    /// The job creator accepted the results.
    ResultsAccepted,
    /// The job creator challenged the results and asked for mediation.
    ResultsChecked,
    /// Mediation sided with the resource provider.
    MediationAccepted,
    /// Mediation sided with the job creator.
    MediationRejected,
    /// The counterparty never agreed in time.
    TimedOutAgree,
    /// Results were never submitted in time.
    TimedOutSubmitResults,
    /// Results were never judged in time.
    TimedOutJudgeResults,
    /// Mediation never concluded in time.
    TimedOutMediateResults,
    /// The job creator withdrew the offer before a match.
    JobOfferCancelled,
    /// The resource provider withdrew the offer before a match.
    ResourceOfferCancelled,
}

impl AgreementState {
    /// Whether the agreement can still progress.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(
            self,
            Self::Negotiating | Self::Agreed | Self::ResultsSubmitted | Self::ResultsChecked
        )
    }
}

impl fmt::Display for AgreementState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negotiating => write!(f, "NEGOTIATING"),
            Self::Agreed => write!(f, "AGREED"),
            Self::ResultsSubmitted => write!(f, "RESULTS_SUBMITTED"),
            Self::ResultsAccepted => write!(f, "RESULTS_ACCEPTED"),
            Self::ResultsChecked => write!(f, "RESULTS_CHECKED"),
            Self::MediationAccepted => write!(f, "MEDIATION_ACCEPTED"),
            Self::MediationRejected => write!(f, "MEDIATION_REJECTED"),
            Self::TimedOutAgree => write!(f, "TIMED_OUT_AGREE"),
            Self::TimedOutSubmitResults => write!(f, "TIMED_OUT_SUBMIT_RESULTS"),
            Self::TimedOutJudgeResults => write!(f, "TIMED_OUT_JUDGE_RESULTS"),
            Self::TimedOutMediateResults => write!(f, "TIMED_OUT_MEDIATE_RESULTS"),
            Self::JobOfferCancelled => write!(f, "JOB_OFFER_CANCELLED"),
            Self::ResourceOfferCancelled => write!(f, "RESOURCE_OFFER_CANCELLED"),
        }
    }
}
