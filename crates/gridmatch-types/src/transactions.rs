//! Per-party on-chain transaction records for a deal.
//!
//! The external settlement layer stamps a [`TxHash`] into the deal
//! container as each party's agreement-phase transaction lands. This
//! core never writes these records; they start empty at
//! containerization and exist so transaction-update events carry the
//! real payload.

use serde::{Deserialize, Serialize};

use crate::TxHash;

/// The agreement-phase transactions one party has landed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyTransactions {
    pub agree: Option<TxHash>,
    pub submit_results: Option<TxHash>,
    pub accept_results: Option<TxHash>,
    pub check_results: Option<TxHash>,
}

impl PartyTransactions {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agree.is_none()
            && self.submit_results.is_none()
            && self.accept_results.is_none()
            && self.check_results.is_none()
    }
}

/// Both parties' transaction records for one deal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealTransactions {
    pub job_creator: PartyTransactions,
    pub resource_provider: PartyTransactions,
}

impl DealTransactions {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.job_creator.is_empty() && self.resource_provider.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_records_are_empty() {
        let txs = DealTransactions::default();
        assert!(txs.is_empty());
    }

    #[test]
    fn stamping_clears_emptiness() {
        let mut txs = DealTransactions::default();
        txs.job_creator.agree = Some(TxHash::new("0xabc"));
        assert!(!txs.is_empty());
        assert!(txs.resource_provider.is_empty());
    }
}
