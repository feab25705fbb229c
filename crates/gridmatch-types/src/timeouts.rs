//! Per-phase timeout windows attached to resource offers and deals.
//!
//! Each phase of the agreement lifecycle (agree, submit results, judge
//! results, mediate results) carries its own deadline and the
//! collateral forfeited if the responsible party misses it. Like
//! pricing, timeouts are copied verbatim from the resource offer's
//! declared defaults at deal assembly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants;

/// A single deadline with its forfeit collateral.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutWindow {
    /// Deadline for the phase, in seconds from the previous transition.
    pub timeout_secs: u64,
    /// Collateral forfeited by the responsible party on timeout.
    pub collateral: Decimal,
}

impl TimeoutWindow {
    #[must_use]
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            timeout_secs,
            collateral: Decimal::new(constants::DEFAULT_TIMEOUT_COLLATERAL, 0),
        }
    }
}

/// One timeout window per agreement phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeouts {
    pub agree: TimeoutWindow,
    pub submit_results: TimeoutWindow,
    pub judge_results: TimeoutWindow,
    pub mediate_results: TimeoutWindow,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            agree: TimeoutWindow::new(constants::DEFAULT_AGREE_TIMEOUT_SECS),
            submit_results: TimeoutWindow::new(constants::DEFAULT_SUBMIT_RESULTS_TIMEOUT_SECS),
            judge_results: TimeoutWindow::new(constants::DEFAULT_JUDGE_RESULTS_TIMEOUT_SECS),
            mediate_results: TimeoutWindow::new(constants::DEFAULT_MEDIATE_RESULTS_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeouts_use_constants() {
        let timeouts = Timeouts::default();
        assert_eq!(
            timeouts.agree.timeout_secs,
            constants::DEFAULT_AGREE_TIMEOUT_SECS
        );
        assert_eq!(
            timeouts.submit_results.timeout_secs,
            constants::DEFAULT_SUBMIT_RESULTS_TIMEOUT_SECS
        );
    }

    #[test]
    fn timeouts_serde_roundtrip() {
        let timeouts = Timeouts::default();
        let json = serde_json::to_string(&timeouts).unwrap();
        let back: Timeouts = serde_json::from_str(&json).unwrap();
        assert_eq!(timeouts, back);
    }
}
