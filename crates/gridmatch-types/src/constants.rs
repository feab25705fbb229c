//! System-wide constants for the GridMatch deal-formation engine.

/// Default price per instruction-unit, in tokens.
pub const DEFAULT_INSTRUCTION_PRICE: i64 = 10;

/// Default payment collateral posted by the job creator, in tokens.
pub const DEFAULT_PAYMENT_COLLATERAL: i64 = 30;

/// Default multiple of the instruction cost held as results collateral.
pub const DEFAULT_RESULTS_COLLATERAL_MULTIPLE: i64 = 2;

/// Default mediation fee, in tokens.
pub const DEFAULT_MEDIATION_FEE: i64 = 5;

/// Default collateral forfeited on a missed deadline, in tokens.
pub const DEFAULT_TIMEOUT_COLLATERAL: i64 = 0;

/// Default agree-phase deadline in seconds.
pub const DEFAULT_AGREE_TIMEOUT_SECS: u64 = 3_600;

/// Default submit-results deadline in seconds.
pub const DEFAULT_SUBMIT_RESULTS_TIMEOUT_SECS: u64 = 86_400;

/// Default judge-results deadline in seconds.
pub const DEFAULT_JUDGE_RESULTS_TIMEOUT_SECS: u64 = 3_600;

/// Default mediate-results deadline in seconds.
pub const DEFAULT_MEDIATE_RESULTS_TIMEOUT_SECS: u64 = 7_200;

/// Default badge used to tag reported solver events.
pub const DEFAULT_BADGE: &str = "solver";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "GridMatch";
