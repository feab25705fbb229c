//! # gridmatch-types
//!
//! Shared types, errors, and configuration for the **GridMatch**
//! deal-formation engine.
//!
//! This crate is the leaf dependency of the workspace — every other
//! crate depends on it. It defines:
//!
//! - **Identifiers**: [`PartyId`], [`OfferId`], [`DealId`], [`TxHash`]
//! - **Service roles**: [`ServiceRoster`]
//! - **Offer model**: [`JobOffer`], [`ResourceOffer`], [`PricingMode`]
//! - **Deal model**: [`Deal`], [`DealMembers`], [`Pricing`], [`Timeouts`]
//! - **Lifecycle**: [`AgreementState`] and the three tracking
//!   containers [`JobOfferContainer`], [`ResourceOfferContainer`],
//!   [`DealContainer`]
//! - **Settlement records**: [`DealTransactions`]
//! - **Configuration**: [`SolverConfig`]
//! - **Errors**: [`GridmatchError`] with `GM_ERR_` prefix codes
//! - **Constants**: default pricing, timeout windows, badge

pub mod config;
pub mod constants;
pub mod container;
pub mod deal;
pub mod error;
pub mod ids;
pub mod offer;
pub mod pricing;
pub mod service;
pub mod state;
pub mod timeouts;
pub mod transactions;

// Re-export all primary types at crate root for ergonomic imports:
//   use gridmatch_types::{JobOffer, ResourceOffer, Deal, ...};

pub use config::*;
pub use container::*;
pub use deal::*;
pub use error::*;
pub use ids::*;
pub use offer::*;
pub use pricing::*;
pub use service::*;
pub use state::*;
pub use timeouts::*;
pub use transactions::*;

// Constants are accessed via `gridmatch_types::constants::FOO`
// (not re-exported to avoid name collisions).
