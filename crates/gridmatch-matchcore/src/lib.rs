//! # gridmatch-matchcore
//!
//! **Pure deterministic deal-formation plane for GridMatch.**
//!
//! MatchCore takes a consumer's job offer and a provider's resource
//! offer and decides whether they can be bound into a mutually-trusted
//! deal. It has:
//!
//! - **Zero side effects**: no DB writes, no network, no shared state;
//!   only `tracing` diagnostics
//! - **Deterministic output**: the same offer pair always produces a
//!   deal with the same content-derived identity
//! - **Typed outcomes**: trust-negotiation failures are ordinary
//!   recoverable values, never faults
//!
//! Orchestration order is the caller's responsibility:
//! validate → form deal → containerize, reporting events at each
//! state-changing step.

pub mod assemble;
pub mod container;
pub mod identity;
pub mod mutual;
pub mod validate;

pub use assemble::form_deal;
pub use container::{containerize_deal, containerize_job_offer, containerize_resource_offer};
pub use identity::{compute_deal_id, compute_job_offer_id, compute_resource_offer_id};
pub use mutual::mutual_services;
pub use validate::{validate_job_offer, validate_resource_offer};
