//! # gridmatch-events
//!
//! Solver event taxonomy and structured event reporting for GridMatch.
//!
//! The orchestrating solver constructs a [`SolverEvent`] at each
//! state-changing step (offer added, deal formed, container state
//! advanced, transactions stamped) and hands it to an
//! [`EventReporter`]. The reporter writes one structured log record
//! per event through an injected [`EventSink`], with no global logger
//! state, no failure propagation back into the match path.

pub mod event;
pub mod reporter;

pub use event::SolverEvent;
pub use reporter::{EventReporter, EventSink, TracingSink};
