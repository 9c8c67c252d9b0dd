//! State management module
//!
//! Local, transient state: the registration attempt state machine and the
//! in-flight request registry.

pub mod flow;
pub mod inflight;

// Re-export commonly used state components
pub use flow::{RegistrationFlow, RegistrationStep};
pub use inflight::{InFlightGuard, InFlightRegistry};
