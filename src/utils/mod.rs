//! Utility modules
//!
//! Common utilities shared across the client.

pub mod abid;
pub mod errors;
pub mod helpers;
pub mod logging;

pub use abid::{abid_to_serial_id, serial_id_to_abid};
pub use errors::{AbhivyaktiError, ErrorSeverity, Result};
