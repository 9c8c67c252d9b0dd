//! API transport module
//!
//! Credentialed HTTP access to the festival backend.

pub mod client;

pub use client::{ApiClient, Base};
