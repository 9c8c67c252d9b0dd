//! Flow orchestration module
//!
//! The user-facing surfaces of the client: registration, team management,
//! passes purchase and profile completion. Flows combine services with
//! transient local state and translate every outcome into toasts.

pub mod passes;
pub mod profile;
pub mod registration;
pub mod team;

pub use passes::{CatalogCard, PassesDesk};
pub use profile::{check_profile_completion, submit_profile_completion};
pub use registration::RegistrationModal;
pub use team::TeamManager;
