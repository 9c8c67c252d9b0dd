//! Data models module
//!
//! Transient client-side copies of server-owned entities, plus the static
//! catalog and crew-roster display data.

pub mod event;
pub mod passes;
pub mod payment;
pub mod registration;
pub mod roster;
pub mod team;
pub mod user;

// Re-export commonly used models
pub use event::Event;
pub use passes::{AccommodationType, CatalogTemplate, PassType};
pub use payment::{CreateOrderRequest, CreateOrderResponse, OrderItem, PaymentOrder};
pub use registration::{
    RegisterIndividualRequest, Registration, RegistrationStatus, SubmitRegistrationRequest,
};
pub use roster::{group_by_designation, CrewMember, RosterGroups};
pub use team::{CreateTeamRequest, JoinTeamRequest, RemoveMemberRequest, Team, TeamMember};
pub use user::{LoginRequest, ProfileField, ProfileStatus, ProfileUpdate, RegisterRequest, User};
