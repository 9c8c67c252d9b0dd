//! User data service
//!
//! Profile reads and updates, registration data, pass/accommodation
//! holdings, and the public serial-id lookup used when building team
//! rosters. Also hosts the post-login profile-completion check.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::api::{ApiClient, Base};
use crate::models::registration::Registration;
use crate::models::user::{ProfileStatus, ProfileUpdate, User};
use crate::utils::errors::{AbhivyaktiError, Result};

/// Delay before the once-per-session profile-completion check, giving the
/// session user time to settle after login
const PROFILE_CHECK_DEBOUNCE: Duration = Duration::from_millis(500);

/// Envelope for the user-data endpoints
#[derive(Debug, Deserialize)]
struct UserDataResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    user: Option<User>,
}

/// Everything a user currently holds (shapes owned by the backend)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserHoldings {
    #[serde(default)]
    pub passes: Vec<Value>,
    #[serde(default)]
    pub accommodations: Vec<Value>,
}

impl UserHoldings {
    /// Pass-eligibility as shown on the team roster
    pub fn has_passes(&self) -> bool {
        !self.passes.is_empty()
    }
}

/// User data service
#[derive(Debug, Clone)]
pub struct UserService {
    api: ApiClient,
    profile_checked: Arc<AtomicBool>,
}

impl UserService {
    /// Create a new UserService instance
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            profile_checked: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Fetch a user's profile by id
    pub async fn get_profile(&self, user_id: i64) -> Result<Option<User>> {
        debug!(user_id = user_id, "Fetching user profile");
        let response: UserDataResponse = self
            .api
            .post(
                Base::Backend,
                "/api/user/profile",
                &serde_json::json!({ "userId": user_id }),
            )
            .await?;
        if !response.success {
            return Ok(None);
        }
        Ok(response.user)
    }

    /// Fetch a user's event registrations
    pub async fn get_registration_data(&self, user_id: i64) -> Result<Vec<Registration>> {
        debug!(user_id = user_id, "Fetching user registration data");

        #[derive(Deserialize)]
        struct RegistrationsResponse {
            #[serde(default)]
            registrations: Vec<Registration>,
        }

        let response: RegistrationsResponse = self
            .api
            .post(
                Base::Backend,
                "/api/user/reg",
                &serde_json::json!({ "userId": user_id }),
            )
            .await?;
        Ok(response.registrations)
    }

    /// Fetch a user's purchased passes and booked accommodations
    pub async fn get_passes_and_accommodations(&self, user_id: i64) -> Result<UserHoldings> {
        debug!(user_id = user_id, "Fetching user passes and accommodations");
        self.api
            .post(
                Base::Backend,
                "/api/user/pass-acc",
                &serde_json::json!({ "userId": user_id }),
            )
            .await
    }

    /// Look up a user by public serial id
    pub async fn find_by_serial_id(&self, serial_id: i64) -> Result<User> {
        debug!(serial_id = serial_id, "Searching user by serial id");
        let found: Option<UserDataResponse> = self
            .api
            .get_optional(Base::Backend, &format!("/api/user/serial/{}", serial_id))
            .await?;

        found
            .and_then(|response| response.user)
            .ok_or(AbhivyaktiError::UserNotFound { serial_id })
    }

    /// Update the profile fields the completion flow collects
    ///
    /// Only the present fields go out, wrapped in the backend's
    /// `{ userId, propertiesToUpdate }` shape.
    pub async fn update_profile(&self, user_id: i64, update: &ProfileUpdate) -> Result<Option<User>> {
        if update.is_empty() {
            return Err(AbhivyaktiError::InvalidInput(
                "Nothing to update".to_string(),
            ));
        }

        info!(user_id = user_id, "Updating user profile");
        let response: UserDataResponse = self
            .api
            .put(
                Base::Backend,
                "/api/user/profile/update",
                &serde_json::json!({
                    "userId": user_id,
                    "propertiesToUpdate": update,
                }),
            )
            .await?;
        Ok(response.user)
    }

    /// Update the session user's own profile via the auth-scoped endpoint
    pub async fn update_session_profile(&self, update: &ProfileUpdate) -> Result<User> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Envelope {
            Wrapped { user: User },
            Bare(User),
        }

        let envelope: Envelope = self.api.put(Base::Api, "/api/users/profile", update).await?;
        Ok(match envelope {
            Envelope::Wrapped { user } => user,
            Envelope::Bare(user) => user,
        })
    }

    /// Check which required profile fields are missing
    ///
    /// A failed profile load reports every required field missing so the
    /// completion flow still opens.
    pub async fn check_profile(&self, user_id: i64) -> ProfileStatus {
        match self.get_profile(user_id).await {
            Ok(Some(user)) => ProfileStatus::of(user),
            Ok(None) => ProfileStatus::unknown(),
            Err(e) => {
                warn!(user_id = user_id, error = %e, "Profile check failed");
                ProfileStatus::unknown()
            }
        }
    }

    /// Once-per-session, debounced profile-completion check
    ///
    /// Returns `None` when the check already ran this session.
    pub async fn profile_completion_check(&self, user_id: i64) -> Option<ProfileStatus> {
        if self.profile_checked.swap(true, Ordering::SeqCst) {
            return None;
        }
        tokio::time::sleep(PROFILE_CHECK_DEBOUNCE).await;
        Some(self.check_profile(user_id).await)
    }

    /// Reset the once-per-session flag (called on login/logout)
    pub fn reset_profile_check(&self) {
        self.profile_checked.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holdings_pass_eligibility() {
        let empty = UserHoldings::default();
        assert!(!empty.has_passes());

        let holdings: UserHoldings = serde_json::from_value(serde_json::json!({
            "passes": [{ "id": 2 }],
            "accommodations": []
        }))
        .unwrap();
        assert!(holdings.has_passes());
    }

    #[test]
    fn test_holdings_tolerate_missing_fields() {
        let holdings: UserHoldings = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(holdings.passes.is_empty());
        assert!(holdings.accommodations.is_empty());
    }
}
