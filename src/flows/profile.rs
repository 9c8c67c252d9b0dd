//! Profile completion flow
//!
//! After login the client checks once, debounced, whether the required
//! profile fields (phone number, college name) are present and, if not,
//! opens the completion surface. Submitting sends only the changed fields.

use tracing::info;

use crate::models::user::{ProfileStatus, ProfileUpdate};
use crate::services::ServiceFactory;
use crate::utils::errors::{AbhivyaktiError, Result};
use crate::utils::helpers::is_valid_phone;

/// Run the once-per-session completion check
///
/// Returns the status only when the completion surface should open.
pub async fn check_profile_completion(services: &ServiceFactory) -> Option<ProfileStatus> {
    let user = services.auth_service.current_user()?;
    let status = services
        .user_service
        .profile_completion_check(user.id)
        .await?;

    if status.is_complete {
        return None;
    }
    info!(
        user_id = user.id,
        missing = status.missing_fields.len(),
        "Profile incomplete, opening completion flow"
    );
    Some(status)
}

/// Submit the completion form
pub async fn submit_profile_completion(
    services: &ServiceFactory,
    update: ProfileUpdate,
) -> Result<()> {
    let user = services.auth_service.require_user()?;

    if let Some(phone) = update.phone_number.as_deref() {
        if !is_valid_phone(phone) {
            services.notifier.error("Please enter a valid phone number");
            return Err(AbhivyaktiError::InvalidInput(
                "Please enter a valid phone number".to_string(),
            ));
        }
    }
    if let Some(college) = update.college_name.as_deref() {
        if college.trim().is_empty() {
            services.notifier.error("Please enter your college name");
            return Err(AbhivyaktiError::InvalidInput(
                "Please enter your college name".to_string(),
            ));
        }
    }

    match services.user_service.update_profile(user.id, &update).await {
        Ok(updated) => {
            // Keep the session user in sync with what the server accepted.
            if let Some(updated) = updated {
                services.auth_service.set_user(Some(updated));
            }
            services.notifier.success("Profile updated successfully");
            Ok(())
        }
        Err(e) => {
            services.notifier.error_from(&e, "Failed to update profile");
            Err(e)
        }
    }
}
