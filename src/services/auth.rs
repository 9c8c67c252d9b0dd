//! Authentication and session service
//!
//! Session state is a single in-memory current-user object populated by a
//! profile fetch at startup and mutated by login/logout/register/verify
//! calls. Credentials are never persisted locally; the server-set session
//! cookie (held by the transport's cookie store) is the only token.

use std::sync::{Arc, RwLock};

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::api::{ApiClient, Base};
use crate::models::user::{LoginRequest, RegisterRequest, User};
use crate::utils::errors::{AbhivyaktiError, Result};
use crate::utils::helpers::is_valid_email;

/// Length of the email verification code
pub const OTP_LENGTH: usize = 6;

/// Responses carry the user either wrapped (`{"user": {...}}`) or bare
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UserEnvelope {
    Wrapped { user: User },
    Bare(User),
}

impl UserEnvelope {
    fn into_user(self) -> User {
        match self {
            UserEnvelope::Wrapped { user } => user,
            UserEnvelope::Bare(user) => user,
        }
    }
}

/// Auth service owning the current-user session
#[derive(Debug, Clone)]
pub struct AuthService {
    api: ApiClient,
    current_user: Arc<RwLock<Option<User>>>,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            current_user: Arc::new(RwLock::new(None)),
        }
    }

    /// Populate the session from the profile endpoint
    ///
    /// The session cookie may already be set from a previous visit; a
    /// failure here just means "not logged in" and is not surfaced.
    pub async fn restore_session(&self) -> Option<User> {
        match self
            .api
            .get::<UserEnvelope>(Base::Api, "/api/users/profile")
            .await
        {
            Ok(envelope) => {
                let user = envelope.into_user();
                info!(user_id = user.id, "Session restored from profile");
                self.set_user(Some(user.clone()));
                Some(user)
            }
            Err(e) => {
                debug!(error = %e, "No existing session");
                None
            }
        }
    }

    /// Register a new account; verification happens separately via OTP
    pub async fn register(&self, request: &RegisterRequest) -> Result<serde_json::Value> {
        if !is_valid_email(&request.email) {
            return Err(AbhivyaktiError::InvalidInput(
                "Please enter a valid email".to_string(),
            ));
        }
        info!(email = %request.email, "Registering new account");
        self.api.post(Base::Api, "/api/auth/register", request).await
    }

    /// Log in and store the returned user in the session
    pub async fn login(&self, credentials: &LoginRequest) -> Result<User> {
        let envelope: UserEnvelope = self
            .api
            .post(Base::Api, "/api/auth/login", credentials)
            .await?;
        let user = envelope.into_user();
        info!(user_id = user.id, "Logged in");
        self.set_user(Some(user.clone()));
        Ok(user)
    }

    /// Verify the emailed OTP; on success the auth cookie is set and the
    /// returned user becomes the session user
    pub async fn verify_email(&self, otp: &str) -> Result<User> {
        let code = otp.trim();
        if code.len() != OTP_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(AbhivyaktiError::InvalidInput(
                "Please enter the full OTP".to_string(),
            ));
        }

        let envelope: UserEnvelope = self
            .api
            .post(
                Base::Api,
                "/api/otp/verify",
                &serde_json::json!({ "otp": code }),
            )
            .await?;
        let user = envelope.into_user();
        info!(user_id = user.id, "Email verified");
        self.set_user(Some(user.clone()));
        Ok(user)
    }

    /// Log out; the local session is cleared even when the call fails
    pub async fn logout(&self) {
        if let Err(e) = self
            .api
            .post_empty::<serde_json::Value>(Base::Api, "/api/auth/logout")
            .await
        {
            warn!(error = %e, "Logout request failed, clearing session anyway");
        }
        self.set_user(None);
        info!("Logged out");
    }

    /// URL of the Google OAuth consent screen (browser redirect target)
    pub fn google_oauth_url(&self) -> String {
        self.api.google_oauth_url()
    }

    /// Currently logged-in user, if any
    pub fn current_user(&self) -> Option<User> {
        self.current_user
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_some()
    }

    /// Authorization gate used by every purchase/registration flow
    pub fn require_user(&self) -> Result<User> {
        self.current_user()
            .ok_or_else(|| AbhivyaktiError::Authentication("Please login first".to_string()))
    }

    /// Replace the session user (used after profile mutations too)
    pub fn set_user(&self, user: Option<User>) {
        let mut slot = self
            .current_user
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = user;
    }
}
