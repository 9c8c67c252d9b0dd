//! User model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::abid::serial_id_to_abid;

/// A festival user as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub college_name: Option<String>,
    #[serde(default, rename = "date_of_birth")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub serial_id: Option<i64>,
}

impl User {
    /// Display name assembled from first/last name, trimmed
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }

    /// Public festival identifier for this user
    pub fn abid(&self) -> String {
        serial_id_to_abid(self.serial_id)
    }
}

/// Payload for `/api/auth/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email: String,
    pub password: String,
}

/// Payload for `/api/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Partial profile update; only the present fields are sent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "date_of_birth")]
    pub date_of_birth: Option<NaiveDate>,
}

impl ProfileUpdate {
    /// True when there is nothing to send
    pub fn is_empty(&self) -> bool {
        self.college_name.is_none() && self.phone_number.is_none() && self.date_of_birth.is_none()
    }
}

/// Required profile fields checked after login
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    PhoneNumber,
    CollegeName,
}

impl ProfileField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::PhoneNumber => "phoneNumber",
            ProfileField::CollegeName => "collegeName",
        }
    }
}

/// Result of the profile-completion check
#[derive(Debug, Clone)]
pub struct ProfileStatus {
    pub is_complete: bool,
    pub missing_fields: Vec<ProfileField>,
    pub user: Option<User>,
}

impl ProfileStatus {
    /// Status used when the profile could not be loaded at all: treat every
    /// required field as missing so the completion flow still opens.
    pub fn unknown() -> Self {
        Self {
            is_complete: false,
            missing_fields: vec![ProfileField::PhoneNumber, ProfileField::CollegeName],
            user: None,
        }
    }

    /// Derive the status from a loaded user
    pub fn of(user: User) -> Self {
        let mut missing_fields = Vec::new();
        if user
            .phone_number
            .as_deref()
            .map(str::trim)
            .unwrap_or("")
            .is_empty()
        {
            missing_fields.push(ProfileField::PhoneNumber);
        }
        if user
            .college_name
            .as_deref()
            .map(str::trim)
            .unwrap_or("")
            .is_empty()
        {
            missing_fields.push(ProfileField::CollegeName);
        }
        // date_of_birth is optional, just informational

        Self {
            is_complete: missing_fields.is_empty(),
            missing_fields,
            user: Some(user),
        }
    }
}
