//! API request and response types

use crate::models::{User, Workout};
use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ============================================================================
// Users and Tokens
// ============================================================================

/// Registration request
#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub username: String,
    pub email: String,
    pub password: SecretString,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Login request for `POST /tokens/auth`
#[derive(Debug, Deserialize)]
pub struct CreateTokenRequest {
    pub username: String,
    pub password: SecretString,
}

/// Token handed back to the client exactly once
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokenResponse {
    pub token: String,
    pub expiry: DateTime<Utc>,
}

/// `{"user": ...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEnvelope {
    pub user: User,
}

/// `{"auth_token": ...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokenEnvelope {
    pub auth_token: AuthTokenResponse,
}

// ============================================================================
// Workouts
// ============================================================================

/// Entry as supplied by a client on create or update
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutEntryInput {
    pub exercise_name: String,
    pub sets: i32,
    #[serde(default)]
    pub reps: Option<i32>,
    #[serde(default)]
    pub duration_seconds: Option<i32>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub notes: String,
    pub order_index: i32,
}

/// Create workout request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkoutRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub duration_minutes: i32,
    #[serde(default)]
    pub calories_burned: i32,
    #[serde(default)]
    pub entries: Vec<WorkoutEntryInput>,
}

/// Partial update request
///
/// `None` means the field was absent and the stored value is kept.
/// `entries: Some(vec![])` clears every entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateWorkoutRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<WorkoutEntryInput>>,
}

/// `{"workout": ...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutEnvelope {
    pub workout: Workout,
}
