//! Data models for the Workout Tracker application

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity reserved for unauthenticated callers. Never persisted.
pub const ANONYMOUS_USER_ID: i64 = 0;

/// User account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build the anonymous identity
    ///
    /// Callers should prefer the backend's process-wide sentinel; this
    /// exists so both crates agree on its shape.
    pub fn anonymous() -> Self {
        let epoch = DateTime::<Utc>::default();
        Self {
            id: ANONYMOUS_USER_ID,
            username: String::new(),
            email: String::new(),
            password_hash: String::new(),
            bio: None,
            created_at: epoch,
            updated_at: epoch,
        }
    }

    /// Pure identity check, no store round-trip
    #[inline]
    pub fn is_anonymous(&self) -> bool {
        self.id == ANONYMOUS_USER_ID
    }
}

/// Workout aggregate root
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    /// Always sorted by `order_index` ascending
    pub entries: Vec<WorkoutEntry>,
}

/// A single exercise line inside a workout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutEntry {
    pub id: i64,
    pub exercise_name: String,
    pub sets: i32,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub weight: Option<f64>,
    pub notes: String,
    pub order_index: i32,
}
