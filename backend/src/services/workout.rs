//! Workout service
//!
//! Resolves partial updates against the stored aggregate and maps
//! missing rows to 404.

use crate::error::ApiError;
use crate::repositories::{NewWorkout, WorkoutRepository, WorkoutUpdate};
use sqlx::PgPool;
use tracing::info;
use workout_tracker_shared::validation::validate_workout_fields;
use workout_tracker_shared::{CreateWorkoutRequest, UpdateWorkoutRequest, Workout};

const NOT_FOUND: &str = "workout not found";

/// Workout service
pub struct WorkoutService;

impl WorkoutService {
    /// Create a workout owned by `user_id`
    pub async fn create(
        pool: &PgPool,
        user_id: i64,
        request: CreateWorkoutRequest,
    ) -> Result<Workout, ApiError> {
        validate_workout_fields(&request.title, request.duration_minutes, request.calories_burned)?;

        let workout = WorkoutRepository::create(
            pool,
            NewWorkout {
                user_id,
                title: request.title,
                description: request.description,
                duration_minutes: request.duration_minutes,
                calories_burned: request.calories_burned,
                entries: request.entries,
            },
        )
        .await?;

        info!(workout_id = workout.id, user_id, entries = workout.entries.len(), "workout created");
        Ok(workout)
    }

    /// Get a workout by id
    pub async fn get(pool: &PgPool, id: i64) -> Result<Workout, ApiError> {
        WorkoutRepository::get_by_id(pool, id)
            .await?
            .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_string()))
    }

    /// Apply a partial update to a stored workout
    pub async fn update(
        pool: &PgPool,
        id: i64,
        request: UpdateWorkoutRequest,
    ) -> Result<Workout, ApiError> {
        let existing = Self::get(pool, id).await?;
        let update = apply_update(&existing, request)?;

        let workout = WorkoutRepository::update(pool, id, update)
            .await?
            .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_string()))?;

        info!(workout_id = id, "workout updated");
        Ok(workout)
    }

    /// Delete a workout and its entries
    pub async fn delete(pool: &PgPool, id: i64) -> Result<(), ApiError> {
        if !WorkoutRepository::delete(pool, id).await? {
            return Err(ApiError::NotFound(NOT_FOUND.to_string()));
        }
        info!(workout_id = id, "workout deleted");
        Ok(())
    }

    /// Owner id of a workout; 404 when it does not exist
    pub async fn owner_id(pool: &PgPool, id: i64) -> Result<i64, ApiError> {
        WorkoutRepository::get_owner_id(pool, id)
            .await?
            .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_string()))
    }
}

/// Merge a partial request over the stored workout and validate the result
///
/// Absent fields keep their stored values. Absent `entries` leaves the
/// stored entries untouched; an empty list clears them.
pub fn apply_update(
    existing: &Workout,
    request: UpdateWorkoutRequest,
) -> Result<WorkoutUpdate, ApiError> {
    let update = WorkoutUpdate {
        title: request.title.unwrap_or_else(|| existing.title.clone()),
        description: request
            .description
            .unwrap_or_else(|| existing.description.clone()),
        duration_minutes: request.duration_minutes.unwrap_or(existing.duration_minutes),
        calories_burned: request.calories_burned.unwrap_or(existing.calories_burned),
        entries: request.entries,
    };

    validate_workout_fields(&update.title, update.duration_minutes, update.calories_burned)?;
    Ok(update)
}
