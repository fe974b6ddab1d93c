//! Workout routes
//!
//! Reads are public. Creating requires a logged-in caller; updating and
//! deleting additionally require ownership, enforced by [`WorkoutOwner`].

use crate::auth::{parse_id, AuthUser, WorkoutOwner};
use crate::error::ApiResult;
use crate::services::WorkoutService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use workout_tracker_shared::{CreateWorkoutRequest, UpdateWorkoutRequest, WorkoutEnvelope};

/// Create workout routes
pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_workout))
        .route(
            "/:id",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
}

/// Create a workout with its entries
///
/// POST /workouts
async fn create_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Result<Json<CreateWorkoutRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<WorkoutEnvelope>)> {
    let Json(req) = body?;
    let workout = WorkoutService::create(state.db(), auth.id(), req).await?;
    Ok((StatusCode::CREATED, Json(WorkoutEnvelope { workout })))
}

/// Get a workout by id
///
/// GET /workouts/:id
async fn get_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<WorkoutEnvelope>> {
    let id = parse_id(&id)?;
    let workout = WorkoutService::get(state.db(), id).await?;
    Ok(Json(WorkoutEnvelope { workout }))
}

/// Partially update a workout
///
/// PUT /workouts/:id
async fn update_workout(
    State(state): State<AppState>,
    owner: WorkoutOwner,
    body: Result<Json<UpdateWorkoutRequest>, JsonRejection>,
) -> ApiResult<Json<WorkoutEnvelope>> {
    let Json(req) = body?;
    let workout = WorkoutService::update(state.db(), owner.workout_id, req).await?;
    Ok(Json(WorkoutEnvelope { workout }))
}

/// Delete a workout
///
/// DELETE /workouts/:id
async fn delete_workout(
    State(state): State<AppState>,
    owner: WorkoutOwner,
) -> ApiResult<StatusCode> {
    WorkoutService::delete(state.db(), owner.workout_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
