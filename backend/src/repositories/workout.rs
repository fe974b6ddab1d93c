//! Workout aggregate repository
//!
//! A workout and its entries are always written together inside one
//! transaction. Dropping an uncommitted `sqlx::Transaction` rolls it
//! back, so an early `?` return never leaves partial rows behind.

use super::error::StoreResult;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use workout_tracker_shared::validation::validate_entries;
use workout_tracker_shared::{Workout, WorkoutEntry, WorkoutEntryInput};

/// Workout record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutRecord {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
}

/// Workout entry record
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutEntryRecord {
    pub id: i64,
    pub workout_id: i64,
    pub exercise_name: String,
    pub sets: i32,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub weight: Option<Decimal>,
    pub notes: String,
    pub order_index: i32,
}

/// Input for creating a workout with its entries
#[derive(Debug, Clone)]
pub struct NewWorkout {
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub entries: Vec<WorkoutEntryInput>,
}

/// Fully resolved replacement values for an existing workout
///
/// `entries: None` keeps the stored entries; `Some` replaces all of them.
#[derive(Debug, Clone)]
pub struct WorkoutUpdate {
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub entries: Option<Vec<WorkoutEntryInput>>,
}

/// Workout repository
pub struct WorkoutRepository;

impl WorkoutRepository {
    /// Create a workout and all of its entries atomically
    pub async fn create(pool: &PgPool, input: NewWorkout) -> StoreResult<Workout> {
        validate_entries(&input.entries)?;

        let mut tx = pool.begin().await?;

        let record = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            INSERT INTO workouts (user_id, title, description, duration_minutes, calories_burned)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, title, description, duration_minutes, calories_burned
            "#,
        )
        .bind(input.user_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.duration_minutes)
        .bind(input.calories_burned)
        .fetch_one(&mut *tx)
        .await?;

        let entries = Self::insert_entries(&mut tx, record.id, &input.entries).await?;

        tx.commit().await?;

        Ok(record_to_workout(record, entries))
    }

    /// Load a workout with its entries in display order
    pub async fn get_by_id(pool: &PgPool, id: i64) -> StoreResult<Option<Workout>> {
        let record = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, user_id, title, description, duration_minutes, calories_burned
            FROM workouts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        let Some(record) = record else {
            return Ok(None);
        };

        let mut conn = pool.acquire().await?;
        let entries = Self::load_entries(&mut conn, record.id).await?;

        Ok(Some(record_to_workout(record, entries)))
    }

    /// Replace a workout's fields and, if supplied, its whole entry set
    ///
    /// Returns `None` when the workout no longer exists.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        update: WorkoutUpdate,
    ) -> StoreResult<Option<Workout>> {
        if let Some(entries) = &update.entries {
            validate_entries(entries)?;
        }

        let mut tx = pool.begin().await?;

        let record = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            UPDATE workouts SET
                title = $2,
                description = $3,
                duration_minutes = $4,
                calories_burned = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, title, description, duration_minutes, calories_burned
            "#,
        )
        .bind(id)
        .bind(&update.title)
        .bind(&update.description)
        .bind(update.duration_minutes)
        .bind(update.calories_burned)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(record) = record else {
            return Ok(None);
        };

        if let Some(entries) = &update.entries {
            sqlx::query(r#"DELETE FROM workout_entries WHERE workout_id = $1"#)
                .bind(record.id)
                .execute(&mut *tx)
                .await?;

            Self::insert_entries(&mut tx, record.id, entries).await?;
        }

        let entries = Self::load_entries(&mut tx, record.id).await?;

        tx.commit().await?;

        Ok(Some(record_to_workout(record, entries)))
    }

    /// Delete a workout; entries go with it via `ON DELETE CASCADE`
    ///
    /// Returns `false` when no workout had that id.
    pub async fn delete(pool: &PgPool, id: i64) -> StoreResult<bool> {
        let result = sqlx::query(r#"DELETE FROM workouts WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Owner of a workout, without touching its entries
    pub async fn get_owner_id(pool: &PgPool, id: i64) -> StoreResult<Option<i64>> {
        let owner = sqlx::query_scalar::<_, i64>(r#"SELECT user_id FROM workouts WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(owner)
    }

    async fn insert_entries(
        conn: &mut PgConnection,
        workout_id: i64,
        entries: &[WorkoutEntryInput],
    ) -> StoreResult<Vec<WorkoutEntry>> {
        let mut ordered: Vec<&WorkoutEntryInput> = entries.iter().collect();
        ordered.sort_by_key(|e| e.order_index);

        let mut inserted = Vec::with_capacity(ordered.len());
        for entry in ordered {
            let record = sqlx::query_as::<_, WorkoutEntryRecord>(
                r#"
                INSERT INTO workout_entries (workout_id, exercise_name, sets, reps, duration_seconds,
                                             weight, notes, order_index)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING id, workout_id, exercise_name, sets, reps, duration_seconds,
                          weight, notes, order_index
                "#,
            )
            .bind(workout_id)
            .bind(&entry.exercise_name)
            .bind(entry.sets)
            .bind(entry.reps)
            .bind(entry.duration_seconds)
            .bind(entry.weight.and_then(Decimal::from_f64))
            .bind(&entry.notes)
            .bind(entry.order_index)
            .fetch_one(&mut *conn)
            .await?;

            inserted.push(record_to_entry(record));
        }

        Ok(inserted)
    }

    async fn load_entries(conn: &mut PgConnection, workout_id: i64) -> StoreResult<Vec<WorkoutEntry>> {
        let records = sqlx::query_as::<_, WorkoutEntryRecord>(
            r#"
            SELECT id, workout_id, exercise_name, sets, reps, duration_seconds,
                   weight, notes, order_index
            FROM workout_entries
            WHERE workout_id = $1
            ORDER BY order_index ASC
            "#,
        )
        .bind(workout_id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(records.into_iter().map(record_to_entry).collect())
    }
}

/// Convert database records to the Workout aggregate
fn record_to_workout(record: WorkoutRecord, entries: Vec<WorkoutEntry>) -> Workout {
    Workout {
        id: record.id,
        user_id: record.user_id,
        title: record.title,
        description: record.description,
        duration_minutes: record.duration_minutes,
        calories_burned: record.calories_burned,
        entries,
    }
}

/// Convert database record to WorkoutEntry
fn record_to_entry(record: WorkoutEntryRecord) -> WorkoutEntry {
    WorkoutEntry {
        id: record.id,
        exercise_name: record.exercise_name,
        sets: record.sets,
        reps: record.reps,
        duration_seconds: record.duration_seconds,
        weight: record.weight.and_then(|d| d.to_f64()),
        notes: record.notes,
        order_index: record.order_index,
    }
}
