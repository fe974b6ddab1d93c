//! Input validation functions
//!
//! Everything here is pure and runs before any storage is touched.

use crate::errors::{EntryViolation, ValidationError};
use crate::types::WorkoutEntryInput;
use once_cell::sync::Lazy;
use regex_lite::Regex;

pub const MAX_USERNAME_LEN: usize = 50;
pub const MAX_EMAIL_LEN: usize = 255;
pub const MAX_TITLE_LEN: usize = 255;
pub const MAX_EXERCISE_NAME_LEN: usize = 255;
/// Largest weight a `NUMERIC(6,2)` column holds
pub const MAX_WEIGHT: f64 = 9999.99;
pub const MIN_PASSWORD_LEN: usize = 8;
/// bcrypt only looks at the first 72 bytes
pub const MAX_PASSWORD_LEN: usize = 72;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

/// Validate username
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::Required("username"));
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(ValidationError::TooLong {
            field: "username",
            max: MAX_USERNAME_LEN,
        });
    }
    Ok(())
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::Required("email"));
    }
    if email.len() > MAX_EMAIL_LEN {
        return Err(ValidationError::TooLong {
            field: "email",
            max: MAX_EMAIL_LEN,
        });
    }
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validate password length
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Required("password"));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            field: "password",
            min: MIN_PASSWORD_LEN,
        });
    }
    if password.len() > MAX_PASSWORD_LEN {
        return Err(ValidationError::TooLong {
            field: "password",
            max: MAX_PASSWORD_LEN,
        });
    }
    Ok(())
}

/// Validate workout title
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::Required("title"));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TooLong {
            field: "title",
            max: MAX_TITLE_LEN,
        });
    }
    Ok(())
}

/// Validate duration in minutes (at least one minute)
pub fn validate_duration_minutes(minutes: i32) -> Result<(), ValidationError> {
    if minutes < 1 {
        return Err(ValidationError::BelowMinimum {
            field: "duration_minutes",
            min: 1,
        });
    }
    Ok(())
}

/// Validate calories burned
pub fn validate_calories(calories: i32) -> Result<(), ValidationError> {
    if calories < 0 {
        return Err(ValidationError::BelowMinimum {
            field: "calories_burned",
            min: 0,
        });
    }
    Ok(())
}

/// Validate the scalar fields of a workout
pub fn validate_workout_fields(
    title: &str,
    duration_minutes: i32,
    calories_burned: i32,
) -> Result<(), ValidationError> {
    validate_title(title)?;
    validate_duration_minutes(duration_minutes)?;
    validate_calories(calories_burned)
}

/// Check a single entry in isolation
pub fn check_entry(entry: &WorkoutEntryInput) -> Result<(), EntryViolation> {
    if entry.order_index < 1 {
        return Err(EntryViolation::NonPositiveOrderIndex);
    }
    match (entry.reps, entry.duration_seconds) {
        (Some(_), Some(_)) => return Err(EntryViolation::BothRepsAndDuration),
        (None, None) => return Err(EntryViolation::NeitherRepsNorDuration),
        _ => {}
    }
    if entry.exercise_name.trim().is_empty() {
        return Err(EntryViolation::MissingExerciseName);
    }
    if entry.exercise_name.chars().count() > MAX_EXERCISE_NAME_LEN {
        return Err(EntryViolation::ExerciseNameTooLong);
    }
    if entry.sets < 1 {
        return Err(EntryViolation::NonPositiveSets);
    }
    if entry.reps.is_some_and(|reps| reps < 1) {
        return Err(EntryViolation::NonPositiveReps);
    }
    if entry.duration_seconds.is_some_and(|secs| secs < 1) {
        return Err(EntryViolation::NonPositiveDuration);
    }
    // NaN fails the range check too
    if entry.weight.is_some_and(|w| !(0.0..=MAX_WEIGHT).contains(&w)) {
        return Err(EntryViolation::WeightOutOfRange);
    }
    Ok(())
}

/// Validate a full entry set
///
/// Entries are scanned in ascending `order_index` order and the first
/// violation wins, so the same input always yields the same error.
pub fn validate_entries(entries: &[WorkoutEntryInput]) -> Result<(), ValidationError> {
    let mut ordered: Vec<&WorkoutEntryInput> = entries.iter().collect();
    ordered.sort_by_key(|e| e.order_index);

    let mut previous: Option<i32> = None;
    for entry in ordered {
        let invalid = |violation| ValidationError::InvalidEntry {
            order_index: entry.order_index,
            violation,
        };

        check_entry(entry).map_err(invalid)?;
        if previous == Some(entry.order_index) {
            return Err(invalid(EntryViolation::DuplicateOrderIndex));
        }
        previous = Some(entry.order_index);
    }

    Ok(())
}
