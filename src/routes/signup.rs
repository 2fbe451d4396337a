use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::Activity;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SignupParams {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Sign a student up for an activity
///
/// Runs inside a single transaction per request:
/// 1. Fetch the activity; 404 if the id is unknown.
/// 2. Reject with 400 if the signup count has reached max_participants.
/// 3. Reject with 400 if the student already has a live signup.
/// 4. Insert the signup and commit.
///
/// The unique (activity_id, student_email) index backstops step 3: if two
/// concurrent requests pass the check, the second insert fails with a
/// constraint violation and maps to the same duplicate error.
pub async fn signup_for_activity(
    State(state): State<AppState>,
    Path(activity_id): Path<i64>,
    Query(params): Query<SignupParams>,
) -> Result<Json<MessageResponse>> {
    let mut tx = state.pool.begin().await?;

    let activity = sqlx::query_as::<_, Activity>(
        "SELECT id, name, description, schedule, max_participants FROM activity WHERE id = ?",
    )
    .bind(activity_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(AppError::ActivityNotFound)?;

    let current: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM signup WHERE activity_id = ?")
        .bind(activity_id)
        .fetch_one(&mut *tx)
        .await?;

    if !activity.has_capacity(current) {
        tracing::info!(
            "Rejecting signup for full activity {} ({}/{:?})",
            activity.name,
            current,
            activity.max_participants
        );
        return Err(AppError::ActivityFull);
    }

    let existing: Option<i64> = sqlx::query_scalar(
        "SELECT id FROM signup WHERE activity_id = ? AND student_email = ?",
    )
    .bind(activity_id)
    .bind(&params.email)
    .fetch_optional(&mut *tx)
    .await?;

    if existing.is_some() {
        return Err(AppError::AlreadySignedUp);
    }

    let insert = sqlx::query(
        "INSERT INTO signup (student_email, activity_id, created_at) VALUES (?, ?, ?)",
    )
    .bind(&params.email)
    .bind(activity_id)
    .bind(Utc::now())
    .execute(&mut *tx)
    .await;

    match insert {
        Ok(_) => {}
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            return Err(AppError::AlreadySignedUp);
        }
        Err(e) => return Err(e.into()),
    }

    tx.commit().await?;

    tracing::info!("Signed up {} for {}", params.email, activity.name);

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", params.email, activity.name),
    }))
}
