use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::{Activity, Signup};
use crate::routes::signup::MessageResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UnregisterParams {
    pub email: String,
}

/// Remove a student's signup for an activity
///
/// Runs inside a single transaction per request:
/// 1. Fetch the activity; 404 if the id is unknown.
/// 2. Look up the signup row for (activity_id, email); 400 if absent.
/// 3. Delete the row and commit.
pub async fn unregister_from_activity(
    State(state): State<AppState>,
    Path(activity_id): Path<i64>,
    Query(params): Query<UnregisterParams>,
) -> Result<Json<MessageResponse>> {
    let mut tx = state.pool.begin().await?;

    let activity = sqlx::query_as::<_, Activity>(
        "SELECT id, name, description, schedule, max_participants FROM activity WHERE id = ?",
    )
    .bind(activity_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(AppError::ActivityNotFound)?;

    let signup = sqlx::query_as::<_, Signup>(
        "SELECT id, student_email, activity_id, created_at FROM signup \
         WHERE activity_id = ? AND student_email = ?",
    )
    .bind(activity_id)
    .bind(&params.email)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(AppError::NotSignedUp)?;

    sqlx::query("DELETE FROM signup WHERE id = ?")
        .bind(signup.id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!("Unregistered {} from {}", params.email, activity.name);

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", params.email, activity.name),
    }))
}
