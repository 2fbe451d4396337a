use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::Activity;
use crate::AppState;

const SQL_LIST_ACTIVITIES: &str = "\
SELECT id, name, description, schedule, max_participants \
FROM activity";

/// List all activities
///
/// Returns every activity with its full field set, in storage order.
pub async fn list_activities(State(state): State<AppState>) -> Result<Json<Vec<Activity>>> {
    let activities = sqlx::query_as::<_, Activity>(SQL_LIST_ACTIVITIES)
        .fetch_all(&state.pool)
        .await?;

    Ok(Json(activities))
}
