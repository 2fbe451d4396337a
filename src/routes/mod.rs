pub mod activities;
pub mod health;
pub mod signup;
pub mod unregister;

pub use activities::list_activities;
pub use health::health_check;
pub use signup::signup_for_activity;
pub use unregister::unregister_from_activity;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::AppState;

/// Build the API router shared by the server binary and the tests
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/activities", get(list_activities))
        .route("/activities/:activity_id/signup", post(signup_for_activity))
        .route(
            "/activities/:activity_id/unregister",
            delete(unregister_from_activity),
        )
        .with_state(state)
}
