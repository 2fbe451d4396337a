use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A signup linking one student email to one activity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Signup {
    pub id: i64,
    pub student_email: String,
    pub activity_id: i64,
    /// When the signup was created
    pub created_at: DateTime<Utc>,
}
