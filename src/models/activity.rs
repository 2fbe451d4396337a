use serde::{Deserialize, Serialize};

/// An extracurricular activity students can sign up for
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Activity {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub schedule: Option<String>,
    /// Maximum number of signups; None means unlimited
    pub max_participants: Option<i64>,
}

impl Activity {
    /// Whether another signup fits given the current signup count
    pub fn has_capacity(&self, current: i64) -> bool {
        match self.max_participants {
            Some(max) => current < max,
            None => true,
        }
    }
}
