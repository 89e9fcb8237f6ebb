use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::program::{PROGRAM_WEEKS, Program};

/// A generated program as stored; `program` is kept verbatim and never regenerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub user_id: String,
    pub program: Program,
    pub duration_weeks: u32,
    pub days_per_week: u32,
    pub program_name: String,
}

impl ProgramRecord {
    pub fn new(user_id: impl Into<String>, program: Program) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            user_id: user_id.into(),
            duration_weeks: PROGRAM_WEEKS,
            days_per_week: program.days_per_week(),
            program_name: program.title.clone(),
            program,
        }
    }
}
