use async_trait::async_trait;

use crate::models::records::ProgramRecord;
use crate::models::workout_log::{LogScope, WorkoutLogRow};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("store returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode store response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid store url: {0}")]
    InvalidUrl(String),

    #[error("store returned no row for {0}")]
    NotFound(String),
}

#[async_trait]
pub trait ProgramStore: Send + Sync {
    async fn insert_program(&self, record: &ProgramRecord) -> Result<ProgramRecord, StoreError>;

    async fn get_program(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<Option<ProgramRecord>, StoreError>;

    /// Newest first.
    async fn list_programs(&self, user_id: &str) -> Result<Vec<ProgramRecord>, StoreError>;
}

/// Rows come back ordered by exercise name, then set number.
#[async_trait]
pub trait WorkoutLogStore: Send + Sync {
    /// Replaces every row of `scope` with `rows` in one atomic step.
    async fn replace_day(&self, scope: &LogScope, rows: &[WorkoutLogRow]) -> Result<(), StoreError>;

    async fn list_logs(
        &self,
        user_id: &str,
        program_id: &str,
    ) -> Result<Vec<WorkoutLogRow>, StoreError>;

    async fn list_day_logs(&self, scope: &LogScope) -> Result<Vec<WorkoutLogRow>, StoreError>;
}

pub fn sort_rows(rows: &mut [WorkoutLogRow]) {
    rows.sort_by(|a, b| {
        a.exercise_name
            .cmp(&b.exercise_name)
            .then(a.set_number.cmp(&b.set_number))
    });
}
