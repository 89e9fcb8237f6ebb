use serde::Serialize;

use crate::models::workout_log::{LogScope, WorkoutLogRow};

/// Arguments of the `replace_workout_logs` database function.
#[derive(Debug, Serialize)]
pub struct ReplaceWorkoutLogsRequest<'a> {
    pub p_user_id: &'a str,
    pub p_program_id: &'a str,
    pub p_week: u32,
    pub p_day: u32,
    pub p_rows: &'a [WorkoutLogRow],
}

impl<'a> ReplaceWorkoutLogsRequest<'a> {
    pub fn new(scope: &'a LogScope, rows: &'a [WorkoutLogRow]) -> Self {
        Self {
            p_user_id: &scope.user_id,
            p_program_id: &scope.program_id,
            p_week: scope.week,
            p_day: scope.day,
            p_rows: rows,
        }
    }
}
