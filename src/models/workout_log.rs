use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Reps as persisted: a count when the input was fully numeric, the raw text otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepsValue {
    Count(u32),
    Text(String),
}

impl fmt::Display for RepsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepsValue::Count(n) => write!(f, "{}", n),
            RepsValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One persisted set, unique per `(user_id, program_id, week, day, exercise_name, set_number)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLogRow {
    pub user_id: String,
    pub program_id: String,
    pub week: u32,
    pub day: u32,
    pub exercise_name: String,
    pub set_number: u32,
    pub weight: Option<f64>,
    pub reps: Option<RepsValue>,
    pub notes: Option<String>,
}

/// The unit of replacement when a day is saved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogScope {
    pub user_id: String,
    pub program_id: String,
    pub week: u32,
    pub day: u32,
}

impl LogScope {
    pub fn contains(&self, row: &WorkoutLogRow) -> bool {
        row.user_id == self.user_id
            && row.program_id == self.program_id
            && row.week == self.week
            && row.day == self.day
    }
}

/// A set as typed by the user; both fields are free-form text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetInput {
    pub set: u32,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub reps: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    #[serde(default)]
    pub sets: Vec<SetInput>,
    #[serde(default)]
    pub notes: String,
}

impl ExerciseLog {
    pub fn set(&self, set_number: u32) -> Option<&SetInput> {
        self.sets.iter().find(|s| s.set == set_number)
    }
}

/// Edit state for one program day, keyed by exercise name.
pub type DayWorkoutDataState = BTreeMap<String, ExerciseLog>;
