use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::info;

use crate::clients::store::{StoreError, WorkoutLogStore};
use crate::models::program::Day;
use crate::models::workout_log::{
    DayWorkoutDataState, ExerciseLog, LogScope, RepsValue, SetInput, WorkoutLogRow,
};
use crate::services::output_formatter::format_weight;

static WHOLE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("valid whole-number pattern"));

/// Empty input is `None`; a decimal comma is accepted; anything unparseable is `None`.
pub fn parse_weight(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite())
}

/// Whole numbers become counts; ranges like "8-12" or "5+" stay text.
pub fn parse_reps(input: &str) -> Option<RepsValue> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if WHOLE_NUMBER.is_match(trimmed)
        && let Ok(count) = trimmed.parse::<u32>()
    {
        return Some(RepsValue::Count(count));
    }
    Some(RepsValue::Text(trimmed.to_string()))
}

/// One row per set with a parseable weight or a reps value. The exercise note goes on every row.
pub fn flatten_day(scope: &LogScope, state: &DayWorkoutDataState) -> Vec<WorkoutLogRow> {
    state
        .iter()
        .flat_map(|(exercise_name, log)| {
            let notes = Some(log.notes.trim())
                .filter(|n| !n.is_empty())
                .map(str::to_string);

            // Later inputs for the same set number win. A set is kept only if
            // something survives parsing.
            let by_set: BTreeMap<u32, (Option<f64>, Option<RepsValue>)> = log
                .sets
                .iter()
                .map(|s| (s.set, (parse_weight(&s.weight), parse_reps(&s.reps))))
                .filter(|(_, (weight, reps))| weight.is_some() || reps.is_some())
                .collect();

            by_set
                .into_iter()
                .map(move |(set_number, (weight, reps))| WorkoutLogRow {
                    user_id: scope.user_id.clone(),
                    program_id: scope.program_id.clone(),
                    week: scope.week,
                    day: scope.day,
                    exercise_name: exercise_name.clone(),
                    set_number,
                    weight,
                    reps,
                    notes: notes.clone(),
                })
        })
        .collect()
}

/// Groups rows per exercise. Week and day are not looked at; the exercise note is
/// taken from the last row seen for that exercise.
pub fn hydrate(rows: &[WorkoutLogRow]) -> DayWorkoutDataState {
    rows.iter().fold(DayWorkoutDataState::new(), |mut state, row| {
        let log = state.entry(row.exercise_name.clone()).or_default();
        log.sets.push(SetInput {
            set: row.set_number,
            weight: row.weight.map(format_weight).unwrap_or_default(),
            reps: row.reps.as_ref().map(|r| r.to_string()).unwrap_or_default(),
        });
        log.notes = row.notes.clone().unwrap_or_default();
        state
    })
}

/// The sheet the user edits for one program day: one input per prescribed set,
/// prefilled from `logged` where a value exists.
pub fn sets_for_day(day: &Day, logged: &DayWorkoutDataState) -> DayWorkoutDataState {
    day.exercises
        .iter()
        .fold(DayWorkoutDataState::new(), |mut sheet, entry| {
            let previous = logged.get(entry.name());
            let log = sheet.entry(entry.name().to_string()).or_insert_with(|| ExerciseLog {
                sets: Vec::new(),
                notes: previous.map(|p| p.notes.clone()).unwrap_or_default(),
            });

            for set_number in entry.set_numbers() {
                if log.set(set_number).is_some() {
                    continue;
                }
                let input = previous
                    .and_then(|p| p.set(set_number))
                    .cloned()
                    .unwrap_or(SetInput {
                        set: set_number,
                        ..SetInput::default()
                    });
                log.sets.push(input);
            }
            sheet
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// No set carried a value; the stored day was left untouched.
    NothingToSave,
    Saved { rows: usize },
}

#[derive(Clone)]
pub struct WorkoutLogService {
    store: Arc<dyn WorkoutLogStore>,
}

impl WorkoutLogService {
    pub fn new(store: Arc<dyn WorkoutLogStore>) -> Self {
        Self { store }
    }

    pub async fn save_day(
        &self,
        program_id: &str,
        user_id: &str,
        week: u32,
        day: u32,
        state: &DayWorkoutDataState,
    ) -> Result<SaveOutcome, StoreError> {
        let scope = LogScope {
            user_id: user_id.to_string(),
            program_id: program_id.to_string(),
            week,
            day,
        };
        let rows = flatten_day(&scope, state);

        if rows.is_empty() {
            info!(%program_id, week, day, "workout_log.nothing_to_save");
            return Ok(SaveOutcome::NothingToSave);
        }

        self.store.replace_day(&scope, &rows).await?;

        info!(%program_id, week, day, row_count = rows.len(), "workout_log.saved");
        Ok(SaveOutcome::Saved { rows: rows.len() })
    }

    /// Every logged set of the program, grouped per exercise.
    pub async fn load(
        &self,
        program_id: &str,
        user_id: &str,
    ) -> Result<DayWorkoutDataState, StoreError> {
        let rows = self.store.list_logs(user_id, program_id).await?;
        info!(%program_id, row_count = rows.len(), "workout_log.loaded");
        Ok(hydrate(&rows))
    }

    pub async fn load_day(
        &self,
        program_id: &str,
        user_id: &str,
        week: u32,
        day: u32,
    ) -> Result<DayWorkoutDataState, StoreError> {
        let scope = LogScope {
            user_id: user_id.to_string(),
            program_id: program_id.to_string(),
            week,
            day,
        };
        let rows = self.store.list_day_logs(&scope).await?;
        info!(%program_id, week, day, row_count = rows.len(), "workout_log.day_loaded");
        Ok(hydrate(&rows))
    }
}
