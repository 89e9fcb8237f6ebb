use tracing::{info, warn};

use crate::clients::store::StoreError;
use crate::models::program::Program;
use crate::models::workout_log::{DayWorkoutDataState, SetInput};
use crate::services::workout_log::{SaveOutcome, WorkoutLogService, sets_for_day};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Loading,
    Ready(DayWorkoutDataState),
    Saving(DayWorkoutDataState),
    Error(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no program day selected")]
    NoSelection,

    #[error("a save is already in progress")]
    SaveInFlight,

    #[error("workout data is not loaded")]
    NotReady,

    #[error("week {week} day {day} is not part of the program")]
    UnknownDay { week: u32, day: u32 },

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq)]
struct Selection {
    program_id: String,
    week: u32,
    day: u32,
}

/// Edits for one program day. At most one save is outstanding at a time.
pub struct EditingSession {
    service: WorkoutLogService,
    user_id: String,
    selection: Option<Selection>,
    state: SessionState,
}

/// Data handed out by `begin_save`, persisted by the caller, then reported back
/// through `complete_save`.
#[derive(Debug, Clone)]
pub struct PendingSave {
    pub program_id: String,
    pub week: u32,
    pub day: u32,
    pub data: DayWorkoutDataState,
}

impl EditingSession {
    pub fn new(service: WorkoutLogService, user_id: impl Into<String>) -> Self {
        Self {
            service,
            user_id: user_id.into(),
            selection: None,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Switches to another program day, discarding unsaved edits.
    pub async fn select(
        &mut self,
        program_id: &str,
        program: &Program,
        week: u32,
        day: u32,
    ) -> Result<&DayWorkoutDataState, SessionError> {
        let Some(program_day) = program.day(week, day) else {
            self.selection = None;
            self.state = SessionState::Idle;
            return Err(SessionError::UnknownDay { week, day });
        };

        self.selection = Some(Selection {
            program_id: program_id.to_string(),
            week,
            day,
        });
        self.state = SessionState::Loading;

        match self.service.load_day(program_id, &self.user_id, week, day).await {
            Ok(logged) => {
                self.state = SessionState::Ready(sets_for_day(program_day, &logged));
                let SessionState::Ready(data) = &self.state else {
                    unreachable!("state was just set to ready");
                };
                Ok(data)
            }
            Err(e) => {
                warn!(error = %e, %program_id, week, day, "session.load_failed");
                self.state = SessionState::Error(e.to_string());
                Err(e.into())
            }
        }
    }

    fn ready_data(&mut self) -> Result<&mut DayWorkoutDataState, SessionError> {
        match &mut self.state {
            SessionState::Ready(data) => Ok(data),
            SessionState::Saving(_) => Err(SessionError::SaveInFlight),
            _ => Err(SessionError::NotReady),
        }
    }

    pub fn update_set(
        &mut self,
        exercise: &str,
        set: u32,
        weight: &str,
        reps: &str,
    ) -> Result<(), SessionError> {
        let data = self.ready_data()?;
        let log = data.entry(exercise.to_string()).or_default();

        match log.sets.iter_mut().find(|s| s.set == set) {
            Some(input) => {
                input.weight = weight.to_string();
                input.reps = reps.to_string();
            }
            None => log.sets.push(SetInput {
                set,
                weight: weight.to_string(),
                reps: reps.to_string(),
            }),
        }
        Ok(())
    }

    pub fn update_notes(&mut self, exercise: &str, notes: &str) -> Result<(), SessionError> {
        let data = self.ready_data()?;
        data.entry(exercise.to_string()).or_default().notes = notes.to_string();
        Ok(())
    }

    /// `Ready -> Saving`. Rejected while a save is outstanding.
    pub fn begin_save(&mut self) -> Result<PendingSave, SessionError> {
        let selection = self.selection.clone().ok_or(SessionError::NoSelection)?;
        let data = self.ready_data()?.clone();

        self.state = SessionState::Saving(data.clone());
        Ok(PendingSave {
            program_id: selection.program_id,
            week: selection.week,
            day: selection.day,
            data,
        })
    }

    /// `Saving -> Ready` on success, `Saving -> Error` on failure.
    pub fn complete_save(
        &mut self,
        result: Result<SaveOutcome, StoreError>,
    ) -> Result<SaveOutcome, SessionError> {
        let data = match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Saving(data) => data,
            other => {
                self.state = other;
                return Err(SessionError::NotReady);
            }
        };

        match result {
            Ok(outcome) => {
                info!(outcome = ?outcome, "session.saved");
                self.state = SessionState::Ready(data);
                Ok(outcome)
            }
            Err(e) => {
                warn!(error = %e, "session.save_failed");
                self.state = SessionState::Error(e.to_string());
                Err(e.into())
            }
        }
    }

    pub async fn save(&mut self) -> Result<SaveOutcome, SessionError> {
        let pending = self.begin_save()?;
        let result = self
            .service
            .save_day(
                &pending.program_id,
                &self.user_id,
                pending.week,
                pending.day,
                &pending.data,
            )
            .await;
        self.complete_save(result)
    }
}
