use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::clients::store::{ProgramStore, StoreError, WorkoutLogStore, sort_rows};
use crate::models::records::ProgramRecord;
use crate::models::workout_log::{LogScope, WorkoutLogRow};

#[derive(Debug, Default)]
struct Tables {
    programs: Vec<ProgramRecord>,
    workout_logs: Vec<WorkoutLogRow>,
}

/// In-process store used when no remote database is configured.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgramStore for MemoryStore {
    async fn insert_program(&self, record: &ProgramRecord) -> Result<ProgramRecord, StoreError> {
        self.tables.write().await.programs.push(record.clone());
        Ok(record.clone())
    }

    async fn get_program(
        &self,
        id: &str,
        user_id: &str,
    ) -> Result<Option<ProgramRecord>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .programs
            .iter()
            .find(|p| p.id == id && p.user_id == user_id)
            .cloned())
    }

    async fn list_programs(&self, user_id: &str) -> Result<Vec<ProgramRecord>, StoreError> {
        let tables = self.tables.read().await;
        let mut programs: Vec<ProgramRecord> = tables
            .programs
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        programs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(programs)
    }
}

#[async_trait]
impl WorkoutLogStore for MemoryStore {
    async fn replace_day(&self, scope: &LogScope, rows: &[WorkoutLogRow]) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.workout_logs.retain(|row| !scope.contains(row));
        tables.workout_logs.extend_from_slice(rows);
        Ok(())
    }

    async fn list_logs(
        &self,
        user_id: &str,
        program_id: &str,
    ) -> Result<Vec<WorkoutLogRow>, StoreError> {
        let tables = self.tables.read().await;
        let mut rows: Vec<WorkoutLogRow> = tables
            .workout_logs
            .iter()
            .filter(|r| r.user_id == user_id && r.program_id == program_id)
            .cloned()
            .collect();
        sort_rows(&mut rows);
        Ok(rows)
    }

    async fn list_day_logs(&self, scope: &LogScope) -> Result<Vec<WorkoutLogRow>, StoreError> {
        let tables = self.tables.read().await;
        let mut rows: Vec<WorkoutLogRow> = tables
            .workout_logs
            .iter()
            .filter(|r| scope.contains(r))
            .cloned()
            .collect();
        sort_rows(&mut rows);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::program::Program;
    use crate::models::workout_log::RepsValue;

    fn row(week: u32, day: u32, exercise: &str, set_number: u32) -> WorkoutLogRow {
        WorkoutLogRow {
            user_id: "user-1".to_string(),
            program_id: "program-1".to_string(),
            week,
            day,
            exercise_name: exercise.to_string(),
            set_number,
            weight: Some(50.0),
            reps: Some(RepsValue::Count(10)),
            notes: None,
        }
    }

    fn scope(week: u32, day: u32) -> LogScope {
        LogScope {
            user_id: "user-1".to_string(),
            program_id: "program-1".to_string(),
            week,
            day,
        }
    }

    #[tokio::test]
    async fn test_replace_day_only_touches_its_scope() {
        let store = MemoryStore::new();
        store
            .replace_day(&scope(1, 1), &[row(1, 1, "Squat", 1), row(1, 1, "Squat", 2)])
            .await
            .unwrap();
        store
            .replace_day(&scope(1, 2), &[row(1, 2, "Bench", 1)])
            .await
            .unwrap();

        store
            .replace_day(&scope(1, 1), &[row(1, 1, "Row", 1)])
            .await
            .unwrap();

        let rows = store.list_logs("user-1", "program-1").await.unwrap();
        let keys: Vec<(&str, u32, u32)> = rows
            .iter()
            .map(|r| (r.exercise_name.as_str(), r.day, r.set_number))
            .collect();
        assert_eq!(keys, vec![("Bench", 2, 1), ("Row", 1, 1)]);
    }

    #[tokio::test]
    async fn test_rows_ordered_by_exercise_then_set() {
        let store = MemoryStore::new();
        store
            .replace_day(
                &scope(2, 1),
                &[row(2, 1, "Squat", 2), row(2, 1, "Bench", 3), row(2, 1, "Squat", 1)],
            )
            .await
            .unwrap();

        let rows = store.list_day_logs(&scope(2, 1)).await.unwrap();
        let keys: Vec<(&str, u32)> = rows
            .iter()
            .map(|r| (r.exercise_name.as_str(), r.set_number))
            .collect();
        assert_eq!(keys, vec![("Bench", 3), ("Squat", 1), ("Squat", 2)]);

        assert!(store.list_day_logs(&scope(1, 1)).await.unwrap().is_empty());
        assert!(store.list_logs("user-2", "program-1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_programs_scoped_by_user() {
        let store = MemoryStore::new();
        let record = ProgramRecord::new("user-1", Program::error("t", "d"));
        store.insert_program(&record).await.unwrap();

        assert_eq!(
            store.get_program(&record.id, "user-1").await.unwrap(),
            Some(record.clone())
        );
        assert_eq!(store.get_program(&record.id, "user-2").await.unwrap(), None);
        assert_eq!(store.list_programs("user-1").await.unwrap().len(), 1);
        assert!(store.list_programs("user-2").await.unwrap().is_empty());
    }
}
