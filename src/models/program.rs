use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::exercise::MuscleGroup;

pub const PROGRAM_WEEKS: u32 = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub title: String,
    pub description: String,
    #[serde(rename = "is531")]
    pub is_531: bool,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    pub week_number: u32,
    pub days: Vec<Day>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    pub day_number: u32,
    pub exercises: Vec<ProgramEntry>,
}

/// An entry under `day.exercises`.
///
/// Main-lift entries stand for exactly one working set; generic entries stand
/// for a whole exercise and are expanded into `sets` rows when displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ProgramEntry {
    MainLiftSet(MainLiftSet),
    GenericExercise(ExerciseEntry),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseEntry {
    pub name: String,
    pub sets: String,
    pub reps: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub muscles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_group: Option<MuscleGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainLiftSet {
    pub name: String,
    /// Working sets in the week's scheme, e.g. "3".
    pub sets: String,
    /// The week's rep target, e.g. "5/3/1+".
    pub reps: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub muscles: Vec<String>,
    pub set_detail: SetDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDetail {
    pub set_number: u32,
    /// Percentage of the training max, e.g. 85.
    pub percentage: u32,
    pub calculated_weight: f64,
    pub reps: String,
    #[serde(default)]
    pub is_amrap: bool,
}

impl ProgramEntry {
    pub fn name(&self) -> &str {
        match self {
            ProgramEntry::MainLiftSet(set) => &set.name,
            ProgramEntry::GenericExercise(exercise) => &exercise.name,
        }
    }

    /// Set numbers this entry contributes to the day's log sheet.
    pub fn set_numbers(&self) -> Vec<u32> {
        match self {
            ProgramEntry::MainLiftSet(set) => vec![set.set_detail.set_number],
            ProgramEntry::GenericExercise(exercise) => {
                (1..=exercise.sets.trim().parse::<u32>().unwrap_or(0)).collect()
            }
        }
    }
}

impl Program {
    /// Value-level error signal: no weeks, explanatory title and description.
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            is_531: false,
            weeks: Vec::new(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn days_per_week(&self) -> u32 {
        self.weeks.first().map(|w| w.days.len() as u32).unwrap_or(0)
    }

    pub fn day(&self, week_number: u32, day_number: u32) -> Option<&Day> {
        self.weeks
            .iter()
            .find(|w| w.week_number == week_number)
            .and_then(|w| w.days.iter().find(|d| d.day_number == day_number))
    }

    /// Sets per muscle group across all days of one week (generic entries only).
    pub fn total_sets_by_group(&self, week_number: u32) -> BTreeMap<MuscleGroup, u32> {
        let mut totals = BTreeMap::new();

        let Some(week) = self.weeks.iter().find(|w| w.week_number == week_number) else {
            return totals;
        };

        for entry in week.days.iter().flat_map(|d| &d.exercises) {
            if let ProgramEntry::GenericExercise(exercise) = entry
                && let Some(group) = exercise.muscle_group
            {
                let sets = exercise.sets.trim().parse::<u32>().unwrap_or(0);
                *totals.entry(group).or_insert(0) += sets;
            }
        }

        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squat_set(set_number: u32) -> ProgramEntry {
        ProgramEntry::MainLiftSet(MainLiftSet {
            name: "Back Squat".to_string(),
            sets: "3".to_string(),
            reps: "5/5/5+".to_string(),
            notes: None,
            muscles: vec![],
            set_detail: SetDetail {
                set_number,
                percentage: 65,
                calculated_weight: 87.5,
                reps: "5".to_string(),
                is_amrap: false,
            },
        })
    }

    #[test]
    fn test_entry_kind_is_tagged() {
        let json = serde_json::to_value(squat_set(1)).unwrap();

        assert_eq!(json["kind"], "main-lift-set");
        assert_eq!(json["setDetail"]["calculatedWeight"], 87.5);
        assert_eq!(json["setDetail"]["isAmrap"], false);

        let generic = ProgramEntry::GenericExercise(ExerciseEntry {
            name: "Push-up".to_string(),
            sets: "3".to_string(),
            reps: "12-15".to_string(),
            notes: Some("RPE 7".to_string()),
            muscles: vec![],
            muscle_group: Some(MuscleGroup::Chest),
        });
        let json = serde_json::to_value(&generic).unwrap();

        assert_eq!(json["kind"], "generic-exercise");
        assert_eq!(json["muscleGroup"], "chest");
        assert!(json.get("muscles").is_none());
    }

    #[test]
    fn test_set_numbers() {
        assert_eq!(squat_set(2).set_numbers(), vec![2]);

        let generic = ProgramEntry::GenericExercise(ExerciseEntry {
            name: "Plank".to_string(),
            sets: "3".to_string(),
            reps: "8-12".to_string(),
            notes: None,
            muscles: vec![],
            muscle_group: None,
        });
        assert_eq!(generic.set_numbers(), vec![1, 2, 3]);
    }

    #[test]
    fn test_error_program() {
        let program = Program::error("Missing data", "Provide every one-rep max");

        assert!(program.is_error());
        assert_eq!(program.days_per_week(), 0);
        assert!(program.day(1, 1).is_none());
    }

    #[test]
    fn test_program_parses_back_unchanged() {
        let program = Program {
            title: "T".to_string(),
            description: "D".to_string(),
            is_531: true,
            weeks: vec![Week {
                week_number: 1,
                days: vec![Day {
                    day_number: 1,
                    exercises: vec![squat_set(1), squat_set(2)],
                }],
            }],
        };

        let json = serde_json::to_string(&program).unwrap();
        assert!(json.contains("\"is531\":true"));

        let parsed: Program = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, program);
    }
}
