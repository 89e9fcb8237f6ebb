use std::collections::HashSet;

use tracing::debug;

use crate::catalog::Catalog;
use crate::models::exercise::{Category, Exercise};
use crate::models::form::{CompleteOneRepMaxes, ProgramFormData};
use crate::models::program::{
    Day, ExerciseEntry, MainLiftSet, PROGRAM_WEEKS, Program, ProgramEntry, SetDetail, Week,
};
use crate::services::filter::filter_by_equipment;
use crate::services::output_formatter::format_kg;

pub const TRAINING_MAX_RATIO: f64 = 0.9;
pub const PLATE_INCREMENT: f64 = 2.5;
pub const ACCESSORY_NOTE: &str = "Accessoire";

const ACCESSORY_SETS: &str = "3";
const ACCESSORY_REPS: &str = "8-12";

/// Accessories per day, by pool.
const ACCESSORY_QUOTAS: [(Category, usize); 3] = [
    (Category::SecondaryCompound, 2),
    (Category::HeavyIsolation, 1),
    (Category::LightIsolation, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainLift {
    Squat,
    Bench,
    Deadlift,
    OverheadPress,
}

impl MainLift {
    pub const ALL: [MainLift; 4] = [
        MainLift::Squat,
        MainLift::Bench,
        MainLift::Deadlift,
        MainLift::OverheadPress,
    ];

    /// Catalog name of the lift.
    pub fn name(self) -> &'static str {
        match self {
            MainLift::Squat => "Back Squat",
            MainLift::Bench => "Bench Press",
            MainLift::Deadlift => "Deadlift",
            MainLift::OverheadPress => "Overhead Press",
        }
    }

    pub fn one_rep_max(self, maxes: &CompleteOneRepMaxes) -> f64 {
        match self {
            MainLift::Squat => maxes.squat,
            MainLift::Bench => maxes.bench,
            MainLift::Deadlift => maxes.deadlift,
            MainLift::OverheadPress => maxes.overhead_press,
        }
    }
}

/// Rounds to the nearest plate increment, halves going up.
pub fn round_to_plate(weight: f64) -> f64 {
    (weight / PLATE_INCREMENT).round() * PLATE_INCREMENT
}

pub fn training_max(one_rep_max: f64) -> f64 {
    round_to_plate(one_rep_max * TRAINING_MAX_RATIO)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekScheme {
    pub percentages: [u32; 3],
    pub reps: [u32; 3],
    pub amrap_last_set: bool,
}

impl WeekScheme {
    pub fn for_week(week: u32) -> Self {
        match week {
            1 => Self {
                percentages: [65, 75, 85],
                reps: [5, 5, 5],
                amrap_last_set: true,
            },
            2 => Self {
                percentages: [70, 80, 90],
                reps: [3, 3, 3],
                amrap_last_set: true,
            },
            3 => Self {
                percentages: [75, 85, 95],
                reps: [5, 3, 1],
                amrap_last_set: true,
            },
            // Deload
            _ => Self {
                percentages: [40, 50, 60],
                reps: [5, 5, 5],
                amrap_last_set: false,
            },
        }
    }

    pub fn is_amrap(&self, set_index: usize) -> bool {
        self.amrap_last_set && set_index + 1 == self.reps.len()
    }

    pub fn set_reps(&self, set_index: usize) -> String {
        if self.is_amrap(set_index) {
            format!("{}+", self.reps[set_index])
        } else {
            self.reps[set_index].to_string()
        }
    }

    /// Whole-week rep target, e.g. "5/3/1+".
    pub fn label(&self) -> String {
        (0..self.reps.len())
            .map(|i| self.set_reps(i))
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Main lifts trained on the zero-based `day_index`.
pub fn lifts_for_day(training_days: u32, day_index: usize) -> Vec<MainLift> {
    use MainLift::*;

    match training_days {
        0 => Vec::new(),
        1 => MainLift::ALL.to_vec(),
        2 => [vec![Squat, OverheadPress], vec![Bench, Deadlift]][day_index % 2].clone(),
        3 => [vec![Squat], vec![Bench], vec![Deadlift, OverheadPress]][day_index % 3].clone(),
        _ => vec![MainLift::ALL[day_index % MainLift::ALL.len()]],
    }
}

fn main_lift_sets(
    lift: MainLift,
    catalog: &Catalog,
    maxes: &CompleteOneRepMaxes,
    week: u32,
) -> Vec<ProgramEntry> {
    let scheme = WeekScheme::for_week(week);
    let tm = training_max(lift.one_rep_max(maxes));
    let muscles = catalog
        .get(lift.name())
        .map(|e| e.muscles.clone())
        .unwrap_or_default();

    scheme
        .percentages
        .iter()
        .enumerate()
        .map(|(i, &percentage)| {
            let is_amrap = scheme.is_amrap(i);
            ProgramEntry::MainLiftSet(MainLiftSet {
                name: lift.name().to_string(),
                sets: scheme.percentages.len().to_string(),
                reps: scheme.label(),
                notes: is_amrap.then(|| "AMRAP: as many reps as possible".to_string()),
                muscles: muscles.clone(),
                set_detail: SetDetail {
                    set_number: i as u32 + 1,
                    percentage,
                    calculated_weight: round_to_plate(tm * f64::from(percentage) / 100.0),
                    reps: scheme.set_reps(i),
                    is_amrap,
                },
            })
        })
        .collect()
}

/// Accessory work for a day, rotated by day so the pools spread across the week.
fn accessories(equipped: &[&Exercise], day_index: usize) -> Vec<ProgramEntry> {
    let excluded: HashSet<&str> = MainLift::ALL.iter().map(|l| l.name()).collect();

    let (picked, _) = ACCESSORY_QUOTAS.iter().fold(
        (Vec::new(), excluded),
        |(mut picked, mut used), &(category, quota)| {
            let pool: Vec<&Exercise> = equipped
                .iter()
                .copied()
                .filter(|e| e.category == category)
                .collect();
            if pool.is_empty() {
                return (picked, used);
            }

            let offset = (day_index * quota) % pool.len();
            let chosen: Vec<&Exercise> = pool
                .iter()
                .cycle()
                .skip(offset)
                .take(pool.len())
                .copied()
                .filter(|e| !used.contains(e.name.as_str()))
                .take(quota)
                .collect();

            for exercise in chosen {
                used.insert(exercise.name.as_str());
                picked.push(exercise);
            }
            (picked, used)
        },
    );

    picked
        .into_iter()
        .map(|e| {
            ProgramEntry::GenericExercise(ExerciseEntry {
                name: e.name.clone(),
                sets: ACCESSORY_SETS.to_string(),
                reps: ACCESSORY_REPS.to_string(),
                notes: Some(ACCESSORY_NOTE.to_string()),
                muscles: e.muscles.clone(),
                muscle_group: Some(e.muscle_group),
            })
        })
        .collect()
}

pub fn missing_one_rep_max_program() -> Program {
    Program::error(
        "Missing one-rep max values",
        "Powerlifting and powerbuilding programs need a positive one-rep max for the squat, \
         bench press, deadlift and overhead press.",
    )
}

pub fn generate_531_program(catalog: &Catalog, form: &ProgramFormData) -> Program {
    let Some(maxes) = form.one_rep_maxes.complete() else {
        return missing_one_rep_max_program();
    };

    let equipped = filter_by_equipment(catalog.exercises(), &form.equipment);

    let days: Vec<(Vec<MainLift>, Vec<ProgramEntry>)> = (0..form.training_days as usize)
        .map(|day_index| {
            let lifts = lifts_for_day(form.training_days, day_index);
            let extra = if lifts.is_empty() {
                Vec::new()
            } else {
                accessories(&equipped, day_index)
            };
            debug!(day = day_index + 1, lifts = ?lifts, accessories = extra.len(), "531.day_planned");
            (lifts, extra)
        })
        .collect();

    let weeks = (1..=PROGRAM_WEEKS)
        .map(|week_number| Week {
            week_number,
            days: days
                .iter()
                .enumerate()
                .map(|(day_index, (lifts, extra))| Day {
                    day_number: day_index as u32 + 1,
                    exercises: lifts
                        .iter()
                        .flat_map(|&lift| main_lift_sets(lift, catalog, &maxes, week_number))
                        .chain(extra.iter().cloned())
                        .collect(),
                })
                .collect(),
        })
        .collect();

    let training_maxes = MainLift::ALL
        .iter()
        .map(|&lift| format!("{} {}", lift.name(), format_kg(training_max(lift.one_rep_max(&maxes)))))
        .collect::<Vec<_>>()
        .join(", ");

    Program {
        title: format!(
            "5/3/1 {} - {} days/week",
            form.objective, form.training_days
        ),
        description: format!(
            "{}-week 5/3/1 cycle ({} level) with a deload in week 4, sessions of up to {} minutes. \
             Training maxes (90% of 1RM): {}.",
            PROGRAM_WEEKS, form.experience, form.session_minutes, training_maxes
        ),
        is_531: true,
        weeks,
    }
}
