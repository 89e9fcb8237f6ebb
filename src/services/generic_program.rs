use std::collections::BTreeMap;

use tracing::debug;

use crate::catalog::Catalog;
use crate::models::exercise::{Category, Exercise, MuscleGroup};
use crate::models::form::{Objective, ProgramFormData, SplitType};
use crate::models::program::{Day, ExerciseEntry, PROGRAM_WEEKS, Program, ProgramEntry, Week};
use crate::services::filter::{filter_by_equipment, filter_by_muscle_groups};

pub const WEEKLY_SET_CAP: u32 = 15;
pub const SETS_PER_EXERCISE: u32 = 3;
pub const MAX_EXERCISES_PER_DAY: usize = 8;

const PUSH: [MuscleGroup; 3] = [MuscleGroup::Chest, MuscleGroup::Shoulders, MuscleGroup::Triceps];
const PULL: [MuscleGroup; 3] = [MuscleGroup::Back, MuscleGroup::Biceps, MuscleGroup::Forearms];
const LEGS: [MuscleGroup; 3] = [MuscleGroup::Legs, MuscleGroup::Abs, MuscleGroup::Calves];
const UPPER: [MuscleGroup; 6] = [
    MuscleGroup::Chest,
    MuscleGroup::Back,
    MuscleGroup::Shoulders,
    MuscleGroup::Biceps,
    MuscleGroup::Triceps,
    MuscleGroup::Forearms,
];
const LOWER: [MuscleGroup; 4] = [
    MuscleGroup::Legs,
    MuscleGroup::Calves,
    MuscleGroup::Abs,
    MuscleGroup::LowerBack,
];

/// Muscle groups trained on the zero-based `day_index` for a split.
pub fn split_targets(split: SplitType, day_index: usize) -> Vec<MuscleGroup> {
    match split {
        SplitType::FullBody | SplitType::NoPreference => MuscleGroup::ALL.to_vec(),
        SplitType::HalfBody => {
            let days: [&[MuscleGroup]; 2] = [&UPPER, &LOWER];
            days[day_index % days.len()].to_vec()
        }
        SplitType::PushPullLegs => {
            let days: [&[MuscleGroup]; 3] = [&PUSH, &PULL, &LEGS];
            days[day_index % days.len()].to_vec()
        }
    }
}

/// RPE target for a category in a given week (1-based).
pub fn rpe_note(category: Category, week: u32) -> String {
    let rpe = match (category, week) {
        (Category::PowerliftingMain, 1) => "6",
        (Category::PowerliftingMain, 2) => "7",
        (Category::PowerliftingMain, 3) => "8",
        (Category::PowerliftingMain, _) => "10",
        (Category::SecondaryCompound, 1) => "7",
        (Category::SecondaryCompound, 2) => "7.5",
        (Category::SecondaryCompound, 3) => "8",
        (Category::SecondaryCompound, _) => "9",
        (Category::HeavyIsolation, 1) => "8",
        (Category::HeavyIsolation, 2) => "8.5",
        (Category::HeavyIsolation, 3) => "9",
        (Category::HeavyIsolation, _) => "10",
        // Light isolation goes to failure every week.
        (Category::LightIsolation, _) => "10",
    };

    format!("RPE {}", rpe)
}

fn rep_range(objective: Objective) -> &'static str {
    match objective {
        Objective::FatLoss => "12-15",
        _ => "8-12",
    }
}

/// Running set count per large muscle group; reset at the start of every week.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklyVolume(BTreeMap<MuscleGroup, u32>);

impl WeeklyVolume {
    pub fn sets(&self, group: MuscleGroup) -> u32 {
        self.0.get(&group).copied().unwrap_or(0)
    }

    pub fn admits(&self, exercise: &Exercise) -> bool {
        !exercise.muscle_group.is_large()
            || self.sets(exercise.muscle_group) + SETS_PER_EXERCISE <= WEEKLY_SET_CAP
    }

    pub fn record(mut self, exercise: &Exercise) -> Self {
        if exercise.muscle_group.is_large() {
            *self.0.entry(exercise.muscle_group).or_insert(0) += SETS_PER_EXERCISE;
        }
        self
    }
}

/// Picks one day's exercises from `pool` in category priority order.
///
/// Each category contributes at most its first `daily_cap` candidates; a
/// candidate that would break the weekly cap is skipped, not replaced.
pub fn select_day<'a>(
    pool: &[&'a Exercise],
    volume: WeeklyVolume,
    week: u32,
) -> (Vec<&'a Exercise>, WeeklyVolume) {
    Category::PRIORITY.iter().fold(
        (Vec::new(), volume),
        |(selected, volume), &category| {
            pool.iter()
                .filter(|e| e.category == category)
                .take(category.daily_cap())
                .fold((selected, volume), |(mut selected, volume), &exercise| {
                    if selected.len() >= MAX_EXERCISES_PER_DAY
                        || selected.iter().any(|s: &&Exercise| s.name == exercise.name)
                    {
                        return (selected, volume);
                    }
                    if !volume.admits(exercise) {
                        debug!(
                            exercise = %exercise.name,
                            group = %exercise.muscle_group,
                            week,
                            "generic.volume_cap_skip"
                        );
                        return (selected, volume);
                    }
                    selected.push(exercise);
                    (selected, volume.record(exercise))
                })
        },
    )
}

fn to_entry(exercise: &Exercise, objective: Objective, week: u32) -> ProgramEntry {
    ProgramEntry::GenericExercise(ExerciseEntry {
        name: exercise.name.clone(),
        sets: SETS_PER_EXERCISE.to_string(),
        reps: rep_range(objective).to_string(),
        notes: Some(rpe_note(exercise.category, week)),
        muscles: exercise.muscles.clone(),
        muscle_group: Some(exercise.muscle_group),
    })
}

fn build_week(
    equipped: &[&Exercise],
    form: &ProgramFormData,
    week_number: u32,
) -> Week {
    let (days, _) = (0..form.training_days as usize).fold(
        (Vec::new(), WeeklyVolume::default()),
        |(mut days, volume), day_index| {
            let targets = split_targets(form.split, day_index);
            let pool = filter_by_muscle_groups(equipped.iter().copied(), &targets);
            let (selected, volume) = select_day(&pool, volume, week_number);

            days.push(Day {
                day_number: day_index as u32 + 1,
                exercises: selected
                    .into_iter()
                    .map(|e| to_entry(e, form.objective, week_number))
                    .collect(),
            });
            (days, volume)
        },
    );

    Week { week_number, days }
}

pub fn generate_generic_program(catalog: &Catalog, form: &ProgramFormData) -> Program {
    let equipped = filter_by_equipment(catalog.exercises(), &form.equipment);

    let weeks = (1..=PROGRAM_WEEKS)
        .map(|week_number| build_week(&equipped, form, week_number))
        .collect();

    Program {
        title: format!(
            "{} Program - {} days/week",
            form.objective, form.training_days
        ),
        description: format!(
            "{}-week {} program ({} level), {} sessions of up to {} minutes per week. \
             {} reps per set, intensity rising by RPE each week, at most {} weekly sets per large muscle group.",
            PROGRAM_WEEKS,
            form.split,
            form.experience,
            form.training_days,
            form.session_minutes,
            rep_range(form.objective),
            WEEKLY_SET_CAP
        ),
        is_531: false,
        weeks,
    }
}
