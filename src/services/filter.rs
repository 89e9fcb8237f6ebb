use crate::models::exercise::{Equipment, Exercise, MuscleGroup};

/// Exercises doable with `available`: bodyweight ones always, others when they
/// share at least one tag with it.
pub fn filter_by_equipment<'a>(
    exercises: impl IntoIterator<Item = &'a Exercise>,
    available: &[Equipment],
) -> Vec<&'a Exercise> {
    exercises
        .into_iter()
        .filter(|e| e.is_bodyweight() || e.equipment.iter().any(|tag| available.contains(tag)))
        .collect()
}

/// Exercises whose group is targeted; an empty target list keeps everything.
pub fn filter_by_muscle_groups<'a>(
    exercises: impl IntoIterator<Item = &'a Exercise>,
    targets: &[MuscleGroup],
) -> Vec<&'a Exercise> {
    exercises
        .into_iter()
        .filter(|e| targets.is_empty() || targets.contains(&e.muscle_group))
        .collect()
}
