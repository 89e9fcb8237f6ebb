use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::exercise::{
    Category::{self, *},
    Equipment::{self, *},
    Exercise,
    MuscleGroup::{self, *},
};

/// Immutable exercise reference data, built once at startup and handed to the generators.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    exercises: Vec<Exercise>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            exercises: builtin_exercises(),
        }
    }

    pub fn from_exercises(exercises: Vec<Exercise>) -> Result<Self> {
        let mut seen = HashSet::new();
        let duplicates: Vec<&str> = exercises
            .iter()
            .filter(|e| !seen.insert(e.name.as_str()))
            .map(|e| e.name.as_str())
            .collect();

        if !duplicates.is_empty() {
            anyhow::bail!("duplicate exercise names in catalog: {}", duplicates.join(", "));
        }

        Ok(Self { exercises })
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog `{}`", path.display()))?;
        let exercises: Vec<Exercise> = serde_json::from_str(&content)
            .with_context(|| format!("parsing catalog `{}`", path.display()))?;

        Self::from_exercises(exercises)
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn get(&self, name: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn ex(
    name: &str,
    category: Category,
    muscle_group: MuscleGroup,
    muscles: &[&str],
    equipment: &[Equipment],
) -> Exercise {
    Exercise {
        name: name.to_string(),
        category,
        muscle_group,
        muscles: muscles.iter().map(|m| m.to_string()).collect(),
        equipment: equipment.to_vec(),
    }
}

fn builtin_exercises() -> Vec<Exercise> {
    vec![
        // Main lifts
        ex("Back Squat", PowerliftingMain, Legs, &["quads", "glutes", "hamstrings"], &[Barbell, Rack]),
        ex("Bench Press", PowerliftingMain, Chest, &["pectorals", "front delts", "triceps"], &[Barbell, Bench]),
        ex("Deadlift", PowerliftingMain, Back, &["spinal erectors", "glutes", "hamstrings", "lats"], &[Barbell]),
        ex("Overhead Press", PowerliftingMain, Shoulders, &["front delts", "side delts", "triceps"], &[Barbell]),
        // Secondary compounds
        ex("Front Squat", SecondaryCompound, Legs, &["quads", "glutes"], &[Barbell, Rack]),
        ex("Romanian Deadlift", SecondaryCompound, Legs, &["hamstrings", "glutes"], &[Barbell, Dumbbells]),
        ex("Bulgarian Split Squat", SecondaryCompound, Legs, &["quads", "glutes"], &[Dumbbells]),
        ex("Goblet Squat", SecondaryCompound, Legs, &["quads", "glutes"], &[Dumbbells, Kettlebell]),
        ex("Leg Press", SecondaryCompound, Legs, &["quads", "glutes"], &[Machine]),
        ex("Walking Lunge", SecondaryCompound, Legs, &["quads", "glutes"], &[]),
        ex("Bodyweight Squat", SecondaryCompound, Legs, &["quads", "glutes"], &[]),
        ex("Incline Dumbbell Press", SecondaryCompound, Chest, &["upper pectorals", "front delts"], &[Dumbbells, Bench]),
        ex("Dips", SecondaryCompound, Chest, &["lower pectorals", "triceps"], &[]),
        ex("Push-up", SecondaryCompound, Chest, &["pectorals", "triceps"], &[]),
        ex("Barbell Row", SecondaryCompound, Back, &["lats", "rhomboids", "rear delts"], &[Barbell]),
        ex("Pull-up", SecondaryCompound, Back, &["lats", "biceps"], &[PullUpBar]),
        ex("Lat Pulldown", SecondaryCompound, Back, &["lats", "biceps"], &[Cable, Machine]),
        ex("Inverted Row", SecondaryCompound, Back, &["rhomboids", "lats", "biceps"], &[]),
        ex("Seated Dumbbell Press", SecondaryCompound, Shoulders, &["front delts", "triceps"], &[Dumbbells]),
        ex("Pike Push-up", SecondaryCompound, Shoulders, &["front delts", "triceps"], &[]),
        ex("Close-Grip Bench Press", SecondaryCompound, Triceps, &["triceps", "pectorals"], &[Barbell, Bench]),
        ex("Chin-up", SecondaryCompound, Biceps, &["biceps", "lats"], &[PullUpBar]),
        // Heavy isolation
        ex("Leg Extension", HeavyIsolation, Legs, &["quads"], &[Machine]),
        ex("Lying Leg Curl", HeavyIsolation, Legs, &["hamstrings"], &[Machine]),
        ex("Nordic Hamstring Curl", HeavyIsolation, Legs, &["hamstrings"], &[]),
        ex("Glute Bridge", HeavyIsolation, Legs, &["glutes", "hamstrings"], &[]),
        ex("Dumbbell Fly", HeavyIsolation, Chest, &["pectorals"], &[Dumbbells, Bench]),
        ex("Cable Crossover", HeavyIsolation, Chest, &["pectorals"], &[Cable]),
        ex("Dumbbell Pullover", HeavyIsolation, Back, &["lats", "pectorals"], &[Dumbbells, Bench]),
        ex("Barbell Curl", HeavyIsolation, Biceps, &["biceps", "brachialis"], &[Barbell]),
        ex("Hammer Curl", HeavyIsolation, Biceps, &["brachialis", "brachioradialis"], &[Dumbbells]),
        ex("Skull Crusher", HeavyIsolation, Triceps, &["triceps"], &[Barbell, Bench]),
        ex("Diamond Push-up", HeavyIsolation, Triceps, &["triceps", "pectorals"], &[]),
        ex("Standing Calf Raise", HeavyIsolation, Calves, &["gastrocnemius"], &[Machine]),
        ex("Back Extension", HeavyIsolation, LowerBack, &["spinal erectors", "glutes"], &[]),
        // Light isolation
        ex("Lateral Raise", LightIsolation, Shoulders, &["side delts"], &[Dumbbells, Cable]),
        ex("Face Pull", LightIsolation, Shoulders, &["rear delts", "rotator cuff"], &[Cable, Bands]),
        ex("Rear Delt Fly", LightIsolation, Shoulders, &["rear delts"], &[Dumbbells]),
        ex("Triceps Pushdown", LightIsolation, Triceps, &["triceps"], &[Cable]),
        ex("Bench Dip", LightIsolation, Triceps, &["triceps"], &[]),
        ex("Incline Dumbbell Curl", LightIsolation, Biceps, &["biceps"], &[Dumbbells, Bench]),
        ex("Towel Curl", LightIsolation, Biceps, &["biceps"], &[]),
        ex("Band Curl", LightIsolation, Biceps, &["biceps"], &[Bands]),
        ex("Wrist Curl", LightIsolation, Forearms, &["wrist flexors"], &[Dumbbells, Barbell]),
        ex("Dead Hang", LightIsolation, Forearms, &["grip", "wrist flexors"], &[PullUpBar]),
        ex("Fingertip Plank", LightIsolation, Forearms, &["grip"], &[]),
        ex("Plank", LightIsolation, Abs, &["rectus abdominis", "transverse abdominis"], &[]),
        ex("Crunch", LightIsolation, Abs, &["rectus abdominis"], &[]),
        ex("Hanging Leg Raise", LightIsolation, Abs, &["rectus abdominis", "hip flexors"], &[PullUpBar]),
        ex("Cable Crunch", LightIsolation, Abs, &["rectus abdominis"], &[Cable]),
        ex("Single-Leg Calf Raise", LightIsolation, Calves, &["gastrocnemius", "soleus"], &[]),
        ex("Seated Calf Raise", LightIsolation, Calves, &["soleus"], &[Machine]),
        ex("Superman", LightIsolation, LowerBack, &["spinal erectors"], &[]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_has_unique_names() {
        let catalog = Catalog::builtin();
        assert!(Catalog::from_exercises(catalog.exercises().to_vec()).is_ok());
    }

    #[test]
    fn test_builtin_catalog_covers_every_group_with_bodyweight_option() {
        let catalog = Catalog::builtin();

        for group in MuscleGroup::ALL {
            assert!(
                catalog
                    .exercises()
                    .iter()
                    .any(|e| e.muscle_group == group && e.is_bodyweight()),
                "no bodyweight exercise for {}",
                group
            );
        }
    }

    #[test]
    fn test_main_lifts_present() {
        let catalog = Catalog::builtin();

        for name in ["Back Squat", "Bench Press", "Deadlift", "Overhead Press"] {
            let lift = catalog.get(name).unwrap();
            assert_eq!(lift.category, PowerliftingMain);
        }
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let exercises = vec![
            ex("Plank", LightIsolation, Abs, &[], &[]),
            ex("Plank", HeavyIsolation, Abs, &[], &[]),
        ];

        let err = Catalog::from_exercises(exercises).unwrap_err();
        assert!(err.to_string().contains("Plank"));
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join(format!("catalog-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"[{"name": "Ring Row", "category": "secondary-compound", "muscleGroup": "back",
                 "muscles": ["lats"], "equipment": ["bands"]},
                {"name": "Hollow Hold", "category": "light-isolation", "muscleGroup": "abs",
                 "muscles": []}]"#,
        )
        .unwrap();

        let catalog = Catalog::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("Ring Row").unwrap().equipment, vec![Bands]);
        assert!(catalog.get("Hollow Hold").unwrap().is_bodyweight());
    }

    #[test]
    fn test_unknown_equipment_rejected() {
        let path = std::env::temp_dir().join(format!("catalog-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"[{"name": "Sled Push", "category": "secondary-compound", "muscleGroup": "legs",
                 "muscles": [], "equipment": ["sled"]}]"#,
        )
        .unwrap();

        let result = Catalog::from_json_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }
}
