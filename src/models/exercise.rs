use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    PowerliftingMain,
    SecondaryCompound,
    HeavyIsolation,
    LightIsolation,
}

impl Category {
    /// Selection order used by the generic generator.
    pub const PRIORITY: [Category; 4] = [
        Category::PowerliftingMain,
        Category::SecondaryCompound,
        Category::HeavyIsolation,
        Category::LightIsolation,
    ];

    pub fn daily_cap(self) -> usize {
        match self {
            Category::PowerliftingMain => 2,
            Category::SecondaryCompound => 3,
            Category::HeavyIsolation => 2,
            Category::LightIsolation => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MuscleGroup {
    Legs,
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Abs,
    Calves,
    Forearms,
    LowerBack,
}

impl MuscleGroup {
    pub const ALL: [MuscleGroup; 10] = [
        MuscleGroup::Legs,
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Shoulders,
        MuscleGroup::Biceps,
        MuscleGroup::Triceps,
        MuscleGroup::Abs,
        MuscleGroup::Calves,
        MuscleGroup::Forearms,
        MuscleGroup::LowerBack,
    ];

    /// Large groups are subject to the weekly volume cap.
    pub fn is_large(self) -> bool {
        matches!(
            self,
            MuscleGroup::Legs | MuscleGroup::Chest | MuscleGroup::Back | MuscleGroup::Shoulders
        )
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Legs => "legs",
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Shoulders => "shoulders",
            Self::Biceps => "biceps",
            Self::Triceps => "triceps",
            Self::Abs => "abs",
            Self::Calves => "calves",
            Self::Forearms => "forearms",
            Self::LowerBack => "lower-back",
        };

        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Equipment {
    Barbell,
    Dumbbells,
    Bench,
    Rack,
    PullUpBar,
    Cable,
    Machine,
    Kettlebell,
    Bands,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub category: Category,
    #[serde(rename = "muscleGroup")]
    pub muscle_group: MuscleGroup,
    pub muscles: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
}

impl Exercise {
    pub fn is_bodyweight(&self) -> bool {
        self.equipment.is_empty()
    }
}
