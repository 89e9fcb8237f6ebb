use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::exercise::Equipment;

pub const TRAINING_DAYS_RANGE: std::ops::RangeInclusive<u32> = 1..=7;
pub const SESSION_MINUTES_RANGE: std::ops::RangeInclusive<u32> = 15..=180;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Objective {
    #[serde(rename = "Prise de Masse")]
    MassGain,
    #[serde(rename = "Sèche / Perte de Gras")]
    FatLoss,
    #[serde(rename = "Powerlifting")]
    Powerlifting,
    #[serde(rename = "Powerbuilding")]
    Powerbuilding,
}

impl Objective {
    /// Percentage-based objectives are served by the 5/3/1 generator.
    pub fn is_percentage_based(self) -> bool {
        matches!(self, Objective::Powerlifting | Objective::Powerbuilding)
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MassGain => "Mass Gain",
            Self::FatLoss => "Fat Loss",
            Self::Powerlifting => "Powerlifting",
            Self::Powerbuilding => "Powerbuilding",
        };

        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "Débutant")]
    Beginner,
    #[default]
    #[serde(rename = "Intermédiaire")]
    Intermediate,
    #[serde(rename = "Avancé")]
    Advanced,
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        };

        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SplitType {
    #[serde(rename = "Full Body")]
    FullBody,
    #[serde(rename = "Half Body")]
    HalfBody,
    #[serde(rename = "Push Pull Legs")]
    PushPullLegs,
    #[default]
    #[serde(rename = "Pas de préférence")]
    NoPreference,
}

impl fmt::Display for SplitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::FullBody => "full body",
            Self::HalfBody => "upper/lower",
            Self::PushPullLegs => "push/pull/legs",
            Self::NoPreference => "full body",
        };

        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OneRepMaxes {
    #[serde(default, rename = "squat1RM")]
    pub squat: Option<f64>,
    #[serde(default, rename = "bench1RM")]
    pub bench: Option<f64>,
    #[serde(default, rename = "deadlift1RM")]
    pub deadlift: Option<f64>,
    #[serde(default, rename = "overheadPress1RM")]
    pub overhead_press: Option<f64>,
}

/// One-rep maxes that are all present and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompleteOneRepMaxes {
    pub squat: f64,
    pub bench: f64,
    pub deadlift: f64,
    pub overhead_press: f64,
}

impl OneRepMaxes {
    pub fn complete(&self) -> Option<CompleteOneRepMaxes> {
        let valid = |v: Option<f64>| v.filter(|x| x.is_finite() && *x > 0.0);

        Some(CompleteOneRepMaxes {
            squat: valid(self.squat)?,
            bench: valid(self.bench)?,
            deadlift: valid(self.deadlift)?,
            overhead_press: valid(self.overhead_press)?,
        })
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FormError {
    #[error("training days per week must be between 1 and 7, got {0}")]
    TrainingDays(u32),

    #[error("session duration must be between 15 and 180 minutes, got {0}")]
    SessionDuration(u32),
}

fn default_session_minutes() -> u32 {
    60
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramFormData {
    pub objective: Objective,
    #[serde(default)]
    pub experience: ExperienceLevel,
    #[serde(default)]
    pub split: SplitType,
    #[serde(rename = "joursEntrainement")]
    pub training_days: u32,
    #[serde(default = "default_session_minutes")]
    pub session_minutes: u32,
    #[serde(default, rename = "materiel")]
    pub equipment: Vec<Equipment>,
    #[serde(flatten)]
    pub one_rep_maxes: OneRepMaxes,
}

impl ProgramFormData {
    pub fn validate(&self) -> Result<(), FormError> {
        if !TRAINING_DAYS_RANGE.contains(&self.training_days) {
            return Err(FormError::TrainingDays(self.training_days));
        }
        if !SESSION_MINUTES_RANGE.contains(&self.session_minutes) {
            return Err(FormError::SessionDuration(self.session_minutes));
        }
        Ok(())
    }
}
