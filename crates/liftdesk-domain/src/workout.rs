//! Workout plan domain types.
//!
//! A workout plan's day-by-day structure is stored as a JSON column and
//! round-trips through these types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkoutPlanType {
    PushPullLegs,
    BroSplit,
    FullBody,
    UpperLower,
    Custom,
}

impl WorkoutPlanType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PUSH_PULL_LEGS" => Some(Self::PushPullLegs),
            "BRO_SPLIT" => Some(Self::BroSplit),
            "FULL_BODY" => Some(Self::FullBody),
            "UPPER_LOWER" => Some(Self::UpperLower),
            "CUSTOM" => Some(Self::Custom),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PushPullLegs => "PUSH_PULL_LEGS",
            Self::BroSplit => "BRO_SPLIT",
            Self::FullBody => "FULL_BODY",
            Self::UpperLower => "UPPER_LOWER",
            Self::Custom => "CUSTOM",
        }
    }
}

/// One exercise slot within a workout day. `reps` is free text ("8-12",
/// "to failure"), not a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    pub sets: i32,
    pub reps: String,
    pub muscle: String,
}

/// One day of a workout plan: a label plus its ordered exercises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    pub day: String,
    pub exercises: Vec<Exercise>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_workout_plan_type() {
        assert_eq!(
            WorkoutPlanType::parse("PUSH_PULL_LEGS"),
            Some(WorkoutPlanType::PushPullLegs)
        );
        assert_eq!(WorkoutPlanType::parse("CROSSFIT"), None);
    }

    #[test]
    fn should_round_trip_days_via_json() {
        let days = vec![WorkoutDay {
            day: "Monday - Push".to_string(),
            exercises: vec![Exercise {
                name: "Bench Press".to_string(),
                sets: 4,
                reps: "8-10".to_string(),
                muscle: "Chest".to_string(),
            }],
        }];
        let json = serde_json::to_value(&days).unwrap();
        assert_eq!(json[0]["exercises"][0]["name"], "Bench Press");
        let back: Vec<WorkoutDay> = serde_json::from_value(json).unwrap();
        assert_eq!(back, days);
    }
}
