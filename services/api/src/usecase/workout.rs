use chrono::Utc;
use uuid::Uuid;

use liftdesk_domain::workout::{WorkoutDay, WorkoutPlanType};

use crate::domain::repository::{MemberRepository, WorkoutChanges, WorkoutRepository};
use crate::domain::types::{MemberWorkout, MemberWorkoutWithPlan, WorkoutPlan};
use crate::error::ApiError;

fn validate_days(days: &[WorkoutDay]) -> Result<(), ApiError> {
    if days.is_empty() {
        return Err(ApiError::Validation(
            "At least one workout day is required".to_owned(),
        ));
    }
    for day in days {
        if day.exercises.is_empty() {
            return Err(ApiError::Validation(
                "Each day needs at least one exercise".to_owned(),
            ));
        }
        for exercise in &day.exercises {
            if exercise.name.trim().is_empty() {
                return Err(ApiError::Validation(
                    "Exercise name is required".to_owned(),
                ));
            }
            if exercise.sets < 1 {
                return Err(ApiError::Validation(
                    "Exercise sets must be at least 1".to_owned(),
                ));
            }
        }
    }
    Ok(())
}

// ── ListWorkouts / GetWorkout ────────────────────────────────────────────────

pub struct ListWorkoutsUseCase<W: WorkoutRepository> {
    pub workouts: W,
}

impl<W: WorkoutRepository> ListWorkoutsUseCase<W> {
    pub async fn execute(&self, only_active: bool) -> Result<Vec<WorkoutPlan>, ApiError> {
        self.workouts.list(only_active).await
    }
}

pub struct GetWorkoutUseCase<W: WorkoutRepository> {
    pub workouts: W,
}

impl<W: WorkoutRepository> GetWorkoutUseCase<W> {
    pub async fn execute(&self, workout_id: Uuid) -> Result<WorkoutPlan, ApiError> {
        self.workouts
            .find_by_id(workout_id)
            .await?
            .ok_or(ApiError::NotFound("Workout plan"))
    }
}

// ── CreateWorkout ────────────────────────────────────────────────────────────

pub struct CreateWorkoutInput {
    pub name: String,
    pub plan_type: WorkoutPlanType,
    pub description: Option<String>,
    pub days: Vec<WorkoutDay>,
    /// Defaults to the number of days in the template.
    pub days_per_week: Option<i32>,
    pub is_active: bool,
}

pub struct CreateWorkoutUseCase<W: WorkoutRepository> {
    pub workouts: W,
}

impl<W: WorkoutRepository> CreateWorkoutUseCase<W> {
    pub async fn execute(&self, input: CreateWorkoutInput) -> Result<WorkoutPlan, ApiError> {
        let name = input.name.trim().to_owned();
        if name.is_empty() {
            return Err(ApiError::Validation(
                "Workout plan name is required".to_owned(),
            ));
        }
        validate_days(&input.days)?;
        let days_per_week = input.days_per_week.unwrap_or(input.days.len() as i32);
        if !(1..=7).contains(&days_per_week) {
            return Err(ApiError::Validation(
                "Days per week must be between 1 and 7".to_owned(),
            ));
        }

        let now = Utc::now();
        let plan = WorkoutPlan {
            id: Uuid::now_v7(),
            name,
            plan_type: input.plan_type,
            description: input.description,
            days: input.days,
            days_per_week,
            is_active: input.is_active,
            created_at: now,
            updated_at: now,
        };
        self.workouts.create(&plan).await?;
        Ok(plan)
    }
}

// ── UpdateWorkout ────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct UpdateWorkoutInput {
    pub name: Option<String>,
    pub plan_type: Option<WorkoutPlanType>,
    pub description: Option<String>,
    pub days: Option<Vec<WorkoutDay>>,
    pub days_per_week: Option<i32>,
    pub is_active: Option<bool>,
}

pub struct UpdateWorkoutUseCase<W: WorkoutRepository> {
    pub workouts: W,
}

impl<W: WorkoutRepository> UpdateWorkoutUseCase<W> {
    pub async fn execute(
        &self,
        workout_id: Uuid,
        input: UpdateWorkoutInput,
    ) -> Result<WorkoutPlan, ApiError> {
        if self.workouts.find_by_id(workout_id).await?.is_none() {
            return Err(ApiError::NotFound("Workout plan"));
        }

        let name = match input.name {
            Some(name) => {
                let name = name.trim().to_owned();
                if name.is_empty() {
                    return Err(ApiError::Validation(
                        "Workout plan name is required".to_owned(),
                    ));
                }
                Some(name)
            }
            None => None,
        };
        if let Some(days) = input.days.as_deref() {
            validate_days(days)?;
        }
        if matches!(input.days_per_week, Some(d) if !(1..=7).contains(&d)) {
            return Err(ApiError::Validation(
                "Days per week must be between 1 and 7".to_owned(),
            ));
        }

        self.workouts
            .update(
                workout_id,
                WorkoutChanges {
                    name,
                    plan_type: input.plan_type,
                    description: input.description,
                    days: input.days,
                    days_per_week: input.days_per_week,
                    is_active: input.is_active,
                },
            )
            .await
    }
}

// ── DeleteWorkout ────────────────────────────────────────────────────────────

pub struct DeleteWorkoutUseCase<W: WorkoutRepository> {
    pub workouts: W,
}

impl<W: WorkoutRepository> DeleteWorkoutUseCase<W> {
    pub async fn execute(&self, workout_id: Uuid) -> Result<(), ApiError> {
        if !self.workouts.delete(workout_id).await? {
            return Err(ApiError::NotFound("Workout plan"));
        }
        Ok(())
    }
}

// ── AssignWorkout ────────────────────────────────────────────────────────────

pub struct AssignWorkoutUseCase<W: WorkoutRepository, M: MemberRepository> {
    pub workouts: W,
    pub members: M,
}

impl<W: WorkoutRepository, M: MemberRepository> AssignWorkoutUseCase<W, M> {
    pub async fn execute(
        &self,
        member_id: Uuid,
        workout_plan_id: Uuid,
    ) -> Result<MemberWorkout, ApiError> {
        if self.members.find_by_id(member_id).await?.is_none() {
            return Err(ApiError::NotFound("Member"));
        }
        let plan = self
            .workouts
            .find_by_id(workout_plan_id)
            .await?
            .ok_or(ApiError::NotFound("Workout plan"))?;
        if !plan.is_active {
            return Err(ApiError::Validation(
                "Workout plan is not active".to_owned(),
            ));
        }
        self.workouts
            .assign(member_id, workout_plan_id, Utc::now())
            .await
    }
}

// ── OwnWorkout ───────────────────────────────────────────────────────────────

pub struct OwnWorkoutUseCase<W: WorkoutRepository, M: MemberRepository> {
    pub workouts: W,
    pub members: M,
}

impl<W: WorkoutRepository, M: MemberRepository> OwnWorkoutUseCase<W, M> {
    /// `None` means no plan has been assigned yet; that is not an error.
    pub async fn execute(&self, user_id: Uuid) -> Result<Option<MemberWorkoutWithPlan>, ApiError> {
        let mw = self
            .members
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiError::NotFound("Member profile"))?;
        self.workouts.active_assignment(mw.member.id).await
    }
}
