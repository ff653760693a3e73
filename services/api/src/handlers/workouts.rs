use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use liftdesk_auth::{AdminUser, AuthUser};
use liftdesk_core::serde::to_rfc3339_ms;
use liftdesk_domain::workout::{WorkoutDay, WorkoutPlanType};

use crate::error::ApiError;
use crate::handlers::common::{AssignmentDto, WorkoutPlanDto};
use crate::response::Envelope;
use crate::state::AppState;
use crate::usecase::workout::{
    AssignWorkoutUseCase, CreateWorkoutInput, CreateWorkoutUseCase, DeleteWorkoutUseCase,
    GetWorkoutUseCase, ListWorkoutsUseCase, OwnWorkoutUseCase, UpdateWorkoutInput,
    UpdateWorkoutUseCase,
};

// ── GET /api/workouts ────────────────────────────────────────────────────────

pub async fn list_workouts(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<WorkoutPlanDto>>>, ApiError> {
    // Members only see active templates; admins see the full catalogue.
    let only_active = !auth.role.is_admin();
    let usecase = ListWorkoutsUseCase {
        workouts: state.workout_repo(),
    };
    let plans = usecase.execute(only_active).await?;
    Ok(Envelope::data(
        plans.into_iter().map(WorkoutPlanDto::new).collect(),
    ))
}

// ── GET /api/workouts/{id} ───────────────────────────────────────────────────

pub async fn get_workout(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<WorkoutPlanDto>>, ApiError> {
    let usecase = GetWorkoutUseCase {
        workouts: state.workout_repo(),
    };
    let plan = usecase.execute(id).await?;
    Ok(Envelope::data(WorkoutPlanDto::new(plan)))
}

// ── POST /api/workouts ───────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutRequest {
    pub name: String,
    pub plan_type: WorkoutPlanType,
    pub description: Option<String>,
    pub days: Vec<WorkoutDay>,
    pub days_per_week: Option<i32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

pub async fn create_workout(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(body): Json<CreateWorkoutRequest>,
) -> Result<(StatusCode, Json<Envelope<WorkoutPlanDto>>), ApiError> {
    let usecase = CreateWorkoutUseCase {
        workouts: state.workout_repo(),
    };
    let plan = usecase
        .execute(CreateWorkoutInput {
            name: body.name,
            plan_type: body.plan_type,
            description: body.description,
            days: body.days,
            days_per_week: body.days_per_week,
            is_active: body.is_active,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Envelope::with_message("Workout plan created successfully", WorkoutPlanDto::new(plan)),
    ))
}

// ── PUT /api/workouts/{id} ───────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkoutRequest {
    pub name: Option<String>,
    pub plan_type: Option<WorkoutPlanType>,
    pub description: Option<String>,
    pub days: Option<Vec<WorkoutDay>>,
    pub days_per_week: Option<i32>,
    pub is_active: Option<bool>,
}

pub async fn update_workout(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateWorkoutRequest>,
) -> Result<Json<Envelope<WorkoutPlanDto>>, ApiError> {
    let usecase = UpdateWorkoutUseCase {
        workouts: state.workout_repo(),
    };
    let plan = usecase
        .execute(
            id,
            UpdateWorkoutInput {
                name: body.name,
                plan_type: body.plan_type,
                description: body.description,
                days: body.days,
                days_per_week: body.days_per_week,
                is_active: body.is_active,
            },
        )
        .await?;
    Ok(Envelope::with_message(
        "Workout plan updated successfully",
        WorkoutPlanDto::new(plan),
    ))
}

// ── DELETE /api/workouts/{id} ────────────────────────────────────────────────

pub async fn delete_workout(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let usecase = DeleteWorkoutUseCase {
        workouts: state.workout_repo(),
    };
    usecase.execute(id).await?;
    Ok(Envelope::message("Workout plan deleted successfully"))
}

// ── POST /api/workouts/{id}/assign ───────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignWorkoutRequest {
    pub member_id: Uuid,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentCreatedResponse {
    pub id: Uuid,
    pub member_id: Uuid,
    pub workout_plan_id: Uuid,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub assigned_at: DateTime<Utc>,
}

pub async fn assign_workout(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<AssignWorkoutRequest>,
) -> Result<(StatusCode, Json<Envelope<AssignmentCreatedResponse>>), ApiError> {
    let usecase = AssignWorkoutUseCase {
        workouts: state.workout_repo(),
        members: state.member_repo(),
    };
    let assignment = usecase.execute(body.member_id, id).await?;
    Ok((
        StatusCode::CREATED,
        Envelope::with_message(
            "Workout plan assigned successfully",
            AssignmentCreatedResponse {
                id: assignment.id,
                member_id: assignment.member_id,
                workout_plan_id: id,
                assigned_at: assignment.assigned_at,
            },
        ),
    ))
}

// ── GET /api/workouts/me ─────────────────────────────────────────────────────

pub async fn own_workout(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Envelope<Option<AssignmentDto>>>, ApiError> {
    let usecase = OwnWorkoutUseCase {
        workouts: state.workout_repo(),
        members: state.member_repo(),
    };
    // `data` is null until a plan has been assigned.
    let assignment = usecase.execute(auth.user_id).await?;
    Ok(Envelope::data(assignment.map(AssignmentDto::new)))
}
