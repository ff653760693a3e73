use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use liftdesk_auth::{AdminUser, AuthUser};

use crate::error::ApiError;
use crate::handlers::common::PlanDto;
use crate::response::Envelope;
use crate::state::AppState;
use crate::usecase::plan::{
    CreatePlanInput, CreatePlanUseCase, DeletePlanUseCase, GetPlanUseCase, ListPlansUseCase,
    UpdatePlanInput, UpdatePlanUseCase,
};

// ── GET /api/plans ───────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlanListQuery {
    pub include_inactive: Option<bool>,
}

pub async fn list_plans(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<PlanListQuery>,
) -> Result<Json<Envelope<Vec<PlanDto>>>, ApiError> {
    // Members only ever see active plans.
    let include_inactive = auth.role.is_admin() && query.include_inactive.unwrap_or(false);
    let usecase = ListPlansUseCase {
        plans: state.plan_repo(),
    };
    let plans = usecase.execute(include_inactive).await?;
    Ok(Envelope::data(
        plans.into_iter().map(PlanDto::new).collect(),
    ))
}

// ── GET /api/plans/{id} ──────────────────────────────────────────────────────

pub async fn get_plan(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<PlanDto>>, ApiError> {
    let usecase = GetPlanUseCase {
        plans: state.plan_repo(),
    };
    let plan = usecase.execute(id).await?;
    Ok(Envelope::data(PlanDto::new(plan)))
}

// ── POST /api/plans ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanRequest {
    pub name: String,
    pub duration_days: i32,
    /// Base price in rupees.
    pub price: f64,
    pub gst_percent: Option<i32>,
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

pub async fn create_plan(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(body): Json<CreatePlanRequest>,
) -> Result<(StatusCode, Json<Envelope<PlanDto>>), ApiError> {
    let usecase = CreatePlanUseCase {
        plans: state.plan_repo(),
    };
    let plan = usecase
        .execute(CreatePlanInput {
            name: body.name,
            duration_days: body.duration_days,
            price_rupees: body.price,
            gst_percent: body.gst_percent,
            description: body.description,
            features: body.features,
            is_active: body.is_active,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Envelope::with_message("Plan created successfully", PlanDto::new(plan)),
    ))
}

// ── PUT /api/plans/{id} ──────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlanRequest {
    pub name: Option<String>,
    pub duration_days: Option<i32>,
    pub price: Option<f64>,
    pub gst_percent: Option<i32>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

pub async fn update_plan(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdatePlanRequest>,
) -> Result<Json<Envelope<PlanDto>>, ApiError> {
    let usecase = UpdatePlanUseCase {
        plans: state.plan_repo(),
    };
    let plan = usecase
        .execute(
            id,
            UpdatePlanInput {
                name: body.name,
                duration_days: body.duration_days,
                price_rupees: body.price,
                gst_percent: body.gst_percent,
                description: body.description,
                features: body.features,
                is_active: body.is_active,
            },
        )
        .await?;
    Ok(Envelope::with_message(
        "Plan updated successfully",
        PlanDto::new(plan),
    ))
}

// ── DELETE /api/plans/{id} ───────────────────────────────────────────────────

pub async fn delete_plan(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let usecase = DeletePlanUseCase {
        plans: state.plan_repo(),
    };
    usecase.execute(id).await?;
    Ok(Envelope::message("Plan deleted successfully"))
}
