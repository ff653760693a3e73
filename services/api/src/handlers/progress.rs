use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use liftdesk_auth::{AdminUser, AuthUser};

use crate::error::ApiError;
use crate::handlers::common::{PageQuery, ProgressDto};
use crate::response::{Envelope, Paginated};
use crate::state::AppState;
use crate::usecase::progress::{
    DeleteProgressUseCase, MemberProgressUseCase, OwnProgressUseCase, ProgressInput,
    RecordOwnProgressUseCase, RecordProgressUseCase,
};

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntryRequest {
    pub weight_kg: Option<f64>,
    pub body_fat_pct: Option<f64>,
    pub chest_cm: Option<f64>,
    pub waist_cm: Option<f64>,
    pub hips_cm: Option<f64>,
    pub arms_cm: Option<f64>,
    pub thighs_cm: Option<f64>,
    pub photo_url: Option<String>,
    pub notes: Option<String>,
}

impl ProgressEntryRequest {
    fn into_input(self) -> ProgressInput {
        ProgressInput {
            weight_kg: self.weight_kg,
            body_fat_pct: self.body_fat_pct,
            chest_cm: self.chest_cm,
            waist_cm: self.waist_cm,
            hips_cm: self.hips_cm,
            arms_cm: self.arms_cm,
            thighs_cm: self.thighs_cm,
            photo_url: self.photo_url,
            notes: self.notes,
        }
    }
}

// ── POST /api/progress ───────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordProgressRequest {
    pub member_id: Uuid,
    #[serde(flatten)]
    pub entry: ProgressEntryRequest,
}

pub async fn record_progress(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(body): Json<RecordProgressRequest>,
) -> Result<(StatusCode, Json<Envelope<ProgressDto>>), ApiError> {
    let usecase = RecordProgressUseCase {
        progress: state.progress_repo(),
        members: state.member_repo(),
    };
    let record = usecase
        .execute(body.member_id, body.entry.into_input())
        .await?;
    Ok((
        StatusCode::CREATED,
        Envelope::with_message("Progress recorded successfully", ProgressDto::new(record)),
    ))
}

// ── POST /api/progress/me ────────────────────────────────────────────────────

pub async fn record_own_progress(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<ProgressEntryRequest>,
) -> Result<(StatusCode, Json<Envelope<ProgressDto>>), ApiError> {
    let usecase = RecordOwnProgressUseCase {
        progress: state.progress_repo(),
        members: state.member_repo(),
    };
    let record = usecase.execute(auth.user_id, body.into_input()).await?;
    Ok((
        StatusCode::CREATED,
        Envelope::with_message("Progress recorded successfully", ProgressDto::new(record)),
    ))
}

// ── GET /api/progress/member/{memberId} ──────────────────────────────────────

pub async fn member_progress(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(member_id): Path<Uuid>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Envelope<Paginated<ProgressDto>>>, ApiError> {
    let page = query.request();
    let usecase = MemberProgressUseCase {
        progress: state.progress_repo(),
        members: state.member_repo(),
    };
    let (items, total) = usecase.execute(member_id, page).await?;
    let items = items.into_iter().map(ProgressDto::new).collect();
    Ok(Envelope::data(Paginated::new(items, page, total)))
}

// ── GET /api/progress/me ─────────────────────────────────────────────────────

pub async fn own_progress(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Envelope<Paginated<ProgressDto>>>, ApiError> {
    let page = query.request();
    let usecase = OwnProgressUseCase {
        progress: state.progress_repo(),
        members: state.member_repo(),
    };
    let (items, total) = usecase.execute(auth.user_id, page).await?;
    let items = items.into_iter().map(ProgressDto::new).collect();
    Ok(Envelope::data(Paginated::new(items, page, total)))
}

// ── DELETE /api/progress/{id} ────────────────────────────────────────────────

pub async fn delete_progress(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let usecase = DeleteProgressUseCase {
        progress: state.progress_repo(),
        members: state.member_repo(),
    };
    // Members may only delete their own entries.
    let restrict_to_user = (!auth.role.is_admin()).then_some(auth.user_id);
    usecase.execute(id, restrict_to_user).await?;
    Ok(Envelope::message("Progress record deleted successfully"))
}
