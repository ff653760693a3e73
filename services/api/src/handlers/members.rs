use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use liftdesk_auth::{AdminUser, AuthUser};
use liftdesk_domain::member::Gender;
use liftdesk_domain::user::UserStatus;

use crate::domain::repository::MemberListFilter;
use crate::error::ApiError;
use crate::handlers::common::{MemberDto, MemberOverviewDto, MembershipDto, page_request};
use crate::response::{Envelope, Paginated};
use crate::state::AppState;
use crate::usecase::member::{
    CreateMemberInput, CreateMemberUseCase, DeleteMemberUseCase, GetMemberUseCase,
    GetOwnProfileUseCase, ListMembersUseCase, MemberQrUseCase, OwnMembershipsUseCase, OwnQrUseCase,
    UpdateMemberInput, UpdateMemberUseCase,
};

// ── GET /api/members ─────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct MemberListQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

pub async fn list_members(
    _admin: AdminUser,
    State(state): State<AppState>,
    Query(query): Query<MemberListQuery>,
) -> Result<Json<Envelope<Paginated<MemberOverviewDto>>>, ApiError> {
    let page = page_request(query.page, query.limit);
    let filter = MemberListFilter {
        search: query.search.filter(|s| !s.trim().is_empty()),
        // Unknown status values fall back to no filter.
        status: query.status.as_deref().and_then(UserStatus::parse),
    };
    let usecase = ListMembersUseCase {
        members: state.member_repo(),
    };
    let (items, total) = usecase.execute(filter, page).await?;
    let items = items.into_iter().map(MemberOverviewDto::new).collect();
    Ok(Envelope::data(Paginated::new(items, page, total)))
}

// ── POST /api/members ────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    pub full_name: String,
    pub email: Option<String>,
    pub mobile: String,
    pub password: Option<String>,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub fitness_goal: Option<String>,
    pub medical_notes: Option<String>,
    pub emergency_contact: Option<String>,
    pub join_date: Option<NaiveDate>,
}

pub async fn create_member(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(body): Json<CreateMemberRequest>,
) -> Result<(StatusCode, Json<Envelope<MemberDto>>), ApiError> {
    let usecase = CreateMemberUseCase {
        users: state.user_repo(),
        members: state.member_repo(),
    };
    let mw = usecase
        .execute(CreateMemberInput {
            full_name: body.full_name,
            email: body.email,
            mobile: body.mobile,
            password: body.password,
            gender: body.gender,
            date_of_birth: body.date_of_birth,
            height_cm: body.height_cm,
            weight_kg: body.weight_kg,
            fitness_goal: body.fitness_goal,
            medical_notes: body.medical_notes,
            emergency_contact: body.emergency_contact,
            join_date: body.join_date,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Envelope::with_message(
            "Member created successfully",
            MemberDto::new(mw.member, &mw.user),
        ),
    ))
}

// ── GET /api/members/{id} ────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfileResponse {
    #[serde(flatten)]
    pub member: MemberOverviewDto,
    pub visits_this_month: u64,
}

pub async fn get_member(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<MemberProfileResponse>>, ApiError> {
    let usecase = GetMemberUseCase {
        members: state.member_repo(),
        memberships: state.membership_repo(),
        attendance: state.attendance_repo(),
    };
    let profile = usecase.execute(id).await?;
    Ok(Envelope::data(MemberProfileResponse {
        member: MemberOverviewDto::new(profile.overview),
        visits_this_month: profile.visits_this_month,
    }))
}

// ── PUT /api/members/{id} ────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub status: Option<UserStatus>,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub fitness_goal: Option<String>,
    pub medical_notes: Option<String>,
    pub emergency_contact: Option<String>,
}

pub async fn update_member(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateMemberRequest>,
) -> Result<Json<Envelope<MemberDto>>, ApiError> {
    let usecase = UpdateMemberUseCase {
        users: state.user_repo(),
        members: state.member_repo(),
    };
    let mw = usecase
        .execute(
            id,
            UpdateMemberInput {
                full_name: body.full_name,
                email: body.email,
                mobile: body.mobile,
                status: body.status,
                gender: body.gender,
                date_of_birth: body.date_of_birth,
                height_cm: body.height_cm,
                weight_kg: body.weight_kg,
                fitness_goal: body.fitness_goal,
                medical_notes: body.medical_notes,
                emergency_contact: body.emergency_contact,
            },
        )
        .await?;
    Ok(Envelope::with_message(
        "Member updated successfully",
        MemberDto::new(mw.member, &mw.user),
    ))
}

// ── DELETE /api/members/{id} ─────────────────────────────────────────────────

pub async fn delete_member(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let usecase = DeleteMemberUseCase {
        members: state.member_repo(),
    };
    usecase.execute(id).await?;
    Ok(Envelope::message("Member deleted successfully"))
}

// ── GET /api/members/{id}/qr ─────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrResponse {
    /// JSON payload to render as a QR image on the client.
    pub qr_data: String,
    pub member_code: String,
}

pub async fn member_qr(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<QrResponse>>, ApiError> {
    let usecase = MemberQrUseCase {
        members: state.member_repo(),
    };
    let output = usecase.execute(id).await?;
    Ok(Envelope::data(QrResponse {
        qr_data: output.payload,
        member_code: output.member_code,
    }))
}

// ── GET /api/members/me ──────────────────────────────────────────────────────

pub async fn own_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Envelope<MemberOverviewDto>>, ApiError> {
    let usecase = GetOwnProfileUseCase {
        members: state.member_repo(),
        memberships: state.membership_repo(),
    };
    let overview = usecase.execute(auth.user_id).await?;
    Ok(Envelope::data(MemberOverviewDto::new(overview)))
}

// ── GET /api/members/me/qr ───────────────────────────────────────────────────

pub async fn own_qr(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Envelope<QrResponse>>, ApiError> {
    let usecase = OwnQrUseCase {
        members: state.member_repo(),
    };
    let output = usecase.execute(auth.user_id).await?;
    Ok(Envelope::data(QrResponse {
        qr_data: output.payload,
        member_code: output.member_code,
    }))
}

// ── GET /api/members/me/memberships ──────────────────────────────────────────

pub async fn own_memberships(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<MembershipDto>>>, ApiError> {
    let usecase = OwnMembershipsUseCase {
        members: state.member_repo(),
        memberships: state.membership_repo(),
    };
    let history = usecase.execute(auth.user_id).await?;
    Ok(Envelope::data(
        history.into_iter().map(MembershipDto::with_plan).collect(),
    ))
}
