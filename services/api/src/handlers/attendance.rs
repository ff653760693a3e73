use axum::{
    Json,
    extract::{Query, State},
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use liftdesk_auth::{AdminUser, AuthUser};

use crate::domain::repository::AttendanceListFilter;
use crate::domain::types::AttendanceWithMember;
use crate::error::ApiError;
use crate::handlers::common::{
    AttendanceDto, AttendanceWithMemberDto, PageQuery, page_request,
};
use crate::response::{Envelope, Paginated};
use crate::state::AppState;
use crate::usecase::attendance::{
    CheckInInput, CheckInUseCase, CheckOutUseCase, ListAttendanceUseCase, OwnAttendanceUseCase,
};

/// Front-desk identification body. A scanned `qrData` payload wins over the
/// manual fields.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyMemberRequest {
    pub qr_data: Option<String>,
    pub member_id: Option<Uuid>,
    pub member_code: Option<String>,
}

impl IdentifyMemberRequest {
    fn into_input(self) -> CheckInInput {
        CheckInInput {
            payload: self.qr_data,
            member_id: self.member_id,
            member_code: self.member_code,
        }
    }
}

// ── POST /api/attendance/check-in ────────────────────────────────────────────

pub async fn check_in(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<IdentifyMemberRequest>,
) -> Result<Json<Envelope<AttendanceWithMemberDto>>, ApiError> {
    let usecase = CheckInUseCase {
        members: state.member_repo(),
        memberships: state.membership_repo(),
        attendance: state.attendance_repo(),
    };
    let output = usecase.execute(body.into_input()).await?;
    Ok(Envelope::with_message(
        "Checked in successfully",
        AttendanceWithMemberDto::new(AttendanceWithMember {
            attendance: output.attendance,
            member: output.member,
            user: output.user,
        }),
    ))
}

// ── POST /api/attendance/check-out ───────────────────────────────────────────

pub async fn check_out(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<IdentifyMemberRequest>,
) -> Result<Json<Envelope<AttendanceWithMemberDto>>, ApiError> {
    let usecase = CheckOutUseCase {
        members: state.member_repo(),
        attendance: state.attendance_repo(),
    };
    let output = usecase.execute(body.into_input()).await?;
    Ok(Envelope::with_message(
        "Checked out successfully",
        AttendanceWithMemberDto::new(AttendanceWithMember {
            attendance: output.attendance,
            member: output.member,
            user: output.user,
        }),
    ))
}

// ── GET /api/attendance ──────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceListQuery {
    pub date: Option<NaiveDate>,
    pub member_id: Option<Uuid>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

pub async fn list_attendance(
    _admin: AdminUser,
    State(state): State<AppState>,
    Query(query): Query<AttendanceListQuery>,
) -> Result<Json<Envelope<Paginated<AttendanceWithMemberDto>>>, ApiError> {
    let page = page_request(query.page, query.limit);
    let filter = AttendanceListFilter {
        date: query.date,
        member_id: query.member_id,
    };
    let usecase = ListAttendanceUseCase {
        attendance: state.attendance_repo(),
    };
    let (items, total) = usecase.execute(filter, page).await?;
    let items = items
        .into_iter()
        .map(AttendanceWithMemberDto::new)
        .collect();
    Ok(Envelope::data(Paginated::new(items, page, total)))
}

// ── GET /api/attendance/me ───────────────────────────────────────────────────

pub async fn own_attendance(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Envelope<Paginated<AttendanceDto>>>, ApiError> {
    let page = query.request();
    let usecase = OwnAttendanceUseCase {
        attendance: state.attendance_repo(),
        members: state.member_repo(),
    };
    let (items, total) = usecase.execute(auth.user_id, page).await?;
    let items = items.into_iter().map(AttendanceDto::new).collect();
    Ok(Envelope::data(Paginated::new(items, page, total)))
}
