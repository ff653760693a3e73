use chrono::Utc;
use uuid::Uuid;

use liftdesk_domain::checkin::{AttendanceMethod, CheckinPayload};
use liftdesk_domain::membership::is_expired;
use liftdesk_domain::pagination::PageRequest;
use liftdesk_domain::user::UserStatus;

use crate::domain::repository::{
    AttendanceListFilter, AttendanceRepository, MemberRepository, MembershipRepository,
};
use crate::domain::types::{Attendance, AttendanceWithMember, Member, MemberWithUser, User};
use crate::error::ApiError;

/// How the front desk identified the member. A scanned QR payload takes
/// precedence over the manual fields.
pub struct CheckInInput {
    pub payload: Option<String>,
    pub member_id: Option<Uuid>,
    pub member_code: Option<String>,
}

pub struct CheckInOutput {
    pub attendance: Attendance,
    pub member: Member,
    pub user: User,
}

async fn resolve_member<M: MemberRepository>(
    members: &M,
    input: &CheckInInput,
) -> Result<MemberWithUser, ApiError> {
    let found = if let Some(raw) = input.payload.as_deref() {
        let payload =
            CheckinPayload::parse(raw).map_err(|e| ApiError::Validation(e.to_string()))?;
        members.find_by_code(&payload.member_code).await?
    } else if let Some(member_id) = input.member_id {
        members.find_by_id(member_id).await?
    } else if let Some(code) = input.member_code.as_deref() {
        members.find_by_code(code).await?
    } else {
        return Err(ApiError::Validation(
            "A QR payload, member id or member code is required".to_owned(),
        ));
    };
    found.ok_or(ApiError::NotFound("Member"))
}

// ── CheckIn ──────────────────────────────────────────────────────────────────

pub struct CheckInUseCase<M: MemberRepository, S: MembershipRepository, A: AttendanceRepository> {
    pub members: M,
    pub memberships: S,
    pub attendance: A,
}

impl<M: MemberRepository, S: MembershipRepository, A: AttendanceRepository>
    CheckInUseCase<M, S, A>
{
    pub async fn execute(&self, input: CheckInInput) -> Result<CheckInOutput, ApiError> {
        let mw = resolve_member(&self.members, &input).await?;
        if mw.user.status != UserStatus::Active {
            return Err(ApiError::AccountDisabled);
        }

        let now = Utc::now();
        let current = self.memberships.current_for_member(mw.member.id).await?;
        match current {
            Some(ref mp) if !is_expired(mp.membership.end_date, now) => {}
            _ => return Err(ApiError::MembershipLapsed),
        }

        if self.attendance.open_session(mw.member.id).await?.is_some() {
            return Err(ApiError::AlreadyCheckedIn);
        }

        let method = if input.payload.is_some() {
            AttendanceMethod::Qr
        } else {
            AttendanceMethod::Manual
        };
        let record = Attendance {
            id: Uuid::now_v7(),
            member_id: mw.member.id,
            check_in_time: now,
            check_out_time: None,
            method,
        };
        self.attendance.create(&record).await?;
        Ok(CheckInOutput {
            attendance: record,
            member: mw.member,
            user: mw.user,
        })
    }
}

// ── CheckOut ─────────────────────────────────────────────────────────────────

pub struct CheckOutUseCase<M: MemberRepository, A: AttendanceRepository> {
    pub members: M,
    pub attendance: A,
}

impl<M: MemberRepository, A: AttendanceRepository> CheckOutUseCase<M, A> {
    pub async fn execute(&self, input: CheckInInput) -> Result<CheckInOutput, ApiError> {
        let mw = resolve_member(&self.members, &input).await?;
        let open = self
            .attendance
            .open_session(mw.member.id)
            .await?
            .ok_or(ApiError::NoOpenSession)?;

        let now = Utc::now();
        self.attendance.close_session(open.id, now).await?;
        Ok(CheckInOutput {
            attendance: Attendance {
                check_out_time: Some(now),
                ..open
            },
            member: mw.member,
            user: mw.user,
        })
    }
}

// ── ListAttendance ───────────────────────────────────────────────────────────

pub struct ListAttendanceUseCase<A: AttendanceRepository> {
    pub attendance: A,
}

impl<A: AttendanceRepository> ListAttendanceUseCase<A> {
    pub async fn execute(
        &self,
        filter: AttendanceListFilter,
        page: PageRequest,
    ) -> Result<(Vec<AttendanceWithMember>, u64), ApiError> {
        self.attendance.list(filter, page).await
    }
}

// ── OwnAttendance ────────────────────────────────────────────────────────────

pub struct OwnAttendanceUseCase<A: AttendanceRepository, M: MemberRepository> {
    pub attendance: A,
    pub members: M,
}

impl<A: AttendanceRepository, M: MemberRepository> OwnAttendanceUseCase<A, M> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<(Vec<Attendance>, u64), ApiError> {
        let mw = self
            .members
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiError::NotFound("Member profile"))?;
        self.attendance.list_for_member(mw.member.id, page).await
    }
}
