use axum::{Json, extract::State};
use serde::Serialize;

use liftdesk_auth::{AdminUser, AuthUser};
use liftdesk_domain::money::paise_to_rupees;

use crate::error::ApiError;
use crate::handlers::common::{
    AssignmentDto, AttendanceDto, ExpiringMembershipDto, MembershipDto, PaymentDetailDto,
    ProgressDto,
};
use crate::response::Envelope;
use crate::state::AppState;
use crate::usecase::dashboard::{AdminDashboardUseCase, MemberDashboardUseCase};

// ── GET /api/dashboard/admin ─────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboardResponse {
    pub members: MemberStats,
    pub attendance: AttendanceStats,
    pub revenue: RevenueStats,
    pub recent_payments: Vec<PaymentDetailDto>,
    pub expiring_memberships: Vec<ExpiringMembershipDto>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats {
    pub total: u64,
    pub active: u64,
    pub expired: u64,
    pub new_this_month: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStats {
    pub today: u64,
    pub currently_in: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueStats {
    pub this_month: f64,
    pub last_month: f64,
    /// Month-over-month change in percent.
    pub growth: f64,
}

pub async fn admin_dashboard(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Envelope<AdminDashboardResponse>>, ApiError> {
    let usecase = AdminDashboardUseCase {
        members: state.member_repo(),
        payments: state.payment_repo(),
        attendance: state.attendance_repo(),
        memberships: state.membership_repo(),
    };
    let dashboard = usecase.execute().await?;

    Ok(Envelope::data(AdminDashboardResponse {
        members: MemberStats {
            total: dashboard.total_members,
            active: dashboard.active_members,
            expired: dashboard.expired_members,
            new_this_month: dashboard.new_members_this_month,
        },
        attendance: AttendanceStats {
            today: dashboard.checkins_today,
            currently_in: dashboard.currently_in,
        },
        revenue: RevenueStats {
            this_month: paise_to_rupees(dashboard.revenue_this_month_paise),
            last_month: paise_to_rupees(dashboard.revenue_last_month_paise),
            growth: dashboard.revenue_growth_pct,
        },
        recent_payments: dashboard
            .recent_payments
            .into_iter()
            .map(PaymentDetailDto::new)
            .collect(),
        expiring_memberships: dashboard
            .expiring_soon
            .into_iter()
            .map(ExpiringMembershipDto::new)
            .collect(),
    }))
}

// ── GET /api/dashboard/member ────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDashboardResponse {
    pub membership: Option<MembershipDto>,
    pub attendance: MemberAttendanceCard,
    pub progress: Vec<ProgressDto>,
    pub workout: Option<AssignmentDto>,
    pub payments: Vec<PaymentDetailDto>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberAttendanceCard {
    pub this_month: u64,
    pub recent: Vec<AttendanceDto>,
}

pub async fn member_dashboard(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Envelope<MemberDashboardResponse>>, ApiError> {
    let usecase = MemberDashboardUseCase {
        members: state.member_repo(),
        memberships: state.membership_repo(),
        attendance: state.attendance_repo(),
        progress: state.progress_repo(),
        payments: state.payment_repo(),
        workouts: state.workout_repo(),
    };
    let dashboard = usecase.execute(auth.user_id).await?;

    Ok(Envelope::data(MemberDashboardResponse {
        membership: dashboard.current_membership.map(MembershipDto::with_plan),
        attendance: MemberAttendanceCard {
            this_month: dashboard.visits_this_month,
            recent: dashboard
                .recent_attendance
                .into_iter()
                .map(AttendanceDto::new)
                .collect(),
        },
        progress: dashboard
            .recent_progress
            .into_iter()
            .map(ProgressDto::new)
            .collect(),
        workout: dashboard.workout.map(AssignmentDto::new),
        payments: dashboard
            .recent_payments
            .into_iter()
            .map(PaymentDetailDto::new)
            .collect(),
    }))
}
