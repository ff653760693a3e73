use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use liftdesk_domain::pagination::PageRequest;

use crate::domain::repository::{
    AttendanceRepository, MemberRepository, MembershipRepository, PaymentListFilter,
    PaymentRepository, ProgressRepository, WorkoutRepository,
};
use crate::domain::types::{
    Attendance, MemberWorkoutWithPlan, MembershipDetail, MembershipWithPlan, PaymentDetail,
    ProgressRecord,
};
use crate::error::ApiError;

/// How many rows the "recent" dashboard cards show.
const RECENT_ITEMS: u64 = 5;
const EXPIRY_LOOKAHEAD_DAYS: i64 = 7;

fn month_start(year: i32, month: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .expect("first of month is always valid")
        .and_time(NaiveTime::MIN)
        .and_utc()
}

/// `[start of now's month, start of next month)`.
pub(crate) fn month_range(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let (year, month) = (now.year(), now.month());
    let start = month_start(year, month);
    let end = if month == 12 {
        month_start(year + 1, 1)
    } else {
        month_start(year, month + 1)
    };
    (start, end)
}

fn prev_month_range(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let (year, month) = (now.year(), now.month());
    let start = if month == 1 {
        month_start(year - 1, 12)
    } else {
        month_start(year, month - 1)
    };
    (start, month_start(year, month))
}

/// Month-over-month growth in percent. A previous month with no revenue
/// reads as +100% once anything comes in.
fn growth_pct(current: i64, previous: i64) -> f64 {
    if previous == 0 {
        if current == 0 { 0.0 } else { 100.0 }
    } else {
        (current - previous) as f64 / previous as f64 * 100.0
    }
}

// ── AdminDashboard ───────────────────────────────────────────────────────────

pub struct AdminDashboard {
    pub total_members: u64,
    pub active_members: u64,
    pub expired_members: u64,
    pub checkins_today: u64,
    pub currently_in: u64,
    pub revenue_this_month_paise: i64,
    pub revenue_last_month_paise: i64,
    pub revenue_growth_pct: f64,
    pub new_members_this_month: u64,
    pub expiring_soon: Vec<MembershipDetail>,
    pub recent_payments: Vec<PaymentDetail>,
}

pub struct AdminDashboardUseCase<
    M: MemberRepository,
    Y: PaymentRepository,
    A: AttendanceRepository,
    S: MembershipRepository,
> {
    pub members: M,
    pub payments: Y,
    pub attendance: A,
    pub memberships: S,
}

impl<M, Y, A, S> AdminDashboardUseCase<M, Y, A, S>
where
    M: MemberRepository,
    Y: PaymentRepository,
    A: AttendanceRepository,
    S: MembershipRepository,
{
    pub async fn execute(&self) -> Result<AdminDashboard, ApiError> {
        let now = Utc::now();
        let today = now.date_naive().and_time(NaiveTime::MIN).and_utc();
        let (month_from, month_to) = month_range(now);
        let (prev_from, prev_to) = prev_month_range(now);

        let total_members = self.members.count_total().await?;
        let active_members = self.members.count_active(now).await?;
        let checkins_today = self
            .attendance
            .count_between(today, today + Duration::days(1))
            .await?;
        let currently_in = self.attendance.count_open().await?;
        let revenue = self.payments.revenue_between(month_from, month_to).await?;
        let prev_revenue = self.payments.revenue_between(prev_from, prev_to).await?;
        let new_members_this_month = self
            .members
            .count_joined_since(month_from.date_naive())
            .await?;
        let expiring_soon = self
            .memberships
            .expiring_between(now, now + Duration::days(EXPIRY_LOOKAHEAD_DAYS))
            .await?;
        let recent_payments = self.payments.recent(RECENT_ITEMS).await?;

        Ok(AdminDashboard {
            total_members,
            active_members,
            expired_members: total_members.saturating_sub(active_members),
            checkins_today,
            currently_in,
            revenue_this_month_paise: revenue,
            revenue_last_month_paise: prev_revenue,
            revenue_growth_pct: growth_pct(revenue, prev_revenue),
            new_members_this_month,
            expiring_soon,
            recent_payments,
        })
    }
}

// ── MemberDashboard ──────────────────────────────────────────────────────────

pub struct MemberDashboard {
    pub current_membership: Option<MembershipWithPlan>,
    pub visits_this_month: u64,
    pub recent_attendance: Vec<Attendance>,
    pub recent_progress: Vec<ProgressRecord>,
    pub recent_payments: Vec<PaymentDetail>,
    pub workout: Option<MemberWorkoutWithPlan>,
}

pub struct MemberDashboardUseCase<
    M: MemberRepository,
    S: MembershipRepository,
    A: AttendanceRepository,
    P: ProgressRepository,
    Y: PaymentRepository,
    W: WorkoutRepository,
> {
    pub members: M,
    pub memberships: S,
    pub attendance: A,
    pub progress: P,
    pub payments: Y,
    pub workouts: W,
}

impl<M, S, A, P, Y, W> MemberDashboardUseCase<M, S, A, P, Y, W>
where
    M: MemberRepository,
    S: MembershipRepository,
    A: AttendanceRepository,
    P: ProgressRepository,
    Y: PaymentRepository,
    W: WorkoutRepository,
{
    pub async fn execute(&self, user_id: Uuid) -> Result<MemberDashboard, ApiError> {
        let mw = self
            .members
            .find_by_user_id(user_id)
            .await?
            .ok_or(ApiError::NotFound("Member profile"))?;
        let member_id = mw.member.id;

        let now = Utc::now();
        let (month_from, month_to) = month_range(now);
        let current_membership = self.memberships.current_for_member(member_id).await?;
        let visits_this_month = self
            .attendance
            .count_for_member_between(member_id, month_from, month_to)
            .await?;
        let recent_attendance = self
            .attendance
            .recent_for_member(member_id, RECENT_ITEMS)
            .await?;
        let recent_progress = self
            .progress
            .recent_for_member(member_id, RECENT_ITEMS)
            .await?;
        let (recent_payments, _) = self
            .payments
            .list(
                PaymentListFilter {
                    member_id: Some(member_id),
                    ..Default::default()
                },
                PageRequest {
                    page: 1,
                    limit: RECENT_ITEMS,
                },
            )
            .await?;
        let workout = self.workouts.active_assignment(member_id).await?;

        Ok(MemberDashboard {
            current_membership,
            visits_this_month,
            recent_attendance,
            recent_progress,
            recent_payments,
            workout,
        })
    }
}
