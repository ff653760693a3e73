use std::sync::{Arc, Mutex};

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use uuid::Uuid;

use liftdesk_domain::member::Gender;
use liftdesk_domain::membership::{MembershipStatus, end_date as membership_end_date};
use liftdesk_domain::pagination::PageRequest;
use liftdesk_domain::payment::{PaymentStatus, format_invoice_number};
use liftdesk_domain::user::{UserRole, UserStatus};
use liftdesk_domain::workout::{Exercise, WorkoutDay, WorkoutPlanType};

use liftdesk_api::domain::repository::{
    AttendanceListFilter, AttendanceRepository, MemberChanges, MemberListFilter, MemberRepository,
    MembershipRepository, NewMember, NewMembershipPayment, PaymentListFilter, PaymentRepository,
    PlanChanges, PlanDeleteOutcome, PlanRepository, ProgressRepository, SettingsRepository,
    UserRepository, WorkoutChanges, WorkoutRepository,
};
use liftdesk_api::domain::types::{
    Attendance, AttendanceWithMember, GymSettings, Member, MemberOverview, MemberWithUser,
    MemberWorkout, MemberWorkoutWithPlan, Membership, MembershipDetail, MembershipPlan,
    MembershipWithPlan, Payment, PaymentDetail, ProgressRecord, User, WorkoutPlan,
};
use liftdesk_api::error::ApiError;

/// Cheap bcrypt cost so fixtures hash in microseconds.
pub const TEST_BCRYPT_COST: u32 = 4;

// ── InMemoryUsers ────────────────────────────────────────────────────────────

pub struct InMemoryUsers {
    pub users: Vec<User>,
}

impl InMemoryUsers {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn empty() -> Self {
        Self { users: vec![] }
    }
}

impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        Ok(self.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>, ApiError> {
        Ok(self.users.iter().find(|u| u.mobile == mobile).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .iter()
            .find(|u| u.email.as_deref() == Some(email))
            .cloned())
    }

    async fn update_password(&self, _id: Uuid, _password_hash: &str) -> Result<(), ApiError> {
        unreachable!("not used here")
    }
}

// ── InMemoryMembers ──────────────────────────────────────────────────────────

pub struct InMemoryMembers {
    pub members: Vec<MemberWithUser>,
}

impl InMemoryMembers {
    pub fn new(members: Vec<MemberWithUser>) -> Self {
        Self { members }
    }

    pub fn empty() -> Self {
        Self { members: vec![] }
    }
}

impl MemberRepository for InMemoryMembers {
    async fn list(
        &self,
        _filter: MemberListFilter,
        _page: PageRequest,
    ) -> Result<(Vec<MemberOverview>, u64), ApiError> {
        unreachable!("not used here")
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MemberWithUser>, ApiError> {
        Ok(self.members.iter().find(|m| m.member.id == id).cloned())
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<MemberWithUser>, ApiError> {
        Ok(self
            .members
            .iter()
            .find(|m| m.member.user_id == user_id)
            .cloned())
    }

    async fn find_by_code(&self, member_code: &str) -> Result<Option<MemberWithUser>, ApiError> {
        Ok(self
            .members
            .iter()
            .find(|m| m.member.member_code == member_code)
            .cloned())
    }

    async fn create(&self, _input: NewMember) -> Result<MemberWithUser, ApiError> {
        unreachable!("not used here")
    }

    async fn update(&self, _id: Uuid, _changes: MemberChanges) -> Result<MemberWithUser, ApiError> {
        unreachable!("not used here")
    }

    async fn delete(&self, _id: Uuid) -> Result<bool, ApiError> {
        unreachable!("not used here")
    }

    async fn count_total(&self) -> Result<u64, ApiError> {
        Ok(self.members.len() as u64)
    }

    async fn count_active(&self, _now: DateTime<Utc>) -> Result<u64, ApiError> {
        Ok(0)
    }

    async fn count_joined_since(&self, since: NaiveDate) -> Result<u64, ApiError> {
        Ok(self
            .members
            .iter()
            .filter(|m| m.member.join_date >= since)
            .count() as u64)
    }
}

// ── SharedMemberships ────────────────────────────────────────────────────────

/// Membership store shared with [`LedgerPayments`] so a recorded payment is
/// immediately visible to check-in and profile lookups, the way the real
/// repositories share one database.
pub struct SharedMemberships {
    pub rows: Arc<Mutex<Vec<MembershipWithPlan>>>,
}

impl SharedMemberships {
    pub fn empty() -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle for wiring [`LedgerPayments`] to the same store.
    pub fn rows_handle(&self) -> Arc<Mutex<Vec<MembershipWithPlan>>> {
        Arc::clone(&self.rows)
    }
}

impl MembershipRepository for SharedMemberships {
    async fn current_for_member(
        &self,
        member_id: Uuid,
    ) -> Result<Option<MembershipWithPlan>, ApiError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|mp| {
                mp.membership.member_id == member_id
                    && mp.membership.status == MembershipStatus::Active
            })
            .max_by_key(|mp| mp.membership.end_date)
            .cloned())
    }

    async fn list_for_member(
        &self,
        member_id: Uuid,
    ) -> Result<Vec<MembershipWithPlan>, ApiError> {
        let mut rows: Vec<MembershipWithPlan> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|mp| mp.membership.member_id == member_id)
            .cloned()
            .collect();
        rows.sort_by_key(|mp| std::cmp::Reverse(mp.membership.start_date));
        Ok(rows)
    }

    async fn expiring_between(
        &self,
        _from: DateTime<Utc>,
        _to: DateTime<Utc>,
    ) -> Result<Vec<MembershipDetail>, ApiError> {
        Ok(Vec::new())
    }

    async fn stamp_notification(&self, _id: Uuid, _at: DateTime<Utc>) -> Result<(), ApiError> {
        Ok(())
    }
}

// ── ActivePlans ──────────────────────────────────────────────────────────────

pub struct ActivePlans {
    pub plans: Vec<MembershipPlan>,
}

impl ActivePlans {
    pub fn new(plans: Vec<MembershipPlan>) -> Self {
        Self { plans }
    }
}

impl PlanRepository for ActivePlans {
    async fn list(&self, include_inactive: bool) -> Result<Vec<MembershipPlan>, ApiError> {
        Ok(self
            .plans
            .iter()
            .filter(|p| include_inactive || p.is_active)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MembershipPlan>, ApiError> {
        Ok(self.plans.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, _plan: &MembershipPlan) -> Result<(), ApiError> {
        unreachable!("not used here")
    }

    async fn update(&self, _id: Uuid, _changes: PlanChanges) -> Result<MembershipPlan, ApiError> {
        unreachable!("not used here")
    }

    async fn delete_if_unused(&self, _id: Uuid) -> Result<PlanDeleteOutcome, ApiError> {
        unreachable!("not used here")
    }
}

// ── LedgerPayments ───────────────────────────────────────────────────────────

/// Payment store that replays the production transaction in memory: recording
/// a payment allocates the next invoice sequence, inserts an ACTIVE membership
/// into the shared store and books a COMPLETED payment against it.
pub struct LedgerPayments {
    pub directory: Vec<MemberWithUser>,
    pub memberships: Arc<Mutex<Vec<MembershipWithPlan>>>,
    pub payments: Arc<Mutex<Vec<Payment>>>,
}

impl LedgerPayments {
    pub fn new(
        directory: Vec<MemberWithUser>,
        memberships: Arc<Mutex<Vec<MembershipWithPlan>>>,
    ) -> Self {
        Self {
            directory,
            memberships,
            payments: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the booked payments for post-execution inspection.
    pub fn payments_handle(&self) -> Arc<Mutex<Vec<Payment>>> {
        Arc::clone(&self.payments)
    }

    fn detail_for(&self, payment: &Payment) -> Option<PaymentDetail> {
        let mw = self
            .directory
            .iter()
            .find(|m| m.member.id == payment.member_id)?;
        let mp = self
            .memberships
            .lock()
            .unwrap()
            .iter()
            .find(|mp| mp.membership.id == payment.membership_id)
            .cloned()?;
        Some(PaymentDetail {
            payment: payment.clone(),
            member: mw.member.clone(),
            user: mw.user.clone(),
            membership: mp.membership,
            plan: mp.plan,
        })
    }
}

impl PaymentRepository for LedgerPayments {
    async fn list(
        &self,
        filter: PaymentListFilter,
        page: PageRequest,
    ) -> Result<(Vec<PaymentDetail>, u64), ApiError> {
        let booked: Vec<Payment> = self.payments.lock().unwrap().clone();
        let mut details: Vec<PaymentDetail> = booked
            .iter()
            .filter(|p| filter.member_id.is_none() || filter.member_id == Some(p.member_id))
            .filter_map(|p| self.detail_for(p))
            .collect();
        details.sort_by_key(|d| std::cmp::Reverse(d.payment.created_at));
        let total = details.len() as u64;
        let page = page.clamped();
        let start = (page.offset() as usize).min(details.len());
        let end = (start + page.limit as usize).min(details.len());
        Ok((details[start..end].to_vec(), total))
    }

    async fn find_detail(&self, id: Uuid) -> Result<Option<PaymentDetail>, ApiError> {
        let payment = self.payments.lock().unwrap().iter().find(|p| p.id == id).cloned();
        Ok(payment.as_ref().and_then(|p| self.detail_for(p)))
    }

    async fn record_membership_payment(
        &self,
        input: NewMembershipPayment,
    ) -> Result<(Payment, Membership), ApiError> {
        let seq = self.payments.lock().unwrap().len() as i64 + 1;
        let membership = Membership {
            id: Uuid::now_v7(),
            member_id: input.member_id,
            plan_id: input.plan.id,
            start_date: input.now,
            end_date: membership_end_date(input.now, input.plan.duration_days),
            status: MembershipStatus::Active,
            frozen_days: 0,
            last_notification_date: None,
            created_at: input.now,
        };
        let payment = Payment {
            id: Uuid::now_v7(),
            invoice_number: format_invoice_number(input.now.year(), seq),
            member_id: input.member_id,
            membership_id: membership.id,
            amount_paise: input.plan.final_price_paise,
            gst_amount_paise: 0,
            method: input.method,
            gateway_order_id: input.gateway_order_id,
            gateway_payment_id: input.gateway_payment_id,
            status: PaymentStatus::Completed,
            paid_at: Some(input.now),
            created_at: input.now,
        };
        self.memberships.lock().unwrap().push(MembershipWithPlan {
            membership: membership.clone(),
            plan: input.plan,
        });
        self.payments.lock().unwrap().push(payment.clone());
        Ok((payment, membership))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let mut payments = self.payments.lock().unwrap();
        let before = payments.len();
        payments.retain(|p| p.id != id);
        Ok(payments.len() < before)
    }

    async fn recent(&self, limit: u64) -> Result<Vec<PaymentDetail>, ApiError> {
        let (details, _) = self
            .list(PaymentListFilter::default(), PageRequest { page: 1, limit })
            .await?;
        Ok(details)
    }

    async fn revenue_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<i64, ApiError> {
        Ok(self
            .payments
            .lock()
            .unwrap()
            .iter()
            .filter(|p| {
                p.status == PaymentStatus::Completed && p.created_at >= from && p.created_at < to
            })
            .map(|p| p.amount_paise)
            .sum())
    }
}

// ── InMemoryAttendance ───────────────────────────────────────────────────────

pub struct InMemoryAttendance {
    pub records: Arc<Mutex<Vec<Attendance>>>,
}

impl InMemoryAttendance {
    pub fn empty() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl AttendanceRepository for InMemoryAttendance {
    async fn open_session(&self, member_id: Uuid) -> Result<Option<Attendance>, ApiError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.member_id == member_id && a.check_out_time.is_none())
            .cloned())
    }

    async fn create(&self, record: &Attendance) -> Result<(), ApiError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn close_session(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), ApiError> {
        let mut records = self.records.lock().unwrap();
        if let Some(a) = records.iter_mut().find(|a| a.id == id) {
            a.check_out_time = Some(at);
        }
        Ok(())
    }

    async fn list(
        &self,
        _filter: AttendanceListFilter,
        _page: PageRequest,
    ) -> Result<(Vec<AttendanceWithMember>, u64), ApiError> {
        unreachable!("not used here")
    }

    async fn list_for_member(
        &self,
        member_id: Uuid,
        page: PageRequest,
    ) -> Result<(Vec<Attendance>, u64), ApiError> {
        let mut rows: Vec<Attendance> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.member_id == member_id)
            .cloned()
            .collect();
        rows.sort_by_key(|a| std::cmp::Reverse(a.check_in_time));
        let total = rows.len() as u64;
        let page = page.clamped();
        let start = (page.offset() as usize).min(rows.len());
        let end = (start + page.limit as usize).min(rows.len());
        Ok((rows[start..end].to_vec(), total))
    }

    async fn recent_for_member(
        &self,
        member_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Attendance>, ApiError> {
        let (rows, _) = self
            .list_for_member(member_id, PageRequest { page: 1, limit })
            .await?;
        Ok(rows)
    }

    async fn count_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<u64, ApiError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.check_in_time >= from && a.check_in_time < to)
            .count() as u64)
    }

    async fn count_for_member_between(
        &self,
        member_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<u64, ApiError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|a| {
                a.member_id == member_id && a.check_in_time >= from && a.check_in_time < to
            })
            .count() as u64)
    }

    async fn count_open(&self) -> Result<u64, ApiError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.check_out_time.is_none())
            .count() as u64)
    }
}

// ── EmptyProgress / EmptyWorkouts ────────────────────────────────────────────

pub struct EmptyProgress;

impl ProgressRepository for EmptyProgress {
    async fn create(&self, _record: &ProgressRecord) -> Result<(), ApiError> {
        unreachable!("not used here")
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<ProgressRecord>, ApiError> {
        Ok(None)
    }

    async fn list_for_member(
        &self,
        _member_id: Uuid,
        _page: PageRequest,
    ) -> Result<(Vec<ProgressRecord>, u64), ApiError> {
        Ok((Vec::new(), 0))
    }

    async fn recent_for_member(
        &self,
        _member_id: Uuid,
        _limit: u64,
    ) -> Result<Vec<ProgressRecord>, ApiError> {
        Ok(Vec::new())
    }

    async fn delete(&self, _id: Uuid) -> Result<bool, ApiError> {
        Ok(false)
    }
}

pub struct EmptyWorkouts;

impl WorkoutRepository for EmptyWorkouts {
    async fn list(&self, _only_active: bool) -> Result<Vec<WorkoutPlan>, ApiError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<WorkoutPlan>, ApiError> {
        Ok(None)
    }

    async fn create(&self, _plan: &WorkoutPlan) -> Result<(), ApiError> {
        unreachable!("not used here")
    }

    async fn update(&self, _id: Uuid, _changes: WorkoutChanges) -> Result<WorkoutPlan, ApiError> {
        unreachable!("not used here")
    }

    async fn delete(&self, _id: Uuid) -> Result<bool, ApiError> {
        Ok(false)
    }

    async fn assign(
        &self,
        _member_id: Uuid,
        _workout_plan_id: Uuid,
        _at: DateTime<Utc>,
    ) -> Result<MemberWorkout, ApiError> {
        unreachable!("not used here")
    }

    async fn active_assignment(
        &self,
        _member_id: Uuid,
    ) -> Result<Option<MemberWorkoutWithPlan>, ApiError> {
        Ok(None)
    }
}

// ── TrackedWorkouts ──────────────────────────────────────────────────────────

/// Workout store that keeps assignment rows across plan deletion, the way the
/// real repository deactivates them and nulls the plan reference.
pub struct TrackedWorkouts {
    pub plans: Arc<Mutex<Vec<WorkoutPlan>>>,
    pub assignments: Arc<Mutex<Vec<MemberWorkout>>>,
}

impl TrackedWorkouts {
    pub fn new(plans: Vec<WorkoutPlan>) -> Self {
        Self {
            plans: Arc::new(Mutex::new(plans)),
            assignments: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Second handle over the same plan and assignment stores.
    pub fn share(&self) -> Self {
        Self {
            plans: Arc::clone(&self.plans),
            assignments: Arc::clone(&self.assignments),
        }
    }

    pub fn assignments_handle(&self) -> Arc<Mutex<Vec<MemberWorkout>>> {
        Arc::clone(&self.assignments)
    }
}

impl WorkoutRepository for TrackedWorkouts {
    async fn list(&self, only_active: bool) -> Result<Vec<WorkoutPlan>, ApiError> {
        Ok(self
            .plans
            .lock()
            .unwrap()
            .iter()
            .filter(|p| !only_active || p.is_active)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<WorkoutPlan>, ApiError> {
        Ok(self
            .plans
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn create(&self, plan: &WorkoutPlan) -> Result<(), ApiError> {
        self.plans.lock().unwrap().push(plan.clone());
        Ok(())
    }

    async fn update(&self, _id: Uuid, _changes: WorkoutChanges) -> Result<WorkoutPlan, ApiError> {
        unreachable!("not used here")
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        {
            let mut assignments = self.assignments.lock().unwrap();
            for row in assignments
                .iter_mut()
                .filter(|a| a.workout_plan_id == Some(id))
            {
                row.is_active = false;
                row.workout_plan_id = None;
            }
        }
        let mut plans = self.plans.lock().unwrap();
        let before = plans.len();
        plans.retain(|p| p.id != id);
        Ok(plans.len() < before)
    }

    async fn assign(
        &self,
        member_id: Uuid,
        workout_plan_id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<MemberWorkout, ApiError> {
        let mut assignments = self.assignments.lock().unwrap();
        for row in assignments.iter_mut().filter(|a| a.member_id == member_id) {
            row.is_active = false;
        }
        let row = MemberWorkout {
            id: Uuid::now_v7(),
            member_id,
            workout_plan_id: Some(workout_plan_id),
            assigned_at: at,
            is_active: true,
        };
        assignments.push(row.clone());
        Ok(row)
    }

    async fn active_assignment(
        &self,
        member_id: Uuid,
    ) -> Result<Option<MemberWorkoutWithPlan>, ApiError> {
        let assignments = self.assignments.lock().unwrap();
        let plans = self.plans.lock().unwrap();
        Ok(assignments
            .iter()
            .filter(|a| a.member_id == member_id && a.is_active)
            .find_map(|a| {
                let plan = plans.iter().find(|p| Some(p.id) == a.workout_plan_id)?;
                Some(MemberWorkoutWithPlan {
                    assignment: a.clone(),
                    plan: plan.clone(),
                })
            }))
    }
}

// ── DefaultSettings ──────────────────────────────────────────────────────────

pub struct DefaultSettings;

impl SettingsRepository for DefaultSettings {
    async fn get(&self) -> Result<Option<GymSettings>, ApiError> {
        Ok(Some(GymSettings::defaults(Utc::now())))
    }

    async fn upsert(&self, _settings: &GymSettings) -> Result<GymSettings, ApiError> {
        unreachable!("not used here")
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_admin(password: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::now_v7(),
        full_name: "Liftdesk Admin".to_owned(),
        email: Some("admin@liftdesk.example".to_owned()),
        mobile: "+919800000001".to_owned(),
        password_hash: bcrypt::hash(password, TEST_BCRYPT_COST).unwrap(),
        role: UserRole::Admin,
        status: UserStatus::Active,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_member(password: &str) -> MemberWithUser {
    let now = Utc::now();
    let user_id = Uuid::now_v7();
    MemberWithUser {
        member: Member {
            id: Uuid::now_v7(),
            member_code: "LD-001".to_owned(),
            user_id,
            gender: Gender::Female,
            date_of_birth: NaiveDate::from_ymd_opt(1994, 6, 21).unwrap(),
            height_cm: Some(164.0),
            weight_kg: Some(58.5),
            fitness_goal: Some("General fitness".to_owned()),
            medical_notes: None,
            emergency_contact: Some("+919812345000".to_owned()),
            join_date: now.date_naive(),
            created_at: now,
            updated_at: now,
        },
        user: User {
            id: user_id,
            full_name: "Asha Rao".to_owned(),
            email: Some("asha@example.com".to_owned()),
            mobile: "+919812345678".to_owned(),
            password_hash: bcrypt::hash(password, TEST_BCRYPT_COST).unwrap(),
            role: UserRole::Member,
            status: UserStatus::Active,
            created_at: now,
            updated_at: now,
        },
    }
}

pub fn quarterly_plan() -> MembershipPlan {
    let now = Utc::now();
    MembershipPlan {
        id: Uuid::now_v7(),
        name: "Gold Quarterly".to_owned(),
        duration_days: 90,
        base_price_paise: 350_000,
        gst_percent: 0,
        final_price_paise: 350_000,
        description: Some("Full gym access for three months".to_owned()),
        features: vec!["All equipment".to_owned(), "Locker".to_owned()],
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn ppl_template() -> WorkoutPlan {
    let now = Utc::now();
    WorkoutPlan {
        id: Uuid::now_v7(),
        name: "PPL Intermediate".to_owned(),
        plan_type: WorkoutPlanType::PushPullLegs,
        description: None,
        days: vec![WorkoutDay {
            day: "Push".to_owned(),
            exercises: vec![Exercise {
                name: "Bench Press".to_owned(),
                sets: 4,
                reps: "8-10".to_owned(),
                muscle: "Chest".to_owned(),
            }],
        }],
        days_per_week: 6,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn monthly_plan() -> MembershipPlan {
    let now = Utc::now();
    MembershipPlan {
        id: Uuid::now_v7(),
        name: "Monthly".to_owned(),
        duration_days: 30,
        base_price_paise: 150_000,
        gst_percent: 0,
        final_price_paise: 150_000,
        description: None,
        features: Vec::new(),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}
