#![allow(async_fn_in_trait)]

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use liftdesk_domain::gallery::{ImageCategory, ImageVisibility};
use liftdesk_domain::member::Gender;
use liftdesk_domain::pagination::PageRequest;
use liftdesk_domain::payment::{PaymentMethod, PaymentStatus};
use liftdesk_domain::user::UserStatus;
use liftdesk_domain::workout::{WorkoutDay, WorkoutPlanType};

use crate::domain::types::{
    Attendance, AttendanceWithMember, GymImage, GymSettings, Member, MemberOverview,
    MemberWithUser, MemberWorkout, MemberWorkoutWithPlan, Membership, MembershipDetail,
    MembershipPlan, MembershipWithPlan, Payment, PaymentDetail, ProgressRecord, User, WorkoutPlan,
};
use crate::error::ApiError;

/// Repository for login identities.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError>;
    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>, ApiError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;
    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemberListFilter {
    /// Case-insensitive match against name, mobile, or member code.
    pub search: Option<String>,
    /// Filters the linked user's status.
    pub status: Option<UserStatus>,
}

/// Everything needed to create a user + member pair. The member code is
/// allocated inside the repository transaction.
#[derive(Debug, Clone)]
pub struct NewMember {
    pub full_name: String,
    pub email: Option<String>,
    pub mobile: String,
    pub password_hash: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub fitness_goal: Option<String>,
    pub medical_notes: Option<String>,
    pub emergency_contact: Option<String>,
    pub join_date: NaiveDate,
}

/// Partial update; `Some` fields are written, `None` fields left alone.
#[derive(Debug, Clone, Default)]
pub struct MemberChanges {
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

/// Repository for member profiles (rows span `users` + `members`).
pub trait MemberRepository: Send + Sync {
    async fn list(
        &self,
        filter: MemberListFilter,
        page: PageRequest,
    ) -> Result<(Vec<MemberOverview>, u64), ApiError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<MemberWithUser>, ApiError>;
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<MemberWithUser>, ApiError>;
    async fn find_by_code(&self, member_code: &str) -> Result<Option<MemberWithUser>, ApiError>;
    /// Creates the user and member in one transaction, allocating the member
    /// code from the `member-code` counter.
    async fn create(&self, input: NewMember) -> Result<MemberWithUser, ApiError>;
    async fn update(&self, id: Uuid, changes: MemberChanges) -> Result<MemberWithUser, ApiError>;
    /// Removes the member and its user; dependent rows go with them.
    /// Returns `false` when no such member exists.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
    async fn count_total(&self) -> Result<u64, ApiError>;
    /// Members holding an ACTIVE membership with `end_date > now`.
    async fn count_active(&self, now: DateTime<Utc>) -> Result<u64, ApiError>;
    async fn count_joined_since(&self, since: NaiveDate) -> Result<u64, ApiError>;
}

#[derive(Debug, Clone, Default)]
pub struct PlanChanges {
    pub name: Option<String>,
    pub duration_days: Option<i32>,
    pub base_price_paise: Option<i64>,
    pub final_price_paise: Option<i64>,
    pub gst_percent: Option<i32>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

/// Outcome of the transactional delete-if-unused check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanDeleteOutcome {
    Deleted,
    /// N ACTIVE memberships still reference the plan.
    ActiveMemberships(u64),
    /// Only historical memberships reference it; the FK forbids deletion.
    HasHistory,
}

pub trait PlanRepository: Send + Sync {
    async fn list(&self, include_inactive: bool) -> Result<Vec<MembershipPlan>, ApiError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<MembershipPlan>, ApiError>;
    async fn create(&self, plan: &MembershipPlan) -> Result<(), ApiError>;
    async fn update(&self, id: Uuid, changes: PlanChanges) -> Result<MembershipPlan, ApiError>;
    /// Counts referencing memberships and deletes only when there are none,
    /// all inside one transaction.
    async fn delete_if_unused(&self, id: Uuid) -> Result<PlanDeleteOutcome, ApiError>;
}

pub trait MembershipRepository: Send + Sync {
    /// The member's latest ACTIVE membership, if any.
    async fn current_for_member(
        &self,
        member_id: Uuid,
    ) -> Result<Option<MembershipWithPlan>, ApiError>;
    /// Full history, newest first.
    async fn list_for_member(&self, member_id: Uuid)
    -> Result<Vec<MembershipWithPlan>, ApiError>;
    /// ACTIVE memberships with `end_date` inside `[from, to]`, soonest first.
    async fn expiring_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<MembershipDetail>, ApiError>;
    async fn stamp_notification(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, Default)]
pub struct PaymentListFilter {
    pub member_id: Option<Uuid>,
    pub status: Option<PaymentStatus>,
    /// Inclusive `created_at` range.
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

/// Input to the payment recording transaction (membership + payment in one
/// commit). The plan is passed in whole; the usecase has already validated it.
#[derive(Debug, Clone)]
pub struct NewMembershipPayment {
    pub member_id: Uuid,
    pub plan: MembershipPlan,
    pub method: PaymentMethod,
    pub gateway_order_id: Option<String>,
    pub gateway_payment_id: Option<String>,
    pub now: DateTime<Utc>,
}

pub trait PaymentRepository: Send + Sync {
    async fn list(
        &self,
        filter: PaymentListFilter,
        page: PageRequest,
    ) -> Result<(Vec<PaymentDetail>, u64), ApiError>;
    async fn find_detail(&self, id: Uuid) -> Result<Option<PaymentDetail>, ApiError>;
    /// In one transaction: allocate the next `invoice-<year>` sequence value,
    /// insert the ACTIVE membership, insert the COMPLETED payment.
    async fn record_membership_payment(
        &self,
        input: NewMembershipPayment,
    ) -> Result<(Payment, Membership), ApiError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
    async fn recent(&self, limit: u64) -> Result<Vec<PaymentDetail>, ApiError>;
    /// Sum of COMPLETED payment amounts with `created_at` in `[from, to)`.
    async fn revenue_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<i64, ApiError>;
}

#[derive(Debug, Clone, Default)]
pub struct AttendanceListFilter {
    /// Restrict to check-ins on this calendar day (UTC).
    pub date: Option<NaiveDate>,
    pub member_id: Option<Uuid>,
}

pub trait AttendanceRepository: Send + Sync {
    /// The member's open session (checked in, not yet out), if any.
    async fn open_session(&self, member_id: Uuid) -> Result<Option<Attendance>, ApiError>;
    async fn create(&self, record: &Attendance) -> Result<(), ApiError>;
    async fn close_session(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), ApiError>;
    async fn list(
        &self,
        filter: AttendanceListFilter,
        page: PageRequest,
    ) -> Result<(Vec<AttendanceWithMember>, u64), ApiError>;
    async fn list_for_member(
        &self,
        member_id: Uuid,
        page: PageRequest,
    ) -> Result<(Vec<Attendance>, u64), ApiError>;
    async fn recent_for_member(
        &self,
        member_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Attendance>, ApiError>;
    async fn count_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<u64, ApiError>;
    async fn count_for_member_between(
        &self,
        member_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<u64, ApiError>;
    /// Sessions with no check-out yet.
    async fn count_open(&self) -> Result<u64, ApiError>;
}

#[derive(Debug, Clone, Default)]
pub struct WorkoutChanges {
    pub name: Option<String>,
    pub plan_type: Option<WorkoutPlanType>,
    pub description: Option<String>,
    pub days: Option<Vec<WorkoutDay>>,
    pub days_per_week: Option<i32>,
    pub is_active: Option<bool>,
}

pub trait WorkoutRepository: Send + Sync {
    async fn list(&self, only_active: bool) -> Result<Vec<WorkoutPlan>, ApiError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<WorkoutPlan>, ApiError>;
    async fn create(&self, plan: &WorkoutPlan) -> Result<(), ApiError>;
    async fn update(&self, id: Uuid, changes: WorkoutChanges) -> Result<WorkoutPlan, ApiError>;
    /// Removes the template; assignment rows go with it. Returns `false`
    /// when no such plan exists.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
    /// Deactivates the member's current assignment and creates the new one,
    /// in one transaction.
    async fn assign(
        &self,
        member_id: Uuid,
        workout_plan_id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<MemberWorkout, ApiError>;
    async fn active_assignment(
        &self,
        member_id: Uuid,
    ) -> Result<Option<MemberWorkoutWithPlan>, ApiError>;
}

pub trait ProgressRepository: Send + Sync {
    async fn create(&self, record: &ProgressRecord) -> Result<(), ApiError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProgressRecord>, ApiError>;
    async fn list_for_member(
        &self,
        member_id: Uuid,
        page: PageRequest,
    ) -> Result<(Vec<ProgressRecord>, u64), ApiError>;
    async fn recent_for_member(
        &self,
        member_id: Uuid,
        limit: u64,
    ) -> Result<Vec<ProgressRecord>, ApiError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
}

#[derive(Debug, Clone, Default)]
pub struct GymImageChanges {
    pub title: Option<String>,
    pub category: Option<ImageCategory>,
    pub visibility: Option<ImageVisibility>,
    pub sort_order: Option<i32>,
}

pub trait GalleryRepository: Send + Sync {
    /// `public_only` hides ADMIN_ONLY rows; ordered by sort order, then
    /// upload time.
    async fn list(
        &self,
        category: Option<ImageCategory>,
        public_only: bool,
    ) -> Result<Vec<GymImage>, ApiError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<GymImage>, ApiError>;
    async fn create(&self, image: &GymImage) -> Result<(), ApiError>;
    async fn update(&self, id: Uuid, changes: GymImageChanges) -> Result<GymImage, ApiError>;
    /// Returns the deleted row so the caller can remove the stored file.
    async fn delete(&self, id: Uuid) -> Result<Option<GymImage>, ApiError>;
}

pub trait SettingsRepository: Send + Sync {
    async fn get(&self) -> Result<Option<GymSettings>, ApiError>;
    async fn upsert(&self, settings: &GymSettings) -> Result<GymSettings, ApiError>;
}

/// Port for the SMS gateway.
pub trait SmsSender: Send + Sync {
    async fn send(&self, to: &str, message: &str) -> Result<(), ApiError>;
}

/// Order as returned by the payment gateway.
#[derive(Debug, Clone)]
pub struct GatewayOrder {
    pub order_id: String,
    pub amount_paise: i64,
    pub currency: String,
}

/// Port for the payment gateway: order creation over HTTP plus the local
/// HMAC signature check.
pub trait PaymentGatewayPort: Send + Sync {
    async fn create_order(
        &self,
        amount_paise: i64,
        receipt: &str,
    ) -> Result<GatewayOrder, ApiError>;
    /// Public key id handed to the client for checkout.
    fn key_id(&self) -> &str;
    /// Constant-time comparison of `signature` against
    /// HMAC-SHA256(`"{order_id}|{payment_id}"`, secret) in hex.
    fn verify_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool;
}

/// Port for stored gallery files.
pub trait ImageStore: Send + Sync {
    /// Persists `bytes` under a fresh name with the given extension and
    /// returns the stored filename.
    async fn save(&self, ext: &str, bytes: &[u8]) -> Result<String, ApiError>;
    /// Missing files are not an error.
    async fn remove(&self, name: &str) -> Result<(), ApiError>;
}
