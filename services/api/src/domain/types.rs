use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use liftdesk_domain::checkin::AttendanceMethod;
use liftdesk_domain::gallery::{ImageCategory, ImageVisibility};
use liftdesk_domain::member::Gender;
use liftdesk_domain::membership::MembershipStatus;
use liftdesk_domain::payment::{PaymentMethod, PaymentStatus};
use liftdesk_domain::user::{UserRole, UserStatus};
use liftdesk_domain::workout::{WorkoutDay, WorkoutPlanType};

/// Login identity. Members additionally own a [`Member`] profile row.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    pub email: Option<String>,
    pub mobile: String,
    pub password_hash: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Gym member profile.
#[derive(Debug, Clone)]
pub struct Member {
    pub id: Uuid,
    pub member_code: String,
    pub user_id: Uuid,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub fitness_goal: Option<String>,
    pub medical_notes: Option<String>,
    pub emergency_contact: Option<String>,
    pub join_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MemberWithUser {
    pub member: Member,
    pub user: User,
}

/// List-page row: profile plus the current (latest ACTIVE) membership.
#[derive(Debug, Clone)]
pub struct MemberOverview {
    pub member: Member,
    pub user: User,
    pub current_membership: Option<MembershipWithPlan>,
}

#[derive(Debug, Clone)]
pub struct MembershipPlan {
    pub id: Uuid,
    pub name: String,
    pub duration_days: i32,
    pub base_price_paise: i64,
    pub gst_percent: i32,
    pub final_price_paise: i64,
    pub description: Option<String>,
    pub features: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Membership {
    pub id: Uuid,
    pub member_id: Uuid,
    pub plan_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: MembershipStatus,
    pub frozen_days: i32,
    pub last_notification_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MembershipWithPlan {
    pub membership: Membership,
    pub plan: MembershipPlan,
}

/// Membership joined out to everything the scheduler and the admin
/// dashboard need in one fetch.
#[derive(Debug, Clone)]
pub struct MembershipDetail {
    pub membership: Membership,
    pub plan: MembershipPlan,
    pub member: Member,
    pub user: User,
}

#[derive(Debug, Clone)]
pub struct Payment {
    pub id: Uuid,
    pub invoice_number: String,
    pub member_id: Uuid,
    pub membership_id: Uuid,
    pub amount_paise: i64,
    pub gst_amount_paise: i64,
    pub method: PaymentMethod,
    pub gateway_order_id: Option<String>,
    pub gateway_payment_id: Option<String>,
    pub status: PaymentStatus,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Payment joined to its member, user, membership and plan, the shape the
/// admin list and the invoice renderer consume.
#[derive(Debug, Clone)]
pub struct PaymentDetail {
    pub payment: Payment,
    pub member: Member,
    pub user: User,
    pub membership: Membership,
    pub plan: MembershipPlan,
}

#[derive(Debug, Clone)]
pub struct Attendance {
    pub id: Uuid,
    pub member_id: Uuid,
    pub check_in_time: DateTime<Utc>,
    pub check_out_time: Option<DateTime<Utc>>,
    pub method: AttendanceMethod,
}

#[derive(Debug, Clone)]
pub struct AttendanceWithMember {
    pub attendance: Attendance,
    pub member: Member,
    pub user: User,
}

#[derive(Debug, Clone)]
pub struct WorkoutPlan {
    pub id: Uuid,
    pub name: String,
    pub plan_type: WorkoutPlanType,
    pub description: Option<String>,
    pub days: Vec<WorkoutDay>,
    pub days_per_week: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MemberWorkout {
    pub id: Uuid,
    pub member_id: Uuid,
    /// `None` once the referenced workout plan has been deleted.
    pub workout_plan_id: Option<Uuid>,
    pub assigned_at: DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct MemberWorkoutWithPlan {
    pub assignment: MemberWorkout,
    pub plan: WorkoutPlan,
}

#[derive(Debug, Clone)]
pub struct ProgressRecord {
    pub id: Uuid,
    pub member_id: Uuid,
    pub weight_kg: Option<f64>,
    pub body_fat_pct: Option<f64>,
    pub chest_cm: Option<f64>,
    pub waist_cm: Option<f64>,
    pub hips_cm: Option<f64>,
    pub arms_cm: Option<f64>,
    pub thighs_cm: Option<f64>,
    pub photo_url: Option<String>,
    pub notes: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

/// Singleton gym configuration.
#[derive(Debug, Clone)]
pub struct GymSettings {
    pub id: Uuid,
    pub gym_name: String,
    pub tagline: Option<String>,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub gstin: Option<String>,
    pub logo_url: Option<String>,
    pub working_hours: Option<serde_json::Value>,
    pub currency: String,
    pub timezone: String,
    pub social_links: Option<serde_json::Value>,
    pub notifications: NotificationSettings,
    pub updated_at: DateTime<Utc>,
}

impl GymSettings {
    /// The row handed out when nothing has been stored yet.
    pub fn defaults(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::nil(),
            gym_name: "Liftdesk Gym".to_owned(),
            tagline: None,
            address: String::new(),
            phone: None,
            email: None,
            website: None,
            gstin: None,
            logo_url: None,
            working_hours: None,
            currency: "INR".to_owned(),
            timezone: "Asia/Kolkata".to_owned(),
            social_links: None,
            notifications: NotificationSettings::default(),
            updated_at: now,
        }
    }
}

/// Stored as the `notifications` JSON column, camelCase on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSettings {
    pub sms_alerts: bool,
    pub email_alerts: bool,
}

#[derive(Debug, Clone)]
pub struct GymImage {
    pub id: Uuid,
    pub title: Option<String>,
    pub category: ImageCategory,
    pub image_url: String,
    pub visibility: ImageVisibility,
    pub sort_order: i32,
    pub uploaded_at: DateTime<Utc>,
}
