//! Wire DTOs shared by several handler modules.
//!
//! Conventions: camelCase keys, RFC 3339 ms timestamps, money in rupees as
//! JSON numbers (paise stays internal).

use chrono::{DateTime, NaiveDate, Utc};
use liftdesk_domain::pagination::PageRequest;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use liftdesk_core::serde::{to_rfc3339_ms, to_rfc3339_ms_opt};
use liftdesk_domain::membership::days_remaining;
use liftdesk_domain::money::paise_to_rupees;
use liftdesk_domain::workout::WorkoutDay;

use crate::domain::types::{
    Attendance, AttendanceWithMember, GymImage, GymSettings, Member, MemberOverview,
    MemberWorkoutWithPlan, MembershipDetail, MembershipPlan, MembershipWithPlan,
    NotificationSettings, Payment, PaymentDetail, ProgressRecord, User, WorkoutPlan,
};

/// Clamped [`PageRequest`] from optional `page`/`limit` query parameters.
pub fn page_request(page: Option<u64>, limit: Option<u64>) -> PageRequest {
    PageRequest {
        page: page.unwrap_or(1),
        limit: limit.unwrap_or(10),
    }
    .clamped()
}

/// Query string for endpoints that take nothing beyond pagination.
#[derive(Deserialize, Default)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl PageQuery {
    pub fn request(&self) -> PageRequest {
        page_request(self.page, self.limit)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub full_name: String,
    pub email: Option<String>,
    pub mobile: String,
    pub role: &'static str,
    pub status: &'static str,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl UserDto {
    pub fn new(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            mobile: user.mobile,
            role: user.role.as_str(),
            status: user.status.as_str(),
            created_at: user.created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub id: Uuid,
    pub member_code: String,
    pub user_id: Uuid,
    pub full_name: String,
    pub email: Option<String>,
    pub mobile: String,
    pub status: &'static str,
    pub gender: &'static str,
    pub date_of_birth: NaiveDate,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub fitness_goal: Option<String>,
    pub medical_notes: Option<String>,
    pub emergency_contact: Option<String>,
    pub join_date: NaiveDate,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl MemberDto {
    pub fn new(member: Member, user: &User) -> Self {
        Self {
            id: member.id,
            member_code: member.member_code,
            user_id: member.user_id,
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            mobile: user.mobile.clone(),
            status: user.status.as_str(),
            gender: member.gender.as_str(),
            date_of_birth: member.date_of_birth,
            height_cm: member.height_cm,
            weight_kg: member.weight_kg,
            fitness_goal: member.fitness_goal,
            medical_notes: member.medical_notes,
            emergency_contact: member.emergency_contact,
            join_date: member.join_date,
            created_at: member.created_at,
        }
    }
}

/// Member row plus the membership card the admin list and profile pages show.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberOverviewDto {
    #[serde(flatten)]
    pub member: MemberDto,
    pub current_membership: Option<MembershipDto>,
}

impl MemberOverviewDto {
    pub fn new(overview: MemberOverview) -> Self {
        Self {
            member: MemberDto::new(overview.member, &overview.user),
            current_membership: overview.current_membership.map(MembershipDto::with_plan),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDto {
    pub id: Uuid,
    pub name: String,
    pub duration_days: i32,
    /// Base price in rupees.
    pub price: f64,
    pub gst_percent: i32,
    pub final_price: f64,
    pub description: Option<String>,
    pub features: Vec<String>,
    pub is_active: bool,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl PlanDto {
    pub fn new(plan: MembershipPlan) -> Self {
        Self {
            id: plan.id,
            name: plan.name,
            duration_days: plan.duration_days,
            price: paise_to_rupees(plan.base_price_paise),
            gst_percent: plan.gst_percent,
            final_price: paise_to_rupees(plan.final_price_paise),
            description: plan.description,
            features: plan.features,
            is_active: plan.is_active,
            created_at: plan.created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipDto {
    pub id: Uuid,
    pub plan_id: Uuid,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub start_date: DateTime<Utc>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub end_date: DateTime<Utc>,
    pub status: &'static str,
    pub days_remaining: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<PlanDto>,
}

impl MembershipDto {
    pub fn with_plan(mp: MembershipWithPlan) -> Self {
        Self {
            id: mp.membership.id,
            plan_id: mp.membership.plan_id,
            start_date: mp.membership.start_date,
            end_date: mp.membership.end_date,
            status: mp.membership.status.as_str(),
            days_remaining: days_remaining(mp.membership.end_date, Utc::now()),
            plan: Some(PlanDto::new(mp.plan)),
        }
    }

    pub fn bare(membership: crate::domain::types::Membership) -> Self {
        Self {
            id: membership.id,
            plan_id: membership.plan_id,
            start_date: membership.start_date,
            end_date: membership.end_date,
            status: membership.status.as_str(),
            days_remaining: days_remaining(membership.end_date, Utc::now()),
            plan: None,
        }
    }
}

/// Row of the expiring-soon dashboard card and the reminder sweep.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiringMembershipDto {
    pub membership_id: Uuid,
    pub member_id: Uuid,
    pub member_code: String,
    pub member_name: String,
    pub mobile: String,
    pub plan_name: String,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub end_date: DateTime<Utc>,
    pub days_remaining: i64,
}

impl ExpiringMembershipDto {
    pub fn new(detail: MembershipDetail) -> Self {
        Self {
            membership_id: detail.membership.id,
            member_id: detail.member.id,
            member_code: detail.member.member_code,
            member_name: detail.user.full_name,
            mobile: detail.user.mobile,
            plan_name: detail.plan.name,
            end_date: detail.membership.end_date,
            days_remaining: days_remaining(detail.membership.end_date, Utc::now()),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub id: Uuid,
    pub invoice_number: String,
    pub member_id: Uuid,
    pub membership_id: Uuid,
    /// Gross amount in rupees.
    pub amount: f64,
    pub gst_amount: f64,
    pub method: &'static str,
    pub status: &'static str,
    pub gateway_order_id: Option<String>,
    pub gateway_payment_id: Option<String>,
    #[serde(serialize_with = "to_rfc3339_ms_opt")]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl PaymentDto {
    pub fn new(payment: Payment) -> Self {
        Self {
            id: payment.id,
            invoice_number: payment.invoice_number,
            member_id: payment.member_id,
            membership_id: payment.membership_id,
            amount: paise_to_rupees(payment.amount_paise),
            gst_amount: paise_to_rupees(payment.gst_amount_paise),
            method: payment.method.as_str(),
            status: payment.status.as_str(),
            gateway_order_id: payment.gateway_order_id,
            gateway_payment_id: payment.gateway_payment_id,
            paid_at: payment.paid_at,
            created_at: payment.created_at,
        }
    }
}

/// Payment joined out to who paid and for what.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetailDto {
    #[serde(flatten)]
    pub payment: PaymentDto,
    pub member_code: String,
    pub member_name: String,
    pub plan_name: String,
}

impl PaymentDetailDto {
    pub fn new(detail: PaymentDetail) -> Self {
        Self {
            payment: PaymentDto::new(detail.payment),
            member_code: detail.member.member_code,
            member_name: detail.user.full_name,
            plan_name: detail.plan.name,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDto {
    pub id: Uuid,
    pub member_id: Uuid,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub check_in_time: DateTime<Utc>,
    #[serde(serialize_with = "to_rfc3339_ms_opt")]
    pub check_out_time: Option<DateTime<Utc>>,
    pub method: &'static str,
    /// Present once the session is closed.
    pub duration_minutes: Option<i64>,
}

impl AttendanceDto {
    pub fn new(attendance: Attendance) -> Self {
        let duration_minutes = attendance
            .check_out_time
            .map(|out| (out - attendance.check_in_time).num_minutes());
        Self {
            id: attendance.id,
            member_id: attendance.member_id,
            check_in_time: attendance.check_in_time,
            check_out_time: attendance.check_out_time,
            method: attendance.method.as_str(),
            duration_minutes,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceWithMemberDto {
    #[serde(flatten)]
    pub attendance: AttendanceDto,
    pub member_code: String,
    pub member_name: String,
}

impl AttendanceWithMemberDto {
    pub fn new(row: AttendanceWithMember) -> Self {
        Self {
            attendance: AttendanceDto::new(row.attendance),
            member_code: row.member.member_code,
            member_name: row.user.full_name,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlanDto {
    pub id: Uuid,
    pub name: String,
    pub plan_type: &'static str,
    pub description: Option<String>,
    pub days: Vec<WorkoutDay>,
    pub days_per_week: i32,
    pub is_active: bool,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl WorkoutPlanDto {
    pub fn new(plan: WorkoutPlan) -> Self {
        Self {
            id: plan.id,
            name: plan.name,
            plan_type: plan.plan_type.as_str(),
            description: plan.description,
            days: plan.days,
            days_per_week: plan.days_per_week,
            is_active: plan.is_active,
            created_at: plan.created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDto {
    pub id: Uuid,
    pub workout_plan_id: Uuid,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub assigned_at: DateTime<Utc>,
    pub plan: WorkoutPlanDto,
}

impl AssignmentDto {
    pub fn new(row: MemberWorkoutWithPlan) -> Self {
        Self {
            id: row.assignment.id,
            workout_plan_id: row.plan.id,
            assigned_at: row.assignment.assigned_at,
            plan: WorkoutPlanDto::new(row.plan),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressDto {
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
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub recorded_at: DateTime<Utc>,
}

impl ProgressDto {
    pub fn new(record: ProgressRecord) -> Self {
        Self {
            id: record.id,
            member_id: record.member_id,
            weight_kg: record.weight_kg,
            body_fat_pct: record.body_fat_pct,
            chest_cm: record.chest_cm,
            waist_cm: record.waist_cm,
            hips_cm: record.hips_cm,
            arms_cm: record.arms_cm,
            thighs_cm: record.thighs_cm,
            photo_url: record.photo_url,
            notes: record.notes,
            recorded_at: record.recorded_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GymImageDto {
    pub id: Uuid,
    pub title: Option<String>,
    pub category: &'static str,
    pub image_url: String,
    pub visibility: &'static str,
    pub sort_order: i32,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub uploaded_at: DateTime<Utc>,
}

impl GymImageDto {
    pub fn new(image: GymImage) -> Self {
        Self {
            id: image.id,
            title: image.title,
            category: image.category.as_str(),
            image_url: image.image_url,
            visibility: image.visibility.as_str(),
            sort_order: image.sort_order,
            uploaded_at: image.uploaded_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDto {
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
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl SettingsDto {
    pub fn new(settings: GymSettings) -> Self {
        Self {
            gym_name: settings.gym_name,
            tagline: settings.tagline,
            address: settings.address,
            phone: settings.phone,
            email: settings.email,
            website: settings.website,
            gstin: settings.gstin,
            logo_url: settings.logo_url,
            working_hours: settings.working_hours,
            currency: settings.currency,
            timezone: settings.timezone,
            social_links: settings.social_links,
            notifications: settings.notifications,
            updated_at: settings.updated_at,
        }
    }
}
