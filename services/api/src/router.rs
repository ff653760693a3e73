use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use liftdesk_core::health::healthz;
use liftdesk_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    attendance::{check_in, check_out, list_attendance, own_attendance},
    auth::{change_password, login, me},
    dashboard::{admin_dashboard, member_dashboard},
    gallery::{delete_image, list_images, update_image, upload_image},
    health::health,
    members::{
        create_member, delete_member, get_member, list_members, member_qr, own_memberships,
        own_profile, own_qr, update_member,
    },
    payments::{
        create_order, delete_payment, download_invoice, list_payments, member_payments,
        own_payments, record_manual_payment, verify_payment,
    },
    plans::{create_plan, delete_plan, get_plan, list_plans, update_plan},
    progress::{
        delete_progress, member_progress, own_progress, record_own_progress, record_progress,
    },
    settings::{get_settings, update_settings},
    workouts::{
        assign_workout, create_workout, delete_workout, get_workout, list_workouts, own_workout,
        update_workout,
    },
};
use crate::state::AppState;

/// Slack on top of the image cap for multipart boundaries and text fields.
const BODY_LIMIT_SLACK: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/api/health", get(health))
        // Auth
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        .route("/api/auth/change-password", put(change_password))
        // Members
        .route("/api/members", get(list_members))
        .route("/api/members", post(create_member))
        .route("/api/members/me", get(own_profile))
        .route("/api/members/me/qr", get(own_qr))
        .route("/api/members/me/memberships", get(own_memberships))
        .route("/api/members/{id}", get(get_member))
        .route("/api/members/{id}", put(update_member))
        .route("/api/members/{id}", delete(delete_member))
        .route("/api/members/{id}/qr", get(member_qr))
        // Plans
        .route("/api/plans", get(list_plans))
        .route("/api/plans", post(create_plan))
        .route("/api/plans/{id}", get(get_plan))
        .route("/api/plans/{id}", put(update_plan))
        .route("/api/plans/{id}", delete(delete_plan))
        // Payments
        .route("/api/payments", get(list_payments))
        .route("/api/payments/order", post(create_order))
        .route("/api/payments/verify", post(verify_payment))
        .route("/api/payments/manual", post(record_manual_payment))
        .route("/api/payments/me", get(own_payments))
        .route("/api/payments/member/{member_id}", get(member_payments))
        .route("/api/payments/{id}/invoice", get(download_invoice))
        .route("/api/payments/{id}", delete(delete_payment))
        // Attendance
        .route("/api/attendance/check-in", post(check_in))
        .route("/api/attendance/check-out", post(check_out))
        .route("/api/attendance", get(list_attendance))
        .route("/api/attendance/me", get(own_attendance))
        // Workouts
        .route("/api/workouts", get(list_workouts))
        .route("/api/workouts", post(create_workout))
        .route("/api/workouts/me", get(own_workout))
        .route("/api/workouts/{id}", get(get_workout))
        .route("/api/workouts/{id}", put(update_workout))
        .route("/api/workouts/{id}", delete(delete_workout))
        .route("/api/workouts/{id}/assign", post(assign_workout))
        // Progress
        .route("/api/progress", post(record_progress))
        .route("/api/progress/me", get(own_progress))
        .route("/api/progress/me", post(record_own_progress))
        .route("/api/progress/member/{member_id}", get(member_progress))
        .route("/api/progress/{id}", delete(delete_progress))
        // Gallery
        .route("/api/images", get(list_images))
        .route("/api/images", post(upload_image))
        .route("/api/images/{id}", put(update_image))
        .route("/api/images/{id}", delete(delete_image))
        // Settings
        .route("/api/settings", get(get_settings))
        .route("/api/settings", put(update_settings))
        // Dashboards
        .route("/api/dashboard/admin", get(admin_dashboard))
        .route("/api/dashboard/member", get(member_dashboard))
        // Uploaded gallery files, served as-is
        .nest_service("/uploads", ServeDir::new(state.config.upload_dir.clone()))
        .layer(DefaultBodyLimit::max(
            state.config.max_upload_bytes + BODY_LIMIT_SLACK,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
