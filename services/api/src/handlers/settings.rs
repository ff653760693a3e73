use axum::{Json, extract::State};
use serde::Deserialize;

use liftdesk_auth::{AdminUser, AuthUser};

use crate::domain::types::NotificationSettings;
use crate::error::ApiError;
use crate::handlers::common::SettingsDto;
use crate::response::Envelope;
use crate::state::AppState;
use crate::usecase::settings::{GetSettingsUseCase, UpdateSettingsInput, UpdateSettingsUseCase};

// ── GET /api/settings ────────────────────────────────────────────────────────

pub async fn get_settings(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Envelope<SettingsDto>>, ApiError> {
    let usecase = GetSettingsUseCase {
        settings: state.settings_repo(),
    };
    let settings = usecase.execute().await?;
    Ok(Envelope::data(SettingsDto::new(settings)))
}

// ── PUT /api/settings ────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub gym_name: Option<String>,
    pub tagline: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub gstin: Option<String>,
    pub logo_url: Option<String>,
    pub working_hours: Option<serde_json::Value>,
    pub currency: Option<String>,
    pub timezone: Option<String>,
    pub social_links: Option<serde_json::Value>,
    pub notifications: Option<NotificationSettings>,
}

pub async fn update_settings(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(body): Json<UpdateSettingsRequest>,
) -> Result<Json<Envelope<SettingsDto>>, ApiError> {
    let usecase = UpdateSettingsUseCase {
        settings: state.settings_repo(),
    };
    let settings = usecase
        .execute(UpdateSettingsInput {
            gym_name: body.gym_name,
            tagline: body.tagline,
            address: body.address,
            phone: body.phone,
            email: body.email,
            website: body.website,
            gstin: body.gstin,
            logo_url: body.logo_url,
            working_hours: body.working_hours,
            currency: body.currency,
            timezone: body.timezone,
            social_links: body.social_links,
            notifications: body.notifications,
        })
        .await?;
    Ok(Envelope::with_message(
        "Settings updated successfully",
        SettingsDto::new(settings),
    ))
}
