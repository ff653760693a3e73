use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use liftdesk_auth::AuthUser;

use crate::error::ApiError;
use crate::handlers::common::{MemberDto, UserDto};
use crate::response::Envelope;
use crate::state::AppState;
use crate::usecase::auth::{
    ChangePasswordInput, ChangePasswordUseCase, GetMeUseCase, LoginInput, LoginUseCase,
};

// ── POST /api/auth/login ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub mobile: String,
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    /// Unix seconds.
    pub expires_at: u64,
    pub user: UserDto,
    pub member: Option<MemberDto>,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<Envelope<LoginResponse>>, ApiError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
        members: state.member_repo(),
        jwt_secret: state.config.jwt_secret.clone(),
        token_ttl_secs: state.config.jwt_expiry_secs,
    };
    let output = usecase
        .execute(LoginInput {
            mobile: body.mobile,
            password: body.password,
        })
        .await?;
    let member = output
        .member
        .map(|member| MemberDto::new(member, &output.user));
    Ok(Envelope::data(LoginResponse {
        token: output.token,
        expires_at: output.expires_at,
        user: UserDto::new(output.user),
        member,
    }))
}

// ── GET /api/auth/me ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct MeResponse {
    pub user: UserDto,
    pub member: Option<MemberDto>,
}

pub async fn me(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Envelope<MeResponse>>, ApiError> {
    let usecase = GetMeUseCase {
        users: state.user_repo(),
        members: state.member_repo(),
    };
    let output = usecase.execute(auth.user_id).await?;
    let member = output
        .member
        .map(|member| MemberDto::new(member, &output.user));
    Ok(Envelope::data(MeResponse {
        user: UserDto::new(output.user),
        member,
    }))
}

// ── PUT /api/auth/change-password ────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

pub async fn change_password(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<ChangePasswordRequest>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let usecase = ChangePasswordUseCase {
        users: state.user_repo(),
    };
    usecase
        .execute(
            auth.user_id,
            ChangePasswordInput {
                current_password: body.current_password,
                new_password: body.new_password,
            },
        )
        .await?;
    Ok(Envelope::message("Password changed successfully"))
}
