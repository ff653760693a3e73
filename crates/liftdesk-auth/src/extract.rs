//! Bearer-token extractors.

use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use http::request::Parts;
use liftdesk_domain::user::UserRole;
use uuid::Uuid;

use crate::token::validate_token;

/// State requirement for the extractors: expose the shared JWT secret.
pub trait JwtSecret {
    fn jwt_secret(&self) -> &str;
}

/// Rejection rendered as the API's JSON error envelope.
#[derive(Debug)]
pub struct AuthRejection {
    status: StatusCode,
    message: &'static str,
}

impl AuthRejection {
    fn unauthorized(message: &'static str) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message,
        }
    }

    fn forbidden() -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            message: "Admin access required",
        }
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "success": false,
            "message": self.message,
        });
        (self.status, axum::Json(body)).into_response()
    }
}

/// Identity of the caller, proven by a valid bearer token.
///
/// Returns 401 when the `Authorization: Bearer` header is absent or the token
/// does not validate. Role enforcement is [`AdminUser`]'s job.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub role: UserRole,
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::trim)
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: JwtSecret + Send + Sync,
{
    type Rejection = AuthRejection;

    // Desugared form; the work is synchronous, so the returned future must
    // not borrow `parts`.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let verdict = match bearer_token(parts) {
            None => Err(AuthRejection::unauthorized("Authentication required")),
            Some(token) => validate_token(token, state.jwt_secret())
                .map(|info| Self {
                    user_id: info.user_id,
                    role: info.role,
                })
                .map_err(|_| AuthRejection::unauthorized("Invalid or expired token")),
        };
        async move { verdict }
    }
}

/// Optional variant for routes that serve both anonymous and signed-in
/// callers. A missing header yields `None`; a present but invalid token is
/// still a 401.
impl<S> axum::extract::OptionalFromRequestParts<S> for AuthUser
where
    S: JwtSecret + Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Option<Self>, Self::Rejection>> + Send {
        let verdict = match bearer_token(parts) {
            None => Ok(None),
            Some(token) => validate_token(token, state.jwt_secret())
                .map(|info| {
                    Some(Self {
                        user_id: info.user_id,
                        role: info.role,
                    })
                })
                .map_err(|_| AuthRejection::unauthorized("Invalid or expired token")),
        };
        async move { verdict }
    }
}

/// [`AuthUser`] that additionally requires the ADMIN role (403 otherwise).
#[derive(Debug, Clone, Copy)]
pub struct AdminUser(pub AuthUser);

impl<S> FromRequestParts<S> for AdminUser
where
    S: JwtSecret + Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let verdict = match bearer_token(parts) {
            None => Err(AuthRejection::unauthorized("Authentication required")),
            Some(token) => match validate_token(token, state.jwt_secret()) {
                Err(_) => Err(AuthRejection::unauthorized("Invalid or expired token")),
                Ok(info) if !info.role.is_admin() => Err(AuthRejection::forbidden()),
                Ok(info) => Ok(Self(AuthUser {
                    user_id: info.user_id,
                    role: info.role,
                })),
            },
        };
        async move { verdict }
    }
}
