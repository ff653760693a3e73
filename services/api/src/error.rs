use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API error variants. `Display` doubles as the wire message.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or semantically invalid request input.
    #[error("{0}")]
    Validation(String),
    /// Login failure. One message for both unknown mobile and wrong password.
    #[error("Invalid mobile number or password")]
    BadCredentials,
    /// The account exists but its status forbids access.
    #[error("Account is not active")]
    AccountDisabled,
    #[error("Access denied")]
    Forbidden,
    /// Check-in requires an ACTIVE membership that has not run out.
    #[error("Membership expired or missing")]
    MembershipLapsed,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("No open attendance session")]
    NoOpenSession,
    #[error("{0}")]
    Conflict(String),
    #[error("Cannot delete plan. {0} active memberships are using this plan.")]
    PlanInUse(u64),
    #[error("Member is already checked in")]
    AlreadyCheckedIn,
    #[error("Invalid payment signature")]
    InvalidSignature,
    #[error("Payment gateway is not configured")]
    GatewayUnavailable,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::BadCredentials => "BAD_CREDENTIALS",
            Self::AccountDisabled => "ACCOUNT_DISABLED",
            Self::Forbidden => "FORBIDDEN",
            Self::MembershipLapsed => "MEMBERSHIP_LAPSED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::NoOpenSession => "NO_OPEN_SESSION",
            Self::Conflict(_) => "CONFLICT",
            Self::PlanInUse(_) => "PLAN_IN_USE",
            Self::AlreadyCheckedIn => "ALREADY_CHECKED_IN",
            Self::InvalidSignature => "INVALID_SIGNATURE",
            Self::GatewayUnavailable => "GATEWAY_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) | Self::InvalidSignature => StatusCode::BAD_REQUEST,
            Self::BadCredentials => StatusCode::UNAUTHORIZED,
            Self::AccountDisabled | Self::Forbidden | Self::MembershipLapsed => {
                StatusCode::FORBIDDEN
            }
            Self::NotFound(_) | Self::NoOpenSession => StatusCode::NOT_FOUND,
            Self::Conflict(_) | Self::PlanInUse(_) | Self::AlreadyCheckedIn => {
                StatusCode::CONFLICT
            }
            Self::GatewayUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            // Log 500s only; tower-http TraceLayer already records
            // method/uri/status for every request.
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "success": false,
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
