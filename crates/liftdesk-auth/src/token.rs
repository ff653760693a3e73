//! JWT issue and validation.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use liftdesk_domain::user::UserRole;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity extracted from a validated token.
#[derive(Debug, Clone, Copy)]
pub struct TokenInfo {
    pub user_id: Uuid,
    pub role: UserRole,
    pub exp: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
}

/// JWT claims payload shared by issue and validation.
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `sub` | `sub` | user ID (UUID string) |
/// | `role` | custom | role wire string (`"ADMIN"` / `"MEMBER"`) |
/// | `exp` | `exp` | expiration, seconds since epoch |
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub role: String,
    pub exp: u64,
}

/// Issue a bearer token for `user_id` expiring `ttl_secs` from now.
/// Returns the encoded token and its `exp`.
pub fn issue_token(
    user_id: Uuid,
    role: UserRole,
    secret: &str,
    ttl_secs: u64,
) -> Result<(String, u64), AuthError> {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_err(|_| AuthError::Malformed)?
        .as_secs();
    let exp = now + ttl_secs;
    let claims = JwtClaims {
        sub: user_id.to_string(),
        role: role.as_str().to_string(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::Malformed)?;
    Ok((token, exp))
}

/// Decode and validate a bearer token.
///
/// Validation: HS256, exp checked, required claims `exp` + `sub`.
/// Default leeway = 60s tolerates clock skew.
pub fn validate_token(token: &str, secret: &str) -> Result<TokenInfo, AuthError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })?;

    let user_id = data
        .claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| AuthError::Malformed)?;
    let role = UserRole::parse(&data.claims.role).ok_or(AuthError::Malformed)?;

    Ok(TokenInfo {
        user_id,
        role,
        exp: data.claims.exp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-value";

    #[test]
    fn should_issue_token_that_validates() {
        let id = Uuid::new_v4();
        let (token, exp) = issue_token(id, UserRole::Admin, SECRET, 3600).unwrap();
        let info = validate_token(&token, SECRET).unwrap();
        assert_eq!(info.user_id, id);
        assert_eq!(info.role, UserRole::Admin);
        assert_eq!(info.exp, exp);
    }

    #[test]
    fn should_reject_wrong_secret() {
        let (token, _) = issue_token(Uuid::new_v4(), UserRole::Member, SECRET, 3600).unwrap();
        assert!(matches!(
            validate_token(&token, "other-secret"),
            Err(AuthError::InvalidSignature)
        ));
    }

    #[test]
    fn should_reject_expired_token() {
        // exp must be past the 60s default leeway
        let claims = JwtClaims {
            sub: Uuid::new_v4().to_string(),
            role: "MEMBER".to_string(),
            exp: (std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_secs())
                - 120,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        assert!(matches!(
            validate_token(&token, SECRET),
            Err(AuthError::Expired)
        ));
    }

    #[test]
    fn should_reject_garbage_token() {
        assert!(matches!(
            validate_token("definitely.not.ajwt", SECRET),
            Err(AuthError::Malformed)
        ));
    }

    #[test]
    fn should_reject_unknown_role_claim() {
        let claims = JwtClaims {
            sub: Uuid::new_v4().to_string(),
            role: "SUPERUSER".to_string(),
            exp: (std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_secs())
                + 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        assert!(matches!(
            validate_token(&token, SECRET),
            Err(AuthError::Malformed)
        ));
    }
}
