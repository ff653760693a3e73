//! Bearer-token helpers for integration tests.
//!
//! Tests mint real HS256 tokens with a fixed secret so extractors and token
//! validation run the same code paths as production.

use axum::http::{HeaderMap, HeaderValue};
use liftdesk_domain::user::UserRole;
use uuid::Uuid;

/// Secret shared by every test that issues or validates tokens.
pub const TEST_JWT_SECRET: &str = "liftdesk-test-secret";

const TEST_TOKEN_TTL_SECS: u64 = 3600;

/// Configurable identity for test requests.
pub struct MockAuth {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl MockAuth {
    pub fn new(user_id: Uuid, role: UserRole) -> Self {
        Self { user_id, role }
    }

    pub fn admin() -> Self {
        Self::new(Uuid::new_v4(), UserRole::Admin)
    }

    pub fn member() -> Self {
        Self::new(Uuid::new_v4(), UserRole::Member)
    }

    /// A freshly issued token for this identity, signed with
    /// [`TEST_JWT_SECRET`].
    pub fn token(&self) -> String {
        let (token, _) = liftdesk_auth::issue_token(
            self.user_id,
            self.role,
            TEST_JWT_SECRET,
            TEST_TOKEN_TTL_SECS,
        )
        .expect("test token");
        token
    }

    /// Headers as a client would send them.
    pub fn bearer_headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            axum::http::header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token())).unwrap(),
        );
        map
    }
}
