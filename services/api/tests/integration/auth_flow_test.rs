use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::response::IntoResponse;

use liftdesk_api::usecase::auth::{LoginInput, LoginUseCase};
use liftdesk_auth::{AdminUser, AuthUser, JwtSecret, validate_token};
use liftdesk_domain::user::UserRole;
use liftdesk_testing::auth::{MockAuth, TEST_JWT_SECRET};

use crate::helpers::{InMemoryMembers, InMemoryUsers, test_admin, test_member};

const TOKEN_TTL_SECS: u64 = 3600;

struct TestAuthState;

impl JwtSecret for TestAuthState {
    fn jwt_secret(&self) -> &str {
        TEST_JWT_SECRET
    }
}

fn parts_with_bearer(token: &str) -> Parts {
    let (parts, _) = Request::builder()
        .method("GET")
        .uri("/api/auth/me")
        .header("authorization", format!("Bearer {token}"))
        .body(())
        .unwrap()
        .into_parts();
    parts
}

fn parts_with_headers(headers: HeaderMap) -> Parts {
    let (mut parts, _) = Request::builder()
        .method("GET")
        .uri("/api/dashboard/admin")
        .body(())
        .unwrap()
        .into_parts();
    parts.headers.extend(headers);
    parts
}

// ── Login flow ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_login_admin_and_clear_admin_gate_with_issued_token() {
    let admin = test_admin("secret123");
    let usecase = LoginUseCase {
        users: InMemoryUsers::new(vec![admin.clone()]),
        members: InMemoryMembers::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        token_ttl_secs: TOKEN_TTL_SECS,
    };

    let output = usecase
        .execute(LoginInput {
            mobile: admin.mobile.clone(),
            password: "secret123".to_owned(),
        })
        .await
        .unwrap();

    assert!(output.member.is_none(), "admins have no member profile");
    assert!(output.expires_at > 0);

    let mut parts = parts_with_bearer(&output.token);
    let gate = AdminUser::from_request_parts(&mut parts, &TestAuthState)
        .await
        .unwrap();
    assert_eq!(gate.0.user_id, admin.id);
    assert_eq!(gate.0.role, UserRole::Admin);
}

#[tokio::test]
async fn should_attach_member_profile_and_normalize_mobile_on_login() {
    let mw = test_member("pass1234");
    let usecase = LoginUseCase {
        users: InMemoryUsers::new(vec![mw.user.clone()]),
        members: InMemoryMembers::new(vec![mw.clone()]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        token_ttl_secs: TOKEN_TTL_SECS,
    };

    // Bare local number; the stored mobile is +919812345678.
    let output = usecase
        .execute(LoginInput {
            mobile: "98123 45678".to_owned(),
            password: "pass1234".to_owned(),
        })
        .await
        .unwrap();

    let member = output.member.expect("member profile attached");
    assert_eq!(member.member_code, "LD-001");

    let info = validate_token(&output.token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, mw.user.id);
    assert_eq!(info.role, UserRole::Member);
    assert_eq!(info.exp, output.expires_at);
}

#[tokio::test]
async fn should_forbid_member_login_token_on_admin_gate() {
    let mw = test_member("pass1234");
    let usecase = LoginUseCase {
        users: InMemoryUsers::new(vec![mw.user.clone()]),
        members: InMemoryMembers::new(vec![mw.clone()]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        token_ttl_secs: TOKEN_TTL_SECS,
    };

    let output = usecase
        .execute(LoginInput {
            mobile: mw.user.mobile.clone(),
            password: "pass1234".to_owned(),
        })
        .await
        .unwrap();

    let mut parts = parts_with_bearer(&output.token);
    let rejection = AdminUser::from_request_parts(&mut parts, &TestAuthState)
        .await
        .unwrap_err();
    assert_eq!(rejection.into_response().status(), StatusCode::FORBIDDEN);
}

// ── Extractors against minted headers ────────────────────────────────────────

#[tokio::test]
async fn should_accept_minted_identity_headers_on_both_extractors() {
    let admin = MockAuth::admin();
    let mut parts = parts_with_headers(admin.bearer_headers());
    let gate = AdminUser::from_request_parts(&mut parts, &TestAuthState)
        .await
        .unwrap();
    assert_eq!(gate.0.user_id, admin.user_id);

    let member = MockAuth::member();
    let mut parts = parts_with_headers(member.bearer_headers());
    let user = AuthUser::from_request_parts(&mut parts, &TestAuthState)
        .await
        .unwrap();
    assert_eq!(user.user_id, member.user_id);
    assert_eq!(user.role, UserRole::Member);
}

#[tokio::test]
async fn should_reject_token_with_forged_signature() {
    let token = MockAuth::member().token();
    let (unsigned, _) = token.rsplit_once('.').unwrap();
    let forged = format!("{unsigned}.e30");

    let mut parts = parts_with_bearer(&forged);
    let rejection = AuthUser::from_request_parts(&mut parts, &TestAuthState)
        .await
        .unwrap_err();
    assert_eq!(rejection.into_response().status(), StatusCode::UNAUTHORIZED);
}
