use anyhow::Context as _;
use uuid::Uuid;

use liftdesk_auth::issue_token;
use liftdesk_domain::member::normalize_phone;
use liftdesk_domain::user::UserStatus;

use crate::domain::repository::{MemberRepository, UserRepository};
use crate::domain::types::{Member, User};
use crate::error::ApiError;

/// Minimum accepted password length, everywhere a password is set.
pub const MIN_PASSWORD_LEN: usize = 6;

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub mobile: String,
    pub password: String,
}

pub struct LoginOutput {
    pub user: User,
    /// Present only for MEMBER-role accounts.
    pub member: Option<Member>,
    pub token: String,
    pub expires_at: u64,
}

pub struct LoginUseCase<U: UserRepository, M: MemberRepository> {
    pub users: U,
    pub members: M,
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
}

impl<U: UserRepository, M: MemberRepository> LoginUseCase<U, M> {
    pub async fn execute(&self, input: LoginInput) -> Result<LoginOutput, ApiError> {
        let mobile = normalize_phone(&input.mobile);
        let user = self
            .users
            .find_by_mobile(&mobile)
            .await?
            .ok_or(ApiError::BadCredentials)?;

        let password_ok =
            bcrypt::verify(&input.password, &user.password_hash).context("verify password")?;
        if !password_ok {
            return Err(ApiError::BadCredentials);
        }
        if user.status != UserStatus::Active {
            return Err(ApiError::AccountDisabled);
        }

        let member = self
            .members
            .find_by_user_id(user.id)
            .await?
            .map(|mw| mw.member);
        let (token, expires_at) =
            issue_token(user.id, user.role, &self.jwt_secret, self.token_ttl_secs)
                .map_err(|e| ApiError::Internal(e.into()))?;
        Ok(LoginOutput {
            user,
            member,
            token,
            expires_at,
        })
    }
}

// ── GetMe ────────────────────────────────────────────────────────────────────

pub struct MeOutput {
    pub user: User,
    /// Present only for MEMBER-role accounts.
    pub member: Option<Member>,
}

pub struct GetMeUseCase<U: UserRepository, M: MemberRepository> {
    pub users: U,
    pub members: M,
}

impl<U: UserRepository, M: MemberRepository> GetMeUseCase<U, M> {
    pub async fn execute(&self, user_id: Uuid) -> Result<MeOutput, ApiError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::NotFound("User"))?;
        let member = self
            .members
            .find_by_user_id(user_id)
            .await?
            .map(|mw| mw.member);
        Ok(MeOutput { user, member })
    }
}

// ── ChangePassword ───────────────────────────────────────────────────────────

pub struct ChangePasswordInput {
    pub current_password: String,
    pub new_password: String,
}

pub struct ChangePasswordUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> ChangePasswordUseCase<U> {
    pub async fn execute(&self, user_id: Uuid, input: ChangePasswordInput) -> Result<(), ApiError> {
        if input.new_password.len() < MIN_PASSWORD_LEN {
            return Err(ApiError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::NotFound("User"))?;

        let current_ok = bcrypt::verify(&input.current_password, &user.password_hash)
            .context("verify current password")?;
        if !current_ok {
            return Err(ApiError::Validation(
                "Current password is incorrect".to_owned(),
            ));
        }

        let hash =
            bcrypt::hash(&input.new_password, bcrypt::DEFAULT_COST).context("hash password")?;
        self.users.update_password(user_id, &hash).await
    }
}
