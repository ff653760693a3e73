//! JWT tokens and the axum extractors that enforce them.
//!
//! The service issues HS256 bearer tokens at login and validates them on
//! every authenticated route via [`extract::AuthUser`] /
//! [`extract::AdminUser`].

pub mod extract;
pub mod token;

pub use extract::{AdminUser, AuthUser, JwtSecret};
pub use token::{AuthError, JwtClaims, TokenInfo, issue_token, validate_token};
