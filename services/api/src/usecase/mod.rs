pub mod attendance;
pub mod auth;
pub mod dashboard;
pub mod gallery;
pub mod member;
pub mod payment;
pub mod plan;
pub mod progress;
pub mod settings;
pub mod workout;
