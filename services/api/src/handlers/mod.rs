pub mod attendance;
pub mod auth;
pub mod common;
pub mod dashboard;
pub mod gallery;
pub mod health;
pub mod members;
pub mod payments;
pub mod plans;
pub mod progress;
pub mod settings;
pub mod workouts;
