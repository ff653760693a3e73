pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod infra;
pub mod invoice;
pub mod response;
pub mod router;
pub mod scheduler;
pub mod state;
pub mod usecase;
