//! Domain types shared across the liftdesk workspace.
//!
//! This crate contains only pure types and arithmetic with no framework
//! dependencies.

pub mod checkin;
pub mod gallery;
pub mod member;
pub mod membership;
pub mod money;
pub mod pagination;
pub mod payment;
pub mod user;
pub mod workout;
