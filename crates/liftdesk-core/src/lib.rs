//! Shared service plumbing: tracing setup, request-id middleware, liveness
//! probes, and wire-format serde helpers.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
