//! The grid's core identity and access management subsystem: a principal
//! model, an authenticator chain, an immutable group→role snapshot cache, a
//! read-only policy evaluator, and the facade binding them together.

pub mod adapters;
pub mod config;
pub mod core;
pub mod telemetry;
