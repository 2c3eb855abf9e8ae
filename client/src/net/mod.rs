//! Networking: transport, API gateway client, and feature services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` moves bytes, `client` applies credential and auth-failure
//! policy, and `auth`/`attendance`/`leave`/`employees` are typed helpers for
//! each backend area. `types` defines the shared wire schema.

pub mod attendance;
pub mod auth;
pub mod client;
pub mod employees;
pub mod error;
pub mod leave;
pub mod policy;
pub mod transport;
pub mod types;
