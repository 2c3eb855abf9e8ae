//! Session and client-side state modules.
//!
//! DESIGN
//! ======
//! `credential` holds the bearer token, `session` and `claims` resolve the
//! current user from it, `guard` decides protected-route reachability, and
//! `auth` is the per-component view of a resolved user. `feed` is the
//! load progress of a fetched list.

pub mod auth;
pub mod claims;
pub mod credential;
pub mod feed;
pub mod guard;
pub mod session;
