//! Routed pages.
//!
//! `login` and `signup` are public. The rest render inside
//! `components::layout::MainLayout` behind the route guard.

pub mod attendance;
pub mod dashboard;
pub mod employees;
pub mod leave;
pub mod login;
pub mod profile;
pub mod signup;

use std::future::Future;

use leptos::prelude::*;

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::state::feed::FeedState;
use crate::util::active::ActiveFlag;

/// Start (re)loading `feed` from `fetch`. The result is dropped if `active`
/// has been cleared by the time it arrives.
pub(crate) fn load_feed<T, F, Fut>(
    client: &ApiClient,
    feed: RwSignal<FeedState<T>>,
    active: &ActiveFlag,
    fallback: &'static str,
    fetch: F,
) where
    T: Send + Sync + 'static,
    F: FnOnce(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    feed.update(FeedState::begin);

    #[cfg(feature = "hydrate")]
    {
        let pending = fetch(client.clone());
        let active = active.clone();
        leptos::task::spawn_local(async move {
            let result = pending.await;
            active.commit(|| feed.update(|f| f.settle(result, fallback)));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (client, active, fallback, fetch);
}

/// An [`ActiveFlag`] that is cleared when the current owner is cleaned up.
pub(crate) fn scoped_active_flag() -> ActiveFlag {
    let active = ActiveFlag::new();
    on_cleanup({
        let active = active.clone();
        move || active.deactivate()
    });
    active
}
