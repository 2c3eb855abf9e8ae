//! Route guard for authenticated views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected route in `app::App`. The guard renders nothing until
//! it has checked the credential store once after mount, then either renders
//! the nested route through `<Outlet/>` or replaces the history entry with
//! `/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::state::credential::Session;
use crate::state::guard::{GuardOutcome, GuardState};
use crate::util::navigation::LOGIN_PATH;

#[component]
pub fn ProtectedRoute() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let guard = RwSignal::new(GuardState::Pending);

    // Effects run after mount in the browser only, so SSR output is empty.
    Effect::new(move || {
        guard.update(|state| *state = state.resolve(session.is_authenticated()));
    });

    Effect::new(move || {
        if guard.get().outcome() == GuardOutcome::RedirectToLogin {
            log::debug!("no credential; redirecting to {LOGIN_PATH}");
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show when=move || guard.get().outcome() == GuardOutcome::RenderProtected>
            <Outlet/>
        </Show>
    }
}
