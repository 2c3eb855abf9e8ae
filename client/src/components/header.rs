//! Top bar showing the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header resolves the current user itself on mount through
//! `SessionResolver`. Resolution never triggers the auth-failure redirect;
//! when the profile endpoint fails the claims in the token fill in.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::authenticated_avatar::AuthenticatedAvatar;
use crate::net::client::ApiClient;
use crate::state::auth::AuthState;
use crate::util::active::ActiveFlag;

#[component]
pub fn Header() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let auth = RwSignal::new(AuthState::loading());
    let active = ActiveFlag::new();
    on_cleanup({
        let active = active.clone();
        move || active.deactivate()
    });

    #[cfg(feature = "hydrate")]
    {
        let resolver = client.resolver();
        leptos::task::spawn_local(async move {
            let result = resolver.resolve_current_user().await;
            active.commit(|| auth.set(AuthState::settled(result)));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (&client, active);

    let role = move || auth.with(|a| a.user.as_ref().map(|u| u.role.clone()).unwrap_or_default());
    let initials = move || auth.with(|a| a.user.as_ref().map_or_else(|| "U".to_owned(), |u| u.initials()));
    let image = Signal::derive(move || auth.with(|a| a.user.as_ref().and_then(|u| u.profile_image.clone())));

    view! {
        <header class="header">
            <div class="header__spacer"></div>
            <A href="/profile" attr:class="header__user">
                <AuthenticatedAvatar path=image fallback=Signal::derive(initials)/>
                <div class="header__identity">
                    <p class="header__name">
                        {move || if auth.with(|a| a.loading) { "Loading...".to_owned() } else { auth.with(AuthState::display_name) }}
                    </p>
                    <p class="header__role">{role}</p>
                </div>
            </A>
        </header>
    }
}
