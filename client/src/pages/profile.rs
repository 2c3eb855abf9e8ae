//! Current user's profile page.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use super::scoped_active_flag;
use crate::net::client::ApiClient;
use crate::net::types::UserIdentity;
use crate::state::auth::AuthState;
use crate::util::active::ActiveFlag;
use crate::util::image_url::image_url;

/// `value`, or `"N/A"` when missing or blank.
pub fn or_na(value: Option<&str>) -> String {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or("N/A").to_owned()
}

/// Calendar date of an ISO 8601 timestamp.
pub fn member_since(created_at: Option<&str>) -> Option<String> {
    let raw = created_at?.trim();
    let date = raw.split_once('T').map_or(raw, |(d, _)| d);
    (!date.is_empty()).then(|| date.to_owned())
}

fn resolve_into(client: &ApiClient, auth: RwSignal<AuthState>, active: &ActiveFlag) {
    auth.set(AuthState::loading());

    #[cfg(feature = "hydrate")]
    {
        let resolver = client.resolver();
        let active = active.clone();
        leptos::task::spawn_local(async move {
            let result = resolver.resolve_current_user().await;
            if let Err(err) = &result {
                log::error!("failed to fetch profile: {err}");
            }
            active.commit(|| auth.set(AuthState::settled(result)));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (client, active);
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let auth = RwSignal::new(AuthState::loading());
    let active = scoped_active_flag();
    let base_url = client.config().base_url.clone();

    resolve_into(&client, auth, &active);
    let retry = move |_: leptos::ev::MouseEvent| resolve_into(&client, auth, &active);

    view! {
        <div class="page profile-page">
            {move || {
                let state = auth.get();
                if state.loading {
                    return view! { <p class="card__empty">"Loading profile..."</p> }.into_any();
                }
                if let Some(error) = state.error {
                    return view! {
                        <div class="card profile-page__error">
                            <h2>"Error"</h2>
                            <p>{error}</p>
                        </div>
                    }
                        .into_any();
                }
                match state.user {
                    Some(user) => {
                        let src = image_url(&base_url, user.profile_image.as_deref());
                        profile_view(src, user).into_any()
                    }
                    None => ().into_any(),
                }
            }}
            <Show when=move || auth.with(|a| a.error.is_some())>
                <button class="btn" on:click=retry.clone()>"Try Again"</button>
            </Show>
        </div>
    }
}

fn profile_view(src: String, user: UserIdentity) -> impl IntoView {
    let initials = user.initials();
    let since = member_since(user.created_at.as_deref());

    view! {
        <section class="card profile-page__header">
            <img class="avatar avatar--large" src=src alt=initials/>
            <div class="profile-page__identity">
                <h1>{user.name.clone()}</h1>
                <p class="profile-page__email">{user.email.clone()}</p>
                <span class="badge">{user.role.clone()}</span>
                {user.designation.clone().map(|d| view! { <span class="badge badge--outline">{d}</span> })}
            </div>
        </section>
        <div class="page__grid">
            <section class="card">
                <h2 class="card__title">"Personal Information"</h2>
                <dl class="profile-page__details">
                    <dt>"Full Name:"</dt>
                    <dd>{user.name.clone()}</dd>
                    <dt>"Email:"</dt>
                    <dd>{user.email.clone()}</dd>
                    <dt>"Phone:"</dt>
                    <dd>{or_na(user.phone_number.as_deref())}</dd>
                </dl>
            </section>
            <section class="card">
                <h2 class="card__title">"Employment Details"</h2>
                <dl class="profile-page__details">
                    <dt>"Department:"</dt>
                    <dd>{or_na(user.department.as_deref())}</dd>
                    <dt>"Designation:"</dt>
                    <dd>{or_na(user.designation.as_deref())}</dd>
                    <dt>"Employee ID:"</dt>
                    <dd class="mono">{format!("#{}", user.id)}</dd>
                    <dt>"Member since:"</dt>
                    <dd>{or_na(since.as_deref())}</dd>
                </dl>
            </section>
        </div>
    }
}
