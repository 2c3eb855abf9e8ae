//! Email + password login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only place a credential is created. The auth-failure policy sends users
//! here with `?session_expired=true`, which shows a notice above the form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::util::navigation::is_session_expired_query;

const LOGIN_FAILED: &str = "Incorrect email or password";

/// Inline text for a failed login. A token-less success response keeps its
/// own message; everything else prefers the server text.
pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Decode(text) => text.clone(),
        other => other.user_message(LOGIN_FAILED),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let location = use_location();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let session_expired = move || location.search.with(|q| is_session_expired_query(q));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if let Err(err) = crate::net::auth::validate_login_input(&email_value, &password_value) {
            info.set(login_error_message(&err));
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::auth::login(&client, &email_value, &password_value).await {
                    Ok(()) => navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() }),
                    Err(err) => {
                        log::error!("login failed: {err}");
                        info.set(login_error_message(&err));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&client, &navigate, NavigateOptions::default());
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"WorkForce Pro"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <Show when=session_expired>
                    <p class="notice notice--warning">"Your session has expired. Please sign in again."</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <div class="login-input__group">
                        <input
                            class="login-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            class="btn login-input__toggle"
                            type="button"
                            on:click=move |_| show_password.update(|s| *s = !*s)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Don't have an account? "
                    <A href="/signup">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
