//! Account registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::auth::{SignUpForm, validate_sign_up};
use crate::net::client::ApiClient;
use crate::util::navigation::LOGIN_PATH;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let agree_terms = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = SignUpForm {
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            agree_terms: agree_terms.get_untracked(),
        };
        if let Err(err) = validate_sign_up(&form) {
            info.set(err.user_message("Registration failed"));
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::auth::register(&client, &form).await {
                    Ok(()) => navigate(LOGIN_PATH, NavigateOptions::default()),
                    Err(err) => {
                        log::error!("registration failed: {err}");
                        info.set(err.user_message("Registration failed. Please try again."));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&client, &navigate, form, NavigateOptions::default());
    };

    let text_input = move |kind: &'static str, placeholder: &'static str, value: RwSignal<String>| {
        view! {
            <input
                class="login-input"
                type=kind
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create Account"</h1>
                <p class="login-card__subtitle">"Join WorkForce Pro"</p>
                <form class="login-form" on:submit=on_submit>
                    {text_input("text", "Full Name", full_name)}
                    {text_input("email", "Email", email)}
                    {text_input("password", "Password", password)}
                    {text_input("password", "Confirm Password", confirm_password)}
                    <label class="login-checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || agree_terms.get()
                            on:change=move |ev| agree_terms.set(event_target_checked(&ev))
                        />
                        <span>"I agree to the Terms & Conditions"</span>
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already have an account? "
                    <A href=LOGIN_PATH>"Login"</A>
                </p>
            </div>
        </div>
    }
}
