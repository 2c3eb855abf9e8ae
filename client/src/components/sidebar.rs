//! Collapsible navigation sidebar.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::net::auth::logout;
use crate::net::client::ApiClient;
use crate::util::navigation::LocationNavigator;

/// `(label, path)` for each sidebar entry.
const MENU_ITEMS: &[(&str, &str)] = &[
    ("Dashboard", "/"),
    ("Employees", "/employees"),
    ("Attendance", "/attendance"),
    ("Leave Management", "/leave"),
    ("Profile", "/profile"),
];

#[component]
pub fn Sidebar(collapsed: RwSignal<bool>) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let location = use_location();

    let items = MENU_ITEMS
        .iter()
        .map(|&(label, path)| {
            let is_active = move || location.pathname.get() == path;
            view! {
                <A href=path attr:class="sidebar-item" attr:title=label>
                    <span class="sidebar-item__marker" class:sidebar-item__marker--active=is_active></span>
                    <Show when=move || !collapsed.get()>
                        <span class="sidebar-item__label">{label}</span>
                    </Show>
                </A>
            }
        })
        .collect_view();

    view! {
        <aside class="sidebar" class:sidebar--collapsed=move || collapsed.get()>
            <div class="sidebar__brand">
                <A href="/" attr:class="sidebar__logo">
                    <span class="sidebar__logo-mark">"W"</span>
                    <Show when=move || !collapsed.get()>
                        <span class="sidebar__logo-text">"WorkForce Pro"</span>
                    </Show>
                </A>
            </div>
            <nav class="sidebar__nav">{items}</nav>
            <div class="sidebar__footer">
                <button class="btn sidebar__logout" on:click=move |_| logout(&client, &LocationNavigator)>
                    "Logout"
                </button>
                <button
                    class="btn sidebar__toggle"
                    title="Toggle sidebar"
                    on:click=move |_| collapsed.update(|c| *c = !*c)
                >
                    {move || if collapsed.get() { "»" } else { "«" }}
                </button>
            </div>
        </aside>
    }
}
