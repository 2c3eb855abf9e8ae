//! Main authenticated layout: sidebar, header and routed content.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;

#[component]
pub fn MainLayout() -> impl IntoView {
    let collapsed = RwSignal::new(false);

    view! {
        <div class="main-layout" class:main-layout--collapsed=move || collapsed.get()>
            <Sidebar collapsed=collapsed/>
            <div class="main-layout__body">
                <Header/>
                <main class="main-layout__content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
