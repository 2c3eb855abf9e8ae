//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::MainLayout;
use crate::components::protected_route::ProtectedRoute;
use crate::config::ApiConfig;
use crate::net::client::ApiClient;
use crate::pages::{
    attendance::AttendancePage, dashboard::DashboardPage, employees::EmployeesPage, leave::LeavePage,
    login::LoginPage, profile::ProfilePage, signup::SignUpPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the single [`ApiClient`] for the app and provides it, together with
/// its [`Session`](crate::state::credential::Session), as context. `/login`
/// and `/signup` are public; everything else sits behind [`ProtectedRoute`]
/// inside the [`MainLayout`] chrome.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let client = ApiClient::browser(ApiConfig::from_build_env());
    provide_context(client.session().clone());
    provide_context(client);

    view! {
        <Stylesheet id="leptos" href="/pkg/workforce.css"/>
        <Title text="WorkForce Pro"/>

        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignUpPage/>
                <ParentRoute path=StaticSegment("") view=ProtectedRoute>
                    <ParentRoute path=StaticSegment("") view=MainLayout>
                        <Route path=StaticSegment("") view=DashboardPage/>
                        <Route path=StaticSegment("employees") view=EmployeesPage/>
                        <Route path=StaticSegment("attendance") view=AttendancePage/>
                        <Route path=StaticSegment("leave") view=LeavePage/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                    </ParentRoute>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
