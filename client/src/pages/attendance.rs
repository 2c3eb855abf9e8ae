//! Attendance page: today's clock card plus full history.

use leptos::prelude::*;

use super::{load_feed, scoped_active_flag};
use crate::components::attendance_history::AttendanceHistory;
use crate::components::attendance_widget::AttendanceWidget;
use crate::net::attendance::attendance_history;
use crate::net::client::ApiClient;
use crate::net::types::AttendanceRecord;
use crate::state::feed::FeedState;

pub(crate) const HISTORY_FAILED: &str = "Failed to load attendance history";

/// Kick off a load of the current user's attendance into `feed`.
pub(crate) fn load_attendance(
    client: &ApiClient,
    feed: RwSignal<FeedState<AttendanceRecord>>,
    active: &crate::util::active::ActiveFlag,
) {
    load_feed(client, feed, active, HISTORY_FAILED, |client| async move {
        attendance_history(&client).await
    });
}

#[component]
pub fn AttendancePage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let feed = RwSignal::new(FeedState::<AttendanceRecord>::default());
    let active = scoped_active_flag();

    load_attendance(&client, feed, &active);
    let reload = Callback::new(move |()| load_attendance(&client, feed, &active));

    view! {
        <div class="page attendance-page">
            <div class="page__header">
                <h1>"Attendance"</h1>
                <p class="page__subtitle">"Track your daily attendance and working hours."</p>
            </div>
            <div class="page__grid">
                <AttendanceWidget feed=feed on_changed=reload/>
                <AttendanceHistory feed=feed/>
            </div>
        </div>
    }
}
