//! Table of the current user's attendance records.

use leptos::prelude::*;

use crate::net::attendance::time_of_day;
use crate::net::types::{AttendanceRecord, AttendanceStatus};
use crate::state::feed::FeedState;

#[component]
pub fn AttendanceHistory(feed: RwSignal<FeedState<AttendanceRecord>>) -> impl IntoView {
    view! {
        <section class="card attendance-history">
            <h2 class="card__title">"Attendance History"</h2>
            {move || feed.with(|f| f.error.clone()).map(|e| view! { <p class="notice notice--error">{e}</p> })}
            <Show
                when=move || !feed.with(FeedState::is_empty)
                fallback=|| view! { <p class="card__empty">"No attendance records found."</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Clock In"</th>
                            <th>"Clock Out"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || feed.with(|f| f.loading && f.items.is_empty())>
                            <tr>
                                <td colspan="4">"Loading..."</td>
                            </tr>
                        </Show>
                        {move || feed.with(|f| f.items.iter().cloned().map(history_row).collect_view())}
                    </tbody>
                </table>
            </Show>
        </section>
    }
}

fn history_row(record: AttendanceRecord) -> impl IntoView {
    let clock_in = time_of_day(&record.clock_in_time).to_owned();
    let clock_out = record
        .clock_out_time
        .as_deref()
        .filter(|t| !t.is_empty())
        .map_or_else(|| "--".to_owned(), |t| time_of_day(t).to_owned());
    let absent = record.status == AttendanceStatus::Absent;

    view! {
        <tr>
            <td>{record.date}</td>
            <td>{clock_in}</td>
            <td>{clock_out}</td>
            <td>
                <span class="badge" class:badge--warning=absent>{record.status.label()}</span>
            </td>
        </tr>
    }
}
