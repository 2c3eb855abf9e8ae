//! Leave management page: request form, status summary and history.

#[cfg(test)]
#[path = "leave_test.rs"]
mod leave_test;

use leptos::prelude::*;

use super::{load_feed, scoped_active_flag};
use crate::components::leave_request_form::LeaveRequestForm;
use crate::net::client::ApiClient;
use crate::net::leave::leave_history;
use crate::net::types::{LeaveRequest, LeaveStatus, LeaveType};
use crate::state::feed::FeedState;
use crate::util::active::ActiveFlag;

pub(crate) const LEAVE_HISTORY_FAILED: &str = "Failed to load leave history";

/// Request counts per status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LeaveSummary {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl LeaveSummary {
    pub fn of(requests: &[LeaveRequest]) -> Self {
        requests.iter().fold(Self::default(), |mut acc, r| {
            match r.status {
                LeaveStatus::Pending => acc.pending += 1,
                LeaveStatus::Approved => acc.approved += 1,
                LeaveStatus::Rejected => acc.rejected += 1,
                LeaveStatus::Unknown => {}
            }
            acc
        })
    }
}

/// Display label for a leave type.
pub fn leave_type_label(leave_type: LeaveType) -> &'static str {
    match leave_type {
        LeaveType::FullDay => "Full Day",
        LeaveType::HalfDay => "Half Day",
    }
}

/// `start` alone for single-day leave, otherwise `start → end`.
pub fn date_span(start: &str, end: &str) -> String {
    if start == end { start.to_owned() } else { format!("{start} → {end}") }
}

pub(crate) fn load_leave(client: &ApiClient, feed: RwSignal<FeedState<LeaveRequest>>, active: &ActiveFlag) {
    load_feed(client, feed, active, LEAVE_HISTORY_FAILED, |client| async move {
        leave_history(&client).await
    });
}

#[component]
pub fn LeavePage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let feed = RwSignal::new(FeedState::<LeaveRequest>::default());
    let active = scoped_active_flag();

    load_leave(&client, feed, &active);
    let reload = Callback::new(move |()| load_leave(&client, feed, &active));
    let summary = Memo::new(move |_| feed.with(|f| LeaveSummary::of(&f.items)));

    view! {
        <div class="page leave-page">
            <div class="page__header">
                <h1>"Leave Management"</h1>
                <p class="page__subtitle">"Request time off and track your leave status."</p>
            </div>
            <div class="stat-row">
                <div class="stat-card">
                    <span class="stat-card__label">"Pending"</span>
                    <span class="stat-card__value">{move || summary.get().pending}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Approved"</span>
                    <span class="stat-card__value">{move || summary.get().approved}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Rejected"</span>
                    <span class="stat-card__value">{move || summary.get().rejected}</span>
                </div>
            </div>
            <div class="page__grid">
                <LeaveRequestForm on_submitted=reload/>
                <LeaveHistory feed=feed/>
            </div>
        </div>
    }
}

#[component]
pub fn LeaveHistory(feed: RwSignal<FeedState<LeaveRequest>>, #[prop(optional)] limit: Option<usize>) -> impl IntoView {
    view! {
        <section class="card leave-history">
            <h2 class="card__title">"My Leave Requests"</h2>
            {move || feed.with(|f| f.error.clone()).map(|e| view! { <p class="notice notice--error">{e}</p> })}
            <Show when=move || feed.with(|f| f.loading && f.items.is_empty())>
                <p class="card__empty">"Loading..."</p>
            </Show>
            <Show when=move || feed.with(FeedState::is_empty)>
                <p class="card__empty">"No leave requests yet."</p>
            </Show>
            <ul class="leave-history__list">
                {move || {
                    feed.with(|f| {
                        f.items
                            .iter()
                            .take(limit.unwrap_or(usize::MAX))
                            .map(|r| {
                                let status = r.status;
                                view! {
                                    <li class="leave-history__item">
                                        <div>
                                            <p class="leave-history__type">{leave_type_label(r.leave_type)}</p>
                                            <p class="leave-history__dates">{date_span(&r.start_date, &r.end_date)}</p>
                                            <p class="leave-history__reason">{r.reason.clone()}</p>
                                        </div>
                                        <span
                                            class="badge"
                                            class:badge--success={status == LeaveStatus::Approved}
                                            class:badge--danger={status == LeaveStatus::Rejected}
                                        >
                                            {status.label()}
                                        </span>
                                    </li>
                                }
                            })
                            .collect_view()
                    })
                }}
            </ul>
        </section>
    }
}
