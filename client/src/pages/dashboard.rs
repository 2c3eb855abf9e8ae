//! Dashboard: headline counts, today's attendance and recent leave.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. It issues three independent loads on
//! mount (employees, own attendance, own leave); each settles into its own
//! feed and none waits on the others.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use super::attendance::load_attendance;
use super::employees::load_employees;
use super::leave::{LeaveHistory, load_leave};
use super::scoped_active_flag;
use crate::components::attendance_widget::AttendanceWidget;
use crate::net::client::ApiClient;
use crate::net::employees::departments;
use crate::net::types::{AttendanceRecord, Employee, LeaveRequest};
use crate::state::feed::FeedState;

/// Headline numbers derived from the employee list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectoryStats {
    pub employees: usize,
    pub departments: usize,
}

impl DirectoryStats {
    pub fn of(employees: &[Employee]) -> Self {
        Self { employees: employees.len(), departments: departments(employees).len() }
    }
}

/// Count shown on a stat card; `"-"` while its feed is still loading.
pub fn stat_text(loading: bool, value: usize) -> String {
    if loading { "-".to_owned() } else { value.to_string() }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let active = scoped_active_flag();
    let employees = RwSignal::new(FeedState::<Employee>::default());
    let attendance = RwSignal::new(FeedState::<AttendanceRecord>::default());
    let leave = RwSignal::new(FeedState::<LeaveRequest>::default());

    load_employees(&client, employees, &active);
    load_attendance(&client, attendance, &active);
    load_leave(&client, leave, &active);
    let reload_attendance = Callback::new(move |()| load_attendance(&client, attendance, &active));

    let stats = Memo::new(move |_| employees.with(|f| DirectoryStats::of(&f.items)));
    let loading = move || employees.with(|f| f.loading);

    view! {
        <div class="page dashboard-page">
            <div class="page__header">
                <h1>"Dashboard"</h1>
                <p class="page__subtitle">"Welcome back! Here's your workforce overview."</p>
            </div>
            {move || employees.with(|f| f.error.clone()).map(|e| view! { <p class="notice notice--error">{e}</p> })}
            <div class="stat-row">
                <div class="stat-card">
                    <span class="stat-card__label">"Total Employees"</span>
                    <span class="stat-card__value">{move || stat_text(loading(), stats.get().employees)}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Departments"</span>
                    <span class="stat-card__value">{move || stat_text(loading(), stats.get().departments)}</span>
                </div>
            </div>
            <div class="page__grid">
                <AttendanceWidget feed=attendance on_changed=reload_attendance/>
                <LeaveHistory feed=leave limit=3/>
            </div>
        </div>
    }
}
