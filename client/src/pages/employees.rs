//! Employee directory with search, department filter and add dialog.

#[cfg(test)]
#[path = "employees_test.rs"]
mod employees_test;

use leptos::prelude::*;

use super::{load_feed, scoped_active_flag};
use crate::components::add_employee_dialog::AddEmployeeDialog;
use crate::components::authenticated_avatar::AuthenticatedAvatar;
use crate::net::client::ApiClient;
use crate::net::employees::{ALL_DEPARTMENTS, departments, fetch_employees, filter_employees};
use crate::net::types::{Employee, name_initials};
use crate::state::feed::FeedState;
use crate::util::active::ActiveFlag;

pub(crate) const EMPLOYEES_FAILED: &str = "Failed to load employees";

/// Up to two initials for an employee card.
pub fn employee_initials(name: &str) -> String {
    let initials = name_initials(name);
    if initials.is_empty() { "?".to_owned() } else { initials }
}

/// `"3 of 10 employees"` style counter.
pub fn result_count(shown: usize, total: usize) -> String {
    if shown == total { format!("{total} employees") } else { format!("{shown} of {total} employees") }
}

pub(crate) fn load_employees(client: &ApiClient, feed: RwSignal<FeedState<Employee>>, active: &ActiveFlag) {
    load_feed(client, feed, active, EMPLOYEES_FAILED, |client| async move {
        fetch_employees(&client).await
    });
}

/// One department entry in the filter dropdown.
fn department_option(department: String) -> impl IntoView {
    let label = department.clone();
    view! { <option value=department>{label}</option> }
}

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let feed = RwSignal::new(FeedState::<Employee>::default());
    let active = scoped_active_flag();
    let query = RwSignal::new(String::new());
    let department = RwSignal::new(ALL_DEPARTMENTS.to_owned());
    let show_add = RwSignal::new(false);

    load_employees(&client, feed, &active);
    let reload = Callback::new(move |()| load_employees(&client, feed, &active));

    let visible = Memo::new(move |_| {
        feed.with(|f| {
            query.with(|q| {
                department.with(|d| filter_employees(&f.items, q, d).into_iter().cloned().collect::<Vec<_>>())
            })
        })
    });
    let department_options = Memo::new(move |_| feed.with(|f| departments(&f.items)));

    view! {
        <div class="page employees-page">
            <div class="page__header">
                <div>
                    <h1>"Employees"</h1>
                    <p class="page__subtitle">
                        {move || result_count(visible.with(Vec::len), feed.with(|f| f.items.len()))}
                    </p>
                </div>
                <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                    "+ Add Employee"
                </button>
            </div>
            <div class="toolbar">
                <input
                    class="toolbar__search"
                    type="search"
                    placeholder="Search employees..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <select
                    class="toolbar__filter"
                    prop:value=move || department.get()
                    on:change=move |ev| department.set(event_target_value(&ev))
                >
                    <option value=ALL_DEPARTMENTS>"All Departments"</option>
                    {move || {
                        department_options
                            .get()
                            .into_iter()
                            .map(department_option)
                            .collect_view()
                    }}
                </select>
            </div>
            {move || feed.with(|f| f.error.clone()).map(|e| view! { <p class="notice notice--error">{e}</p> })}
            <Show
                when=move || !feed.with(|f| f.loading && f.items.is_empty())
                fallback=|| view! { <p class="card__empty">"Loading employees..."</p> }
            >
                <div class="employee-grid">
                    {move || visible.get().into_iter().map(|e| view! { <EmployeeCard employee=e/> }).collect_view()}
                </div>
                <Show when=move || !feed.with(|f| f.loading) && visible.with(Vec::is_empty)>
                    <p class="card__empty">"No employees found."</p>
                </Show>
            </Show>
            <AddEmployeeDialog open=show_add on_created=reload/>
        </div>
    }
}

#[component]
fn EmployeeCard(employee: Employee) -> impl IntoView {
    let initials = employee_initials(&employee.name);
    let image = employee.profile_image.clone();

    view! {
        <article class="card employee-card">
            <AuthenticatedAvatar path=Signal::stored(image) fallback=Signal::stored(initials) large=true/>
            <h3 class="employee-card__name">{employee.name}</h3>
            <p class="employee-card__designation">{employee.designation}</p>
            <dl class="employee-card__details">
                <dt>"Email"</dt>
                <dd>{employee.email}</dd>
                <dt>"Department"</dt>
                <dd>{employee.department}</dd>
                <dt>"Phone"</dt>
                <dd>{employee.phone_number}</dd>
            </dl>
        </article>
    }
}
