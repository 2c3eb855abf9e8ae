//! Modal form for adding an employee with an optional profile image.

use leptos::prelude::*;

use crate::net::client::ApiClient;
use crate::net::employees::{EmployeeForm, ImageUpload};
use crate::util::active::ActiveFlag;

const ADD_FAILED: &str = "Failed to add employee. Please try again.";

/// `(value, label)` pairs for the select fields.
const DESIGNATIONS: &[(&str, &str)] = &[
    ("product-designer", "Product Designer"),
    ("software-engineer", "Software Engineer"),
    ("project-manager", "Project Manager"),
    ("marketing-manager", "Marketing Manager"),
    ("hr-specialist", "HR Specialist"),
    ("financial-analyst", "Financial Analyst"),
];

const DEPARTMENTS: &[(&str, &str)] = &[
    ("design", "Design Team"),
    ("development", "Development Team"),
    ("marketing", "Marketing Team"),
    ("hr", "HR Team"),
    ("finance", "Finance Team"),
    ("sales", "Sales Team"),
];

const SHIFTS: &[(&str, &str)] = &[
    ("morning", "9:00 AM - 5:00 PM"),
    ("day", "11:00 AM - 7:00 PM"),
    ("evening", "2:00 PM - 10:00 PM"),
    ("night", "10:00 PM - 6:00 AM"),
];

#[component]
pub fn AddEmployeeDialog(open: RwSignal<bool>, #[prop(into)] on_created: Callback<()>) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let id_number = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let designation = RwSignal::new(String::new());
    let department = RwSignal::new(String::new());
    let shift = RwSignal::new(String::new());
    let image = RwSignal::new(None::<ImageUpload>);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let active = ActiveFlag::new();
    on_cleanup({
        let active = active.clone();
        move || active.deactivate()
    });

    let close = move || {
        open.set(false);
        for field in [full_name, email, id_number, phone_number, designation, department, shift] {
            field.set(String::new());
        }
        image.set(None);
        error.set(None);
    };

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = crate::util::file_input::selected_file(&ev) else {
                image.set(None);
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::util::file_input::read_upload(file).await {
                    Ok(upload) => image.set(Some(upload)),
                    Err(err) => {
                        log::error!("failed to read selected image: {err}");
                        error.set(Some("Could not read the selected image.".to_owned()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let fields = EmployeeForm {
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            id_number: id_number.get_untracked(),
            phone_number: phone_number.get_untracked(),
            designation: designation.get_untracked(),
            department: department.get_untracked(),
            shift: shift.get_untracked(),
        };
        if let Err(err) = fields.validate() {
            error.set(Some(err.user_message(ADD_FAILED)));
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let active = active.clone();
            let upload = image.get_untracked();
            leptos::task::spawn_local(async move {
                let result = crate::net::employees::add_employee(&client, &fields, upload).await;
                active.commit(|| {
                    busy.set(false);
                    match result {
                        Ok(created) => {
                            log::debug!("employee created: {:?}", created.id);
                            close();
                            on_created.run(());
                        }
                        Err(err) => {
                            log::error!("failed to add employee: {err}");
                            error.set(Some(err.user_message(ADD_FAILED)));
                        }
                    }
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&client, &active, fields, on_created);
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <h2 class="dialog__title">"Add New Employee"</h2>
                    <p class="dialog__description">"Fill in the details to add a new team member."</p>
                    <form class="form" on:submit=on_submit.clone()>
                        <label class="form__field">
                            <span>"Profile Image"</span>
                            <input type="file" accept="image/*" on:change=on_file/>
                        </label>
                        {text_field("Full name", "Enter full name", "text", full_name)}
                        {text_field("Email", "Enter email address", "email", email)}
                        <div class="form__row">
                            {text_field("ID Number", "Enter ID number", "text", id_number)}
                            {text_field("Phone Number", "Enter phone number", "tel", phone_number)}
                        </div>
                        <div class="form__row">
                            {select_field("Designation", DESIGNATIONS, designation)}
                            {select_field("Department", DEPARTMENTS, department)}
                        </div>
                        {select_field("Shift", SHIFTS, shift)}
                        {move || error.get().map(|e| view! { <p class="notice notice--error">{e}</p> })}
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=move |_| close()>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                {move || if busy.get() { "Adding..." } else { "Add Employee" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

fn text_field(
    label: &'static str,
    placeholder: &'static str,
    kind: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="form__field">
            <span>{label}</span>
            <input
                type=kind
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

fn select_field(
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
    value: RwSignal<String>,
) -> impl IntoView {
    let options = options
        .iter()
        .map(|&(key, text)| view! { <option value=key>{text}</option> })
        .collect_view();

    view! {
        <label class="form__field">
            <span>{label}</span>
            <select prop:value=move || value.get() on:change=move |ev| value.set(event_target_value(&ev))>
                <option value="">"Select"</option>
                {options}
            </select>
        </label>
    }
}
