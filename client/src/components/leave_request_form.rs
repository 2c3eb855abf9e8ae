//! Leave request form card.

use leptos::prelude::*;

use crate::net::client::ApiClient;
use crate::net::leave::LeaveForm;
use crate::net::types::LeaveType;
use crate::util::active::ActiveFlag;

const SUBMIT_FAILED: &str = "Failed to submit leave request";

#[component]
pub fn LeaveRequestForm(#[prop(into)] on_submitted: Callback<()>) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let leave_type = RwSignal::new(LeaveType::default().as_str().to_owned());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<Result<String, String>>);
    let active = ActiveFlag::new();
    on_cleanup({
        let active = active.clone();
        move || active.deactivate()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = LeaveForm {
            leave_type: LeaveType::parse(&leave_type.get_untracked()),
            start_date: start_date.get_untracked(),
            end_date: end_date.get_untracked(),
            reason: reason.get_untracked(),
        };
        if let Err(err) = form.validate() {
            notice.set(Some(Err(err.user_message(SUBMIT_FAILED))));
            return;
        }
        busy.set(true);
        notice.set(None);

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let active = active.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::leave::apply_leave(&client, &form).await;
                active.commit(|| {
                    match result {
                        Ok(()) => {
                            notice.set(Some(Ok("Leave request submitted successfully!".to_owned())));
                            start_date.set(String::new());
                            end_date.set(String::new());
                            reason.set(String::new());
                            on_submitted.run(());
                        }
                        Err(err) => {
                            log::error!("leave request failed: {err}");
                            notice.set(Some(Err(err.user_message(SUBMIT_FAILED))));
                        }
                    }
                    busy.set(false);
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&client, &active, form, on_submitted);
    };

    view! {
        <section class="card leave-form">
            <h2 class="card__title">"Request Leave"</h2>
            <form class="form" on:submit=on_submit>
                <label class="form__field">
                    <span>"Leave Type"</span>
                    <select
                        prop:value=move || leave_type.get()
                        on:change=move |ev| leave_type.set(event_target_value(&ev))
                    >
                        <option value=LeaveType::FullDay.as_str()>"Full Day"</option>
                        <option value=LeaveType::HalfDay.as_str()>"Half Day"</option>
                    </select>
                </label>
                <div class="form__row">
                    <label class="form__field">
                        <span>"Start Date"</span>
                        <input
                            type="date"
                            prop:value=move || start_date.get()
                            on:input=move |ev| start_date.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        <span>"End Date"</span>
                        <input
                            type="date"
                            prop:value=move || end_date.get()
                            on:input=move |ev| end_date.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="form__field">
                    <span>"Reason"</span>
                    <textarea
                        placeholder="Please provide a reason for your leave..."
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                    ></textarea>
                </label>
                {move || {
                    notice
                        .get()
                        .map(|n| match n {
                            Ok(text) => view! { <p class="notice notice--success">{text}</p> }.into_any(),
                            Err(text) => view! { <p class="notice notice--error">{text}</p> }.into_any(),
                        })
                }}
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Submit Request" }}
                </button>
            </form>
        </section>
    }
}
