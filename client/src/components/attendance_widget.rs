//! Today's clock-in/clock-out card.

use leptos::prelude::*;

use crate::net::attendance::{ClockAction, ClockStatus, time_of_day, today_record, today_utc};
use crate::net::client::ApiClient;
use crate::net::types::AttendanceRecord;
use crate::state::feed::FeedState;
use crate::util::active::ActiveFlag;

/// Shows today's status from `feed` and offers the one valid clock action.
/// `on_changed` fires after a successful clock-in or clock-out so the owner
/// can reload the feed.
#[component]
pub fn AttendanceWidget(
    feed: RwSignal<FeedState<AttendanceRecord>>,
    #[prop(into)] on_changed: Callback<()>,
) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<Result<String, String>>);
    let active = ActiveFlag::new();
    on_cleanup({
        let active = active.clone();
        move || active.deactivate()
    });

    let today = today_utc();
    let record = Memo::new(move |_| feed.with(|f| today_record(&f.items, &today).cloned()));
    let status = move || ClockStatus::of(record.get().as_ref());

    let run = Callback::new(move |action: ClockAction| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        notice.set(None);

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let active = active.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::attendance::clock(&client, action).await;
                active.commit(|| {
                    match result {
                        Ok(()) => {
                            notice.set(Some(Ok(action.success_message().to_owned())));
                            on_changed.run(());
                        }
                        Err(err) => {
                            log::warn!("{}: {err}", action.failure_message());
                            notice.set(Some(Err(err.user_message(action.failure_message()))));
                        }
                    }
                    busy.set(false);
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&client, &active, action, on_changed);
    });

    view! {
        <section class="card attendance-widget">
            <h2 class="card__title">"Today's Attendance"</h2>
            <p class="attendance-widget__status">
                "Status: "
                <span class="badge" class:badge--success=move || status() == ClockStatus::CheckedIn>
                    {move || status().label()}
                </span>
            </p>
            {move || {
                record
                    .get()
                    .map(|r| {
                        let clock_in = time_of_day(&r.clock_in_time).to_owned();
                        let clock_out = r.clock_out_time.as_deref().map(|t| time_of_day(t).to_owned());
                        view! {
                            <p class="attendance-widget__times">
                                "In: " {clock_in}
                                {clock_out.map(|t| view! { <span>" · Out: " {t}</span> })}
                            </p>
                        }
                    })
            }}
            {move || {
                notice
                    .get()
                    .map(|n| match n {
                        Ok(text) => view! { <p class="notice notice--success">{text}</p> }.into_any(),
                        Err(text) => view! { <p class="notice notice--error">{text}</p> }.into_any(),
                    })
            }}
            <div class="attendance-widget__actions">
                <button
                    class="btn btn--primary"
                    disabled=move || busy.get() || feed.with(|f| f.loading) || !status().can_clock_in()
                    on:click=move |_| run.run(ClockAction::In)
                >
                    "Clock In"
                </button>
                <button
                    class="btn"
                    disabled=move || busy.get() || feed.with(|f| f.loading) || !status().can_clock_out()
                    on:click=move |_| run.run(ClockAction::Out)
                >
                    "Clock Out"
                </button>
            </div>
        </section>
    }
}
