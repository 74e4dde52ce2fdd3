use shared::api::{EventsByDate, FetchError};
use shared::grid::{build_grid, GridCell, VisibleMonth};
use yew::prelude::*;

use crate::components::day_cell::DayCell;
use crate::services::api::ApiService;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[function_component(Calendar)]
pub fn calendar() -> Html {
    let visible_month = use_state(|| VisibleMonth::new(2025, 0));
    let events = use_state(EventsByDate::default);
    let loading = use_state(|| true);
    let error = use_state(|| None::<FetchError>);
    // Issued-request counter; only the latest request may commit its result,
    // so a slow response for a month the user already left is dropped.
    let request_seq = use_mut_ref(|| 0_u64);

    {
        let events = events.clone();
        let loading = loading.clone();
        let error = error.clone();
        let request_seq = request_seq.clone();

        use_effect_with(*visible_month, move |month| {
            let month = *month;
            let seq = {
                let mut counter = request_seq.borrow_mut();
                *counter += 1;
                *counter
            };

            loading.set(true);
            error.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiService::fetch_job_events(month).await;

                if *request_seq.borrow() != seq {
                    tracing::debug!(seq, month = %month, "dropped stale job-events response");
                    return;
                }

                match result {
                    Ok(fetched) => events.set(fetched),
                    Err(err) => {
                        tracing::error!(error = %err, month = %month, "failed to fetch job events");
                        error.set(Some(err));
                    }
                }
                loading.set(false);
            });

            || ()
        });
    }

    let on_prev = {
        let visible_month = visible_month.clone();
        Callback::from(move |_| {
            let next = visible_month.advanced(-1);
            tracing::debug!(to = %next, "calendar moved backward");
            visible_month.set(next);
        })
    };

    let on_next = {
        let visible_month = visible_month.clone();
        Callback::from(move |_| {
            let next = visible_month.advanced(1);
            tracing::debug!(to = %next, "calendar moved forward");
            visible_month.set(next);
        })
    };

    let grid = build_grid(visible_month.year, visible_month.month, &events);

    html! {
        <div class="card calendar">
            <div class="calendar-header">
                <h2>{ visible_month.to_string() }</h2>
                <div class="calendar-nav">
                    <button class="btn" disabled={*loading} onclick={on_prev}>{ "‹" }</button>
                    <button class="btn" disabled={*loading} onclick={on_next}>{ "›" }</button>
                </div>
            </div>

            if *loading {
                <div class="loading">{ "Loading events..." }</div>
            } else {
                if let Some(error) = &*error {
                    <div class="fetch-error">{ format!("Error: {}", error) }</div>
                } else {
                    <>
                    <div class="weekday-row">
                        { for WEEKDAYS.iter().map(|day| html! {
                            <div class="weekday">{ *day }</div>
                        })}
                    </div>

                    <div class="calendar-grid">
                        { for grid.iter().enumerate().map(|(idx, cell)| match cell {
                            GridCell::Blank => html! {
                                <div key={format!("empty-{}", idx)} class="day-cell blank"></div>
                            },
                            GridCell::Day { day, date_key, events } => html! {
                                <DayCell key={date_key.clone()} day={*day} events={events.clone()} />
                            },
                        })}
                    </div>

                    <div class="legend">
                        <div class="legend-entry">
                            <span class="legend-swatch badge-internship"></span>
                            <span>{ "Internships" }</span>
                        </div>
                        <div class="legend-entry">
                            <span class="legend-swatch badge-placement"></span>
                            <span>{ "Placements" }</span>
                        </div>
                    </div>
                    </>
                }
            }
        </div>
    }
}
