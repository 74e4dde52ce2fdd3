use shared::models::JobEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DayCellProps {
    pub day: u32,
    pub events: Vec<JobEvent>,
}

#[function_component(DayCell)]
pub fn day_cell(props: &DayCellProps) -> Html {
    html! {
        <div class="day-cell">
            <div class="day-number">{ props.day }</div>
            { for props.events.iter().map(|event| html! {
                <div class={format!("event-badge badge-{}", event.kind.as_str())}>
                    <div class="event-company">{ &event.company }</div>
                    <div>{ event.kind.as_str() }</div>
                    <div>{ &event.role }</div>
                    <div>{ &event.time }</div>
                </div>
            })}
        </div>
    }
}
