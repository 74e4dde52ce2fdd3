use yew::prelude::*;

use crate::components::calendar::Calendar;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="container">
            <h2>{ "Job Events" }</h2>
            <Calendar />
        </div>
    }
}
