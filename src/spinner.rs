use yew::prelude::*;

#[function_component(Spinner)]
pub(crate) fn spinner() -> Html {
    html! {
        <div class="spinner" role="status" aria-label="Loading"></div>
    }
}
