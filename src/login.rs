use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;

use picboard_core::Route;

use crate::app_router;

/// Sign-in form. Nothing is checked and nothing is carried over to the gallery.
#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);

    let on_username = {
        let username = username.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            username.set(input.value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            password.set(input.value());
        })
    };
    let onsubmit = Callback::from(|event: SubmitEvent| {
        event.prevent_default();
        app_router::navigate(Route::Main);
    });

    html! {
        <main class="page">
            <form class="login" {onsubmit}>
                <h1>{"Sign in"}</h1>
                <input
                    name="username"
                    placeholder="Username"
                    autocomplete="username"
                    value={(*username).clone()}
                    oninput={on_username}
                />
                <input
                    name="password"
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    value={(*password).clone()}
                    oninput={on_password}
                />
                <button type="submit">{"Log in"}</button>
            </form>
        </main>
    }
}
