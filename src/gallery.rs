use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement, InputEvent, KeyboardEvent, PointerEvent};
use yew::prelude::*;

use picboard_core::{DragSession, GalleryConfig, GridController, Route, SearchState};

use crate::app_router;
use crate::app_runtime;
use crate::live_state::{use_live_state, LiveState};
use crate::spinner::Spinner;
use crate::tile::{Tile, TILE_ID_ATTR};
use crate::toast::Toaster;

fn initial_grid() -> GridController {
    match app_runtime::with_config(GalleryConfig::grid_controller) {
        Ok(grid) => grid,
        Err(err) => {
            gloo::console::warn!("custom catalog rejected, using built-in images", err.to_string());
            GridController::with_default_catalog()
        }
    }
}

fn tile_id_at(x: f32, y: f32) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.element_from_point(x, y)?;
    let tile = element.closest(&format!("[{TILE_ID_ATTR}]")).ok()??;
    tile.get_attribute(TILE_ID_ATTR)
}

fn capture_options() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Capture,
        passive: false,
    }
}

fn drag_listeners(drag: LiveState<DragSession>, grid: LiveState<GridController>) -> Vec<EventListener> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let move_drag = drag.clone();
    let move_listener = EventListener::new_with_options(
        &window,
        "pointermove",
        capture_options(),
        move |event: &Event| {
            let Some(event) = event.dyn_ref::<PointerEvent>() else {
                return;
            };
            if move_drag.with(|session| session.pointer_id()) != Some(event.pointer_id()) {
                return;
            }
            let x = event.client_x() as f32;
            let y = event.client_y() as f32;
            move_drag.update(|session| {
                if session.motion(event.pointer_id(), x, y) {
                    session.hover(tile_id_at(x, y).as_deref());
                }
            });
        },
    );
    let up_drag = drag.clone();
    let up_listener = EventListener::new_with_options(
        &window,
        "pointerup",
        capture_options(),
        move |event: &Event| {
            let Some(event) = event.dyn_ref::<PointerEvent>() else {
                return;
            };
            if up_drag.with(|session| session.pointer_id()) != Some(event.pointer_id()) {
                return;
            }
            let Some(outcome) = up_drag.update(|session| session.release(event.pointer_id()))
            else {
                return;
            };
            let moved = grid.update(|grid| grid.reorder(&outcome.source, &outcome.target));
            if moved {
                gloo::console::log!("reorder", outcome.source, "->", outcome.target);
            }
        },
    );
    let cancel_drag = drag.clone();
    let cancel_listener = EventListener::new(&window, "pointercancel", move |_event: &Event| {
        if cancel_drag.with(|session| session.source().is_some()) {
            cancel_drag.update(DragSession::cancel);
        }
    });
    let key_listener = EventListener::new(&window, "keydown", move |event: &Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if event.key() == "Escape" && drag.with(DragSession::is_dragging) {
            drag.update(DragSession::cancel);
        }
    });
    vec![move_listener, up_listener, cancel_listener, key_listener]
}

#[function_component(GalleryPage)]
pub(crate) fn gallery_page() -> Html {
    let grid = use_live_state(initial_grid);
    let search = use_live_state(|| app_runtime::with_config(SearchState::new));
    let drag = use_live_state(|| {
        DragSession::new(app_runtime::with_config(|config| config.drag_activation_px))
    });
    let toaster = use_context::<Toaster>();

    {
        let drag = drag.clone();
        let grid = grid.clone();
        use_effect_with((), move |_| {
            let listeners = drag_listeners(drag, grid);
            move || drop(listeners)
        });
    }

    let on_press = {
        let drag = drag.clone();
        Callback::from(move |(id, event): (String, PointerEvent)| {
            let x = event.client_x() as f32;
            let y = event.client_y() as f32;
            drag.update(|session| session.press(&id, event.pointer_id(), x, y));
        })
    };

    let oninput = {
        let search = search.clone();
        let grid = grid.clone();
        Callback::from(move |event: InputEvent| {
            let Some(input) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let value = input.value();
            let clear = search.update(|state| {
                grid.with(|grid| match toaster.as_ref() {
                    Some(toaster) => state.input(&value, grid, toaster),
                    None => state.input(&value, grid, &|notice: &picboard_core::Notice| {
                        gloo::console::warn!(notice.message.clone());
                    }),
                })
            });
            let search = search.clone();
            Timeout::new(clear.delay_ms, move || {
                search.update(|state| state.clear_loading(clear));
            })
            .forget();
        })
    };

    let on_logout = Callback::from(|_: MouseEvent| app_router::navigate(Route::Login));

    let search_value = search.snapshot();
    let session = drag.snapshot();
    let body = if search_value.is_loading() {
        html! { <Spinner /> }
    } else {
        grid.snapshot()
            .filtered_view(search_value.query())
            .map(|record| {
                let dragging = session.is_dragging() && session.source() == Some(record.id.as_str());
                let over = session.is_dragging()
                    && !dragging
                    && session.over() == Some(record.id.as_str());
                let offset = if dragging { session.offset() } else { (0.0, 0.0) };
                html! {
                    <Tile
                        key={record.id.clone()}
                        record={record.clone()}
                        {dragging}
                        {over}
                        {offset}
                        on_press={on_press.clone()}
                    />
                }
            })
            .collect::<Html>()
    };

    html! {
        <main class="page gallery">
            <div class="search">
                <label>
                    {"Search Images"}
                    <input
                        type="search"
                        value={search_value.query().to_string()}
                        {oninput}
                    />
                </label>
            </div>
            <div class="grid">
                {body}
                <button class="logout" onclick={on_logout}>{"logout"}</button>
            </div>
        </main>
    }
}
