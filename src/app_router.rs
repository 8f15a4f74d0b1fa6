use gloo::history::{BrowserHistory, History, HistoryListener};

use picboard_core::{GalleryConfig, Route};

const CONFIG_ELEMENT_ID: &str = "picboard-config";

pub(crate) fn current_route() -> Route {
    let history = BrowserHistory::new();
    let location = history.location();
    Route::recognize(location.path())
}

pub(crate) fn navigate(route: Route) {
    if current_route() == route {
        return;
    }
    gloo::console::log!("navigate", route.path());
    BrowserHistory::new().push(route.path());
}

/// Calls `on_change` with the new route after push/back/forward.
pub(crate) fn listen<F>(on_change: F) -> HistoryListener
where
    F: Fn(Route) + 'static,
{
    BrowserHistory::new().listen(move || on_change(current_route()))
}

pub(crate) fn set_document_title(route: Route) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    document.set_title(&format!("picboard · {}", route.title()));
}

pub(crate) fn load_config() -> GalleryConfig {
    let config = match inline_config_json() {
        Some(raw) => match GalleryConfig::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                gloo::console::warn!("ignoring page config", err.to_string());
                GalleryConfig::default()
            }
        },
        None => GalleryConfig::default(),
    };
    config.with_search_delay(build_search_delay())
}

fn build_search_delay() -> Option<&'static str> {
    option_env!("PICBOARD_SEARCH_DELAY_MS").or(option_env!("TRUNK_PUBLIC_PICBOARD_SEARCH_DELAY_MS"))
}

fn inline_config_json() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content()
}
