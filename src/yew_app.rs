use yew::prelude::*;

use picboard_core::Route;

use crate::app_router;
use crate::app_runtime;
use crate::gallery::GalleryPage;
use crate::login::LoginPage;
use crate::toast::ToastHost;

#[function_component(NotFound)]
fn not_found() -> Html {
    let onclick = Callback::from(|event: MouseEvent| {
        event.prevent_default();
        app_router::navigate(Route::Login);
    });
    html! {
        <main class="page not-found">
            <h1>{"Page not found"}</h1>
            <a href={Route::Login.path()} {onclick}>{"Back to sign in"}</a>
        </main>
    }
}

#[function_component(App)]
pub(crate) fn app() -> Html {
    let route = use_state(app_router::current_route);
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = app_router::listen(move |next| route.set(next));
            move || drop(listener)
        });
    }
    use_effect_with(*route, |route| {
        app_router::set_document_title(*route);
        || ()
    });

    let page = match *route {
        Route::Login => html! { <LoginPage /> },
        Route::Main => html! { <GalleryPage /> },
        Route::NotFound => html! { <NotFound /> },
    };
    html! {
        <ToastHost>{page}</ToastHost>
    }
}

pub(crate) fn run() {
    console_error_panic_hook::set_once();
    let config = app_router::load_config();
    gloo::console::log!(
        "picboard boot",
        format!(
            "search delay {}ms, loading policy {:?}",
            config.search_delay_ms, config.loading_policy
        )
    );
    app_runtime::set_config(config);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use gloo::history::{BrowserHistory, History};
    use gloo::timers::future::TimeoutFuture;
    use picboard_core::{DEFAULT_CATALOG, NO_MATCH_MESSAGE};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, EventInit, HtmlElement, HtmlInputElement, PointerEvent, PointerEventInit};

    use crate::tile::PLACEHOLDER_SRC;

    const TEST_STYLES: &str = ".tile { position: relative; width: 120px; height: 120px; overflow: hidden; }\n.tile img { width: 100%; height: 100%; }";

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(id: &str) -> Element {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        if document.get_element_by_id("test-styles").is_none() {
            let style = document.create_element("style").expect("create style");
            style.set_id("test-styles");
            style.set_text_content(Some(TEST_STYLES));
            document
                .body()
                .expect("body available")
                .append_child(&style)
                .expect("append style");
        }
        let root = document.create_element("div").expect("create test root");
        root.set_id(id);
        // Later roots stack over earlier ones so hit testing lands on the newest app.
        root.set_attribute("style", "position: fixed; top: 0; left: 0; background: white;")
            .expect("style test root");
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append test root");
        yew::Renderer::<App>::with_root(root.clone()).render();
        root
    }

    async fn wait_for<F: Fn() -> bool>(what: &str, check: F) {
        for _ in 0..300 {
            if check() {
                return;
            }
            TimeoutFuture::new(10).await;
        }
        panic!("timed out waiting for {what}");
    }

    fn count(root: &Element, selector: &str) -> u32 {
        root.query_selector_all(selector)
            .map(|nodes| nodes.length())
            .unwrap_or(0)
    }

    fn tile_ids(root: &Element) -> Vec<String> {
        let Ok(nodes) = root.query_selector_all("[data-tile-id]") else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter_map(|element| element.get_attribute("data-tile-id"))
            .collect()
    }

    fn tile(root: &Element, id: &str) -> Element {
        root.query_selector(&format!("[data-tile-id=\"{id}\"]"))
            .ok()
            .flatten()
            .expect("tile rendered")
    }

    fn center(element: &Element) -> (i32, i32) {
        let rect = element.get_bounding_client_rect();
        (
            (rect.left() + rect.width() / 2.0) as i32,
            (rect.top() + rect.height() / 2.0) as i32,
        )
    }

    fn pointer(target: &Element, kind: &str, (x, y): (i32, i32)) {
        let init = PointerEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        init.set_pointer_id(1);
        init.set_is_primary(true);
        init.set_button(0);
        init.set_client_x(x);
        init.set_client_y(y);
        let event = PointerEvent::new_with_event_init_dict(kind, &init).expect("pointer event");
        target.dispatch_event(&event).expect("dispatch pointer event");
    }

    #[wasm_bindgen_test(async)]
    async fn dragging_first_tile_onto_second_swaps_them() {
        set_panic_hook();
        BrowserHistory::new().push("/main");
        let root = mount("drag-flow-root");
        wait_for("gallery tiles", || tile_ids(&root).len() == DEFAULT_CATALOG.len()).await;

        let source = tile(&root, "0");
        let start = center(&source);
        let target = center(&tile(&root, "1"));
        assert_ne!(start, target);

        pointer(&source, "pointerdown", start);
        pointer(&root, "pointermove", (start.0, start.1 + 10));
        wait_for("drag styling", || {
            source.get_attribute("style").is_some_and(|style| style.contains("pointer-events: none"))
        })
        .await;

        // The dragged tile now follows the pointer, so this hit test has to see through it.
        pointer(&root, "pointermove", target);
        wait_for("drop target", || count(&root, ".tile--over") == 1).await;
        assert_eq!(
            root.query_selector(".tile--over")
                .ok()
                .flatten()
                .and_then(|element| element.get_attribute("data-tile-id"))
                .as_deref(),
            Some("1")
        );
        pointer(&root, "pointerup", target);

        wait_for("reordered tiles", || tile_ids(&root).first().map(String::as_str) == Some("1")).await;
        let ids = tile_ids(&root);
        assert_eq!(ids[..3], ["1", "0", "2"]);
        assert_eq!(ids.len(), DEFAULT_CATALOG.len());
        assert_eq!(count(&root, ".tile--dragging"), 0);
    }

    #[wasm_bindgen_test(async)]
    async fn logout_returns_to_login() {
        set_panic_hook();
        BrowserHistory::new().push("/main");
        let root = mount("logout-flow-root");
        wait_for("gallery tiles", || tile_ids(&root).len() == DEFAULT_CATALOG.len()).await;

        let logout = root
            .query_selector(".logout")
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .expect("logout button");
        logout.click();

        wait_for("login form", || count(&root, "form.login") == 1).await;
        assert_eq!(app_router::current_route(), Route::Login);
        assert!(tile_ids(&root).is_empty());
    }

    #[wasm_bindgen_test(async)]
    async fn missing_images_fall_back_to_placeholder() {
        set_panic_hook();
        BrowserHistory::new().push("/main");
        let root = mount("placeholder-root");
        wait_for("gallery tiles", || tile_ids(&root).len() == DEFAULT_CATALOG.len()).await;

        let image = root
            .query_selector("[data-tile-id=\"11\"] img")
            .ok()
            .flatten()
            .expect("tile image");
        wait_for("placeholder", || image.get_attribute("src").as_deref() == Some(PLACEHOLDER_SRC)).await;
        assert_eq!(image.get_attribute("alt").as_deref(), Some("Temi"));
    }

    #[wasm_bindgen_test(async)]
    async fn login_then_main_shows_full_catalog() {
        set_panic_hook();
        BrowserHistory::new().push("/");
        let root = mount("login-flow-root");
        wait_for("login form", || count(&root, "form.login") == 1).await;
        assert_eq!(count(&root, "[data-tile-id]"), 0);

        app_router::navigate(Route::Main);
        wait_for("gallery tiles", || tile_ids(&root).len() == DEFAULT_CATALOG.len()).await;

        let expected: Vec<String> = DEFAULT_CATALOG.iter().map(|entry| entry.id.to_string()).collect();
        assert_eq!(tile_ids(&root), expected);
        assert_eq!(count(&root, "form.login"), 0);
    }

    #[wasm_bindgen_test(async)]
    async fn unmatched_search_raises_one_toast() {
        set_panic_hook();
        BrowserHistory::new().push("/main");
        let root = mount("search-flow-root");
        wait_for("gallery tiles", || tile_ids(&root).len() == DEFAULT_CATALOG.len()).await;

        let input = root
            .query_selector("input[type=search]")
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
            .expect("search input");
        input.set_value("xyz123");
        let init = EventInit::new();
        init.set_bubbles(true);
        let event = web_sys::Event::new_with_event_init_dict("input", &init).expect("input event");
        input.dispatch_event(&event).expect("dispatch input");

        wait_for("spinner", || count(&root, ".spinner") == 1).await;
        let toast = root.query_selector(".toast").ok().flatten().expect("toast shown");
        assert_eq!(toast.text_content().as_deref(), Some(NO_MATCH_MESSAGE));
        assert_eq!(count(&root, ".toast"), 1);

        TimeoutFuture::new(2000).await;
        wait_for("spinner cleared", || count(&root, ".spinner") == 0).await;
        assert!(tile_ids(&root).is_empty());
        assert_eq!(count(&root, ".logout"), 1);
    }

    #[wasm_bindgen_test(async)]
    async fn unknown_path_offers_way_back() {
        set_panic_hook();
        BrowserHistory::new().push("/nowhere");
        let root = mount("not-found-root");
        wait_for("not found page", || count(&root, ".not-found") == 1).await;
        BrowserHistory::new().push("/");
    }
}
