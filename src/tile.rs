use web_sys::PointerEvent;
use yew::prelude::*;

use picboard_core::ImageRecord;

pub(crate) const TILE_ID_ATTR: &str = "data-tile-id";

/// Shown in place of an asset the page could not load.
pub(crate) const PLACEHOLDER_SRC: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 4 3'%3E%3Crect width='4' height='3' fill='%23d1d1d6'/%3E%3C/svg%3E";

#[derive(Properties, PartialEq)]
pub(crate) struct TileProps {
    pub(crate) record: ImageRecord,
    #[prop_or_default]
    pub(crate) dragging: bool,
    #[prop_or_default]
    pub(crate) over: bool,
    #[prop_or_default]
    pub(crate) offset: (f32, f32),
    pub(crate) on_press: Callback<(String, PointerEvent)>,
}

/// One image. It is both the drag handle and the drop target for its own id;
/// where it lands is decided by whoever handles `on_press` and the release.
#[function_component(Tile)]
pub(crate) fn tile(props: &TileProps) -> Html {
    let record = &props.record;
    let broken = use_state(|| false);
    let onerror = {
        let broken = broken.clone();
        let src = record.src.clone();
        Callback::from(move |_: Event| {
            if !*broken {
                gloo::console::warn!("image failed to load", src.clone());
                broken.set(true);
            }
        })
    };
    let src = if *broken {
        PLACEHOLDER_SRC.to_string()
    } else {
        record.src.clone()
    };
    let onpointerdown = {
        let id = record.id.clone();
        let on_press = props.on_press.clone();
        Callback::from(move |event: PointerEvent| {
            if !event.is_primary() || event.button() != 0 {
                return;
            }
            event.prevent_default();
            on_press.emit((id.clone(), event));
        })
    };
    // The dragged tile must not swallow hit tests meant for the tile beneath it.
    let style = props.dragging.then(|| {
        let (dx, dy) = props.offset;
        format!("transform: translate3d({dx}px, {dy}px, 0); pointer-events: none;")
    });
    let class = classes!(
        "tile",
        props.dragging.then_some("tile--dragging"),
        props.over.then_some("tile--over"),
    );
    html! {
        <div {class} {style} data-tile-id={record.id.clone()} {onpointerdown}>
            <img {src} alt={record.label.clone()} draggable="false" {onerror} />
            <div class="tile-tag">{record.tag.clone()}</div>
        </div>
    }
}
