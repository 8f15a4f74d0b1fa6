use std::cell::RefCell;

use picboard_core::GalleryConfig;

use crate::app_router;

thread_local! {
    static GALLERY_CONFIG: RefCell<Option<GalleryConfig>> = RefCell::new(None);
}

pub(crate) fn set_config(config: GalleryConfig) {
    GALLERY_CONFIG.with(|slot| {
        *slot.borrow_mut() = Some(config);
    });
}

/// Reads the cached config in place, loading it from the page on first use.
pub(crate) fn with_config<R>(read: impl FnOnce(&GalleryConfig) -> R) -> R {
    GALLERY_CONFIG.with(|slot| {
        let mut slot = slot.borrow_mut();
        let config = slot.get_or_insert_with(app_router::load_config);
        read(config)
    })
}
