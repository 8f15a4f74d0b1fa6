pub mod catalog;
pub mod config;
pub mod drag;
pub mod grid;
pub mod notify;
pub mod route;
pub mod search;

pub use catalog::{default_records, CatalogError, ImageRecord, DEFAULT_CATALOG};
pub use config::{ConfigError, GalleryConfig, LoadingPolicy};
pub use drag::{DragPhase, DragSession, DropOutcome};
pub use grid::{tag_matches, FilteredView, GridController};
pub use notify::{Notice, Notifier, NO_MATCH_MESSAGE};
pub use route::Route;
pub use search::{LoadingClear, SearchState};
