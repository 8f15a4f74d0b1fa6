use crate::config::{GalleryConfig, LoadingPolicy};
use crate::grid::GridController;
use crate::notify::{Notice, Notifier};

/// A loading-clear the caller must schedule after `delay_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadingClear {
    pub generation: u64,
    pub delay_ms: u32,
}

/// Search box state: idle until a keystroke, loading until a scheduled clear fires.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchState {
    query: String,
    is_loading: bool,
    generation: u64,
    policy: LoadingPolicy,
    delay_ms: u32,
    notice_duration_ms: u32,
}

impl SearchState {
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            query: String::new(),
            is_loading: false,
            generation: 0,
            policy: config.loading_policy,
            delay_ms: config.search_delay_ms,
            notice_duration_ms: config.notice_duration_ms,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Handles one change of the input text. The query takes effect at once;
    /// loading starts and the returned clear has to be scheduled by the caller.
    /// A non-blank query with no matching tag raises one notice per call.
    pub fn input(
        &mut self,
        raw: &str,
        grid: &GridController,
        notifier: &dyn Notifier,
    ) -> LoadingClear {
        let query = raw.to_lowercase();
        self.generation = self.generation.wrapping_add(1);
        self.is_loading = true;
        if !query.trim().is_empty() && !grid.has_matches(&query) {
            notifier.notify(&Notice::no_match(self.notice_duration_ms));
        }
        self.query = query;
        LoadingClear {
            generation: self.generation,
            delay_ms: self.delay_ms,
        }
    }

    /// Applies a fired timer. Returns true when loading flipped back to idle.
    pub fn clear_loading(&mut self, clear: LoadingClear) -> bool {
        if !self.is_loading {
            return false;
        }
        if self.policy == LoadingPolicy::Debounced && clear.generation != self.generation {
            return false;
        }
        self.is_loading = false;
        true
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(&GalleryConfig::default())
    }
}
