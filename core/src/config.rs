use std::fmt;

use serde::Deserialize;

use crate::catalog::{CatalogError, ImageRecord};
use crate::grid::GridController;
use crate::notify::NOTICE_DURATION_MS;

pub const SEARCH_DELAY_MS: u32 = 2000;
pub const DRAG_ACTIVATION_PX: f32 = 4.0;

/// How overlapping loading-clear timers interact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingPolicy {
    /// Every keystroke's timer clears loading when it fires.
    #[default]
    Independent,
    /// Only the timer scheduled by the latest keystroke clears loading.
    Debounced,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    pub search_delay_ms: u32,
    pub notice_duration_ms: u32,
    pub drag_activation_px: f32,
    pub loading_policy: LoadingPolicy,
    /// Replaces the built-in catalog when present.
    pub images: Option<Vec<ImageRecord>>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            search_delay_ms: SEARCH_DELAY_MS,
            notice_duration_ms: NOTICE_DURATION_MS,
            drag_activation_px: DRAG_ACTIVATION_PX,
            loading_policy: LoadingPolicy::default(),
            images: None,
        }
    }
}

impl GalleryConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(trimmed).map_err(ConfigError::Json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_delay_ms == 0 {
            return Err(ConfigError::Invalid("search_delay_ms must be positive"));
        }
        if self.notice_duration_ms == 0 {
            return Err(ConfigError::Invalid("notice_duration_ms must be positive"));
        }
        if !self.drag_activation_px.is_finite() || self.drag_activation_px < 0.0 {
            return Err(ConfigError::Invalid("drag_activation_px must be a non-negative number"));
        }
        Ok(())
    }

    /// Applies a raw millisecond override such as a build-time env value.
    /// Unparseable or zero values are ignored.
    pub fn with_search_delay(mut self, raw: Option<&str>) -> Self {
        if let Some(ms) = raw.and_then(parse_ms) {
            self.search_delay_ms = ms;
        }
        self
    }

    pub fn grid_controller(&self) -> Result<GridController, CatalogError> {
        match &self.images {
            Some(images) => GridController::new(images.clone()),
            None => Ok(GridController::with_default_catalog()),
        }
    }
}

pub fn parse_ms(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    let value = trimmed.strip_suffix("ms").unwrap_or(trimmed).trim();
    value.parse::<u32>().ok().filter(|ms| *ms > 0)
}

#[derive(Debug)]
pub enum ConfigError {
    Json(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Json(err) => write!(f, "config is not valid json: {err}"),
            ConfigError::Invalid(reason) => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Json(err) => Some(err),
            ConfigError::Invalid(_) => None,
        }
    }
}
