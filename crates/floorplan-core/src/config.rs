//! Editor tunables.
//!
//! Every field has a default, so a config file only needs the keys it changes:
//!
//! ```json
//! { "grid": { "enabled": true, "size": 20, "snap": false, "opacity": 0.3 }, "historyLimit": 200 }
//! ```

use std::path::Path;

use kurbo::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::camera::{MAX_ZOOM, MIN_ZOOM, WHEEL_ZOOM_STEP};
use crate::elements::MIN_ELEMENT_SIZE;
use crate::snap::{GridConfig, MIN_GRID_SIZE};

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Logical canvas extent, used by export.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    /// Largest canvas side accepted from a loaded plan.
    pub const MAX_SIDE: f64 = 100_000.0;

    pub fn is_valid(&self) -> bool {
        let side_ok = |v: f64| v.is_finite() && v > 0.0 && v <= Self::MAX_SIDE;
        side_ok(self.width) && side_ok(self.height)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 2000.0,
            height: 1500.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// Grid used by a fresh or reset canvas.
    pub grid: GridConfig,
    pub canvas_size: CanvasSize,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Multiplicative zoom per wheel notch.
    pub wheel_zoom_step: f64,
    /// Shift applied to duplicated elements.
    pub duplicate_offset: Vec2,
    pub min_element_size: f64,
    /// Drag-create and marquee gestures smaller than this (canvas units) are dropped.
    pub gesture_threshold: f64,
    /// Screen pixels the pointer must travel before an element drag starts.
    pub drag_threshold: f64,
    /// Screen-pixel tolerance for grabbing a transform handle.
    pub handle_tolerance: f64,
    /// Distance of the rotate handle above the selection, in canvas units.
    pub rotate_handle_offset: f64,
    pub flooring_enabled: bool,
    pub flooring_opacity: f64,
    /// Maximum undo depth. `None` keeps everything.
    pub history_limit: Option<usize>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            canvas_size: CanvasSize::default(),
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            wheel_zoom_step: WHEEL_ZOOM_STEP,
            duplicate_offset: Vec2::new(20.0, 20.0),
            min_element_size: MIN_ELEMENT_SIZE,
            gesture_threshold: 5.0,
            drag_threshold: 3.0,
            handle_tolerance: 8.0,
            rotate_handle_offset: 30.0,
            flooring_enabled: false,
            flooring_opacity: 0.8,
            history_limit: None,
        }
    }
}

impl EditorConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the camera, snapping or resizing cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));
        if !(self.min_zoom.is_finite() && self.min_zoom > 0.0) {
            return invalid(format!("minZoom must be positive, got {}", self.min_zoom));
        }
        if !(self.max_zoom.is_finite() && self.max_zoom >= self.min_zoom) {
            return invalid(format!(
                "maxZoom {} is below minZoom {}",
                self.max_zoom, self.min_zoom
            ));
        }
        if !(self.wheel_zoom_step.is_finite() && self.wheel_zoom_step > 1.0) {
            return invalid(format!(
                "wheelZoomStep must be greater than 1, got {}",
                self.wheel_zoom_step
            ));
        }
        if !(self.min_element_size.is_finite() && self.min_element_size > 0.0) {
            return invalid(format!(
                "minElementSize must be positive, got {}",
                self.min_element_size
            ));
        }
        if !self.canvas_size.is_valid() {
            return invalid(format!("canvas size {:?} out of range", self.canvas_size));
        }
        if !GridConfig::is_valid_size(self.grid.size) {
            return invalid(format!(
                "grid size must be at least {MIN_GRID_SIZE}, got {}",
                self.grid.size
            ));
        }
        Ok(())
    }

    /// Load a (possibly partial) JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
