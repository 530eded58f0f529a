//! Camera module for pan/zoom transforms.

use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Smallest zoom level the editor allows.
pub const MIN_ZOOM: f64 = 0.25;
/// Largest zoom level the editor allows.
pub const MAX_ZOOM: f64 = 4.0;
/// Multiplicative zoom step applied per wheel event.
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

/// Convert a screen-space pointer position into canvas space.
///
/// This is the exact inverse of [`Camera::transform`].
pub fn to_canvas_coords(pointer: Point, offset: Vec2, zoom: f64) -> Point {
    Point::new((pointer.x - offset.x) / zoom, (pointer.y - offset.y) / zoom)
}

/// Camera manages the view transform for the canvas.
///
/// It handles panning (translation) and zooming (scaling) operations,
/// converting between screen coordinates and canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Current translation offset (pan), in screen pixels.
    pub offset: Vec2,
    /// Current zoom level (1.0 = 100%).
    pub zoom: f64,
    /// Minimum allowed zoom level.
    #[serde(skip, default = "default_min_zoom")]
    pub min_zoom: f64,
    /// Maximum allowed zoom level.
    #[serde(skip, default = "default_max_zoom")]
    pub max_zoom: f64,
}

fn default_min_zoom() -> f64 {
    MIN_ZOOM
}

fn default_max_zoom() -> f64 {
    MAX_ZOOM
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a camera with custom zoom bounds.
    pub fn with_bounds(min_zoom: f64, max_zoom: f64) -> Self {
        Self {
            min_zoom,
            max_zoom,
            ..Self::default()
        }
    }

    /// Get the affine transform for rendering.
    ///
    /// This transform converts canvas coordinates to screen coordinates.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom)
    }

    /// Get the inverse transform for input handling.
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.zoom) * Affine::translate(-self.offset)
    }

    /// Convert a screen point to canvas coordinates.
    pub fn screen_to_world(&self, screen_point: Point) -> Point {
        to_canvas_coords(screen_point, self.offset, self.zoom)
    }

    /// Convert a canvas point to screen coordinates.
    pub fn world_to_screen(&self, world_point: Point) -> Point {
        self.transform() * world_point
    }

    /// Pan the camera by a delta in screen coordinates.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Set the zoom level directly, clamped to the camera bounds.
    ///
    /// Non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        }
    }

    /// Zoom the camera, keeping the given screen point fixed.
    pub fn zoom_at(&mut self, screen_point: Point, factor: f64) {
        let old_zoom = self.zoom;
        let new_zoom = (old_zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - old_zoom).abs() < f64::EPSILON {
            return;
        }

        // offset' = pointer - (pointer - offset) * (new / old)
        let ratio = new_zoom / old_zoom;
        self.offset = Vec2::new(
            screen_point.x - (screen_point.x - self.offset.x) * ratio,
            screen_point.y - (screen_point.y - self.offset.y) * ratio,
        );
        self.zoom = new_zoom;
    }

    /// Apply one wheel notch: negative `delta_y` zooms in, anything else zooms out.
    pub fn wheel_zoom(&mut self, screen_point: Point, delta_y: f64, step: f64) {
        let factor = if delta_y < 0.0 { step } else { 1.0 / step };
        self.zoom_at(screen_point, factor);
    }

    /// Reset camera to default position and zoom.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
        self.zoom = 1.0;
    }
}
