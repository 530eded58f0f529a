//! Grid snapping and box intersection helpers.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Default grid cell size in canvas units.
pub const DEFAULT_GRID_SIZE: f64 = 10.0;
/// Smallest grid cell accepted from callers or loaded plans.
pub const MIN_GRID_SIZE: f64 = 1.0;

/// Grid display and snapping settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Whether the grid is drawn.
    pub enabled: bool,
    /// Cell size in canvas units (at least [`MIN_GRID_SIZE`]).
    pub size: f64,
    /// Whether positions and sizes snap to the grid.
    pub snap: bool,
    /// Grid line opacity (0.0 - 1.0).
    pub opacity: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            size: DEFAULT_GRID_SIZE,
            snap: true,
            opacity: 0.5,
        }
    }
}

impl GridConfig {
    pub fn is_valid_size(size: f64) -> bool {
        size.is_finite() && size >= MIN_GRID_SIZE
    }

    /// Repair a grid from untrusted input: bad sizes fall back to the default, opacity is clamped.
    pub fn sanitized(mut self) -> Self {
        if !Self::is_valid_size(self.size) {
            log::warn!("grid size {} out of range, using {DEFAULT_GRID_SIZE}", self.size);
            self.size = DEFAULT_GRID_SIZE;
        }
        self.opacity = if self.opacity.is_finite() {
            self.opacity.clamp(0.0, 1.0)
        } else {
            0.5
        };
        self
    }

    /// Snap a single coordinate if snapping is on.
    pub fn snap_value(&self, value: f64) -> f64 {
        if self.snap {
            snap_value(value, self.size)
        } else {
            value
        }
    }

    /// Snap a point if snapping is on.
    pub fn snap_point(&self, point: Point) -> SnapResult {
        if self.snap {
            snap_to_grid(point, self.size)
        } else {
            SnapResult::none(point)
        }
    }
}

/// Result of a snap operation.
#[derive(Debug, Clone, Copy)]
pub struct SnapResult {
    /// The snapped point.
    pub point: Point,
    /// Whether the X coordinate was snapped.
    pub snapped_x: bool,
    /// Whether the Y coordinate was snapped.
    pub snapped_y: bool,
}

impl SnapResult {
    /// Create a result with no snapping.
    pub fn none(point: Point) -> Self {
        Self {
            point,
            snapped_x: false,
            snapped_y: false,
        }
    }

    /// Check if any snapping occurred.
    pub fn is_snapped(&self) -> bool {
        self.snapped_x || self.snapped_y
    }
}

/// Round a value to the nearest multiple of `grid_size`, halves rounding up.
///
/// A non-positive grid size leaves the value untouched.
pub fn snap_value(value: f64, grid_size: f64) -> f64 {
    if grid_size <= 0.0 || !grid_size.is_finite() {
        return value;
    }
    let snapped = (value / grid_size + 0.5).floor() * grid_size;
    // Avoid handing out -0.0
    if snapped == 0.0 { 0.0 } else { snapped }
}

/// Snap a point to the nearest grid intersection.
pub fn snap_to_grid(point: Point, grid_size: f64) -> SnapResult {
    let snapped = Point::new(snap_value(point.x, grid_size), snap_value(point.y, grid_size));
    SnapResult {
        snapped_x: snapped.x != point.x,
        snapped_y: snapped.y != point.y,
        point: snapped,
    }
}

/// Strict axis-aligned overlap test.
///
/// Touching edges do not count as an intersection.
pub fn intersects(a: Rect, b: Rect) -> bool {
    let a = a.abs();
    let b = b.abs();
    a.x0 < b.x1 && a.x1 > b.x0 && a.y0 < b.y1 && a.y1 > b.y0
}

/// Build a normalized rectangle from any two corners.
pub fn rect_from_corners(p1: Point, p2: Point) -> Rect {
    Rect::from_points(p1, p2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_snap_value_rounds_half_up() {
        assert!((snap_value(14.0, 10.0) - 10.0).abs() < f64::EPSILON);
        assert!((snap_value(15.0, 10.0) - 20.0).abs() < f64::EPSILON);
        assert!(snap_value(0.0, 10.0).abs() < f64::EPSILON);
        assert!((snap_value(-15.0, 10.0) + 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snap_value_ignores_bad_grid() {
        assert!((snap_value(13.0, 0.0) - 13.0).abs() < f64::EPSILON);
        assert!((snap_value(13.0, -5.0) - 13.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_grid_config_snap_disabled_is_identity() {
        let grid = GridConfig {
            snap: false,
            ..GridConfig::default()
        };
        assert!((grid.snap_value(13.0) - 13.0).abs() < f64::EPSILON);
        let result = grid.snap_point(Point::new(3.0, 7.0));
        assert!(!result.is_snapped());
        assert_eq!(result.point, Point::new(3.0, 7.0));
    }

    #[test]
    fn test_sanitized_grid() {
        let grid = GridConfig {
            size: 1e-6,
            opacity: 3.0,
            ..GridConfig::default()
        }
        .sanitized();
        assert!((grid.size - DEFAULT_GRID_SIZE).abs() < f64::EPSILON);
        assert!((grid.opacity - 1.0).abs() < f64::EPSILON);

        let negative = GridConfig {
            size: -5.0,
            ..GridConfig::default()
        };
        assert!((negative.sanitized().size - DEFAULT_GRID_SIZE).abs() < f64::EPSILON);

        let fine = GridConfig {
            size: 25.0,
            ..GridConfig::default()
        };
        assert_eq!(fine.sanitized(), fine);
    }

    #[test]
    fn test_snap_to_grid() {
        let result = snap_to_grid(Point::new(14.0, 26.0), 10.0);
        assert_eq!(result.point, Point::new(10.0, 30.0));
        assert!(result.is_snapped());

        let on_grid = snap_to_grid(Point::new(20.0, 40.0), 10.0);
        assert!(!on_grid.is_snapped());
    }

    #[test]
    fn test_intersects_overlap() {
        let marquee = Rect::new(0.0, 0.0, 50.0, 50.0);
        assert!(intersects(marquee, Rect::new(10.0, 10.0, 30.0, 30.0)));
        assert!(!intersects(marquee, Rect::new(60.0, 60.0, 80.0, 80.0)));
    }

    #[test]
    fn test_intersects_touching_edges() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 20.0, 10.0);
        assert!(!intersects(a, b));
        assert!(!intersects(b, a));
    }

    #[test]
    fn test_rect_from_corners_normalizes() {
        let rect = rect_from_corners(Point::new(50.0, 40.0), Point::new(10.0, 20.0));
        assert_eq!(rect, Rect::new(10.0, 20.0, 50.0, 40.0));
    }

    fn arb_rect() -> impl Strategy<Value = Rect> {
        (-500.0..500.0f64, -500.0..500.0f64, 0.0..200.0f64, 0.0..200.0f64)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, x + w, y + h))
    }

    proptest! {
        #[test]
        fn prop_intersects_is_symmetric(a in arb_rect(), b in arb_rect()) {
            prop_assert_eq!(intersects(a, b), intersects(b, a));
        }

        #[test]
        fn prop_snap_is_idempotent(v in -10_000.0..10_000.0f64, size in 1.0..50.0f64) {
            let once = snap_value(v, size);
            let twice = snap_value(once, size);
            prop_assert!((once - twice).abs() < 1e-6);
        }
    }
}
