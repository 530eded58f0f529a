//! Transform handles for the current selection: resize anchors and a rotate knob.

use kurbo::{Affine, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::elements::{Element, ElementId, ElementPatch};
use crate::snap::GridConfig;

/// Handle size in screen pixels.
pub const HANDLE_SIZE: f64 = 8.0;

/// Corner positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Edge positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Type of transform handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleKind {
    Corner(Corner),
    Edge(Edge),
    /// Rotation handle above the top edge.
    Rotate,
}

/// A handle with its position in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub position: Point,
    pub kind: HandleKind,
}

impl Handle {
    pub fn new(position: Point, kind: HandleKind) -> Self {
        Self { position, kind }
    }

    /// `tolerance` is in canvas units; divide screen pixels by zoom first.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        (point - self.position).hypot2() <= tolerance * tolerance
    }
}

/// The nine handles around a selection box.
pub fn selection_handles(bounds: Rect, rotate_offset: f64) -> Vec<Handle> {
    let center = bounds.center();
    vec![
        Handle::new(Point::new(bounds.x0, bounds.y0), HandleKind::Corner(Corner::TopLeft)),
        Handle::new(Point::new(bounds.x1, bounds.y0), HandleKind::Corner(Corner::TopRight)),
        Handle::new(Point::new(bounds.x0, bounds.y1), HandleKind::Corner(Corner::BottomLeft)),
        Handle::new(Point::new(bounds.x1, bounds.y1), HandleKind::Corner(Corner::BottomRight)),
        Handle::new(Point::new(center.x, bounds.y0), HandleKind::Edge(Edge::Top)),
        Handle::new(Point::new(bounds.x1, center.y), HandleKind::Edge(Edge::Right)),
        Handle::new(Point::new(center.x, bounds.y1), HandleKind::Edge(Edge::Bottom)),
        Handle::new(Point::new(bounds.x0, center.y), HandleKind::Edge(Edge::Left)),
        Handle::new(Point::new(center.x, bounds.y0 - rotate_offset), HandleKind::Rotate),
    ]
}

/// Find which handle (if any) is hit at the given point.
pub fn hit_test_handles(handles: &[Handle], point: Point, tolerance: f64) -> Option<HandleKind> {
    handles
        .iter()
        .find(|h| h.hit_test(point, tolerance))
        .map(|h| h.kind)
}

/// Move the edges a resize handle controls.
///
/// Returns `None` when the result would be narrower or shorter than
/// `min_size` (including a flip), so the caller keeps the previous box.
pub fn resize_box(original: Rect, handle: HandleKind, delta: Vec2, min_size: f64) -> Option<Rect> {
    let Rect {
        mut x0,
        mut y0,
        mut x1,
        mut y1,
    } = original;

    match handle {
        HandleKind::Corner(Corner::TopLeft) => {
            x0 += delta.x;
            y0 += delta.y;
        }
        HandleKind::Corner(Corner::TopRight) => {
            x1 += delta.x;
            y0 += delta.y;
        }
        HandleKind::Corner(Corner::BottomLeft) => {
            x0 += delta.x;
            y1 += delta.y;
        }
        HandleKind::Corner(Corner::BottomRight) => {
            x1 += delta.x;
            y1 += delta.y;
        }
        HandleKind::Edge(Edge::Top) => y0 += delta.y,
        HandleKind::Edge(Edge::Right) => x1 += delta.x,
        HandleKind::Edge(Edge::Bottom) => y1 += delta.y,
        HandleKind::Edge(Edge::Left) => x0 += delta.x,
        HandleKind::Rotate => {}
    }

    (x1 - x0 >= min_size && y1 - y0 >= min_size).then(|| Rect::new(x0, y0, x1, y1))
}

/// Signed angle in degrees swept from `start` to `current` around `center`.
pub fn rotation_delta(center: Point, start: Point, current: Point) -> f64 {
    let a = (start - center).atan2();
    let b = (current - center).atan2();
    let mut degrees = (b - a).to_degrees();
    if degrees > 180.0 {
        degrees -= 360.0;
    } else if degrees < -180.0 {
        degrees += 360.0;
    }
    degrees
}

/// A pending resize/rotate of the whole selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionTransform {
    /// Selection box when the gesture started.
    pub from: Rect,
    /// Box after resizing.
    pub to: Rect,
    /// Rotation about the centre of `to`, in degrees.
    pub rotation: f64,
}

impl SelectionTransform {
    pub fn identity(bounds: Rect) -> Self {
        Self {
            from: bounds,
            to: bounds,
            rotation: 0.0,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.from == self.to && self.rotation == 0.0
    }

    fn scale(&self) -> Vec2 {
        let sx = if self.from.width() > 0.0 {
            self.to.width() / self.from.width()
        } else {
            1.0
        };
        let sy = if self.from.height() > 0.0 {
            self.to.height() / self.from.height()
        } else {
            1.0
        };
        Vec2::new(sx, sy)
    }

    /// Position, size and rotation the element would take. Unsnapped.
    pub fn apply_to(&self, element: &Element, min_size: f64) -> (Point, f64, f64, f64) {
        let scale = self.scale();
        let origin = Point::new(
            self.to.x0 + (element.x - self.from.x0) * scale.x,
            self.to.y0 + (element.y - self.from.y0) * scale.y,
        );
        let width = (element.width * scale.x).max(min_size);
        let height = (element.height * scale.y).max(min_size);

        let center = self.to.center();
        let spin = Affine::rotate_about(self.rotation.to_radians(), center);
        (spin * origin, width, height, element.rotation + self.rotation)
    }

    /// Final patches for every element, snapped when the grid asks for it.
    pub fn commit<'a>(
        &self,
        elements: impl IntoIterator<Item = &'a Element>,
        grid: &GridConfig,
        min_size: f64,
    ) -> Vec<(ElementId, ElementPatch)> {
        elements
            .into_iter()
            .map(|element| {
                let (origin, width, height, rotation) = self.apply_to(element, min_size);
                let patch = ElementPatch {
                    x: Some(grid.snap_value(origin.x)),
                    y: Some(grid.snap_value(origin.y)),
                    width: Some(grid.snap_value(width).max(min_size)),
                    height: Some(grid.snap_value(height).max(min_size)),
                    rotation: Some(rotation),
                    ..ElementPatch::default()
                };
                (element.id, patch)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{ElementDraft, ElementKind, Furniture};
    use uuid::Uuid;

    fn element(x: f64, y: f64, w: f64, h: f64) -> Element {
        ElementDraft::new(
            ElementKind::Furniture(Furniture::default()),
            Rect::new(x, y, x + w, y + h),
        )
        .into_element(Uuid::new_v4())
    }

    #[test]
    fn test_handles_cover_box() {
        let handles = selection_handles(Rect::new(0.0, 0.0, 100.0, 50.0), 30.0);
        assert_eq!(handles.len(), 9);
        assert_eq!(
            hit_test_handles(&handles, Point::new(101.0, 51.0), 4.0),
            Some(HandleKind::Corner(Corner::BottomRight))
        );
        assert_eq!(
            hit_test_handles(&handles, Point::new(50.0, -30.0), 4.0),
            Some(HandleKind::Rotate)
        );
        assert_eq!(hit_test_handles(&handles, Point::new(50.0, 25.0), 4.0), None);
    }

    #[test]
    fn test_resize_corner() {
        let out = resize_box(
            Rect::new(0.0, 0.0, 100.0, 50.0),
            HandleKind::Corner(Corner::BottomRight),
            Vec2::new(20.0, 10.0),
            10.0,
        );
        assert_eq!(out, Some(Rect::new(0.0, 0.0, 120.0, 60.0)));
    }

    #[test]
    fn test_resize_rejects_below_minimum() {
        let out = resize_box(
            Rect::new(0.0, 0.0, 100.0, 50.0),
            HandleKind::Edge(Edge::Left),
            Vec2::new(95.0, 0.0),
            10.0,
        );
        assert_eq!(out, None);
    }

    #[test]
    fn test_rotation_delta_wraps() {
        let c = Point::ZERO;
        let quarter = rotation_delta(c, Point::new(1.0, 0.0), Point::new(0.0, 1.0));
        assert!((quarter - 90.0).abs() < 1e-9);
        let back = rotation_delta(c, Point::new(-1.0, 0.01), Point::new(-1.0, -0.01));
        assert!(back.abs() < 2.0);
    }

    #[test]
    fn test_commit_scales_and_snaps() {
        let a = element(0.0, 0.0, 50.0, 50.0);
        let b = element(50.0, 0.0, 50.0, 50.0);
        let transform = SelectionTransform {
            from: Rect::new(0.0, 0.0, 100.0, 50.0),
            to: Rect::new(0.0, 0.0, 203.0, 50.0),
            rotation: 0.0,
        };
        let patches = transform.commit([&a, &b], &GridConfig::default(), 10.0);
        assert_eq!(patches.len(), 2);
        let (_, pb) = &patches[1];
        // x = 50 * 2.03 = 101.5 -> 100, width = 101.5 -> 100
        assert!((pb.x.unwrap() - 100.0).abs() < f64::EPSILON);
        assert!((pb.width.unwrap() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_commit_enforces_minimum_after_snap() {
        let a = element(0.0, 0.0, 12.0, 12.0);
        let transform = SelectionTransform::identity(a.bounds());
        let grid = GridConfig {
            size: 50.0,
            ..GridConfig::default()
        };
        let patches = transform.commit([&a], &grid, 10.0);
        assert!((patches[0].1.width.unwrap() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rotation_about_selection_center() {
        let a = element(0.0, 0.0, 20.0, 20.0);
        let transform = SelectionTransform {
            from: a.bounds(),
            to: a.bounds(),
            rotation: 180.0,
        };
        let (origin, _, _, rotation) = transform.apply_to(&a, 10.0);
        assert!((origin.x - 20.0).abs() < 1e-9);
        assert!((origin.y - 20.0).abs() < 1e-9);
        assert!((rotation - 180.0).abs() < f64::EPSILON);
    }
}
