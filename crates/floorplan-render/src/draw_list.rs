//! Scene to draw-list projection.

use floorplan_core::elements::{
    Element, ElementId, ElementKind, FontStyle, SerializableColor, ShapeKind, TextAlign,
};
use floorplan_core::handles::{HANDLE_SIZE, HandleKind};
use floorplan_core::tools::palette;
use floorplan_core::{Overlay, SceneStore};
use kurbo::{Affine, Circle, Point, Rect, RoundedRect};
use peniko::Color;

use crate::context::RenderContext;
use crate::icons::IconKind;

/// Paint bands, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Band {
    Background,
    Flooring,
    Grid,
    Elements,
    Overlay,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    /// Dash and gap lengths.
    pub dash: Option<[f64; 2]>,
}

impl StrokeStyle {
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    pub fn dashed(mut self, dash: f64, gap: f64) -> Self {
        self.dash = Some([dash, gap]);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Paint {
    pub fill: Option<Color>,
    pub stroke: Option<StrokeStyle>,
}

impl Paint {
    fn new(fill: Color, stroke: StrokeStyle) -> Self {
        Self {
            fill: Some(fill),
            stroke: Some(stroke),
        }
    }
}

/// A drawing primitive in its item's local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        rect: RoundedRect,
        paint: Paint,
    },
    Circle {
        circle: Circle,
        paint: Paint,
    },
    Polyline {
        points: Vec<Point>,
        stroke: StrokeStyle,
    },
    Label {
        text: String,
        origin: Point,
        /// Wrap width; `None` for a single run.
        width: Option<f64>,
        font_size: f64,
        font_family: String,
        font_style: FontStyle,
        align: TextAlign,
        color: Color,
    },
    Icon {
        kind: IconKind,
        rect: Rect,
        color: Color,
    },
    Image {
        src: String,
        rect: Rect,
        opacity: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub band: Band,
    pub element: Option<ElementId>,
    /// Local to canvas coordinates.
    pub transform: Affine,
    pub opacity: f64,
    pub primitives: Vec<Primitive>,
}

impl DrawItem {
    fn canvas(band: Band, primitives: Vec<Primitive>) -> Self {
        Self {
            band,
            element: None,
            transform: Affine::IDENTITY,
            opacity: 1.0,
            primitives,
        }
    }
}

/// A frame's worth of drawing, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    /// Canvas to screen.
    pub view: Affine,
    pub clear_color: Color,
    pub items: Vec<DrawItem>,
}

impl DrawList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn band(&self, band: Band) -> impl Iterator<Item = &DrawItem> {
        self.items.iter().filter(move |item| item.band == band)
    }

    /// Element ids in the order they are painted.
    pub fn element_order(&self) -> Vec<ElementId> {
        self.band(Band::Elements).filter_map(|item| item.element).collect()
    }
}

const LABEL_COLOR: SerializableColor = SerializableColor::rgb(0x33, 0x33, 0x33);
const DIMENSION_COLOR: SerializableColor = SerializableColor::rgb(0x66, 0x66, 0x66);
const CORNER_RADIUS: f64 = 4.0;
const ICON_BASE_SIZE: f64 = 40.0;
/// Grids denser than this on screen are not drawn.
const MIN_GRID_SPACING_PX: f64 = 2.0;
/// Upper bound on grid lines in one frame.
const MAX_GRID_LINES: f64 = 20_000.0;

fn color(c: SerializableColor) -> Color {
    c.into()
}

fn with_opacity(color: Color, opacity: f64) -> Color {
    let rgba = color.to_rgba8();
    let alpha = (rgba.a as f64 * opacity.clamp(0.0, 1.0)).round() as u8;
    Color::from_rgba8(rgba.r, rgba.g, rgba.b, alpha)
}

/// The element's own stroke, or `fallback` when it has none.
fn stroke_or(element: &Element, fallback: SerializableColor) -> Color {
    if element.stroke.a == 0 {
        color(fallback)
    } else {
        color(element.stroke)
    }
}

fn local_box(element: &Element) -> Rect {
    Rect::new(0.0, 0.0, element.width, element.height)
}

/// Inset box holding an icon, `margin` as a fraction of each side.
fn icon_box(element: &Element, margin: f64) -> Rect {
    let x = (element.width * margin).round();
    let y = (element.height * margin).round();
    Rect::new(
        x,
        y,
        x + element.width * (1.0 - 2.0 * margin),
        y + element.height * (1.0 - 2.0 * margin),
    )
}

/// Square icon centred in the box, scaled to 80% of the short side (never below 70%).
fn centered_icon_box(element: &Element) -> Rect {
    let scale = (element.width.min(element.height) * 0.8 / ICON_BASE_SIZE).max(0.7);
    let size = ICON_BASE_SIZE * scale;
    let x = ((element.width - size) / 2.0).round();
    let y = ((element.height - size) / 2.0).round();
    Rect::new(x, y, x + size, y + size)
}

fn element_primitives(element: &Element) -> Vec<Primitive> {
    let bounds = local_box(element);
    let glass = color(palette::GLASS);

    match &element.kind {
        ElementKind::Booth(booth) => vec![
            Primitive::Rect {
                rect: bounds.to_rounded_rect(CORNER_RADIUS),
                paint: Paint::new(
                    color(booth.status.tint()),
                    StrokeStyle::solid(stroke_or(element, palette::BOOTH), 1.0),
                ),
            },
            Primitive::Icon {
                kind: IconKind::Booth,
                rect: icon_box(element, 0.2),
                color: color(IconKind::Booth.color()),
            },
            Primitive::Label {
                text: booth.number.clone(),
                origin: Point::new(5.0, 5.0),
                width: None,
                font_size: 14.0,
                font_family: "Arial".to_string(),
                font_style: FontStyle::Normal,
                align: TextAlign::Left,
                color: color(LABEL_COLOR),
            },
            Primitive::Label {
                text: booth.dimensions.imperial.clone(),
                origin: Point::new(5.0, element.height - 20.0),
                width: None,
                font_size: 10.0,
                font_family: "Arial".to_string(),
                font_style: FontStyle::Normal,
                align: TextAlign::Left,
                color: color(DIMENSION_COLOR),
            },
        ],
        ElementKind::Text(text) => vec![Primitive::Label {
            text: text.text.clone(),
            origin: Point::ZERO,
            width: Some(element.width),
            font_size: text.font_size,
            font_family: text.font_family.clone(),
            font_style: text.font_style,
            align: text.align,
            color: color(element.fill),
        }],
        ElementKind::Shape(shape) => {
            let stroke = StrokeStyle::solid(color(element.stroke), element.stroke_width);
            match shape.shape_type {
                ShapeKind::Rectangle => vec![
                    Primitive::Rect {
                        rect: bounds.to_rounded_rect(0.0),
                        paint: Paint::new(color(element.fill), stroke),
                    },
                    Primitive::Icon {
                        kind: IconKind::Wall,
                        rect: centered_icon_box(element),
                        color: color(IconKind::Wall.color()),
                    },
                ],
                ShapeKind::Circle => vec![Primitive::Circle {
                    circle: Circle::new(bounds.center(), element.width.min(element.height) / 2.0),
                    paint: Paint::new(color(element.fill), stroke),
                }],
                ShapeKind::Line => vec![Primitive::Polyline {
                    points: shape.polyline(element.width, element.height),
                    stroke,
                }],
                ShapeKind::Arrow => vec![Primitive::Polyline {
                    points: shape.polyline(element.width, element.height),
                    stroke: stroke.dashed(10.0, 5.0),
                }],
            }
        }
        ElementKind::Image(image) => vec![Primitive::Image {
            src: image.src.clone(),
            rect: bounds,
            opacity: 1.0,
        }],
        ElementKind::Door(door) => {
            let emergency = door.is_emergency(&element.custom_properties);
            let (icon, icon_color) = if emergency {
                (IconKind::Emergency, color(palette::EMERGENCY))
            } else {
                (IconKind::Door, stroke_or(element, palette::DOOR))
            };
            let radius = if emergency { CORNER_RADIUS } else { 0.0 };
            vec![
                Primitive::Rect {
                    rect: bounds.to_rounded_rect(radius),
                    paint: Paint::new(glass, StrokeStyle::solid(stroke_or(element, palette::DOOR), 1.0)),
                },
                Primitive::Icon {
                    kind: icon,
                    rect: icon_box(element, 0.1),
                    color: icon_color,
                },
            ]
        }
        ElementKind::Furniture(furniture) => {
            let icon = IconKind::for_furniture(&furniture.furniture_type);
            vec![
                Primitive::Rect {
                    rect: bounds.to_rounded_rect(CORNER_RADIUS),
                    paint: Paint::new(glass, StrokeStyle::solid(stroke_or(element, icon.color()), 1.0)),
                },
                Primitive::Icon {
                    kind: icon,
                    rect: icon_box(element, 0.1),
                    color: color(icon.color()),
                },
            ]
        }
        ElementKind::Plant(_) => vec![
            Primitive::Circle {
                circle: Circle::new(bounds.center(), element.width.min(element.height) / 2.2),
                paint: Paint::new(glass, StrokeStyle::solid(stroke_or(element, palette::PLANT), 1.0)),
            },
            Primitive::Icon {
                kind: IconKind::Plant,
                rect: icon_box(element, 0.1),
                color: color(palette::PLANT),
            },
        ],
    }
}

fn element_item(band: Band, element: &Element, opacity: f64) -> DrawItem {
    DrawItem {
        band,
        element: Some(element.id),
        transform: element.transform(),
        opacity,
        primitives: element_primitives(element),
    }
}

fn background_item(ctx: &RenderContext) -> DrawItem {
    let store = ctx.store;
    let size = store.canvas_size();
    let mut primitives = vec![Primitive::Rect {
        rect: Rect::new(0.0, 0.0, size.width, size.height).to_rounded_rect(0.0),
        paint: Paint {
            fill: Some(ctx.background_color),
            stroke: None,
        },
    }];
    if let Some(image) = store.background_image() {
        primitives.push(Primitive::Image {
            src: image.url.clone(),
            rect: image.bounds(),
            opacity: image.opacity,
        });
    }
    DrawItem::canvas(Band::Background, primitives)
}

fn grid_item(ctx: &RenderContext) -> Option<DrawItem> {
    let grid = ctx.store.grid();
    if !grid.enabled || !grid.size.is_finite() || grid.size <= 0.0 {
        return None;
    }
    if grid.size * ctx.store.zoom() < MIN_GRID_SPACING_PX {
        log::trace!("grid too dense at zoom {}, skipped", ctx.store.zoom());
        return None;
    }
    let size = ctx.store.canvas_size();
    let columns = (size.width / grid.size).floor();
    let rows = (size.height / grid.size).floor();
    if !(columns + rows).is_finite() || columns + rows > MAX_GRID_LINES {
        log::debug!("grid of {columns}x{rows} cells exceeds the line budget, skipped");
        return None;
    }
    let (columns, rows) = (columns as usize, rows as usize);
    let stroke = StrokeStyle::solid(with_opacity(ctx.grid_color, grid.opacity), 1.0);

    let vertical = (0..=columns).map(|i| {
        let x = i as f64 * grid.size;
        vec![Point::new(x, 0.0), Point::new(x, size.height)]
    });
    let horizontal = (0..=rows).map(|i| {
        let y = i as f64 * grid.size;
        vec![Point::new(0.0, y), Point::new(size.width, y)]
    });
    let primitives = vertical
        .chain(horizontal)
        .map(|points| Primitive::Polyline { points, stroke })
        .collect();
    Some(DrawItem::canvas(Band::Grid, primitives))
}

/// An element as it should appear under the live gesture.
fn shown(element: &Element, store: &SceneStore, overlay: Option<&Overlay>) -> Element {
    let mut shown = element.clone();
    let Some(overlay) = overlay else {
        return shown;
    };
    if let Some(drag) = overlay.drag {
        if drag.id == element.id {
            shown.x = drag.position.x;
            shown.y = drag.position.y;
        }
    }
    if let Some(transform) = overlay.transform {
        if store.is_selected(element.id) {
            let min_size = store.config().min_element_size;
            let (origin, width, height, rotation) = transform.apply_to(element, min_size);
            shown.x = origin.x;
            shown.y = origin.y;
            shown.width = width;
            shown.height = height;
            shown.rotation = rotation;
        }
    }
    shown
}

fn overlay_item(ctx: &RenderContext, overlay: &Overlay) -> Option<DrawItem> {
    let accent = ctx.selection_color;
    let wash = with_opacity(accent, 0.1);
    let zoom = ctx.store.zoom();
    let mut primitives = Vec::new();

    if let Some(rect) = overlay.creation {
        primitives.push(Primitive::Rect {
            rect: rect.to_rounded_rect(0.0),
            paint: Paint::new(wash, StrokeStyle::solid(accent, 1.0 / zoom).dashed(5.0, 5.0)),
        });
    }
    if let Some(rect) = overlay.marquee {
        primitives.push(Primitive::Rect {
            rect: rect.to_rounded_rect(0.0),
            paint: Paint::new(wash, StrokeStyle::solid(accent, 1.0 / zoom)),
        });
    }
    if let Some(bounds) = overlay.selection_bounds {
        primitives.push(Primitive::Rect {
            rect: bounds.to_rounded_rect(0.0),
            paint: Paint {
                fill: None,
                stroke: Some(StrokeStyle::solid(accent, 1.0 / zoom)),
            },
        });
    }

    // Handles keep a constant on-screen size.
    let half = HANDLE_SIZE / zoom / 2.0;
    let handle_paint = Paint::new(Color::WHITE, StrokeStyle::solid(accent, 1.0 / zoom));
    for handle in &overlay.handles {
        let primitive = match handle.kind {
            HandleKind::Rotate => Primitive::Circle {
                circle: Circle::new(handle.position, half),
                paint: handle_paint,
            },
            HandleKind::Corner(_) | HandleKind::Edge(_) => Primitive::Rect {
                rect: Rect::from_center_size(handle.position, (half * 2.0, half * 2.0))
                    .to_rounded_rect(0.0),
                paint: handle_paint,
            },
        };
        primitives.push(primitive);
    }

    (!primitives.is_empty()).then(|| DrawItem::canvas(Band::Overlay, primitives))
}

/// Project the scene into a draw list.
///
/// Bands paint background, flooring, grid, elements by layer, then overlay.
/// A dragged element is painted last within its band.
pub fn build_draw_list(ctx: &RenderContext) -> DrawList {
    let store = ctx.store;
    let mut items = vec![background_item(ctx)];

    let flooring = store.flooring();
    if flooring.enabled {
        let mut floor: Vec<&Element> = flooring.elements.iter().collect();
        floor.sort_by_key(|e| e.layer);
        items.extend(
            floor
                .into_iter()
                .map(|e| element_item(Band::Flooring, e, flooring.opacity)),
        );
    }

    items.extend(grid_item(ctx));

    let dragged = ctx.overlay.and_then(|o| o.drag).map(|d| d.id);
    let mut raised = None;
    for element in store.elements_by_layer() {
        let item = element_item(Band::Elements, &shown(element, store, ctx.overlay), 1.0);
        if Some(element.id) == dragged {
            raised = Some(item);
        } else {
            items.push(item);
        }
    }
    items.extend(raised);

    if let Some(overlay) = ctx.overlay {
        items.extend(overlay_item(ctx, overlay));
    }

    log::trace!("draw list built ({} items)", items.len());
    DrawList {
        view: store.camera().transform(),
        clear_color: ctx.background_color,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorplan_core::elements::{
        Booth, BoothStatus, Door, ElementDraft, Furniture, Plant, Shape,
    };
    use floorplan_core::{InteractionController, Modifiers, MouseButton, PointerEvent};
    use kurbo::Size;

    fn viewport() -> Size {
        Size::new(800.0, 600.0)
    }

    fn draft(kind: ElementKind, x: f64, y: f64, w: f64, h: f64) -> ElementDraft {
        ElementDraft::new(kind, Rect::new(x, y, x + w, y + h))
    }

    #[test]
    fn test_bands_in_order() {
        let mut store = SceneStore::new();
        store.set_flooring_enabled(true);
        store
            .add_flooring_element(draft(
                ElementKind::Shape(Shape::new(ShapeKind::Rectangle)),
                0.0,
                0.0,
                500.0,
                500.0,
            ))
            .unwrap();
        store.add_element(draft(ElementKind::Plant(Plant::default()), 0.0, 0.0, 40.0, 40.0));
        let overlay = InteractionController::new().overlay(&store);

        let list = build_draw_list(&RenderContext::new(&store, viewport()).with_overlay(&overlay));
        let bands: Vec<Band> = list.items.iter().map(|i| i.band).collect();
        let mut sorted = bands.clone();
        sorted.sort();
        assert_eq!(bands, sorted);
        assert_eq!(bands.first(), Some(&Band::Background));
        assert_eq!(bands.last(), Some(&Band::Overlay));
        assert_eq!(list.band(Band::Flooring).count(), 1);
        assert!((list.band(Band::Flooring).next().unwrap().opacity - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_disabled_flooring_and_grid_are_skipped() {
        let mut store = SceneStore::new();
        store
            .add_flooring_element(draft(
                ElementKind::Shape(Shape::new(ShapeKind::Rectangle)),
                0.0,
                0.0,
                100.0,
                100.0,
            ))
            .unwrap();
        store.set_grid(false, None, None, None);
        let list = build_draw_list(&RenderContext::new(&store, viewport()));
        assert_eq!(list.band(Band::Flooring).count(), 0);
        assert_eq!(list.band(Band::Grid).count(), 0);
    }

    #[test]
    fn test_grid_lines_cover_canvas() {
        let store = SceneStore::new();
        let list = build_draw_list(&RenderContext::new(&store, viewport()));
        let grid = list.band(Band::Grid).next().unwrap();
        // 2000 / 10 + 1 columns and 1500 / 10 + 1 rows.
        assert_eq!(grid.primitives.len(), 201 + 151);
    }

    #[test]
    fn test_dense_grid_is_skipped_when_zoomed_out() {
        let mut store = SceneStore::new();
        store.set_grid(true, Some(1.0), None, None);
        store.set_zoom(0.25);
        let list = build_draw_list(&RenderContext::new(&store, viewport()));
        assert_eq!(list.band(Band::Grid).count(), 0);

        store.set_zoom(4.0);
        let list = build_draw_list(&RenderContext::new(&store, viewport()));
        assert_eq!(list.band(Band::Grid).next().unwrap().primitives.len(), 2001 + 1501);
    }

    #[test]
    fn test_grid_line_count_is_bounded() {
        let mut plan = floorplan_core::FloorPlan::default();
        plan.canvas_size = floorplan_core::CanvasSize {
            width: 100_000.0,
            height: 100_000.0,
        };
        plan.grid.size = 1.0;
        plan.zoom = 4.0;
        let mut store = SceneStore::new();
        store.load_floor_plan(plan);

        let list = build_draw_list(&RenderContext::new(&store, viewport()));
        assert_eq!(list.band(Band::Grid).count(), 0);
    }

    #[test]
    fn test_elements_sorted_by_layer_stable() {
        let mut store = SceneStore::new();
        let a = store.add_element(draft(ElementKind::Plant(Plant::default()), 0.0, 0.0, 40.0, 40.0).with_layer(2));
        let b = store.add_element(draft(ElementKind::Plant(Plant::default()), 50.0, 0.0, 40.0, 40.0).with_layer(0));
        let c = store.add_element(draft(ElementKind::Plant(Plant::default()), 100.0, 0.0, 40.0, 40.0).with_layer(2));
        let list = build_draw_list(&RenderContext::new(&store, viewport()));
        assert_eq!(list.element_order(), vec![b, a, c]);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let mut store = SceneStore::new();
        store.add_element(draft(ElementKind::Booth(Booth::default()), 0.0, 0.0, 100.0, 100.0));
        let ctx = RenderContext::new(&store, viewport());
        assert_eq!(build_draw_list(&ctx), build_draw_list(&ctx));
    }

    #[test]
    fn test_booth_primitives() {
        let mut store = SceneStore::new();
        let id = store.add_element(draft(
            ElementKind::Booth(Booth {
                number: "B-7".into(),
                status: BoothStatus::Sold,
                ..Booth::default()
            }),
            10.0,
            20.0,
            100.0,
            80.0,
        ));
        let list = build_draw_list(&RenderContext::new(&store, viewport()));
        let item = list.band(Band::Elements).find(|i| i.element == Some(id)).unwrap();
        assert_eq!(item.transform, Affine::translate((10.0, 20.0)));
        match &item.primitives[0] {
            Primitive::Rect { paint, .. } => {
                assert_eq!(paint.fill, Some(color(BoothStatus::Sold.tint())));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(item.primitives.iter().any(|p| matches!(
            p,
            Primitive::Label { text, .. } if text == "B-7"
        )));
    }

    #[test]
    fn test_arrow_is_dashed_line_is_not() {
        let mut store = SceneStore::new();
        let line = store.add_element(draft(ElementKind::Shape(Shape::new(ShapeKind::Line)), 0.0, 0.0, 50.0, 20.0));
        let arrow = store.add_element(draft(ElementKind::Shape(Shape::new(ShapeKind::Arrow)), 0.0, 0.0, 50.0, 20.0));
        let list = build_draw_list(&RenderContext::new(&store, viewport()));
        let dash_of = |id| {
            list.band(Band::Elements)
                .find(|i| i.element == Some(id))
                .and_then(|i| match &i.primitives[0] {
                    Primitive::Polyline { stroke, points } => {
                        assert_eq!(points, &vec![Point::ZERO, Point::new(50.0, 20.0)]);
                        Some(stroke.dash)
                    }
                    _ => None,
                })
                .unwrap()
        };
        assert_eq!(dash_of(line), None);
        assert_eq!(dash_of(arrow), Some([10.0, 5.0]));
    }

    #[test]
    fn test_emergency_door_from_custom_property() {
        let mut store = SceneStore::new();
        let id = store.add_element(
            draft(ElementKind::Door(Door::default()), 0.0, 0.0, 40.0, 10.0)
                .with_property("isEmergency", serde_json::Value::Bool(true)),
        );
        let list = build_draw_list(&RenderContext::new(&store, viewport()));
        let item = list.band(Band::Elements).find(|i| i.element == Some(id)).unwrap();
        assert!(item.primitives.iter().any(|p| matches!(
            p,
            Primitive::Icon { kind: IconKind::Emergency, .. }
        )));
        match &item.primitives[0] {
            Primitive::Rect { rect, .. } => assert!(rect.radii().top_left > 0.0),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_furniture_icon_follows_type() {
        let mut store = SceneStore::new();
        let id = store.add_element(draft(
            ElementKind::Furniture(Furniture::new("first-aid")),
            0.0,
            0.0,
            50.0,
            50.0,
        ));
        let list = build_draw_list(&RenderContext::new(&store, viewport()));
        let item = list.band(Band::Elements).find(|i| i.element == Some(id)).unwrap();
        assert!(matches!(
            item.primitives[1],
            Primitive::Icon { kind: IconKind::Medical, .. }
        ));
    }

    #[test]
    fn test_dragged_element_painted_last_at_preview() {
        let mut store = SceneStore::new();
        let low = store.add_element(draft(ElementKind::Plant(Plant::default()), 0.0, 0.0, 40.0, 40.0).with_layer(0));
        let high = store.add_element(draft(ElementKind::Plant(Plant::default()), 100.0, 0.0, 40.0, 40.0).with_layer(5));
        store.deselect_all();

        let mut ctl = InteractionController::new();
        ctl.handle_pointer(
            &mut store,
            &PointerEvent::Down {
                position: Point::new(10.0, 10.0),
                button: MouseButton::Left,
                modifiers: Modifiers::NONE,
            },
        );
        ctl.handle_pointer(&mut store, &PointerEvent::Move { position: Point::new(60.0, 10.0) });
        let overlay = ctl.overlay(&store);

        let list = build_draw_list(&RenderContext::new(&store, viewport()).with_overlay(&overlay));
        assert_eq!(list.element_order(), vec![high, low]);
        let dragged = list.band(Band::Elements).last().unwrap();
        assert_eq!(dragged.transform, Affine::translate((50.0, 0.0)));
        // Layer is untouched.
        assert_eq!(store.element(low).unwrap().layer, 0);
    }

    #[test]
    fn test_view_transform_follows_camera() {
        let mut store = SceneStore::new();
        store.set_zoom(2.0);
        store.set_offset(10.0, 20.0);
        let list = build_draw_list(&RenderContext::new(&store, viewport()));
        assert_eq!(list.view * Point::new(1.0, 1.0), Point::new(12.0, 22.0));
    }
}
