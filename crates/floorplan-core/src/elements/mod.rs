//! Element definitions for the floor plan.

mod booth;
mod color;
mod door;
mod furniture;
mod image;
mod list;
mod plant;
mod shape;
mod text;

pub use booth::{Booth, BoothDimensions, BoothPatch, BoothStatus};
pub use color::{ColorParseError, SerializableColor};
pub use door::{Door, DoorDirection, DoorPatch, EMERGENCY_PROPERTY};
pub use furniture::{Furniture, FurniturePatch};
pub use image::{Image, ImagePatch};
pub use list::ElementList;
pub use plant::{Plant, PlantPatch};
pub use shape::{Shape, ShapeKind, ShapePatch};
pub use text::{FontStyle, Text, TextAlign, TextPatch};

use kurbo::{Affine, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::{SceneError, SceneResult};

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// Smallest width or height an element may be resized to.
pub const MIN_ELEMENT_SIZE: f64 = 10.0;

/// Variant payload of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    Booth(Booth),
    Text(Text),
    Shape(Shape),
    Image(Image),
    Door(Door),
    Furniture(Furniture),
    Plant(Plant),
}

impl ElementKind {
    /// Every value the `type` tag may take.
    pub const TAGS: [&'static str; 7] = [
        "booth",
        "text",
        "shape",
        "image",
        "door",
        "furniture",
        "plant",
    ];

    /// The `type` tag of this variant.
    pub fn tag(&self) -> &'static str {
        match self {
            ElementKind::Booth(_) => "booth",
            ElementKind::Text(_) => "text",
            ElementKind::Shape(_) => "shape",
            ElementKind::Image(_) => "image",
            ElementKind::Door(_) => "door",
            ElementKind::Furniture(_) => "furniture",
            ElementKind::Plant(_) => "plant",
        }
    }

    pub fn is_known_tag(tag: &str) -> bool {
        Self::TAGS.contains(&tag)
    }
}

fn default_fill() -> SerializableColor {
    SerializableColor::white()
}

fn default_stroke() -> SerializableColor {
    SerializableColor::rgb(0x33, 0x33, 0x33)
}

fn default_stroke_width() -> f64 {
    1.0
}

fn default_draggable() -> bool {
    true
}

/// A placed scene object.
///
/// `selected` mirrors the store's selection list and is not part of equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,
    #[serde(flatten)]
    pub kind: ElementKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_fill")]
    pub fill: SerializableColor,
    #[serde(default = "default_stroke")]
    pub stroke: SerializableColor,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default)]
    pub layer: i64,
    #[serde(default)]
    pub selected: bool,
    #[serde(default = "default_draggable")]
    pub draggable: bool,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub custom_properties: Map<String, Value>,
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.kind == other.kind
            && self.x == other.x
            && self.y == other.y
            && self.width == other.width
            && self.height == other.height
            && self.rotation == other.rotation
            && self.fill == other.fill
            && self.stroke == other.stroke
            && self.stroke_width == other.stroke_width
            && self.layer == other.layer
            && self.draggable == other.draggable
            && self.custom_properties == other.custom_properties
    }
}

impl Element {
    /// Axis-aligned box ignoring rotation.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Element-local to canvas transform: translate to the origin, then rotate about it.
    pub fn transform(&self) -> Affine {
        Affine::translate(Vec2::new(self.x, self.y)) * Affine::rotate(self.rotation.to_radians())
    }

    /// Canvas-space box of the rotated element.
    pub fn rotated_bounds(&self) -> Rect {
        self.transform()
            .transform_rect_bbox(Rect::new(0.0, 0.0, self.width, self.height))
    }

    /// Hit test in canvas coordinates, honouring rotation.
    pub fn hit_test(&self, point: Point) -> bool {
        let local = self.transform().inverse() * point;
        local.x >= 0.0 && local.x <= self.width && local.y >= 0.0 && local.y <= self.height
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.tag()
    }

    pub fn as_booth(&self) -> Option<&Booth> {
        match &self.kind {
            ElementKind::Booth(booth) => Some(booth),
            _ => None,
        }
    }

    pub fn as_booth_mut(&mut self) -> Option<&mut Booth> {
        match &mut self.kind {
            ElementKind::Booth(booth) => Some(booth),
            _ => None,
        }
    }

    /// Copy under a fresh id, shifted by `offset` and unselected.
    pub fn duplicate(&self, offset: Vec2) -> Self {
        Self {
            id: Uuid::new_v4(),
            x: self.x + offset.x,
            y: self.y + offset.y,
            selected: false,
            ..self.clone()
        }
    }

    /// Merge a patch into this element.
    ///
    /// A variant patch for a different kind is rejected before any field changes.
    /// Sizes are clamped to `min_size`.
    pub fn apply(&mut self, patch: &ElementPatch, min_size: f64) -> SceneResult<()> {
        if let Some(kind_patch) = &patch.kind {
            if kind_patch.tag() != self.kind.tag() {
                return Err(SceneError::VariantMismatch {
                    element: self.kind.tag(),
                    patch: kind_patch.tag(),
                });
            }
        }

        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(width) = patch.width {
            self.width = width.max(min_size);
        }
        if let Some(height) = patch.height {
            self.height = height.max(min_size);
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = rotation;
        }
        if let Some(fill) = patch.fill {
            self.fill = fill;
        }
        if let Some(stroke) = patch.stroke {
            self.stroke = stroke;
        }
        if let Some(stroke_width) = patch.stroke_width {
            self.stroke_width = stroke_width;
        }
        if let Some(layer) = patch.layer {
            self.layer = layer;
        }
        if let Some(draggable) = patch.draggable {
            self.draggable = draggable;
        }
        if let Some(custom) = &patch.custom_properties {
            self.custom_properties = custom.clone();
        }

        match (&mut self.kind, &patch.kind) {
            (_, None) => {}
            (ElementKind::Booth(v), Some(KindPatch::Booth(p))) => v.apply(p),
            (ElementKind::Text(v), Some(KindPatch::Text(p))) => v.apply(p),
            (ElementKind::Shape(v), Some(KindPatch::Shape(p))) => v.apply(p),
            (ElementKind::Image(v), Some(KindPatch::Image(p))) => v.apply(p),
            (ElementKind::Door(v), Some(KindPatch::Door(p))) => v.apply(p),
            (ElementKind::Furniture(v), Some(KindPatch::Furniture(p))) => v.apply(p),
            (ElementKind::Plant(v), Some(KindPatch::Plant(p))) => v.apply(p),
            // Tags were compared above.
            (_, Some(_)) => {}
        }
        Ok(())
    }
}

/// Everything needed to create an element; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDraft {
    #[serde(flatten)]
    pub kind: ElementKind,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default = "default_draft_size")]
    pub width: f64,
    #[serde(default = "default_draft_size")]
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_fill")]
    pub fill: SerializableColor,
    #[serde(default = "default_stroke")]
    pub stroke: SerializableColor,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default)]
    pub layer: i64,
    #[serde(default = "default_draggable")]
    pub draggable: bool,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub custom_properties: Map<String, Value>,
}

fn default_draft_size() -> f64 {
    50.0
}

impl ElementDraft {
    pub fn new(kind: ElementKind, bounds: Rect) -> Self {
        let bounds = bounds.abs();
        Self {
            kind,
            x: bounds.x0,
            y: bounds.y0,
            width: bounds.width(),
            height: bounds.height(),
            rotation: 0.0,
            fill: default_fill(),
            stroke: default_stroke(),
            stroke_width: default_stroke_width(),
            layer: 0,
            draggable: true,
            custom_properties: Map::new(),
        }
    }

    pub fn with_colors(mut self, fill: SerializableColor, stroke: SerializableColor) -> Self {
        self.fill = fill;
        self.stroke = stroke;
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_layer(mut self, layer: i64) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.custom_properties.insert(key.into(), value);
        self
    }

    /// Parse an untyped payload, checking the `type` tag first.
    pub fn from_json(value: Value) -> SceneResult<Self> {
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(SceneError::MissingElementType)?;
        if !ElementKind::is_known_tag(tag) {
            return Err(SceneError::UnknownElementType(tag.to_string()));
        }
        serde_json::from_value(value).map_err(SceneError::MalformedElement)
    }

    /// Materialize with an assigned id, unselected.
    pub fn into_element(self, id: ElementId) -> Element {
        Element {
            id,
            kind: self.kind,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            rotation: self.rotation,
            fill: self.fill,
            stroke: self.stroke,
            stroke_width: self.stroke_width,
            layer: self.layer,
            selected: false,
            draggable: self.draggable,
            custom_properties: self.custom_properties,
        }
    }
}

/// Variant half of an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum KindPatch {
    Booth(BoothPatch),
    Text(TextPatch),
    Shape(ShapePatch),
    Image(ImagePatch),
    Door(DoorPatch),
    Furniture(FurniturePatch),
    Plant(PlantPatch),
}

impl KindPatch {
    pub fn tag(&self) -> &'static str {
        match self {
            KindPatch::Booth(_) => "booth",
            KindPatch::Text(_) => "text",
            KindPatch::Shape(_) => "shape",
            KindPatch::Image(_) => "image",
            KindPatch::Door(_) => "door",
            KindPatch::Furniture(_) => "furniture",
            KindPatch::Plant(_) => "plant",
        }
    }
}

/// Partial update; `None` fields are left as they are.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub fill: Option<SerializableColor>,
    pub stroke: Option<SerializableColor>,
    pub stroke_width: Option<f64>,
    pub layer: Option<i64>,
    pub draggable: Option<bool>,
    pub custom_properties: Option<Map<String, Value>>,
    pub kind: Option<KindPatch>,
}

impl ElementPatch {
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn layer(layer: i64) -> Self {
        Self {
            layer: Some(layer),
            ..Self::default()
        }
    }

    pub fn kind(kind: KindPatch) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    /// Whether the patch carries no changes.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
