//! Placement tools and their element templates.
//!
//! Each placement tool maps to a row in [`TEMPLATES`]. Adding a tool is a
//! table edit. Ids missing from the table get a generic furniture template.

pub mod palette;

use kurbo::{Point, Rect};
use serde_json::Value;

use crate::elements::{
    Booth, BoothDimensions, BoothStatus, Door, DoorDirection, ElementDraft, ElementKind,
    Furniture, Plant, SerializableColor, Shape, ShapeKind, Text, EMERGENCY_PROPERTY,
};

/// The pointer tool. It never creates elements.
pub const SELECT_TOOL: &str = "select";

/// Custom property holding a human-readable label.
pub const DESCRIPTION_PROPERTY: &str = "description";

/// How a drag gesture sizes the new element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sizing {
    /// Use the dragged rectangle.
    FromDrag,
    /// Always use the template size at the drag origin.
    Fixed,
}

/// Variant seed for a template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Seed {
    Booth,
    Text(&'static str),
    Shape(ShapeKind),
    Door {
        direction: DoorDirection,
        emergency: bool,
    },
    Furniture(&'static str),
    Plant(&'static str),
}

/// Default visual properties for one placement tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolTemplate {
    pub id: &'static str,
    pub seed: Seed,
    pub width: f64,
    pub height: f64,
    pub sizing: Sizing,
    pub fill: SerializableColor,
    pub stroke: SerializableColor,
    pub stroke_width: f64,
    pub layer: i64,
    pub description: Option<&'static str>,
}

const WHITE: SerializableColor = SerializableColor::white();
const CLEAR: SerializableColor = SerializableColor::transparent();
const DARK: SerializableColor = SerializableColor::rgb(0x33, 0x33, 0x33);
const NEUTRAL_FILL: SerializableColor = SerializableColor::rgb(0xF5, 0xF5, 0xF5);
const NEUTRAL_STROKE: SerializableColor = SerializableColor::rgb(0x9E, 0x9E, 0x9E);

const fn amenity(
    id: &'static str,
    furniture_type: &'static str,
    width: f64,
    height: f64,
    stroke: SerializableColor,
    description: &'static str,
) -> ToolTemplate {
    ToolTemplate {
        id,
        seed: Seed::Furniture(furniture_type),
        width,
        height,
        sizing: Sizing::Fixed,
        fill: palette::GLASS,
        stroke,
        stroke_width: 1.0,
        layer: 2,
        description: Some(description),
    }
}

/// Every known placement tool.
pub static TEMPLATES: &[ToolTemplate] = &[
    ToolTemplate {
        id: "booth",
        seed: Seed::Booth,
        width: 60.0,
        height: 60.0,
        sizing: Sizing::FromDrag,
        fill: WHITE,
        stroke: DARK,
        stroke_width: 1.0,
        layer: 1,
        description: None,
    },
    ToolTemplate {
        id: "line",
        seed: Seed::Shape(ShapeKind::Line),
        width: 80.0,
        height: 10.0,
        sizing: Sizing::FromDrag,
        fill: CLEAR,
        stroke: DARK,
        stroke_width: 2.0,
        layer: 1,
        description: None,
    },
    ToolTemplate {
        id: "arrow",
        seed: Seed::Shape(ShapeKind::Arrow),
        width: 80.0,
        height: 10.0,
        sizing: Sizing::FromDrag,
        fill: CLEAR,
        stroke: DARK,
        stroke_width: 2.0,
        layer: 1,
        description: None,
    },
    ToolTemplate {
        id: "wall",
        seed: Seed::Shape(ShapeKind::Rectangle),
        width: 80.0,
        height: 10.0,
        sizing: Sizing::FromDrag,
        fill: palette::WALL,
        stroke: SerializableColor::rgb(0x65, 0x43, 0x21),
        stroke_width: 2.0,
        layer: 1,
        description: None,
    },
    ToolTemplate {
        id: "rectangle",
        seed: Seed::Shape(ShapeKind::Rectangle),
        width: 60.0,
        height: 40.0,
        sizing: Sizing::FromDrag,
        fill: WHITE,
        stroke: DARK,
        stroke_width: 2.0,
        layer: 1,
        description: None,
    },
    ToolTemplate {
        id: "circle",
        seed: Seed::Shape(ShapeKind::Circle),
        width: 50.0,
        height: 50.0,
        sizing: Sizing::FromDrag,
        fill: WHITE,
        stroke: DARK,
        stroke_width: 2.0,
        layer: 1,
        description: None,
    },
    ToolTemplate {
        id: "text",
        seed: Seed::Text("Text"),
        width: 100.0,
        height: 30.0,
        sizing: Sizing::FromDrag,
        fill: palette::TEXT,
        stroke: CLEAR,
        stroke_width: 0.0,
        layer: 3,
        description: None,
    },
    ToolTemplate {
        id: "door",
        seed: Seed::Door {
            direction: DoorDirection::Right,
            emergency: false,
        },
        width: 30.0,
        height: 5.0,
        sizing: Sizing::Fixed,
        fill: SerializableColor::rgb(0xA0, 0x52, 0x2D),
        stroke: SerializableColor::rgb(0x80, 0x00, 0x00),
        stroke_width: 1.0,
        layer: 2,
        description: None,
    },
    ToolTemplate {
        id: "emergency-exit",
        seed: Seed::Door {
            direction: DoorDirection::Out,
            emergency: true,
        },
        width: 40.0,
        height: 10.0,
        sizing: Sizing::Fixed,
        fill: SerializableColor::rgb(0xFF, 0xEB, 0xEE),
        stroke: palette::EMERGENCY,
        stroke_width: 2.0,
        layer: 2,
        description: Some("Emergency Exit"),
    },
    ToolTemplate {
        id: "furniture",
        seed: Seed::Furniture("sofa"),
        width: 60.0,
        height: 40.0,
        sizing: Sizing::Fixed,
        fill: SerializableColor::rgb(0xC0, 0xC0, 0xC0),
        stroke: SerializableColor::rgb(0x80, 0x80, 0x80),
        stroke_width: 1.0,
        layer: 2,
        description: None,
    },
    ToolTemplate {
        id: "meeting-room",
        seed: Seed::Furniture("meeting"),
        width: 80.0,
        height: 60.0,
        sizing: Sizing::Fixed,
        fill: SerializableColor::rgb(0xE3, 0xF2, 0xFD),
        stroke: palette::MEETING,
        stroke_width: 1.0,
        layer: 2,
        description: Some("Meeting/Conference Area"),
    },
    ToolTemplate {
        id: "restroom",
        seed: Seed::Furniture("restroom"),
        width: 50.0,
        height: 50.0,
        sizing: Sizing::Fixed,
        fill: SerializableColor::rgb(0xE8, 0xEA, 0xF6),
        stroke: palette::RESTROOM,
        stroke_width: 1.0,
        layer: 2,
        description: Some("Restroom Area"),
    },
    ToolTemplate {
        id: "plant",
        seed: Seed::Plant("tree"),
        width: 40.0,
        height: 40.0,
        sizing: Sizing::Fixed,
        fill: palette::GLASS,
        stroke: palette::PLANT,
        stroke_width: 1.0,
        layer: 0,
        description: None,
    },
    amenity("restaurant", "restaurant", 60.0, 60.0, palette::RESTAURANT, "Restaurant/Dining Area"),
    amenity("information", "info", 40.0, 40.0, palette::INFO, "Information Desk"),
    amenity("info-point", "info", 40.0, 40.0, palette::INFO, "Info Point"),
    amenity("lost-found", "info", 40.0, 40.0, palette::INFO, "Lost Found"),
    amenity("cafeteria", "cafeteria", 70.0, 50.0, palette::CAFETERIA, "Cafeteria/Food Service"),
    amenity("atm", "atm", 30.0, 30.0, palette::ATM, "ATM/Banking Services"),
    amenity("elevator", "elevator", 40.0, 40.0, palette::ELEVATOR, "Elevator"),
    amenity("medical", "medical", 50.0, 40.0, palette::MEDICAL, "Medical Services/First Aid"),
    amenity("first-aid", "medical", 50.0, 40.0, palette::MEDICAL, "Medical Services/First Aid"),
    amenity("childcare", "childcare", 50.0, 40.0, palette::CHILDCARE, "Childcare Area"),
    amenity("nursing-room", "childcare", 50.0, 40.0, palette::CHILDCARE, "Nursing Room"),
    amenity("family-services", "childcare", 50.0, 40.0, palette::CHILDCARE, "Family Services"),
    amenity("wheelchair-accessible", "accessible", 40.0, 40.0, palette::ACCESSIBLE, "Wheelchair Accessible"),
    amenity("senior-assistance", "accessible", 40.0, 40.0, palette::ACCESSIBLE, "Senior Assistance"),
    amenity("mens-restroom", "restroom", 40.0, 40.0, palette::RESTROOM, "Men's Restroom"),
    amenity("womens-restroom", "restroom", 40.0, 40.0, palette::RESTROOM, "Women's Restroom"),
    amenity("no-smoking", "no-smoking", 40.0, 40.0, palette::NO_SMOKING, "No Smoking"),
    amenity("transportation", "transportation", 60.0, 60.0, palette::TRANSPORTATION, "Transportation Area"),
    amenity("baggage", "baggage", 60.0, 60.0, palette::BAGGAGE, "Baggage Services"),
];

/// Find the table row for a tool id.
pub fn lookup(tool: &str) -> Option<&'static ToolTemplate> {
    TEMPLATES.iter().find(|t| t.id == tool)
}

/// Whether the tool places elements.
pub fn is_placement_tool(tool: &str) -> bool {
    !tool.is_empty() && tool != SELECT_TOOL
}

/// `"lost-found"` -> `"Lost Found"`.
pub fn title_case(tool: &str) -> String {
    tool.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A resolved template: a table row, or the generic fallback for an unknown id.
#[derive(Debug, Clone, PartialEq)]
pub enum Template {
    Known(&'static ToolTemplate),
    Generic { furniture_type: String },
}

impl Template {
    pub const GENERIC_WIDTH: f64 = 50.0;
    pub const GENERIC_HEIGHT: f64 = 40.0;

    /// Resolve a placement tool. `None` for the select tool.
    pub fn resolve(tool: &str) -> Option<Self> {
        if !is_placement_tool(tool) {
            return None;
        }
        Some(match lookup(tool) {
            Some(row) => Template::Known(row),
            None => Template::Generic {
                furniture_type: tool.to_string(),
            },
        })
    }

    pub fn default_size(&self) -> (f64, f64) {
        match self {
            Template::Known(row) => (row.width, row.height),
            Template::Generic { .. } => (Self::GENERIC_WIDTH, Self::GENERIC_HEIGHT),
        }
    }

    pub fn sizing(&self) -> Sizing {
        match self {
            Template::Known(row) => row.sizing,
            Template::Generic { .. } => Sizing::Fixed,
        }
    }

    /// Element for a completed drag from `rect`.
    pub fn for_drag(&self, rect: Rect, booth_count: usize) -> ElementDraft {
        let rect = rect.abs();
        let bounds = match self.sizing() {
            Sizing::FromDrag => rect,
            Sizing::Fixed => {
                let (w, h) = self.default_size();
                Rect::new(rect.x0, rect.y0, rect.x0 + w, rect.y0 + h)
            }
        };
        self.instantiate(bounds, booth_count)
    }

    /// Element of default size centred on `center`.
    pub fn for_drop(&self, center: Point, booth_count: usize) -> ElementDraft {
        let (w, h) = self.default_size();
        let bounds = Rect::from_center_size(center, (w, h));
        self.instantiate(bounds, booth_count)
    }

    /// Build the draft for exact `bounds`.
    pub fn instantiate(&self, bounds: Rect, booth_count: usize) -> ElementDraft {
        let row = match self {
            Template::Known(row) => row,
            Template::Generic { furniture_type } => {
                return ElementDraft::new(
                    ElementKind::Furniture(Furniture::new(furniture_type.clone())),
                    bounds,
                )
                .with_colors(NEUTRAL_FILL, NEUTRAL_STROKE)
                .with_stroke_width(1.0)
                .with_layer(2)
                .with_property(DESCRIPTION_PROPERTY, Value::String(title_case(furniture_type)));
            }
        };

        let (width, height) = (bounds.width(), bounds.height());
        let kind = match row.seed {
            Seed::Booth => ElementKind::Booth(Booth {
                number: format!("B-{}", booth_count + 1),
                status: BoothStatus::Available,
                dimensions: BoothDimensions::from_size(width, height),
            }),
            Seed::Text(content) => ElementKind::Text(Text::new(content)),
            Seed::Shape(shape_type) => ElementKind::Shape(Shape {
                shape_type,
                points: shape_type
                    .is_linear()
                    .then(|| vec![0.0, 0.0, width, height]),
            }),
            Seed::Door {
                direction,
                emergency,
            } => ElementKind::Door(Door {
                direction,
                is_emergency: None,
                furniture_type: emergency.then(|| "emergency".to_string()),
            }),
            Seed::Furniture(tag) => ElementKind::Furniture(Furniture::new(tag)),
            Seed::Plant(tag) => ElementKind::Plant(Plant::new(tag)),
        };

        let mut draft = ElementDraft::new(kind, bounds)
            .with_colors(row.fill, row.stroke)
            .with_stroke_width(row.stroke_width)
            .with_layer(row.layer);
        if let Seed::Door { emergency: true, .. } = row.seed {
            draft = draft.with_property(EMERGENCY_PROPERTY, Value::Bool(true));
        }
        if let Some(description) = row.description {
            draft = draft.with_property(DESCRIPTION_PROPERTY, Value::String(description.into()));
        }
        draft
    }
}
