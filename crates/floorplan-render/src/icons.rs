//! Icon identities and their accent colours.
//!
//! Glyph outlines belong to the drawing backend; the projection only says
//! which icon goes where and in what colour.

use floorplan_core::elements::SerializableColor;
use floorplan_core::tools::palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Booth,
    Furniture,
    Door,
    Plant,
    Wall,
    Line,
    Text,
    Meeting,
    Restroom,
    Emergency,
    Medical,
    Childcare,
    Accessible,
    Restaurant,
    Cafeteria,
    Info,
    Atm,
    Elevator,
    Transportation,
    NoSmoking,
    Baggage,
}

impl IconKind {
    pub fn color(self) -> SerializableColor {
        match self {
            IconKind::Booth => palette::BOOTH,
            IconKind::Furniture => palette::FURNITURE,
            IconKind::Door => palette::DOOR,
            IconKind::Plant => palette::PLANT,
            IconKind::Wall => palette::WALL,
            IconKind::Line => palette::LINE,
            IconKind::Text => palette::TEXT,
            IconKind::Meeting => palette::MEETING,
            IconKind::Restroom => palette::RESTROOM,
            IconKind::Emergency => palette::EMERGENCY,
            IconKind::Medical => palette::MEDICAL,
            IconKind::Childcare => palette::CHILDCARE,
            IconKind::Accessible => palette::ACCESSIBLE,
            IconKind::Restaurant => palette::RESTAURANT,
            IconKind::Cafeteria => palette::CAFETERIA,
            IconKind::Info => palette::INFO,
            IconKind::Atm => palette::ATM,
            IconKind::Elevator => palette::ELEVATOR,
            IconKind::Transportation => palette::TRANSPORTATION,
            IconKind::NoSmoking => palette::NO_SMOKING,
            IconKind::Baggage => palette::BAGGAGE,
        }
    }

    /// Glyph key a backend looks the outline up by.
    pub fn name(self) -> &'static str {
        match self {
            IconKind::Booth => "booth",
            IconKind::Furniture => "furniture",
            IconKind::Door => "door",
            IconKind::Plant => "plant",
            IconKind::Wall => "wall",
            IconKind::Line => "line",
            IconKind::Text => "text",
            IconKind::Meeting => "meeting",
            IconKind::Restroom => "restroom",
            IconKind::Emergency => "emergency",
            IconKind::Medical => "medical",
            IconKind::Childcare => "childcare",
            IconKind::Accessible => "accessible",
            IconKind::Restaurant => "restaurant",
            IconKind::Cafeteria => "cafeteria",
            IconKind::Info => "info",
            IconKind::Atm => "atm",
            IconKind::Elevator => "elevator",
            IconKind::Transportation => "transportation",
            IconKind::NoSmoking => "no-smoking",
            IconKind::Baggage => "baggage",
        }
    }

    /// Icon for a furniture-type tag. Unknown tags get the sofa.
    pub fn for_furniture(furniture_type: &str) -> Self {
        match furniture_type {
            "booth" => IconKind::Booth,
            "door" => IconKind::Door,
            "plant" => IconKind::Plant,
            "wall" => IconKind::Wall,
            "line" => IconKind::Line,
            "text" => IconKind::Text,
            "meeting" => IconKind::Meeting,
            "restroom" => IconKind::Restroom,
            "emergency" => IconKind::Emergency,
            "medical" | "first-aid" => IconKind::Medical,
            "childcare" | "nursing-room" | "family-services" => IconKind::Childcare,
            "accessible" | "wheelchair-accessible" | "senior-assistance" => IconKind::Accessible,
            "restaurant" => IconKind::Restaurant,
            "cafeteria" => IconKind::Cafeteria,
            "info" | "information" | "info-point" | "lost-found" => IconKind::Info,
            "atm" => IconKind::Atm,
            "elevator" => IconKind::Elevator,
            "transportation" => IconKind::Transportation,
            "no-smoking" => IconKind::NoSmoking,
            "baggage" => IconKind::Baggage,
            _ => IconKind::Furniture,
        }
    }
}
