//! Accent colours shared by tool templates and icons.

use crate::elements::SerializableColor;

pub const BOOTH: SerializableColor = SerializableColor::rgb(0x42, 0x85, 0xF4);
pub const FURNITURE: SerializableColor = SerializableColor::rgb(0xA0, 0xA0, 0xA0);
pub const DOOR: SerializableColor = SerializableColor::rgb(0xDB, 0x44, 0x37);
pub const PLANT: SerializableColor = SerializableColor::rgb(0x0F, 0x9D, 0x58);
pub const WALL: SerializableColor = SerializableColor::rgb(0x8B, 0x45, 0x13);
pub const LINE: SerializableColor = SerializableColor::rgb(0x33, 0x33, 0x33);
pub const TEXT: SerializableColor = SerializableColor::rgb(0x33, 0x33, 0x33);
pub const SHAPE: SerializableColor = SerializableColor::rgb(0xF4, 0xB4, 0x00);
pub const MEETING: SerializableColor = SerializableColor::rgb(0x42, 0x85, 0xF4);
pub const RESTROOM: SerializableColor = SerializableColor::rgb(0x3F, 0x51, 0xB5);
pub const EMERGENCY: SerializableColor = SerializableColor::rgb(0xF4, 0x43, 0x36);
pub const MEDICAL: SerializableColor = SerializableColor::rgb(0xF4, 0x43, 0x36);
pub const CHILDCARE: SerializableColor = SerializableColor::rgb(0xCD, 0xDC, 0x39);
pub const ACCESSIBLE: SerializableColor = SerializableColor::rgb(0x00, 0xBC, 0xD4);
pub const RESTAURANT: SerializableColor = SerializableColor::rgb(0xFF, 0x98, 0x00);
pub const CAFETERIA: SerializableColor = SerializableColor::rgb(0xFF, 0xC1, 0x07);
pub const INFO: SerializableColor = SerializableColor::rgb(0x03, 0xA9, 0xF4);
pub const ATM: SerializableColor = SerializableColor::rgb(0x4C, 0xAF, 0x50);
pub const ELEVATOR: SerializableColor = SerializableColor::rgb(0x9C, 0x27, 0xB0);
pub const TRANSPORTATION: SerializableColor = SerializableColor::rgb(0x60, 0x7D, 0x8B);
pub const NO_SMOKING: SerializableColor = SerializableColor::rgb(0x9E, 0x9E, 0x9E);
pub const BAGGAGE: SerializableColor = SerializableColor::rgb(0x79, 0x55, 0x48);

/// Near-transparent white used behind amenity icons.
pub const GLASS: SerializableColor = SerializableColor::new(255, 255, 255, 51);
