//! Door and emergency exit element.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key in the custom property map that marks an emergency exit.
pub const EMERGENCY_PROPERTY: &str = "isEmergency";

/// Opening direction of a door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorDirection {
    Left,
    #[default]
    Right,
    In,
    Out,
}

/// Door-specific fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Door {
    pub direction: DoorDirection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_emergency: Option<bool>,
    /// Icon tag; `"emergency"` also marks an emergency exit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub furniture_type: Option<String>,
}

impl Door {
    /// An exit counts as emergency if any of its markers say so.
    pub fn is_emergency(&self, custom: &Map<String, Value>) -> bool {
        self.is_emergency.unwrap_or(false)
            || custom.get(EMERGENCY_PROPERTY).and_then(Value::as_bool).unwrap_or(false)
            || self.furniture_type.as_deref() == Some("emergency")
    }

    pub fn apply(&mut self, patch: &DoorPatch) {
        if let Some(direction) = patch.direction {
            self.direction = direction;
        }
        if let Some(flag) = patch.is_emergency {
            self.is_emergency = Some(flag);
        }
        if let Some(tag) = &patch.furniture_type {
            self.furniture_type = Some(tag.clone());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DoorPatch {
    pub direction: Option<DoorDirection>,
    pub is_emergency: Option<bool>,
    pub furniture_type: Option<String>,
}
