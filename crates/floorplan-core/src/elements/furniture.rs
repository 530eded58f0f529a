use serde::{Deserialize, Serialize};

/// Furniture-specific fields. The type tag only selects an icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Furniture {
    pub furniture_type: String,
}

impl Default for Furniture {
    fn default() -> Self {
        Self::new("sofa")
    }
}

impl Furniture {
    pub fn new(furniture_type: impl Into<String>) -> Self {
        Self {
            furniture_type: furniture_type.into(),
        }
    }

    pub fn apply(&mut self, patch: &FurniturePatch) {
        if let Some(tag) = &patch.furniture_type {
            self.furniture_type = tag.clone();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FurniturePatch {
    pub furniture_type: Option<String>,
}
