use serde::{Deserialize, Serialize};

/// Plant-specific fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Plant {
    pub plant_type: String,
}

impl Default for Plant {
    fn default() -> Self {
        Self::new("tree")
    }
}

impl Plant {
    pub fn new(plant_type: impl Into<String>) -> Self {
        Self {
            plant_type: plant_type.into(),
        }
    }

    pub fn apply(&mut self, patch: &PlantPatch) {
        if let Some(tag) = &patch.plant_type {
            self.plant_type = tag.clone();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlantPatch {
    pub plant_type: Option<String>,
}
