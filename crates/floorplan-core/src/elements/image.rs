//! Placed raster image element.

use serde::{Deserialize, Serialize};

/// Image-specific fields. The pixel data lives with the host; only its source is kept.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Image {
    pub src: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImagePatch {
    pub src: Option<String>,
}

impl Image {
    pub fn apply(&mut self, patch: &ImagePatch) {
        if let Some(src) = &patch.src {
            self.src = src.clone();
        }
    }
}
