//! Exhibition booth element.

use serde::{Deserialize, Serialize};

use super::SerializableColor;

/// Sales status of a booth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoothStatus {
    #[default]
    Available,
    Reserved,
    Sold,
}

impl BoothStatus {
    /// Translucent fill used to tint a booth by its status.
    pub fn tint(&self) -> SerializableColor {
        match self {
            BoothStatus::Available => SerializableColor::new(255, 255, 255, 179),
            BoothStatus::Reserved => SerializableColor::new(255, 249, 196, 179),
            BoothStatus::Sold => SerializableColor::new(255, 205, 210, 179),
        }
    }
}

/// Human-readable size labels.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoothDimensions {
    pub imperial: String,
    pub metric: String,
}

impl BoothDimensions {
    /// Derive labels from a size in canvas units (1 unit = 1 inch).
    pub fn from_size(width: f64, height: f64) -> Self {
        Self {
            imperial: format!("{}'x{}'", (width / 12.0).round(), (height / 12.0).round()),
            metric: format!(
                "{}m x {}m",
                (width * 0.0254).round(),
                (height * 0.0254).round()
            ),
        }
    }
}

/// Booth-specific fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Booth {
    pub number: String,
    pub status: BoothStatus,
    pub dimensions: BoothDimensions,
}

/// Partial update for booth fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoothPatch {
    pub number: Option<String>,
    pub status: Option<BoothStatus>,
    pub dimensions: Option<BoothDimensions>,
}

impl Booth {
    pub fn apply(&mut self, patch: &BoothPatch) {
        if let Some(number) = &patch.number {
            self.number = number.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(dimensions) = &patch.dimensions {
            self.dimensions = dimensions.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_labels() {
        let dims = BoothDimensions::from_size(120.0, 60.0);
        assert_eq!(dims.imperial, "10'x5'");
        assert_eq!(dims.metric, "3m x 2m");
    }

    #[test]
    fn test_patch_keeps_untouched_fields() {
        let mut booth = Booth {
            number: "B-1".into(),
            status: BoothStatus::Available,
            dimensions: BoothDimensions::from_size(60.0, 60.0),
        };
        booth.apply(&BoothPatch {
            status: Some(BoothStatus::Sold),
            ..Default::default()
        });
        assert_eq!(booth.number, "B-1");
        assert_eq!(booth.status, BoothStatus::Sold);
        assert_eq!(booth.dimensions.imperial, "5'x5'");
    }
}
