//! Free text label element.

use serde::{Deserialize, Serialize};

/// Horizontal alignment within the element box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontStyle {
    #[default]
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "bold")]
    Bold,
    #[serde(rename = "italic")]
    Italic,
    #[serde(rename = "italic bold")]
    BoldItalic,
}

/// Text-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Text {
    pub text: String,
    pub font_size: f64,
    pub font_family: String,
    pub align: TextAlign,
    pub font_style: FontStyle,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_size: Self::DEFAULT_FONT_SIZE,
            font_family: Self::DEFAULT_FONT_FAMILY.to_string(),
            align: TextAlign::default(),
            font_style: FontStyle::default(),
        }
    }
}

impl Text {
    pub const DEFAULT_FONT_SIZE: f64 = 16.0;
    pub const DEFAULT_FONT_FAMILY: &'static str = "Arial";

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn apply(&mut self, patch: &TextPatch) {
        if let Some(text) = &patch.text {
            self.text = text.clone();
        }
        if let Some(size) = patch.font_size {
            self.font_size = size;
        }
        if let Some(family) = &patch.font_family {
            self.font_family = family.clone();
        }
        if let Some(align) = patch.align {
            self.align = align;
        }
        if let Some(style) = patch.font_style {
            self.font_style = style;
        }
    }
}

/// Partial update for text fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextPatch {
    pub text: Option<String>,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub align: Option<TextAlign>,
    pub font_style: Option<FontStyle>,
}
