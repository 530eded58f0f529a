//! Per-frame inputs to the projection.

use floorplan_core::{Overlay, SceneStore};
use kurbo::Size;
use peniko::Color;

/// Everything one frame is drawn from. Borrowed, never stored.
pub struct RenderContext<'a> {
    pub store: &'a SceneStore,
    /// Transient gesture state from the controller.
    pub overlay: Option<&'a Overlay>,
    /// Viewport size in screen pixels.
    pub viewport_size: Size,
    pub background_color: Color,
    pub grid_color: Color,
    pub selection_color: Color,
}

impl<'a> RenderContext<'a> {
    pub fn new(store: &'a SceneStore, viewport_size: Size) -> Self {
        Self {
            store,
            overlay: None,
            viewport_size,
            background_color: Color::WHITE,
            grid_color: Color::from_rgba8(0xDD, 0xDD, 0xDD, 255),
            selection_color: Color::from_rgba8(59, 130, 246, 255), // Blue
        }
    }

    pub fn with_overlay(mut self, overlay: &'a Overlay) -> Self {
        self.overlay = Some(overlay);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_grid_color(mut self, color: Color) -> Self {
        self.grid_color = color;
        self
    }

    pub fn with_selection_color(mut self, color: Color) -> Self {
        self.selection_color = color;
        self
    }
}
