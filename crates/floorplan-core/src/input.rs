//! Input events for pointer, keyboard and drag-and-drop.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    /// Ctrl on most platforms, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Pointer event in screen coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Up {
        position: Point,
        button: MouseButton,
    },
    Move {
        position: Point,
    },
    /// Wheel; negative `delta.y` scrolls up.
    Scroll {
        position: Point,
        delta: Vec2,
    },
    /// The pointer left the canvas.
    Leave,
}

impl PointerEvent {
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Up { position, .. }
            | PointerEvent::Move { position }
            | PointerEvent::Scroll { position, .. } => Some(*position),
            PointerEvent::Leave => None,
        }
    }

    /// Reject events carrying NaN or infinite coordinates.
    pub fn is_well_formed(&self) -> bool {
        let point_ok = self
            .position()
            .is_none_or(|p| p.x.is_finite() && p.y.is_finite());
        let delta_ok = match self {
            PointerEvent::Scroll { delta, .. } => delta.x.is_finite() && delta.y.is_finite(),
            _ => true,
        };
        point_ok && delta_ok
    }
}

/// A key press, named as the platform reports it (`"Delete"`, `"z"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: String,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }

    pub fn plain(key: impl Into<String>) -> Self {
        Self::new(key, Modifiers::NONE)
    }
}

/// MIME type that carries a tool id in a palette drop.
pub const TOOL_MIME: &str = "text/plain";

/// Data dropped onto the canvas from the tool palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropPayload {
    pub mime: String,
    pub data: String,
}

impl DropPayload {
    pub fn tool(tool: impl Into<String>) -> Self {
        Self {
            mime: TOOL_MIME.to_string(),
            data: tool.into(),
        }
    }

    /// The tool id, if this payload carries one.
    pub fn tool_id(&self) -> Option<&str> {
        let data = self.data.trim();
        (self.mime == TOOL_MIME && !data.is_empty()).then_some(data)
    }
}

/// Tracks the pointer between events.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current pointer position in screen coordinates.
    pub pointer_position: Point,
    /// Previous pointer position for delta calculations.
    pub previous_pointer_position: Point,
    /// Modifiers seen on the last button press.
    pub modifiers: Modifiers,
    /// Whether the pointer is over the canvas.
    pub inside: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event and return the screen-space movement it caused.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> Vec2 {
        match event {
            PointerEvent::Leave => {
                self.inside = false;
                Vec2::ZERO
            }
            other => {
                let Some(position) = other.position() else {
                    return Vec2::ZERO;
                };
                if let PointerEvent::Down { modifiers, .. } = other {
                    self.modifiers = *modifiers;
                }
                let delta = if self.inside {
                    position - self.pointer_position
                } else {
                    Vec2::ZERO
                };
                self.previous_pointer_position = self.pointer_position;
                self.pointer_position = position;
                self.inside = true;
                delta
            }
        }
    }

    /// Pointer movement since the previous event.
    pub fn pointer_delta(&self) -> Vec2 {
        self.pointer_position - self.previous_pointer_position
    }
}
