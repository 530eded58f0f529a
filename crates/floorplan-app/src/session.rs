//! Scripted editing sessions.

use floorplan_core::{DropPayload, InteractionController, KeyEvent, PointerEvent, SceneStore};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// One recorded input, in screen coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    Pointer(PointerEvent),
    Key(KeyEvent),
    Drop { payload: DropPayload, position: Point },
    /// Pick a tool from the palette.
    Tool(String),
}

/// What a replay did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub events: usize,
    pub shortcuts: usize,
    pub drops: usize,
}

pub fn parse_session(json: &str) -> serde_json::Result<Vec<SessionEvent>> {
    serde_json::from_str(json)
}

/// Feed events through the controller in order.
pub fn replay(
    controller: &mut InteractionController,
    store: &mut SceneStore,
    events: &[SessionEvent],
) -> ReplayStats {
    let mut stats = ReplayStats::default();
    for event in events {
        match event {
            SessionEvent::Pointer(pointer) => controller.handle_pointer(store, pointer),
            SessionEvent::Key(key) => {
                if controller.handle_key(store, key).is_some() {
                    stats.shortcuts += 1;
                }
            }
            SessionEvent::Drop { payload, position } => {
                if controller.handle_drop(store, payload, *position).is_some() {
                    stats.drops += 1;
                }
            }
            SessionEvent::Tool(tool) => {
                controller.cancel();
                store.set_active_tool(tool);
            }
        }
        stats.events += 1;
    }
    log::debug!("replayed {} events", stats.events);
    stats
}
