//! Floor-plan editor core.
//!
//! Platform-agnostic scene model, editing operations and pointer interaction
//! for laying out exhibition floor plans.

pub mod camera;
pub mod config;
pub mod controller;
pub mod elements;
pub mod error;
pub mod handles;
pub mod history;
pub mod input;
pub mod shortcuts;
pub mod snap;
pub mod storage;
pub mod store;
pub mod tools;

pub use camera::{Camera, to_canvas_coords};
pub use config::{CanvasSize, ConfigError, EditorConfig};
pub use controller::{DragPreview, GestureState, InteractionController, Overlay};
pub use elements::{Element, ElementDraft, ElementId, ElementKind, ElementList, ElementPatch};
pub use error::{SceneError, SceneResult};
pub use handles::{Handle, HandleKind, SelectionTransform};
pub use history::{History, Snapshot};
pub use input::{DropPayload, InputState, KeyEvent, Modifiers, MouseButton, PointerEvent};
pub use shortcuts::{ShortcutAction, ShortcutRegistry};
pub use snap::{GridConfig, SnapResult, intersects, snap_to_grid, snap_value};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError, StorageResult};
pub use store::{BackgroundImage, BackgroundImagePatch, ExportView, FloorPlan, Flooring, SceneStore};
pub use tools::{SELECT_TOOL, Template};
