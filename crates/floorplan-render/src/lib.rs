//! Floor-plan render projection.
//!
//! Turns a scene store and the controller's overlay into a layer-ordered draw
//! list of `kurbo` geometry and `peniko` colours. Owns no state.

mod context;
mod draw_list;
pub mod icons;

pub use context::RenderContext;
pub use draw_list::{Band, DrawItem, DrawList, Paint, Primitive, StrokeStyle, build_draw_list};
pub use icons::IconKind;
