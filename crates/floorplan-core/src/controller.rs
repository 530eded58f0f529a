//! Interaction controller: turns pointer, keyboard and drop events into store calls.
//!
//! The controller owns only transient gesture state. Everything it commits goes
//! through [`SceneStore`] mutators, and an abandoned gesture leaves the store as
//! it was.

use kurbo::{Point, Rect, Vec2};

use crate::elements::{ElementId, ElementPatch};
use crate::handles::{
    Handle, HandleKind, SelectionTransform, hit_test_handles, resize_box, rotation_delta,
    selection_handles,
};
use crate::input::{DropPayload, InputState, KeyEvent, MouseButton, PointerEvent};
use crate::shortcuts::{ShortcutAction, ShortcutRegistry};
use crate::snap::rect_from_corners;
use crate::store::SceneStore;
use crate::tools::{SELECT_TOOL, Template};

/// Where the controller is in a gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureState {
    Idle,
    /// View follows raw screen-space pointer movement.
    Panning,
    /// Drag-to-create with a placement tool. Points are canvas coordinates.
    Creating {
        tool: String,
        anchor: Point,
        current: Point,
    },
    MarqueeSelecting {
        anchor: Point,
        current: Point,
    },
    /// Pressed on an element. `moved` flips once the drag threshold is crossed.
    DraggingElement {
        id: ElementId,
        press: Point,
        grab: Point,
        origin: Point,
        preview: Point,
        moved: bool,
    },
    TransformingSelection {
        handle: HandleKind,
        start: Point,
        transform: SelectionTransform,
    },
}

/// Live position of an element being dragged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragPreview {
    pub id: ElementId,
    pub position: Point,
}

/// Transient, unversioned state for the render projection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    pub marquee: Option<Rect>,
    /// Box the placement tool would create on release.
    pub creation: Option<Rect>,
    pub drag: Option<DragPreview>,
    pub transform: Option<SelectionTransform>,
    /// Selection outline, including any live transform.
    pub selection_bounds: Option<Rect>,
    pub handles: Vec<Handle>,
}

#[derive(Debug, Clone)]
pub struct InteractionController {
    gesture: GestureState,
    input: InputState,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionController {
    pub fn new() -> Self {
        Self {
            gesture: GestureState::Idle,
            input: InputState::new(),
        }
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn is_idle(&self) -> bool {
        self.gesture == GestureState::Idle
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Abandon the current gesture without committing anything.
    pub fn cancel(&mut self) {
        if !self.is_idle() {
            log::debug!("gesture cancelled: {:?}", self.gesture);
        }
        self.gesture = GestureState::Idle;
    }

    pub fn handle_pointer(&mut self, store: &mut SceneStore, event: &PointerEvent) {
        if !event.is_well_formed() {
            log::warn!("ignoring malformed pointer event: {event:?}");
            return;
        }
        let screen_delta = self.input.handle_pointer_event(event);

        match *event {
            PointerEvent::Down {
                position,
                button,
                modifiers,
            } => self.pointer_down(store, position, button, modifiers.ctrl, modifiers.shift),
            PointerEvent::Move { position } => self.pointer_move(store, position, screen_delta),
            PointerEvent::Up { position, .. } => self.pointer_up(store, position),
            PointerEvent::Scroll { position, delta } => {
                if self.is_manipulating() {
                    return;
                }
                store.wheel_zoom(position, delta.y);
            }
            PointerEvent::Leave => self.cancel(),
        }
    }

    /// True while an element drag or selection transform is live.
    pub fn is_manipulating(&self) -> bool {
        matches!(
            self.gesture,
            GestureState::DraggingElement { moved: true, .. }
                | GestureState::TransformingSelection { .. }
        )
    }

    fn pointer_down(
        &mut self,
        store: &mut SceneStore,
        screen: Point,
        button: MouseButton,
        ctrl: bool,
        shift: bool,
    ) {
        if !self.is_idle() {
            log::debug!("pointer down during {:?}, ignored", self.gesture);
            return;
        }

        let next = match button {
            MouseButton::Right => return,
            MouseButton::Middle => GestureState::Panning,
            MouseButton::Left if ctrl => GestureState::Panning,
            MouseButton::Left => {
                let point = store.camera().screen_to_world(screen);
                self.press_primary(store, screen, point, shift)
            }
        };
        log::debug!("gesture start: {next:?}");
        self.gesture = next;
    }

    fn press_primary(
        &self,
        store: &mut SceneStore,
        screen: Point,
        point: Point,
        shift: bool,
    ) -> GestureState {
        let tool = store.active_tool();
        if tool != SELECT_TOOL {
            return GestureState::Creating {
                tool: tool.to_string(),
                anchor: point,
                current: point,
            };
        }

        if let Some(handle) = self.handle_at(store, point) {
            if let Some(bounds) = store.selection_bounds() {
                return GestureState::TransformingSelection {
                    handle,
                    start: point,
                    transform: SelectionTransform::identity(bounds),
                };
            }
        }

        let Some((id, origin)) = store.element_at(point).map(|e| (e.id, Point::new(e.x, e.y)))
        else {
            return GestureState::MarqueeSelecting {
                anchor: point,
                current: point,
            };
        };

        if shift {
            store.toggle_selection(id);
            if !store.is_selected(id) {
                return GestureState::Idle;
            }
        } else if !store.is_selected(id) {
            store.select_elements(&[id]);
        }

        GestureState::DraggingElement {
            id,
            press: screen,
            grab: point,
            origin,
            preview: origin,
            moved: false,
        }
    }

    fn handle_at(&self, store: &SceneStore, point: Point) -> Option<HandleKind> {
        let bounds = store.selection_bounds()?;
        let config = store.config();
        let handles = selection_handles(bounds, config.rotate_handle_offset);
        hit_test_handles(&handles, point, config.handle_tolerance / store.zoom())
    }

    fn pointer_move(&mut self, store: &mut SceneStore, screen: Point, screen_delta: Vec2) {
        if self.gesture == GestureState::Panning {
            store.pan_by(screen_delta);
            return;
        }

        let point = store.camera().screen_to_world(screen);
        let config = store.config();
        match &mut self.gesture {
            GestureState::Idle | GestureState::Panning => {}
            GestureState::Creating { current, .. } | GestureState::MarqueeSelecting { current, .. } => {
                *current = point;
            }
            GestureState::DraggingElement {
                press,
                grab,
                origin,
                preview,
                moved,
                ..
            } => {
                if !*moved && (screen - *press).hypot() < config.drag_threshold {
                    return;
                }
                *moved = true;
                let target = *origin + (point - *grab);
                let grid = store.grid();
                *preview = Point::new(grid.snap_value(target.x), grid.snap_value(target.y));
            }
            GestureState::TransformingSelection {
                handle,
                start,
                transform,
            } => match handle {
                HandleKind::Rotate => {
                    transform.rotation = rotation_delta(transform.from.center(), *start, point);
                }
                resize => {
                    if let Some(to) =
                        resize_box(transform.from, *resize, point - *start, config.min_element_size)
                    {
                        transform.to = to;
                    }
                }
            },
        }
    }

    fn pointer_up(&mut self, store: &mut SceneStore, screen: Point) {
        let point = store.camera().screen_to_world(screen);
        let gesture = std::mem::replace(&mut self.gesture, GestureState::Idle);
        let threshold = store.config().gesture_threshold;

        match gesture {
            GestureState::Idle | GestureState::Panning => {}
            GestureState::Creating { tool, anchor, .. } => {
                let rect = rect_from_corners(anchor, point);
                if rect.width() <= threshold || rect.height() <= threshold {
                    log::debug!("creation drag too small, nothing created");
                    return;
                }
                if let Some(template) = Template::resolve(&tool) {
                    let draft = template.for_drag(rect, store.booth_count());
                    let id = store.add_element(draft);
                    log::debug!("created {tool} element {id}");
                }
            }
            GestureState::MarqueeSelecting { anchor, .. } => {
                let rect = rect_from_corners(anchor, point);
                if rect.width() > threshold && rect.height() > threshold {
                    let ids = store.elements_in_rect(rect);
                    log::debug!("marquee selected {} element(s)", ids.len());
                    store.select_elements(&ids);
                }
            }
            GestureState::DraggingElement {
                id,
                origin,
                preview,
                moved,
                ..
            } => {
                if moved && preview != origin {
                    if let Err(err) =
                        store.update_element(id, &ElementPatch::position(preview.x, preview.y))
                    {
                        log::warn!("drag commit failed: {err}");
                    }
                }
            }
            GestureState::TransformingSelection { transform, .. } => {
                if transform.is_identity() {
                    return;
                }
                let min_size = store.config().min_element_size;
                let batch = transform.commit(store.selected_elements(), store.grid(), min_size);
                if let Err(err) = store.update_elements(&batch) {
                    log::warn!("transform commit failed: {err}");
                }
            }
        }
    }

    /// Run the shortcut bound to `event`, if any.
    pub fn handle_key(&mut self, store: &mut SceneStore, event: &KeyEvent) -> Option<ShortcutAction> {
        let action = ShortcutRegistry::lookup(event)?;
        match action {
            ShortcutAction::DeleteSelection => {
                if store.selected_ids().is_empty() || self.is_manipulating() {
                    return None;
                }
                let ids = store.selected_ids().to_vec();
                store.delete_elements(&ids);
            }
            ShortcutAction::Undo => {
                self.cancel();
                store.undo();
            }
            ShortcutAction::Redo => {
                self.cancel();
                store.redo();
            }
            ShortcutAction::Duplicate => {
                if store.selected_ids().is_empty() {
                    return None;
                }
                let ids = store.selected_ids().to_vec();
                store.duplicate_elements(&ids);
            }
            ShortcutAction::SelectAll => store.select_all(),
            ShortcutAction::Cancel => {
                if self.is_idle() {
                    store.deselect_all();
                } else {
                    self.cancel();
                }
            }
        }
        Some(action)
    }

    /// Place the dropped tool's default-size template centred on the drop point.
    pub fn handle_drop(
        &mut self,
        store: &mut SceneStore,
        payload: &DropPayload,
        screen: Point,
    ) -> Option<ElementId> {
        if !(screen.x.is_finite() && screen.y.is_finite()) {
            log::warn!("ignoring drop at non-finite position");
            return None;
        }
        let Some(tool) = payload.tool_id() else {
            log::warn!("ignoring drop with mime {:?}", payload.mime);
            return None;
        };
        let Some(template) = Template::resolve(tool) else {
            log::warn!("ignoring drop of non-placement tool {tool:?}");
            return None;
        };

        let center = store.camera().screen_to_world(screen);
        let draft = template.for_drop(center, store.booth_count());
        let id = store.add_element(draft);
        store.set_active_tool(SELECT_TOOL);
        log::debug!("dropped {tool} as {id}");
        Some(id)
    }

    /// Transient state for drawing. Reads the latest store state.
    pub fn overlay(&self, store: &SceneStore) -> Overlay {
        let mut overlay = Overlay::default();
        let mut bounds = store.selection_bounds();

        match &self.gesture {
            GestureState::Idle | GestureState::Panning => {}
            GestureState::Creating {
                tool,
                anchor,
                current,
            } => {
                overlay.creation = Template::resolve(tool)
                    .is_some()
                    .then(|| rect_from_corners(*anchor, *current));
            }
            GestureState::MarqueeSelecting { anchor, current } => {
                overlay.marquee = Some(rect_from_corners(*anchor, *current));
            }
            GestureState::DraggingElement {
                id, preview, moved, ..
            } => {
                if *moved {
                    overlay.drag = Some(DragPreview {
                        id: *id,
                        position: *preview,
                    });
                    bounds = None;
                }
            }
            GestureState::TransformingSelection { transform, .. } => {
                overlay.transform = Some(*transform);
                bounds = Some(transform.to);
            }
        }

        if let Some(bounds) = bounds {
            overlay.selection_bounds = Some(bounds);
            if overlay.transform.is_none() && store.active_tool() == SELECT_TOOL {
                overlay.handles = selection_handles(bounds, store.config().rotate_handle_offset);
            }
        }
        overlay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Booth, ElementDraft, ElementKind, Plant};
    use crate::handles::Corner;
    use crate::input::Modifiers;

    fn down(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down {
            position: Point::new(x, y),
            button: MouseButton::Left,
            modifiers: Modifiers::NONE,
        }
    }

    fn down_with(x: f64, y: f64, button: MouseButton, modifiers: Modifiers) -> PointerEvent {
        PointerEvent::Down {
            position: Point::new(x, y),
            button,
            modifiers,
        }
    }

    fn mv(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move {
            position: Point::new(x, y),
        }
    }

    fn up(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Up {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    fn drive(ctl: &mut InteractionController, store: &mut SceneStore, events: &[PointerEvent]) {
        for event in events {
            ctl.handle_pointer(store, event);
        }
    }

    fn plant(store: &mut SceneStore, x: f64, y: f64, size: f64) -> ElementId {
        let id = store.add_element(ElementDraft::new(
            ElementKind::Plant(Plant::default()),
            Rect::new(x, y, x + size, y + size),
        ));
        store.deselect_all();
        id
    }

    #[test]
    fn test_secondary_button_ignored() {
        let mut store = SceneStore::new();
        let mut ctl = InteractionController::new();
        ctl.handle_pointer(
            &mut store,
            &down_with(10.0, 10.0, MouseButton::Right, Modifiers::NONE),
        );
        assert!(ctl.is_idle());
    }

    #[test]
    fn test_pan_uses_screen_delta() {
        let mut store = SceneStore::new();
        store.set_zoom(2.0);
        let mut ctl = InteractionController::new();
        drive(
            &mut ctl,
            &mut store,
            &[
                down_with(10.0, 10.0, MouseButton::Left, Modifiers::CTRL),
                mv(30.0, 15.0),
                up(30.0, 15.0),
            ],
        );
        assert_eq!(store.offset(), Vec2::new(20.0, 5.0));
        assert!(ctl.is_idle());
        assert!(!store.can_undo());
    }

    #[test]
    fn test_drag_create_booth() {
        let mut store = SceneStore::new();
        store.set_active_tool("booth");
        let mut ctl = InteractionController::new();
        drive(
            &mut ctl,
            &mut store,
            &[down(100.0, 100.0), mv(160.0, 140.0), up(160.0, 140.0)],
        );
        assert_eq!(store.elements().len(), 1);
        let booth = store.elements().iter().next().unwrap();
        assert_eq!(booth.bounds(), Rect::new(100.0, 100.0, 160.0, 140.0));
        assert_eq!(booth.as_booth().unwrap().number, "B-1");
        assert_eq!(store.selected_ids(), &[booth.id]);
    }

    #[test]
    fn test_drag_create_respects_zoom_and_reverse_drag() {
        let mut store = SceneStore::new();
        store.set_zoom(2.0);
        store.set_active_tool("wall");
        let mut ctl = InteractionController::new();
        drive(&mut ctl, &mut store, &[down(200.0, 200.0), up(100.0, 120.0)]);
        let wall = store.elements().iter().next().unwrap();
        assert_eq!(wall.bounds(), Rect::new(50.0, 60.0, 100.0, 100.0));
    }

    #[test]
    fn test_tiny_creation_drag_creates_nothing() {
        let mut store = SceneStore::new();
        store.set_active_tool("booth");
        let mut ctl = InteractionController::new();
        drive(&mut ctl, &mut store, &[down(0.0, 0.0), up(50.0, 4.0)]);
        assert!(store.elements().is_empty());
        assert!(!store.can_undo());
        assert!(ctl.is_idle());
    }

    #[test]
    fn test_fixed_size_tool_ignores_drag_extent() {
        let mut store = SceneStore::new();
        store.set_active_tool("door");
        let mut ctl = InteractionController::new();
        drive(&mut ctl, &mut store, &[down(10.0, 10.0), up(200.0, 200.0)]);
        let door = store.elements().iter().next().unwrap();
        assert!((door.width - 30.0).abs() < f64::EPSILON);
        assert!((door.height - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_creating_over_element_still_creates() {
        let mut store = SceneStore::new();
        plant(&mut store, 0.0, 0.0, 100.0);
        store.set_active_tool("booth");
        let mut ctl = InteractionController::new();
        drive(&mut ctl, &mut store, &[down(10.0, 10.0), up(50.0, 50.0)]);
        assert_eq!(store.elements().len(), 2);
    }

    #[test]
    fn test_marquee_selects_intersecting() {
        let mut store = SceneStore::new();
        let inside = plant(&mut store, 10.0, 10.0, 20.0);
        plant(&mut store, 60.0, 60.0, 20.0);
        let mut ctl = InteractionController::new();
        drive(
            &mut ctl,
            &mut store,
            &[down(0.0, 0.0), mv(25.0, 25.0), up(50.0, 50.0)],
        );
        assert_eq!(store.selected_ids(), &[inside]);
    }

    #[test]
    fn test_small_marquee_keeps_selection() {
        let mut store = SceneStore::new();
        let a = plant(&mut store, 100.0, 100.0, 20.0);
        store.select_elements(&[a]);
        let mut ctl = InteractionController::new();
        drive(&mut ctl, &mut store, &[down(0.0, 0.0), up(3.0, 3.0)]);
        assert_eq!(store.selected_ids(), &[a]);
    }

    #[test]
    fn test_click_selects_and_shift_toggles() {
        let mut store = SceneStore::new();
        let a = plant(&mut store, 0.0, 0.0, 40.0);
        let b = plant(&mut store, 100.0, 0.0, 40.0);
        let mut ctl = InteractionController::new();

        drive(&mut ctl, &mut store, &[down(10.0, 10.0), up(10.0, 10.0)]);
        assert_eq!(store.selected_ids(), &[a]);

        let shift_b = down_with(110.0, 10.0, MouseButton::Left, Modifiers::SHIFT);
        drive(&mut ctl, &mut store, &[shift_b.clone(), up(110.0, 10.0)]);
        assert_eq!(store.selected_ids(), &[a, b]);

        let shift_a = down_with(10.0, 10.0, MouseButton::Left, Modifiers::SHIFT);
        drive(&mut ctl, &mut store, &[shift_a, up(10.0, 10.0)]);
        assert_eq!(store.selected_ids(), &[b]);
    }

    #[test]
    fn test_click_without_travel_does_not_commit() {
        let mut store = SceneStore::new();
        plant(&mut store, 0.0, 0.0, 40.0);
        let depth = store.history().undo_len();
        let mut ctl = InteractionController::new();
        drive(
            &mut ctl,
            &mut store,
            &[down(10.0, 10.0), mv(11.0, 11.0), up(11.0, 11.0)],
        );
        assert_eq!(store.history().undo_len(), depth);
    }

    #[test]
    fn test_element_drag_snaps_and_commits() {
        let mut store = SceneStore::new();
        let id = plant(&mut store, 0.0, 0.0, 40.0);
        let mut ctl = InteractionController::new();
        drive(&mut ctl, &mut store, &[down(10.0, 10.0), mv(33.0, 46.0)]);

        let overlay = ctl.overlay(&store);
        let preview = overlay.drag.unwrap();
        assert_eq!(preview.position, Point::new(20.0, 40.0));
        // Store is untouched until release.
        assert!(store.element(id).unwrap().x.abs() < f64::EPSILON);

        ctl.handle_pointer(&mut store, &up(33.0, 46.0));
        let moved = store.element(id).unwrap();
        assert!((moved.x - 20.0).abs() < f64::EPSILON);
        assert!((moved.y - 40.0).abs() < f64::EPSILON);
        store.undo();
        assert!(store.element(id).unwrap().x.abs() < f64::EPSILON);
    }

    #[test]
    fn test_leave_abandons_drag() {
        let mut store = SceneStore::new();
        let id = plant(&mut store, 0.0, 0.0, 40.0);
        let depth = store.history().undo_len();
        let mut ctl = InteractionController::new();
        drive(
            &mut ctl,
            &mut store,
            &[down(10.0, 10.0), mv(80.0, 80.0), PointerEvent::Leave, up(80.0, 80.0)],
        );
        assert!(store.element(id).unwrap().x.abs() < f64::EPSILON);
        assert_eq!(store.history().undo_len(), depth);
        assert!(ctl.is_idle());
    }

    #[test]
    fn test_wheel_ignored_during_drag() {
        let mut store = SceneStore::new();
        plant(&mut store, 0.0, 0.0, 40.0);
        let mut ctl = InteractionController::new();
        drive(&mut ctl, &mut store, &[down(10.0, 10.0), mv(30.0, 30.0)]);
        ctl.handle_pointer(
            &mut store,
            &PointerEvent::Scroll {
                position: Point::new(30.0, 30.0),
                delta: Vec2::new(0.0, -1.0),
            },
        );
        assert!((store.zoom() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_wheel_zoom_clamps() {
        let mut store = SceneStore::new();
        let mut ctl = InteractionController::new();
        let zoom_in = PointerEvent::Scroll {
            position: Point::new(100.0, 100.0),
            delta: Vec2::new(0.0, -1.0),
        };
        for _ in 0..40 {
            ctl.handle_pointer(&mut store, &zoom_in);
        }
        assert!((store.zoom() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_commits_batch() {
        let mut store = SceneStore::new();
        let a = plant(&mut store, 0.0, 0.0, 50.0);
        let b = plant(&mut store, 50.0, 0.0, 50.0);
        store.select_elements(&[a, b]);
        let depth = store.history().undo_len();
        let mut ctl = InteractionController::new();

        // Bottom-right handle sits at (100, 50).
        drive(
            &mut ctl,
            &mut store,
            &[down(100.0, 50.0), mv(200.0, 100.0)],
        );
        assert!(matches!(
            ctl.gesture(),
            GestureState::TransformingSelection {
                handle: HandleKind::Corner(Corner::BottomRight),
                ..
            }
        ));
        ctl.handle_pointer(&mut store, &up(200.0, 100.0));

        assert_eq!(store.history().undo_len(), depth + 1);
        assert_eq!(store.element(a).unwrap().bounds(), Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(store.element(b).unwrap().bounds(), Rect::new(100.0, 0.0, 200.0, 100.0));
    }

    #[test]
    fn test_resize_below_minimum_keeps_previous_box() {
        let mut store = SceneStore::new();
        let a = plant(&mut store, 0.0, 0.0, 50.0);
        store.select_elements(&[a]);
        let mut ctl = InteractionController::new();
        drive(
            &mut ctl,
            &mut store,
            &[down(50.0, 50.0), mv(70.0, 70.0), mv(-100.0, -100.0), up(-100.0, -100.0)],
        );
        assert_eq!(store.element(a).unwrap().bounds(), Rect::new(0.0, 0.0, 70.0, 70.0));
    }

    #[test]
    fn test_rotate_commits_rotation() {
        let mut store = SceneStore::new();
        let a = plant(&mut store, 0.0, 0.0, 40.0);
        store.select_elements(&[a]);
        store.set_grid(true, None, Some(false), None);
        let mut ctl = InteractionController::new();
        // Rotate handle is 30 above the top-centre: (20, -30). Centre is (20, 20).
        drive(
            &mut ctl,
            &mut store,
            &[down(20.0, -30.0), mv(70.0, 20.0), up(70.0, 20.0)],
        );
        let rotated = store.element(a).unwrap();
        assert!((rotated.rotation - 90.0).abs() < 1e-9);
        // Origin (0,0) rotated 90 degrees about (20,20).
        assert!((rotated.x - 40.0).abs() < 1e-9);
        assert!(rotated.y.abs() < 1e-9);
    }

    #[test]
    fn test_escape_cancels_then_deselects() {
        let mut store = SceneStore::new();
        let a = plant(&mut store, 100.0, 100.0, 40.0);
        store.select_elements(&[a]);
        let mut ctl = InteractionController::new();
        ctl.handle_pointer(&mut store, &down(0.0, 0.0));
        assert!(!ctl.is_idle());

        ctl.handle_key(&mut store, &KeyEvent::plain("Escape"));
        assert!(ctl.is_idle());
        assert_eq!(store.selected_ids(), &[a]);

        ctl.handle_key(&mut store, &KeyEvent::plain("Escape"));
        assert!(store.selected_ids().is_empty());
    }

    #[test]
    fn test_delete_key() {
        let mut store = SceneStore::new();
        let a = plant(&mut store, 0.0, 0.0, 40.0);
        plant(&mut store, 100.0, 0.0, 40.0);
        let mut ctl = InteractionController::new();

        let depth = store.history().undo_len();
        assert_eq!(ctl.handle_key(&mut store, &KeyEvent::plain("Delete")), None);
        assert_eq!(store.history().undo_len(), depth);

        store.select_elements(&[a]);
        ctl.handle_key(&mut store, &KeyEvent::plain("Backspace"));
        assert_eq!(store.elements().len(), 1);
        assert!(store.element(a).is_none());
    }

    #[test]
    fn test_shift_delete_still_deletes() {
        let mut store = SceneStore::new();
        let a = plant(&mut store, 0.0, 0.0, 40.0);
        let mut ctl = InteractionController::new();
        store.select_elements(&[a]);

        let action = ctl.handle_key(&mut store, &KeyEvent::new("Delete", Modifiers::SHIFT));
        assert_eq!(action, Some(ShortcutAction::DeleteSelection));
        assert!(store.elements().is_empty());
    }

    #[test]
    fn test_undo_redo_keys() {
        let mut store = SceneStore::new();
        plant(&mut store, 0.0, 0.0, 40.0);
        let mut ctl = InteractionController::new();
        ctl.handle_key(&mut store, &KeyEvent::new("z", Modifiers::CTRL));
        assert!(store.elements().is_empty());
        ctl.handle_key(&mut store, &KeyEvent::new("y", Modifiers::CTRL));
        assert_eq!(store.elements().len(), 1);
    }

    #[test]
    fn test_drop_centres_template_and_resets_tool() {
        let mut store = SceneStore::new();
        store.set_active_tool("wall");
        let mut ctl = InteractionController::new();
        let id = ctl
            .handle_drop(&mut store, &DropPayload::tool("booth"), Point::new(200.0, 200.0))
            .unwrap();
        let booth = store.element(id).unwrap();
        assert_eq!(booth.center(), Point::new(200.0, 200.0));
        assert!(matches!(booth.kind, ElementKind::Booth(Booth { .. })));
        assert_eq!(store.active_tool(), SELECT_TOOL);
    }

    #[test]
    fn test_drop_rejects_bad_payloads() {
        let mut store = SceneStore::new();
        let mut ctl = InteractionController::new();
        let html = DropPayload {
            mime: "text/html".into(),
            data: "booth".into(),
        };
        assert!(ctl.handle_drop(&mut store, &html, Point::ZERO).is_none());
        assert!(
            ctl.handle_drop(&mut store, &DropPayload::tool(SELECT_TOOL), Point::ZERO)
                .is_none()
        );
        assert!(store.elements().is_empty());
    }

    #[test]
    fn test_malformed_event_ignored() {
        let mut store = SceneStore::new();
        let mut ctl = InteractionController::new();
        ctl.handle_pointer(&mut store, &down(f64::NAN, 0.0));
        assert!(ctl.is_idle());
    }

    #[test]
    fn test_overlay_handles_for_selection() {
        let mut store = SceneStore::new();
        let a = plant(&mut store, 0.0, 0.0, 40.0);
        let ctl = InteractionController::new();
        assert!(ctl.overlay(&store).handles.is_empty());
        store.select_elements(&[a]);
        let overlay = ctl.overlay(&store);
        assert_eq!(overlay.handles.len(), 9);
        assert_eq!(overlay.selection_bounds, Some(Rect::new(0.0, 0.0, 40.0, 40.0)));
    }
}
