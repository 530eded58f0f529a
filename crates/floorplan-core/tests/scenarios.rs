//! End-to-end editing sessions driven through the controller.

use floorplan_core::elements::{Booth, BoothStatus, ElementKind, Plant};
use floorplan_core::{
    DropPayload, ElementDraft, FloorPlan, InteractionController, KeyEvent, Modifiers, MouseButton,
    PointerEvent, SceneStore, snap_value,
};
use kurbo::{Point, Rect, Vec2};
use serde_json::json;

fn press(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Down {
        position: Point::new(x, y),
        button: MouseButton::Left,
        modifiers: Modifiers::NONE,
    }
}

fn drag_to(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Move {
        position: Point::new(x, y),
    }
}

fn release(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Up {
        position: Point::new(x, y),
        button: MouseButton::Left,
    }
}

fn run(ctl: &mut InteractionController, store: &mut SceneStore, events: &[PointerEvent]) {
    for event in events {
        ctl.handle_pointer(store, event);
    }
}

#[test]
fn test_add_then_duplicate_booth() {
    let mut store = SceneStore::new();
    let id = store
        .add_element_json(json!({
            "type": "booth",
            "x": 0.0, "y": 0.0, "width": 100.0, "height": 100.0,
            "number": "B-1", "status": "available",
            "dimensions": {"imperial": "8'x8'", "metric": "3m x 3m"}
        }))
        .unwrap();
    assert_eq!(store.selected_ids(), &[id]);

    let copies = store.duplicate_elements(&[id]);
    assert_eq!(store.elements().len(), 2);
    let copy = store.element(copies[0]).unwrap();
    assert_eq!(copy.bounds(), Rect::new(20.0, 20.0, 120.0, 120.0));
    assert_eq!(store.selected_ids(), copies.as_slice());
}

#[test]
fn test_layout_session_with_undo() {
    let mut store = SceneStore::new();
    let mut ctl = InteractionController::new();

    store.set_active_tool("booth");
    run(&mut ctl, &mut store, &[press(0.0, 0.0), drag_to(50.0, 50.0), release(100.0, 100.0)]);
    run(&mut ctl, &mut store, &[press(200.0, 0.0), release(300.0, 100.0)]);
    assert_eq!(store.booth_count(), 2);

    store.set_active_tool(floorplan_core::SELECT_TOOL);
    run(&mut ctl, &mut store, &[press(-10.0, -10.0), release(350.0, 150.0)]);
    assert_eq!(store.selected_ids().len(), 2);

    ctl.handle_key(&mut store, &KeyEvent::plain("Delete"));
    assert!(store.elements().is_empty());

    ctl.handle_key(&mut store, &KeyEvent::new("z", Modifiers::CTRL));
    assert_eq!(store.elements().len(), 2);
    // Selection is not restored by undo.
    assert!(store.selected_ids().is_empty());

    store.generate_booth_numbers(100, "");
    let numbers: Vec<String> = store
        .elements()
        .iter()
        .filter_map(|e| e.as_booth().map(|b| b.number.clone()))
        .collect();
    assert_eq!(numbers, vec!["100", "101"]);
}

#[test]
fn test_drop_then_drag_then_save_and_load() {
    let mut store = SceneStore::new();
    let mut ctl = InteractionController::new();

    let id = ctl
        .handle_drop(&mut store, &DropPayload::tool("plant"), Point::new(100.0, 100.0))
        .unwrap();
    let before = store.element(id).unwrap().clone();
    assert!(matches!(before.kind, ElementKind::Plant(Plant { .. })));

    let grab = before.center();
    run(
        &mut ctl,
        &mut store,
        &[press(grab.x, grab.y), drag_to(grab.x + 41.0, grab.y), release(grab.x + 41.0, grab.y)],
    );
    let after = store.element(id).unwrap();
    assert!((after.x - snap_value(before.x + 41.0, 10.0)).abs() < f64::EPSILON);
    assert!((after.y - snap_value(before.y, 10.0)).abs() < f64::EPSILON);

    let json = store.snapshot().to_json().unwrap();
    let mut reloaded = SceneStore::new();
    reloaded.load_floor_plan(FloorPlan::from_json(&json).unwrap());
    assert_eq!(reloaded.elements(), store.elements());
    assert!(!reloaded.can_undo());
}

#[test]
fn test_zoomed_view_maps_pointer_to_canvas() {
    let mut store = SceneStore::new();
    let mut ctl = InteractionController::new();
    for _ in 0..3 {
        ctl.handle_pointer(
            &mut store,
            &PointerEvent::Scroll {
                position: Point::new(400.0, 300.0),
                delta: Vec2::new(0.0, -100.0),
            },
        );
    }
    // The canvas point under the cursor stays put.
    let under_cursor = store.camera().screen_to_world(Point::new(400.0, 300.0));
    assert!((under_cursor.x - 400.0).abs() < 1e-9);
    assert!((under_cursor.y - 300.0).abs() < 1e-9);

    store.set_active_tool("booth");
    let start = store.camera().world_to_screen(Point::new(0.0, 0.0));
    let end = store.camera().world_to_screen(Point::new(60.0, 60.0));
    run(&mut ctl, &mut store, &[press(start.x, start.y), release(end.x, end.y)]);
    let booth = store.elements().iter().next().unwrap();
    assert!(booth.x.abs() < 1e-9);
    assert!((booth.width - 60.0).abs() < 1e-9);
}

#[test]
fn test_status_change_survives_move() {
    let mut store = SceneStore::new();
    let id = store.add_element(ElementDraft::new(
        ElementKind::Booth(Booth::default()),
        Rect::new(0.0, 0.0, 100.0, 100.0),
    ));
    store.update_booth_status(id, BoothStatus::Sold).unwrap();

    let mut ctl = InteractionController::new();
    run(&mut ctl, &mut store, &[press(50.0, 50.0), drag_to(150.0, 50.0), release(150.0, 50.0)]);

    let booth = store.element(id).unwrap();
    assert!((booth.x - 100.0).abs() < f64::EPSILON);
    assert_eq!(booth.as_booth().unwrap().status, BoothStatus::Sold);
}
