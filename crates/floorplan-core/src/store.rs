//! The scene store: authoritative editor state and every mutation on it.
//!
//! All element, flooring and background mutators record exactly one undo
//! step before they change anything. Selection, tool, view and grid setters
//! are not versioned.

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::camera::Camera;
use crate::config::{CanvasSize, EditorConfig};
use crate::elements::{
    BoothPatch, BoothStatus, Element, ElementDraft, ElementId, ElementKind, ElementList,
    ElementPatch, KindPatch,
};
use crate::error::{SceneError, SceneResult};
use crate::history::{History, Snapshot};
use crate::snap::{GridConfig, intersects};
use crate::tools::SELECT_TOOL;

/// A reference image drawn beneath the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundImage {
    pub url: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_background_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub locked: bool,
}

fn default_background_opacity() -> f64 {
    1.0
}

impl BackgroundImage {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackgroundImagePatch {
    pub url: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub opacity: Option<f64>,
    pub locked: Option<bool>,
}

impl BackgroundImage {
    pub fn apply(&mut self, patch: &BackgroundImagePatch) {
        if let Some(url) = &patch.url {
            self.url = url.clone();
        }
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
        if let Some(opacity) = patch.opacity {
            self.opacity = opacity.clamp(0.0, 1.0);
        }
        if let Some(locked) = patch.locked {
            self.locked = locked;
        }
    }
}

/// Floor-covering shapes drawn in their own band beneath the elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flooring {
    pub enabled: bool,
    pub opacity: f64,
    #[serde(default)]
    pub elements: ElementList,
}

impl Default for Flooring {
    fn default() -> Self {
        Self {
            enabled: false,
            opacity: 0.8,
            elements: ElementList::new(),
        }
    }
}

/// Persisted editor state. History is never part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FloorPlan {
    pub elements: ElementList,
    pub selected_ids: Vec<ElementId>,
    pub active_tool: String,
    pub grid: GridConfig,
    pub zoom: f64,
    pub offset: Vec2,
    pub canvas_size: CanvasSize,
    pub flooring: Flooring,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<BackgroundImage>,
}

impl Default for FloorPlan {
    fn default() -> Self {
        Self {
            elements: ElementList::new(),
            selected_ids: Vec::new(),
            active_tool: SELECT_TOOL.to_string(),
            grid: GridConfig::default(),
            zoom: 1.0,
            offset: Vec2::ZERO,
            canvas_size: CanvasSize::default(),
            flooring: Flooring::default(),
            background_image: None,
        }
    }
}

impl FloorPlan {
    pub fn from_json(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Read-only view handed to exporters.
#[derive(Debug, Clone, Copy)]
pub struct ExportView<'a> {
    pub elements: &'a ElementList,
    pub canvas_size: CanvasSize,
}

/// Owner of the element collection, selection, view state and history.
#[derive(Debug, Clone)]
pub struct SceneStore {
    config: EditorConfig,
    elements: ElementList,
    selected_ids: Vec<ElementId>,
    active_tool: String,
    camera: Camera,
    grid: GridConfig,
    canvas_size: CanvasSize,
    flooring: Flooring,
    background_image: Option<BackgroundImage>,
    history: History,
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneStore {
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    /// Build a store from `config`. An invalid config is logged and replaced by the defaults.
    pub fn with_config(config: EditorConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                log::warn!("{err}; using default editor config");
                EditorConfig::default()
            }
        };
        Self {
            elements: ElementList::new(),
            selected_ids: Vec::new(),
            active_tool: SELECT_TOOL.to_string(),
            camera: Camera::with_bounds(config.min_zoom, config.max_zoom),
            grid: config.grid,
            canvas_size: config.canvas_size,
            flooring: Flooring {
                enabled: config.flooring_enabled,
                opacity: config.flooring_opacity,
                elements: ElementList::new(),
            },
            background_image: None,
            history: History::new(config.history_limit),
            config,
        }
    }

    // --- queries ---

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn elements(&self) -> &ElementList {
        &self.elements
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Elements in paint order: layer ascending, ties in collection order.
    pub fn elements_by_layer(&self) -> Vec<&Element> {
        let mut sorted: Vec<&Element> = self.elements.iter().collect();
        sorted.sort_by_key(|e| e.layer);
        sorted
    }

    /// Topmost element under a canvas point.
    pub fn element_at(&self, point: Point) -> Option<&Element> {
        self.elements_by_layer()
            .into_iter()
            .rev()
            .find(|e| e.hit_test(point))
    }

    /// Ids of elements whose box strictly overlaps `rect`, in collection order.
    pub fn elements_in_rect(&self, rect: Rect) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|e| intersects(rect, e.bounds()))
            .map(|e| e.id)
            .collect()
    }

    pub fn selected_ids(&self) -> &[ElementId] {
        &self.selected_ids
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected_ids.contains(&id)
    }

    /// Selected elements in selection order.
    pub fn selected_elements(&self) -> Vec<&Element> {
        self.selected_ids
            .iter()
            .filter_map(|id| self.elements.get(*id))
            .collect()
    }

    /// Union of the selected elements' boxes.
    pub fn selection_bounds(&self) -> Option<Rect> {
        self.selected_elements()
            .into_iter()
            .map(Element::bounds)
            .reduce(|acc, r| acc.union(r))
    }

    pub fn active_tool(&self) -> &str {
        &self.active_tool
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn zoom(&self) -> f64 {
        self.camera.zoom
    }

    pub fn offset(&self) -> Vec2 {
        self.camera.offset
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas_size
    }

    pub fn flooring(&self) -> &Flooring {
        &self.flooring
    }

    pub fn background_image(&self) -> Option<&BackgroundImage> {
        self.background_image.as_ref()
    }

    pub fn booth_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e.kind, ElementKind::Booth(_)))
            .count()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn export_view(&self) -> ExportView<'_> {
        ExportView {
            elements: &self.elements,
            canvas_size: self.canvas_size,
        }
    }

    /// Persistable copy of the current state.
    pub fn snapshot(&self) -> FloorPlan {
        FloorPlan {
            elements: self.elements.clone(),
            selected_ids: self.selected_ids.clone(),
            active_tool: self.active_tool.clone(),
            grid: self.grid,
            zoom: self.camera.zoom,
            offset: self.camera.offset,
            canvas_size: self.canvas_size,
            flooring: self.flooring.clone(),
            background_image: self.background_image.clone(),
        }
    }

    // --- history ---

    fn versioned(&self) -> Snapshot {
        Snapshot {
            elements: self.elements.clone(),
            flooring: self.flooring.elements.clone(),
            background_image: self.background_image.clone(),
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.elements = snapshot.elements;
        self.flooring.elements = snapshot.flooring;
        self.background_image = snapshot.background_image;

        let elements = &self.elements;
        self.selected_ids.retain(|id| elements.contains(*id));
        self.sync_selection_flags();
    }

    fn record(&mut self) {
        let snapshot = self.versioned();
        self.history.push(snapshot);
    }

    pub fn undo(&mut self) {
        let current = self.versioned();
        if let Some(previous) = self.history.undo(current) {
            self.restore(previous);
            log::debug!("undo (remaining={})", self.history.undo_len());
        }
    }

    pub fn redo(&mut self) {
        let current = self.versioned();
        if let Some(next) = self.history.redo(current) {
            self.restore(next);
            log::debug!("redo (remaining={})", self.history.redo_len());
        }
    }

    // --- element mutators ---

    /// Add an element, select exactly it, and return its id.
    pub fn add_element(&mut self, draft: ElementDraft) -> ElementId {
        self.record();
        let id = Uuid::new_v4();
        self.elements.push(draft.into_element(id));
        self.set_selection(vec![id]);
        id
    }

    /// Add from an untyped payload. Invalid payloads change nothing.
    pub fn add_element_json(&mut self, payload: Value) -> SceneResult<ElementId> {
        match ElementDraft::from_json(payload) {
            Ok(draft) => Ok(self.add_element(draft)),
            Err(err) => {
                log::error!("rejected element payload: {err}");
                Err(err)
            }
        }
    }

    fn check_patch(list: &ElementList, id: ElementId, patch: &ElementPatch) -> SceneResult<()> {
        if let (Some(element), Some(kind)) = (list.get(id), &patch.kind) {
            if kind.tag() != element.kind.tag() {
                let err = SceneError::VariantMismatch {
                    element: element.kind.tag(),
                    patch: kind.tag(),
                };
                log::warn!("update of {id} rejected: {err}");
                return Err(err);
            }
        }
        Ok(())
    }

    fn apply_patch(list: &mut ElementList, id: ElementId, patch: &ElementPatch, min_size: f64) {
        if let Some(Err(err)) = list.update(id, |e| e.apply(patch, min_size)) {
            log::warn!("update of {id} failed: {err}");
        }
    }

    /// Merge a patch into one element.
    ///
    /// A missing id is a no-op that still records an undo step. A variant
    /// patch for the wrong kind is rejected without recording anything.
    pub fn update_element(&mut self, id: ElementId, patch: &ElementPatch) -> SceneResult<()> {
        Self::check_patch(&self.elements, id, patch)?;
        self.record();
        Self::apply_patch(&mut self.elements, id, patch, self.config.min_element_size);
        Ok(())
    }

    /// Apply several patches as one undo step. Any invalid patch rejects the batch.
    pub fn update_elements(&mut self, batch: &[(ElementId, ElementPatch)]) -> SceneResult<()> {
        for (id, patch) in batch {
            Self::check_patch(&self.elements, *id, patch)?;
        }
        self.record();
        for (id, patch) in batch {
            Self::apply_patch(&mut self.elements, *id, patch, self.config.min_element_size);
        }
        Ok(())
    }

    pub fn update_booth_status(&mut self, id: ElementId, status: BoothStatus) -> SceneResult<()> {
        let patch = ElementPatch::kind(KindPatch::Booth(BoothPatch {
            status: Some(status),
            ..BoothPatch::default()
        }));
        self.update_element(id, &patch)
    }

    /// Remove elements and drop them from the selection. Unknown ids are ignored.
    pub fn delete_elements(&mut self, ids: &[ElementId]) {
        self.record();
        let removed = self.elements.retain(|e| !ids.contains(&e.id));
        self.selected_ids.retain(|id| !ids.contains(id));
        log::debug!("deleted {removed} element(s)");
    }

    /// Copy the matching elements, offset by the configured delta, and select the copies.
    pub fn duplicate_elements(&mut self, ids: &[ElementId]) -> Vec<ElementId> {
        self.record();
        let offset = self.config.duplicate_offset;
        let copies: Vec<Element> = self
            .elements
            .iter()
            .filter(|e| ids.contains(&e.id))
            .map(|e| e.duplicate(offset))
            .collect();

        let new_ids: Vec<ElementId> = copies.iter().map(|e| e.id).collect();
        for copy in copies {
            self.elements.push(copy);
        }
        self.set_selection(new_ids.clone());
        new_ids
    }

    /// Number every booth in collection order: `{prefix}{start}`, `{prefix}{start + 1}`, ...
    pub fn generate_booth_numbers(&mut self, start: i64, prefix: &str) {
        self.record();
        let mut next = start;
        self.elements.update_where(
            |e| matches!(e.kind, ElementKind::Booth(_)),
            |e| {
                if let Some(booth) = e.as_booth_mut() {
                    booth.number = format!("{prefix}{next}");
                    next += 1;
                }
            },
        );
    }

    // --- layers ---

    pub fn bring_forward(&mut self, ids: &[ElementId]) {
        self.record();
        self.elements.update_where(
            |e| ids.contains(&e.id),
            |e| e.layer = e.layer.saturating_add(1),
        );
    }

    /// Lower by one, never below zero.
    pub fn send_backward(&mut self, ids: &[ElementId]) {
        self.record();
        self.elements.update_where(
            |e| ids.contains(&e.id) && e.layer > 0,
            |e| e.layer -= 1,
        );
    }

    pub fn bring_to_front(&mut self, ids: &[ElementId]) {
        self.record();
        if let Some(max) = self.elements.iter().map(|e| e.layer).max() {
            self.elements
                .update_where(|e| ids.contains(&e.id), |e| e.layer = max.saturating_add(1));
        }
    }

    pub fn send_to_back(&mut self, ids: &[ElementId]) {
        self.record();
        if let Some(min) = self.elements.iter().map(|e| e.layer).min() {
            self.elements
                .update_where(|e| ids.contains(&e.id), |e| e.layer = min.saturating_sub(1));
        }
    }

    // --- selection ---

    fn sync_selection_flags(&mut self) {
        let selected = &self.selected_ids;
        self.elements.update_where(
            |e| e.selected != selected.contains(&e.id),
            |e| e.selected = !e.selected,
        );
    }

    fn set_selection(&mut self, ids: Vec<ElementId>) {
        self.selected_ids = ids;
        self.sync_selection_flags();
    }

    /// Replace the selection verbatim.
    pub fn select_elements(&mut self, ids: &[ElementId]) {
        self.set_selection(ids.to_vec());
    }

    /// Add or remove one element from the selection.
    pub fn toggle_selection(&mut self, id: ElementId) {
        let mut ids = self.selected_ids.clone();
        match ids.iter().position(|s| *s == id) {
            Some(index) => {
                ids.remove(index);
            }
            None => ids.push(id),
        }
        self.set_selection(ids);
    }

    pub fn select_all(&mut self) {
        let ids = self.elements.ids();
        self.set_selection(ids);
    }

    pub fn deselect_all(&mut self) {
        self.set_selection(Vec::new());
    }

    // --- view and tool setters (never versioned) ---

    pub fn set_active_tool(&mut self, tool: &str) {
        self.active_tool = tool.to_string();
    }

    /// Set zoom, clamped to the configured bounds.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.camera.set_zoom(zoom);
    }

    pub fn set_offset(&mut self, x: f64, y: f64) {
        self.camera.offset = Vec2::new(x, y);
    }

    pub fn pan_by(&mut self, delta: Vec2) {
        self.camera.pan(delta);
    }

    /// Zoom about a screen point by one wheel notch.
    pub fn wheel_zoom(&mut self, screen_point: Point, delta_y: f64) {
        let step = self.config.wheel_zoom_step;
        self.camera.wheel_zoom(screen_point, delta_y, step);
    }

    /// Update the grid; omitted fields keep their current value.
    pub fn set_grid(
        &mut self,
        enabled: bool,
        size: Option<f64>,
        snap: Option<bool>,
        opacity: Option<f64>,
    ) {
        self.grid.enabled = enabled;
        match size {
            Some(size) if GridConfig::is_valid_size(size) => self.grid.size = size,
            Some(size) => log::warn!("ignoring invalid grid size {size}"),
            None => {}
        }
        if let Some(snap) = snap {
            self.grid.snap = snap;
        }
        if let Some(opacity) = opacity.filter(|o| o.is_finite()) {
            self.grid.opacity = opacity.clamp(0.0, 1.0);
        }
    }

    // --- background image ---

    pub fn set_background_image(&mut self, image: BackgroundImage) {
        self.record();
        self.background_image = Some(image);
    }

    /// Patch the background. Without one this only records an undo step.
    pub fn update_background_image(&mut self, patch: &BackgroundImagePatch) {
        self.record();
        if let Some(image) = &mut self.background_image {
            image.apply(patch);
        }
    }

    pub fn remove_background_image(&mut self) {
        self.record();
        self.background_image = None;
    }

    // --- flooring ---

    pub fn set_flooring_enabled(&mut self, enabled: bool) {
        self.flooring.enabled = enabled;
    }

    pub fn set_flooring_opacity(&mut self, opacity: f64) {
        self.flooring.opacity = opacity.clamp(0.0, 1.0);
    }

    /// Add a flooring shape. Only shape drafts are accepted; flooring is never selected.
    pub fn add_flooring_element(&mut self, draft: ElementDraft) -> SceneResult<ElementId> {
        if !matches!(draft.kind, ElementKind::Shape(_)) {
            let err = SceneError::VariantMismatch {
                element: "shape",
                patch: draft.kind.tag(),
            };
            log::warn!("flooring rejected: {err}");
            return Err(err);
        }
        self.record();
        let id = Uuid::new_v4();
        self.flooring.elements.push(draft.into_element(id));
        Ok(id)
    }

    pub fn update_flooring_element(&mut self, id: ElementId, patch: &ElementPatch) -> SceneResult<()> {
        Self::check_patch(&self.flooring.elements, id, patch)?;
        self.record();
        Self::apply_patch(&mut self.flooring.elements, id, patch, self.config.min_element_size);
        Ok(())
    }

    pub fn delete_flooring_element(&mut self, id: ElementId) {
        self.record();
        self.flooring.elements.retain(|e| e.id != id);
    }

    // --- whole-plan operations ---

    /// Replace all state with `plan` and forget history.
    ///
    /// Out-of-range grid and canvas values are repaired and selected ids
    /// without a matching element are dropped.
    pub fn load_floor_plan(&mut self, plan: FloorPlan) {
        self.elements = plan.elements;
        self.active_tool = plan.active_tool;
        self.grid = plan.grid.sanitized();
        self.camera.offset = plan.offset;
        self.camera.set_zoom(plan.zoom);
        self.canvas_size = if plan.canvas_size.is_valid() {
            plan.canvas_size
        } else {
            log::warn!("canvas size {:?} out of range, using default", plan.canvas_size);
            self.config.canvas_size
        };
        self.flooring = plan.flooring;
        self.background_image = plan.background_image;
        self.history.clear();

        let mut selected = plan.selected_ids;
        let before = selected.len();
        selected.retain(|id| self.elements.contains(*id));
        if selected.len() != before {
            log::warn!("dropped {} unknown selected id(s)", before - selected.len());
        }
        self.set_selection(selected);
        log::info!(
            "loaded floor plan ({} elements, {} flooring)",
            self.elements.len(),
            self.flooring.elements.len()
        );
    }

    /// Restore the configured defaults and forget history.
    pub fn reset_canvas(&mut self) {
        let config = self.config.clone();
        *self = Self::with_config(config);
        log::info!("canvas reset");
    }
}
