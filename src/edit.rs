//! Selection and edit controller: click to select, drag to move, and
//! corner-handle resize.

#[cfg(test)]
#[path = "edit_test.rs"]
mod edit_test;

use log::debug;

use crate::camera::{Point, ViewContext};
use crate::consts::MIN_SHAPE_SIZE;
use crate::hit::{self, HandleCorner, Hit, HitPart};
use crate::input::Cursor;
use crate::shape::{Shape, ShapeId, ShapeStore};

/// Geometry of the selected shape at the moment a resize began.
#[derive(Debug, Clone, Copy)]
struct ResizeStart {
    pointer: Point,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

/// Edit gesture state. Dragging and resizing are mutually exclusive by
/// construction.
#[derive(Debug, Clone, Copy)]
enum EditState {
    Idle,
    /// Moving the selected shape; the offset is pointer-to-origin at grab
    /// time, in shape coordinates.
    Dragging { offset_x: f64, offset_y: f64 },
    /// Resizing the selected shape from one corner handle.
    Resizing { corner: HandleCorner, start: ResizeStart },
}

impl Default for EditState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Owns selection, drag-to-move, and handle-based resize.
#[derive(Debug, Default)]
pub struct EditController {
    selected: Option<ShapeId>,
    state: EditState,
}

impl EditController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected shape id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    /// Replace the selection (used when a newly created shape commits).
    pub fn set_selected(&mut self, id: Option<ShapeId>) {
        self.selected = id;
    }

    /// Whether a drag or resize gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self.state, EditState::Idle)
    }

    /// Route a primary-button press.
    ///
    /// A handle hit on the current selection starts a resize without
    /// re-running selection; otherwise the first shape containing the point
    /// is selected and a drag begins. An empty click clears the selection.
    /// Returns whether the press landed on a shape or handle.
    pub fn on_pointer_down(&mut self, world: Point, store: &ShapeStore, view: &ViewContext) -> bool {
        match hit::hit_test(world, store, view, self.selected) {
            Some(Hit { id, part: HitPart::Handle(corner) }) => {
                let Some(shape) = store.get(id) else {
                    return false;
                };
                debug!("resize started on {corner:?} handle");
                self.state = EditState::Resizing {
                    corner,
                    start: ResizeStart {
                        pointer: world,
                        left: shape.left,
                        top: shape.top,
                        width: shape.width,
                        height: shape.height,
                    },
                };
                true
            }
            Some(Hit { id, part: HitPart::Body }) => {
                let Some(shape) = store.get(id) else {
                    return false;
                };
                self.selected = Some(id);
                self.state = EditState::Dragging {
                    offset_x: world.x - shape.left - view.camera.x,
                    offset_y: world.y - shape.top - view.camera.y,
                };
                true
            }
            None => {
                self.selected = None;
                false
            }
        }
    }

    /// Advance the active gesture, or preview the resize affordance when
    /// idle with a selection. Returns the cursor hint for the host.
    pub fn on_pointer_move(
        &mut self,
        world: Point,
        store: &mut ShapeStore,
        view: &ViewContext,
    ) -> Cursor {
        match self.state {
            EditState::Idle => self.hover_cursor(world, store, view),
            EditState::Resizing { corner, start } => {
                if let Some(shape) = self.selected.and_then(|id| store.get_mut(id)) {
                    apply_resize(shape, corner, start, world);
                }
                cursor_for_handle(Some(corner))
            }
            EditState::Dragging { offset_x, offset_y } => {
                if let Some(shape) = self.selected.and_then(|id| store.get_mut(id)) {
                    shape.left = world.x - offset_x - view.camera.x;
                    shape.top = world.y - offset_y - view.camera.y;
                }
                Cursor::Move
            }
        }
    }

    /// Clear any active drag/resize. Idempotent; the selection survives.
    pub fn on_pointer_up(&mut self) {
        self.state = EditState::Idle;
    }

    fn hover_cursor(&self, world: Point, store: &ShapeStore, view: &ViewContext) -> Cursor {
        let corner = self
            .selected
            .and_then(|id| store.get(id))
            .and_then(|shape| hit::handle_at(world, shape, view));
        cursor_for_handle(corner)
    }
}

/// Apply a handle-specific resize delta.
///
/// The minimum-size clamp happens before the anchored corner is recomputed,
/// so clamping changes which edge wins rather than letting the shape invert
/// or shrink past the floor.
fn apply_resize(shape: &mut Shape, corner: HandleCorner, start: ResizeStart, world: Point) {
    let dx = world.x - start.pointer.x;
    let dy = world.y - start.pointer.y;

    match corner {
        HandleCorner::Nw => {
            shape.width = (start.width - dx).max(MIN_SHAPE_SIZE);
            shape.height = (start.height - dy).max(MIN_SHAPE_SIZE);
            shape.left = start.left + (start.width - shape.width);
            shape.top = start.top + (start.height - shape.height);
        }
        HandleCorner::Ne => {
            shape.width = (start.width + dx).max(MIN_SHAPE_SIZE);
            shape.height = (start.height - dy).max(MIN_SHAPE_SIZE);
            shape.top = start.top + (start.height - shape.height);
        }
        HandleCorner::Sw => {
            shape.width = (start.width - dx).max(MIN_SHAPE_SIZE);
            shape.height = (start.height + dy).max(MIN_SHAPE_SIZE);
            shape.left = start.left + (start.width - shape.width);
        }
        HandleCorner::Se => {
            shape.width = (start.width + dx).max(MIN_SHAPE_SIZE);
            shape.height = (start.height + dy).max(MIN_SHAPE_SIZE);
        }
    }
}

/// Directional cursor for a corner handle.
fn cursor_for_handle(corner: Option<HandleCorner>) -> Cursor {
    match corner {
        Some(HandleCorner::Nw | HandleCorner::Se) => Cursor::NwseResize,
        Some(HandleCorner::Ne | HandleCorner::Sw) => Cursor::NeswResize,
        None => Cursor::Default,
    }
}
