//! Creation controller: drag out a new rectangle with the secondary button.

#[cfg(test)]
#[path = "create_test.rs"]
mod create_test;

use log::debug;

use crate::camera::{Point, ViewContext};
use crate::consts::CREATE_COMMIT_MIN;
use crate::input::Cursor;
use crate::shape::Shape;

/// Creation gesture state. The pending shape exists only while drawing.
#[derive(Debug, Clone)]
enum CreateState {
    /// No creation drag in progress.
    Idle,
    /// Dragging out a new rectangle from `start` (world coordinates).
    Drawing { start: Point, pending: Shape },
}

impl Default for CreateState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Owns the draw-a-new-rectangle interaction.
#[derive(Debug, Default)]
pub struct CreateController {
    state: CreateState,
}

impl CreateController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a creation drag is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, CreateState::Drawing { .. })
    }

    /// The provisional shape being dragged out, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&Shape> {
        match &self.state {
            CreateState::Drawing { pending, .. } => Some(pending),
            CreateState::Idle => None,
        }
    }

    /// Begin a creation drag at `world`, anchoring a zero-sized pending
    /// shape in shape coordinates.
    pub fn begin(&mut self, world: Point, view: &ViewContext) {
        let anchor = view.camera.to_shape(world);
        debug!("creation drag started at ({:.1}, {:.1})", anchor.x, anchor.y);
        self.state = CreateState::Drawing {
            start: world,
            pending: Shape::new(anchor.x, anchor.y, 0.0, 0.0),
        };
    }

    /// Recompute the pending bounds as the axis-aligned box between the drag
    /// start and the current point.
    ///
    /// Returns the crosshair hint while drawing, the default hint otherwise.
    pub fn update(&mut self, world: Point, view: &ViewContext) -> Cursor {
        if let CreateState::Drawing { start, pending } = &mut self.state {
            pending.left = start.x.min(world.x) - view.camera.x;
            pending.top = start.y.min(world.y) - view.camera.y;
            pending.width = (world.x - start.x).abs();
            pending.height = (world.y - start.y).abs();
            return Cursor::Crosshair;
        }
        Cursor::Default
    }

    /// End the drag. Commits and returns the shape when both extents exceed
    /// the minimum threshold; a smaller box is discarded as unintentional.
    pub fn finish(&mut self) -> Option<Shape> {
        let CreateState::Drawing { pending, .. } = std::mem::take(&mut self.state) else {
            return None;
        };
        if pending.width > CREATE_COMMIT_MIN && pending.height > CREATE_COMMIT_MIN {
            debug!("creation committed: {:.0}x{:.0}", pending.width, pending.height);
            Some(pending)
        } else {
            debug!("creation discarded: below minimum extent");
            None
        }
    }

    /// Abort the drag without committing anything.
    pub fn cancel(&mut self) {
        self.state = CreateState::Idle;
    }
}
