//! Hit-testing pointer positions against shapes and their resize handles.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Point, ViewContext};
use crate::shape::{Shape, ShapeId, ShapeStore};

/// Corner identity of a resize handle, held fixed for a whole resize gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleCorner {
    Nw,
    Ne,
    Sw,
    Se,
}

/// Which part of a shape was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    Handle(HandleCorner),
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub id: ShapeId,
    pub part: HitPart,
}

/// World-space positions of the four corner handles, camera-shifted.
///
/// Order: NW, NE, SW, SE.
#[must_use]
pub fn handle_positions(shape: &Shape, view: &ViewContext) -> [Point; 4] {
    let left = shape.left + view.camera.x;
    let top = shape.top + view.camera.y;
    let right = left + shape.width;
    let bottom = top + shape.height;
    [
        Point::new(left, top),
        Point::new(right, top),
        Point::new(left, bottom),
        Point::new(right, bottom),
    ]
}

/// Test the pointer against a shape's corner handles.
///
/// The hit zone extends `HANDLE_SIZE_PX / zoom` world units from each corner
/// on both axes, so the affordance keeps a constant screen size.
#[must_use]
pub fn handle_at(world: Point, shape: &Shape, view: &ViewContext) -> Option<HandleCorner> {
    let slop = view.handle_size();
    let [nw, ne, sw, se] = handle_positions(shape, view);
    let corners = [
        (nw, HandleCorner::Nw),
        (ne, HandleCorner::Ne),
        (sw, HandleCorner::Sw),
        (se, HandleCorner::Se),
    ];
    corners
        .into_iter()
        .find(|(p, _)| (world.x - p.x).abs() < slop && (world.y - p.y).abs() < slop)
        .map(|(_, corner)| corner)
}

/// Find the first shape, in insertion order, whose bounds strictly contain
/// the pointer. A point exactly on an edge is a miss.
#[must_use]
pub fn shape_at(world: Point, store: &ShapeStore, view: &ViewContext) -> Option<ShapeId> {
    store
        .iter()
        .find(|shape| body_contains(world, shape, view))
        .map(|shape| shape.id)
}

fn body_contains(world: Point, shape: &Shape, view: &ViewContext) -> bool {
    let left = shape.left + view.camera.x;
    let top = shape.top + view.camera.y;
    world.y > top
        && world.y < top + shape.height
        && world.x > left
        && world.x < left + shape.width
}

/// Full hit test: the selected shape's handles take priority over any body.
#[must_use]
pub fn hit_test(
    world: Point,
    store: &ShapeStore,
    view: &ViewContext,
    selected: Option<ShapeId>,
) -> Option<Hit> {
    if let Some(id) = selected {
        if let Some(shape) = store.get(id) {
            if let Some(corner) = handle_at(world, shape, view) {
                return Some(Hit { id, part: HitPart::Handle(corner) });
            }
        }
    }
    shape_at(world, store, view).map(|id| Hit { id, part: HitPart::Body })
}
