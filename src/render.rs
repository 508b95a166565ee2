//! Rendering: draws the full scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of engine state and produces pixels — it does
//! not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::{Camera, ViewContext};
use crate::hit;
use crate::shape::{Shape, ShapeId, ShapeStore};
use crate::transform::Matrix;

/// Stroke color for shape outlines.
const SHAPE_STROKE: &str = "#D94B4B";
/// Stroke color for the selection highlight, handles, and pending shape.
const SELECTION_STROKE: &str = "#1E90FF";
/// Fill color for handle squares.
const HANDLE_FILL: &str = "#fff";
/// Stroke color for the camera-origin crosshair.
const AXIS_STROKE: &str = "#B8AC9C";
/// Outline width drawn around the selected shape, in world units; the
/// highlight ring is offset outward by the same amount.
const SELECTION_BORDER: f64 = 2.0;
/// Dash segment length for the pending-shape outline, in screen pixels.
const PENDING_DASH_PX: f64 = 5.0;
/// Half-length of the camera-origin crosshair lines, in world units.
const AXIS_EXTENT: f64 = 1e7;

/// Read-only view of everything the render pass needs.
pub struct Scene<'a> {
    pub store: &'a ShapeStore,
    pub camera: Camera,
    pub viewport: Matrix,
    pub zoom: f64,
    pub selected: Option<ShapeId>,
    pub pending: Option<&'a Shape>,
    /// Viewport width in CSS pixels.
    pub width: f64,
    /// Viewport height in CSS pixels.
    pub height: f64,
}

/// Draw the full scene: crosshair, shape outlines, selection UI, and any
/// in-progress creation.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, scene: &Scene<'_>) -> Result<(), JsValue> {
    ctx.save();

    // Layer 0: clear in device space, then apply the viewport transform.
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, scene.width, scene.height);
    let m = scene.viewport;
    ctx.set_transform(m.a, m.b, m.c, m.d, m.e, m.f)?;

    draw_axes(ctx, scene.camera);

    // Layer 1: shape outlines in insertion order.
    for shape in scene.store.iter() {
        draw_shape(ctx, shape, scene.camera);
    }

    // Layer 2: selection highlight and resize handles.
    if let Some(id) = scene.selected {
        if let Some(shape) = scene.store.get(id) {
            draw_selection(ctx, shape, scene.camera, scene.zoom);
        }
    }

    // Layer 3: provisional shape for an in-progress creation drag.
    if let Some(pending) = scene.pending {
        draw_pending(ctx, pending, scene.camera, scene.zoom)?;
    }

    ctx.restore();
    Ok(())
}

/// Two reference lines through the camera origin, marking the world origin.
fn draw_axes(ctx: &CanvasRenderingContext2d, camera: Camera) {
    ctx.set_stroke_style_str(AXIS_STROKE);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(-AXIS_EXTENT, camera.y);
    ctx.line_to(AXIS_EXTENT, camera.y);
    ctx.move_to(camera.x, -AXIS_EXTENT);
    ctx.line_to(camera.x, AXIS_EXTENT);
    ctx.stroke();
}

fn draw_shape(ctx: &CanvasRenderingContext2d, shape: &Shape, camera: Camera) {
    ctx.set_stroke_style_str(SHAPE_STROKE);
    ctx.set_line_width(1.0);
    ctx.stroke_rect(shape.left + camera.x, shape.top + camera.y, shape.width, shape.height);
}

fn draw_selection(ctx: &CanvasRenderingContext2d, shape: &Shape, camera: Camera, zoom: f64) {
    // Highlight ring offset outward by its own border width.
    ctx.set_stroke_style_str(SELECTION_STROKE);
    ctx.set_line_width(SELECTION_BORDER);
    ctx.stroke_rect(
        shape.left - SELECTION_BORDER + camera.x,
        shape.top - SELECTION_BORDER + camera.y,
        shape.width + SELECTION_BORDER * 2.0,
        shape.height + SELECTION_BORDER * 2.0,
    );

    draw_handles(ctx, shape, camera, zoom);
}

/// Four filled-and-outlined squares of side `HANDLE_SIZE_PX / zoom` centered
/// on the shape's corners.
fn draw_handles(ctx: &CanvasRenderingContext2d, shape: &Shape, camera: Camera, zoom: f64) {
    let view = ViewContext::new(camera, zoom);
    let side = view.handle_size();

    ctx.set_fill_style_str(HANDLE_FILL);
    ctx.set_stroke_style_str(SELECTION_STROKE);
    ctx.set_line_width(1.0 / zoom);

    for pos in hit::handle_positions(shape, &view) {
        ctx.fill_rect(pos.x - side / 2.0, pos.y - side / 2.0, side, side);
        ctx.stroke_rect(pos.x - side / 2.0, pos.y - side / 2.0, side, side);
    }
}

/// Dashed outline for the shape being dragged out.
fn draw_pending(
    ctx: &CanvasRenderingContext2d,
    shape: &Shape,
    camera: Camera,
    zoom: f64,
) -> Result<(), JsValue> {
    let dash_world = PENDING_DASH_PX / zoom;
    let dash = js_sys::Array::new();
    dash.push(&dash_world.into());
    dash.push(&dash_world.into());
    ctx.set_line_dash(&dash)?;

    ctx.set_stroke_style_str(SELECTION_STROKE);
    ctx.set_line_width(SELECTION_BORDER);
    ctx.stroke_rect(shape.left + camera.x, shape.top + camera.y, shape.width, shape.height);

    ctx.set_line_dash(&js_sys::Array::new())?;
    Ok(())
}
