//! Engine orchestration: routes pointer events, owns the viewport transform,
//! camera offset, and zoom, and drives rendering.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point, ViewContext};
use crate::consts::{MAX_ZOOM, MIN_ZOOM};
use crate::create::CreateController;
use crate::edit::EditController;
use crate::input::{Button, Cursor, HeldButtons};
use crate::render::{self, Scene};
use crate::shape::{Shape, ShapeId, ShapeStore};
use crate::transform::Matrix;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Apply this cursor style to the surface.
    SetCursor(Cursor),
    /// State changed; redraw the scene.
    RenderNeeded,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Engine`] so it can be tested without WASM/browser
/// dependencies.
pub struct EngineCore {
    pub store: ShapeStore,
    pub camera: Camera,
    pub create: CreateController,
    pub edit: EditController,
    zoom: f64,
    viewport: Matrix,
    viewport_set: bool,
    pan_last: Option<Point>,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl EngineCore {
    /// Create a core holding the initial shape list.
    #[must_use]
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self {
            store: ShapeStore::from_shapes(shapes),
            camera: Camera::default(),
            create: CreateController::new(),
            edit: EditController::new(),
            zoom: 1.0,
            viewport: Matrix::identity(),
            viewport_set: false,
            pan_last: None,
            viewport_width: 0.0,
            viewport_height: 0.0,
        }
    }

    // --- Viewport ---

    /// Update viewport dimensions.
    ///
    /// The centering translation is fixed on the first call; later calls
    /// (container resizes) store the new dimensions and keep the translation.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
        if !self.viewport_set {
            self.viewport = Matrix::from_zoom(self.zoom, width / 2.0, height / 2.0);
            self.viewport_set = true;
        }
    }

    /// Set the zoom level, clamped to the supported range, and rebuild the
    /// viewport matrix around the existing translation.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self.viewport = Matrix::from_zoom(self.zoom, self.viewport.e, self.viewport.f);
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn viewport(&self) -> Matrix {
        self.viewport
    }

    /// Convert surface-relative screen coordinates to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        self.viewport.invert().apply(screen)
    }

    fn view(&self) -> ViewContext {
        ViewContext::new(self.camera, self.zoom)
    }

    // --- Queries ---

    /// The currently selected shape id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ShapeId> {
        self.edit.selected()
    }

    /// Whether a middle-button pan is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan_last.is_some()
    }

    // --- Input events ---

    /// Route a pointer-down event by button: primary to the edit controller,
    /// middle to panning, secondary to the creation controller.
    ///
    /// The host is expected to suppress the default context menu so
    /// secondary-button drags reach the engine.
    pub fn on_pointer_down(&mut self, screen: Point, button: Button) -> Vec<Action> {
        let world = self.screen_to_world(screen);
        let view = self.view();
        match button {
            Button::Primary => {
                self.edit.on_pointer_down(world, &self.store, &view);
                vec![Action::RenderNeeded]
            }
            Button::Middle => {
                debug!("pan started");
                self.pan_last = Some(screen);
                Vec::new()
            }
            Button::Secondary => {
                self.create.begin(world, &view);
                Vec::new()
            }
        }
    }

    /// Route a pointer-move event.
    ///
    /// An active creation drag takes priority; then a held-primary edit
    /// gesture; then idle hover over a selection (cursor preview only); then
    /// a middle-button pan, scaled by `1/zoom` so panning feels consistent
    /// across zoom levels. The cursor action is always emitted.
    pub fn on_pointer_move(&mut self, screen: Point, held: HeldButtons) -> Vec<Action> {
        let world = self.screen_to_world(screen);
        let view = self.view();
        let mut actions = Vec::new();
        let mut cursor = Cursor::Default;

        if self.create.is_active() {
            cursor = self.create.update(world, &view);
            actions.push(Action::RenderNeeded);
        } else if held.primary && self.edit.is_active() {
            cursor = self.edit.on_pointer_move(world, &mut self.store, &view);
            actions.push(Action::RenderNeeded);
        } else if held.is_empty() && self.edit.selected().is_some() {
            cursor = self.edit.on_pointer_move(world, &mut self.store, &view);
        } else if held.middle {
            if let Some(last) = self.pan_last {
                self.camera.x += (screen.x - last.x) / self.zoom;
                self.camera.y += (screen.y - last.y) / self.zoom;
                self.pan_last = Some(screen);
                actions.push(Action::RenderNeeded);
            }
        }

        actions.push(Action::SetCursor(cursor));
        actions
    }

    /// Finish the active gesture: commit a pending creation (appending and
    /// selecting the new shape), clear edit and pan state, and reset the
    /// cursor.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if let Some(shape) = self.create.finish() {
            let id = shape.id;
            self.store.push(shape);
            self.edit.set_selected(Some(id));
        }
        self.edit.on_pointer_up();
        self.pan_last = None;
        vec![Action::SetCursor(Cursor::Default), Action::RenderNeeded]
    }

    /// Force-end any gesture without committing (pointer left the surface,
    /// or the host cancelled).
    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        self.create.cancel();
        self.edit.on_pointer_up();
        self.pan_last = None;
        vec![Action::SetCursor(Cursor::Default), Action::RenderNeeded]
    }
}

/// The full canvas engine: wraps [`EngineCore`] and owns the browser canvas
/// element and its 2D context.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Bind an engine to a canvas element with an initial shape list.
    ///
    /// Sizes the drawing buffer to the element's layout size and performs
    /// the initial render.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the element cannot produce a 2D rendering context
    /// or the initial render fails.
    pub fn new(canvas: HtmlCanvasElement, shapes: Vec<Shape>) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut engine = Self { canvas, ctx, core: EngineCore::new(shapes) };
        engine.fit_to_element();
        engine.render()?;
        Ok(engine)
    }

    /// Size the drawing buffer to the element's current layout size.
    fn fit_to_element(&mut self) {
        let width = self.canvas.client_width().max(0);
        let height = self.canvas.client_height().max(0);
        self.canvas.set_width(u32::try_from(width).unwrap_or(0));
        self.canvas.set_height(u32::try_from(height).unwrap_or(0));
        self.core.set_viewport(f64::from(width), f64::from(height));
    }

    /// Container resized: re-read dimensions and redraw.
    ///
    /// # Errors
    ///
    /// Returns `Err` when redrawing fails.
    pub fn on_resize(&mut self) -> Result<(), JsValue> {
        self.fit_to_element();
        self.render()
    }

    /// Route a pointer-down event.
    ///
    /// # Errors
    ///
    /// Returns `Err` when applying the resulting actions fails.
    pub fn on_pointer_down(&mut self, screen: Point, button: Button) -> Result<(), JsValue> {
        let actions = self.core.on_pointer_down(screen, button);
        self.apply(&actions)
    }

    /// Route a pointer-move event.
    ///
    /// # Errors
    ///
    /// Returns `Err` when applying the resulting actions fails.
    pub fn on_pointer_move(&mut self, screen: Point, held: HeldButtons) -> Result<(), JsValue> {
        let actions = self.core.on_pointer_move(screen, held);
        self.apply(&actions)
    }

    /// Route a pointer-up event.
    ///
    /// # Errors
    ///
    /// Returns `Err` when applying the resulting actions fails.
    pub fn on_pointer_up(&mut self) -> Result<(), JsValue> {
        let actions = self.core.on_pointer_up();
        self.apply(&actions)
    }

    /// Force-end any in-progress gesture.
    ///
    /// # Errors
    ///
    /// Returns `Err` when applying the resulting actions fails.
    pub fn on_pointer_cancel(&mut self) -> Result<(), JsValue> {
        let actions = self.core.on_pointer_cancel();
        self.apply(&actions)
    }

    /// Change the zoom level and redraw.
    ///
    /// # Errors
    ///
    /// Returns `Err` when redrawing fails.
    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), JsValue> {
        self.core.set_zoom(zoom);
        self.render()
    }

    fn apply(&mut self, actions: &[Action]) -> Result<(), JsValue> {
        for action in actions {
            match action {
                Action::SetCursor(cursor) => {
                    self.canvas.style().set_property("cursor", cursor.as_css())?;
                }
                Action::RenderNeeded => self.render()?,
            }
        }
        Ok(())
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(
            &self.ctx,
            &Scene {
                store: &self.core.store,
                camera: self.core.camera,
                viewport: self.core.viewport(),
                zoom: self.core.zoom(),
                selected: self.core.selection(),
                pending: self.core.create.pending(),
                width: self.core.viewport_width,
                height: self.core.viewport_height,
            },
        )
    }
}
