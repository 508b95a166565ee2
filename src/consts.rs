//! Shared numeric constants for the rectboard crate.

// ── Handles ─────────────────────────────────────────────────────

/// Screen-space side length of a corner resize handle, in pixels.
///
/// Divided by the current zoom wherever handle geometry is needed in world
/// units, so handles keep a constant visual size at every zoom level.
pub const HANDLE_SIZE_PX: f64 = 10.0;

// ── Shape limits ────────────────────────────────────────────────

/// Smallest width or height a shape may reach during a resize.
pub const MIN_SHAPE_SIZE: f64 = 10.0;

/// A creation drag must exceed this extent on both axes to commit.
pub const CREATE_COMMIT_MIN: f64 = 5.0;

// ── Zoom ────────────────────────────────────────────────────────

/// Lower zoom clamp. Keeps the viewport matrix invertible.
pub const MIN_ZOOM: f64 = 0.1;

/// Upper zoom clamp.
pub const MAX_ZOOM: f64 = 8.0;
