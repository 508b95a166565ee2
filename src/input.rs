//! Pointer input model: buttons, held-button state, and cursor hints.
//!
//! The host translates raw DOM pointer events into these types. A
//! pointer-down carries the single [`Button`] that went down; a pointer-move
//! carries the full [`HeldButtons`] set, decoded from the DOM `buttons`
//! bitmask.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Mouse button identifier for a pointer-down event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button.
    Primary,
    /// Middle mouse button (wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

impl Button {
    /// Decode a DOM `MouseEvent.button` code (0 = primary, 1 = middle,
    /// 2 = secondary). Other codes (back/forward buttons) are `None`.
    #[must_use]
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Buttons held during a pointer-move event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldButtons {
    /// Left button is held.
    pub primary: bool,
    /// Middle button is held.
    pub middle: bool,
    /// Right button is held.
    pub secondary: bool,
}

impl HeldButtons {
    /// Decode a DOM `MouseEvent.buttons` bitmask (1 = primary,
    /// 2 = secondary, 4 = middle).
    #[must_use]
    pub fn from_mask(mask: u16) -> Self {
        Self {
            primary: mask & 1 != 0,
            secondary: mask & 2 != 0,
            middle: mask & 4 != 0,
        }
    }

    /// Returns `true` when no button is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.primary && !self.middle && !self.secondary
    }
}

/// Cursor hint surfaced to the host after every pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Arrow cursor; no affordance under the pointer.
    #[default]
    Default,
    /// A creation drag is in progress.
    Crosshair,
    /// Dragging a shape.
    Move,
    /// Resize along the NW–SE diagonal (top-left / bottom-right handles).
    NwseResize,
    /// Resize along the NE–SW diagonal (top-right / bottom-left handles).
    NeswResize,
}

impl Cursor {
    /// The CSS cursor keyword for this hint.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Crosshair => "crosshair",
            Self::Move => "move",
            Self::NwseResize => "nwse-resize",
            Self::NeswResize => "nesw-resize",
        }
    }
}
