//! Drag-to-open gesture recognizer for the drawer handle.
//!
//! The recognizer is a pure state machine: [`DragState::step`] takes the
//! current state and one [`PointerInput`] and returns the next state plus a
//! [`GestureOutcome`] describing what the layout should do. It never touches
//! the drawer itself.
//!
//! # Protocol
//!
//! ```text
//!            Down (primary, drawer closed)
//!   Idle ───────────────────────────────────▶ Dragging
//!    ▲                                          │  Move (same pointer) → offsets
//!    │   Up / Cancel (same pointer) → Released  │
//!    └──────────────────────────────────────────┤
//!    │   LostCapture → Aborted                  │
//!    └──────────────────────────────────────────┘
//! ```
//!
//! Horizontal offsets only accumulate rightward and are clamped to
//! `[0, max_horizontal]`; vertical offsets are clamped to
//! `[-max_vertical, max_vertical]`.

use serde::{Deserialize, Serialize};

/// Drag thresholds in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Movement at or below this on both axes counts as a tap.
    pub noise_floor: f64,
    /// Horizontal offset at which a release opens the drawer.
    pub open_threshold: f64,
    /// Horizontal clamp.
    pub max_horizontal: f64,
    /// Vertical clamp, applied symmetrically.
    pub max_vertical: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            noise_floor: 6.0,
            open_threshold: 90.0,
            max_horizontal: 150.0,
            max_vertical: 45.0,
        }
    }
}

/// Kind of device behind a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

impl PointerKind {
    /// Maps the DOM `pointerType` string. Unknown types are treated as touch.
    #[must_use]
    pub fn from_dom(pointer_type: &str) -> Self {
        match pointer_type {
            "mouse" => Self::Mouse,
            "pen" => Self::Pen,
            _ => Self::Touch,
        }
    }
}

/// Pointer events delivered to the drawer handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Down {
        pointer_id: i32,
        kind: PointerKind,
        button: i16,
        x: f64,
        y: f64,
    },
    Move {
        pointer_id: i32,
        x: f64,
        y: f64,
    },
    Up {
        pointer_id: i32,
    },
    Cancel {
        pointer_id: i32,
    },
    /// The handle lost pointer capture outside a normal release.
    LostCapture,
}

/// An active drag, owned by the layout for the duration of one gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    pub pointer_id: i32,
    pub start_x: f64,
    pub start_y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl DragGesture {
    /// Movement beyond the noise floor on either axis.
    #[must_use]
    pub fn did_move(&self, config: &GestureConfig) -> bool {
        self.offset_x > config.noise_floor || self.offset_y.abs() > config.noise_floor
    }

    /// Horizontal travel far enough to open the drawer.
    #[must_use]
    pub fn should_open(&self, config: &GestureConfig) -> bool {
        self.offset_x >= config.open_threshold
    }
}

/// Recognizer state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragGesture),
}

/// What the layout should do after a pointer input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Input did not concern the recognizer.
    Ignored,
    /// A drag began; the handle should capture `pointer_id`.
    Started {
        pointer_id: i32,
        /// Touch and pen drags suppress the browser's default scrolling.
        prevent_default: bool,
    },
    /// Offsets changed.
    Moved { offset_x: f64, offset_y: f64 },
    /// The pointer was released or cancelled.
    Released {
        pointer_id: i32,
        did_move: bool,
        should_open: bool,
    },
    /// Capture was lost mid-drag; the drawer state must not change.
    Aborted { pointer_id: i32 },
}

impl DragState {
    /// Current drag, if any.
    #[must_use]
    pub const fn gesture(&self) -> Option<&DragGesture> {
        match self {
            Self::Idle => None,
            Self::Dragging(gesture) => Some(gesture),
        }
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Visual offsets to apply to the handle. Zero when idle.
    #[must_use]
    pub fn offsets(&self) -> (f64, f64) {
        self.gesture().map_or((0.0, 0.0), |g| (g.offset_x, g.offset_y))
    }

    /// Applies one pointer input.
    ///
    /// `drawer_open` is consulted only for `Down`: a drag never starts on an
    /// open drawer. A second pointer going down mid-drag is ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use avsite::app::gesture::{DragState, GestureConfig, GestureOutcome, PointerInput, PointerKind};
    ///
    /// let config = GestureConfig::default();
    /// let (state, _) = DragState::Idle.step(
    ///     PointerInput::Down { pointer_id: 1, kind: PointerKind::Touch, button: 0, x: 10.0, y: 10.0 },
    ///     false,
    ///     &config,
    /// );
    /// let (state, _) = state.step(PointerInput::Move { pointer_id: 1, x: 110.0, y: 12.0 }, false, &config);
    /// let (state, outcome) = state.step(PointerInput::Up { pointer_id: 1 }, false, &config);
    ///
    /// assert_eq!(state, DragState::Idle);
    /// assert_eq!(
    ///     outcome,
    ///     GestureOutcome::Released { pointer_id: 1, did_move: true, should_open: true }
    /// );
    /// ```
    #[must_use]
    pub fn step(self, input: PointerInput, drawer_open: bool, config: &GestureConfig) -> (Self, GestureOutcome) {
        match (self, input) {
            (
                Self::Idle,
                PointerInput::Down {
                    pointer_id,
                    kind,
                    button,
                    x,
                    y,
                },
            ) => {
                if drawer_open || (kind == PointerKind::Mouse && button != 0) {
                    return (self, GestureOutcome::Ignored);
                }
                let gesture = DragGesture {
                    pointer_id,
                    start_x: x,
                    start_y: y,
                    offset_x: 0.0,
                    offset_y: 0.0,
                };
                (
                    Self::Dragging(gesture),
                    GestureOutcome::Started {
                        pointer_id,
                        prevent_default: kind != PointerKind::Mouse,
                    },
                )
            }
            (Self::Dragging(mut gesture), PointerInput::Move { pointer_id, x, y }) if pointer_id == gesture.pointer_id => {
                gesture.offset_x = (x - gesture.start_x).max(0.0).min(config.max_horizontal);
                gesture.offset_y = (y - gesture.start_y).clamp(-config.max_vertical, config.max_vertical);
                (
                    Self::Dragging(gesture),
                    GestureOutcome::Moved {
                        offset_x: gesture.offset_x,
                        offset_y: gesture.offset_y,
                    },
                )
            }
            (
                Self::Dragging(gesture),
                PointerInput::Up { pointer_id } | PointerInput::Cancel { pointer_id },
            ) if pointer_id == gesture.pointer_id => (
                Self::Idle,
                GestureOutcome::Released {
                    pointer_id,
                    did_move: gesture.did_move(config),
                    should_open: gesture.should_open(config),
                },
            ),
            (Self::Dragging(gesture), PointerInput::LostCapture) => (
                Self::Idle,
                GestureOutcome::Aborted {
                    pointer_id: gesture.pointer_id,
                },
            ),
            (state, _) => (state, GestureOutcome::Ignored),
        }
    }
}
