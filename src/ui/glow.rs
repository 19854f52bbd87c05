//! Pointer-tracked glow on the page panel.
//!
//! The panel exposes `--glow-x` / `--glow-y` custom properties. While the
//! pointer is over the panel they follow its position relative to the centre,
//! scaled by a per-page factor. Leaving the panel resets both to zero.

use crate::domain::Route;

/// Scale applied to the landing panel.
pub const HOME_GLOW_FACTOR: f64 = 60.0;

/// Scale applied to the contact card.
pub const CONTACT_GLOW_FACTOR: f64 = 65.0;

/// Bounding box of the panel in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Glow offset in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlowOffset {
    pub x: f64,
    pub y: f64,
}

/// Glow factor of the panel mounted for `route`.
#[must_use]
pub const fn glow_factor(route: Route) -> f64 {
    match route {
        Route::Home => HOME_GLOW_FACTOR,
        Route::Contact => CONTACT_GLOW_FACTOR,
    }
}

/// Offset for a pointer at (`x`, `y`) over `rect`.
///
/// An axis with zero (or negative) extent yields zero on that axis.
///
/// ```
/// use avsite::ui::glow::{glow_offset, GlowOffset, PanelRect};
///
/// let rect = PanelRect { left: 100.0, top: 50.0, width: 200.0, height: 100.0 };
/// assert_eq!(glow_offset(300.0, 50.0, rect, 60.0), GlowOffset { x: 30.0, y: -30.0 });
/// ```
#[must_use]
pub fn glow_offset(x: f64, y: f64, rect: PanelRect, factor: f64) -> GlowOffset {
    let axis = |position: f64, origin: f64, extent: f64| {
        if extent > 0.0 {
            ((position - origin) / extent - 0.5) * factor
        } else {
            0.0
        }
    };
    GlowOffset {
        x: axis(x, rect.left, rect.width),
        y: axis(y, rect.top, rect.height),
    }
}
