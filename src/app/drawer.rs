//! Navigation drawer open/close state machine.

/// Drawer visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

/// Inputs that can move the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawerEvent {
    /// Header toggle clicked (and not suppressed).
    ToggleClick,
    OverlayClick,
    Escape,
    NavLinkClick,
    /// A drag released past the open threshold.
    DragOpen,
    /// A drag moved but released short of the open threshold.
    DragClose,
}

impl DrawerState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Returns the state after `event`.
    ///
    /// # Example
    ///
    /// ```
    /// use avsite::app::drawer::{DrawerEvent, DrawerState};
    ///
    /// let state = DrawerState::Closed.apply(DrawerEvent::ToggleClick);
    /// assert_eq!(state, DrawerState::Open);
    /// assert_eq!(state.apply(DrawerEvent::Escape), DrawerState::Closed);
    /// ```
    #[must_use]
    pub const fn apply(self, event: DrawerEvent) -> Self {
        match event {
            DrawerEvent::ToggleClick => match self {
                Self::Closed => Self::Open,
                Self::Open => Self::Closed,
            },
            DrawerEvent::DragOpen => Self::Open,
            DrawerEvent::OverlayClick | DrawerEvent::Escape | DrawerEvent::NavLinkClick | DrawerEvent::DragClose => {
                Self::Closed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_events_are_idempotent() {
        for event in [
            DrawerEvent::OverlayClick,
            DrawerEvent::Escape,
            DrawerEvent::NavLinkClick,
            DrawerEvent::DragClose,
        ] {
            assert_eq!(DrawerState::Open.apply(event), DrawerState::Closed);
            assert_eq!(DrawerState::Closed.apply(event), DrawerState::Closed);
        }
    }

    #[test]
    fn drag_open_always_opens() {
        assert_eq!(DrawerState::Closed.apply(DrawerEvent::DragOpen), DrawerState::Open);
        assert_eq!(DrawerState::Open.apply(DrawerEvent::DragOpen), DrawerState::Open);
    }

    #[test]
    fn toggle_flips() {
        assert!(DrawerState::Closed.apply(DrawerEvent::ToggleClick).is_open());
        assert!(!DrawerState::Open.apply(DrawerEvent::ToggleClick).is_open());
    }
}
