//! Mobile overlay menu state.
//!
//! ```text
//!            toggle
//!   ┌────────┐ ───▶ ┌──────┐
//!   │ Closed │      │ Open │
//!   └────────┘ ◀─── └──────┘
//!     ▲   │   toggle / navigate
//!     └───┘
//!    navigate
//! ```
//!
//! There are no timers: the overlay stays open until it is toggled or a
//! navigation happens.

/// Visibility of the mobile navigation overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Inputs that drive the menu state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The menu button was clicked.
    Toggle,
    /// A navigation action happened (valid target or not).
    Navigate,
}

impl MenuState {
    /// Transition function of the state machine.
    pub const fn next(self, event: MenuEvent) -> Self {
        match (self, event) {
            (Self::Closed, MenuEvent::Toggle) => Self::Open,
            (Self::Open, MenuEvent::Toggle) => Self::Closed,
            (_, MenuEvent::Navigate) => Self::Closed,
        }
    }

    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Single owner of [`MenuState`].
///
/// Every change goes through [`MenuController::apply`], so the state machine
/// above is the only way the flag moves.
#[derive(Debug, Clone, Default)]
pub struct MenuController {
    state: MenuState,
}

impl MenuController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub const fn state(&self) -> MenuState {
        self.state
    }

    #[inline]
    pub const fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Apply an event. Returns `true` if the state changed.
    pub fn apply(&mut self, event: MenuEvent) -> bool {
        let next = self.state.next(event);
        let changed = next != self.state;
        self.state = next;
        changed
    }

    /// Flip open/closed and return the new state.
    pub fn toggle(&mut self) -> MenuState {
        self.apply(MenuEvent::Toggle);
        self.state
    }

    /// Close the overlay as a consequence of navigation.
    ///
    /// Returns `true` if the menu was open.
    pub fn close(&mut self) -> bool {
        self.apply(MenuEvent::Navigate)
    }

    /// Back to the initial state (page unmount).
    pub fn reset(&mut self) {
        self.state = MenuState::Closed;
    }
}

// ============================================================================
// Tests
// ============================================================================
