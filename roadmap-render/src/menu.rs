//! Mobile sidebar visibility.

use serde::Serialize;

/// Visibility of the mobile sidebar.
///
/// Starts [`MenuState::Closed`]; the only transition is [`MenuState::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuState {
    /// Sidebar hidden.
    #[default]
    Closed,
    /// Sidebar shown.
    Open,
}

impl MenuState {
    /// The opposite state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Flip the state in place.
    pub const fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Returns `true` when the sidebar is shown.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}
