//! Two-state navigation between the menu and the shop form.
//!
//! ```text
//!          Shop
//!   Menu ───────▶ ShopForm
//!     ▲              │
//!     └──────────────┘
//!          Back
//! ```
//!
//! The initial state is [`ViewState::Menu`]. Transitions are synchronous and
//! only ever triggered by the user.

use std::fmt;

use thiserror::Error;
use tracing::debug;

/// Which of the two mutually exclusive panels is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Menu,
    ShopForm,
}

impl fmt::Display for ViewState {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Menu => f.write_str("menu"),
            Self::ShopForm => f.write_str("shop form"),
        }
    }
}

/// User actions that move between views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Shop,
    Back,
}

impl fmt::Display for NavAction {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Shop => f.write_str("Shop"),
            Self::Back => f.write_str("Back"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("'{action}' is not available from the {from}")]
    InvalidTransition { from: ViewState, action: NavAction },
}

/// Navigation state machine.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: ViewState,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ViewState {
        self.current
    }

    /// Applies an action and returns the new view.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::InvalidTransition`] when the action does
    /// not apply to the current view. The state is left unchanged.
    pub fn apply(
        &mut self,
        action: NavAction,
    ) -> Result<ViewState, NavigationError> {
        let next = match (self.current, action) {
            (ViewState::Menu, NavAction::Shop) => ViewState::ShopForm,
            (ViewState::ShopForm, NavAction::Back) => ViewState::Menu,
            (from, action) => return Err(NavigationError::InvalidTransition { from, action }),
        };
        debug!(from = %self.current, to = %next, %action, "view transition");
        self.current = next;
        Ok(next)
    }
}
