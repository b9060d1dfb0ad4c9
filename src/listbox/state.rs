//! Listbox interaction states.

use crate::state_enum;

state_enum! {
    /// Where the widget is in its interaction lifecycle.
    ///
    /// Every state except `Idle` has the popover open.
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum ListboxState {
        /// Closed, nothing in progress.
        Idle,
        /// Open, navigating with the pointer.
        Navigating,
        /// Open, navigating with the keyboard.
        NavigatingWithKeys,
        /// Open, typing a search query.
        Searching,
        /// Open, focus inside the popover but not on an option.
        Interacting,
    }
}

impl ListboxState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

impl Default for ListboxState {
    fn default() -> Self {
        Self::Idle
    }
}
