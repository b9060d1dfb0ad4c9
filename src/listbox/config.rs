//! Listbox behaviour settings.

use serde::{Deserialize, Serialize};

/// Knobs that change interaction behaviour without changing the table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListboxConfig {
    /// Keyboard navigation past the last option continues at the first,
    /// and vice versa.
    pub wrap_navigation: bool,
}
