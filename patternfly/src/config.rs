//! Options menu configuration.

use serde::{Deserialize, Serialize};

/// Per-menu configuration, fixed at construction.
///
/// Only `disabled` changes afterwards, through [`Disable`](crate::Disable).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Close the list after any item activation.
    pub collapse_on_select: bool,

    /// Align the list with the right edge of the toggle. Visual only.
    pub align_right: bool,

    /// Open the list above the toggle. Visual only.
    pub up: bool,

    /// Start disabled: the toggle rejects opening and items ignore activation.
    pub disabled: bool,
}

impl MenuConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collapse_on_select(mut self, collapse: bool) -> Self {
        self.collapse_on_select = collapse;
        self
    }

    pub fn align_right(mut self, align_right: bool) -> Self {
        self.align_right = align_right;
        self
    }

    pub fn up(mut self, up: bool) -> Self {
        self.up = up;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}
