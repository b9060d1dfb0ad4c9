//! Work deferred to the next paint frame.

use crate::listbox::FocusTarget;
use std::collections::VecDeque;

/// Focus requests waiting for the next frame.
///
/// Targets are stored, not resolved: an option target is looked up from the
/// context current when the frame runs.
#[derive(Debug, Default)]
pub struct FrameQueue {
    pending: VecDeque<FocusTarget>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, target: FocusTarget) {
        self.pending.push_back(target);
    }

    /// Take everything scheduled so far, oldest first.
    pub fn drain(&mut self) -> Vec<FocusTarget> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
