use crate::model::Target;
use std::mem;

/// The two visible targets: the one being typed and the preview of the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetQueue {
    current: Target,
    next: Target,
}

impl TargetQueue {
    pub fn new(current: Target, next: Target) -> Self {
        Self { current, next }
    }

    pub fn current(&self) -> &Target {
        &self.current
    }

    pub fn next(&self) -> &Target {
        &self.next
    }

    /// Moves `next` into the current slot, queues `fresh` behind it and returns the
    /// target that was just completed.
    pub fn promote(&mut self, fresh: Target) -> Target {
        let upcoming = mem::replace(&mut self.next, fresh);
        mem::replace(&mut self.current, upcoming)
    }
}
